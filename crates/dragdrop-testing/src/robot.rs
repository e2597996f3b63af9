//! Robot-style driver for drag-to-reorder lists.
//!
//! The robot owns a [`DragDropListState`] bound to a [`FakeLazyColumn`] and
//! feeds it pointer events stamped with a simulated clock, so long presses
//! and frame-by-frame auto-scroll can be scripted without waiting.
//!
//! # Example
//!
//! ```
//! use dragdrop_testing::{DragRobot, FakeLazyColumn};
//!
//! let column = FakeLazyColumn::uniform(5, 100.0, 500.0);
//! let mut robot = DragRobot::new(column.clone());
//!
//! assert!(robot.pick_up(0));
//! robot.drag_by(150.0);
//! robot.release();
//!
//! assert_eq!(robot.moves(), vec![(0, 1)]);
//! assert_eq!(column.keys(), vec![1, 0, 2, 3, 4]);
//! ```

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use dragdrop_foundation::{
    ConfigError, DragDropConfig, DragDropListState, LazyListLayoutSource, PointerEvent,
};
use dragdrop_ui_graphics::{Orientation, Point};
use web_time::{Duration, Instant};

use crate::FakeLazyColumn;

/// Simulated time between two pointer events or frames.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Cross-axis coordinate every scripted pointer event uses.
const CROSS_AXIS_POSITION: f32 = 10.0;

/// Scripts pointer gestures against a [`FakeLazyColumn`].
///
/// Every move reported by the controller is applied to the column and
/// recorded, so tests can assert on both the callbacks and the final order.
pub struct DragRobot {
    state: DragDropListState<FakeLazyColumn>,
    column: FakeLazyColumn,
    orientation: Orientation,
    long_press_timeout: Duration,
    now: Instant,
    pointer: Point,
    moves: Rc<RefCell<Vec<(usize, usize)>>>,
    finished: Rc<Cell<usize>>,
}

impl DragRobot {
    /// Robot with the default vertical configuration.
    pub fn new(column: FakeLazyColumn) -> Self {
        let moves = Rc::new(RefCell::new(Vec::new()));
        let finished = Rc::new(Cell::new(0));
        let state = DragDropListState::new(column.clone(), apply_moves(&column, &moves));
        Self::from_parts(state, column, DragDropConfig::default(), moves, finished)
    }

    pub fn with_config(
        column: FakeLazyColumn,
        config: DragDropConfig,
    ) -> Result<Self, ConfigError> {
        let moves = Rc::new(RefCell::new(Vec::new()));
        let finished = Rc::new(Cell::new(0));
        let state = DragDropListState::with_config(
            column.clone(),
            config.clone(),
            apply_moves(&column, &moves),
        )?;
        Ok(Self::from_parts(state, column, config, moves, finished))
    }

    fn from_parts(
        state: DragDropListState<FakeLazyColumn>,
        column: FakeLazyColumn,
        config: DragDropConfig,
        moves: Rc<RefCell<Vec<(usize, usize)>>>,
        finished: Rc<Cell<usize>>,
    ) -> Self {
        let counter = Rc::clone(&finished);
        let state = state.with_on_drag_finished(move || counter.set(counter.get() + 1));
        Self {
            state,
            column,
            orientation: config.orientation,
            long_press_timeout: config.long_press_timeout,
            now: Instant::now(),
            pointer: Point::ZERO,
            moves,
            finished,
        }
    }

    pub fn column(&self) -> &FakeLazyColumn {
        &self.column
    }

    pub fn state(&self) -> &DragDropListState<FakeLazyColumn> {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut DragDropListState<FakeLazyColumn> {
        &mut self.state
    }

    /// Every `(from, to)` the controller emitted, in order.
    pub fn moves(&self) -> Vec<(usize, usize)> {
        self.moves.borrow().clone()
    }

    /// How many times `on_drag_finished` fired.
    pub fn finished_count(&self) -> usize {
        self.finished.get()
    }

    pub fn is_dragging(&self) -> bool {
        self.state.controller().is_dragging()
    }

    pub fn dragged_item_index(&self) -> Option<usize> {
        self.state.controller().dragged_item_index()
    }

    /// Current pointer position along the main axis.
    pub fn pointer_position(&self) -> f32 {
        self.orientation.main_axis(self.pointer)
    }

    /// Puts the pointer down at `main_axis` without waiting.
    pub fn press(&mut self, main_axis: f32) -> bool {
        self.pointer = self.orientation.point(main_axis, CROSS_AXIS_POSITION);
        let event = PointerEvent::down(self.pointer, self.now);
        self.state.handle_pointer_event(&event)
    }

    /// Lets `duration` pass with the pointer held still.
    pub fn hold(&mut self, duration: Duration) -> bool {
        self.now += duration;
        self.state.poll(self.now)
    }

    /// Presses at `main_axis` and holds for the long-press timeout.
    ///
    /// Returns whether an item was picked up.
    pub fn long_press(&mut self, main_axis: f32) -> bool {
        self.press(main_axis);
        self.hold(self.long_press_timeout);
        self.is_dragging()
    }

    /// Long-presses the centre of the visible item `index`.
    pub fn pick_up(&mut self, index: usize) -> bool {
        let layout = self.column.layout_info();
        let Some(item) = layout.visible_item_for(index) else {
            log::warn!("item {index} is not visible; nothing to pick up");
            return false;
        };
        let centre = item.offset + item.size / 2.0;
        self.long_press(centre)
    }

    /// Moves the pointer by `delta` along the main axis, one frame later.
    pub fn drag_by(&mut self, delta: f32) -> bool {
        self.now += FRAME_INTERVAL;
        self.pointer += self.orientation.point(delta, 0.0);
        let event = PointerEvent::moved(self.pointer, self.now);
        self.state.handle_pointer_event(&event)
    }

    /// Splits `total` into `steps` equal moves.
    pub fn drag_in_steps(&mut self, total: f32, steps: usize) {
        let steps = steps.max(1);
        let step = total / steps as f32;
        for _ in 0..steps {
            self.drag_by(step);
        }
    }

    /// Lifts the pointer where it is.
    pub fn release(&mut self) -> bool {
        self.now += FRAME_INTERVAL;
        let event = PointerEvent::up(self.pointer, self.now);
        self.state.handle_pointer_event(&event)
    }

    /// Delivers a platform cancel for the pointer.
    pub fn cancel(&mut self) -> bool {
        self.now += FRAME_INTERVAL;
        let event = PointerEvent::cancel(self.pointer, self.now);
        self.state.handle_pointer_event(&event)
    }

    /// Advances one frame: polls the gesture detector and runs the column's
    /// scroll animations. Returns whether the column scrolled.
    pub fn frame(&mut self) -> bool {
        self.now += FRAME_INTERVAL;
        self.state.poll(self.now);
        self.column.advance_frame()
    }

    /// Runs frames until no scroll is pending, up to `max_frames`.
    pub fn wait_for_idle(&mut self, max_frames: usize) {
        for _ in 0..max_frames {
            if self.column.pending_scrolls() == 0 {
                break;
            }
            self.frame();
        }
    }
}

impl std::fmt::Debug for DragRobot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DragRobot")
            .field("state", &self.state)
            .field("orientation", &self.orientation)
            .field("pointer", &self.pointer)
            .field("moves", &self.moves.borrow())
            .finish_non_exhaustive()
    }
}

fn apply_moves(
    column: &FakeLazyColumn,
    moves: &Rc<RefCell<Vec<(usize, usize)>>>,
) -> impl FnMut(usize, usize) + 'static {
    let column = column.clone();
    let moves = Rc::clone(moves);
    move |from, to| {
        column.move_item(from, to);
        moves.borrow_mut().push((from, to));
    }
}
