//! Glue between the controller and a rendering-layer list.

use dragdrop_ui_graphics::Point;
use web_time::Instant;

use super::{AutoScrollJob, AutoScrollSlot, ConfigError, DragDropConfig, DragReorderController};
use crate::gesture_constants::DRAGGED_ITEM_Z_INDEX;
use crate::input::{DragGestureDetector, DragGestureEvent, PointerEvent};
use crate::lazy::LazyListLayoutSource;

/// How a list item should be drawn this frame.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct ItemAppearance {
    /// Main-axis translation away from the item's layout slot.
    pub translation: f32,
    /// Draw order; the dragged item sits above its neighbours.
    pub z_index: f32,
    pub is_dragged: bool,
}

/// Drag-and-drop state for one list.
///
/// Reads layout from and issues scrolls to the list handle `L`, feeds raw
/// pointer events through the long-press detector and keeps at most one
/// auto-scroll job running.
///
/// ```rust,ignore
/// let mut state = DragDropListState::new(list.clone(), move |from, to| {
///     list.move_item(from, to);
/// });
/// for event in pointer_events {
///     state.handle_pointer_event(&event);
/// }
/// state.poll(Instant::now());
/// let appearance = state.item_appearance(index);
/// ```
pub struct DragDropListState<L: LazyListLayoutSource> {
    list: L,
    controller: DragReorderController,
    detector: DragGestureDetector,
    auto_scroll: AutoScrollSlot,
}

impl<L: LazyListLayoutSource> DragDropListState<L> {
    pub fn new(list: L, on_move: impl FnMut(usize, usize) + 'static) -> Self {
        let controller = DragReorderController::new(on_move);
        Self::from_controller(list, controller)
    }

    pub fn with_config(
        list: L,
        config: DragDropConfig,
        on_move: impl FnMut(usize, usize) + 'static,
    ) -> Result<Self, ConfigError> {
        let controller = DragReorderController::with_config(config, on_move)?;
        Ok(Self::from_controller(list, controller))
    }

    /// Wraps an existing controller.
    pub fn from_controller(list: L, controller: DragReorderController) -> Self {
        let config = controller.config();
        let detector = DragGestureDetector::new(config.long_press_timeout, config.touch_slop);
        Self {
            list,
            controller,
            detector,
            auto_scroll: AutoScrollSlot::new(),
        }
    }

    pub fn with_on_drag_finished(mut self, on_drag_finished: impl FnMut() + 'static) -> Self {
        self.controller.set_on_drag_finished(on_drag_finished);
        self
    }

    pub fn list(&self) -> &L {
        &self.list
    }

    pub fn controller(&self) -> &DragReorderController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut DragReorderController {
        &mut self.controller
    }

    pub fn on_drag_start(&mut self, position: Point) -> bool {
        let layout = self.list.layout_info();
        self.controller.on_drag_start(&layout, position)
    }

    /// Forwards the drag and, unless a previous auto-scroll is still running,
    /// starts scrolling when the dragged item is past a viewport edge.
    pub fn on_drag(&mut self, delta: Point) -> Option<(usize, usize)> {
        let layout = self.list.layout_info();
        let moved = self.controller.on_drag(&layout, delta);

        if self.auto_scroll.is_busy() {
            return moved;
        }
        let overscroll = self.controller.check_overscroll(&layout);
        if overscroll != 0.0 {
            let list = &self.list;
            self.auto_scroll.launch(|| {
                log::trace!("auto-scrolling by {overscroll}");
                list.scroll_by(overscroll)
            });
        }
        moved
    }

    /// Ends the drag. A pointer still held is forgotten, so the next press
    /// starts a fresh gesture.
    pub fn on_drag_end(&mut self) {
        self.detector.reset();
        self.finish_drag();
    }

    /// Cancels the drag and forgets any pointer still held.
    pub fn on_drag_cancel(&mut self) {
        self.detector.reset();
        self.abandon_drag();
    }

    fn finish_drag(&mut self) {
        self.auto_scroll.cancel();
        self.controller.on_drag_end();
    }

    fn abandon_drag(&mut self) {
        self.auto_scroll.cancel();
        self.controller.on_drag_cancel();
    }

    /// Routes a raw pointer event through the long-press detector.
    ///
    /// Returns whether the event produced any drag callback.
    pub fn handle_pointer_event(&mut self, event: &PointerEvent) -> bool {
        let events = self.detector.on_pointer_event(event);
        let handled = !events.is_empty();
        for gesture in events {
            self.dispatch(gesture);
        }
        handled
    }

    /// Lets a held press turn into a drag. Call once per frame.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.detector.poll(now) {
            Some(gesture) => {
                self.dispatch(gesture);
                true
            }
            None => false,
        }
    }

    /// The last auto-scroll job issued, running or not.
    pub fn auto_scroll_job(&self) -> Option<&AutoScrollJob> {
        self.auto_scroll.current()
    }

    pub fn is_auto_scrolling(&self) -> bool {
        self.auto_scroll.is_busy()
    }

    pub fn displacement(&self) -> Option<f32> {
        self.controller.displacement(&self.list.layout_info())
    }

    pub fn item_appearance(&self, index: usize) -> ItemAppearance {
        if self.controller.dragged_item_index() != Some(index) {
            return ItemAppearance::default();
        }
        ItemAppearance {
            translation: self.displacement().unwrap_or(0.0),
            z_index: DRAGGED_ITEM_Z_INDEX,
            is_dragged: true,
        }
    }

    fn dispatch(&mut self, gesture: DragGestureEvent) {
        match gesture {
            DragGestureEvent::Start(position) => {
                self.on_drag_start(position);
            }
            DragGestureEvent::Drag(delta) => {
                self.on_drag(delta);
            }
            DragGestureEvent::End => self.finish_drag(),
            DragGestureEvent::Cancel => self.abandon_drag(),
        }
    }
}

impl<L: LazyListLayoutSource> std::fmt::Debug for DragDropListState<L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DragDropListState")
            .field("controller", &self.controller)
            .field("detector", &self.detector)
            .field("auto_scroll", &self.auto_scroll)
            .finish_non_exhaustive()
    }
}
