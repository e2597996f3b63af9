//! The drag-to-reorder state machine.
//!
//! [`DragReorderController`] owns the drag session and nothing else. Every
//! operation is handed the layout of the current frame, so the controller
//! never holds on to the rendering layer and never scrolls by itself.

use std::rc::Rc;

use dragdrop_ui_graphics::{Orientation, Point};

use super::{CancelPolicy, ConfigError, DragDropConfig, DragSession, ObserverId, SessionObservers};
use crate::lazy::{LazyListItemInfo, LazyListLayoutInfo};

type MoveCallback = Box<dyn FnMut(usize, usize)>;
type FinishedCallback = Box<dyn FnMut()>;

/// Converts drag gestures over a lazy list into reorder callbacks.
///
/// Lifecycle per gesture: [`on_drag_start`](Self::on_drag_start), any number
/// of [`on_drag`](Self::on_drag), then [`on_drag_end`](Self::on_drag_end) or
/// [`on_drag_cancel`](Self::on_drag_cancel). Calls out of order are ignored.
///
/// ```rust,ignore
/// let mut controller = DragReorderController::new(move |from, to| {
///     move_item(&mut items.borrow_mut(), from, to);
/// })
/// .with_on_drag_finished(|| log::info!("persist order"));
///
/// controller.on_drag_start(&layout, pointer);
/// controller.on_drag(&layout, delta);
/// let scroll = controller.check_overscroll(&layout);
/// ```
pub struct DragReorderController {
    config: DragDropConfig,
    session: Option<DragSession>,
    on_move: MoveCallback,
    on_drag_finished: Option<FinishedCallback>,
    observers: SessionObservers,
}

impl DragReorderController {
    /// Creates a controller with the default configuration.
    pub fn new(on_move: impl FnMut(usize, usize) + 'static) -> Self {
        Self::from_parts(DragDropConfig::default(), Box::new(on_move))
    }

    /// Creates a controller after validating `config`.
    pub fn with_config(
        config: DragDropConfig,
        on_move: impl FnMut(usize, usize) + 'static,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_parts(config, Box::new(on_move)))
    }

    fn from_parts(config: DragDropConfig, on_move: MoveCallback) -> Self {
        Self {
            config,
            session: None,
            on_move,
            on_drag_finished: None,
            observers: SessionObservers::new(),
        }
    }

    /// Sets the callback fired once when a drag ends normally (not on cancel).
    pub fn with_on_drag_finished(mut self, on_drag_finished: impl FnMut() + 'static) -> Self {
        self.set_on_drag_finished(on_drag_finished);
        self
    }

    pub fn set_on_drag_finished(&mut self, on_drag_finished: impl FnMut() + 'static) {
        self.on_drag_finished = Some(Box::new(on_drag_finished));
    }

    pub fn config(&self) -> &DragDropConfig {
        &self.config
    }

    pub fn orientation(&self) -> Orientation {
        self.config.orientation
    }

    /// Current drag snapshot, `None` when no drag is active.
    pub fn session(&self) -> Option<DragSession> {
        self.session
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Absolute index of the element being dragged.
    pub fn dragged_item_index(&self) -> Option<usize> {
        self.session.map(|session| session.dragged_item_index())
    }

    /// Offset to draw the dragged element at, relative to its layout slot.
    pub fn displacement(&self, layout: &LazyListLayoutInfo) -> Option<f32> {
        self.session?.displacement(layout)
    }

    /// Registers a callback invoked with every new session snapshot.
    pub fn add_session_observer(
        &mut self,
        observer: Rc<dyn Fn(Option<DragSession>)>,
    ) -> ObserverId {
        self.observers.add(observer)
    }

    pub fn remove_session_observer(&mut self, id: ObserverId) -> bool {
        self.observers.remove(id)
    }

    /// Picks up the visible item under `position`.
    ///
    /// Returns `false` and leaves the state alone when nothing is under the
    /// pointer (a gap, the area past the last item, an empty viewport).
    pub fn on_drag_start(&mut self, layout: &LazyListLayoutInfo, position: Point) -> bool {
        let main_axis = self.config.orientation.main_axis(position);
        let Some(item) = layout.item_at(main_axis).copied() else {
            log::trace!("drag start at {main_axis} hit no visible item");
            return false;
        };
        if let Some(previous) = self.session {
            log::debug!(
                "drag start while dragging item {}; replacing session",
                previous.dragged_item_index()
            );
        }
        log::debug!(
            "drag started on item {} (key {}) at offset {}",
            item.index,
            item.key,
            item.offset
        );
        self.replace_session(Some(DragSession::start(item)));
        true
    }

    /// Applies a pointer movement. Returns the `(from, to)` move it emitted.
    pub fn on_drag(
        &mut self,
        layout: &LazyListLayoutInfo,
        delta: Point,
    ) -> Option<(usize, usize)> {
        let main_axis = self.config.orientation.main_axis(delta);
        self.on_drag_by(layout, main_axis)
    }

    /// [`on_drag`](Self::on_drag) with a delta already projected on the main axis.
    pub fn on_drag_by(
        &mut self,
        layout: &LazyListLayoutInfo,
        delta: f32,
    ) -> Option<(usize, usize)> {
        let session = self.session?;
        if !delta.is_finite() {
            log::warn!("ignoring non-finite drag delta {delta}");
            return None;
        }
        let session = session.with_delta(delta);

        let Some(target) = find_swap_target(&session, layout) else {
            self.replace_session(Some(session));
            return None;
        };

        let from = session.dragged_item_index();
        let to = target.index;
        log::debug!("drag moves item {from} -> {to}");
        (self.on_move)(from, to);
        self.replace_session(Some(session.with_dragged_index(to)));
        Some((from, to))
    }

    /// Suggested scroll-by amount to reveal content past the viewport edge.
    ///
    /// Uses the span of the item as first picked up plus the total drag
    /// distance, so the answer depends on how far the pointer went and not on
    /// how many moves happened on the way. Positive scrolls forward, negative
    /// backward, zero means the dragged item is inside the viewport.
    pub fn check_overscroll(&self, layout: &LazyListLayoutInfo) -> f32 {
        let Some(session) = self.session else {
            return 0.0;
        };
        let delta = session.accumulated_delta();
        let overflow = if delta > 0.0 {
            (session.projected_end() - layout.viewport_end_offset).max(0.0)
        } else if delta < 0.0 {
            (session.projected_start() - layout.viewport_start_offset).min(0.0)
        } else {
            0.0
        };
        match self.config.max_auto_scroll_step {
            Some(step) => overflow.clamp(-step, step),
            None => overflow,
        }
    }

    /// Ends the drag, keeping every move made, and fires `on_drag_finished`.
    ///
    /// Calling it without an active drag does nothing.
    pub fn on_drag_end(&mut self) {
        let Some(session) = self.session else {
            return;
        };
        log::debug!(
            "drag ended: item {} -> {}",
            session.origin_index(),
            session.dragged_item_index()
        );
        self.replace_session(None);
        if let Some(on_drag_finished) = self.on_drag_finished.as_mut() {
            on_drag_finished();
        }
    }

    /// Abandons the drag. `on_drag_finished` is not fired; with
    /// [`CancelPolicy::RollBack`] the dragged element is moved back to where
    /// it started.
    pub fn on_drag_cancel(&mut self) {
        let Some(session) = self.session else {
            return;
        };
        let current = session.dragged_item_index();
        let origin = session.origin_index();
        if self.config.cancel_policy == CancelPolicy::RollBack && current != origin {
            log::debug!("drag cancelled; rolling item back {current} -> {origin}");
            (self.on_move)(current, origin);
        } else {
            log::debug!("drag cancelled on item {current}");
        }
        self.replace_session(None);
    }

    fn replace_session(&mut self, session: Option<DragSession>) {
        self.session = session;
        self.observers.notify(session);
    }
}

impl std::fmt::Debug for DragReorderController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DragReorderController")
            .field("config", &self.config)
            .field("session", &self.session)
            .field("observers", &self.observers)
            .finish_non_exhaustive()
    }
}

/// Finds the item the dragged element should take the place of.
///
/// Candidates are the visible items, other than the element itself, whose
/// span overlaps the projected span. Moving forward, the projected trailing
/// edge must pass the candidate's trailing edge; moving backward, the
/// projected leading edge must pass the candidate's leading edge. Requiring the
/// far edge to be crossed keeps the element from flipping back and forth when
/// it overlaps two neighbours.
fn find_swap_target(
    session: &DragSession,
    layout: &LazyListLayoutInfo,
) -> Option<LazyListItemInfo> {
    let hovered = layout.visible_item_for(session.dragged_item_index())?;
    let start = session.projected_start();
    let end = session.projected_end();
    let forward = start - hovered.offset > 0.0;

    layout
        .visible_items_info
        .iter()
        .filter(|item| item.index != hovered.index && item.overlaps(start, end))
        .find(|item| {
            if forward {
                end > item.offset_end()
            } else {
                start < item.offset
            }
        })
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    fn uniform_layout(count: usize, size: f32, viewport: f32) -> LazyListLayoutInfo {
        let items = (0..count)
            .map(|i| LazyListItemInfo::new(i, i as u64, i as f32 * size, size))
            .collect();
        LazyListLayoutInfo::new(items, count, viewport)
    }

    fn sized_layout(sizes: &[f32], viewport: f32) -> LazyListLayoutInfo {
        let mut offset = 0.0;
        let items = sizes
            .iter()
            .enumerate()
            .map(|(i, &size)| {
                let item = LazyListItemInfo::new(i, i as u64, offset, size);
                offset += size;
                item
            })
            .collect();
        LazyListLayoutInfo::new(items, sizes.len(), viewport)
    }

    fn recording_controller() -> (DragReorderController, Rc<RefCell<Vec<(usize, usize)>>>) {
        let moves = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&moves);
        let controller = DragReorderController::new(move |from, to| {
            sink.borrow_mut().push((from, to));
        });
        (controller, moves)
    }

    fn down(y: f32) -> Point {
        Point::new(0.0, y)
    }

    #[test]
    fn no_session_before_start() {
        let (controller, _) = recording_controller();
        assert_eq!(controller.dragged_item_index(), None);
        assert!(!controller.is_dragging());
        assert_eq!(controller.check_overscroll(&uniform_layout(5, 100.0, 500.0)), 0.0);
    }

    #[test]
    fn start_picks_item_under_pointer() {
        let layout = uniform_layout(5, 100.0, 500.0);
        let (mut controller, _) = recording_controller();
        assert!(controller.on_drag_start(&layout, down(250.0)));
        let session = controller.session().expect("session started");
        assert_eq!(session.dragged_item_index(), 2);
        assert_eq!(session.initial_item(), layout.visible_items_info[2]);
        assert_eq!(session.accumulated_delta(), 0.0);
    }

    #[test]
    fn start_on_item_boundary_picks_following_item() {
        let layout = uniform_layout(5, 100.0, 500.0);
        let (mut controller, _) = recording_controller();
        controller.on_drag_start(&layout, down(100.0));
        assert_eq!(controller.dragged_item_index(), Some(1));
    }

    #[test]
    fn start_in_gap_leaves_session_empty() {
        let layout = uniform_layout(3, 100.0, 500.0);
        let (mut controller, _) = recording_controller();
        assert!(!controller.on_drag_start(&layout, down(420.0)));
        assert_eq!(controller.session(), None);
    }

    #[test]
    fn start_on_empty_viewport_is_noop() {
        let (mut controller, moves) = recording_controller();
        let empty = LazyListLayoutInfo::default();
        assert!(!controller.on_drag_start(&empty, down(10.0)));
        assert_eq!(controller.on_drag(&empty, down(50.0)), None);
        assert_eq!(controller.check_overscroll(&empty), 0.0);
        assert!(moves.borrow().is_empty());
    }

    #[test]
    fn drag_without_start_is_ignored() {
        let layout = uniform_layout(5, 100.0, 500.0);
        let (mut controller, moves) = recording_controller();
        assert_eq!(controller.on_drag(&layout, down(150.0)), None);
        assert!(moves.borrow().is_empty());
        assert_eq!(controller.session(), None);
    }

    #[test]
    fn drag_inside_own_slot_never_moves() {
        let layout = uniform_layout(5, 100.0, 500.0);
        let (mut controller, moves) = recording_controller();
        controller.on_drag_start(&layout, down(250.0));
        for delta in [30.0, 40.0, -60.0, -30.0, 15.0, -45.0, 50.0] {
            controller.on_drag(&layout, down(delta));
        }
        assert!(moves.borrow().is_empty());
        assert_eq!(controller.dragged_item_index(), Some(2));
        assert_eq!(controller.session().map(|s| s.accumulated_delta()), Some(0.0));
    }

    #[test]
    fn single_jump_of_150_moves_once_to_neighbour() {
        let layout = uniform_layout(5, 100.0, 500.0);
        let (mut controller, moves) = recording_controller();
        controller.on_drag_start(&layout, down(50.0));
        assert_eq!(controller.on_drag(&layout, down(150.0)), Some((0, 1)));
        assert_eq!(*moves.borrow(), vec![(0, 1)]);
        assert_eq!(controller.dragged_item_index(), Some(1));
    }

    #[test]
    fn incremental_drag_of_150_moves_once_when_trailing_edge_passes() {
        let layout = uniform_layout(5, 100.0, 500.0);
        let (mut controller, moves) = recording_controller();
        controller.on_drag_start(&layout, down(50.0));
        let mut first_move_at = None;
        for step in 1..=15 {
            if controller.on_drag(&layout, down(10.0)).is_some() && first_move_at.is_none() {
                first_move_at = Some(step * 10);
            }
        }
        assert_eq!(*moves.borrow(), vec![(0, 1)]);
        // Trailing edge 100 + delta must exceed item 1's trailing edge at 200.
        assert_eq!(first_move_at, Some(110));
    }

    #[test]
    fn large_jump_moves_directly_to_farthest_passed_item() {
        let layout = uniform_layout(5, 100.0, 500.0);
        let (mut controller, moves) = recording_controller();
        controller.on_drag_start(&layout, down(50.0));
        assert_eq!(controller.on_drag(&layout, down(350.0)), Some((0, 3)));
        assert_eq!(moves.borrow().len(), 1);
    }

    #[test]
    fn backward_drag_moves_when_leading_edge_passes() {
        let layout = uniform_layout(5, 100.0, 500.0);
        let (mut controller, moves) = recording_controller();
        controller.on_drag_start(&layout, down(350.0));
        assert_eq!(controller.on_drag(&layout, down(-90.0)), None);
        assert_eq!(controller.on_drag(&layout, down(-20.0)), Some((3, 2)));
        assert_eq!(*moves.borrow(), vec![(3, 2)]);
    }

    #[test]
    fn dragged_item_scrolled_out_of_layout_does_not_move() {
        let layout = uniform_layout(5, 100.0, 500.0);
        let (mut controller, moves) = recording_controller();
        controller.on_drag_start(&layout, down(50.0));
        let scrolled = LazyListLayoutInfo::new(layout.visible_items_info[2..].to_vec(), 5, 500.0);
        assert_eq!(controller.on_drag(&scrolled, down(250.0)), None);
        assert!(moves.borrow().is_empty());
        assert_eq!(controller.displacement(&scrolled), None);
        assert_eq!(controller.session().map(|s| s.accumulated_delta()), Some(250.0));
    }

    #[test]
    fn non_finite_delta_is_ignored() {
        let layout = uniform_layout(5, 100.0, 500.0);
        let (mut controller, moves) = recording_controller();
        controller.on_drag_start(&layout, down(50.0));
        assert_eq!(controller.on_drag_by(&layout, f32::NAN), None);
        assert_eq!(controller.on_drag_by(&layout, f32::INFINITY), None);
        assert_eq!(controller.session().map(|s| s.accumulated_delta()), Some(0.0));
        assert!(moves.borrow().is_empty());
    }

    #[test]
    fn displacement_tracks_pointer_against_current_slot() {
        let layout = uniform_layout(5, 100.0, 500.0);
        let (mut controller, _) = recording_controller();
        controller.on_drag_start(&layout, down(50.0));
        controller.on_drag(&layout, down(40.0));
        assert_eq!(controller.displacement(&layout), Some(40.0));
        controller.on_drag(&layout, down(110.0));
        // Now dragging slot 1 (offset 100) with the item drawn at 150.
        assert_eq!(controller.dragged_item_index(), Some(1));
        assert_eq!(controller.displacement(&layout), Some(50.0));
    }

    #[test]
    fn overscroll_is_zero_inside_viewport() {
        let layout = uniform_layout(5, 100.0, 500.0);
        let (mut controller, _) = recording_controller();
        controller.on_drag_start(&layout, down(150.0));
        controller.on_drag(&layout, down(200.0));
        assert_eq!(controller.check_overscroll(&layout), 0.0);
        controller.on_drag(&layout, down(-250.0));
        assert_eq!(controller.check_overscroll(&layout), 0.0);
    }

    #[test]
    fn overscroll_reports_signed_overflow() {
        let layout = uniform_layout(5, 100.0, 500.0);
        let (mut controller, _) = recording_controller();
        controller.on_drag_start(&layout, down(350.0));
        controller.on_drag(&layout, down(130.0));
        // Trailing edge 400 + 130 = 530 past the bound at 500.
        assert_eq!(controller.check_overscroll(&layout), 30.0);

        controller.on_drag(&layout, down(-450.0));
        // Leading edge 300 - 320 = -20 before the bound at 0.
        assert_eq!(controller.check_overscroll(&layout), -20.0);
    }

    #[test]
    fn overscroll_respects_viewport_start_offset() {
        let mut layout = uniform_layout(5, 100.0, 500.0);
        layout.viewport_start_offset = 50.0;
        layout.viewport_end_offset = 450.0;
        let (mut controller, _) = recording_controller();
        controller.on_drag_start(&layout, down(150.0));
        controller.on_drag(&layout, down(-60.0));
        assert_eq!(controller.check_overscroll(&layout), -10.0);
    }

    #[test]
    fn overscroll_is_clamped_by_config() {
        let layout = uniform_layout(5, 100.0, 500.0);
        let config = DragDropConfig::default().max_auto_scroll_step(25.0);
        let mut controller =
            DragReorderController::with_config(config, |_, _| {}).expect("valid config");
        controller.on_drag_start(&layout, down(450.0));
        controller.on_drag(&layout, down(100.0));
        assert_eq!(controller.check_overscroll(&layout), 25.0);
    }

    #[test]
    fn end_resets_and_fires_finished_once() {
        let layout = uniform_layout(5, 100.0, 500.0);
        let finished = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&finished);
        let mut controller = DragReorderController::new(|_, _| {})
            .with_on_drag_finished(move || *counter.borrow_mut() += 1);

        controller.on_drag_start(&layout, down(50.0));
        controller.on_drag(&layout, down(20.0));
        controller.on_drag_end();
        assert_eq!(controller.session(), None);
        assert_eq!(*finished.borrow(), 1);

        controller.on_drag_end();
        assert_eq!(controller.session(), None);
        assert_eq!(*finished.borrow(), 1);
    }

    #[test]
    fn cancel_keeps_moves_and_skips_finished_by_default() {
        let layout = uniform_layout(5, 100.0, 500.0);
        let finished = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&finished);
        let (controller, moves) = recording_controller();
        let mut controller = controller.with_on_drag_finished(move || *counter.borrow_mut() += 1);

        controller.on_drag_start(&layout, down(50.0));
        controller.on_drag(&layout, down(150.0));
        controller.on_drag_cancel();

        assert_eq!(*moves.borrow(), vec![(0, 1)]);
        assert_eq!(*finished.borrow(), 0);
        assert_eq!(controller.dragged_item_index(), None);
    }

    #[test]
    fn cancel_with_rollback_restores_origin() {
        let layout = uniform_layout(5, 100.0, 500.0);
        let moves = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&moves);
        let config = DragDropConfig::default().cancel_policy(CancelPolicy::RollBack);
        let mut controller = DragReorderController::with_config(config, move |from, to| {
            sink.borrow_mut().push((from, to))
        })
        .expect("valid config");

        controller.on_drag_start(&layout, down(50.0));
        controller.on_drag(&layout, down(350.0));
        controller.on_drag_cancel();
        assert_eq!(*moves.borrow(), vec![(0, 3), (3, 0)]);
    }

    #[test]
    fn cancel_with_rollback_without_moves_emits_nothing() {
        let layout = uniform_layout(5, 100.0, 500.0);
        let config = DragDropConfig::default().cancel_policy(CancelPolicy::RollBack);
        let moves = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&moves);
        let mut controller =
            DragReorderController::with_config(config, move |_, _| *counter.borrow_mut() += 1)
                .expect("valid config");
        controller.on_drag_start(&layout, down(50.0));
        controller.on_drag(&layout, down(30.0));
        controller.on_drag_cancel();
        assert_eq!(*moves.borrow(), 0);
    }

    #[test]
    fn observers_see_every_snapshot() {
        let layout = uniform_layout(5, 100.0, 500.0);
        let (mut controller, _) = recording_controller();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let id = controller.add_session_observer(Rc::new(move |session: Option<DragSession>| {
            sink.borrow_mut().push(session.map(|s| s.dragged_item_index()));
        }));

        controller.on_drag_start(&layout, down(50.0));
        controller.on_drag(&layout, down(150.0));
        controller.on_drag_end();
        assert_eq!(*seen.borrow(), vec![Some(0), Some(1), None]);

        assert!(controller.remove_session_observer(id));
        controller.on_drag_start(&layout, down(50.0));
        assert_eq!(seen.borrow().len(), 3);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = DragDropConfig::default().touch_slop(f32::NAN);
        assert!(DragReorderController::with_config(config, |_, _| {}).is_err());
    }

    #[test]
    fn horizontal_orientation_reads_x_axis() {
        let layout = uniform_layout(5, 100.0, 500.0);
        let config = DragDropConfig::default().orientation(Orientation::Horizontal);
        let moves = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&moves);
        let mut controller = DragReorderController::with_config(config, move |from, to| {
            sink.borrow_mut().push((from, to))
        })
        .expect("valid config");

        // y is ignored: it would point at item 4 in a vertical list.
        assert!(controller.on_drag_start(&layout, Point::new(150.0, 450.0)));
        assert_eq!(controller.dragged_item_index(), Some(1));
        controller.on_drag(&layout, Point::new(0.0, 500.0));
        assert!(moves.borrow().is_empty());
        controller.on_drag(&layout, Point::new(150.0, 0.0));
        assert_eq!(*moves.borrow(), vec![(1, 2)]);
    }

    #[test]
    fn short_item_moves_only_after_clearing_tall_neighbour() {
        let layout = sized_layout(&[60.0, 140.0, 100.0, 80.0], 500.0);
        let (mut controller, moves) = recording_controller();
        controller.on_drag_start(&layout, down(30.0));

        // Trailing edge at 200 only touches the neighbour's trailing edge.
        assert_eq!(controller.on_drag(&layout, down(140.0)), None);
        assert_eq!(controller.on_drag(&layout, down(1.0)), Some((0, 1)));
        assert_eq!(*moves.borrow(), vec![(0, 1)]);
    }

    #[test]
    fn tall_item_moves_back_only_after_passing_leading_edge() {
        let layout = sized_layout(&[60.0, 140.0, 100.0, 80.0], 500.0);
        let (mut controller, moves) = recording_controller();
        controller.on_drag_start(&layout, down(100.0));
        assert_eq!(controller.dragged_item_index(), Some(1));

        // Leading edge at 0 sits on the previous item's leading edge.
        assert_eq!(controller.on_drag(&layout, down(-60.0)), None);
        assert_eq!(controller.on_drag(&layout, down(-1.0)), Some((1, 0)));
        assert_eq!(*moves.borrow(), vec![(1, 0)]);
    }

    #[test]
    fn start_during_active_drag_replaces_session() {
        let layout = uniform_layout(5, 100.0, 500.0);
        let finished = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&finished);
        let (controller, moves) = recording_controller();
        let mut controller = controller.with_on_drag_finished(move || *counter.borrow_mut() += 1);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        controller.add_session_observer(Rc::new(move |session: Option<DragSession>| {
            sink.borrow_mut().push(session.map(|s| s.dragged_item_index()));
        }));

        controller.on_drag_start(&layout, down(50.0));
        controller.on_drag(&layout, down(150.0));
        assert!(controller.on_drag_start(&layout, down(350.0)));

        let session = controller.session().expect("replacement session");
        assert_eq!(session.dragged_item_index(), 3);
        assert_eq!(session.origin_index(), 3);
        assert_eq!(session.accumulated_delta(), 0.0);
        assert_eq!(*finished.borrow(), 0);
        assert_eq!(*seen.borrow(), vec![Some(0), Some(1), Some(3)]);

        controller.on_drag(&layout, down(150.0));
        controller.on_drag_end();
        assert_eq!(*moves.borrow(), vec![(0, 1), (3, 4)]);
        assert_eq!(*finished.borrow(), 1);
        assert_eq!(seen.borrow().last(), Some(&None));
    }

    #[test]
    fn miss_during_active_drag_keeps_session() {
        let layout = sized_layout(&[100.0, 100.0], 500.0);
        let (mut controller, _) = recording_controller();
        controller.on_drag_start(&layout, down(50.0));
        controller.on_drag(&layout, down(30.0));
        assert!(!controller.on_drag_start(&layout, down(450.0)));
        assert_eq!(controller.dragged_item_index(), Some(0));
        assert_eq!(controller.session().map(|s| s.accumulated_delta()), Some(30.0));
    }
}
