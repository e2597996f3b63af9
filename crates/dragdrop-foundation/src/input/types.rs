use dragdrop_ui_graphics::Point;
use std::cell::Cell;
use std::rc::Rc;
use web_time::Instant;

pub type PointerId = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

/// Pointer event with consumption tracking for gesture disambiguation.
///
/// A drag that picked an item up consumes its move events so the list's own
/// scroll handling leaves them alone.
#[derive(Clone, Debug)]
pub struct PointerEvent {
    pub id: PointerId,
    pub kind: PointerEventKind,
    /// Position in the list's viewport coordinates.
    pub position: Point,
    /// When the platform delivered the event.
    pub uptime: Instant,
    /// Shared via Rc<Cell> so consumption can be tracked across copies.
    consumed: Rc<Cell<bool>>,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, position: Point, uptime: Instant) -> Self {
        Self {
            id: 0,
            kind,
            position,
            uptime,
            consumed: Rc::new(Cell::new(false)),
        }
    }

    pub fn down(position: Point, uptime: Instant) -> Self {
        Self::new(PointerEventKind::Down, position, uptime)
    }

    pub fn moved(position: Point, uptime: Instant) -> Self {
        Self::new(PointerEventKind::Move, position, uptime)
    }

    pub fn up(position: Point, uptime: Instant) -> Self {
        Self::new(PointerEventKind::Up, position, uptime)
    }

    pub fn cancel(position: Point, uptime: Instant) -> Self {
        Self::new(PointerEventKind::Cancel, position, uptime)
    }

    /// Set the pointer id for this event
    pub fn with_id(mut self, id: PointerId) -> Self {
        self.id = id;
        self
    }

    /// Mark this event as consumed, preventing other handlers from processing it.
    pub fn consume(&self) {
        self.consumed.set(true);
    }

    /// Check if this event has been consumed by another handler.
    pub fn is_consumed(&self) -> bool {
        self.consumed.get()
    }
}
