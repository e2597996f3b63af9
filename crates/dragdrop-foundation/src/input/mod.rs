//! Pointer input: raw pointer events and the long-press drag recogniser.

pub mod gestures;
pub mod types;

pub use gestures::{DragGestureDetector, DragGestureEvent};
pub use types::{PointerEvent, PointerEventKind, PointerId};

pub mod prelude {
    pub use super::gestures::{DragGestureDetector, DragGestureEvent};
    pub use super::types::{PointerEvent, PointerEventKind, PointerId};
}
