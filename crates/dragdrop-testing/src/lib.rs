//! Testing utilities for drag-to-reorder lists.
//!
//! [`FakeLazyColumn`] stands in for the rendering layer: it lays items out,
//! reports [`LazyListLayoutInfo`](dragdrop_foundation::LazyListLayoutInfo) and
//! animates scroll requests one frame at a time. [`DragRobot`] drives a
//! [`DragDropListState`](dragdrop_foundation::DragDropListState) over it with
//! scripted pointer events and a simulated clock.

pub mod fake_column;
pub mod robot;

pub use fake_column::*;
pub use robot::*;

pub mod prelude {
    pub use crate::fake_column::FakeLazyColumn;
    pub use crate::robot::{DragRobot, FRAME_INTERVAL};
}
