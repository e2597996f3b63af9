//! Foundation for drag-to-reorder lists: lazy layout info, pointer input and
//! the reorder controller.
//!
//! The rendering layer reports a [`LazyListLayoutInfo`] every frame and feeds
//! pointer events or drag deltas in; the [`DragReorderController`] answers
//! with `on_move(from, to)` callbacks, a displacement for the dragged item and
//! auto-scroll suggestions.

pub mod drag_drop;
pub mod gesture_constants;
pub mod input;
pub mod lazy;

pub use drag_drop::*;
pub use input::{DragGestureDetector, DragGestureEvent, PointerEvent, PointerEventKind};
pub use lazy::{LazyListItemInfo, LazyListLayoutInfo, LazyListLayoutSource};

pub mod prelude {
    pub use crate::drag_drop::{
        AutoScrollJob, CancelPolicy, DragDropConfig, DragDropListState, DragReorderController,
        DragSession, ItemAppearance, ObserverId,
    };
    pub use crate::input::prelude::*;
    pub use crate::lazy::{LazyListItemInfo, LazyListLayoutInfo, LazyListLayoutSource};
    pub use dragdrop_ui_graphics::{Orientation, Point};
}
