//! Drag-to-reorder for lazy lists.
//!
//! # Architecture
//!
//! - [`DragReorderController`] - pure drag state machine; turns drag deltas and
//!   the current [`LazyListLayoutInfo`](crate::lazy::LazyListLayoutInfo) into
//!   `on_move(from, to)` callbacks and auto-scroll suggestions
//! - [`DragSession`] - immutable snapshot of an active drag, replaced on
//!   every event and published to registered observers
//! - [`AutoScrollJob`] - handle on a scroll the rendering layer is running on
//!   the controller's behalf
//! - [`DragDropListState`] - glue binding the controller to a
//!   [`LazyListLayoutSource`](crate::lazy::LazyListLayoutSource) and the
//!   long-press gesture detector
//!
//! # Example
//!
//! ```rust,ignore
//! let items = Rc::new(RefCell::new(vec!["apple", "banana", "cherry"]));
//! let sink = Rc::clone(&items);
//! let mut state = DragDropListState::new(list_handle, move |from, to| {
//!     move_item(&mut sink.borrow_mut(), from, to);
//! });
//!
//! state.on_drag_start(Point::new(0.0, 30.0));
//! state.on_drag(Point::new(0.0, 70.0));
//! state.on_drag_end();
//! ```

mod auto_scroll;
mod config;
mod controller;
mod list_state;
mod observers;
mod reorder;
mod session;

pub use auto_scroll::*;
pub use config::*;
pub use controller::*;
pub use list_state::*;
pub use observers::*;
pub use reorder::*;
pub use session::*;
