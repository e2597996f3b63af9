//! Lazy list layout as seen by the drag controller.
//!
//! A lazy (virtualized) list only lays out the items inside its viewport.
//! The rendering layer publishes that window as a [`LazyListLayoutInfo`]
//! every frame. Lookups by absolute index go through
//! [`LazyListLayoutInfo::visible_item_for`], which answers `None` for items
//! that are not currently laid out instead of indexing out of range.

mod layout_info;

pub use layout_info::*;
