//! Pure geometry and units for the drag-and-drop list
//!
//! Points, the scroll-axis `Orientation` and density-independent
//! units. Nothing here knows about lists or gestures.

mod geometry;
mod unit;

pub use geometry::*;
pub use unit::*;

pub mod prelude {
    pub use crate::geometry::{Orientation, Point};
    pub use crate::unit::Dp;
}
