//! Shared gesture constants for consistent touch/pointer handling.
//!
//! # DPI Considerations
//!
//! These values are in logical pixels. For very high-density touch screens,
//! consider scaling by the device's DPI factor.

use web_time::Duration;

/// Drag threshold in logical pixels.
///
/// While waiting for the long press that starts a reorder drag, moving the
/// pointer farther than this from the press position abandons the gesture
/// (the user is scrolling, not picking an item up).
///
/// Matches common platform conventions (Android uses ~8dp for
/// ViewConfiguration.TOUCH_SLOP).
pub const DRAG_THRESHOLD: f32 = 8.0;

/// Time the pointer must stay down before a reorder drag starts.
///
/// Android's ViewConfiguration long press timeout.
pub const LONG_PRESS_TIMEOUT: Duration = Duration::from_millis(400);

/// z-index the rendering layer should give the dragged item so it draws above
/// its neighbours.
pub const DRAGGED_ITEM_Z_INDEX: f32 = 1.0;
