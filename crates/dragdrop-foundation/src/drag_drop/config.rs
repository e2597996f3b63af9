//! Drag behaviour configuration.

use dragdrop_ui_graphics::Orientation;
use web_time::Duration;

use crate::gesture_constants::{DRAG_THRESHOLD, LONG_PRESS_TIMEOUT};

/// What happens to already-emitted moves when a drag is cancelled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CancelPolicy {
    /// Moves stay applied; cancel only discards the drag state.
    #[default]
    KeepMoves,
    /// One compensating `on_move(current, origin)` restores the order the
    /// list had when the drag started.
    RollBack,
}

/// Configuration for [`DragReorderController`](super::DragReorderController)
/// and [`DragDropListState`](super::DragDropListState).
///
/// ```rust,ignore
/// let config = DragDropConfig::default()
///     .orientation(Orientation::Horizontal)
///     .cancel_policy(CancelPolicy::RollBack)
///     .max_auto_scroll_step(48.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct DragDropConfig {
    /// Scroll axis of the list; only the main-axis component of pointer
    /// positions and deltas is used.
    pub orientation: Orientation,
    /// How long the pointer must be held before a drag starts.
    pub long_press_timeout: Duration,
    /// Movement tolerated before the long press fires.
    pub touch_slop: f32,
    pub cancel_policy: CancelPolicy,
    /// Upper bound on a single auto-scroll request. `None` scrolls by the full
    /// overflow.
    pub max_auto_scroll_step: Option<f32>,
}

impl Default for DragDropConfig {
    fn default() -> Self {
        Self {
            orientation: Orientation::Vertical,
            long_press_timeout: LONG_PRESS_TIMEOUT,
            touch_slop: DRAG_THRESHOLD,
            cancel_policy: CancelPolicy::KeepMoves,
            max_auto_scroll_step: None,
        }
    }
}

impl DragDropConfig {
    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn long_press_timeout(mut self, timeout: Duration) -> Self {
        self.long_press_timeout = timeout;
        self
    }

    pub fn touch_slop(mut self, slop: f32) -> Self {
        self.touch_slop = slop;
        self
    }

    pub fn cancel_policy(mut self, policy: CancelPolicy) -> Self {
        self.cancel_policy = policy;
        self
    }

    pub fn max_auto_scroll_step(mut self, step: f32) -> Self {
        self.max_auto_scroll_step = Some(step);
        self
    }

    /// Checks that every numeric setting is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.touch_slop.is_finite() || self.touch_slop < 0.0 {
            return Err(ConfigError::InvalidTouchSlop {
                value: self.touch_slop,
            });
        }
        if let Some(step) = self.max_auto_scroll_step {
            if !step.is_finite() || step <= 0.0 {
                return Err(ConfigError::InvalidAutoScrollStep { value: step });
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    InvalidTouchSlop { value: f32 },
    InvalidAutoScrollStep { value: f32 },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidTouchSlop { value } => {
                write!(f, "touch slop must be finite and non-negative, got {value}")
            }
            ConfigError::InvalidAutoScrollStep { value } => {
                write!(f, "max auto-scroll step must be finite and positive, got {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
