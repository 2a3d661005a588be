// SPDX-License-Identifier: MPL-2.0
//! Banner newtypes.
//!
//! Type-safe wrappers for the handful of scalar values the banner state
//! machine depends on. Each wrapper enforces its range at construction so
//! the presenter never has to re-validate.

use std::time::Duration;

// =============================================================================
// Bounds
// =============================================================================

/// Nominal height bounds, in layout units.
pub mod height_bounds {
    /// Resting height when the status bar is visible.
    pub const STATUS_BAR_VISIBLE: f32 = 84.0;
    /// Resting height when the status bar is hidden.
    pub const STATUS_BAR_HIDDEN: f32 = 70.0;
    /// Smallest height accepted from configuration.
    pub const MIN: f32 = 20.0;
    /// Largest height accepted from configuration.
    pub const MAX: f32 = 400.0;
}

/// Display duration bounds, in seconds.
pub mod duration_bounds {
    /// Shortest time a banner stays on screen before auto-dismissing.
    pub const MIN_SECS: f64 = 0.1;
    /// Default time a banner stays on screen.
    pub const DEFAULT_SECS: f64 = 2.0;
}

/// Transition duration bounds, in milliseconds.
pub mod transition_bounds {
    /// Shortest entrance/exit transition.
    pub const MIN_MS: u64 = 50;
    /// Longest entrance/exit transition.
    pub const MAX_MS: u64 = 2000;
    /// Default entrance/exit transition.
    pub const DEFAULT_MS: u64 = 300;
}

// =============================================================================
// NominalHeight
// =============================================================================

/// Resting height of the banner.
///
/// Recomputed at the start of every presentation and whenever the host
/// reports an orientation change; it is passed explicitly into every
/// geometry computation.
///
/// # Example
///
/// ```
/// use herald::domain::banner::NominalHeight;
///
/// assert_eq!(NominalHeight::for_status_bar(true).value(), 70.0);
/// assert_eq!(NominalHeight::for_status_bar(false).value(), 84.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NominalHeight(f32);

impl NominalHeight {
    /// Creates a nominal height, clamping to the accepted range.
    #[must_use]
    pub fn new(value: f32) -> Self {
        Self(value.clamp(height_bounds::MIN, height_bounds::MAX))
    }

    /// Returns the built-in height for the given status bar visibility.
    #[must_use]
    pub fn for_status_bar(hidden: bool) -> Self {
        if hidden {
            Self(height_bounds::STATUS_BAR_HIDDEN)
        } else {
            Self(height_bounds::STATUS_BAR_VISIBLE)
        }
    }

    /// Returns the raw height.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for NominalHeight {
    fn default() -> Self {
        Self::for_status_bar(false)
    }
}

// =============================================================================
// DisplayDuration
// =============================================================================

/// How long a banner stays on screen before the auto-dismiss timer fires.
///
/// Always strictly positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayDuration(Duration);

impl DisplayDuration {
    /// Creates a display duration from seconds, clamping to the minimum.
    ///
    /// Non-finite input falls back to the default.
    #[must_use]
    pub fn from_secs_f64(secs: f64) -> Self {
        if !secs.is_finite() {
            return Self::default();
        }
        Self(Duration::from_secs_f64(secs.max(duration_bounds::MIN_SECS)))
    }

    /// Returns the duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        self.0
    }

    /// Returns the duration in seconds.
    #[must_use]
    pub fn as_secs_f64(self) -> f64 {
        self.0.as_secs_f64()
    }
}

impl Default for DisplayDuration {
    fn default() -> Self {
        Self(Duration::from_secs_f64(duration_bounds::DEFAULT_SECS))
    }
}

impl From<Duration> for DisplayDuration {
    fn from(duration: Duration) -> Self {
        Self::from_secs_f64(duration.as_secs_f64())
    }
}

// =============================================================================
// TransitionDuration
// =============================================================================

/// Base duration of entrance and exit transitions.
///
/// Drag releases scale this value by how far the banner was stretched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionDuration(u64);

impl TransitionDuration {
    /// Creates a transition duration from milliseconds, clamping to range.
    #[must_use]
    pub fn from_millis(ms: u64) -> Self {
        Self(ms.clamp(transition_bounds::MIN_MS, transition_bounds::MAX_MS))
    }

    /// Returns the value in milliseconds.
    #[must_use]
    pub fn millis(self) -> u64 {
        self.0
    }

    /// Returns the transition as a `Duration`.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }

    /// Returns this duration multiplied by a non-negative factor.
    #[must_use]
    pub fn scaled(self, factor: f32) -> Duration {
        let nanos = (self.0 as f64) * 1_000_000.0 * f64::from(factor.max(0.0));
        Duration::from_nanos(nanos.round() as u64)
    }
}

impl Default for TransitionDuration {
    fn default() -> Self {
        Self(transition_bounds::DEFAULT_MS)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nominal_height_tracks_status_bar() {
        assert_eq!(NominalHeight::for_status_bar(true).value(), 70.0);
        assert_eq!(NominalHeight::for_status_bar(false).value(), 84.0);
        assert_eq!(NominalHeight::default().value(), 84.0);
    }

    #[test]
    fn nominal_height_clamps_configured_values() {
        assert_eq!(NominalHeight::new(0.0).value(), height_bounds::MIN);
        assert_eq!(NominalHeight::new(10_000.0).value(), height_bounds::MAX);
        assert_eq!(NominalHeight::new(90.0).value(), 90.0);
    }

    #[test]
    fn display_duration_is_strictly_positive() {
        let zero = DisplayDuration::from_secs_f64(0.0);
        assert!(zero.as_duration() > Duration::ZERO);

        let negative = DisplayDuration::from_secs_f64(-3.0);
        assert_eq!(negative.as_secs_f64(), duration_bounds::MIN_SECS);
    }

    #[test]
    fn display_duration_rejects_non_finite_input() {
        assert_eq!(
            DisplayDuration::from_secs_f64(f64::NAN),
            DisplayDuration::default()
        );
        assert_eq!(
            DisplayDuration::from_secs_f64(f64::INFINITY),
            DisplayDuration::default()
        );
    }

    #[test]
    fn display_duration_from_std_duration() {
        let d: DisplayDuration = Duration::from_millis(1500).into();
        assert_eq!(d.as_duration(), Duration::from_millis(1500));
    }

    #[test]
    fn transition_duration_clamps_and_scales() {
        assert_eq!(TransitionDuration::from_millis(0).millis(), 50);
        assert_eq!(TransitionDuration::from_millis(10_000).millis(), 2000);

        let base = TransitionDuration::default();
        assert_eq!(base.as_duration(), Duration::from_millis(300));
        assert_eq!(base.scaled(2.0), Duration::from_millis(600));
        assert_eq!(base.scaled(-1.0), Duration::ZERO);
    }
}
