// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! Banner geometry and timing bounds live with their newtypes in
//! `domain::banner`; this module re-exposes them under configuration names
//! so `settings.toml` and the runtime agree on one source of truth.
//!
//! # Categories
//!
//! - **Animation**: entrance/exit duration
//! - **Layout**: nominal banner heights
//! - **Drag**: resistance and dismiss thresholds
//! - **Display**: default on-screen duration

use crate::domain::banner::{drag_defaults, duration_bounds, height_bounds, transition_bounds};

// ==========================================================================
// Animation Defaults
// ==========================================================================

/// Default entrance/exit duration in milliseconds.
pub const DEFAULT_ANIMATION_DURATION_MS: u64 = transition_bounds::DEFAULT_MS;

/// Minimum entrance/exit duration in milliseconds.
pub const MIN_ANIMATION_DURATION_MS: u64 = transition_bounds::MIN_MS;

/// Maximum entrance/exit duration in milliseconds.
pub const MAX_ANIMATION_DURATION_MS: u64 = transition_bounds::MAX_MS;

// ==========================================================================
// Layout Defaults
// ==========================================================================

/// Banner height when the host's status bar is visible.
pub const DEFAULT_HEIGHT_STATUS_BAR_VISIBLE: f32 = height_bounds::STATUS_BAR_VISIBLE;

/// Banner height when the host's status bar is hidden.
pub const DEFAULT_HEIGHT_STATUS_BAR_HIDDEN: f32 = height_bounds::STATUS_BAR_HIDDEN;

// ==========================================================================
// Drag Defaults
// ==========================================================================

/// Downward travel followed one-to-one before resistance kicks in.
pub const DEFAULT_RESISTANCE_THRESHOLD: f32 = drag_defaults::RESISTANCE_THRESHOLD;

/// Divisor applied to downward travel past the threshold.
pub const DEFAULT_RESISTANCE_DIVISOR: f32 = drag_defaults::RESISTANCE_DIVISOR;

/// Upward travel past which a release dismisses.
pub const DEFAULT_DISMISS_THRESHOLD: f32 = drag_defaults::DISMISS_THRESHOLD;

// ==========================================================================
// Display Defaults
// ==========================================================================

/// Default on-screen duration in seconds.
pub const DEFAULT_DISPLAY_DURATION_SECS: f64 = duration_bounds::DEFAULT_SECS;

/// Minimum on-screen duration in seconds.
pub const MIN_DISPLAY_DURATION_SECS: f64 = duration_bounds::MIN_SECS;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_ANIMATION_DURATION_MS > 0);
    assert!(MAX_ANIMATION_DURATION_MS >= MIN_ANIMATION_DURATION_MS);
    assert!(DEFAULT_ANIMATION_DURATION_MS >= MIN_ANIMATION_DURATION_MS);
    assert!(DEFAULT_ANIMATION_DURATION_MS <= MAX_ANIMATION_DURATION_MS);

    assert!(DEFAULT_HEIGHT_STATUS_BAR_HIDDEN > 0.0);
    assert!(DEFAULT_HEIGHT_STATUS_BAR_VISIBLE >= DEFAULT_HEIGHT_STATUS_BAR_HIDDEN);

    assert!(DEFAULT_RESISTANCE_THRESHOLD >= 0.0);
    assert!(DEFAULT_RESISTANCE_DIVISOR >= 1.0);
    assert!(DEFAULT_DISMISS_THRESHOLD >= 0.0);

    assert!(MIN_DISPLAY_DURATION_SECS > 0.0);
    assert!(DEFAULT_DISPLAY_DURATION_SECS >= MIN_DISPLAY_DURATION_SECS);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn animation_defaults_are_valid() {
        assert_eq!(DEFAULT_ANIMATION_DURATION_MS, 300);
        assert!(DEFAULT_ANIMATION_DURATION_MS >= MIN_ANIMATION_DURATION_MS);
        assert!(DEFAULT_ANIMATION_DURATION_MS <= MAX_ANIMATION_DURATION_MS);
    }

    #[test]
    fn layout_defaults_match_status_bar_heights() {
        assert_eq!(DEFAULT_HEIGHT_STATUS_BAR_VISIBLE, 84.0);
        assert_eq!(DEFAULT_HEIGHT_STATUS_BAR_HIDDEN, 70.0);
    }

    #[test]
    fn drag_defaults_are_valid() {
        assert_eq!(DEFAULT_RESISTANCE_THRESHOLD, 12.0);
        assert_eq!(DEFAULT_RESISTANCE_DIVISOR, 25.0);
        assert_eq!(DEFAULT_DISMISS_THRESHOLD, 5.0);
    }

    #[test]
    fn display_defaults_are_valid() {
        assert_eq!(DEFAULT_DISPLAY_DURATION_SECS, 2.0);
        assert!(DEFAULT_DISPLAY_DURATION_SECS >= MIN_DISPLAY_DURATION_SECS);
    }
}
