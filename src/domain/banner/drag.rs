// SPDX-License-Identifier: MPL-2.0
//! Drag-to-geometry mapping.
//!
//! Pure functions translating a cumulative vertical translation into a live
//! banner frame, and a release translation into the terminal transition.

use super::{BannerFrame, NominalHeight, TransitionDuration};
use std::time::Duration;

/// Tuning constants for drag tracking.
pub mod drag_defaults {
    /// Translation after which downward pulls meet resistance.
    pub const RESISTANCE_THRESHOLD: f32 = 12.0;
    /// Divisor applied to translation past the resistance threshold.
    pub const RESISTANCE_DIVISOR: f32 = 25.0;
    /// Upward release distance beyond which the banner collapses.
    pub const DISMISS_THRESHOLD: f32 = 5.0;
}

/// Drag tuning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragTuning {
    /// Translation after which downward pulls meet resistance.
    pub resistance_threshold: f32,
    /// Divisor applied to translation past the threshold. Always >= 1.
    pub resistance_divisor: f32,
    /// Releasing with `Δy < -dismiss_threshold` collapses the banner.
    pub dismiss_threshold: f32,
}

impl DragTuning {
    /// Creates a tuning, sanitizing degenerate values.
    #[must_use]
    pub fn new(resistance_threshold: f32, resistance_divisor: f32, dismiss_threshold: f32) -> Self {
        Self {
            resistance_threshold: resistance_threshold.max(0.0),
            resistance_divisor: resistance_divisor.max(1.0),
            dismiss_threshold: dismiss_threshold.abs(),
        }
    }

    /// Height the banner would take for `translation`, before clamping.
    ///
    /// Linear up to the resistance threshold, then one unit per
    /// `resistance_divisor` units of further pull.
    #[must_use]
    pub fn stretched_extent(&self, nominal: NominalHeight, translation: f32) -> f32 {
        let base = nominal.value();
        if translation >= self.resistance_threshold {
            base + self.resistance_threshold
                + (translation - self.resistance_threshold) / self.resistance_divisor
        } else {
            base + translation
        }
    }

    /// Live frame for a drag sample.
    ///
    /// The extent never drops below the nominal height; pulling up moves the
    /// banner instead, pulling down keeps its top edge at 0.
    #[must_use]
    pub fn track(&self, nominal: NominalHeight, translation: f32) -> BannerFrame {
        let raw = self.stretched_extent(nominal, translation);
        let difference = raw - nominal.value();
        BannerFrame::new(difference.min(0.0), raw.max(nominal.value()))
    }

    /// Whether a release at `translation` commits to a collapse.
    #[must_use]
    pub fn should_dismiss(&self, translation: f32, dismiss_intent: bool) -> bool {
        translation < -self.dismiss_threshold || dismiss_intent
    }

    /// Terminal transition for a release.
    #[must_use]
    pub fn release(
        &self,
        nominal: NominalHeight,
        translation: f32,
        current_extent: f32,
        dismiss_intent: bool,
        base: TransitionDuration,
    ) -> Release {
        let collapse = self.should_dismiss(translation, dismiss_intent);
        let target_extent = if collapse { 0.0 } else { nominal.value() };

        Release {
            collapse,
            target: BannerFrame::new(-nominal.value(), target_extent),
            duration: release_duration(nominal, current_extent, base),
        }
    }
}

impl Default for DragTuning {
    fn default() -> Self {
        Self {
            resistance_threshold: drag_defaults::RESISTANCE_THRESHOLD,
            resistance_divisor: drag_defaults::RESISTANCE_DIVISOR,
            dismiss_threshold: drag_defaults::DISMISS_THRESHOLD,
        }
    }
}

/// Exit duration after a release, proportional to how stretched the banner is.
#[must_use]
pub fn release_duration(
    nominal: NominalHeight,
    current_extent: f32,
    base: TransitionDuration,
) -> Duration {
    base.scaled(current_extent / nominal.value())
}

/// Outcome of a drag release.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Release {
    /// Whether the banner collapses to zero height on its way out.
    pub collapse: bool,
    /// Frame the exit animation targets.
    pub target: BannerFrame,
    /// Exit animation duration.
    pub duration: Duration,
}
