// SPDX-License-Identifier: MPL-2.0
//! Easing curves requested by the presenter.
//!
//! The presenter only names a curve; the render sink evaluates it.

/// Easing curve attached to a frame update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// No easing. Used for live drag updates with zero duration.
    #[default]
    Linear,
    /// Slow start, fast end. Used when leaving the screen.
    EaseIn,
    /// Fast start, slow end. Used when entering the screen.
    EaseOut,
    /// Slow start and end. Used for drag releases.
    EaseInOut,
}

impl Easing {
    /// Evaluates the curve at `t`.
    ///
    /// Input is clamped to `[0.0, 1.0]`; output is in the same range.
    #[inline]
    #[must_use]
    pub fn evaluate(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t * t,
            Easing::EaseOut => {
                let omt = 1.0 - t;
                1.0 - omt * omt * omt
            }
            Easing::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - u * u * u / 2.0
                }
            }
        }
    }
}
