// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons.
//!
//! Banner geometry is computed in `f32`; layout positions go through a few
//! divisions and multiplications, so tests compare with a tolerance instead
//! of `assert_eq!`.

pub use approx::assert_abs_diff_eq;

/// Tolerance for layout coordinates, in logical pixels.
pub const LAYOUT_EPSILON: f32 = 1e-4;
