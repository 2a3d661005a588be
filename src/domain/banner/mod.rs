// SPDX-License-Identifier: MPL-2.0
//! Banner domain types.
//!
//! Framework-free value objects and pure math for the banner state machine:
//! - [`NominalHeight`], [`DisplayDuration`], [`TransitionDuration`]
//! - [`BannerFrame`] and [`HostMetrics`]
//! - [`DragTuning`] for mapping drag translation to geometry
//! - [`Easing`] curves

pub mod drag;
mod easing;
mod geometry;
mod newtypes;

pub use drag::{drag_defaults, release_duration, DragTuning, Release};
pub use easing::Easing;
pub use geometry::{BannerFrame, HostMetrics};
pub use newtypes::{
    duration_bounds, height_bounds, transition_bounds, DisplayDuration, NominalHeight,
    TransitionDuration,
};
