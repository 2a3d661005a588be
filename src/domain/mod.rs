// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core banner rules with ZERO external dependencies.
//!
//! This module contains pure value objects and geometry. It depends on
//! nothing but `std`, so everything here is testable without a toolkit.
//!
//! # Modules
//!
//! - [`banner`]: Banner geometry and tuning ([`NominalHeight`](banner::NominalHeight),
//!   [`BannerFrame`](banner::BannerFrame), [`DragTuning`](banner::DragTuning),
//!   [`Easing`](banner::Easing))
//! - [`diagnostics`]: Diagnostics types ([`BufferCapacity`](diagnostics::BufferCapacity))

pub mod banner;
pub mod diagnostics;
