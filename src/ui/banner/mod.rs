// SPDX-License-Identifier: MPL-2.0
//! On-screen banner: layout, animation and rendering.

pub mod animation;
pub mod layout;
pub mod view;

pub use animation::AnimatedFrame;
pub use layout::{BannerLayout, TextMetrics};
pub use view::view;
