// SPDX-License-Identifier: MPL-2.0
//! `herald` shows transient notification banners that slide in from the top
//! edge of a host surface, stay for a while, and leave on their own, on a tap,
//! or when dragged away.
//!
//! The presentation logic in [`banner`] is independent of any toolkit: it
//! talks to a [`banner::TimerSource`] for deadlines and a
//! [`banner::RenderSink`] for on-screen frames. The [`ui`] and [`app`] modules
//! provide an Iced rendition of both, plus a small demo window.

pub mod app;
pub mod banner;
pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;
