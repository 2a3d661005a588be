// SPDX-License-Identifier: MPL-2.0
//! Diagnostics for banner lifecycles.
//!
//! The presenter reports what it did (presentations, timer activity, drags,
//! dismissals, dropped inputs) through a [`DiagnosticsHandle`]. A
//! [`DiagnosticsCollector`] buffers those events in memory and exports them
//! as a JSON report.
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: bounded ring buffer
//! - [`BannerEvent`]: event payloads
//! - [`DiagnosticsCollector`] / [`DiagnosticsHandle`]: channel-backed collection

mod buffer;
mod collector;
mod events;
mod report;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use collector::{DiagnosticsCollector, DiagnosticsHandle};
pub use events::{BannerEvent, DiagnosticEvent, ExitTrigger, IgnoredInput};
pub use report::{DiagnosticReport, ReportMetadata, SerializableEvent};
