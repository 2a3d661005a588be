// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo shell.

use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Periodic tick driving timers and animation.
    Tick(Instant),
    /// The pointer moved to this window-relative position.
    CursorMoved(iced::Point),
    /// The primary button went down.
    ButtonPressed,
    /// The primary button went up.
    ButtonReleased,
    /// The pointer left the window.
    CursorLeft,
    /// The window was resized (the desktop stand-in for a rotation).
    WindowResized(iced::Size),
    /// Show the banner configured on the command line.
    ShowBanner,
    /// Ask the banner to leave.
    DismissBanner,
    /// Toggle the status bar assumption.
    ToggleStatusBar,
    /// Write the diagnostics report.
    ExportDiagnostics,
}

/// Runtime flags passed into the application from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Banner title.
    pub title: Option<String>,
    /// Banner subtitle.
    pub subtitle: Option<String>,
    /// Path to the banner image.
    pub image: Option<PathBuf>,
    /// Display duration in seconds.
    pub duration_secs: Option<f64>,
    /// Optional config directory override.
    pub config_dir: Option<String>,
    /// Lay the banner out as if the status bar were hidden.
    pub status_bar_hidden: bool,
}
