// SPDX-License-Identifier: MPL-2.0
//! Banner lifecycle events captured for diagnostics.

use std::time::Instant;

use serde::{Deserialize, Serialize};

/// What started an exit transition.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ExitTrigger {
    /// The display timer fired.
    Timer,
    /// The user tapped the banner.
    Tap,
    /// The host called `dismiss`.
    Explicit,
    /// A drag was released.
    DragRelease,
}

/// Why an input was dropped.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum IgnoredInput {
    /// A gesture sample arrived after the tracker detached.
    SampleAfterRelease,
    /// A gesture sample or tap arrived with no banner on screen.
    NoSession,
    /// A tap arrived while the banner was already leaving.
    TapWhileExiting,
    /// `dismiss` was called again before removal completed.
    RepeatedDismiss,
    /// A timer fired that no longer belongs to the current banner.
    StaleTimer,
}

/// A single banner event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BannerEvent {
    /// A new banner was attached and started entering.
    Presented {
        /// Whether the content had a subtitle.
        has_subtitle: bool,
        /// Whether the content had an image.
        has_image: bool,
        /// Nominal height used for this presentation.
        nominal_height: f32,
    },
    /// An on-screen banner received new content.
    ContentReplaced,
    /// The auto-dismiss timer was armed.
    TimerArmed {
        /// Delay in seconds.
        delay_secs: f64,
    },
    /// The auto-dismiss timer was disarmed before firing.
    TimerCancelled,
    /// The auto-dismiss timer fired.
    TimerFired {
        /// Whether a drag was in progress, deferring the exit to its release.
        during_drag: bool,
    },
    /// A drag started.
    DragStarted,
    /// A drag ended.
    DragReleased {
        /// Cumulative translation at release.
        translation: f32,
        /// Whether the banner collapses on its way out.
        collapsed: bool,
        /// Exit duration in milliseconds.
        duration_ms: u64,
    },
    /// The banner was tapped.
    Tapped {
        /// Whether a tap action ran.
        ran_action: bool,
    },
    /// An exit transition started.
    ExitStarted {
        /// What caused it.
        trigger: ExitTrigger,
    },
    /// The banner was removed and its completion ran.
    Dismissed,
    /// A pending completion was dropped because a new presentation replaced it.
    CompletionSuperseded,
    /// The host reported new metrics.
    OrientationChanged {
        /// Nominal height after the change.
        nominal_height: f32,
    },
    /// An input was dropped.
    Ignored {
        /// Why.
        reason: IgnoredInput,
    },
}

/// A timestamped banner event.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    /// Monotonic time the event was recorded.
    pub timestamp: Instant,
    /// Event data.
    pub kind: BannerEvent,
}

impl DiagnosticEvent {
    /// Creates an event stamped now.
    #[must_use]
    pub fn new(kind: BannerEvent) -> Self {
        Self {
            timestamp: Instant::now(),
            kind,
        }
    }

    /// Creates an event with a given timestamp.
    #[must_use]
    pub fn with_timestamp(kind: BannerEvent, timestamp: Instant) -> Self {
        Self { timestamp, kind }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_serialize_with_type_tag() {
        let json = serde_json::to_string(&BannerEvent::ExitStarted {
            trigger: ExitTrigger::DragRelease,
        })
        .unwrap();
        assert_eq!(json, r#"{"type":"exit_started","trigger":"drag_release"}"#);
    }

    #[test]
    fn ignored_reason_round_trips() {
        let event = BannerEvent::Ignored {
            reason: IgnoredInput::SampleAfterRelease,
        };
        let json = serde_json::to_string(&event).unwrap();
        let back: BannerEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }
}
