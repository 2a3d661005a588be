// SPDX-License-Identifier: MPL-2.0
//! Serializable diagnostic report.

use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::BannerEvent;

/// Report header.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReportMetadata {
    /// Crate version that produced the report.
    pub version: String,
    /// When the report was generated (RFC 3339).
    pub generated_at: String,
    /// When collection started (RFC 3339).
    pub collection_started_at: String,
    /// How long collection ran, in milliseconds.
    pub collection_duration_ms: u64,
    /// Number of events in the report.
    pub event_count: usize,
}

impl ReportMetadata {
    /// Creates metadata stamped now.
    #[must_use]
    pub fn new(
        collection_started_at: DateTime<Utc>,
        collection_duration_ms: u64,
        event_count: usize,
    ) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            generated_at: Utc::now().to_rfc3339(),
            collection_started_at: collection_started_at.to_rfc3339(),
            collection_duration_ms,
            event_count,
        }
    }
}

/// An event with its offset from the start of collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SerializableEvent {
    /// Milliseconds since collection started.
    pub offset_ms: u64,
    /// Event data.
    #[serde(flatten)]
    pub event: BannerEvent,
}

impl SerializableEvent {
    /// Converts a monotonic timestamp into an offset from `started_at`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn new(timestamp: Instant, started_at: Instant, event: BannerEvent) -> Self {
        Self {
            offset_ms: timestamp.saturating_duration_since(started_at).as_millis() as u64,
            event,
        }
    }
}

/// Complete report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiagnosticReport {
    /// Header.
    pub metadata: ReportMetadata,
    /// Events, oldest first.
    pub events: Vec<SerializableEvent>,
}

impl DiagnosticReport {
    /// Pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn offsets_are_relative_and_saturating() {
        let start = Instant::now();
        let later = SerializableEvent::new(
            start + Duration::from_millis(250),
            start,
            BannerEvent::DragStarted,
        );
        assert_eq!(later.offset_ms, 250);

        let earlier = SerializableEvent::new(
            start,
            start + Duration::from_secs(1),
            BannerEvent::DragStarted,
        );
        assert_eq!(earlier.offset_ms, 0);
    }

    #[test]
    fn report_json_flattens_events() {
        let start = Instant::now();
        let report = DiagnosticReport {
            metadata: ReportMetadata::new(Utc::now(), 10, 1),
            events: vec![SerializableEvent::new(start, start, BannerEvent::Dismissed)],
        };
        let json = report.to_json().unwrap();
        assert!(json.contains("\"type\": \"dismissed\""));
        assert!(json.contains("\"offset_ms\": 0"));
    }
}
