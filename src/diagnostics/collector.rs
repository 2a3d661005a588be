// SPDX-License-Identifier: MPL-2.0
//! Diagnostics collector for banner events.
//!
//! Producers hold a [`DiagnosticsHandle`] and push events through a bounded
//! channel; the owner drains it into a circular buffer on its own schedule.

use std::fs;
use std::path::Path;
use std::time::Instant;

use chrono::{DateTime, Utc};
use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};

use super::{
    BannerEvent, BufferCapacity, CircularBuffer, DiagnosticEvent, DiagnosticReport,
    ReportMetadata, SerializableEvent,
};
use crate::error::Result;

/// Channel depth between handles and the collector.
const DEFAULT_CHANNEL_CAPACITY: usize = 100;

/// Cheap, cloneable sender for banner events.
#[derive(Clone, Debug)]
pub struct DiagnosticsHandle {
    event_tx: Sender<DiagnosticEvent>,
}

impl DiagnosticsHandle {
    /// Records an event. Non-blocking; the event is dropped if the channel is full.
    pub fn log(&self, event: BannerEvent) {
        let _ = self.event_tx.try_send(DiagnosticEvent::new(event));
    }

    /// Records an event, reporting whether it was accepted.
    ///
    /// # Errors
    ///
    /// Returns `TrySendError::Full` if the channel is full, or
    /// `TrySendError::Disconnected` if the collector was dropped.
    pub fn try_log(&self, event: BannerEvent) -> std::result::Result<(), TrySendError<DiagnosticEvent>> {
        self.event_tx.try_send(DiagnosticEvent::new(event))
    }
}

/// Owner of the event buffer.
pub struct DiagnosticsCollector {
    buffer: CircularBuffer<DiagnosticEvent>,
    event_rx: Receiver<DiagnosticEvent>,
    event_tx: Sender<DiagnosticEvent>,
    collection_started_at: Instant,
    collection_started_at_utc: DateTime<Utc>,
}

impl DiagnosticsCollector {
    /// Creates a collector retaining up to `capacity` events.
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        let (event_tx, event_rx) = bounded(DEFAULT_CHANNEL_CAPACITY);

        Self {
            buffer: CircularBuffer::new(capacity),
            event_rx,
            event_tx,
            collection_started_at: Instant::now(),
            collection_started_at_utc: Utc::now(),
        }
    }

    /// Creates a handle for producers.
    #[must_use]
    pub fn handle(&self) -> DiagnosticsHandle {
        DiagnosticsHandle {
            event_tx: self.event_tx.clone(),
        }
    }

    /// Moves every pending event from the channel into the buffer.
    pub fn process_pending(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.buffer.push(event);
        }
    }

    /// Records an event directly, bypassing the channel.
    pub fn log(&mut self, event: BannerEvent) {
        self.buffer.push(DiagnosticEvent::new(event));
    }

    /// Number of buffered events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Whether the buffer is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Buffered events, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.buffer.iter()
    }

    /// Buffered event kinds, oldest first.
    #[must_use]
    pub fn kinds(&self) -> Vec<BannerEvent> {
        self.buffer.iter().map(|e| e.kind.clone()).collect()
    }

    /// Drops every buffered event.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Buffer capacity.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Builds a report from the buffer.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn build_report(&self) -> DiagnosticReport {
        let collection_duration_ms = self.collection_started_at.elapsed().as_millis() as u64;

        let events: Vec<SerializableEvent> = self
            .buffer
            .iter()
            .map(|event| {
                SerializableEvent::new(
                    event.timestamp,
                    self.collection_started_at,
                    event.kind.clone(),
                )
            })
            .collect();

        let metadata = ReportMetadata::new(
            self.collection_started_at_utc,
            collection_duration_ms,
            events.len(),
        );

        DiagnosticReport { metadata, events }
    }

    /// Exports the buffer as pretty JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn export_json(&self) -> serde_json::Result<String> {
        self.build_report().to_json()
    }

    /// Writes the JSON report to `path`, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or any filesystem operation fails.
    pub fn write_report(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = self.export_json()?;
        fs::write(path, json)?;
        Ok(())
    }
}

impl Default for DiagnosticsCollector {
    fn default() -> Self {
        Self::new(BufferCapacity::default())
    }
}
