// SPDX-License-Identifier: MPL-2.0
//! Drill event log owned by the playback orchestrator.
//!
//! Everything runs on the playback thread, so the log is a plain struct
//! the orchestrator records into directly.

use std::path::Path;
use std::time::Instant;

use chrono::{DateTime, Utc};

use super::{
    BufferCapacity, CircularBuffer, DiagnosticEvent, DiagnosticEventKind, DiagnosticReport,
    ReportMetadata, SerializableEvent,
};
use crate::error::Result;
use crate::infrastructure::fs::write_atomic;

/// Bounded log of drill events.
#[derive(Debug, Clone)]
pub struct DiagnosticsLog {
    buffer: CircularBuffer<DiagnosticEvent>,
    started_at: Instant,
    started_at_utc: DateTime<Utc>,
}

impl DiagnosticsLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        Self {
            buffer: CircularBuffer::new(capacity),
            started_at: Instant::now(),
            started_at_utc: Utc::now(),
        }
    }

    /// Records an event stamped now.
    pub fn record(&mut self, kind: DiagnosticEventKind) {
        self.buffer.push(DiagnosticEvent::new(kind));
    }

    /// Records a warning message.
    pub fn warn(&mut self, message: impl Into<String>) {
        self.record(DiagnosticEventKind::Warning {
            message: message.into(),
        });
    }

    /// Iterates retained events, oldest first.
    pub fn events(&self) -> impl DoubleEndedIterator<Item = &DiagnosticEvent> {
        self.buffer.iter()
    }

    /// Iterates retained event kinds, oldest first.
    pub fn kinds(&self) -> impl DoubleEndedIterator<Item = &DiagnosticEventKind> {
        self.buffer.iter().map(|event| &event.kind)
    }

    /// Most recent event kind.
    #[must_use]
    pub fn last(&self) -> Option<&DiagnosticEventKind> {
        self.buffer.last().map(|event| &event.kind)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Drops every retained event.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Builds a report from the retained events.
    #[must_use]
    pub fn build_report(&self) -> DiagnosticReport {
        let events: Vec<SerializableEvent> = self
            .buffer
            .iter()
            .map(|event| SerializableEvent::new(event.timestamp, self.started_at, event.kind.clone()))
            .collect();
        let metadata = ReportMetadata::new(self.started_at_utc, events.len(), self.buffer.evicted());
        DiagnosticReport { metadata, events }
    }

    /// Serializes the report as pretty JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn export_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.build_report())
    }

    /// Writes the report to `path` atomically.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn export_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = self.export_json()?;
        write_atomic(path.as_ref(), &json)?;
        Ok(())
    }
}

impl Default for DiagnosticsLog {
    fn default() -> Self {
        Self::new(BufferCapacity::default())
    }
}
