// SPDX-License-Identifier: MPL-2.0
//! Serializable drill report.

use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::DiagnosticEventKind;

/// Report header.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReportMetadata {
    /// When the report was generated (RFC 3339).
    pub generated_at: String,
    /// Version of segloop that produced the report.
    pub segloop_version: String,
    /// When the log started recording (RFC 3339).
    pub log_started_at: String,
    /// Events in this report.
    pub event_count: usize,
    /// Events evicted from the log before the report was built.
    pub events_evicted: u64,
}

impl ReportMetadata {
    /// Creates metadata stamped with the current time.
    #[must_use]
    pub fn new(log_started_at: DateTime<Utc>, event_count: usize, events_evicted: u64) -> Self {
        Self {
            generated_at: Utc::now().to_rfc3339(),
            segloop_version: env!("CARGO_PKG_VERSION").to_string(),
            log_started_at: log_started_at.to_rfc3339(),
            event_count,
            events_evicted,
        }
    }
}

/// An event with its `Instant` converted to milliseconds since the log
/// started.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SerializableEvent {
    pub timestamp_ms: u64,
    #[serde(flatten)]
    pub kind: DiagnosticEventKind,
}

impl SerializableEvent {
    /// Converts an event, timestamped relative to `log_start`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)] // Duration in ms fits comfortably in u64
    pub fn new(timestamp: Instant, log_start: Instant, kind: DiagnosticEventKind) -> Self {
        Self {
            timestamp_ms: timestamp.saturating_duration_since(log_start).as_millis() as u64,
            kind,
        }
    }
}

/// Full exported report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiagnosticReport {
    pub metadata: ReportMetadata,
    pub events: Vec<SerializableEvent>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn serializable_event_is_relative_to_log_start() {
        let start = Instant::now();
        let event = SerializableEvent::new(
            start + Duration::from_millis(250),
            start,
            DiagnosticEventKind::Primed { index: 1 },
        );
        assert_eq!(event.timestamp_ms, 250);
    }

    #[test]
    fn event_before_log_start_saturates_to_zero() {
        let start = Instant::now() + Duration::from_secs(1);
        let event = SerializableEvent::new(
            Instant::now(),
            start,
            DiagnosticEventKind::Primed { index: 1 },
        );
        assert_eq!(event.timestamp_ms, 0);
    }

    #[test]
    fn report_flattens_event_kind() {
        let report = DiagnosticReport {
            metadata: ReportMetadata::new(Utc::now(), 1, 0),
            events: vec![SerializableEvent {
                timestamp_ms: 5,
                kind: DiagnosticEventKind::Primed { index: 1 },
            }],
        };
        let json = serde_json::to_string(&report).expect("serialization should succeed");
        assert!(json.contains(r#"{"timestamp_ms":5,"type":"primed","index":1}"#));
        assert!(json.contains(env!("CARGO_PKG_VERSION")));
    }
}
