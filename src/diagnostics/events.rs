// SPDX-License-Identifier: MPL-2.0
//! Drill event types.
//!
//! Every decision the engine takes (restart, pause, prime, navigation, edit)
//! is recorded as one event so a session can be replayed from the log.

use std::time::Instant;

use serde::{Deserialize, Serialize};

/// Why a deferred continuation was dropped instead of acting.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DiscardReason {
    /// The context changed (navigation, mode switch, load) after scheduling.
    Cancelled,
    /// Playback was resumed before the continuation fired.
    NotPaused,
    /// The current segment is no longer the one it targeted.
    SegmentChanged,
    /// Looping was disabled or exhausted meanwhile.
    LoopInactive,
}

/// Kind of a segment edit.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EditKind {
    Delete,
    Duplicate,
    Text,
    Timing,
    RegionDrag,
    RegionDragRejected,
    Replace,
}

/// Playback mode toggles.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PlaybackMode {
    Loop,
    AutoPause,
    Precision,
}

/// Direction of a history move.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum HistoryDirection {
    Undo,
    Redo,
}

/// A logged event with its monotonic timestamp.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    /// When the event was recorded.
    pub timestamp: Instant,
    /// What happened.
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    /// Creates an event stamped now.
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            timestamp: Instant::now(),
            kind,
        }
    }
}

/// The type and payload of a drill event.
///
/// `media_time` fields carry the sampled playback position in seconds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    /// A segment's tail window was reached and its action fired.
    BoundaryFired { index: usize, media_time: f64 },

    /// The loop seeked back to the segment start.
    LoopRestarted {
        index: usize,
        #[serde(skip_serializing_if = "Option::is_none")]
        remaining: Option<u32>,
        /// Inter-repeat pause before resuming, if any.
        pause_ms: u64,
    },

    /// A finite loop ran out.
    LoopFinished { index: usize, advanced: bool },

    /// Auto-pause stopped playback at a boundary.
    AutoPaused { index: usize, media_time: f64 },

    /// The next segment was primed after the settle delay.
    Primed { index: usize },

    /// A deferred continuation was neutralized.
    ContinuationDiscarded { reason: DiscardReason },

    /// Current segment changed by navigation or playback.
    Navigated {
        #[serde(skip_serializing_if = "Option::is_none")]
        from: Option<usize>,
        to: usize,
        direct: bool,
    },

    /// The collection was edited.
    Edited { edit: EditKind, index: Option<usize> },

    /// Undo or redo restored a snapshot.
    HistoryMoved { direction: HistoryDirection, cursor: usize },

    /// A playback mode was switched.
    ModeChanged { mode: PlaybackMode, enabled: bool },

    /// A media item was loaded.
    MediaLoaded { media: String, segments: usize, restored: bool },

    /// Non-fatal problem (e.g. persistence failure).
    Warning { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_event_is_stamped_now() {
        let before = Instant::now();
        let event = DiagnosticEvent::new(DiagnosticEventKind::Primed { index: 2 });
        assert!(event.timestamp >= before);
    }

    #[test]
    fn kinds_serialize_with_type_tag() {
        let json = serde_json::to_string(&DiagnosticEventKind::ContinuationDiscarded {
            reason: DiscardReason::SegmentChanged,
        })
        .expect("serialization should succeed");
        assert_eq!(
            json,
            r#"{"type":"continuation_discarded","reason":"segment_changed"}"#
        );
    }

    #[test]
    fn optional_fields_are_skipped() {
        let json = serde_json::to_string(&DiagnosticEventKind::Navigated {
            from: None,
            to: 3,
            direct: true,
        })
        .expect("serialization should succeed");
        assert!(!json.contains("from"));
        assert!(json.contains(r#""to":3"#));
    }

    #[test]
    fn kinds_deserialize_from_json() {
        let json = r#"{"type":"mode_changed","mode":"auto_pause","enabled":false}"#;
        let kind: DiagnosticEventKind =
            serde_json::from_str(json).expect("deserialization should succeed");
        assert_eq!(
            kind,
            DiagnosticEventKind::ModeChanged {
                mode: PlaybackMode::AutoPause,
                enabled: false
            }
        );
    }
}
