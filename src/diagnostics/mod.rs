// SPDX-License-Identifier: MPL-2.0
//! Diagnostics: a bounded log of drill events and its JSON export.
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: Generic ring buffer with configurable capacity
//! - [`DiagnosticEvent`]: Timestamped engine decision or edit
//! - [`DiagnosticsLog`]: The log the orchestrator records into
//! - [`DiagnosticReport`]: Serializable snapshot of the log

mod buffer;
mod collector;
mod events;
mod report;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use collector::DiagnosticsLog;
pub use events::{
    DiagnosticEvent, DiagnosticEventKind, DiscardReason, EditKind, HistoryDirection, PlaybackMode,
};
pub use report::{DiagnosticReport, ReportMetadata, SerializableEvent};
