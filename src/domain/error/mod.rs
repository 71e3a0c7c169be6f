// SPDX-License-Identifier: MPL-2.0
//! Domain error types.
//!
//! This module provides pure domain error types that are independent
//! of external crates and infrastructure concerns.
//!
//! None of these errors is fatal. They describe why an edit or navigation
//! request was rejected so the host can decide whether to surface it; the
//! engine has already degraded to a safe state by the time one is returned.

use std::fmt;

/// Recoverable failures of the synchronization core.
#[derive(Debug, Clone, PartialEq)]
pub enum SyncError {
    /// A timing edit produced `start >= end`. The previous value was kept.
    InvalidRange {
        /// Rejected start time in seconds.
        start: f64,
        /// Rejected end time in seconds.
        end: f64,
    },

    /// An index no longer refers to a segment (e.g. after delete or undo).
    MissingSegment {
        /// Requested index.
        index: usize,
        /// Collection length at the time of the request.
        len: usize,
    },

    /// A deferred continuation fired after its segment context changed.
    StaleContinuation,
}

impl fmt::Display for SyncError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyncError::InvalidRange { start, end } => {
                write!(f, "Invalid segment range: {start:.3}s..{end:.3}s")
            }
            SyncError::MissingSegment { index, len } => {
                write!(f, "Segment {index} out of range (collection has {len})")
            }
            SyncError::StaleContinuation => write!(f, "Deferred action no longer applicable"),
        }
    }
}

impl std::error::Error for SyncError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_range_formats_both_bounds() {
        let err = SyncError::InvalidRange {
            start: 3.0,
            end: 2.5,
        };
        assert_eq!(err.to_string(), "Invalid segment range: 3.000s..2.500s");
    }

    #[test]
    fn missing_segment_mentions_length() {
        let err = SyncError::MissingSegment { index: 4, len: 2 };
        assert!(err.to_string().contains("collection has 2"));
    }
}
