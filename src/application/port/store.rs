// SPDX-License-Identifier: MPL-2.0
//! Segment persistence port definition.
//!
//! This module defines the [`SegmentStore`] trait. The engine saves the full
//! collection after every mutation and asks for a stored collection when a
//! media item loads. Saving is fire-and-forget from the engine's point of
//! view: a failure is reported to the host and retried on the next mutation.

use crate::domain::segment::{MediaId, SegmentList};
use std::fmt;

// =============================================================================
// StoreError
// =============================================================================

/// Errors that can occur while saving or loading segments.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreError {
    /// The backing storage could not be read or written.
    Io(String),

    /// Stored data could not be encoded or decoded.
    Format(String),

    /// No storage location is available (e.g. no data directory).
    Unavailable,
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Io(msg) => write!(f, "Storage I/O error: {msg}"),
            StoreError::Format(msg) => write!(f, "Stored segment data is invalid: {msg}"),
            StoreError::Unavailable => write!(f, "No segment storage location available"),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::Io(err.to_string())
    }
}

// =============================================================================
// SegmentStore Trait
// =============================================================================

/// Port for durable segment storage keyed by media identity.
pub trait SegmentStore {
    /// Stores the full collection for `media`, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the collection could not be written.
    fn save(&mut self, media: &MediaId, segments: &SegmentList) -> Result<(), StoreError>;

    /// Returns the stored collection for `media`, or `Ok(None)` if nothing
    /// was stored.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if stored data exists but cannot be read.
    fn load(&mut self, media: &MediaId) -> Result<Option<SegmentList>, StoreError>;
}
