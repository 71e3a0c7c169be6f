// SPDX-License-Identifier: MPL-2.0
//! Subtitle segment domain types.
//!
//! This module contains the segment entity, its ordered collection, and the
//! time lookup used on every playback tick.

pub mod index;
pub mod media;
pub mod types;

pub use media::MediaId;
pub use types::{Segment, SegmentList, TextField};
