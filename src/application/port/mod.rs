// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces for the engine's external
//! collaborators. These traits use only domain types, ensuring the
//! application layer remains independent of concrete players, storage and
//! waveform widgets.
//!
//! # Available Ports
//!
//! - [`clock`]: The playing media element (time, seek, play/pause)
//! - [`regions`]: The waveform view hosting draggable regions
//! - [`store`]: Durable segment storage keyed by media identity
//!
//! # Design Notes
//!
//! - All traits use domain types only
//! - Everything runs on one thread; traits are not required to be `Send`
//! - Fallible methods return `Result` with port-specific error types

pub mod clock;
pub mod regions;
pub mod store;

// Re-export main types for convenience
pub use clock::PlaybackClock;
pub use regions::{NullRegionHost, RegionHost};
pub use store::{SegmentStore, StoreError};
