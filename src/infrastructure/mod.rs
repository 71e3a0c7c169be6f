// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! Concrete implementations of the port traits defined in
//! `application::port`, wrapping system I/O.
//!
//! # Available Adapters
//!
//! - [`json_store`]: Segment persistence as one JSON file per media item
//!   (implements [`SegmentStore`])
//! - [`fs`]: Atomic file writes shared by the adapters and report export
//! - [`headless`]: Simulated clock, in-memory store and region mirror for
//!   running without a player or widget (CLI, tests)
//!
//! [`SegmentStore`]: crate::application::port::SegmentStore

pub mod fs;
pub mod headless;
pub mod json_store;

pub use headless::{ClockCommand, MemorySegmentStore, RegionMirror, SimulatedClock};
pub use json_store::JsonSegmentStore;
