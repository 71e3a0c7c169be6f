// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core drill logic with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and the decision
//! rules of the playback synchronization engine. It has no dependencies on
//! external crates (except `std`) and never talks to a clock or a host.
//!
//! # Modules
//!
//! - [`diagnostics`]: Diagnostics types ([`BufferCapacity`](diagnostics::BufferCapacity))
//! - [`error`]: Recoverable engine errors ([`SyncError`](error::SyncError))
//! - [`history`]: Bounded undo/redo ([`HistoryStore`](history::HistoryStore))
//! - [`playback`]: Session, boundary gate, loop/auto-pause/precision controllers
//! - [`region`]: Waveform region projection ([`Region`](region::Region))
//! - [`segment`]: Segments and lookup ([`SegmentList`](segment::SegmentList))

pub mod diagnostics;
pub mod error;
pub mod history;
pub mod playback;
pub mod region;
pub mod segment;
