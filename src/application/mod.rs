// SPDX-License-Identifier: MPL-2.0
//! Application layer - Use cases and orchestration.
//!
//! This module contains the application layer of the Clean Architecture:
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//! - [`scheduler`]: Deferred continuations with generation-based cancellation
//! - [`region_sync`]: Segment to waveform region bridge
//! - [`orchestrator`]: The per-tick driver composing everything above
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - Hosts drive the orchestrator and own the concrete adapters
//!
//! # Example
//!
//! ```
//! use segloop::application::orchestrator::{EngineSettings, PlaybackOrchestrator};
//! use segloop::application::port::PlaybackClock;
//! use segloop::domain::segment::{MediaId, Segment};
//! use segloop::infrastructure::{MemorySegmentStore, RegionMirror, SimulatedClock};
//!
//! let mut engine = PlaybackOrchestrator::new(
//!     SimulatedClock::new(4.0),
//!     MemorySegmentStore::new(),
//!     RegionMirror::default(),
//!     EngineSettings::default(),
//! );
//! engine.load_media(
//!     MediaId::new("dialog.mp3"),
//!     Some(vec![Segment::new(0.0, 2.0), Segment::new(2.0, 4.0)]),
//! );
//! engine.jump_to_segment(1, false, true).unwrap();
//! assert_eq!(engine.current_index(), Some(1));
//! assert!(!engine.clock().is_paused());
//! ```

pub mod orchestrator;
pub mod port;
pub mod region_sync;
pub mod scheduler;
