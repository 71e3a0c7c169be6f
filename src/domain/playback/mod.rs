// SPDX-License-Identifier: MPL-2.0
//! Playback drill domain types.
//!
//! This module contains the session cursor, the boundary debouncer, and the
//! three controllers that decide what happens at a segment boundary. They
//! are pure: none of them touches the clock.

pub mod auto_pause;
pub mod boundary;
pub mod looping;
pub mod newtypes;
pub mod precision;
pub mod session;

// Re-export commonly used types
pub use auto_pause::{AutoPauseAction, AutoPauseController};
pub use boundary::{BoundaryGate, GateSignal};
pub use looping::{LoopAction, LoopController, LoopFinish, LoopState};
pub use newtypes::{InterPauseFraction, LoopCount, SettleDelay};
pub use precision::PrecisionMode;
pub use session::PlaybackSession;
