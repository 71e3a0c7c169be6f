// SPDX-License-Identifier: MPL-2.0
//! `segloop` keeps a playing media clock and a list of time-coded subtitle
//! segments in step for repetition drills.
//!
//! It loops single segments, pauses at segment ends, parks in precision
//! listening mode, and keeps draggable waveform regions and an undo/redo
//! history consistent with edits. The host feeds clock samples to
//! [`PlaybackOrchestrator::evaluate`](application::orchestrator::PlaybackOrchestrator::evaluate)
//! and implements the ports in [`application::port`].

#![doc(html_root_url = "https://docs.rs/segloop/0.1.0")]

pub mod application;
pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod paths;

#[cfg(test)]
mod test_utils;
