// SPDX-License-Identifier: MPL-2.0
//! In-process adapters for running the engine without a media element,
//! waveform widget or disk: a simulated clock, an in-memory store and a
//! region host that just mirrors what it is told.
//!
//! The CLI drives a session with these, and the tests build on them.

use std::collections::HashMap;

use crate::application::port::{PlaybackClock, RegionHost, SegmentStore, StoreError};
use crate::domain::region::Region;
use crate::domain::segment::{MediaId, SegmentList};

// =============================================================================
// SimulatedClock
// =============================================================================

/// Command received by a [`SimulatedClock`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClockCommand {
    Seek(f64),
    Play,
    Pause,
}

/// Media clock advanced manually with [`SimulatedClock::advance`].
///
/// Like a media element, it stops by itself when it reaches the end of a
/// known duration.
#[derive(Debug, Clone)]
pub struct SimulatedClock {
    time: f64,
    duration: f64,
    paused: bool,
    commands: Vec<ClockCommand>,
}

impl SimulatedClock {
    /// Creates a paused clock at `0.0` for media of `duration` seconds
    /// (NaN for unknown).
    #[must_use]
    pub fn new(duration: f64) -> Self {
        Self {
            time: 0.0,
            duration,
            paused: true,
            commands: Vec::new(),
        }
    }

    /// Moves time forward by `secs` while playing.
    pub fn advance(&mut self, secs: f64) {
        if self.paused || !secs.is_finite() || secs <= 0.0 {
            return;
        }
        self.time += secs;
        if self.duration.is_finite() && self.duration > 0.0 && self.time >= self.duration {
            self.time = self.duration;
            self.paused = true;
        }
    }

    /// Returns true once playback reached the end of the media.
    #[must_use]
    pub fn ended(&self) -> bool {
        self.duration.is_finite() && self.time >= self.duration
    }

    /// Every command received so far, oldest first.
    #[must_use]
    pub fn commands(&self) -> &[ClockCommand] {
        &self.commands
    }

    /// Returns and forgets the recorded commands.
    pub fn take_commands(&mut self) -> Vec<ClockCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Targets of the recorded seeks.
    #[must_use]
    pub fn seeks(&self) -> Vec<f64> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                ClockCommand::Seek(t) => Some(*t),
                _ => None,
            })
            .collect()
    }
}

impl PlaybackClock for SimulatedClock {
    fn current_time(&self) -> f64 {
        self.time
    }

    fn duration(&self) -> f64 {
        self.duration
    }

    fn seek(&mut self, time: f64) {
        self.commands.push(ClockCommand::Seek(time));
        if time.is_finite() {
            self.time = if self.duration.is_finite() && self.duration > 0.0 {
                time.clamp(0.0, self.duration)
            } else {
                time.max(0.0)
            };
        }
    }

    fn play(&mut self) {
        self.commands.push(ClockCommand::Play);
        self.paused = false;
    }

    fn pause(&mut self) {
        self.commands.push(ClockCommand::Pause);
        self.paused = true;
    }

    fn is_paused(&self) -> bool {
        self.paused
    }
}

// =============================================================================
// MemorySegmentStore
// =============================================================================

/// Segment store kept in a map keyed by media stem.
#[derive(Debug, Clone, Default)]
pub struct MemorySegmentStore {
    entries: HashMap<String, SegmentList>,
    saves: usize,
    failing: bool,
}

impl MemorySegmentStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populates the collection stored for `media`.
    #[must_use]
    pub fn with_entry(mut self, media: &MediaId, segments: SegmentList) -> Self {
        self.entries.insert(media.stem().to_string(), segments);
        self
    }

    /// Makes every following save fail with an I/O error (or succeed again).
    pub fn set_failing(&mut self, failing: bool) {
        self.failing = failing;
    }

    /// Number of successful saves.
    #[must_use]
    pub fn save_count(&self) -> usize {
        self.saves
    }

    /// Stored collection for `media`.
    #[must_use]
    pub fn stored(&self, media: &MediaId) -> Option<&SegmentList> {
        self.entries.get(media.stem())
    }
}

impl SegmentStore for MemorySegmentStore {
    fn save(&mut self, media: &MediaId, segments: &SegmentList) -> Result<(), StoreError> {
        if self.failing {
            return Err(StoreError::Io("store unavailable".to_string()));
        }
        self.entries
            .insert(media.stem().to_string(), segments.clone());
        self.saves += 1;
        Ok(())
    }

    fn load(&mut self, media: &MediaId) -> Result<Option<SegmentList>, StoreError> {
        Ok(self.entries.get(media.stem()).cloned())
    }
}

// =============================================================================
// RegionMirror
// =============================================================================

/// Region host that records the regions and highlight it is given.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegionMirror {
    /// Regions currently shown, by index.
    pub regions: Vec<Region>,
    /// Highlighted region.
    pub active: Option<usize>,
    /// Number of `clear_regions` calls.
    pub clears: usize,
    /// Number of `update_region` calls.
    pub updates: usize,
}

impl RegionHost for RegionMirror {
    fn clear_regions(&mut self) {
        self.regions.clear();
        self.clears += 1;
    }

    fn add_region(&mut self, region: &Region) {
        self.regions.push(region.clone());
    }

    fn update_region(&mut self, region: &Region) {
        self.updates += 1;
        if let Some(slot) = self.regions.get_mut(region.index) {
            *slot = region.clone();
        }
    }

    fn set_active_region(&mut self, index: Option<usize>) {
        self.active = index;
    }
}
