// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! Bounds mirror the `*_bounds` modules of the domain newtypes; the tests
//! below keep the two in sync.
//!
//! # Categories
//!
//! - **Playback**: Loop count, inter-repeat pause, auto-pause settle delay
//! - **History**: Undo/redo depth
//! - **Regions**: Waveform label length
//! - **Diagnostics**: Event log size

// ==========================================================================
// Playback Defaults
// ==========================================================================

/// Default number of passes when looping a segment.
pub const DEFAULT_LOOP_COUNT: u32 = 3;

/// Largest finite loop count accepted from settings.
pub const MAX_LOOP_COUNT: u32 = 999;

/// Default inter-repeat pause, as a fraction of the segment duration.
pub const DEFAULT_INTER_PAUSE_FRACTION: f64 = 0.0;

/// Minimum inter-repeat pause fraction.
pub const MIN_INTER_PAUSE_FRACTION: f64 = 0.0;

/// Maximum inter-repeat pause fraction.
pub const MAX_INTER_PAUSE_FRACTION: f64 = 0.95;

/// Whether auto-pause is on for a fresh install.
pub const DEFAULT_AUTO_PAUSE: bool = false;

/// Delay between an auto-pause and priming the next segment (ms).
pub const DEFAULT_SETTLE_DELAY_MS: u64 = 150;

/// Minimum settle delay (ms).
pub const MIN_SETTLE_DELAY_MS: u64 = 0;

/// Maximum settle delay (ms).
pub const MAX_SETTLE_DELAY_MS: u64 = 2_000;

/// Whether jumping to a segment starts playback.
pub const DEFAULT_FORCE_PLAY_ON_JUMP: bool = true;

// ==========================================================================
// History Defaults
// ==========================================================================

/// Default number of undo snapshots.
pub const DEFAULT_HISTORY_MAX_ENTRIES: usize = 50;

/// Minimum number of undo snapshots.
pub const MIN_HISTORY_MAX_ENTRIES: usize = 2;

/// Maximum number of undo snapshots.
pub const MAX_HISTORY_MAX_ENTRIES: usize = 500;

// ==========================================================================
// Region Defaults
// ==========================================================================

/// Default number of characters shown on a waveform region.
pub const DEFAULT_LABEL_MAX_CHARS: usize = 40;

/// Minimum region label length.
pub const MIN_LABEL_MAX_CHARS: usize = 4;

/// Maximum region label length.
pub const MAX_LABEL_MAX_CHARS: usize = 200;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default number of retained drill events.
pub const DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY: usize = 512;

/// Minimum number of retained drill events.
pub const MIN_DIAGNOSTICS_BUFFER_CAPACITY: usize = 16;

/// Maximum number of retained drill events.
pub const MAX_DIAGNOSTICS_BUFFER_CAPACITY: usize = 5000;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::diagnostics::buffer_capacity_bounds;
    use crate::domain::history::history_capacity_bounds;
    use crate::domain::playback::newtypes::{pause_fraction_bounds, settle_delay_bounds};
    use crate::domain::playback::LoopCount;
    use crate::domain::region::label_bounds;

    #[test]
    fn playback_defaults_match_domain() {
        assert_eq!(LoopCount::default(), LoopCount::Finite(DEFAULT_LOOP_COUNT));
        assert_eq!(pause_fraction_bounds::MIN, MIN_INTER_PAUSE_FRACTION);
        assert_eq!(pause_fraction_bounds::MAX, MAX_INTER_PAUSE_FRACTION);
        assert_eq!(pause_fraction_bounds::DEFAULT, DEFAULT_INTER_PAUSE_FRACTION);
        assert_eq!(settle_delay_bounds::MIN, MIN_SETTLE_DELAY_MS);
        assert_eq!(settle_delay_bounds::MAX, MAX_SETTLE_DELAY_MS);
        assert_eq!(settle_delay_bounds::DEFAULT, DEFAULT_SETTLE_DELAY_MS);
    }

    #[test]
    fn history_defaults_match_domain() {
        assert_eq!(history_capacity_bounds::MIN, MIN_HISTORY_MAX_ENTRIES);
        assert_eq!(history_capacity_bounds::MAX, MAX_HISTORY_MAX_ENTRIES);
        assert_eq!(history_capacity_bounds::DEFAULT, DEFAULT_HISTORY_MAX_ENTRIES);
    }

    #[test]
    fn region_and_diagnostics_defaults_match_domain() {
        assert_eq!(label_bounds::MIN, MIN_LABEL_MAX_CHARS);
        assert_eq!(label_bounds::MAX, MAX_LABEL_MAX_CHARS);
        assert_eq!(label_bounds::DEFAULT, DEFAULT_LABEL_MAX_CHARS);
        assert_eq!(buffer_capacity_bounds::MIN, MIN_DIAGNOSTICS_BUFFER_CAPACITY);
        assert_eq!(buffer_capacity_bounds::MAX, MAX_DIAGNOSTICS_BUFFER_CAPACITY);
        assert_eq!(buffer_capacity_bounds::DEFAULT, DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY);
    }
}
