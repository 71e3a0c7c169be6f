// SPDX-License-Identifier: MPL-2.0
//! Validated settings the orchestrator is built with.

use crate::domain::diagnostics::BufferCapacity;
use crate::domain::history::HistoryCapacity;
use crate::domain::playback::{InterPauseFraction, LoopCount, SettleDelay};
use crate::domain::region::label_bounds;

/// Engine configuration, every value already clamped into range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineSettings {
    /// Loop count used when looping is toggled on without explicit values.
    pub loop_count: LoopCount,
    /// Inter-repeat pause used with `loop_count`.
    pub inter_pause_fraction: InterPauseFraction,
    /// Initial auto-pause state.
    pub auto_pause: bool,
    /// Delay before priming the next segment after an auto-pause.
    pub settle_delay: SettleDelay,
    /// Whether navigation starts playback.
    pub force_play_on_jump: bool,
    /// Undo depth.
    pub history_capacity: HistoryCapacity,
    /// Characters shown on a region label.
    pub label_max_chars: usize,
    /// Retained diagnostic events.
    pub diagnostics_capacity: BufferCapacity,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            loop_count: LoopCount::default(),
            inter_pause_fraction: InterPauseFraction::default(),
            auto_pause: false,
            settle_delay: SettleDelay::default(),
            force_play_on_jump: true,
            history_capacity: HistoryCapacity::default(),
            label_max_chars: label_bounds::DEFAULT,
            diagnostics_capacity: BufferCapacity::default(),
        }
    }
}
