// SPDX-License-Identifier: MPL-2.0
//! Single-segment loop state machine.
//!
//! The controller only decides; the orchestrator turns a [`LoopAction`]
//! into clock commands and scheduled continuations.

use super::newtypes::{InterPauseFraction, LoopCount};
use std::time::Duration;

/// Loop state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoopState {
    /// Looping disabled.
    #[default]
    Off,
    /// Finite loop with `remaining` passes left, including the current one.
    ArmedFinite {
        /// Passes still to play.
        remaining: u32,
    },
    /// Infinite loop.
    ArmedInfinite,
    /// Finite loop finished; playback is held paused at the boundary.
    ExhaustedPendingPause,
    /// Finite loop finished; playback moved on to the next segment.
    ExhaustedAdvancing,
}

impl LoopState {
    /// Returns true while a loop is still repeating.
    #[must_use]
    pub fn is_armed(self) -> bool {
        matches!(self, Self::ArmedFinite { .. } | Self::ArmedInfinite)
    }

    /// Returns true once a finite loop has run out.
    #[must_use]
    pub fn is_exhausted(self) -> bool {
        matches!(self, Self::ExhaustedPendingPause | Self::ExhaustedAdvancing)
    }
}

/// How a finished finite loop hands over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopFinish {
    /// Pause at the boundary and wait for input.
    Hold,
    /// Continue playing from the next segment (or stop after the last).
    Advance,
}

/// Decision taken at a boundary while looping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopAction {
    /// Nothing to do for this boundary.
    Idle,
    /// Seek back to the segment start. With `pause`, wait that long
    /// (paused) before resuming.
    Restart {
        /// Inter-repeat pause, if any.
        pause: Option<Duration>,
    },
    /// The loop ran out on this pass.
    Finished(LoopFinish),
}

/// Finite/infinite repeat controller for the current segment.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LoopController {
    count: LoopCount,
    fraction: InterPauseFraction,
    state: LoopState,
}

impl LoopController {
    /// Creates a disabled controller.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Configured repeat count.
    #[must_use]
    pub fn count(&self) -> LoopCount {
        self.count
    }

    /// Configured inter-repeat pause fraction.
    #[must_use]
    pub fn fraction(&self) -> InterPauseFraction {
        self.fraction
    }

    /// Returns true unless the controller is [`LoopState::Off`].
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.state != LoopState::Off
    }

    /// Passes left for a finite loop (`Some(0)` once exhausted), `None` for
    /// infinite or disabled loops.
    #[must_use]
    pub fn remaining(&self) -> Option<u32> {
        match self.state {
            LoopState::ArmedFinite { remaining } => Some(remaining),
            LoopState::ExhaustedPendingPause | LoopState::ExhaustedAdvancing => Some(0),
            LoopState::Off | LoopState::ArmedInfinite => None,
        }
    }

    /// Enables looping with a fresh pass budget.
    pub fn enable(&mut self, count: LoopCount, fraction: InterPauseFraction) {
        self.count = count;
        self.fraction = fraction;
        self.state = Self::armed(count);
    }

    /// Disables looping.
    pub fn disable(&mut self) {
        self.state = LoopState::Off;
    }

    /// Restores the full pass budget (used on navigation to a segment).
    pub fn rearm(&mut self) {
        if self.is_enabled() {
            self.state = Self::armed(self.count);
        }
    }

    /// Re-arms a finished finite loop when its segment is entered again.
    pub fn on_reentry(&mut self) {
        if self.state.is_exhausted() {
            self.state = Self::armed(self.count);
        }
    }

    /// Decides what happens when the current segment's boundary fires.
    ///
    /// `segment_secs` sizes the inter-repeat pause; `auto_pause` selects
    /// between holding and advancing once a finite loop runs out.
    pub fn on_boundary(&mut self, segment_secs: f64, auto_pause: bool) -> LoopAction {
        match self.state {
            LoopState::Off | LoopState::ExhaustedPendingPause | LoopState::ExhaustedAdvancing => {
                LoopAction::Idle
            }
            LoopState::ArmedInfinite => self.restart(segment_secs),
            LoopState::ArmedFinite { remaining } if remaining > 1 => {
                self.state = LoopState::ArmedFinite {
                    remaining: remaining - 1,
                };
                self.restart(segment_secs)
            }
            LoopState::ArmedFinite { .. } => {
                if auto_pause {
                    self.state = LoopState::ExhaustedPendingPause;
                    LoopAction::Finished(LoopFinish::Hold)
                } else {
                    self.state = LoopState::ExhaustedAdvancing;
                    LoopAction::Finished(LoopFinish::Advance)
                }
            }
        }
    }

    fn restart(&self, segment_secs: f64) -> LoopAction {
        let pause = (!self.fraction.is_zero()).then(|| self.fraction.pause_for(segment_secs));
        LoopAction::Restart {
            pause: pause.filter(|d| !d.is_zero()),
        }
    }

    fn armed(count: LoopCount) -> LoopState {
        match count {
            LoopCount::Infinite => LoopState::ArmedInfinite,
            LoopCount::Finite(n) => LoopState::ArmedFinite {
                remaining: n.max(1),
            },
        }
    }
}
