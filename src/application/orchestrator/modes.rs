// SPDX-License-Identifier: MPL-2.0
//! Loop, auto-pause and precision mode switches.
//!
//! Every switch cancels pending continuations: a loop resume or a priming
//! seek queued under the old mode never runs under the new one. A player
//! paused by such a continuation stays paused.

use super::PlaybackOrchestrator;
use crate::application::port::{PlaybackClock, RegionHost, SegmentStore};
use crate::diagnostics::{DiagnosticEventKind, PlaybackMode};
use crate::domain::playback::{InterPauseFraction, LoopCount};

impl<C, S, R> PlaybackOrchestrator<C, S, R>
where
    C: PlaybackClock,
    S: SegmentStore,
    R: RegionHost,
{
    /// Turns looping on with `count` passes and `fraction` inter-repeat
    /// pause, or off if it was on. Returns the new state.
    pub fn toggle_loop(&mut self, count: LoopCount, fraction: InterPauseFraction) -> bool {
        self.scheduler.invalidate();
        if self.looping.is_enabled() {
            self.looping.disable();
        } else {
            self.looping.enable(count, fraction);
        }
        let enabled = self.looping.is_enabled();
        self.record_mode(PlaybackMode::Loop, enabled);
        enabled
    }

    /// [`toggle_loop`](Self::toggle_loop) with the configured count and
    /// fraction.
    pub fn toggle_loop_default(&mut self) -> bool {
        let (count, fraction) = (self.settings.loop_count, self.settings.inter_pause_fraction);
        self.toggle_loop(count, fraction)
    }

    /// Flips auto-pause and returns the new state.
    ///
    /// Ignored in precision mode, which keeps auto-pause forced on.
    pub fn toggle_auto_pause(&mut self) -> bool {
        if self.precision.is_enabled() {
            return self.auto_pause.is_enabled();
        }
        self.scheduler.invalidate();
        let enabled = !self.auto_pause.is_enabled();
        self.auto_pause.set_enabled(enabled);
        self.record_mode(PlaybackMode::AutoPause, enabled);
        enabled
    }

    /// Enters precision mode. Returns false if it was already active.
    pub fn enter_precision_mode(&mut self) -> bool {
        if !self.precision.enter(&mut self.auto_pause, &mut self.looping) {
            return false;
        }
        self.scheduler.invalidate();
        self.record_mode(PlaybackMode::Precision, true);
        true
    }

    /// Leaves precision mode. Returns false if it was not active.
    pub fn exit_precision_mode(&mut self) -> bool {
        if !self.precision.exit(&mut self.auto_pause) {
            return false;
        }
        self.scheduler.invalidate();
        self.record_mode(PlaybackMode::Precision, false);
        true
    }

    fn record_mode(&mut self, mode: PlaybackMode, enabled: bool) {
        self.diagnostics
            .record(DiagnosticEventKind::ModeChanged { mode, enabled });
    }
}
