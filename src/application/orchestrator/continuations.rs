// SPDX-License-Identifier: MPL-2.0
//! Deferred loop resume and next-segment priming.

use std::time::Duration;

use super::PlaybackOrchestrator;
use crate::application::port::{PlaybackClock, RegionHost, SegmentStore};
use crate::application::scheduler::{Continuation, Due};
use crate::diagnostics::{DiagnosticEventKind, DiscardReason};

impl<C, S, R> PlaybackOrchestrator<C, S, R>
where
    C: PlaybackClock,
    S: SegmentStore,
    R: RegionHost,
{
    /// Advances the continuation timer by `elapsed` wall time and runs
    /// everything that became due, oldest first.
    pub fn advance_timers(&mut self, elapsed: Duration) {
        for due in self.scheduler.advance(elapsed) {
            self.run_continuation(due);
        }
    }

    fn run_continuation(&mut self, due: Due) {
        if let Err(reason) = self.check_applicable(due) {
            self.diagnostics
                .record(DiagnosticEventKind::ContinuationDiscarded { reason });
            return;
        }

        match due.continuation {
            Continuation::ResumeLoop { index } => {
                let Some(start) = self.segments.get(index).map(|s| s.start()) else {
                    return;
                };
                self.clock.seek(start);
                self.clock.play();
            }
            Continuation::PrimeNext { index } => {
                let next = index + 1;
                let Some(start) = self.segments.get(next).map(|s| s.start()) else {
                    return;
                };
                self.clock.seek(start);
                self.session.select(next);
                self.looping.rearm();
                self.host.set_active_region(Some(next));
                self.diagnostics
                    .record(DiagnosticEventKind::Primed { index: next });
            }
        }
    }

    /// Re-validates a continuation against the live context.
    fn check_applicable(&self, due: Due) -> Result<(), DiscardReason> {
        if !self.scheduler.is_current(due.generation) {
            return Err(DiscardReason::Cancelled);
        }
        if !self.clock.is_paused() {
            return Err(DiscardReason::NotPaused);
        }
        let index = match due.continuation {
            Continuation::ResumeLoop { index } | Continuation::PrimeNext { index } => index,
        };
        if self.session.current_index != Some(index) || index >= self.segments.len() {
            return Err(DiscardReason::SegmentChanged);
        }
        match due.continuation {
            Continuation::ResumeLoop { .. } if !self.looping.state().is_armed() => {
                Err(DiscardReason::LoopInactive)
            }
            Continuation::PrimeNext { .. } if index + 1 >= self.segments.len() => {
                Err(DiscardReason::SegmentChanged)
            }
            _ => Ok(()),
        }
    }
}
