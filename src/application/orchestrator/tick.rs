// SPDX-License-Identifier: MPL-2.0
//! Per-tick evaluation: which segment is current, and what its boundary does.

use std::time::Duration;

use super::PlaybackOrchestrator;
use crate::application::port::{PlaybackClock, RegionHost, SegmentStore};
use crate::application::scheduler::Continuation;
use crate::diagnostics::DiagnosticEventKind;
use crate::domain::playback::boundary::in_tail_window;
use crate::domain::playback::{AutoPauseAction, BoundaryGate, GateSignal, LoopAction, LoopFinish};

/// How far past its end a segment may still be evaluated as current.
///
/// Covers a tick that lands just after the boundary: the boundary action
/// of the segment being left still fires instead of being skipped. A jump
/// further than this is a seek and simply selects the new segment.
pub(crate) const MAX_BOUNDARY_OVERSHOOT_SECS: f64 = 0.5;

impl<C, S, R> PlaybackOrchestrator<C, S, R>
where
    C: PlaybackClock,
    S: SegmentStore,
    R: RegionHost,
{
    /// Evaluates one clock sample.
    ///
    /// Must be called on every clock update, in order. Seeks and pauses
    /// issued here take effect on the clock immediately and are observed on
    /// the next call.
    pub fn evaluate(&mut self, time: f64) {
        if self.segments.is_empty() || !time.is_finite() {
            return;
        }
        let Some(index) = self.resolve_subject(time) else {
            return;
        };
        if self.session.current_index != Some(index) {
            self.enter_segment(index);
        }

        let Some(segment) = self.segments.get(index) else {
            return;
        };
        // A paused player never fires a boundary; the action waits for play.
        if self.clock.is_paused() && in_tail_window(segment, time) {
            return;
        }
        match BoundaryGate::observe(&mut self.session, index, segment, time) {
            GateSignal::Idle => {}
            GateSignal::Released => self.looping.on_reentry(),
            GateSignal::Fire => self.on_boundary(index, time),
        }
    }

    /// Evaluates the clock's current time.
    pub fn evaluate_now(&mut self) {
        let time = self.clock.current_time();
        self.evaluate(time);
    }

    /// Runs due continuations for `elapsed` wall time, then evaluates the
    /// clock's current time.
    pub fn step(&mut self, elapsed: Duration) {
        self.advance_timers(elapsed);
        self.evaluate_now();
    }

    /// Picks the segment a sample at `time` belongs to.
    ///
    /// The current segment keeps a sample that lies inside it (so direct
    /// navigation into an overlap sticks), and one slightly past its end
    /// while its boundary is still unhandled or the player is paused there.
    fn resolve_subject(&self, time: f64) -> Option<usize> {
        let located = self.segments.locate(time);
        let Some(current) = self.session.current_index else {
            return located;
        };
        let Some(segment) = self.segments.get(current) else {
            return located;
        };
        if time < segment.start() {
            return located;
        }
        if time < segment.end() {
            return Some(current);
        }

        let unhandled = self.session.boundary_triggered_index != Some(current);
        let near_end = time < segment.end() + MAX_BOUNDARY_OVERSHOOT_SECS;
        if located.is_none() || (near_end && (unhandled || self.clock.is_paused())) {
            Some(current)
        } else {
            located
        }
    }

    /// Makes `index` current because playback moved into it.
    fn enter_segment(&mut self, index: usize) {
        let from = self.session.current_index;
        self.session.select(index);
        self.looping.rearm();
        self.host.set_active_region(Some(index));
        self.diagnostics.record(DiagnosticEventKind::Navigated {
            from,
            to: index,
            direct: false,
        });
    }

    fn on_boundary(&mut self, index: usize, time: f64) {
        self.diagnostics.record(DiagnosticEventKind::BoundaryFired {
            index,
            media_time: time,
        });

        let (start, length) = match self.segments.get(index) {
            Some(segment) => (segment.start(), segment.duration()),
            None => return,
        };

        match self.looping.on_boundary(length, self.auto_pause.is_enabled()) {
            LoopAction::Idle => self.auto_pause_boundary(index, time),
            LoopAction::Restart { pause: None } => {
                self.clock.seek(start);
                self.clock.play();
                self.record_restart(index, Duration::ZERO);
            }
            LoopAction::Restart { pause: Some(delay) } => {
                self.clock.pause();
                self.scheduler
                    .schedule(delay, Continuation::ResumeLoop { index });
                self.record_restart(index, delay);
            }
            LoopAction::Finished(LoopFinish::Hold) => {
                self.clock.pause();
                self.session.last_pause_index = Some(index);
                self.diagnostics.record(DiagnosticEventKind::LoopFinished {
                    index,
                    advanced: false,
                });
                self.diagnostics.record(DiagnosticEventKind::AutoPaused {
                    index,
                    media_time: time,
                });
            }
            LoopAction::Finished(LoopFinish::Advance) => {
                self.diagnostics.record(DiagnosticEventKind::LoopFinished {
                    index,
                    advanced: true,
                });
                self.advance_past(index);
            }
        }
    }

    fn auto_pause_boundary(&mut self, index: usize, time: f64) {
        let playing = !self.clock.is_paused();
        let has_next = index + 1 < self.segments.len();
        let action = self.auto_pause.on_boundary(
            &mut self.session,
            index,
            playing,
            self.precision.allows_priming(),
            has_next,
        );
        if let AutoPauseAction::Pause { prime_after } = action {
            self.clock.pause();
            self.diagnostics.record(DiagnosticEventKind::AutoPaused {
                index,
                media_time: time,
            });
            if let Some(delay) = prime_after {
                self.scheduler
                    .schedule(delay, Continuation::PrimeNext { index });
            }
        }
    }

    /// Continues playing from the segment after `index`, or stops after the
    /// last one.
    fn advance_past(&mut self, index: usize) {
        let next = index + 1;
        let Some(start) = self.segments.get(next).map(|s| s.start()) else {
            self.clock.pause();
            return;
        };
        self.clock.seek(start);
        self.session.select(next);
        self.looping.rearm();
        self.host.set_active_region(Some(next));
        self.clock.play();
        self.diagnostics.record(DiagnosticEventKind::Navigated {
            from: Some(index),
            to: next,
            direct: false,
        });
    }

    fn record_restart(&mut self, index: usize, pause: Duration) {
        self.diagnostics.record(DiagnosticEventKind::LoopRestarted {
            index,
            remaining: self.looping.remaining(),
            pause_ms: u64::try_from(pause.as_millis()).unwrap_or(u64::MAX),
        });
    }
}
