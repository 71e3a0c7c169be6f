// SPDX-License-Identifier: MPL-2.0
//! Deferred continuations with generation-based cancellation.
//!
//! The engine has two delayed actions: resuming a loop after its
//! inter-repeat pause and priming the next segment after an auto-pause.
//! Both are queued here against a virtual clock the host advances with
//! elapsed wall time. Every context switch bumps the generation; anything
//! queued under an older generation comes back marked stale and must be
//! dropped by the caller.

use std::time::Duration;

/// A delayed engine action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Continuation {
    /// Seek back to the start of segment `index` and play.
    ResumeLoop { index: usize },
    /// Seek to the segment after `index` without playing.
    PrimeNext { index: usize },
}

/// A continuation whose delay has elapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Due {
    pub continuation: Continuation,
    pub generation: u64,
}

#[derive(Debug, Clone, Copy)]
struct Pending {
    at: Duration,
    seq: u64,
    due: Due,
}

/// Queue of deferred continuations.
#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    now: Duration,
    generation: u64,
    next_seq: u64,
    pending: Vec<Pending>,
}

impl Scheduler {
    /// Creates a scheduler at virtual time zero with nothing queued.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Virtual time elapsed since creation.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Current generation.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Returns true if `generation` is still the current one.
    #[must_use]
    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.generation
    }

    /// Number of queued continuations, stale ones included.
    #[must_use]
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Returns true if a current-generation continuation is queued.
    #[must_use]
    pub fn has_live(&self) -> bool {
        self.pending
            .iter()
            .any(|p| p.due.generation == self.generation)
    }

    /// Queues `continuation` to fire once `delay` has elapsed.
    pub fn schedule(&mut self, delay: Duration, continuation: Continuation) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.pending.push(Pending {
            at: self.now.saturating_add(delay),
            seq,
            due: Due {
                continuation,
                generation: self.generation,
            },
        });
    }

    /// Starts a new generation. Everything queued so far becomes stale.
    pub fn invalidate(&mut self) {
        self.generation += 1;
    }

    /// Advances virtual time and returns the continuations now due, in the
    /// order they were due (ties in scheduling order).
    pub fn advance(&mut self, elapsed: Duration) -> Vec<Due> {
        self.now = self.now.saturating_add(elapsed);
        let now = self.now;

        let mut due: Vec<Pending> = Vec::new();
        self.pending.retain(|p| {
            if p.at <= now {
                due.push(*p);
                false
            } else {
                true
            }
        });
        due.sort_by_key(|p| (p.at, p.seq));
        due.into_iter().map(|p| p.due).collect()
    }

    /// Drops every queued continuation and starts a new generation.
    pub fn clear(&mut self) {
        self.pending.clear();
        self.invalidate();
    }
}
