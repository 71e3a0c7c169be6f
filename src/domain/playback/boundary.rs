// SPDX-License-Identifier: MPL-2.0
//! Boundary debouncing.
//!
//! There is no discrete "segment ended" event; the clock is sampled. Every
//! tick inside a segment's tail window would otherwise re-trigger the same
//! loop or pause action, so the gate lets each approach fire exactly once
//! and re-arms only after time has moved safely back below the window.

use super::newtypes::{BOUNDARY_CLEAR_SECS, BOUNDARY_EPSILON_SECS};
use super::session::PlaybackSession;
use crate::domain::segment::Segment;

/// Returns true when `time` lies in the tail window of `segment`.
#[must_use]
pub fn in_tail_window(segment: &Segment, time: f64) -> bool {
    time >= segment.end() - BOUNDARY_EPSILON_SECS
}

/// Outcome of observing one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateSignal {
    /// Nothing to do.
    Idle,
    /// A previously fired boundary for this segment was re-armed because
    /// time moved back below `end - 2ε`.
    Released,
    /// The boundary action should fire now.
    Fire,
}

impl GateSignal {
    /// Returns true for [`GateSignal::Fire`].
    #[must_use]
    pub fn fired(self) -> bool {
        matches!(self, Self::Fire)
    }
}

/// Stateless gate over the markers held in [`PlaybackSession`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BoundaryGate;

impl BoundaryGate {
    /// Observes one tick for the segment at `index`.
    ///
    /// Clears the markers for `index` once `time` drops below
    /// `end - 2ε` (rewind or restart), then reports whether the boundary
    /// action should fire now. Firing records `index` as triggered.
    pub fn observe(
        session: &mut PlaybackSession,
        index: usize,
        segment: &Segment,
        time: f64,
    ) -> GateSignal {
        let mut released = false;
        if time < segment.end() - BOUNDARY_CLEAR_SECS {
            if session.boundary_triggered_index == Some(index) {
                session.boundary_triggered_index = None;
                released = true;
            }
            if session.last_pause_index == Some(index) {
                session.last_pause_index = None;
            }
        }

        if !in_tail_window(segment, time) || session.boundary_triggered_index == Some(index) {
            return if released {
                GateSignal::Released
            } else {
                GateSignal::Idle
            };
        }

        session.boundary_triggered_index = Some(index);
        GateSignal::Fire
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segment() -> Segment {
        Segment::new(0.0, 2.0)
    }

    #[test]
    fn fires_once_per_tail_window() {
        let mut session = PlaybackSession::new();
        let seg = segment();

        assert_eq!(BoundaryGate::observe(&mut session, 0, &seg, 1.9), GateSignal::Idle);
        assert_eq!(BoundaryGate::observe(&mut session, 0, &seg, 1.96), GateSignal::Fire);
        assert_eq!(BoundaryGate::observe(&mut session, 0, &seg, 1.97), GateSignal::Idle);
        assert_eq!(BoundaryGate::observe(&mut session, 0, &seg, 1.99), GateSignal::Idle);
        assert_eq!(BoundaryGate::observe(&mut session, 0, &seg, 2.05), GateSignal::Idle);
        assert_eq!(session.boundary_triggered_index, Some(0));
    }

    #[test]
    fn marker_survives_between_clear_threshold_and_tail() {
        let mut session = PlaybackSession::new();
        let seg = segment();
        assert!(BoundaryGate::observe(&mut session, 0, &seg, 1.96).fired());

        // 1.92 is below the tail window but not below end - 0.1.
        assert_eq!(BoundaryGate::observe(&mut session, 0, &seg, 1.92), GateSignal::Idle);
        assert_eq!(session.boundary_triggered_index, Some(0));
        assert!(!BoundaryGate::observe(&mut session, 0, &seg, 1.97).fired());
    }

    #[test]
    fn rewind_below_clear_threshold_rearms() {
        let mut session = PlaybackSession::new();
        let seg = segment();
        assert!(BoundaryGate::observe(&mut session, 0, &seg, 1.96).fired());

        assert_eq!(BoundaryGate::observe(&mut session, 0, &seg, 0.0), GateSignal::Released);
        assert_eq!(session.boundary_triggered_index, None);
        assert!(BoundaryGate::observe(&mut session, 0, &seg, 1.96).fired());
    }

    #[test]
    fn rewind_also_clears_pause_marker_for_same_segment() {
        let mut session = PlaybackSession {
            current_index: Some(0),
            last_pause_index: Some(0),
            boundary_triggered_index: Some(0),
        };
        BoundaryGate::observe(&mut session, 0, &segment(), 0.5);
        assert_eq!(session.last_pause_index, None);
    }

    #[test]
    fn marker_for_other_segment_does_not_block() {
        let mut session = PlaybackSession {
            boundary_triggered_index: Some(3),
            ..PlaybackSession::default()
        };
        assert!(BoundaryGate::observe(&mut session, 0, &segment(), 1.99).fired());
        assert_eq!(session.boundary_triggered_index, Some(0));
    }
}
