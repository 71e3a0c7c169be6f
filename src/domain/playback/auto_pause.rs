// SPDX-License-Identifier: MPL-2.0
//! Pause-at-end behavior for the non-loop boundary path.

use super::newtypes::SettleDelay;
use super::session::PlaybackSession;
use std::time::Duration;

/// Decision taken at a boundary while not looping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoPauseAction {
    /// Keep playing.
    Idle,
    /// Pause now. With `prime_after`, seek to the next segment after that
    /// delay if the player is still paused.
    Pause {
        /// Settle delay before priming, if priming applies.
        prime_after: Option<Duration>,
    },
}

/// Auto-pause configuration and decision logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AutoPauseController {
    enabled: bool,
    settle: SettleDelay,
}

impl AutoPauseController {
    /// Creates a controller.
    #[must_use]
    pub fn new(enabled: bool, settle: SettleDelay) -> Self {
        Self { enabled, settle }
    }

    /// Returns whether auto-pause is on.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Turns auto-pause on or off.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Settle delay applied before priming.
    #[must_use]
    pub fn settle(&self) -> SettleDelay {
        self.settle
    }

    /// Decides what happens when the boundary of segment `index` fires.
    ///
    /// Repeat fires for an index already paused on are no-ops. Priming is
    /// suppressed when `allow_priming` is false (precision mode) or when
    /// there is no next segment.
    pub fn on_boundary(
        &self,
        session: &mut PlaybackSession,
        index: usize,
        playing: bool,
        allow_priming: bool,
        has_next: bool,
    ) -> AutoPauseAction {
        if !self.enabled || !playing || session.last_pause_index == Some(index) {
            return AutoPauseAction::Idle;
        }
        session.last_pause_index = Some(index);
        AutoPauseAction::Pause {
            prime_after: (allow_priming && has_next).then(|| self.settle.duration()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enabled() -> AutoPauseController {
        AutoPauseController::new(true, SettleDelay::from_millis(100))
    }

    #[test]
    fn disabled_controller_keeps_playing() {
        let controller = AutoPauseController::new(false, SettleDelay::default());
        let mut session = PlaybackSession::new();
        assert_eq!(
            controller.on_boundary(&mut session, 0, true, true, true),
            AutoPauseAction::Idle
        );
        assert_eq!(session.last_pause_index, None);
    }

    #[test]
    fn pauses_and_schedules_priming() {
        let mut session = PlaybackSession::new();
        assert_eq!(
            enabled().on_boundary(&mut session, 1, true, true, true),
            AutoPauseAction::Pause {
                prime_after: Some(Duration::from_millis(100))
            }
        );
        assert_eq!(session.last_pause_index, Some(1));
    }

    #[test]
    fn repeat_fire_for_same_index_is_noop() {
        let controller = enabled();
        let mut session = PlaybackSession::new();
        controller.on_boundary(&mut session, 1, true, true, true);
        assert_eq!(
            controller.on_boundary(&mut session, 1, true, true, true),
            AutoPauseAction::Idle
        );
    }

    #[test]
    fn paused_player_is_not_paused_again() {
        let mut session = PlaybackSession::new();
        assert_eq!(
            enabled().on_boundary(&mut session, 0, false, true, true),
            AutoPauseAction::Idle
        );
    }

    #[test]
    fn no_priming_without_permission_or_next_segment() {
        let controller = enabled();
        let mut session = PlaybackSession::new();
        assert_eq!(
            controller.on_boundary(&mut session, 0, true, false, true),
            AutoPauseAction::Pause { prime_after: None }
        );
        assert_eq!(
            controller.on_boundary(&mut session, 2, true, true, false),
            AutoPauseAction::Pause { prime_after: None }
        );
    }
}
