// SPDX-License-Identifier: MPL-2.0
//! Precision listening mode.
//!
//! A mode overlay: it decides nothing per tick, it reconfigures the loop and
//! auto-pause controllers on entry and restores them on exit.

use super::auto_pause::AutoPauseController;
use super::looping::LoopController;

/// Precision mode flag with the auto-pause setting saved on entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PrecisionMode {
    enabled: bool,
    saved_auto_pause: bool,
}

impl PrecisionMode {
    /// Returns whether precision mode is active.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Whether the auto-pause may prime the next segment.
    #[must_use]
    pub fn allows_priming(&self) -> bool {
        !self.enabled
    }

    /// Enters the mode: snapshots the auto-pause flag, forces auto-pause on
    /// and looping off. Returns false if already active.
    pub fn enter(&mut self, auto_pause: &mut AutoPauseController, looping: &mut LoopController) -> bool {
        if self.enabled {
            return false;
        }
        self.saved_auto_pause = auto_pause.is_enabled();
        self.enabled = true;
        auto_pause.set_enabled(true);
        looping.disable();
        true
    }

    /// Leaves the mode, restoring the snapshotted auto-pause flag. Returns
    /// false if the mode was not active.
    pub fn exit(&mut self, auto_pause: &mut AutoPauseController) -> bool {
        if !self.enabled {
            return false;
        }
        self.enabled = false;
        auto_pause.set_enabled(self.saved_auto_pause);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::playback::newtypes::{InterPauseFraction, LoopCount, SettleDelay};

    #[test]
    fn enter_forces_auto_pause_and_disables_loop() {
        let mut mode = PrecisionMode::default();
        let mut auto_pause = AutoPauseController::new(false, SettleDelay::default());
        let mut looping = LoopController::new();
        looping.enable(LoopCount::Infinite, InterPauseFraction::default());

        assert!(mode.enter(&mut auto_pause, &mut looping));
        assert!(auto_pause.is_enabled());
        assert!(!looping.is_enabled());
        assert!(!mode.allows_priming());
    }

    #[test]
    fn exit_restores_saved_flag() {
        let mut mode = PrecisionMode::default();
        let mut auto_pause = AutoPauseController::new(false, SettleDelay::default());
        let mut looping = LoopController::new();

        mode.enter(&mut auto_pause, &mut looping);
        assert!(mode.exit(&mut auto_pause));
        assert!(!auto_pause.is_enabled());
        assert!(mode.allows_priming());
    }

    #[test]
    fn double_enter_keeps_first_snapshot() {
        let mut mode = PrecisionMode::default();
        let mut auto_pause = AutoPauseController::new(false, SettleDelay::default());
        let mut looping = LoopController::new();

        mode.enter(&mut auto_pause, &mut looping);
        assert!(!mode.enter(&mut auto_pause, &mut looping));
        mode.exit(&mut auto_pause);
        assert!(!auto_pause.is_enabled());
    }

    #[test]
    fn exit_without_enter_is_noop() {
        let mut mode = PrecisionMode::default();
        let mut auto_pause = AutoPauseController::new(true, SettleDelay::default());
        assert!(!mode.exit(&mut auto_pause));
        assert!(auto_pause.is_enabled());
    }
}
