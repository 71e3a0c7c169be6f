// SPDX-License-Identifier: MPL-2.0
//! Direct navigation between segments.
//!
//! Navigation bypasses the boundary gate: it clears the idempotency markers
//! because the target's own tail has not been observed yet, and it cancels
//! every pending continuation.

use super::PlaybackOrchestrator;
use crate::application::port::{PlaybackClock, RegionHost, SegmentStore};
use crate::diagnostics::DiagnosticEventKind;
use crate::domain::error::SyncError;

impl<C, S, R> PlaybackOrchestrator<C, S, R>
where
    C: PlaybackClock,
    S: SegmentStore,
    R: RegionHost,
{
    /// Seeks to the start of segment `index` and makes it current.
    ///
    /// With `pause` the player is paused there; otherwise `force_play`
    /// starts playback. An index out of range pauses the player and
    /// returns [`SyncError::MissingSegment`].
    pub fn jump_to_segment(
        &mut self,
        index: usize,
        pause: bool,
        force_play: bool,
    ) -> Result<(), SyncError> {
        let Some(start) = self.segments.get(index).map(|s| s.start()) else {
            self.clock.pause();
            return Err(SyncError::MissingSegment {
                index,
                len: self.segments.len(),
            });
        };

        self.scheduler.invalidate();
        let from = self.session.current_index;
        self.session.select(index);
        self.looping.rearm();
        self.clock.seek(start);
        if pause {
            self.clock.pause();
        } else if force_play {
            self.clock.play();
        }
        self.host.set_active_region(Some(index));
        self.diagnostics.record(DiagnosticEventKind::Navigated {
            from,
            to: index,
            direct: true,
        });
        Ok(())
    }

    /// Jumps to the segment after the current one (the first one if none is
    /// current). At the last segment nothing happens.
    pub fn next(&mut self) -> Result<(), SyncError> {
        let target = self.session.current_index.map_or(0, |i| i + 1);
        if target >= self.segments.len() {
            return Err(SyncError::MissingSegment {
                index: target,
                len: self.segments.len(),
            });
        }
        self.jump_to_segment(target, false, self.settings.force_play_on_jump)
    }

    /// Jumps to the segment before the current one; at the first segment it
    /// restarts that segment.
    pub fn previous(&mut self) -> Result<(), SyncError> {
        let target = self
            .session
            .current_index
            .map_or(0, |i| i.saturating_sub(1));
        if target >= self.segments.len() {
            return Err(SyncError::MissingSegment {
                index: target,
                len: self.segments.len(),
            });
        }
        self.jump_to_segment(target, false, self.settings.force_play_on_jump)
    }

    /// Region click: select the segment and always start playback.
    pub fn on_region_clicked(&mut self, index: usize) -> Result<(), SyncError> {
        self.jump_to_segment(index, false, true)
    }

    /// Replays the current segment from its start, whatever the autoplay
    /// configuration.
    pub fn repeat_current(&mut self) -> Result<(), SyncError> {
        let Some(index) = self.session.current_index else {
            return Err(SyncError::MissingSegment {
                index: 0,
                len: self.segments.len(),
            });
        };
        self.jump_to_segment(index, false, true)
    }
}
