// SPDX-License-Identifier: MPL-2.0
//! Segment mutations, undo/redo, media loading and persistence.
//!
//! Every edit-worthy mutation is validated first, then snapshots the
//! pre-mutation collection, then mutates. Structural changes regenerate all
//! regions; a text change only refreshes one label. Each mutation ends with
//! a save, whose failure is reported but never undoes the edit.

use super::{PlaybackOrchestrator, SyncWarning};
use crate::application::port::{PlaybackClock, RegionHost, SegmentStore};
use crate::application::region_sync::DropOutcome;
use crate::diagnostics::{DiagnosticEventKind, EditKind, HistoryDirection};
use crate::domain::error::SyncError;
use crate::domain::region::clamp_to_media;
use crate::domain::segment::{MediaId, Segment, SegmentList, TextField};

impl<C, S, R> PlaybackOrchestrator<C, S, R>
where
    C: PlaybackClock,
    S: SegmentStore,
    R: RegionHost,
{
    // =========================================================================
    // Media
    // =========================================================================

    /// Replaces the collection with the one for a newly loaded media item.
    ///
    /// `segments` (imported or generated) wins; otherwise the stored
    /// collection is restored, otherwise the item starts empty. Session,
    /// history and pending continuations are reset. A given list is saved.
    pub fn load_media(&mut self, media: MediaId, segments: Option<Vec<Segment>>) {
        self.scheduler.clear();
        self.session.reset();
        self.history.clear();
        self.looping.rearm();
        self.persist_pending = false;

        let provided = segments.is_some();
        let (list, restored) = match segments {
            Some(list) => (SegmentList::from(list), false),
            None => match self.store.load(&media) {
                Ok(Some(list)) => (list, true),
                Ok(None) => (SegmentList::new(), false),
                Err(error) => {
                    self.diagnostics.warn(format!("load failed for {media}: {error}"));
                    self.warnings.push(SyncWarning::LoadFailed {
                        media: media.clone(),
                        error,
                    });
                    (SegmentList::new(), false)
                }
            },
        };

        self.diagnostics.record(DiagnosticEventKind::MediaLoaded {
            media: media.to_string(),
            segments: list.len(),
            restored,
        });
        self.segments = list;
        self.media = Some(media);
        self.regenerate_regions();
        if provided {
            self.persist();
        }
    }

    /// Bulk-replaces the collection (import or regeneration) as one
    /// undoable edit.
    pub fn replace_segments(&mut self, segments: Vec<Segment>) {
        self.history.snapshot(&self.segments);
        self.segments = SegmentList::from(segments);
        self.reset_after_replace();
        self.finish_structural_edit(EditKind::Replace, None);
    }

    // =========================================================================
    // Structural edits
    // =========================================================================

    /// Deletes segment `index`, re-targeting the current index.
    pub fn delete_segment(&mut self, index: usize) -> Result<(), SyncError> {
        self.check_index(index)?;
        self.history.snapshot(&self.segments);
        self.segments.remove(index)?;
        self.session.on_removed(index, self.segments.len());
        self.scheduler.invalidate();
        self.finish_structural_edit(EditKind::Delete, Some(index));
        Ok(())
    }

    /// Inserts a copy of segment `index` right after it.
    pub fn duplicate_segment_after(&mut self, index: usize) -> Result<(), SyncError> {
        self.check_index(index)?;
        self.history.snapshot(&self.segments);
        self.segments.duplicate_after(index)?;
        self.session.on_inserted_after(index);
        self.scheduler.invalidate();
        self.finish_structural_edit(EditKind::Duplicate, Some(index));
        Ok(())
    }

    // =========================================================================
    // Field edits
    // =========================================================================

    /// Replaces one text field of segment `index`.
    pub fn set_segment_text(
        &mut self,
        index: usize,
        field: TextField,
        text: impl Into<String>,
    ) -> Result<(), SyncError> {
        self.check_index(index)?;
        self.history.snapshot(&self.segments);
        self.segments.set_text(index, field, text)?;

        let duration = self.clock.duration();
        self.region_sync
            .refresh(index, &self.segments, duration, &mut self.host);
        self.persist();
        self.record_edit(EditKind::Text, Some(index));
        Ok(())
    }

    /// Manual timing input for segment `index`.
    ///
    /// Bounds are clamped to the media; non-finite input or a degenerate
    /// result keeps the previous timing and returns
    /// [`SyncError::InvalidRange`].
    pub fn set_segment_timing(&mut self, index: usize, start: f64, end: f64) -> Result<(), SyncError> {
        self.check_index(index)?;
        if !start.is_finite() || !end.is_finite() {
            return Err(SyncError::InvalidRange { start, end });
        }
        let duration = self.clock.duration();
        let (start, end) = (clamp_to_media(start, duration), clamp_to_media(end, duration));
        if start >= end {
            return Err(SyncError::InvalidRange { start, end });
        }
        self.apply_bounds(index, start, end, EditKind::Timing)
    }

    // =========================================================================
    // Region drag
    // =========================================================================

    /// The host started dragging or resizing region `index`.
    pub fn on_region_drag_start(&mut self, index: usize) -> bool {
        self.region_sync.begin_drag(index)
    }

    /// The host dropped region `index` at `start..end`.
    ///
    /// Valid bounds are written to the segment as one undoable edit. A
    /// degenerate drop puts the region back and returns
    /// [`SyncError::InvalidRange`].
    pub fn on_region_drag_end(&mut self, index: usize, start: f64, end: f64) -> Result<(), SyncError> {
        if let Err(error) = self.check_index(index) {
            self.regenerate_regions();
            return Err(error);
        }
        let duration = self.clock.duration();
        match self.region_sync.end_drag(index, start, end, duration) {
            DropOutcome::Commit { start, end } => {
                self.apply_bounds(index, start, end, EditKind::RegionDrag)
            }
            DropOutcome::Revert { start, end } => {
                self.region_sync.revert(index, &mut self.host);
                self.record_edit(EditKind::RegionDragRejected, Some(index));
                Err(SyncError::InvalidRange { start, end })
            }
        }
    }

    // =========================================================================
    // History
    // =========================================================================

    /// Restores the previous snapshot. Returns false at the history start.
    pub fn undo(&mut self) -> bool {
        match self.history.undo(&self.segments) {
            Some(restored) => {
                self.restore(restored, HistoryDirection::Undo);
                true
            }
            None => false,
        }
    }

    /// Re-applies the next snapshot. Returns false at the history end.
    pub fn redo(&mut self) -> bool {
        match self.history.redo() {
            Some(restored) => {
                self.restore(restored, HistoryDirection::Redo);
                true
            }
            None => false,
        }
    }

    fn restore(&mut self, segments: SegmentList, direction: HistoryDirection) {
        self.segments = segments;
        self.reset_after_replace();
        self.regenerate_regions();
        self.persist();
        self.diagnostics.record(DiagnosticEventKind::HistoryMoved {
            direction,
            cursor: self.history.cursor(),
        });
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    /// Retries a failed save. Returns true if nothing is left unsaved.
    pub fn flush(&mut self) -> bool {
        if self.persist_pending {
            self.persist();
        }
        !self.persist_pending
    }

    /// Saves the whole collection for the loaded media item.
    fn persist(&mut self) {
        let Some(media) = self.media.as_ref() else {
            return;
        };
        match self.store.save(media, &self.segments) {
            Ok(()) => self.persist_pending = false,
            Err(error) => {
                self.persist_pending = true;
                self.diagnostics
                    .warn(format!("save failed for {media}: {error}"));
                self.warnings.push(SyncWarning::PersistenceFailed {
                    media: media.clone(),
                    error,
                });
            }
        }
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    fn check_index(&self, index: usize) -> Result<(), SyncError> {
        if index < self.segments.len() {
            Ok(())
        } else {
            Err(SyncError::MissingSegment {
                index,
                len: self.segments.len(),
            })
        }
    }

    fn apply_bounds(
        &mut self,
        index: usize,
        start: f64,
        end: f64,
        edit: EditKind,
    ) -> Result<(), SyncError> {
        self.history.snapshot(&self.segments);
        self.segments.set_bounds(index, start, end)?;
        if self.session.current_index == Some(index) {
            self.session.reset_markers();
        }
        self.scheduler.invalidate();
        self.finish_structural_edit(edit, Some(index));
        Ok(())
    }

    /// Session and continuation reset after the collection was swapped out.
    fn reset_after_replace(&mut self) {
        self.session.reset();
        self.scheduler.invalidate();
        self.looping.rearm();
    }

    fn finish_structural_edit(&mut self, edit: EditKind, index: Option<usize>) {
        self.regenerate_regions();
        self.persist();
        self.record_edit(edit, index);
    }

    fn record_edit(&mut self, edit: EditKind, index: Option<usize>) {
        self.diagnostics
            .record(DiagnosticEventKind::Edited { edit, index });
    }
}
