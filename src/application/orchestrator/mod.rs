// SPDX-License-Identifier: MPL-2.0
//! Playback orchestrator: the per-tick driver of the drill engine.
//!
//! The host calls [`PlaybackOrchestrator::evaluate`] on every clock update
//! and [`PlaybackOrchestrator::advance_timers`] with elapsed wall time;
//! user input arrives through the navigation, mode and edit methods. Every
//! method takes `&mut self` and runs to completion, so clock commands
//! issued during a tick can never re-enter the evaluator.
//!
//! The implementation is split by concern:
//! - `tick`: time evaluation and boundary dispatch
//! - `continuations`: deferred loop resume and next-segment priming
//! - `navigation`: direct jumps, region clicks, repeat
//! - `modes`: loop, auto-pause and precision toggles
//! - `edits`: segment mutations, history, media loading, persistence

mod continuations;
mod edits;
mod modes;
mod navigation;
mod settings;
mod tick;


pub use settings::EngineSettings;

use std::fmt;

use crate::application::port::{PlaybackClock, RegionHost, SegmentStore, StoreError};
use crate::application::region_sync::RegionSync;
use crate::application::scheduler::Scheduler;
use crate::diagnostics::DiagnosticsLog;
use crate::domain::history::HistoryStore;
use crate::domain::playback::{
    AutoPauseController, LoopController, LoopState, PlaybackSession, PrecisionMode,
};
use crate::domain::region::Region;
use crate::domain::segment::{MediaId, SegmentList};

/// Non-fatal problem the host may want to surface.
#[derive(Debug, Clone, PartialEq)]
pub enum SyncWarning {
    /// Saving the collection failed; it is retried on the next mutation.
    PersistenceFailed { media: MediaId, error: StoreError },
    /// Reading a stored collection failed; the media loaded empty.
    LoadFailed { media: MediaId, error: StoreError },
}

impl fmt::Display for SyncWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyncWarning::PersistenceFailed { media, error } => {
                write!(f, "Could not save segments for {media}: {error}")
            }
            SyncWarning::LoadFailed { media, error } => {
                write!(f, "Could not load segments for {media}: {error}")
            }
        }
    }
}

/// Composes the segment collection, the drill controllers, history, region
/// sync and deferred continuations around one clock, store and region host.
pub struct PlaybackOrchestrator<C, S, R> {
    clock: C,
    store: S,
    host: R,
    settings: EngineSettings,
    media: Option<MediaId>,
    segments: SegmentList,
    session: PlaybackSession,
    looping: LoopController,
    auto_pause: AutoPauseController,
    precision: PrecisionMode,
    history: HistoryStore<SegmentList>,
    region_sync: RegionSync,
    scheduler: Scheduler,
    diagnostics: DiagnosticsLog,
    warnings: Vec<SyncWarning>,
    persist_pending: bool,
}

impl<C, S, R> PlaybackOrchestrator<C, S, R>
where
    C: PlaybackClock,
    S: SegmentStore,
    R: RegionHost,
{
    /// Creates an orchestrator with no media loaded.
    pub fn new(clock: C, store: S, host: R, settings: EngineSettings) -> Self {
        Self {
            clock,
            store,
            host,
            media: None,
            segments: SegmentList::new(),
            session: PlaybackSession::new(),
            looping: LoopController::new(),
            auto_pause: AutoPauseController::new(settings.auto_pause, settings.settle_delay),
            precision: PrecisionMode::default(),
            history: HistoryStore::new(settings.history_capacity),
            region_sync: RegionSync::new(settings.label_max_chars),
            scheduler: Scheduler::new(),
            diagnostics: DiagnosticsLog::new(settings.diagnostics_capacity),
            warnings: Vec::new(),
            persist_pending: false,
            settings,
        }
    }

    // =========================================================================
    // Collaborators
    // =========================================================================

    /// Playback clock.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Mutable playback clock, for host-driven transport.
    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    /// Segment store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Mutable segment store.
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Region host receiving the projections.
    pub fn region_host(&self) -> &R {
        &self.host
    }

    /// Mutable region host.
    pub fn region_host_mut(&mut self) -> &mut R {
        &mut self.host
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Settings this engine was built with.
    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    /// Media item currently loaded.
    pub fn media(&self) -> Option<&MediaId> {
        self.media.as_ref()
    }

    /// Segment collection of the loaded media item.
    pub fn segments(&self) -> &SegmentList {
        &self.segments
    }

    /// Current playback session markers.
    pub fn session(&self) -> &PlaybackSession {
        &self.session
    }

    /// Index of the segment being played, if any.
    pub fn current_index(&self) -> Option<usize> {
        self.session.current_index
    }

    /// Regions as last pushed to the host.
    pub fn regions(&self) -> &[Region] {
        self.region_sync.regions()
    }

    /// Loop controller state.
    pub fn loop_state(&self) -> LoopState {
        self.looping.state()
    }

    /// Passes left on the current segment's finite loop.
    pub fn loop_remaining(&self) -> Option<u32> {
        self.looping.remaining()
    }

    /// Returns true if looping is on.
    pub fn is_loop_enabled(&self) -> bool {
        self.looping.is_enabled()
    }

    /// Returns true if auto-pause is on.
    pub fn is_auto_pause_enabled(&self) -> bool {
        self.auto_pause.is_enabled()
    }

    /// Returns true in precision mode.
    pub fn is_precision_mode(&self) -> bool {
        self.precision.is_enabled()
    }

    /// Returns true if [`undo`](Self::undo) would restore something.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Returns true if [`redo`](Self::redo) would restore something.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Number of stored history snapshots.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Returns true while a deferred continuation is queued and still valid.
    pub fn has_pending_continuation(&self) -> bool {
        self.scheduler.has_live()
    }

    /// Returns true if the last save failed and has not been retried
    /// successfully yet.
    pub fn has_unsaved_changes(&self) -> bool {
        self.persist_pending
    }

    /// Drill event log.
    pub fn diagnostics(&self) -> &DiagnosticsLog {
        &self.diagnostics
    }

    /// Returns and clears the accumulated warnings.
    pub fn drain_warnings(&mut self) -> Vec<SyncWarning> {
        std::mem::take(&mut self.warnings)
    }

    // =========================================================================
    // Shared helpers
    // =========================================================================

    /// Rebuilds every region from the collection and re-highlights the
    /// current one.
    pub(crate) fn regenerate_regions(&mut self) {
        let duration = self.clock.duration();
        self.region_sync
            .regenerate(&self.segments, duration, &mut self.host);
        self.host.set_active_region(self.session.current_index);
    }

    /// Rebuilds the regions, e.g. once the media duration becomes known.
    pub fn refresh_regions(&mut self) {
        self.regenerate_regions();
    }
}
