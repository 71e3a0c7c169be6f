// SPDX-License-Identifier: MPL-2.0
//! Bounded snapshot-based undo/redo history.
//!
//! Entries are full deep copies of the edited state. Callers snapshot the
//! pre-mutation state before each edit-worthy change; the live post-edit
//! state is captured lazily on the first undo so that redo can return to it.

use std::collections::VecDeque;

// =============================================================================
// HistoryCapacity
// =============================================================================

/// History capacity bounds (number of snapshots kept).
pub mod history_capacity_bounds {
    /// Minimum capacity (one step back needs two entries).
    pub const MIN: usize = 2;
    /// Maximum capacity.
    pub const MAX: usize = 500;
    /// Default capacity.
    pub const DEFAULT: usize = 50;
}

/// Maximum number of snapshots, guaranteed to be within valid range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryCapacity(usize);

impl HistoryCapacity {
    /// Creates a new capacity, clamping to valid range.
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(history_capacity_bounds::MIN, history_capacity_bounds::MAX))
    }

    /// Returns the value as usize.
    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for HistoryCapacity {
    fn default() -> Self {
        Self(history_capacity_bounds::DEFAULT)
    }
}

// =============================================================================
// HistoryStore
// =============================================================================

/// Ordered snapshots plus a cursor.
///
/// Right after [`HistoryStore::snapshot`], `entries[cursor]` equals the live
/// state. `live_ahead` marks that the caller has since mutated past it.
#[derive(Debug, Clone)]
pub struct HistoryStore<T> {
    entries: VecDeque<T>,
    cursor: usize,
    capacity: usize,
    live_ahead: bool,
}

impl<T: Clone> HistoryStore<T> {
    /// Creates an empty history.
    #[must_use]
    pub fn new(capacity: HistoryCapacity) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity.value()),
            cursor: 0,
            capacity: capacity.value(),
            live_ahead: false,
        }
    }

    /// Number of stored snapshots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Position of the entry matching the live state.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Maximum number of snapshots kept.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drops every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.cursor = 0;
        self.live_ahead = false;
    }

    /// Whether an undo operation is currently possible.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.entries.is_empty() && (self.live_ahead || self.cursor > 0)
    }

    /// Whether a redo operation is currently possible.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.live_ahead && self.cursor + 1 < self.entries.len()
    }

    /// Records `current` (the state about to be mutated).
    ///
    /// Entries after the cursor are discarded. When the live state is already
    /// stored at the cursor (fresh history position after undo/redo), no
    /// duplicate entry is pushed. The oldest entry is evicted past capacity.
    pub fn snapshot(&mut self, current: &T) {
        self.entries.truncate(self.cursor + 1);
        if self.live_ahead || self.entries.is_empty() {
            self.push(current.clone());
        }
        self.live_ahead = true;
    }

    /// Steps back one entry, returning a deep copy to restore.
    ///
    /// `live` is the current state; it is stored first if it has not been
    /// captured yet so that [`HistoryStore::redo`] can return to it.
    /// Returns `None` at the history start.
    pub fn undo(&mut self, live: &T) -> Option<T> {
        if self.entries.is_empty() {
            return None;
        }
        if self.live_ahead {
            self.entries.truncate(self.cursor + 1);
            self.push(live.clone());
            self.live_ahead = false;
        }
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        self.entries.get(self.cursor).cloned()
    }

    /// Steps forward one entry, returning a deep copy to restore.
    /// Returns `None` at the history end.
    pub fn redo(&mut self) -> Option<T> {
        if !self.can_redo() {
            return None;
        }
        self.cursor += 1;
        self.entries.get(self.cursor).cloned()
    }

    fn push(&mut self, state: T) {
        self.entries.push_back(state);
        if self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
        self.cursor = self.entries.len() - 1;
    }
}
