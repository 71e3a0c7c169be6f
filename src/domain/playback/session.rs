// SPDX-License-Identifier: MPL-2.0
//! Per-media playback session state.

/// Ephemeral cursor state for one loaded media item.
///
/// The two markers exist only to make boundary actions idempotent per
/// segment. Everything here resets when a new item loads or the collection
/// is structurally replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlaybackSession {
    /// Segment considered current, if any.
    pub current_index: Option<usize>,
    /// Segment the auto-pause last paused on.
    pub last_pause_index: Option<usize>,
    /// Segment whose tail window already fired its boundary action.
    pub boundary_triggered_index: Option<usize>,
}

impl PlaybackSession {
    /// Creates a session with no current segment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears both idempotency markers.
    ///
    /// Used on direct navigation: the new segment's own tail has not been
    /// observed yet.
    pub fn reset_markers(&mut self) {
        self.last_pause_index = None;
        self.boundary_triggered_index = None;
    }

    /// Resets everything to defaults.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Makes `index` current and clears the markers.
    pub fn select(&mut self, index: usize) {
        self.current_index = Some(index);
        self.reset_markers();
    }

    /// Re-targets the session after the segment at `removed` was deleted
    /// from a collection that now holds `new_len` segments.
    pub fn on_removed(&mut self, removed: usize, new_len: usize) {
        self.current_index = match self.current_index {
            _ if new_len == 0 => None,
            Some(current) if current == removed => Some(removed.min(new_len - 1)),
            Some(current) if current > removed => Some(current - 1),
            other => other,
        };
        self.reset_markers();
    }

    /// Re-targets the session after a copy was inserted after `source`.
    pub fn on_inserted_after(&mut self, source: usize) {
        if let Some(current) = self.current_index {
            if current > source {
                self.current_index = Some(current + 1);
            }
        }
        self.reset_markers();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_has_no_current_segment() {
        let session = PlaybackSession::new();
        assert_eq!(session.current_index, None);
        assert_eq!(session.last_pause_index, None);
        assert_eq!(session.boundary_triggered_index, None);
    }

    #[test]
    fn select_clears_markers() {
        let mut session = PlaybackSession {
            current_index: Some(0),
            last_pause_index: Some(0),
            boundary_triggered_index: Some(0),
        };
        session.select(2);
        assert_eq!(session.current_index, Some(2));
        assert_eq!(session.last_pause_index, None);
        assert_eq!(session.boundary_triggered_index, None);
    }

    #[test]
    fn removing_last_current_segment_clamps_to_new_end() {
        let mut session = PlaybackSession {
            current_index: Some(2),
            ..PlaybackSession::default()
        };
        session.on_removed(2, 2);
        assert_eq!(session.current_index, Some(1));
    }

    #[test]
    fn removing_earlier_segment_shifts_current_down() {
        let mut session = PlaybackSession {
            current_index: Some(3),
            ..PlaybackSession::default()
        };
        session.on_removed(1, 4);
        assert_eq!(session.current_index, Some(2));
    }

    #[test]
    fn removing_only_segment_clears_current() {
        let mut session = PlaybackSession {
            current_index: Some(0),
            ..PlaybackSession::default()
        };
        session.on_removed(0, 0);
        assert_eq!(session.current_index, None);
    }

    #[test]
    fn insertion_before_current_shifts_it_up() {
        let mut session = PlaybackSession {
            current_index: Some(2),
            ..PlaybackSession::default()
        };
        session.on_inserted_after(0);
        assert_eq!(session.current_index, Some(3));

        session.on_inserted_after(3);
        assert_eq!(session.current_index, Some(3));
    }
}
