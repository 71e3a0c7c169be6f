// SPDX-License-Identifier: MPL-2.0
//! Subtitle segment entity and its ordered collection.
//!
//! A segment's index is derived from its position in [`SegmentList`] and is
//! never stored on the segment itself.

use super::index;
use crate::domain::error::SyncError;

/// Which text field of a segment an edit targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    /// Original transcript line.
    Transcript,
    /// Original translation line.
    Translation,
    /// Transcript as corrected by the user.
    UserTranscript,
    /// Translation as written by the user.
    UserTranslation,
    /// Free-form note.
    Note,
}

/// A time-coded subtitle unit.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Segment {
    start: f64,
    end: f64,
    transcript: String,
    translation: String,
    user_transcript: String,
    user_translation: String,
    note: String,
}

impl Segment {
    /// Creates a segment with empty text fields.
    ///
    /// Bounds are stored as given; collections tolerate overlapping or
    /// degenerate segments, and edits go through [`SegmentList::set_bounds`].
    #[must_use]
    pub fn new(start: f64, end: f64) -> Self {
        Self {
            start,
            end,
            ..Self::default()
        }
    }

    /// Returns a copy with the original transcript set.
    #[must_use]
    pub fn with_transcript(mut self, text: impl Into<String>) -> Self {
        self.transcript = text.into();
        self
    }

    /// Returns a copy with the original translation set.
    #[must_use]
    pub fn with_translation(mut self, text: impl Into<String>) -> Self {
        self.translation = text.into();
        self
    }

    /// Start time in seconds.
    #[must_use]
    pub fn start(&self) -> f64 {
        self.start
    }

    /// End time in seconds.
    #[must_use]
    pub fn end(&self) -> f64 {
        self.end
    }

    /// Length of the segment in seconds (zero for degenerate segments).
    #[must_use]
    pub fn duration(&self) -> f64 {
        (self.end - self.start).max(0.0)
    }

    /// Returns true if `time` falls in the half-open interval `[start, end)`.
    #[must_use]
    pub fn contains(&self, time: f64) -> bool {
        self.start <= time && time < self.end
    }

    /// Returns true if the bounds are finite, non-negative and ordered.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.start.is_finite() && self.end.is_finite() && self.start >= 0.0 && self.start < self.end
    }

    /// Reads one text field.
    #[must_use]
    pub fn text(&self, field: TextField) -> &str {
        match field {
            TextField::Transcript => &self.transcript,
            TextField::Translation => &self.translation,
            TextField::UserTranscript => &self.user_transcript,
            TextField::UserTranslation => &self.user_translation,
            TextField::Note => &self.note,
        }
    }

    /// Replaces one text field.
    pub fn set_text(&mut self, field: TextField, text: impl Into<String>) {
        let slot = match field {
            TextField::Transcript => &mut self.transcript,
            TextField::Translation => &mut self.translation,
            TextField::UserTranscript => &mut self.user_transcript,
            TextField::UserTranslation => &mut self.user_translation,
            TextField::Note => &mut self.note,
        };
        *slot = text.into();
    }

    /// Text shown for this segment: the user's transcript when present,
    /// otherwise the original one.
    #[must_use]
    pub fn display_text(&self) -> &str {
        let user = self.user_transcript.trim();
        if user.is_empty() {
            self.transcript.trim()
        } else {
            user
        }
    }
}

/// Ordered collection of segments for one media item.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SegmentList {
    segments: Vec<Segment>,
}

impl SegmentList {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of segments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns true if the collection holds no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns the segment at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Segment> {
        self.segments.get(index)
    }

    /// Iterates over segments in order.
    pub fn iter(&self) -> impl Iterator<Item = &Segment> {
        self.segments.iter()
    }

    /// Borrows the segments as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Segment] {
        &self.segments
    }

    /// Index of the segment containing `time`. See [`index::locate`].
    #[must_use]
    pub fn locate(&self, time: f64) -> Option<usize> {
        index::locate(&self.segments, time)
    }

    /// Removes and returns the segment at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::MissingSegment`] if `index` is out of range.
    pub fn remove(&mut self, index: usize) -> Result<Segment, SyncError> {
        self.check(index)?;
        Ok(self.segments.remove(index))
    }

    /// Inserts a copy of the segment at `index` directly after it.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::MissingSegment`] if `index` is out of range.
    pub fn duplicate_after(&mut self, index: usize) -> Result<(), SyncError> {
        self.check(index)?;
        let copy = self.segments[index].clone();
        self.segments.insert(index + 1, copy);
        Ok(())
    }

    /// Replaces one text field of the segment at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::MissingSegment`] if `index` is out of range.
    pub fn set_text(
        &mut self,
        index: usize,
        field: TextField,
        text: impl Into<String>,
    ) -> Result<(), SyncError> {
        self.check(index)?;
        self.segments[index].set_text(field, text);
        Ok(())
    }

    /// Moves the segment at `index` to new bounds.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::MissingSegment`] if `index` is out of range, or
    /// [`SyncError::InvalidRange`] if the bounds are not finite or
    /// `start >= end`. The segment is left untouched on error.
    pub fn set_bounds(&mut self, index: usize, start: f64, end: f64) -> Result<(), SyncError> {
        self.check(index)?;
        if !start.is_finite() || !end.is_finite() || start >= end {
            return Err(SyncError::InvalidRange { start, end });
        }
        let segment = &mut self.segments[index];
        segment.start = start;
        segment.end = end;
        Ok(())
    }

    /// Consumes the collection, returning the inner vector.
    #[must_use]
    pub fn into_vec(self) -> Vec<Segment> {
        self.segments
    }

    fn check(&self, index: usize) -> Result<(), SyncError> {
        if index < self.segments.len() {
            Ok(())
        } else {
            Err(SyncError::MissingSegment {
                index,
                len: self.segments.len(),
            })
        }
    }
}

impl From<Vec<Segment>> for SegmentList {
    fn from(segments: Vec<Segment>) -> Self {
        Self { segments }
    }
}

impl FromIterator<Segment> for SegmentList {
    fn from_iter<I: IntoIterator<Item = Segment>>(iter: I) -> Self {
        Self {
            segments: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SegmentList {
        SegmentList::from(vec![
            Segment::new(0.0, 2.0).with_transcript("hello"),
            Segment::new(2.0, 5.0).with_transcript("world"),
            Segment::new(5.0, 9.0),
        ])
    }

    #[test]
    fn contains_is_half_open() {
        let segment = Segment::new(1.0, 2.0);
        assert!(segment.contains(1.0));
        assert!(segment.contains(1.999));
        assert!(!segment.contains(2.0));
        assert!(!segment.contains(0.999));
    }

    #[test]
    fn display_text_prefers_user_transcript() {
        let mut segment = Segment::new(0.0, 1.0).with_transcript("  original ");
        assert_eq!(segment.display_text(), "original");

        segment.set_text(TextField::UserTranscript, "corrected");
        assert_eq!(segment.display_text(), "corrected");

        segment.set_text(TextField::UserTranscript, "   ");
        assert_eq!(segment.display_text(), "original");
    }

    #[test]
    fn duplicate_after_inserts_copy_at_next_position() {
        let mut list = sample();
        list.duplicate_after(0).unwrap();

        assert_eq!(list.len(), 4);
        assert_eq!(list.get(1), list.get(0));
        assert_eq!(list.get(2).unwrap().start(), 2.0);
    }

    #[test]
    fn set_bounds_rejects_degenerate_range_and_keeps_old_value() {
        let mut list = sample();
        let err = list.set_bounds(1, 4.0, 4.0).unwrap_err();

        assert!(matches!(err, SyncError::InvalidRange { .. }));
        assert_eq!(list.get(1).unwrap().start(), 2.0);
        assert_eq!(list.get(1).unwrap().end(), 5.0);
    }

    #[test]
    fn set_bounds_rejects_nan() {
        let mut list = sample();
        assert!(list.set_bounds(0, f64::NAN, 1.0).is_err());
    }

    #[test]
    fn out_of_range_operations_report_missing_segment() {
        let mut list = sample();
        assert_eq!(
            list.remove(3),
            Err(SyncError::MissingSegment { index: 3, len: 3 })
        );
        assert!(list.duplicate_after(7).is_err());
        assert!(list.set_text(9, TextField::Note, "x").is_err());
    }

    #[test]
    fn is_valid_detects_bad_bounds() {
        assert!(Segment::new(0.0, 0.5).is_valid());
        assert!(!Segment::new(0.5, 0.5).is_valid());
        assert!(!Segment::new(-1.0, 0.5).is_valid());
        assert!(!Segment::new(0.0, f64::INFINITY).is_valid());
    }
}
