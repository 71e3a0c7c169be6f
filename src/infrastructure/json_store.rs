// SPDX-License-Identifier: MPL-2.0
//! JSON file adapter for [`SegmentStore`].
//!
//! Each media item's collection is stored as `<dir>/<media stem>.json`: a
//! pretty-printed array of records
//! `{"start", "end", "en", "zh", "userEn", "userZh", "note"}`.
//!
//! Loading walks a fallback chain: the primary directory first, then any
//! extra search directories in the order they were added. A malformed file
//! is skipped so a later location can still answer; its error is reported
//! only when no location yields data.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::fs::write_atomic;
use crate::application::port::{SegmentStore, StoreError};
use crate::domain::segment::{MediaId, Segment, SegmentList, TextField};
use crate::paths;

/// File extension of stored collections.
const EXTENSION: &str = "json";

/// On-disk shape of one segment.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
struct SegmentRecord {
    start: Option<f64>,
    end: Option<f64>,
    en: String,
    zh: String,
    #[serde(rename = "userEn")]
    user_en: String,
    #[serde(rename = "userZh")]
    user_zh: String,
    note: String,
}

impl From<&Segment> for SegmentRecord {
    fn from(segment: &Segment) -> Self {
        Self {
            start: Some(segment.start()),
            end: Some(segment.end()),
            en: segment.text(TextField::Transcript).to_string(),
            zh: segment.text(TextField::Translation).to_string(),
            user_en: segment.text(TextField::UserTranscript).to_string(),
            user_zh: segment.text(TextField::UserTranslation).to_string(),
            note: segment.text(TextField::Note).to_string(),
        }
    }
}

impl SegmentRecord {
    /// Converts to a segment. Records without finite times are dropped;
    /// reversed bounds are swapped.
    fn into_segment(self) -> Option<Segment> {
        let (start, end) = (self.start?, self.end?);
        if !start.is_finite() || !end.is_finite() {
            return None;
        }
        let (start, end) = if start > end { (end, start) } else { (start, end) };

        let mut segment = Segment::new(start, end);
        segment.set_text(TextField::Transcript, self.en);
        segment.set_text(TextField::Translation, self.zh);
        segment.set_text(TextField::UserTranscript, self.user_en);
        segment.set_text(TextField::UserTranslation, self.user_zh);
        segment.set_text(TextField::Note, self.note);
        Some(segment)
    }
}

/// Encodes a collection as pretty JSON.
///
/// # Errors
///
/// Returns [`StoreError::Format`] if serialization fails.
pub fn encode_segments(segments: &SegmentList) -> Result<String, StoreError> {
    let records: Vec<SegmentRecord> = segments.iter().map(SegmentRecord::from).collect();
    serde_json::to_string_pretty(&records).map_err(|e| StoreError::Format(e.to_string()))
}

/// Decodes a JSON array of segment records.
///
/// # Errors
///
/// Returns [`StoreError::Format`] if the text is not an array of records.
pub fn decode_segments(json: &str) -> Result<SegmentList, StoreError> {
    let records: Vec<SegmentRecord> =
        serde_json::from_str(json).map_err(|e| StoreError::Format(e.to_string()))?;
    Ok(records
        .into_iter()
        .filter_map(SegmentRecord::into_segment)
        .collect())
}

/// Reads and decodes a segment file.
///
/// # Errors
///
/// Returns [`StoreError::Io`] if the file cannot be read, or
/// [`StoreError::Format`] if its content is invalid.
pub fn read_segments_file(path: &Path) -> Result<SegmentList, StoreError> {
    let json = fs::read_to_string(path)?;
    decode_segments(&json)
}

/// Segment store backed by one JSON file per media item.
#[derive(Debug, Clone)]
pub struct JsonSegmentStore {
    primary: Option<PathBuf>,
    search_dirs: Vec<PathBuf>,
}

impl JsonSegmentStore {
    /// Creates a store writing into `dir`.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            primary: Some(dir.into()),
            search_dirs: Vec::new(),
        }
    }

    /// Creates a store writing into `<data dir>/subtitles`, resolving the
    /// data directory with `override_path` first (see [`paths`]).
    #[must_use]
    pub fn from_data_dir(override_path: Option<PathBuf>) -> Self {
        Self {
            primary: paths::get_subtitles_dir_with_override(override_path),
            search_dirs: Vec::new(),
        }
    }

    /// Adds a read-only directory consulted when the primary one has no
    /// file for a media item.
    #[must_use]
    pub fn with_search_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.search_dirs.push(dir.into());
        self
    }

    /// Directory new files are written to.
    #[must_use]
    pub fn primary_dir(&self) -> Option<&Path> {
        self.primary.as_deref()
    }

    /// Path of the primary file for `media`.
    #[must_use]
    pub fn path_for(&self, media: &MediaId) -> Option<PathBuf> {
        self.primary.as_ref().map(|dir| file_in(dir, media))
    }

    fn candidates<'a>(&'a self, media: &'a MediaId) -> impl Iterator<Item = PathBuf> + 'a {
        self.primary
            .iter()
            .chain(self.search_dirs.iter())
            .map(move |dir| file_in(dir, media))
    }
}

fn file_in(dir: &Path, media: &MediaId) -> PathBuf {
    dir.join(format!("{}.{EXTENSION}", media.stem()))
}

impl SegmentStore for JsonSegmentStore {
    fn save(&mut self, media: &MediaId, segments: &SegmentList) -> Result<(), StoreError> {
        let path = self.path_for(media).ok_or(StoreError::Unavailable)?;
        let json = encode_segments(segments)?;
        write_atomic(&path, &json)?;
        Ok(())
    }

    fn load(&mut self, media: &MediaId) -> Result<Option<SegmentList>, StoreError> {
        let mut first_error = None;
        for path in self.candidates(media) {
            match read_segments_file(&path) {
                Ok(segments) => return Ok(Some(segments)),
                Err(StoreError::Io(_)) if !path.exists() => continue,
                Err(err) => {
                    if first_error.is_none() {
                        first_error = Some(err);
                    }
                }
            }
        }
        match first_error {
            Some(err) => Err(err),
            None => Ok(None),
        }
    }
}
