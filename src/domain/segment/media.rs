// SPDX-License-Identifier: MPL-2.0
//! Media identity used to key stored segment collections.

use std::fmt;
use std::path::Path;

/// Identity of a loaded media item (file name, path or URI).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MediaId(String);

impl MediaId {
    /// Wraps a media name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the raw media name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// File stem of the media name, used as the persistence key.
    ///
    /// Falls back to `"untitled"` when the name has no usable stem.
    #[must_use]
    pub fn stem(&self) -> &str {
        Path::new(&self.0)
            .file_stem()
            .and_then(|s| s.to_str())
            .filter(|s| !s.is_empty())
            .unwrap_or("untitled")
    }
}

impl fmt::Display for MediaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stem_strips_directories_and_extension() {
        assert_eq!(MediaId::new("media/lesson 01.mp3").stem(), "lesson 01");
        assert_eq!(MediaId::new("clip.tar.mp4").stem(), "clip.tar");
    }

    #[test]
    fn stem_falls_back_for_empty_name() {
        assert_eq!(MediaId::new("").stem(), "untitled");
    }
}
