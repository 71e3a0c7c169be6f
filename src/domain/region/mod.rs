// SPDX-License-Identifier: MPL-2.0
//! Waveform region projection of segments.
//!
//! Regions are derived data: one per segment, regenerated wholesale on
//! structural changes. A region is authoritative only between drag start
//! and drop.

use crate::domain::segment::{Segment, SegmentList};

/// Label length bounds (characters shown on a region).
pub mod label_bounds {
    /// Minimum label length.
    pub const MIN: usize = 4;
    /// Maximum label length.
    pub const MAX: usize = 200;
    /// Default label length.
    pub const DEFAULT: usize = 40;
}

/// Region fill color as hue/saturation/lightness/alpha.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionColor {
    /// Hue in degrees, `[0, 360)`.
    pub hue: f32,
    /// Saturation in percent.
    pub saturation: f32,
    /// Lightness in percent.
    pub lightness: f32,
    /// Opacity, `[0, 1]`.
    pub alpha: f32,
}

impl RegionColor {
    /// Saturation used for every region.
    pub const SATURATION: f32 = 70.0;
    /// Lightness used for every region.
    pub const LIGHTNESS: f32 = 60.0;
    /// Opacity used for every region.
    pub const ALPHA: f32 = 0.25;

    /// Creates a color from a hue, wrapping it into `[0, 360)`.
    #[must_use]
    pub fn from_hue(hue: f32) -> Self {
        Self {
            hue: hue.rem_euclid(360.0),
            saturation: Self::SATURATION,
            lightness: Self::LIGHTNESS,
            alpha: Self::ALPHA,
        }
    }

    /// CSS-style `hsla(...)` string, as consumed by web waveform hosts.
    #[must_use]
    pub fn to_css(self) -> String {
        format!(
            "hsla({:.0}, {:.0}%, {:.0}%, {:.2})",
            self.hue, self.saturation, self.lightness, self.alpha
        )
    }
}

/// Visual region bound to the segment at `index`.
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    /// Index of the segment this region mirrors.
    pub index: usize,
    /// Start in seconds, clamped to the media duration.
    pub start: f64,
    /// End in seconds, clamped to the media duration.
    pub end: f64,
    /// Fill color.
    pub color: RegionColor,
    /// Trimmed display label.
    pub label: String,
}

/// Clamps a time into `[0, duration]`. Unknown durations (non-finite or
/// non-positive, e.g. before metadata is loaded) only clamp the lower bound.
/// NaN passes through unchanged.
#[must_use]
pub fn clamp_to_media(time: f64, duration: f64) -> f64 {
    if time.is_nan() {
        return time;
    }
    let lower = time.max(0.0);
    if duration.is_finite() && duration > 0.0 {
        lower.min(duration)
    } else {
        lower
    }
}

/// Trims `text` and shortens it to `max_chars` characters, appending an
/// ellipsis when cut.
#[must_use]
pub fn trim_label(text: &str, max_chars: usize) -> String {
    let text = text.trim();
    let max_chars = max_chars.clamp(label_bounds::MIN, label_bounds::MAX);
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut label: String = text.chars().take(max_chars - 1).collect();
    label.truncate(label.trim_end().len());
    label.push('…');
    label
}

/// Builds the region for one segment.
#[must_use]
pub fn project_region(
    index: usize,
    segment: &Segment,
    duration: f64,
    color: RegionColor,
    label_chars: usize,
) -> Region {
    Region {
        index,
        start: clamp_to_media(segment.start(), duration),
        end: clamp_to_media(segment.end(), duration),
        color,
        label: trim_label(segment.display_text(), label_chars),
    }
}

/// Projects the whole collection, one region per segment in order.
pub fn project_regions(
    segments: &SegmentList,
    duration: f64,
    label_chars: usize,
    color_for: impl Fn(usize) -> RegionColor,
) -> Vec<Region> {
    segments
        .iter()
        .enumerate()
        .map(|(index, segment)| project_region(index, segment, duration, color_for(index), label_chars))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_respects_known_duration() {
        assert_eq!(clamp_to_media(-1.0, 10.0), 0.0);
        assert_eq!(clamp_to_media(12.0, 10.0), 10.0);
        assert_eq!(clamp_to_media(4.0, 10.0), 4.0);
    }

    #[test]
    fn clamp_ignores_unknown_duration() {
        assert_eq!(clamp_to_media(12.0, f64::NAN), 12.0);
        assert_eq!(clamp_to_media(12.0, 0.0), 12.0);
    }

    #[test]
    fn clamp_keeps_nan_visible() {
        assert!(clamp_to_media(f64::NAN, 10.0).is_nan());
        assert!(clamp_to_media(f64::NAN, f64::NAN).is_nan());
    }

    #[test]
    fn trim_label_shortens_long_text() {
        assert_eq!(trim_label("  short  ", 40), "short");
        let long = "a very long subtitle line that will not fit";
        let label = trim_label(long, 10);
        assert_eq!(label.chars().count(), 10);
        assert!(label.ends_with('…'));
    }

    #[test]
    fn trim_label_counts_characters_not_bytes() {
        let label = trim_label("日本語の字幕テキストです", 6);
        assert_eq!(label, "日本語の字…");
    }

    #[test]
    fn hue_wraps_into_wheel() {
        assert_eq!(RegionColor::from_hue(370.0).hue, 10.0);
        assert_eq!(RegionColor::from_hue(-10.0).hue, 350.0);
        assert_eq!(RegionColor::from_hue(200.0).to_css(), "hsla(200, 70%, 60%, 0.25)");
    }

    #[test]
    fn projection_yields_one_region_per_segment() {
        let segments = SegmentList::from(vec![
            Segment::new(0.0, 2.0).with_transcript("one"),
            Segment::new(2.0, 5.0).with_transcript("two"),
            Segment::new(5.0, 12.0),
        ]);
        let regions = project_regions(&segments, 10.0, 40, |i| RegionColor::from_hue(i as f32));

        assert_eq!(regions.len(), 3);
        assert_eq!(regions[1].index, 1);
        assert_eq!(regions[1].label, "two");
        assert_eq!(regions[2].end, 10.0);
    }
}
