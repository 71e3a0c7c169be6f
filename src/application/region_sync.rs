// SPDX-License-Identifier: MPL-2.0
//! Bridge between the segment collection and the waveform regions.
//!
//! Segments are authoritative at rest. A region becomes authoritative only
//! between a drag start and its drop; the drop is either written back to
//! the segment (then every region is regenerated) or rejected (then the
//! region is put back where its segment says it belongs). Regeneration
//! never reports back as a drag, so the two directions cannot feed each
//! other.

use crate::application::port::RegionHost;
use crate::domain::region::{clamp_to_media, project_region, project_regions, Region, RegionColor};
use crate::domain::segment::SegmentList;

/// Hues closer than this to the previous region's hue are rotated half a
/// turn so neighbours stay distinguishable.
const MIN_NEIGHBOUR_HUE_GAP: f32 = 30.0;

/// Raw hue for a region index, derived from a hash of the index.
fn raw_hue(index: usize) -> f32 {
    let hash = blake3::hash(&(index as u64).to_le_bytes());
    let bytes = hash.as_bytes();
    let value = u16::from_le_bytes([bytes[0], bytes[1]]);
    f32::from(value % 360)
}

fn hue_distance(a: f32, b: f32) -> f32 {
    let diff = (a - b).rem_euclid(360.0);
    diff.min(360.0 - diff)
}

/// Deterministic colors for `len` consecutive regions.
///
/// Each index hashes onto the hue wheel; a hue too close to its
/// predecessor's is rotated by 180 degrees.
#[must_use]
pub fn palette(len: usize) -> Vec<RegionColor> {
    let mut colors: Vec<RegionColor> = Vec::with_capacity(len);
    for index in 0..len {
        let mut hue = raw_hue(index);
        if let Some(previous) = colors.last() {
            if hue_distance(hue, previous.hue) < MIN_NEIGHBOUR_HUE_GAP {
                hue += 180.0;
            }
        }
        colors.push(RegionColor::from_hue(hue));
    }
    colors
}

/// Outcome of a region drop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DropOutcome {
    /// Write these clamped bounds to the segment.
    Commit { start: f64, end: f64 },
    /// The dropped bounds are degenerate; the region must be reverted.
    Revert { start: f64, end: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct ActiveDrag {
    index: usize,
}

/// Mirror of the regions shown by the host plus the drag in progress.
#[derive(Debug, Clone)]
pub struct RegionSync {
    regions: Vec<Region>,
    colors: Vec<RegionColor>,
    label_chars: usize,
    drag: Option<ActiveDrag>,
}

impl RegionSync {
    /// Creates an empty projection with labels cut to `label_chars`.
    #[must_use]
    pub fn new(label_chars: usize) -> Self {
        Self {
            regions: Vec::new(),
            colors: Vec::new(),
            label_chars,
            drag: None,
        }
    }

    /// Regions as last pushed to the host.
    #[must_use]
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// Index of the region being dragged, if any.
    #[must_use]
    pub fn dragging(&self) -> Option<usize> {
        self.drag.map(|d| d.index)
    }

    /// Replaces every region with a fresh projection of `segments`.
    ///
    /// Any drag in progress is abandoned: its index may no longer exist.
    pub fn regenerate(&mut self, segments: &SegmentList, duration: f64, host: &mut impl RegionHost) {
        if self.colors.len() < segments.len() {
            self.colors = palette(segments.len());
        }
        let colors = &self.colors;
        self.regions = project_regions(segments, duration, self.label_chars, |i| colors[i]);
        self.drag = None;

        host.clear_regions();
        for region in &self.regions {
            host.add_region(region);
        }
    }

    /// Re-projects the single region at `index` (label or color change,
    /// no structural change).
    pub fn refresh(
        &mut self,
        index: usize,
        segments: &SegmentList,
        duration: f64,
        host: &mut impl RegionHost,
    ) {
        let (Some(segment), Some(slot)) = (segments.get(index), self.regions.get_mut(index)) else {
            return;
        };
        *slot = project_region(index, segment, duration, slot.color, self.label_chars);
        host.update_region(slot);
    }

    /// Marks the region at `index` as being dragged. Returns false for an
    /// unknown index.
    pub fn begin_drag(&mut self, index: usize) -> bool {
        if index >= self.regions.len() {
            return false;
        }
        self.drag = Some(ActiveDrag { index });
        true
    }

    /// Resolves a drop of region `index` at `start..end`.
    ///
    /// Bounds are clamped to `[0, duration]`; a result with
    /// `start >= end` (or non-finite bounds) is rejected.
    pub fn end_drag(&mut self, index: usize, start: f64, end: f64, duration: f64) -> DropOutcome {
        if self.drag.is_some_and(|d| d.index == index) {
            self.drag = None;
        }
        if !start.is_finite() || !end.is_finite() {
            return DropOutcome::Revert { start, end };
        }
        let start = clamp_to_media(start, duration);
        let end = clamp_to_media(end, duration);
        if start < end {
            DropOutcome::Commit { start, end }
        } else {
            DropOutcome::Revert { start, end }
        }
    }

    /// Pushes the stored projection of region `index` back to the host,
    /// undoing whatever the host displays after a rejected drop.
    pub fn revert(&self, index: usize, host: &mut impl RegionHost) {
        if let Some(region) = self.regions.get(index) {
            host.update_region(region);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::segment::Segment;
    use crate::test_utils::RegionMirror;

    fn segments() -> SegmentList {
        SegmentList::from(vec![
            Segment::new(0.0, 2.0).with_transcript("one"),
            Segment::new(2.0, 5.0).with_transcript("two"),
            Segment::new(5.0, 9.0).with_transcript("three"),
        ])
    }

    #[test]
    fn palette_is_deterministic_and_neighbours_differ() {
        let a = palette(200);
        let b = palette(200);
        assert_eq!(a, b);
        for pair in a.windows(2) {
            assert!(hue_distance(pair[0].hue, pair[1].hue) >= MIN_NEIGHBOUR_HUE_GAP);
        }
    }

    #[test]
    fn palette_prefix_is_stable() {
        assert_eq!(palette(5)[..], palette(50)[..5]);
    }

    #[test]
    fn regenerate_mirrors_segments_on_host() {
        let mut sync = RegionSync::new(40);
        let mut host = RegionMirror::default();

        sync.regenerate(&segments(), 10.0, &mut host);

        assert_eq!(sync.regions().len(), 3);
        assert_eq!(host.regions, sync.regions());
        assert_eq!(host.clears, 1);
        for (region, segment) in sync.regions().iter().zip(segments().iter()) {
            assert_eq!((region.start, region.end), (segment.start(), segment.end()));
        }
    }

    #[test]
    fn regenerate_clamps_to_duration() {
        let mut sync = RegionSync::new(40);
        let mut host = RegionMirror::default();
        sync.regenerate(&segments(), 7.0, &mut host);
        assert_eq!(sync.regions()[2].end, 7.0);
    }

    #[test]
    fn refresh_updates_label_only() {
        let mut sync = RegionSync::new(40);
        let mut host = RegionMirror::default();
        let mut list = segments();
        sync.regenerate(&list, 10.0, &mut host);
        let color = sync.regions()[1].color;

        list.set_text(1, crate::domain::segment::TextField::UserTranscript, "deux")
            .expect("index in range");
        sync.refresh(1, &list, 10.0, &mut host);

        assert_eq!(sync.regions()[1].label, "deux");
        assert_eq!(sync.regions()[1].color, color);
        assert_eq!(host.regions[1].label, "deux");
        assert_eq!(host.clears, 1);
    }

    #[test]
    fn drop_clamps_and_commits() {
        let mut sync = RegionSync::new(40);
        sync.regenerate(&segments(), 10.0, &mut RegionMirror::default());

        assert!(sync.begin_drag(2));
        assert_eq!(sync.dragging(), Some(2));
        assert_eq!(
            sync.end_drag(2, 5.5, 12.0, 10.0),
            DropOutcome::Commit { start: 5.5, end: 10.0 }
        );
        assert_eq!(sync.dragging(), None);
    }

    #[test]
    fn degenerate_drop_is_reverted() {
        let mut sync = RegionSync::new(40);
        let mut host = RegionMirror::default();
        sync.regenerate(&segments(), 10.0, &mut host);

        sync.begin_drag(1);
        let outcome = sync.end_drag(1, 11.0, 12.0, 10.0);
        assert!(matches!(outcome, DropOutcome::Revert { .. }));

        host.regions[1].start = 11.0;
        sync.revert(1, &mut host);
        assert_eq!(host.regions[1].start, 2.0);
    }

    #[test]
    fn non_finite_drop_is_reverted() {
        let mut sync = RegionSync::new(40);
        sync.regenerate(&segments(), 10.0, &mut RegionMirror::default());

        sync.begin_drag(2);
        assert!(matches!(
            sync.end_drag(2, f64::NAN, 9.0, 10.0),
            DropOutcome::Revert { .. }
        ));
        assert!(matches!(
            sync.end_drag(2, 5.0, f64::INFINITY, 10.0),
            DropOutcome::Revert { .. }
        ));
        assert_eq!(sync.dragging(), None);
    }

    #[test]
    fn begin_drag_rejects_unknown_index() {
        let mut sync = RegionSync::new(40);
        assert!(!sync.begin_drag(0));
    }
}
