// SPDX-License-Identifier: MPL-2.0
//! Time-to-segment lookup.

use super::Segment;

/// Returns the index of the segment whose half-open interval `[start, end)`
/// contains `time`, or `None` when no segment does.
///
/// Overlapping segments resolve to the lowest index. A linear scan is used:
/// collections hold a few hundred segments and this runs once per clock tick.
/// Non-finite times never match.
#[must_use]
pub fn locate(segments: &[Segment], time: f64) -> Option<usize> {
    if !time.is_finite() {
        return None;
    }
    segments.iter().position(|segment| segment.contains(time))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contiguous() -> Vec<Segment> {
        vec![
            Segment::new(0.0, 2.0),
            Segment::new(2.0, 5.0),
            Segment::new(5.0, 9.0),
        ]
    }

    #[test]
    fn finds_containing_segment() {
        let segments = contiguous();
        assert_eq!(locate(&segments, 0.0), Some(0));
        assert_eq!(locate(&segments, 1.99), Some(0));
        assert_eq!(locate(&segments, 2.0), Some(1));
        assert_eq!(locate(&segments, 8.5), Some(2));
    }

    #[test]
    fn returns_none_outside_and_at_final_end() {
        let segments = contiguous();
        assert_eq!(locate(&segments, -0.1), None);
        assert_eq!(locate(&segments, 9.0), None);
        assert_eq!(locate(&segments, 20.0), None);
    }

    #[test]
    fn returns_none_in_gap() {
        let segments = vec![Segment::new(0.0, 1.0), Segment::new(3.0, 4.0)];
        assert_eq!(locate(&segments, 2.0), None);
    }

    #[test]
    fn overlap_resolves_to_lowest_index() {
        let segments = vec![
            Segment::new(0.0, 4.0),
            Segment::new(1.0, 3.0),
            Segment::new(2.0, 6.0),
        ];
        assert_eq!(locate(&segments, 2.5), Some(0));
        assert_eq!(locate(&segments, 4.5), Some(2));
    }

    #[test]
    fn degenerate_segments_never_match() {
        let segments = vec![Segment::new(3.0, 1.0), Segment::new(1.0, 1.0)];
        assert_eq!(locate(&segments, 1.0), None);
        assert_eq!(locate(&segments, 2.0), None);
    }

    #[test]
    fn non_finite_time_never_matches() {
        let segments = contiguous();
        assert_eq!(locate(&segments, f64::NAN), None);
        assert_eq!(locate(&segments, f64::INFINITY), None);
    }

    #[test]
    fn lookup_is_deterministic() {
        let segments = contiguous();
        for step in 0..200 {
            let t = f64::from(step) * 0.05;
            assert_eq!(locate(&segments, t), locate(&segments, t));
        }
    }
}
