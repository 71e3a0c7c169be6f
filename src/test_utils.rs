// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons and engine fixtures.
//!
//! Re-exports the `approx` assertion macros, which handle floating-point
//! precision issues that `assert_eq!` cannot, plus the headless adapters
//! the engine tests are built on.

pub use approx::{assert_abs_diff_eq, assert_relative_eq};

pub use crate::infrastructure::headless::{
    ClockCommand, MemorySegmentStore, RegionMirror, SimulatedClock,
};

use crate::domain::segment::{Segment, SegmentList};

/// Tolerance for media-time comparisons (well below the boundary window).
pub const TIME_EPSILON: f64 = 1e-9;

/// Three contiguous segments: `[0,2)`, `[2,5)`, `[5,9)`.
#[must_use]
pub fn three_segments() -> SegmentList {
    SegmentList::from(vec![
        Segment::new(0.0, 2.0).with_transcript("first line"),
        Segment::new(2.0, 5.0).with_transcript("second line"),
        Segment::new(5.0, 9.0).with_transcript("third line"),
    ])
}
