// SPDX-License-Identifier: MPL-2.0
//! Playback drill newtypes.
//!
//! This module provides type-safe wrappers for loop and pause settings,
//! ensuring they are always within valid ranges.

use std::time::Duration;

// =============================================================================
// Boundary tolerance
// =============================================================================

/// Tail-window width in seconds. A boundary action fires once the clock is
/// within this distance of a segment's end, absorbing tick granularity.
pub const BOUNDARY_EPSILON_SECS: f64 = 0.05;

/// Distance below a segment's end at which a fired boundary re-arms.
pub const BOUNDARY_CLEAR_SECS: f64 = 2.0 * BOUNDARY_EPSILON_SECS;

// =============================================================================
// LoopCount
// =============================================================================

/// How many times a segment is played while looping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopCount {
    /// Play the segment this many times in total (always at least 1).
    Finite(u32),
    /// Repeat until looping is switched off.
    Infinite,
}

impl LoopCount {
    /// Creates a finite loop count, coercing zero to one.
    #[must_use]
    pub fn finite(count: u32) -> Self {
        Self::Finite(count.max(1))
    }

    /// Returns true for [`LoopCount::Infinite`].
    #[must_use]
    pub fn is_infinite(self) -> bool {
        matches!(self, Self::Infinite)
    }

    /// Returns the finite count, if any.
    #[must_use]
    pub fn as_finite(self) -> Option<u32> {
        match self {
            Self::Finite(n) => Some(n.max(1)),
            Self::Infinite => None,
        }
    }
}

impl Default for LoopCount {
    fn default() -> Self {
        Self::Finite(3)
    }
}

// =============================================================================
// InterPauseFraction
// =============================================================================

/// Inter-repeat pause bounds, as a fraction of the segment duration.
pub mod pause_fraction_bounds {
    /// No pause between repeats.
    pub const MIN: f64 = 0.0;
    /// Largest allowed fraction (must stay below 1.0).
    pub const MAX: f64 = 0.95;
    /// Default fraction.
    pub const DEFAULT: f64 = 0.0;
}

/// Pause inserted between loop repeats, relative to the segment length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InterPauseFraction(f64);

impl InterPauseFraction {
    /// Creates a new fraction, clamping to valid range. NaN maps to zero.
    #[must_use]
    pub fn new(fraction: f64) -> Self {
        if fraction.is_nan() {
            return Self(pause_fraction_bounds::MIN);
        }
        Self(fraction.clamp(pause_fraction_bounds::MIN, pause_fraction_bounds::MAX))
    }

    /// Returns the fraction as f64.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Returns true when repeats restart immediately.
    #[must_use]
    pub fn is_zero(self) -> bool {
        self.0 <= 0.0
    }

    /// Pause length for a segment of the given duration in seconds.
    #[must_use]
    pub fn pause_for(self, segment_secs: f64) -> Duration {
        let secs = self.0 * segment_secs;
        if secs.is_nan() || secs <= 0.0 {
            return Duration::ZERO;
        }
        Duration::try_from_secs_f64(secs).unwrap_or(Duration::MAX)
    }
}

impl Default for InterPauseFraction {
    fn default() -> Self {
        Self(pause_fraction_bounds::DEFAULT)
    }
}

// =============================================================================
// SettleDelay
// =============================================================================

/// Priming settle delay bounds in milliseconds.
pub mod settle_delay_bounds {
    /// Minimum delay.
    pub const MIN: u64 = 0;
    /// Maximum delay.
    pub const MAX: u64 = 2_000;
    /// Default delay.
    pub const DEFAULT: u64 = 150;
}

/// Wait between an auto-pause and priming the next segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettleDelay(u64);

impl SettleDelay {
    /// Creates a new delay in milliseconds, clamping to valid range.
    #[must_use]
    pub fn from_millis(ms: u64) -> Self {
        Self(ms.clamp(settle_delay_bounds::MIN, settle_delay_bounds::MAX))
    }

    /// Returns the delay in milliseconds.
    #[must_use]
    pub fn as_millis(self) -> u64 {
        self.0
    }

    /// Returns the delay as a [`Duration`].
    #[must_use]
    pub fn duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for SettleDelay {
    fn default() -> Self {
        Self(settle_delay_bounds::DEFAULT)
    }
}
