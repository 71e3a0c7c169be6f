// SPDX-License-Identifier: MPL-2.0
//! Diagnostics newtypes.

/// Event log capacity bounds.
pub mod buffer_capacity_bounds {
    /// Minimum number of retained events.
    pub const MIN: usize = 16;
    /// Maximum number of retained events.
    pub const MAX: usize = 5000;
    /// Default number of retained events.
    pub const DEFAULT: usize = 512;
}

/// Number of drill events the diagnostics log retains.
///
/// Playback emits a handful of events per segment, so the default keeps
/// a long session's worth before the oldest entries are evicted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferCapacity(usize);

impl BufferCapacity {
    /// Creates a new buffer capacity, clamping to valid range.
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(buffer_capacity_bounds::MIN, buffer_capacity_bounds::MAX))
    }

    /// Returns the value as usize.
    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for BufferCapacity {
    fn default() -> Self {
        Self(buffer_capacity_bounds::DEFAULT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_clamps_to_bounds() {
        assert_eq!(BufferCapacity::new(0).value(), buffer_capacity_bounds::MIN);
        assert_eq!(BufferCapacity::new(1_000_000).value(), buffer_capacity_bounds::MAX);
        assert_eq!(BufferCapacity::new(100).value(), 100);
    }

    #[test]
    fn default_is_within_bounds() {
        let value = BufferCapacity::default().value();
        assert!((buffer_capacity_bounds::MIN..=buffer_capacity_bounds::MAX).contains(&value));
    }
}
