// SPDX-License-Identifier: MPL-2.0
//! Bounded ring buffer for the drill event log.
//!
//! Oldest entries are evicted once capacity is reached; the number of
//! evictions is kept so a report can say how much history it is missing.

use std::collections::VecDeque;

pub use crate::domain::diagnostics::BufferCapacity;

/// Fixed-capacity buffer, oldest element first.
///
/// # Example
///
/// ```
/// use segloop::diagnostics::{BufferCapacity, CircularBuffer};
///
/// let mut buffer: CircularBuffer<u32> = CircularBuffer::new(BufferCapacity::new(16));
/// for i in 0..20 {
///     buffer.push(i);
/// }
///
/// assert_eq!(buffer.len(), 16);
/// assert_eq!(buffer.evicted(), 4);
/// assert_eq!(buffer.iter().next(), Some(&4));
/// ```
#[derive(Debug, Clone)]
pub struct CircularBuffer<T> {
    data: VecDeque<T>,
    capacity: usize,
    evicted: u64,
}

impl<T> CircularBuffer<T> {
    /// Creates an empty buffer holding at most `capacity` elements.
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        Self::with_raw_capacity(capacity.value())
    }

    /// Creates a buffer from an unchecked capacity (at least 1).
    ///
    /// Intended for tests that need tiny buffers.
    #[must_use]
    pub fn with_raw_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            data: VecDeque::with_capacity(capacity),
            capacity,
            evicted: 0,
        }
    }

    /// Appends `item`, evicting the oldest element when full.
    pub fn push(&mut self, item: T) {
        if self.data.len() >= self.capacity {
            self.data.pop_front();
            self.evicted += 1;
        }
        self.data.push_back(item);
    }

    /// Iterates oldest first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> {
        self.data.iter()
    }

    /// Most recently pushed element.
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.data.back()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of elements dropped to make room since creation or the last
    /// [`clear`](Self::clear).
    #[must_use]
    pub fn evicted(&self) -> u64 {
        self.evicted
    }

    /// Removes every element and resets the eviction count.
    pub fn clear(&mut self) {
        self.data.clear();
        self.evicted = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_insertion_order() {
        let mut buffer = CircularBuffer::with_raw_capacity(4);
        buffer.push("a");
        buffer.push("b");
        buffer.push("c");

        assert_eq!(buffer.iter().copied().collect::<Vec<_>>(), ["a", "b", "c"]);
        assert_eq!(buffer.last(), Some(&"c"));
        assert_eq!(buffer.evicted(), 0);
    }

    #[test]
    fn overflow_evicts_oldest_and_counts() {
        let mut buffer = CircularBuffer::with_raw_capacity(3);
        for i in 1..=5 {
            buffer.push(i);
        }

        assert_eq!(buffer.iter().copied().collect::<Vec<_>>(), [3, 4, 5]);
        assert_eq!(buffer.len(), 3);
        assert_eq!(buffer.evicted(), 2);
    }

    #[test]
    fn clear_resets_contents_and_counter() {
        let mut buffer = CircularBuffer::with_raw_capacity(2);
        buffer.push(1);
        buffer.push(2);
        buffer.push(3);
        buffer.clear();

        assert!(buffer.is_empty());
        assert_eq!(buffer.evicted(), 0);
        assert_eq!(buffer.capacity(), 2);
    }

    #[test]
    fn zero_raw_capacity_still_holds_one() {
        let mut buffer = CircularBuffer::with_raw_capacity(0);
        buffer.push(7);
        buffer.push(8);
        assert_eq!(buffer.iter().copied().collect::<Vec<_>>(), [8]);
    }

    #[test]
    fn new_uses_buffer_capacity() {
        let buffer: CircularBuffer<u8> = CircularBuffer::new(BufferCapacity::new(100));
        assert_eq!(buffer.capacity(), 100);
    }
}
