// SPDX-License-Identifier: MPL-2.0
//! Ring buffer for diagnostic events.

use std::collections::VecDeque;

pub use crate::domain::diagnostics::BufferCapacity;

/// Fixed-capacity buffer that evicts its oldest entry when full.
///
/// # Example
///
/// ```
/// use herald::diagnostics::CircularBuffer;
///
/// let mut buffer: CircularBuffer<u8> = CircularBuffer::with_raw_capacity(2);
/// buffer.push(1);
/// buffer.push(2);
/// buffer.push(3);
///
/// let items: Vec<_> = buffer.iter().copied().collect();
/// assert_eq!(items, vec![2, 3]);
/// ```
#[derive(Debug, Clone)]
pub struct CircularBuffer<T> {
    data: VecDeque<T>,
    capacity: usize,
}

impl<T> CircularBuffer<T> {
    /// Creates a buffer with a validated capacity.
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        Self::with_raw_capacity(capacity.value())
    }

    /// Creates a buffer with an arbitrary capacity (at least 1).
    #[must_use]
    pub fn with_raw_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            data: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Appends an element, evicting the oldest if at capacity.
    pub fn push(&mut self, item: T) {
        if self.data.len() >= self.capacity {
            self.data.pop_front();
        }
        self.data.push_back(item);
    }

    /// Elements, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    /// Number of stored elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the buffer is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Maximum number of elements.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drops every element.
    pub fn clear(&mut self) {
        self.data.clear();
    }
}
