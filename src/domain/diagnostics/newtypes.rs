// SPDX-License-Identifier: MPL-2.0
//! Diagnostics newtypes.

// =============================================================================
// Buffer Capacity Bounds
// =============================================================================

/// Event buffer bounds (50 to 5000 events).
pub mod buffer_capacity_bounds {
    /// Minimum buffer capacity.
    pub const MIN: usize = 50;
    /// Maximum buffer capacity.
    pub const MAX: usize = 5000;
    /// Default buffer capacity.
    pub const DEFAULT: usize = 500;
}

// =============================================================================
// BufferCapacity
// =============================================================================

/// Number of banner events kept in memory.
///
/// # Example
///
/// ```
/// use herald::domain::diagnostics::BufferCapacity;
///
/// assert_eq!(BufferCapacity::new(10).value(), 50);
/// assert_eq!(BufferCapacity::new(800).value(), 800);
/// ```
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
    fn buffer_capacity_clamps_to_bounds() {
        assert_eq!(BufferCapacity::new(0).value(), buffer_capacity_bounds::MIN);
        assert_eq!(
            BufferCapacity::new(1_000_000).value(),
            buffer_capacity_bounds::MAX
        );
    }

    #[test]
    fn buffer_capacity_default() {
        assert_eq!(
            BufferCapacity::default().value(),
            buffer_capacity_bounds::DEFAULT
        );
    }
}
