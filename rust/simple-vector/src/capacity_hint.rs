//! Capacity-only construction argument.

/// A requested capacity, tagged so that it cannot be mistaken for a size.
///
/// `SimpleVector::with_size(8)` creates eight live elements, while
/// `SimpleVector::with_capacity_hint(reserve_hint(8))` creates an empty vector
/// with room for eight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CapacityHint {
    capacity: usize,
}

impl CapacityHint {
    pub const fn new(capacity: usize) -> CapacityHint {
        CapacityHint { capacity }
    }

    #[inline]
    pub const fn capacity(self) -> usize {
        self.capacity
    }
}

/// Shorthand for [`CapacityHint::new`].
#[inline]
pub const fn reserve_hint(capacity: usize) -> CapacityHint {
    CapacityHint::new(capacity)
}
