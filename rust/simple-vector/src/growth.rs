//! Capacity growth policy.
//!
//! Every reallocating path (`push_back`, `insert` and `resize` past the
//! current capacity) asks [`grown_capacity`] for its target, so the growth
//! factor lives in one place. Growth is geometric, which keeps `n` appends at
//! amortized O(1) each with O(log n) reallocations. Capacity never shrinks
//! implicitly.

/// Factor applied to a non-zero capacity when it runs out.
pub const GROWTH_FACTOR: usize = 2;

/// Capacity of the first allocation made by a single-element insertion.
pub const MIN_NON_ZERO_CAPACITY: usize = 1;

/// Returns the capacity to reallocate to when `required` slots no longer fit
/// in `capacity`.
///
/// The result is `max(required, GROWTH_FACTOR * capacity)`, and at least
/// `MIN_NON_ZERO_CAPACITY`. If the doubled capacity overflows, `required`
/// alone is returned and left for the allocator to accept or refuse.
pub fn grown_capacity(capacity: usize, required: usize) -> usize {
    debug_assert!(required > capacity);
    let grown = capacity
        .checked_mul(GROWTH_FACTOR)
        .map_or(required, |doubled| doubled.max(required));
    grown.max(MIN_NON_ZERO_CAPACITY)
}
