//! Positional handles into the live range of a vector.
//!
//! A `Cursor` is a plain offset from `begin()`. It does not borrow the vector,
//! so nothing stops it from outliving the layout it was taken from: a cursor
//! obtained before a call that reallocates or shifts elements (`push_back` or
//! `insert` past capacity, `erase`, `resize`, `reserve`) must not be used
//! afterwards. Doing so is a logic error; it never reads freed memory, but it
//! may name a different element or fall outside the live range.

use std::ops::{Add, AddAssign, Sub, SubAssign};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Cursor(usize);

impl Cursor {
    #[inline]
    pub const fn new(offset: usize) -> Cursor {
        Cursor(offset)
    }

    /// Offset of the cursor from `begin()`.
    #[inline]
    pub const fn offset(self) -> usize {
        self.0
    }
}

impl Add<usize> for Cursor {
    type Output = Cursor;

    #[inline]
    fn add(self, rhs: usize) -> Cursor {
        Cursor(self.0 + rhs)
    }
}

impl AddAssign<usize> for Cursor {
    #[inline]
    fn add_assign(&mut self, rhs: usize) {
        self.0 += rhs;
    }
}

impl Sub<usize> for Cursor {
    type Output = Cursor;

    #[inline]
    fn sub(self, rhs: usize) -> Cursor {
        Cursor(self.0 - rhs)
    }
}

impl SubAssign<usize> for Cursor {
    #[inline]
    fn sub_assign(&mut self, rhs: usize) {
        self.0 -= rhs;
    }
}

/// Distance between two cursors into the same vector.
impl Sub<Cursor> for Cursor {
    type Output = usize;

    #[inline]
    fn sub(self, rhs: Cursor) -> usize {
        self.0 - rhs.0
    }
}
