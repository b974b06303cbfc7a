//! Standard trait implementations for `SimpleVector`.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Index, IndexMut};

use simple_vector_buffer::OwnedBuffer;

use crate::cursor::Cursor;
use crate::growth;
use crate::infallible::unwrap_alloc;
use crate::vector::SimpleVector;

/// Unchecked access: bounded by capacity, not by size.
///
/// Reading a slot in `[size, capacity)` yields an unspecified value and is a
/// caller error; use [`SimpleVector::at`] for checked access.
///
/// # Panics
///
/// Panics if `index >= capacity`.
impl<T> Index<usize> for SimpleVector<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        self.slot(index)
    }
}

impl<T> IndexMut<usize> for SimpleVector<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        self.slot_mut(index)
    }
}

impl<T> Index<Cursor> for SimpleVector<T> {
    type Output = T;

    #[inline]
    fn index(&self, position: Cursor) -> &T {
        &self[position.offset()]
    }
}

impl<T> IndexMut<Cursor> for SimpleVector<T> {
    #[inline]
    fn index_mut(&mut self, position: Cursor) -> &mut T {
        &mut self[position.offset()]
    }
}

impl<T: PartialEq> PartialEq for SimpleVector<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for SimpleVector<T> {}

impl<T: PartialEq> PartialEq<[T]> for SimpleVector<T> {
    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}

impl<T: PartialEq> PartialEq<Vec<T>> for SimpleVector<T> {
    fn eq(&self, other: &Vec<T>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for SimpleVector<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

/// Lexicographic over the live elements; a proper prefix orders first.
impl<T: PartialOrd> PartialOrd for SimpleVector<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}

impl<T: Ord> Ord for SimpleVector<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl<T: Hash> Hash for SimpleVector<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

impl<T: fmt::Debug> fmt::Debug for SimpleVector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> AsRef<[T]> for SimpleVector<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T: Clone> Clone for SimpleVector<T> {
    fn clone(&self) -> Self {
        unwrap_alloc::<T, _>(self.try_clone())
    }

    fn clone_from(&mut self, source: &Self) {
        unwrap_alloc::<T, _>(self.try_assign(source))
    }
}

impl<T> From<Vec<T>> for SimpleVector<T> {
    fn from(values: Vec<T>) -> Self {
        SimpleVector::from_buffer(OwnedBuffer::from_boxed_slice(values.into_boxed_slice()))
    }
}

impl<T, const N: usize> From<[T; N]> for SimpleVector<T> {
    fn from(values: [T; N]) -> Self {
        let slots: Box<[T]> = Box::new(values);
        SimpleVector::from_buffer(OwnedBuffer::from_boxed_slice(slots))
    }
}

impl<T> FromIterator<T> for SimpleVector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        SimpleVector::from(Vec::from_iter(iter))
    }
}

impl<T: Default> Extend<T> for SimpleVector<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        if let Some(required) = self.size().checked_add(lower) {
            if required > self.capacity() {
                let new_capacity = growth::grown_capacity(self.capacity(), required);
                unwrap_alloc::<T, _>(self.reserve(new_capacity));
            }
        }
        for value in iter {
            unwrap_alloc::<T, _>(self.push_back(value));
        }
    }
}
