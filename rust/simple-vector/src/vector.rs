//! The dynamic array.

use std::mem;

use simple_vector_buffer::OwnedBuffer;
use simple_vector_common::{Error, Result, verify_index};

use crate::capacity_hint::CapacityHint;
use crate::cursor::Cursor;
use crate::growth;

/// A growable contiguous sequence that separates allocated storage from live
/// elements.
///
/// Invariants maintained by every operation:
/// - `size <= capacity`;
/// - `capacity` equals the capacity of the owned buffer;
/// - slots `[0, size)` are the live elements, slots `[size, capacity)` hold
///   unspecified but valid values of `T`.
///
/// Operations that allocate return `Result` and give the strong guarantee: on
/// error the vector is left exactly as it was. Element access comes in an
/// unchecked form (`v[i]`, bounded only by capacity) and a checked form
/// ([`at`](Self::at)) that fails past the live range.
///
/// A moved-from vector ([`take`](Self::take), [`assign_from`](Self::assign_from))
/// gives up its allocation along with its elements: it is left with size 0
/// and capacity 0, not with its old capacity.
pub struct SimpleVector<T> {
    buffer: OwnedBuffer<T>,
    size: usize,
    capacity: usize,
}

impl<T> SimpleVector<T> {
    /// Creates an empty vector with zero capacity. Does not allocate.
    pub fn new() -> SimpleVector<T> {
        SimpleVector {
            buffer: OwnedBuffer::new(),
            size: 0,
            capacity: 0,
        }
    }

    /// Wraps a fully live buffer: size and capacity both equal its capacity.
    pub(crate) fn from_buffer(buffer: OwnedBuffer<T>) -> SimpleVector<T> {
        let size = buffer.capacity();
        SimpleVector {
            buffer,
            size,
            capacity: size,
        }
    }

    /// Number of live elements.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Same as [`size`](Self::size).
    #[inline]
    pub fn len(&self) -> usize {
        self.size
    }

    /// Number of allocated slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the live elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.buffer.as_slice()[..self.size]
    }

    /// Returns the live elements as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        let size = self.size;
        &mut self.buffer.as_mut_slice()[..size]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Fails with an out-of-range error if `index >= size`.
    pub fn at(&self, index: usize) -> Result<&T> {
        verify_index!(index, self.size);
        Ok(&self.buffer[index])
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Fails with an out-of-range error if `index >= size`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T> {
        verify_index!(index, self.size);
        Ok(&mut self.buffer[index])
    }

    /// Checked access through a cursor.
    pub fn at_cursor(&self, position: Cursor) -> Result<&T> {
        self.at(position.offset())
    }

    /// Returns the element at `index`, or `None` if it is not live.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index)
    }

    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.as_slice().first()
    }

    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.as_slice().last()
    }

    /// Cursor to the first live element.
    #[inline]
    pub fn begin(&self) -> Cursor {
        Cursor::new(0)
    }

    /// Cursor one past the last live element.
    #[inline]
    pub fn end(&self) -> Cursor {
        Cursor::new(self.size)
    }

    #[inline]
    pub fn cbegin(&self) -> Cursor {
        self.begin()
    }

    #[inline]
    pub fn cend(&self) -> Cursor {
        self.end()
    }

    /// Removes the last live element. The slot keeps its value as part of
    /// the unused tail; nothing is reallocated.
    ///
    /// # Panics
    ///
    /// Panics if the vector is empty.
    pub fn pop_back(&mut self) {
        assert!(self.size > 0, "pop_back on an empty vector");
        self.size -= 1;
    }

    /// Removes the element at `position`, shifting everything after it one
    /// slot to the left. Returns a cursor to the element that followed the
    /// removed one (`end()` if it was the last).
    ///
    /// Erasing from an empty vector does nothing and returns `begin()`.
    /// Invalidates cursors at or after `position`.
    ///
    /// # Panics
    ///
    /// Panics if the vector is not empty and `position` is not in
    /// `[begin(), end())`.
    pub fn erase(&mut self, position: Cursor) -> Cursor {
        if self.is_empty() {
            return self.begin();
        }
        let offset = position.offset();
        assert!(
            offset < self.size,
            "erase position {offset} is outside the live range of size {}",
            self.size
        );
        let size = self.size;
        self.buffer.as_mut_slice()[offset..size].rotate_left(1);
        self.size -= 1;
        Cursor::new(offset)
    }

    /// Marks every element dead. Capacity and storage are kept.
    pub fn clear(&mut self) {
        self.size = 0;
    }

    /// Exchanges contents with `other` in constant time. Never allocates.
    pub fn swap(&mut self, other: &mut SimpleVector<T>) {
        self.buffer.swap(&mut other.buffer);
        mem::swap(&mut self.size, &mut other.size);
        mem::swap(&mut self.capacity, &mut other.capacity);
    }

    /// Moves the contents out, leaving `self` empty with zero capacity and
    /// ready for reuse.
    pub fn take(&mut self) -> SimpleVector<T> {
        mem::take(self)
    }

    /// Move assignment: drops the current contents and takes over those of
    /// `source`, which is left empty and usable.
    pub fn assign_from(&mut self, source: &mut SimpleVector<T>) {
        *self = source.take();
    }

    /// Slot access bounded by capacity only.
    #[inline]
    pub(crate) fn slot(&self, index: usize) -> &T {
        &self.buffer[index]
    }

    #[inline]
    pub(crate) fn slot_mut(&mut self, index: usize) -> &mut T {
        &mut self.buffer[index]
    }

    /// Releases the buffer along with the number of live elements.
    pub(crate) fn into_parts(self) -> (OwnedBuffer<T>, usize) {
        (self.buffer, self.size)
    }

    /// Switches to `buffer`, dropping the previous one as a unit.
    fn adopt(&mut self, mut buffer: OwnedBuffer<T>, size: usize) {
        log::trace!(
            "simple vector: reallocated {} -> {} slots, size {} -> {}",
            self.capacity,
            buffer.capacity(),
            self.size,
            size
        );
        self.buffer.swap(&mut buffer);
        self.capacity = self.buffer.capacity();
        self.size = size;
    }
}

impl<T: Default> SimpleVector<T> {
    /// Creates `size` default-valued elements; capacity equals `size`.
    pub fn with_size(size: usize) -> Result<SimpleVector<T>> {
        OwnedBuffer::try_new(size).map(SimpleVector::from_buffer)
    }

    /// Creates an empty vector with the hinted capacity already allocated.
    pub fn with_capacity_hint(hint: CapacityHint) -> Result<SimpleVector<T>> {
        let buffer = OwnedBuffer::try_new(hint.capacity())?;
        Ok(SimpleVector {
            capacity: buffer.capacity(),
            buffer,
            size: 0,
        })
    }

    /// Moves the values of `values` in, preserving order. Size and capacity
    /// equal the reported length of the sequence.
    pub fn from_sequence<I>(values: I) -> Result<SimpleVector<T>>
    where
        I: IntoIterator,
        I::IntoIter: ExactSizeIterator<Item = T>,
    {
        let values = values.into_iter();
        let mut buffer = OwnedBuffer::try_new(values.len())?;
        let mut size = 0;
        for (slot, value) in buffer.as_mut_slice().iter_mut().zip(values) {
            *slot = value;
            size += 1;
        }
        Ok(SimpleVector {
            capacity: buffer.capacity(),
            buffer,
            size,
        })
    }

    /// Appends `value` after the last live element.
    ///
    /// O(1) while `size < capacity`; otherwise reallocates exactly like
    /// `insert(end(), value)`.
    pub fn push_back(&mut self, value: T) -> Result<()> {
        if self.size < self.capacity {
            self.buffer[self.size] = value;
            self.size += 1;
            Ok(())
        } else {
            self.insert(self.end(), value).map(|_| ())
        }
    }

    /// Inserts `value` before `position` and returns a cursor to it.
    ///
    /// With spare capacity the elements in `[position, end())` shift one slot
    /// right. Otherwise a buffer of grown capacity is built with the prefix,
    /// the new value and the suffix in place, then adopted. The offset of
    /// `position` is kept across the reallocation, so the returned cursor
    /// always points at the inserted value.
    ///
    /// On error the vector is unchanged and `value` is dropped.
    ///
    /// # Panics
    ///
    /// Panics if `position` is past `end()`.
    pub fn insert(&mut self, position: Cursor, value: T) -> Result<Cursor> {
        let offset = position.offset();
        let size = self.size;
        assert!(
            offset <= size,
            "insert position {offset} is past the end of size {size}"
        );

        if size < self.capacity {
            let slots = self.buffer.as_mut_slice();
            slots[size] = value;
            slots[offset..=size].rotate_right(1);
            self.size += 1;
        } else {
            let required = size
                .checked_add(1)
                .ok_or_else(|| Error::capacity_overflow("insert"))?;
            let mut grown = OwnedBuffer::try_new(growth::grown_capacity(self.capacity, required))?;
            let old = self.buffer.as_mut_slice();
            let new = grown.as_mut_slice();
            new[..offset].swap_with_slice(&mut old[..offset]);
            new[offset] = value;
            new[offset + 1..required].swap_with_slice(&mut old[offset..size]);
            self.adopt(grown, required);
        }
        Ok(Cursor::new(offset))
    }

    /// Changes the number of live elements.
    ///
    /// Shrinking only moves the boundary. Growing within capacity resets the
    /// newly exposed slots to `T::default()`. Growing past capacity
    /// reallocates to `max(new_size, 2 * capacity)`.
    pub fn resize(&mut self, new_size: usize) -> Result<()> {
        if new_size <= self.size {
            self.size = new_size;
        } else if new_size <= self.capacity {
            let size = self.size;
            self.buffer.as_mut_slice()[size..new_size].fill_with(T::default);
            self.size = new_size;
        } else {
            let new_capacity = growth::grown_capacity(self.capacity, new_size);
            self.relocate(new_capacity, new_size)?;
        }
        Ok(())
    }

    /// Ensures capacity is at least `new_capacity`, reallocating to exactly
    /// that many slots if it is not. Never shrinks.
    pub fn reserve(&mut self, new_capacity: usize) -> Result<()> {
        if new_capacity > self.capacity {
            self.relocate(new_capacity, self.size)?;
        }
        Ok(())
    }

    /// Moves the live elements into a fresh default-filled buffer of
    /// `new_capacity` slots and adopts it with `new_size` live elements.
    fn relocate(&mut self, new_capacity: usize, new_size: usize) -> Result<()> {
        debug_assert!(self.size <= new_size && new_size <= new_capacity);
        let mut grown = OwnedBuffer::try_new(new_capacity)?;
        let size = self.size;
        grown.as_mut_slice()[..size].swap_with_slice(&mut self.buffer.as_mut_slice()[..size]);
        self.adopt(grown, new_size);
        Ok(())
    }
}

impl<T: Clone> SimpleVector<T> {
    /// Creates `size` clones of `value`; capacity equals `size`.
    pub fn with_size_and_fill(size: usize, value: T) -> Result<SimpleVector<T>> {
        OwnedBuffer::try_new_with(size, || value.clone()).map(SimpleVector::from_buffer)
    }

    /// Copy construction: an independent vector holding clones of the live
    /// elements, with capacity equal to this vector's size.
    pub fn try_clone(&self) -> Result<SimpleVector<T>> {
        let source = self.as_slice();
        let mut next = 0;
        OwnedBuffer::try_new_with(source.len(), || {
            let value = source[next].clone();
            next += 1;
            value
        })
        .map(SimpleVector::from_buffer)
    }

    /// Copy assignment. The copy is built in full first and then swapped in,
    /// so on error `self` is unchanged.
    pub fn try_assign(&mut self, source: &SimpleVector<T>) -> Result<()> {
        let mut copy = source.try_clone()?;
        self.swap(&mut copy);
        Ok(())
    }
}

impl<T: Clone + Default> SimpleVector<T> {
    /// Appends a clone of `value`.
    pub fn push_back_cloned(&mut self, value: &T) -> Result<()> {
        self.push_back(value.clone())
    }

    /// Inserts a clone of `value` before `position`.
    pub fn insert_cloned(&mut self, position: Cursor, value: &T) -> Result<Cursor> {
        self.insert(position, value.clone())
    }
}

impl<T> Default for SimpleVector<T> {
    fn default() -> Self {
        SimpleVector::new()
    }
}

impl<T: Default> TryFrom<CapacityHint> for SimpleVector<T> {
    type Error = Error;

    fn try_from(hint: CapacityHint) -> Result<Self> {
        SimpleVector::with_capacity_hint(hint)
    }
}
