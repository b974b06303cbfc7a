//! Fixed-capacity owned storage.
//!
//! This module provides `OwnedBuffer`, a contiguous block of exactly `capacity`
//! slots with exclusive ownership and no notion of logical length. Every slot
//! always holds a valid value of `T`: the buffer is default-filled as a unit
//! when it is created and dropped as a unit when its owner goes away.
//!
//! # Ownership
//!
//! A buffer is never duplicated. `take` and `swap` transfer storage between
//! owners, and element-wise copying is left to the layer above.

use std::fmt;
use std::mem;
use std::ops::{Index, IndexMut};

use simple_vector_common::{Error, Result};

/// A contiguous block of `capacity` default-initialized slots.
///
/// The zero-capacity buffer owns no heap storage and is the `Default` state.
pub struct OwnedBuffer<T> {
    /// All owned slots. `slots.len()` is the buffer capacity.
    slots: Box<[T]>,
}

impl<T> OwnedBuffer<T> {
    /// Creates a buffer with zero capacity. Does not allocate.
    pub fn new() -> OwnedBuffer<T> {
        OwnedBuffer {
            slots: Box::default(),
        }
    }

    /// Takes ownership of already-initialized slots.
    pub fn from_boxed_slice(slots: Box<[T]>) -> OwnedBuffer<T> {
        OwnedBuffer { slots }
    }

    /// Allocates a buffer of exactly `capacity` slots, each holding
    /// `T::default()`.
    ///
    /// Capacity 0 is legal and allocates nothing.
    ///
    /// # Errors
    ///
    /// Returns an allocation error if the storage cannot be obtained. In that
    /// case no slot has been constructed and nothing leaks.
    pub fn try_new(capacity: usize) -> Result<OwnedBuffer<T>>
    where
        T: Default,
    {
        Self::try_new_with(capacity, T::default)
    }

    /// Allocates a buffer of exactly `capacity` slots, filling each slot with
    /// the result of `f`.
    pub fn try_new_with<F>(capacity: usize, f: F) -> Result<OwnedBuffer<T>>
    where
        F: FnMut() -> T,
    {
        if capacity == 0 {
            return Ok(OwnedBuffer::new());
        }
        let mut slots = Vec::new();
        if slots.try_reserve_exact(capacity).is_err() {
            log::debug!(
                "owned buffer: failed to allocate {capacity} slots of {} bytes",
                mem::size_of::<T>()
            );
            return Err(Error::allocation(capacity, mem::size_of::<T>()));
        }
        slots.resize_with(capacity, f);
        Ok(OwnedBuffer {
            slots: slots.into_boxed_slice(),
        })
    }

    /// Returns the number of slots owned by this buffer.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if the buffer owns no storage.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns all slots as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.slots
    }

    /// Returns all slots as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.slots
    }

    /// Exchanges the storage of two buffers. Never allocates.
    #[inline]
    pub fn swap(&mut self, other: &mut OwnedBuffer<T>) {
        mem::swap(&mut self.slots, &mut other.slots);
    }

    /// Moves the storage out of `self`, leaving `self` with zero capacity.
    #[inline]
    pub fn take(&mut self) -> OwnedBuffer<T> {
        mem::take(self)
    }

    /// Releases ownership of every slot as a `Vec` whose length and capacity
    /// both equal the buffer capacity.
    pub fn into_vec(self) -> Vec<T> {
        self.slots.into_vec()
    }
}

impl<T> Default for OwnedBuffer<T> {
    fn default() -> Self {
        OwnedBuffer::new()
    }
}

impl<T> Index<usize> for OwnedBuffer<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if `index >= capacity`.
    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.slots[index]
    }
}

impl<T> IndexMut<usize> for OwnedBuffer<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.slots[index]
    }
}

impl<T> fmt::Debug for OwnedBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OwnedBuffer")
            .field("capacity", &self.capacity())
            .finish()
    }
}
