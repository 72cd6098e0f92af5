// callq - callq-foundation
// Module: DynArray - Growable circular dynamic array
//
// Copyright (c) 2026 The callq Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Growable circular dynamic array.
//!
//! `DynArray<T>` stores its elements in a ring of physical slots and keeps a
//! movable `start` offset for the logical front. Removing the front element
//! only advances `start`, so nothing is shifted; appending writes into the
//! slot after the logical end and wraps around to reuse slots freed at the
//! front.
//!
//! # Characteristics
//!
//! - **Amortized O(1) append**: capacity doubles when full
//! - **O(1) indexed access**: logical `i` lives at `(start + i) mod capacity`
//! - **O(1) front removal**: `start` advances, the buffer never shrinks
//! - **Grow-and-compact**: a resize copies the elements into physical
//!   `0..len` of the new storage and resets `start` to 0
//! - **Owned payloads**: values are dropped with the array

use alloc::vec::Vec;
use core::fmt;
use core::iter::FusedIterator;
use core::ops::Index;

use callq_error::{Error, Result};

use crate::tracing::trace_event;

/// Capacity of a freshly created array.
pub const INITIAL_CAPACITY: usize = 4;

/// Factor applied to the capacity when the array is full.
pub const GROWTH_FACTOR: usize = 2;

/// A growable circular array with O(1) removal from the front.
///
/// # Invariants
///
/// 1. `len <= capacity` and `capacity >= 1`
/// 2. `start < capacity`
/// 3. Logical index `i < len` is stored at physical `(start + i) mod capacity`
/// 4. Exactly the `len` slots of the logical range are occupied
///
/// # Examples
///
/// ```
/// use callq_foundation::DynArray;
///
/// let mut array = DynArray::new();
/// array.push_back(1)?;
/// array.push_back(2)?;
/// array.push_back(3)?;
///
/// assert_eq!(array.remove_front()?, 1);
/// assert_eq!(array.get(0)?, &2);
/// assert_eq!(array.len(), 2);
/// # Ok::<(), callq_error::Error>(())
/// ```
#[derive(Clone)]
pub struct DynArray<T> {
    /// Physical slots; `slots.len()` is the capacity
    slots: Vec<Option<T>>,

    /// Physical index of logical element 0
    start: usize,

    /// Number of elements in the logical range
    len: usize,
}

impl<T> DynArray<T> {
    /// Creates an empty array with [`INITIAL_CAPACITY`] slots.
    ///
    /// Aborts on allocation failure like the standard collections do; use
    /// [`DynArray::try_new`] to observe the failure instead.
    #[must_use]
    pub fn new() -> Self {
        let mut slots = Vec::with_capacity(INITIAL_CAPACITY);
        slots.resize_with(INITIAL_CAPACITY, || None);
        Self {
            slots,
            start: 0,
            len: 0,
        }
    }

    /// Creates an empty array with [`INITIAL_CAPACITY`] slots.
    ///
    /// # Errors
    ///
    /// Returns `Err(ALLOCATION_FAILED)` if the storage cannot be obtained.
    pub fn try_new() -> Result<Self> {
        Self::try_with_capacity(INITIAL_CAPACITY)
    }

    /// Creates an empty array with room for `capacity` elements.
    ///
    /// A requested capacity of 0 is raised to 1 so that the modulo mapping
    /// always has a non-zero divisor.
    ///
    /// # Errors
    ///
    /// Returns `Err(ALLOCATION_FAILED)` if the storage cannot be obtained.
    pub fn try_with_capacity(capacity: usize) -> Result<Self> {
        Ok(Self {
            slots: allocate_slots(capacity.max(1))?,
            start: 0,
            len: 0,
        })
    }

    /// Returns the number of elements in the array.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the array holds no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of physical slots.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Appends `value` as the new logical last element.
    ///
    /// When the array is full the storage is first grown to
    /// `GROWTH_FACTOR * capacity` and compacted so that `start` is 0.
    ///
    /// # Errors
    ///
    /// Returns `Err(ALLOCATION_FAILED)` or `Err(CAPACITY_OVERFLOW)` if the
    /// storage could not be grown. The array is left unchanged and `value`
    /// is dropped.
    pub fn push_back(&mut self, value: T) -> Result<()> {
        if self.len == self.capacity() {
            self.grow()?;
        }

        let physical = self.physical_index(self.len);
        self.slots[physical] = Some(value);
        self.len += 1;

        Ok(())
    }

    /// Returns a reference to the element at logical `index`.
    ///
    /// # Errors
    ///
    /// Returns `Err(INDEX_OUT_OF_RANGE)` if `index >= len`.
    #[inline]
    pub fn get(&self, index: usize) -> Result<&T> {
        let physical = self.checked_physical_index(index)?;
        self.slots[physical]
            .as_ref()
            .ok_or(Error::INDEX_OUT_OF_RANGE)
    }

    /// Returns a mutable reference to the element at logical `index`.
    ///
    /// # Errors
    ///
    /// Returns `Err(INDEX_OUT_OF_RANGE)` if `index >= len`.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        let physical = self.checked_physical_index(index)?;
        self.slots[physical]
            .as_mut()
            .ok_or(Error::INDEX_OUT_OF_RANGE)
    }

    /// Overwrites the element at logical `index` and hands the previous
    /// value back to the caller.
    ///
    /// # Errors
    ///
    /// Returns `Err(INDEX_OUT_OF_RANGE)` if `index >= len`; the array is
    /// unchanged and `value` is dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use callq_foundation::DynArray;
    ///
    /// let mut array = DynArray::new();
    /// array.push_back("old")?;
    /// assert_eq!(array.set(0, "new")?, "old");
    /// assert_eq!(array.get(0)?, &"new");
    /// # Ok::<(), callq_error::Error>(())
    /// ```
    pub fn set(&mut self, index: usize, value: T) -> Result<T> {
        let physical = self.checked_physical_index(index)?;
        self.slots[physical]
            .replace(value)
            .ok_or(Error::INDEX_OUT_OF_RANGE)
    }

    /// Returns a reference to the logical first element.
    ///
    /// # Errors
    ///
    /// Returns `Err(EMPTY_CONTAINER)` if the array is empty.
    #[inline]
    pub fn peek_front(&self) -> Result<&T> {
        if self.len == 0 {
            return Err(Error::EMPTY_CONTAINER);
        }
        self.slots[self.start]
            .as_ref()
            .ok_or(Error::EMPTY_CONTAINER)
    }

    /// Removes the logical first element in O(1) and returns it.
    ///
    /// Only `start` moves; capacity is kept and no element is shifted. The
    /// vacated slot is reused once appends wrap around to it.
    ///
    /// # Errors
    ///
    /// Returns `Err(EMPTY_CONTAINER)` if the array is empty.
    pub fn remove_front(&mut self) -> Result<T> {
        if self.len == 0 {
            return Err(Error::EMPTY_CONTAINER);
        }

        let value = self.slots[self.start]
            .take()
            .ok_or(Error::EMPTY_CONTAINER)?;

        // start < capacity, so start + 1 cannot overflow
        self.start = (self.start + 1) % self.capacity();
        self.len -= 1;

        Ok(value)
    }

    /// Drops every element. Capacity is kept and `start` returns to 0.
    pub fn clear(&mut self) {
        while self.remove_front().is_ok() {}
        self.start = 0;
    }

    /// Appends every value produced by `iter`, in order.
    ///
    /// # Errors
    ///
    /// Stops at the first failed append and returns its error; values
    /// appended before the failure stay in the array.
    pub fn try_extend<I: IntoIterator<Item = T>>(&mut self, iter: I) -> Result<()> {
        for value in iter {
            self.push_back(value)?;
        }
        Ok(())
    }

    /// Returns an iterator over the elements in logical order.
    #[inline]
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            array: self,
            front: 0,
            back:  self.len,
        }
    }

    /// Maps a logical index below `capacity` to its physical slot without
    /// forming `start + logical` when that sum would pass the end.
    #[inline]
    fn physical_index(&self, logical: usize) -> usize {
        let until_wrap = self.capacity() - self.start;
        if logical < until_wrap {
            self.start + logical
        } else {
            logical - until_wrap
        }
    }

    #[inline]
    fn checked_physical_index(&self, index: usize) -> Result<usize> {
        if index >= self.len {
            return Err(Error::INDEX_OUT_OF_RANGE);
        }
        Ok(self.physical_index(index))
    }

    /// Grow-and-compact: moves the logical range into physical `0..len` of
    /// a larger buffer.
    fn grow(&mut self) -> Result<()> {
        let old_capacity = self.capacity();
        let new_capacity = old_capacity
            .checked_mul(GROWTH_FACTOR)
            .ok_or(Error::CAPACITY_OVERFLOW)?;

        #[cfg(feature = "tracing")]
        let _span =
            crate::tracing::CollectionTrace::growing(self.len, old_capacity, new_capacity)
                .entered();

        let mut slots = allocate_slots(new_capacity)?;
        for (logical, slot) in slots.iter_mut().take(self.len).enumerate() {
            let physical = self.physical_index(logical);
            *slot = self.slots[physical].take();
        }

        self.slots = slots;
        self.start = 0;

        trace_event!(
            debug,
            len = self.len,
            old_capacity = old_capacity,
            new_capacity = new_capacity,
            "dynarray grown"
        );

        Ok(())
    }
}

/// Obtains `capacity` vacant slots, reporting failure instead of aborting.
fn allocate_slots<T>(capacity: usize) -> Result<Vec<Option<T>>> {
    let mut slots = Vec::new();
    if slots.try_reserve_exact(capacity).is_err() {
        trace_event!(warn, capacity = capacity, "dynarray storage allocation failed");
        return Err(Error::ALLOCATION_FAILED);
    }
    slots.resize_with(capacity, || None);
    Ok(slots)
}

impl<T> Default for DynArray<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for DynArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

// Equality is over the logical sequence, not the physical layout
impl<T: PartialEq> PartialEq for DynArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for DynArray<T> {}

impl<T> Index<usize> for DynArray<T> {
    type Output = T;

    /// Hard-failure form of [`DynArray::get`].
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    #[allow(clippy::panic)]
    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(value) => value,
            Err(_) => panic!(
                "DynArray index out of range: the len is {} but the index is {}",
                self.len, index
            ),
        }
    }
}

/// Borrowing iterator over a [`DynArray`] in logical order.
pub struct Iter<'a, T> {
    array: &'a DynArray<T>,
    front: usize,
    back:  usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        let item = self.array.get(self.front).ok();
        self.front += 1;
        item
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        self.array.get(self.back).ok()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a DynArray<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Owning iterator that drains a [`DynArray`] from the front.
pub struct IntoIter<T> {
    array: DynArray<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.array.remove_front().ok()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.array.len, Some(self.array.len))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> IntoIterator for DynArray<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { array: self }
    }
}
