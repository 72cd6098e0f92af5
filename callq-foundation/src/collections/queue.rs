// callq - callq-foundation
// Module: Queue - FIFO adapter over DynArray
//
// Copyright (c) 2026 The callq Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! FIFO queue backed by a [`DynArray`].
//!
//! `enqueue` appends at the logical end and `dequeue` removes at the logical
//! front, both in (amortized) O(1). Dequeuing from an empty queue is an
//! ordinary outcome in a polling workflow and yields `None` rather than an
//! error.

use core::fmt;

use callq_error::Result;

use super::dyn_array::{DynArray, Iter};

/// A FIFO queue that owns its elements.
///
/// # Examples
///
/// ```
/// use callq_foundation::Queue;
///
/// let mut queue = Queue::new();
/// queue.enqueue("A")?;
/// queue.enqueue("B")?;
///
/// assert_eq!(queue.front(), Some(&"A"));
/// assert_eq!(queue.dequeue(), Some("A"));
/// assert_eq!(queue.dequeue(), Some("B"));
/// assert_eq!(queue.dequeue(), None);
/// # Ok::<(), callq_error::Error>(())
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Queue<T> {
    items: DynArray<T>,
}

impl<T> Queue<T> {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: DynArray::new(),
        }
    }

    /// Creates an empty queue, reporting allocation failure.
    ///
    /// # Errors
    ///
    /// Returns `Err(ALLOCATION_FAILED)` if the storage cannot be obtained.
    pub fn try_new() -> Result<Self> {
        Ok(Self {
            items: DynArray::try_new()?,
        })
    }

    /// Creates an empty queue whose backing array starts with `capacity`
    /// slots.
    ///
    /// # Errors
    ///
    /// Returns `Err(ALLOCATION_FAILED)` if the storage cannot be obtained.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        Ok(Self {
            items: DynArray::try_with_capacity(capacity)?,
        })
    }

    /// Returns `true` if no element is waiting.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of waiting elements.
    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        self.items.len()
    }

    /// Alias of [`Queue::size`].
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Adds `value` at the back of the queue.
    ///
    /// # Errors
    ///
    /// Returns an allocation error if the backing array could not grow.
    #[inline]
    pub fn enqueue(&mut self, value: T) -> Result<()> {
        self.items.push_back(value)
    }

    /// Returns the element at the front, or `None` if the queue is empty.
    #[inline]
    #[must_use]
    pub fn front(&self) -> Option<&T> {
        self.items.peek_front().ok()
    }

    /// Removes and returns the front element.
    ///
    /// Returns `None` without touching the queue when it is empty.
    #[inline]
    pub fn dequeue(&mut self) -> Option<T> {
        if self.items.is_empty() {
            return None;
        }
        self.items.remove_front().ok()
    }

    /// Drops every waiting element.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns an iterator from front to back.
    #[inline]
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> Default for Queue<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, T> IntoIterator for &'a Queue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use callq_error::codes;

    use super::*;

    #[test]
    fn test_new_is_empty() {
        let queue: Queue<u32> = Queue::new();
        assert!(queue.is_empty());
        assert_eq!(queue.size(), 0);
        assert_eq!(queue.front(), None);
    }

    #[test]
    fn test_enqueue_dequeue_fifo() -> Result<()> {
        let mut queue = Queue::new();
        queue.enqueue(1)?;
        queue.enqueue(2)?;
        queue.enqueue(3)?;

        assert_eq!(queue.dequeue(), Some(1));
        assert_eq!(queue.dequeue(), Some(2));
        assert_eq!(queue.dequeue(), Some(3));
        assert_eq!(queue.dequeue(), None);
        Ok(())
    }

    #[test]
    fn test_dequeue_empty_leaves_queue_untouched() {
        let mut queue: Queue<u32> = Queue::new();
        assert_eq!(queue.dequeue(), None);
        assert_eq!(queue.dequeue(), None);
        assert_eq!(queue.size(), 0);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_front_does_not_remove() -> Result<()> {
        let mut queue = Queue::new();
        queue.enqueue(42)?;
        queue.enqueue(100)?;

        assert_eq!(queue.front(), Some(&42));
        assert_eq!(queue.front(), Some(&42));
        assert_eq!(queue.size(), 2);
        Ok(())
    }

    #[test]
    fn test_interleaved_usage_past_initial_capacity() -> Result<()> {
        let mut queue = Queue::with_capacity(2)?;
        queue.enqueue('a')?;
        queue.enqueue('b')?;
        assert_eq!(queue.dequeue(), Some('a'));
        queue.enqueue('c')?;
        queue.enqueue('d')?;
        queue.enqueue('e')?;

        let mut iter = queue.iter();
        assert_eq!(iter.next(), Some(&'b'));
        assert_eq!(iter.next(), Some(&'c'));
        assert_eq!(iter.next(), Some(&'d'));
        assert_eq!(iter.next(), Some(&'e'));
        assert_eq!(iter.next(), None);
        Ok(())
    }

    #[test]
    fn test_with_capacity_reports_allocation_failure() {
        let err = Queue::<u64>::with_capacity(usize::MAX / 2).unwrap_err();
        assert_eq!(err.code, codes::ALLOCATION_FAILED);
        assert!(err.is_resource_error());
    }

    #[test]
    fn test_clear() -> Result<()> {
        let mut queue = Queue::try_new()?;
        queue.enqueue(1)?;
        queue.enqueue(2)?;
        queue.clear();
        assert!(queue.is_empty());
        assert_eq!(queue.dequeue(), None);
        Ok(())
    }
}
