// callq - callq-foundation
// Module: Stack - LIFO adapter over a singly linked list
//
// Copyright (c) 2026 The callq Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! LIFO stack over a singly linked list.
//!
//! The head node is the top of the stack. `push`, `pop` and `top` touch only
//! the head and are O(1); the element count is tracked on every change so
//! `size` is O(1) as well.

use alloc::boxed::Box;
use core::fmt;
use core::iter::FusedIterator;

use callq_error::{Error, Result};

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    value: T,
    next:  Link<T>,
}

/// A LIFO stack that owns its elements.
///
/// # Examples
///
/// ```
/// use callq_foundation::Stack;
///
/// let mut stack = Stack::new();
/// stack.push("A");
/// stack.push("B");
///
/// assert_eq!(stack.top()?, &"B");
/// assert_eq!(stack.pop()?, "B");
/// assert_eq!(stack.pop()?, "A");
/// assert!(stack.pop().is_err());
/// # Ok::<(), callq_error::Error>(())
/// ```
pub struct Stack<T> {
    head: Link<T>,
    len:  usize,
}

impl<T> Stack<T> {
    /// Creates an empty stack. No storage is allocated until the first push.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// Returns `true` if the stack holds no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns the number of elements.
    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        self.len
    }

    /// Alias of [`Stack::size`].
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Pushes `value` on top of the stack.
    pub fn push(&mut self, value: T) {
        let node = Box::new(Node {
            value,
            next: self.head.take(),
        });
        self.head = Some(node);
        self.len += 1;
    }

    /// Returns the top element.
    ///
    /// # Errors
    ///
    /// Returns `Err(STACK_UNDERFLOW)` if the stack is empty.
    #[inline]
    pub fn top(&self) -> Result<&T> {
        self.head
            .as_ref()
            .map(|node| &node.value)
            .ok_or(Error::STACK_UNDERFLOW)
    }

    /// Returns the top element mutably.
    ///
    /// # Errors
    ///
    /// Returns `Err(STACK_UNDERFLOW)` if the stack is empty.
    #[inline]
    pub fn top_mut(&mut self) -> Result<&mut T> {
        self.head
            .as_mut()
            .map(|node| &mut node.value)
            .ok_or(Error::STACK_UNDERFLOW)
    }

    /// Removes and returns the top element.
    ///
    /// # Errors
    ///
    /// Returns `Err(STACK_UNDERFLOW)` if the stack is empty.
    pub fn pop(&mut self) -> Result<T> {
        self.try_pop().ok_or(Error::STACK_UNDERFLOW)
    }

    /// Removes and returns the top element, or `None` if the stack is empty.
    pub fn try_pop(&mut self) -> Option<T> {
        self.head.take().map(|node| {
            let Node { value, next } = *node;
            self.head = next;
            self.len -= 1;
            value
        })
    }

    /// Drops every element, top first.
    pub fn clear(&mut self) {
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
        self.len = 0;
    }

    /// Returns an iterator from top to bottom.
    #[inline]
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next:      self.head.as_deref(),
            remaining: self.len,
        }
    }
}

// Unlinks node by node so long stacks do not recurse through Box drops
impl<T> Drop for Stack<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Default for Stack<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for Stack<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Stack<T> {}

/// Borrowing iterator over a [`Stack`], top first.
pub struct Iter<'a, T> {
    next:      Option<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            self.remaining -= 1;
            &node.value
        })
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a Stack<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
