// callq - callq-foundation
// Module: Collections
//
// Copyright (c) 2026 The callq Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Owned collections built on a circular dynamic array.
//!
//! - [`DynArray`]: growable ring buffer with a movable logical start
//! - [`Queue`]: FIFO adapter over [`DynArray`]
//! - [`Stack`]: LIFO adapter over a singly linked list

pub mod dyn_array;
pub mod queue;
pub mod stack;

pub use dyn_array::{DynArray, Iter as DynArrayIter, GROWTH_FACTOR, INITIAL_CAPACITY};
pub use queue::Queue;
pub use stack::{Iter as StackIter, Stack};
