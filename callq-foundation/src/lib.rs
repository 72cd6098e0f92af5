// callq - callq-foundation
//
// Copyright (c) 2026 The callq Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Core collections for the callq call center.
//!
//! The heart of the crate is [`DynArray`], a growable circular buffer with
//! amortized O(1) append, O(1) indexed access and O(1) removal from the
//! logical front. [`Queue`] is a FIFO adapter over it; [`Stack`] is a LIFO
//! adapter over a singly linked list.
//!
//! All three structures take ownership of the values inserted into them and
//! drop whatever they still hold when they are dropped.
//!
//! # Feature Flags
//!
//! - `std` (default): Standard library support
//! - `tracing`: Emit `tracing` events on growth and allocation failure
//!
//! Without `std` the crate is `no_std` but still requires `alloc`.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Owned collections: circular dynamic array, queue and stack
pub mod collections;
/// Conditional tracing support
pub mod tracing;

pub use callq_error::{codes, Error, ErrorCategory, Result};
pub use collections::{DynArray, Queue, Stack};
