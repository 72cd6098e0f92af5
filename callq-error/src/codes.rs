// callq - callq-error
// Module: Error Codes
//
// Copyright (c) 2026 The callq Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Error codes for callq

// Precondition error codes (1000-1999)
/// Logical index outside `0..len`
pub const INDEX_OUT_OF_RANGE: u16 = 1000;
/// Front access on an empty container
pub const EMPTY_CONTAINER: u16 = 1001;
/// Top or pop on an empty stack
pub const STACK_UNDERFLOW: u16 = 1002;

// Resource error codes (3000-3999)
/// Backing storage could not be obtained
pub const ALLOCATION_FAILED: u16 = 3000;
/// Requested capacity does not fit in `usize`
pub const CAPACITY_OVERFLOW: u16 = 3001;

// System error codes (8000-8999)
/// Terminal or stream I/O failure
pub const IO_ERROR: u16 = 8000;
/// Formatting failure
pub const FORMAT_ERROR: u16 = 8001;
