// callq - callq-error
// Module: callq Error Handling
//
// Copyright (c) 2026 The callq Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! callq error handling library
//!
//! Every fallible operation in the callq crates returns [`Result`], whose
//! error is the small `Copy` [`Error`] struct defined here.
//!
//! # Error Categories
//!
//! ## Precondition Errors (1000-1999)
//! - Index out of range
//! - Front access on an empty container
//! - Stack underflow
//!
//! ## Resource Errors (3000-3999)
//! - Allocation failure
//! - Capacity overflow
//!
//! ## System Errors (8000-8999)
//!
//! # Usage
//!
//! ```
//! use callq_error::{codes, Error, ErrorCategory};
//!
//! let error = Error::new(
//!     ErrorCategory::Precondition,
//!     codes::INDEX_OUT_OF_RANGE,
//!     "Index 7 out of range",
//! );
//! assert!(error.is_precondition_error());
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

#[cfg(feature = "std")]
extern crate std;

/// Error codes for callq
pub mod codes;
/// Error and error handling types
pub mod errors;

pub use errors::{Error, ErrorCategory};

/// A specialized `Result` type for callq operations.
pub type Result<T> = core::result::Result<T, Error>;
