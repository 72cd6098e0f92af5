// callq - callq-error
// Module: Error Types
//
// Copyright (c) 2026 The callq Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Errors are small `Copy` values carrying a category, a numeric code and a
//! static message, so they can be created and propagated without allocating.

use core::fmt;

use crate::codes;

/// `Error` categories for callq operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorCategory {
    /// Caller contract violations (bad index, access on empty)
    Precondition = 1,
    /// Resource errors (storage could not be obtained)
    Resource     = 3,
    /// System errors
    System       = 8,
}

/// callq `Error` type
///
/// Categorized error with an error code and a static message.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Error {
    /// `Error` category
    pub category: ErrorCategory,
    /// `Error` code
    pub code:     u16,
    /// `Error` message
    pub message:  &'static str,
}

impl Error {
    /// Storage allocation failure
    pub const ALLOCATION_FAILED: Self = Self::new(
        ErrorCategory::Resource,
        codes::ALLOCATION_FAILED,
        "Failed to allocate container storage",
    );
    /// Capacity arithmetic overflowed `usize`
    pub const CAPACITY_OVERFLOW: Self = Self::new(
        ErrorCategory::Resource,
        codes::CAPACITY_OVERFLOW,
        "Container capacity overflow",
    );
    /// Front access on an empty container
    pub const EMPTY_CONTAINER: Self = Self::new(
        ErrorCategory::Precondition,
        codes::EMPTY_CONTAINER,
        "Container is empty",
    );
    /// Index outside the logical range
    pub const INDEX_OUT_OF_RANGE: Self = Self::new(
        ErrorCategory::Precondition,
        codes::INDEX_OUT_OF_RANGE,
        "Index out of range",
    );
    /// Top or pop on an empty stack
    pub const STACK_UNDERFLOW: Self = Self::new(
        ErrorCategory::Precondition,
        codes::STACK_UNDERFLOW,
        "Stack underflow",
    );

    /// Create a new error.
    #[must_use]
    pub const fn new(category: ErrorCategory, code: u16, message: &'static str) -> Self {
        Self {
            category,
            code,
            message,
        }
    }

    /// Create an I/O error
    #[must_use]
    pub const fn io_error(message: &'static str) -> Self {
        Self::new(ErrorCategory::System, codes::IO_ERROR, message)
    }

    /// Check if this is a caller contract violation
    #[must_use]
    pub fn is_precondition_error(&self) -> bool {
        self.category == ErrorCategory::Precondition
    }

    /// Check if this is a resource error
    #[must_use]
    pub fn is_resource_error(&self) -> bool {
        self.category == ErrorCategory::Resource
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:?}][E{:04X}] {}",
            self.category, self.code, self.message
        )
    }
}

impl From<core::fmt::Error> for Error {
    fn from(_: core::fmt::Error) -> Self {
        Self::new(
            ErrorCategory::System,
            codes::FORMAT_ERROR,
            "Formatting error (static)",
        )
    }
}

#[cfg(feature = "std")]
impl From<std::io::Error> for Error {
    fn from(_: std::io::Error) -> Self {
        Self::io_error("I/O error")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_category_and_code() {
        let rendered = format!("{}", Error::INDEX_OUT_OF_RANGE);
        assert_eq!(rendered, "[Precondition][E03E8] Index out of range");
    }

    #[test]
    fn test_category_predicates() {
        assert!(Error::STACK_UNDERFLOW.is_precondition_error());
        assert!(!Error::STACK_UNDERFLOW.is_resource_error());
        assert!(Error::ALLOCATION_FAILED.is_resource_error());
        assert!(Error::CAPACITY_OVERFLOW.is_resource_error());
    }

    #[test]
    fn test_custom_message_keeps_code() {
        let err = Error::new(
            ErrorCategory::Precondition,
            codes::INDEX_OUT_OF_RANGE,
            "set: index past end",
        );
        assert_eq!(err.code, codes::INDEX_OUT_OF_RANGE);
        assert_eq!(err.message, "set: index past end");
        assert_ne!(err, Error::INDEX_OUT_OF_RANGE);
    }
}
