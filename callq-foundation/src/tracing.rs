//! Tracing support for the callq collections
//!
//! This module wraps the `tracing` crate when the `tracing` feature is
//! enabled. The `trace_event!` macro used inside the crate compiles to
//! nothing when the feature is off, so the collections carry no logging cost
//! in minimal builds.

#[cfg(feature = "tracing")]
pub use ::tracing::{debug, debug_span, trace, warn, Level, Span};

/// Spans for collection storage events
#[cfg(feature = "tracing")]
#[derive(Debug, Clone)]
pub struct CollectionTrace;

#[cfg(feature = "tracing")]
impl CollectionTrace {
    /// Create a span for a grow-and-compact resize
    #[inline]
    pub fn growing(len: usize, old_capacity: usize, new_capacity: usize) -> Span {
        debug_span!(
            "dynarray_grow",
            len = %len,
            old_capacity = %old_capacity,
            new_capacity = %new_capacity
        )
    }
}

/// Emit a tracing event at the named level when the `tracing` feature is on.
macro_rules! trace_event {
    ($level:ident, $($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        {
            $crate::tracing::$level!($($arg)*);
        }
    };
}

pub(crate) use trace_event;
