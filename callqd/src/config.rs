//! Runtime configuration for the call center and its logging.

use callq_foundation::collections::INITIAL_CAPACITY;
use clap::ValueEnum;

/// Call center configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CenterConfig {
    /// Initial slot count of the waiting-call queue
    pub queue_capacity: usize,
}

impl Default for CenterConfig {
    fn default() -> Self {
        Self {
            queue_capacity: INITIAL_CAPACITY,
        }
    }
}

/// Output format for log lines written to stderr
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Multi-line, human oriented
    #[default]
    Pretty,
    /// One line per event
    Compact,
    /// Newline-delimited JSON
    Json,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Output format
    pub format: LogFormat,
    /// Filter directive; falls back to `RUST_LOG`, then to [`DEFAULT_LOG_FILTER`]
    pub filter: Option<String>,
}

/// Filter used when neither `--log-level` nor `RUST_LOG` is set.
///
/// Kept at `warn` so log lines do not interleave with the menu.
pub const DEFAULT_LOG_FILTER: &str = "warn";
