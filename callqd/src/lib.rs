//! # Call center front end (callqd)
//!
//! Incoming calls wait in a FIFO [`Queue`](callq_foundation::Queue); answered
//! calls are kept on a LIFO [`Stack`](callq_foundation::Stack) so the most
//! recent answer is on top.
//!
//! - [`call`]: the call record
//! - [`center`]: receive, answer and inspect calls
//! - [`menu`]: the interactive menu loop
//! - [`config`]: call center and logging configuration

#![forbid(unsafe_code)]

pub mod call;
pub mod center;
pub mod config;
pub mod menu;

pub use call::Call;
pub use center::{CallCenter, QueueStatus, StackStatus};
pub use config::{CenterConfig, LogConfig, LogFormat};
pub use menu::{Menu, MenuOption};
