//! Call center workflow: calls wait in a FIFO queue and, once answered, are
//! kept on a LIFO stack with the most recent answer on top.

use callq_error::{Error, Result};
use callq_foundation::{Queue, Stack};
use tracing::{debug, info};

use crate::call::Call;
use crate::config::CenterConfig;

/// Snapshot of the waiting-call queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueStatus<'a> {
    /// Number of calls waiting to be answered
    pub waiting: usize,
    /// Next call to be answered
    pub first:   Option<&'a Call>,
}

/// Snapshot of the answered-call stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StackStatus<'a> {
    /// Number of calls answered so far
    pub answered: usize,
    /// Most recently answered call
    pub last:     Option<&'a Call>,
}

/// Waiting and answered calls of one call center.
#[derive(Debug, Default)]
pub struct CallCenter {
    waiting:  Queue<Call>,
    answered: Stack<Call>,
}

impl CallCenter {
    /// Creates a call center with no calls.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a call center using `config`.
    ///
    /// # Errors
    ///
    /// Returns an allocation error if the waiting queue cannot be created.
    pub fn with_config(config: &CenterConfig) -> Result<Self> {
        debug!(queue_capacity = config.queue_capacity, "creating call center");
        Ok(Self {
            waiting:  Queue::with_capacity(config.queue_capacity)?,
            answered: Stack::new(),
        })
    }

    /// Records a new incoming call and returns its identifier.
    ///
    /// The identifier is the number of calls waiting plus one, so ids can
    /// repeat once earlier calls have been answered.
    ///
    /// # Errors
    ///
    /// Returns an allocation error if the queue cannot grow.
    pub fn receive_call(&mut self, caller_name: &str, reason: &str) -> Result<u32> {
        let id = u32::try_from(self.waiting.size() + 1).map_err(|_| Error::CAPACITY_OVERFLOW)?;
        let call = Call::new(id, caller_name, reason);
        info!(id, caller = call.caller_name(), "call received");
        self.waiting.enqueue(call)?;
        Ok(id)
    }

    /// Answers the call that has waited longest.
    ///
    /// The call moves from the queue to the top of the answered stack and is
    /// returned. Returns `None` when no call is waiting.
    pub fn answer_call(&mut self) -> Option<&Call> {
        let call = self.waiting.dequeue()?;
        info!(id = call.id(), caller = call.caller_name(), "call answered");
        self.answered.push(call);
        self.answered.top().ok()
    }

    /// Current state of the waiting queue.
    #[must_use]
    pub fn queue_status(&self) -> QueueStatus<'_> {
        QueueStatus {
            waiting: self.waiting.size(),
            first:   self.waiting.front(),
        }
    }

    /// Current state of the answered stack.
    #[must_use]
    pub fn stack_status(&self) -> StackStatus<'_> {
        StackStatus {
            answered: self.answered.size(),
            last:     self.answered.top().ok(),
        }
    }

    /// Waiting calls, next to be answered first.
    pub fn waiting_calls(&self) -> impl Iterator<Item = &Call> {
        self.waiting.iter()
    }

    /// Answered calls, most recent first.
    pub fn answered_calls(&self) -> impl Iterator<Item = &Call> {
        self.answered.iter()
    }
}
