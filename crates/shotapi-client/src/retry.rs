//! Retry state machine for a single request.
//!
//! A call starts in `Attempt(0)`. After each attempt the outcome is fed to
//! [`RetryConfig::transition`], which either ends the call (success, a
//! non-retryable failure, or exhausted retries) or schedules the next
//! attempt after an exponential backoff.

use crate::config::RetryConfig;
use shotapi_core::Result;
use std::future::Future;
use std::time::Duration;
use tracing::{debug, warn};

/// What happens after an attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The attempt succeeded
    Succeed,
    /// The failure is not retryable
    FailFast,
    /// Wait for `backoff`, then run attempt `next`
    Retry {
        /// Index of the next attempt
        next: u32,
        /// Pause before it
        backoff: Duration,
    },
    /// Retryable failure on the last allowed attempt
    Exhausted,
}

impl Transition {
    /// Returns true if the call is over
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Retry { .. })
    }
}

impl RetryConfig {
    /// Decide the transition out of `Attempt(attempt)` given its outcome
    #[must_use]
    pub fn transition<T>(&self, attempt: u32, outcome: &Result<T>) -> Transition {
        match outcome {
            Ok(_) => Transition::Succeed,
            Err(err) if !err.is_retryable() => Transition::FailFast,
            Err(_) if attempt >= self.max_retries => Transition::Exhausted,
            Err(_) => Transition::Retry {
                next: attempt + 1,
                backoff: self.backoff_for(attempt),
            },
        }
    }

    /// Drive `op` through the state machine until a terminal transition.
    ///
    /// `op` receives the attempt index. The outcome of the terminal attempt
    /// is returned as is.
    pub async fn run<T, F, Fut>(&self, mut op: F) -> Result<T>
    where
        F: FnMut(u32) -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let mut attempt = 0;
        loop {
            let outcome = op(attempt).await;
            match self.transition(attempt, &outcome) {
                Transition::Retry { next, backoff } => {
                    if let Err(err) = &outcome {
                        warn!(
                            attempt,
                            backoff_ms = u64::try_from(backoff.as_millis()).unwrap_or(u64::MAX),
                            error = %err,
                            "retryable failure, backing off"
                        );
                    }
                    tokio::time::sleep(backoff).await;
                    attempt = next;
                }
                Transition::Exhausted => {
                    debug!(attempts = attempt + 1, "retries exhausted");
                    return outcome;
                }
                Transition::Succeed | Transition::FailFast => return outcome,
            }
        }
    }
}
