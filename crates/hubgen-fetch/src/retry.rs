//! Backoff-and-retry policy for remote calls

use hubgen_core::{ApiError, HubgenError};
use std::future::Future;
use std::time::Duration;

/// Retry-with-backoff wrapper around a fallible remote call.
///
/// A call that fails is retried after `random(0, 1) * 1000ms * 2^failures`,
/// up to the attempt ceiling. Exhausting the ceiling propagates the final
/// error as [`HubgenError::Remote`], which aborts the whole acquisition run.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    max_attempts: u32,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self { max_attempts: 5 }
    }
}

impl RetryPolicy {
    pub fn new(max_attempts: u32) -> Self {
        Self {
            // The ceiling must allow at least the initial attempt.
            max_attempts: max_attempts.max(1),
        }
    }

    /// Run `op`, retrying on failure until it succeeds or the ceiling is hit.
    ///
    /// `op` is invoked once per attempt; every invocation produces a fresh
    /// future, so admission throttling composed inside the closure is
    /// re-entered on each retry.
    pub async fn run<T, F, Fut>(&self, mut op: F) -> Result<T, HubgenError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, ApiError>>,
    {
        let mut failures = 0u32;
        loop {
            match op().await {
                Ok(value) => return Ok(value),
                Err(err) => {
                    failures += 1;
                    if failures >= self.max_attempts {
                        tracing::error!(error = %err, attempts = failures, "remote call failed, giving up");
                        return Err(HubgenError::Remote {
                            attempts: failures,
                            source: err,
                        });
                    }
                    let delay = backoff_delay(failures - 1);
                    tracing::warn!(
                        error = %err,
                        delay_ms = delay.as_millis() as u64,
                        "remote call failed, retrying"
                    );
                    tokio::time::sleep(delay).await;
                }
            }
        }
    }
}

/// Full-jitter exponential backoff: `random(0, 1) * 1000ms * 2^failures`
fn backoff_delay(prior_failures: u32) -> Duration {
    let jitter: f64 = rand::random();
    let factor = (1u64 << prior_failures.min(16)) as f64;
    Duration::from_millis((jitter * 1000.0 * factor) as u64)
}

#[cfg(test)]
#[path = "retry/retry_tests.rs"]
mod retry_tests;
