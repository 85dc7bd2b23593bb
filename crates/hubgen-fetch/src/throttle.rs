//! Global admission throttle for in-flight remote calls

use hubgen_core::ApiError;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::Semaphore;

/// Caps the number of simultaneously in-flight remote calls across the
/// entire acquisition run, not per entity kind.
///
/// Admission is a suspension point: at capacity, a caller parks until any
/// in-flight call completes. The permit is held for the full duration of the
/// wrapped call and released on every exit path, success or failure, because
/// it is a RAII guard.
#[derive(Debug, Clone)]
pub struct Throttle {
    semaphore: Arc<Semaphore>,
}

impl Throttle {
    /// Default cap on simultaneously in-flight remote calls
    pub const DEFAULT_MAX_IN_FLIGHT: usize = 50;

    pub fn new(max_in_flight: usize) -> Self {
        Self {
            semaphore: Arc::new(Semaphore::new(max_in_flight.max(1))),
        }
    }

    /// Number of admission slots currently free
    pub fn available(&self) -> usize {
        self.semaphore.available_permits()
    }

    /// Run `op` once a slot is free, holding the slot until it resolves.
    pub async fn run<T, F, Fut>(&self, op: F) -> Result<T, ApiError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, ApiError>>,
    {
        let _permit = self
            .semaphore
            .acquire()
            .await
            .map_err(|_| ApiError::Transport("admission throttle closed".to_string()))?;
        op().await
    }
}

impl Default for Throttle {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_IN_FLIGHT)
    }
}
