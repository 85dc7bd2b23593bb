#![allow(non_snake_case)]

use super::*;
use std::sync::atomic::{AtomicU32, Ordering};

/// Fails the first `fail_times` calls, then returns the call number.
async fn flaky(calls: &AtomicU32, fail_times: u32) -> Result<u32, ApiError> {
    let n = calls.fetch_add(1, Ordering::SeqCst) + 1;
    if n <= fail_times {
        Err(ApiError::RateLimited)
    } else {
        Ok(n)
    }
}

#[tokio::test(start_paused = true)]
async fn RetryPolicy___run___returns_first_success_without_retrying() {
    let calls = AtomicU32::new(0);

    let result = RetryPolicy::default().run(|| flaky(&calls, 0)).await.unwrap();

    assert_eq!(result, 1);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test(start_paused = true)]
async fn RetryPolicy___run___recovers_from_four_consecutive_failures() {
    let calls = AtomicU32::new(0);

    let result = RetryPolicy::default().run(|| flaky(&calls, 4)).await.unwrap();

    assert_eq!(result, 5);
    assert_eq!(calls.load(Ordering::SeqCst), 5);
}

#[tokio::test(start_paused = true)]
async fn RetryPolicy___run___propagates_error_after_fifth_failure_with_no_sixth_attempt() {
    let calls = AtomicU32::new(0);

    let err = RetryPolicy::default()
        .run(|| flaky(&calls, u32::MAX))
        .await
        .unwrap_err();

    assert_eq!(calls.load(Ordering::SeqCst), 5);
    match err {
        HubgenError::Remote { attempts, source } => {
            assert_eq!(attempts, 5);
            assert!(matches!(source, ApiError::RateLimited));
        }
        other => panic!("expected Remote error, got {other:?}"),
    }
}

#[tokio::test(start_paused = true)]
async fn RetryPolicy___new___clamps_ceiling_to_one_attempt() {
    let calls = AtomicU32::new(0);

    let err = RetryPolicy::new(0).run(|| flaky(&calls, u32::MAX)).await;

    assert!(err.is_err());
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn backoff_delay___stays_below_exponential_ceiling() {
    for failures in 0..5 {
        let delay = backoff_delay(failures);
        let ceiling = Duration::from_millis(1000 * (1 << failures));
        assert!(delay < ceiling, "delay {delay:?} over ceiling {ceiling:?}");
    }
}
