//! Retry with exponential backoff for transient fetch errors.

use std::future::Future;
use std::time::Duration;

use crate::error::ScrapeError;

const MAX_DELAY_MS: u64 = 60_000;

/// Returns `true` if `err` is worth another attempt.
///
/// Network failures, HTTP 429 and 5xx are transient. Every other error,
/// including 4xx statuses, is returned immediately.
pub(crate) fn is_retriable(err: &ScrapeError) -> bool {
    match err {
        ScrapeError::Http(_) => true,
        ScrapeError::UnexpectedStatus { status, .. } => *status == 429 || *status >= 500,
        _ => false,
    }
}

/// Executes `operation`, retrying transient errors up to `max_retries` times.
///
/// The wait before the n-th retry is `backoff_base_ms * 2^(n-1)` capped at
/// 60 s, with ±25 % jitter. With `max_retries = 3` the operation runs at
/// most 4 times.
pub(crate) async fn retry_with_backoff<T, F, Fut>(
    max_retries: u32,
    backoff_base_ms: u64,
    mut operation: F,
) -> Result<T, ScrapeError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, ScrapeError>>,
{
    let mut attempt = 0u32;
    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(err) => {
                if !is_retriable(&err) || attempt >= max_retries {
                    return Err(err);
                }
                attempt += 1;
                let computed = backoff_base_ms.saturating_mul(1u64 << (attempt - 1).min(10));
                let capped = computed.min(MAX_DELAY_MS);
                #[allow(
                    clippy::cast_possible_truncation,
                    clippy::cast_sign_loss,
                    clippy::cast_precision_loss
                )]
                let delay_ms = (capped as f64 * (rand::random::<f64>() * 0.5 + 0.75)) as u64;
                tracing::warn!(
                    attempt,
                    max_retries,
                    delay_ms,
                    error = %err,
                    "transient fetch error, retrying after backoff"
                );
                tokio::time::sleep(Duration::from_millis(delay_ms)).await;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU32, Ordering};

    use super::*;

    fn status(status: u16) -> ScrapeError {
        ScrapeError::UnexpectedStatus {
            status,
            url: "https://example.test/".to_owned(),
        }
    }

    #[test]
    fn server_errors_are_retriable() {
        assert!(is_retriable(&status(500)));
        assert!(is_retriable(&status(503)));
    }

    #[test]
    fn too_many_requests_is_retriable() {
        assert!(is_retriable(&status(429)));
    }

    #[test]
    fn client_errors_are_not_retriable() {
        assert!(!is_retriable(&status(403)));
        assert!(!is_retriable(&status(404)));
    }

    #[test]
    fn extraction_errors_are_not_retriable() {
        assert!(!is_retriable(&ScrapeError::NotFound { marker: "m" }));
        assert!(!is_retriable(&ScrapeError::SchemaMismatch { path: "p" }));
    }

    #[tokio::test]
    async fn returns_first_success_without_retrying() {
        let calls = AtomicU32::new(0);
        let result = retry_with_backoff(3, 0, || {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Ok::<_, ScrapeError>(7) }
        })
        .await;
        assert_eq!(result.unwrap(), 7);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn retries_transient_errors_until_exhausted() {
        let calls = AtomicU32::new(0);
        let result: Result<(), _> = retry_with_backoff(2, 0, || {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Err(status(503)) }
        })
        .await;
        assert!(matches!(
            result,
            Err(ScrapeError::UnexpectedStatus { status: 503, .. })
        ));
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn succeeds_after_transient_failure() {
        let calls = AtomicU32::new(0);
        let result = retry_with_backoff(3, 0, || {
            let n = calls.fetch_add(1, Ordering::SeqCst);
            async move {
                if n == 0 {
                    Err(status(500))
                } else {
                    Ok("body")
                }
            }
        })
        .await;
        assert_eq!(result.unwrap(), "body");
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn non_retriable_error_returns_immediately() {
        let calls = AtomicU32::new(0);
        let result: Result<(), _> = retry_with_backoff(5, 0, || {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Err(status(404)) }
        })
        .await;
        assert!(result.is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
