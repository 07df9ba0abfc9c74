//! Whole-operation retry with a fixed delay
//!
//! The coarse safety net around one complete scrape pass. The HTTP client
//! already retries individual requests; this layer catches a transient failure
//! that survives those retries partway through a pass and restarts the whole
//! pass from scratch. There is no checkpointing of partial progress: a restart
//! refetches the listing and every detail page.

use crate::config::RetryConfig;
use crate::error::{Error, Result};
use std::future::Future;

/// Trait for errors that can be classified as retryable or not
///
/// Transient failures (network timeouts, connection resets, server errors)
/// should return `true`. Permanent failures (malformed markup, output I/O)
/// should return `false`.
pub trait IsRetryable {
    /// Returns true if the error is transient and the operation should be retried
    fn is_retryable(&self) -> bool;
}

impl IsRetryable for Error {
    fn is_retryable(&self) -> bool {
        match self {
            // Transport failures are retryable at this layer even when they
            // were not at the per-request layer (e.g. a decode error midway
            // through a body read)
            Error::Network(_) => true,
            // Any HTTP error status, including ones the client does not retry
            // per-request: a fresh pass may hit a healthy backend
            Error::HttpStatus { .. } => true,
            // Exhaustion is terminal, never fed back into another loop
            Error::RetriesExhausted { .. } => false,
            // Markup defects will not heal on refetch
            Error::MalformedLink { .. } | Error::Parse(_) | Error::Url(_) => false,
            // Output problems need user action, not retries
            Error::Io(_) | Error::Csv(_) => false,
        }
    }
}

/// Execute an async operation, retrying transient failures a fixed number of times
///
/// Runs `operation` up to `config.max_retries` times, sleeping `config.delay`
/// (fixed, not exponential) between attempts. The first success short-circuits
/// the remaining budget. A non-retryable error propagates immediately without
/// consuming budget.
///
/// # Errors
/// Returns [`Error::RetriesExhausted`] when every attempt failed with a
/// retryable error, carrying the attempt count and the final error's message.
///
/// # Example
///
/// ```no_run
/// use sigscrape::config::RetryConfig;
/// use sigscrape::retry::run_with_retry;
///
/// # async fn example() -> sigscrape::Result<()> {
/// let config = RetryConfig::default();
/// let value = run_with_retry(&config, || async {
///     // Your operation here
///     Ok::<_, sigscrape::Error>(42)
/// })
/// .await?;
/// # Ok(())
/// # }
/// ```
pub async fn run_with_retry<F, Fut, T>(config: &RetryConfig, mut operation: F) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let mut last_error: Option<Error> = None;

    for attempt in 0..config.max_retries {
        match operation().await {
            Ok(result) => {
                if attempt > 0 {
                    tracing::info!(attempts = attempt + 1, "operation succeeded after retry");
                }
                return Ok(result);
            }
            Err(e) if e.is_retryable() => {
                tracing::warn!(
                    error = %e,
                    attempt = attempt + 1,
                    max_retries = config.max_retries,
                    delay_secs = config.delay.as_secs(),
                    "operation failed, will restart"
                );
                last_error = Some(e);

                if attempt + 1 < config.max_retries {
                    tokio::time::sleep(config.delay).await;
                }
            }
            Err(e) => {
                tracing::error!(error = %e, "operation failed with non-retryable error");
                return Err(e);
            }
        }
    }

    Err(Error::RetriesExhausted {
        attempts: config.max_retries,
        last_error: last_error
            .map(|e| e.to_string())
            .unwrap_or_else(|| "operation was never attempted".to_string()),
    })
}
