//! Resilient HTTP client with bounded per-request retry
//!
//! Wraps [`reqwest::Client`] with the retry behavior the vendor endpoint needs
//! in practice: transient connect/timeout failures and a configurable set of
//! 5xx statuses are retried with exponentially increasing delay, independently
//! for every request. Anything else surfaces to the caller immediately.

use crate::config::HttpClientConfig;
use crate::error::{Error, Result};
use rand::Rng;
use std::time::Duration;

/// User agent sent with every request
const USER_AGENT: &str = concat!("sigscrape/", env!("CARGO_PKG_VERSION"));

/// HTTP client that retries transient failures per request
///
/// Certificate handling is scoped to this client via
/// [`HttpClientConfig::accept_invalid_certs`]; no process-wide TLS state is
/// touched.
#[derive(Clone, Debug)]
pub struct HttpClient {
    client: reqwest::Client,
    config: HttpClientConfig,
}

impl HttpClient {
    /// Create a new client from the given configuration
    ///
    /// # Errors
    /// Returns [`Error::Network`] if the underlying TLS backend cannot be
    /// initialized.
    pub fn new(config: HttpClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.timeout)
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self { client, config })
    }

    /// GET a URL and return its body as text, retrying transient failures
    ///
    /// Retries up to `config.retries` times on connect errors, timeouts, and
    /// statuses listed in `config.retry_statuses`, sleeping
    /// `backoff_factor * 2^attempt` seconds between attempts. A non-retryable
    /// status (e.g. 404) fails immediately as [`Error::HttpStatus`].
    ///
    /// # Errors
    /// After exhausting retries, the error from the final attempt is returned
    /// unchanged so the caller sees what actually went wrong on the wire.
    pub async fn get_text(&self, url: &str) -> Result<String> {
        let mut attempt = 0u32;

        loop {
            match self.try_get(url).await {
                Ok(body) => {
                    if attempt > 0 {
                        tracing::debug!(url, attempts = attempt + 1, "request succeeded after retry");
                    }
                    return Ok(body);
                }
                Err(e) if attempt < self.config.retries && self.is_transient(&e) => {
                    let delay = self.backoff_delay(attempt);
                    attempt += 1;

                    tracing::warn!(
                        url,
                        error = %e,
                        attempt = attempt,
                        max_retries = self.config.retries,
                        delay_ms = delay.as_millis(),
                        "request failed, retrying"
                    );

                    tokio::time::sleep(delay).await;
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Issue a single GET and map a non-success status to [`Error::HttpStatus`]
    async fn try_get(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        Ok(response.text().await?)
    }

    /// Whether an error should be retried at this layer
    fn is_transient(&self, error: &Error) -> bool {
        match error {
            Error::Network(e) => e.is_timeout() || e.is_connect(),
            Error::HttpStatus { status, .. } => self.config.retry_statuses.contains(status),
            _ => false,
        }
    }

    /// Delay before the next attempt: `backoff_factor * 2^attempt` seconds,
    /// optionally jittered up to 2x
    fn backoff_delay(&self, attempt: u32) -> Duration {
        let secs = self.config.backoff_factor * f64::from(2u32.saturating_pow(attempt));
        let base = Duration::from_secs_f64(secs);
        if self.config.jitter { add_jitter(base) } else { base }
    }
}

/// Add random jitter to a delay to prevent thundering herd
///
/// Jitter is uniformly distributed between 0% and 100% of the delay, so the
/// actual delay is between `delay` and `2 * delay`.
fn add_jitter(delay: Duration) -> Duration {
    let mut rng = rand::thread_rng();
    let jitter_factor: f64 = rng.gen_range(0.0..=1.0);
    Duration::from_secs_f64(delay.as_secs_f64() * (1.0 + jitter_factor))
}
