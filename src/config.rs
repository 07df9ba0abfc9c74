//! Configuration types for sigscrape

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Top-level scrape configuration
///
/// Works out of the box with zero configuration: `Config::default()` targets the
/// vendor's public signature index and writes the lookup table to the current
/// directory. Embedders can repoint `origin` at a mirror or a test server.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    /// Origin the listing and detail paths are resolved against
    /// (default: "https://www.symantec.com")
    #[serde(default = "default_origin")]
    pub origin: String,

    /// Path of the signature listing page
    /// (default: "/security_response/attacksignatures/")
    #[serde(default = "default_listing_path")]
    pub listing_path: String,

    /// Destination for the CSV lookup table
    /// (default: "symantec_attack_signatures.csv")
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,

    /// Optional pause between detail-page fetches (default: None = no throttling)
    ///
    /// The index links to thousands of detail pages; set this to stay polite
    /// toward the server at the cost of a longer run.
    #[serde(default, with = "optional_duration_serde")]
    pub fetch_delay: Option<Duration>,

    /// HTTP client behavior (timeouts, per-request retry, certificate handling)
    #[serde(default)]
    pub http: HttpClientConfig,

    /// Whole-scrape retry behavior
    #[serde(default)]
    pub retry: RetryConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            origin: default_origin(),
            listing_path: default_listing_path(),
            output_path: default_output_path(),
            fetch_delay: None,
            http: HttpClientConfig::default(),
            retry: RetryConfig::default(),
        }
    }
}

/// HTTP client configuration
///
/// Controls the fine-grained retry loop around individual GET requests.
/// Transient failures (connect errors, timeouts, and the statuses listed in
/// `retry_statuses`) are retried with exponentially increasing delay
/// `backoff_factor * 2^attempt` seconds.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HttpClientConfig {
    /// Maximum number of retries per request (default: 3)
    #[serde(default = "default_http_retries")]
    pub retries: u32,

    /// Base factor in seconds for exponential backoff (default: 0.3)
    #[serde(default = "default_backoff_factor")]
    pub backoff_factor: f64,

    /// HTTP status codes treated as transient (default: [500, 502, 504])
    #[serde(default = "default_retry_statuses")]
    pub retry_statuses: Vec<u16>,

    /// Accept invalid or self-signed TLS certificates (default: true)
    ///
    /// The vendor endpoint has historically served an incomplete chain, so the
    /// default matches what the scrape needs in practice. Scoped to this
    /// client; nothing process-wide is changed.
    #[serde(default = "default_true")]
    pub accept_invalid_certs: bool,

    /// Connect/read timeout per request (default: 30 seconds)
    #[serde(default = "default_timeout", with = "duration_serde")]
    pub timeout: Duration,

    /// Add random jitter to backoff delays (default: false)
    #[serde(default)]
    pub jitter: bool,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            retries: default_http_retries(),
            backoff_factor: default_backoff_factor(),
            retry_statuses: default_retry_statuses(),
            accept_invalid_certs: true,
            timeout: default_timeout(),
            jitter: false,
        }
    }
}

/// Whole-scrape retry configuration
///
/// The coarse safety net around one complete scrape pass. If a transient
/// network failure survives the HTTP client's own retries, the entire pass is
/// restarted from scratch after a fixed delay, up to `max_retries` attempts.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Maximum number of scrape attempts before giving up (default: 7)
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Fixed delay between attempts (default: 12 seconds)
    #[serde(default = "default_retry_delay", with = "duration_serde")]
    pub delay: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: default_max_retries(),
            delay: default_retry_delay(),
        }
    }
}

fn default_origin() -> String {
    "https://www.symantec.com".to_string()
}

fn default_listing_path() -> String {
    "/security_response/attacksignatures/".to_string()
}

fn default_output_path() -> PathBuf {
    PathBuf::from("symantec_attack_signatures.csv")
}

fn default_http_retries() -> u32 {
    3
}

fn default_backoff_factor() -> f64 {
    0.3
}

fn default_retry_statuses() -> Vec<u16> {
    vec![500, 502, 504]
}

fn default_true() -> bool {
    true
}

fn default_timeout() -> Duration {
    Duration::from_secs(30)
}

fn default_max_retries() -> u32 {
    7
}

fn default_retry_delay() -> Duration {
    Duration::from_secs(12)
}

// Duration serialization helper (seconds as u64)
mod duration_serde {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(duration.as_secs())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

// Optional Duration serialization helper
mod optional_duration_serde {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Option<Duration>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match duration {
            Some(d) => serializer.serialize_some(&d.as_secs()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Duration>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = Option::<u64>::deserialize(deserializer)?;
        Ok(secs.map(Duration::from_secs))
    }
}
