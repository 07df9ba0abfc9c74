//! Error types for sigscrape
//!
//! This module provides the error handling for the library:
//! - A single error enum covering transport, parsing, and output failures
//! - A distinct retry-exhaustion variant so callers can tell "the network kept
//!   failing" apart from the individual transient errors along the way

use thiserror::Error;

/// Result type alias for sigscrape operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for sigscrape
///
/// This is the primary error type used throughout the library. Each variant includes
/// contextual information to help diagnose issues.
#[derive(Debug, Error)]
pub enum Error {
    /// HTTP transport failed (connect failure, timeout, protocol error)
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Server answered with a non-success HTTP status
    #[error("HTTP {status} fetching {url}")]
    HttpStatus {
        /// The HTTP status code returned by the server
        status: u16,
        /// The URL that was being fetched
        url: String,
    },

    /// Retry budget exhausted without a successful scrape
    ///
    /// Raised by the whole-operation retry wrapper after every attempt failed
    /// with a transient error. Terminal: never itself retried.
    #[error("network retries exhausted after {attempts} attempts: {last_error}")]
    RetriesExhausted {
        /// Number of attempts that were made before giving up
        attempts: u32,
        /// Rendered form of the error from the final attempt
        last_error: String,
    },

    /// An anchor matched the detail-link pattern but its signature ID could not be extracted
    #[error("malformed detail link: {href}")]
    MalformedLink {
        /// The href attribute that failed ID extraction
        href: String,
    },

    /// A selector, pattern, or URL used for extraction failed to compile or resolve
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid or unjoinable URL
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV output error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
