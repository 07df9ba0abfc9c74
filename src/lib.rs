//! # sigscrape
//!
//! Scrapes a vendor's public attack-signature index into a CSV lookup table
//! for enriching endpoint-protection log events in a SIEM.
//!
//! ## Design Philosophy
//!
//! sigscrape is designed to be:
//! - **Library-first** - No CLI flags or UI, a Rust crate plus a thin binary
//! - **Sensible defaults** - `Config::default()` targets the vendor site and
//!   needs zero configuration
//! - **Resilient** - Transient network failures are retried per request and,
//!   as a coarse safety net, per whole scrape pass
//! - **Testable offline** - Parsing is pure; HTML goes in, records come out
//!
//! ## Quick Start
//!
//! ```no_run
//! use sigscrape::{Config, SignatureScraper};
//!
//! #[tokio::main]
//! async fn main() -> sigscrape::Result<()> {
//!     let scraper = SignatureScraper::new(Config::default())?;
//!     let summary = scraper.run().await?;
//!     println!(
//!         "wrote {} rows ({} without a severity rating)",
//!         summary.records_written, summary.unknown_severity
//!     );
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

/// Resilient HTTP client
pub mod client;
/// Configuration types
pub mod config;
/// Detail-page severity extraction
pub mod detail;
/// Error types
pub mod error;
/// CSV lookup-table writer
pub mod export;
/// Listing-page parsing
pub mod listing;
/// Whole-operation retry with a fixed delay
pub mod retry;
/// End-to-end scrape pipeline
pub mod scrape;
/// Core record types
pub mod types;

// Re-export commonly used types
pub use client::HttpClient;
pub use config::{Config, HttpClientConfig, RetryConfig};
pub use detail::{UNKNOWN_SEVERITY, parse_severity};
pub use error::{Error, Result};
pub use export::CsvExporter;
pub use listing::parse_listing;
pub use retry::{IsRetryable, run_with_retry};
pub use scrape::{ScrapeSummary, SignatureScraper};
pub use types::{SignatureLink, SignatureRecord};
