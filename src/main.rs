//! Runs one scrape of the attack-signature index with default settings.
//!
//! Takes no arguments. Exits 0 on success; any failure (including retry
//! exhaustion) propagates out of `main` and terminates with a non-zero exit
//! code and the rendered error.

use sigscrape::{Config, SignatureScraper};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> sigscrape::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let scraper = SignatureScraper::new(Config::default())?;
    let summary = scraper.run().await?;

    tracing::info!(
        records = summary.records_written,
        unknown = summary.unknown_severity,
        "lookup table written"
    );
    Ok(())
}
