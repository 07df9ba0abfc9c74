//! End-to-end scrape pipeline
//!
//! Ties the client, parsers, and writer into the single linear pass:
//! fetch listing, enumerate detail links, fetch each detail page in document
//! order, extract severity, write one row per record. Detail pages are fetched
//! strictly one at a time.

use crate::client::HttpClient;
use crate::config::Config;
use crate::detail::{self, UNKNOWN_SEVERITY};
use crate::error::Result;
use crate::export::CsvExporter;
use crate::listing;
use crate::retry::run_with_retry;
use crate::types::{SignatureLink, SignatureRecord};
use url::Url;

/// Counters reported after a completed scrape
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrapeSummary {
    /// Rows written to the lookup table
    pub records_written: usize,

    /// Rows whose detail page carried no recognizable severity
    pub unknown_severity: usize,
}

/// Runs the scrape-and-export pipeline
///
/// # Example
///
/// ```no_run
/// use sigscrape::{Config, SignatureScraper};
///
/// #[tokio::main]
/// async fn main() -> sigscrape::Result<()> {
///     let scraper = SignatureScraper::new(Config::default())?;
///     let summary = scraper.run().await?;
///     println!("wrote {} rows", summary.records_written);
///     Ok(())
/// }
/// ```
pub struct SignatureScraper {
    config: Config,
    origin: Url,
    client: HttpClient,
}

impl SignatureScraper {
    /// Build a scraper from the given configuration
    ///
    /// # Errors
    /// Returns an error if the origin is not a valid URL or the HTTP client
    /// cannot be constructed.
    pub fn new(config: Config) -> Result<Self> {
        let origin = Url::parse(&config.origin)?;
        let client = HttpClient::new(config.http.clone())?;

        Ok(Self {
            config,
            origin,
            client,
        })
    }

    /// Run the full pipeline, restarting on transient network failure
    ///
    /// One pass fetches the listing, then every detail page, writing rows as
    /// it goes. If a transient failure survives the client's per-request
    /// retries, the whole pass restarts from scratch (the output file is
    /// recreated) after the configured delay, up to the configured budget.
    ///
    /// # Errors
    /// Returns [`crate::Error::RetriesExhausted`] once the budget is spent, or
    /// the first non-retryable error (malformed markup, output I/O) unchanged.
    pub async fn run(&self) -> Result<ScrapeSummary> {
        run_with_retry(&self.config.retry, || self.scrape_once()).await
    }

    /// One complete scrape pass
    async fn scrape_once(&self) -> Result<ScrapeSummary> {
        let listing_url = self.origin.join(&self.config.listing_path)?;
        tracing::info!(url = %listing_url, "fetching signature listing");

        let listing_html = self.client.get_text(listing_url.as_str()).await?;
        let links = listing::parse_listing(&listing_html)?;
        tracing::info!(count = links.len(), "discovered detail links");

        let mut exporter = CsvExporter::create(&self.config.output_path)?;
        let mut summary = ScrapeSummary::default();

        for link in &links {
            if let Some(delay) = self.config.fetch_delay {
                tokio::time::sleep(delay).await;
            }

            let record = self.fetch_record(link).await?;
            if record.severity == UNKNOWN_SEVERITY {
                summary.unknown_severity += 1;
            }

            exporter.write_record(&record)?;
            summary.records_written += 1;
        }

        exporter.finish()?;
        tracing::info!(
            records = summary.records_written,
            unknown = summary.unknown_severity,
            output = %self.config.output_path.display(),
            "scrape complete"
        );
        Ok(summary)
    }

    /// Fetch one detail page and resolve the link into a full record
    async fn fetch_record(&self, link: &SignatureLink) -> Result<SignatureRecord> {
        let detail_url = self.origin.join(&link.href)?;
        tracing::debug!(asid = %link.id, url = %detail_url, "fetching detail page");

        let detail_html = self.client.get_text(detail_url.as_str()).await?;
        let severity = detail::parse_severity(&detail_html);
        if severity == UNKNOWN_SEVERITY {
            tracing::debug!(asid = %link.id, "no severity heading on detail page");
        }

        Ok(SignatureRecord {
            id: link.id.clone(),
            severity,
            label: link.label.clone(),
            detail_url: detail_url.into(),
        })
    }
}
