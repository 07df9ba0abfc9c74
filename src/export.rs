//! CSV lookup-table writer
//!
//! Serializes one row per signature record into the output file consumed by
//! the log-enrichment side. Fields are quoted only when they need to be
//! (embedded comma, quote, or newline), so clean rows are written exactly as
//! plain interpolation would.

use crate::error::Result;
use crate::types::SignatureRecord;
use std::fs::File;
use std::path::Path;

/// Header row of the lookup table
const HEADER: [&str; 4] = [
    "SignatureID",
    "severity",
    "SignatureStr",
    "signature_detail_url",
];

/// Writes signature records to a CSV file, one row per record
///
/// The destination is truncated on creation and the header is written up
/// front, so an empty scrape still produces a well-formed (header-only) file.
/// Rows are flushed as they are written; if the run dies partway through, the
/// file holds a clean prefix of the rows processed so far.
pub struct CsvExporter {
    writer: csv::Writer<File>,
}

impl CsvExporter {
    /// Create the output file, truncating any existing content, and write the header
    ///
    /// # Errors
    /// Returns an error if the file cannot be created or the header cannot be
    /// written.
    pub fn create(path: &Path) -> Result<Self> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(path)?;
        writer.write_record(HEADER)?;
        writer.flush()?;

        tracing::debug!(path = %path.display(), "created lookup table");
        Ok(Self { writer })
    }

    /// Append one record and flush it to disk
    ///
    /// # Errors
    /// Returns an error if serialization or the underlying write fails.
    pub fn write_record(&mut self, record: &SignatureRecord) -> Result<()> {
        self.writer.serialize(record)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Flush and close the output file
    ///
    /// Dropping the exporter also flushes, but going through `finish` surfaces
    /// any final I/O error instead of swallowing it.
    ///
    /// # Errors
    /// Returns an error if the final flush fails.
    pub fn finish(mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
