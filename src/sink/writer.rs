//! CSV file writer
//!
//! The destination is truncated on creation and the header written exactly
//! once, before any record. Every append flushes, so an interrupted run
//! loses at most the record being written.

use crate::error::Result;
use crate::types::JobRecord;
use csv::WriterBuilder;
use std::fs::File;
use std::path::Path;

/// The fixed header row, written once per file
pub const HEADER: [&str; 7] = [
    "JobTitle",
    "Company",
    "Location",
    "Salary",
    "PostDate",
    "Summary",
    "JobUrl",
];

/// Append-only CSV sink for job records
pub struct CsvSink {
    writer: csv::Writer<File>,
    records_written: usize,
}

impl CsvSink {
    /// Create (or truncate) the destination and write the header
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::create(path.as_ref())?;
        // Header is written manually so it appears even for empty runs.
        let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);
        writer.write_record(HEADER)?;
        writer.flush()?;

        Ok(Self {
            writer,
            records_written: 0,
        })
    }

    /// Append one record and flush it to disk
    pub fn append(&mut self, record: &JobRecord) -> Result<()> {
        self.writer.serialize(record)?;
        self.writer.flush()?;
        self.records_written += 1;
        Ok(())
    }

    /// Number of data rows written so far
    pub fn records_written(&self) -> usize {
        self.records_written
    }
}

impl std::fmt::Debug for CsvSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CsvSink")
            .field("records_written", &self.records_written)
            .finish_non_exhaustive()
    }
}
