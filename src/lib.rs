//! # jobharvest
//!
//! A paginated job-board scraper. One sequential loop fetches each results
//! page, extracts structured job records from the listing cards,
//! deduplicates by listing URL, appends accepted records to a CSV file with
//! per-record flushing, and follows the next-page link until the site runs
//! out of pages. Optionally the finished file is emailed over SMTP.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use jobharvest::engine::{ScrapeConfig, ScrapeEngine};
//! use jobharvest::extract::{CardSelectors, SelectorConfig};
//! use jobharvest::fetch::PageFetcher;
//! use jobharvest::sink::CsvSink;
//! use jobharvest::types::{SearchQuery, SiteConfig};
//!
//! #[tokio::main]
//! async fn main() -> jobharvest::Result<()> {
//!     let selectors = CardSelectors::compile(&SelectorConfig::default())?;
//!     let mut engine = ScrapeEngine::new(
//!         PageFetcher::new(),
//!         SiteConfig::default(),
//!         SearchQuery::new("Software Developer", "Vancouver"),
//!         selectors,
//!     );
//!     let mut sink = CsvSink::create("jobs.csv")?;
//!     let report = engine.run(&mut sink).await?;
//!     println!("wrote {} records", report.stats.records_written);
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                      ScrapeEngine                        │
//! │  fetch → extract → dedup → sink → paginate → (repeat)    │
//! └──────────────────────────────────────────────────────────┘
//!         │          │          │        │          │
//!     PageFetcher PageDocument DedupSet CsvSink NextPageLocator
//! ```

#![warn(clippy::all)]

/// Error types
pub mod error;

/// Common types: records, queries, site description
pub mod types;

/// Page fetching over HTTP
pub mod fetch;

/// HTML extraction of job cards
pub mod extract;

/// Run-scoped URL deduplication
pub mod dedup;

/// Next-page lookup
pub mod paginate;

/// CSV output
pub mod sink;

/// The crawl driver loop
pub mod engine;

/// Emailing the finished file
pub mod mail;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::{JobRecord, SearchQuery, SiteConfig};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
