//! CLI runner
//!
//! Wires the configured components together, runs the crawl, reports the
//! result, and optionally emails the finished file.

use super::commands::Cli;
use crate::engine::{ScrapeConfig, ScrapeEngine};
use crate::error::{Result, ResultExt};
use crate::extract::{CardSelectors, SelectorConfig};
use crate::fetch::{FetcherConfig, PacerConfig, PageFetcher};
use crate::mail;
use crate::sink::CsvSink;
use crate::types::{SearchQuery, SiteConfig};
use std::time::Duration;
use tracing::warn;

/// Executes one CLI invocation
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a runner for the parsed arguments
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the crawl end to end
    pub async fn run(&self) -> Result<()> {
        // Validate mail flags up front so a typo fails before the crawl,
        // not after minutes of fetching.
        let mail_config = self.cli.mail_config()?;

        let query = SearchQuery::new(&self.cli.title, &self.cli.location);
        let site = SiteConfig::with_base_url(&self.cli.base_url);
        let selectors = CardSelectors::compile(&SelectorConfig::default())?;

        let fetcher = PageFetcher::with_config(
            FetcherConfig::builder()
                .timeout(Duration::from_secs(self.cli.timeout))
                .pacer(PacerConfig::new(self.cli.requests_per_second, 1))
                .build(),
        );

        let mut sink = CsvSink::create(&self.cli.output)
            .with_context(|| format!("creating {}", self.cli.output.display()))?;
        let mut engine = ScrapeEngine::new(fetcher, site, query, selectors)
            .with_config(ScrapeConfig::with_max_pages(self.cli.max_pages));

        let report = engine.run(&mut sink).await?;

        if report.outcome.is_fetch_failed() {
            warn!("crawl ended early on a fetch failure; partial results were kept");
        }

        if self.cli.json_summary {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            println!(
                "Finished collecting {} job postings across {} pages ({}).",
                report.stats.records_written, report.stats.pages_fetched, report.outcome
            );
        }

        if let Some(config) = mail_config {
            mail::send_results(&config, &self.cli.output)?;
        }

        Ok(())
    }
}
