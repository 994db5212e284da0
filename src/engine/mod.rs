//! Crawl engine
//!
//! The driver loop: fetch the current page, extract its cards, write the
//! records not seen before, then follow the next-page link. Strictly
//! sequential — one request in flight, one page owned per iteration.

mod types;

pub use types::{RunOutcome, RunReport, ScrapeConfig, ScrapeStats};

use crate::dedup::DedupSet;
use crate::error::Result;
use crate::extract::{CardSelectors, PageDocument};
use crate::fetch::PageFetcher;
use crate::paginate::NextPageLocator;
use crate::sink::CsvSink;
use crate::types::{SearchQuery, SiteConfig};
use std::time::Instant;
use tracing::{info, warn};
use url::Url;

/// Drives one crawl from the first results page to the last
pub struct ScrapeEngine {
    fetcher: PageFetcher,
    site: SiteConfig,
    query: SearchQuery,
    selectors: CardSelectors,
    locator: NextPageLocator,
    seen: DedupSet,
    config: ScrapeConfig,
}

impl ScrapeEngine {
    /// Create an engine for one search
    pub fn new(
        fetcher: PageFetcher,
        site: SiteConfig,
        query: SearchQuery,
        selectors: CardSelectors,
    ) -> Self {
        Self {
            fetcher,
            site,
            query,
            selectors,
            locator: NextPageLocator::new(),
            seen: DedupSet::new(),
            config: ScrapeConfig::default(),
        }
    }

    /// Set the crawl configuration
    #[must_use]
    pub fn with_config(mut self, config: ScrapeConfig) -> Self {
        self.config = config;
        self
    }

    /// Run the crawl, appending accepted records to the sink.
    ///
    /// Stops when the site links no further page, when a fetch fails, or
    /// when the page bound is hit; none of these is an error. The report
    /// says which one happened.
    pub async fn run(&mut self, sink: &mut CsvSink) -> Result<RunReport> {
        let start = Instant::now();
        let mut stats = ScrapeStats::default();
        let mut current = self.site.search_url(&self.query)?;

        info!(title = %self.query.title, location = %self.query.location, "starting crawl");

        let outcome = loop {
            if self.config.max_pages > 0 && stats.pages_fetched >= self.config.max_pages {
                warn!(max_pages = self.config.max_pages, "page bound reached, stopping");
                break RunOutcome::PageLimitReached;
            }

            info!(url = %current, "visiting results page");
            let Some(body) = self.fetcher.fetch_page(current.as_str()).await else {
                break RunOutcome::FetchFailed;
            };
            stats.add_page();

            // The parsed page lives only inside this block: extraction and
            // next-link lookup finish before the next fetch starts.
            let next = {
                let doc = PageDocument::parse(&body);
                self.emit_cards(&doc, &current, sink, &mut stats)?;
                self.locator.next_url(&doc, &self.selectors, &current)
            };

            match next {
                Some(url) => current = url,
                None => break RunOutcome::Exhausted,
            }
        };

        stats.set_duration(u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX));
        info!(
            outcome = %outcome,
            pages = stats.pages_fetched,
            records = stats.records_written,
            duplicates = stats.duplicates_skipped,
            "crawl finished"
        );

        Ok(RunReport { outcome, stats })
    }

    /// Parse every card on a page and write the ones not seen before
    fn emit_cards(
        &mut self,
        doc: &PageDocument,
        page_url: &Url,
        sink: &mut CsvSink,
        stats: &mut ScrapeStats,
    ) -> Result<()> {
        for card in doc.cards(&self.selectors) {
            let Some(record) = card.parse(&self.selectors, page_url) else {
                warn!(page = %page_url, "card missing listing anchor, skipping");
                stats.add_malformed();
                continue;
            };

            if self.seen.accept(&record.url) {
                sink.append(&record)?;
                stats.add_record();
            } else {
                stats.add_duplicate();
            }
        }
        Ok(())
    }
}

impl std::fmt::Debug for ScrapeEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrapeEngine")
            .field("site", &self.site)
            .field("query", &self.query)
            .field("config", &self.config)
            .field("seen", &self.seen.len())
            .finish_non_exhaustive()
    }
}
