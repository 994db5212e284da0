//! Engine configuration, statistics, and run reporting

use serde::Serialize;

/// Configuration for one crawl
#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    /// Safety bound on pages fetched per run (0 = unbounded)
    pub max_pages: usize,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self { max_pages: 50 }
    }
}

impl ScrapeConfig {
    /// Create a config with a page bound
    pub fn with_max_pages(max_pages: usize) -> Self {
        Self { max_pages }
    }

    /// Create a config with no page bound
    pub fn unbounded() -> Self {
        Self { max_pages: 0 }
    }
}

/// Why the crawl loop stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RunOutcome {
    /// The site linked no further page; the crawl finished naturally
    Exhausted,
    /// A page fetch failed; everything before it was kept
    FetchFailed,
    /// The configured page bound stopped the crawl
    PageLimitReached,
}

impl RunOutcome {
    /// Did the crawl finish naturally?
    pub fn is_exhausted(&self) -> bool {
        matches!(self, Self::Exhausted)
    }

    /// Did a fetch failure end the crawl?
    pub fn is_fetch_failed(&self) -> bool {
        matches!(self, Self::FetchFailed)
    }
}

impl std::fmt::Display for RunOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Exhausted => "exhausted",
            Self::FetchFailed => "fetch_failed",
            Self::PageLimitReached => "page_limit_reached",
        };
        f.write_str(s)
    }
}

/// Counters for one crawl
#[derive(Debug, Clone, Default, Serialize)]
pub struct ScrapeStats {
    /// Pages successfully fetched
    pub pages_fetched: usize,
    /// Unique records written to the sink
    pub records_written: usize,
    /// Cards skipped as duplicates of an already-written URL
    pub duplicates_skipped: usize,
    /// Cards skipped for a missing or unresolvable listing anchor
    pub malformed_cards: usize,
    /// Wall-clock duration of the run in milliseconds
    pub duration_ms: u64,
}

impl ScrapeStats {
    /// Record a fetched page
    pub fn add_page(&mut self) {
        self.pages_fetched += 1;
    }

    /// Record a written record
    pub fn add_record(&mut self) {
        self.records_written += 1;
    }

    /// Record a skipped duplicate
    pub fn add_duplicate(&mut self) {
        self.duplicates_skipped += 1;
    }

    /// Record a skipped malformed card
    pub fn add_malformed(&mut self) {
        self.malformed_cards += 1;
    }

    /// Set the run duration
    pub fn set_duration(&mut self, duration_ms: u64) {
        self.duration_ms = duration_ms;
    }
}

/// Result of one crawl: why it stopped and what it did
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    /// Why the loop stopped
    pub outcome: RunOutcome,
    /// Counters for the run
    pub stats: ScrapeStats,
}
