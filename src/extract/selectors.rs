//! CSS selector configuration
//!
//! The selector set is plain strings in `SelectorConfig` (so it can come
//! from flags or config files) and is compiled once into `CardSelectors`
//! before the crawl starts. Defaults target Indeed's results markup.

use crate::error::{Error, Result};
use scraper::Selector;
use serde::{Deserialize, Serialize};

/// Selector strings for one job board's results markup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectorConfig {
    /// One listing card on a results page
    pub card: String,
    /// Job title element within a card
    pub title: String,
    /// Company name element within a card
    pub company: String,
    /// Location element within a card
    pub location: String,
    /// Salary snippet within a card
    pub salary: String,
    /// Posting date element within a card
    pub posted_date: String,
    /// Description snippet within a card
    pub summary: String,
    /// The listing anchor carrying the job URL (mandatory per card)
    pub anchor: String,
    /// The next-page navigation control
    pub next_page: String,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            card: "div.job_seen_beacon".to_string(),
            title: "h2.jobTitle".to_string(),
            company: "span.companyName".to_string(),
            location: "div.companyLocation".to_string(),
            salary: "div.salary-snippet-container".to_string(),
            posted_date: "span.date".to_string(),
            summary: "div.job-snippet".to_string(),
            anchor: "h2.jobTitle a".to_string(),
            next_page: r#"a[aria-label="Next Page"]"#.to_string(),
        }
    }
}

/// Compiled selectors, built once per run
#[derive(Debug, Clone)]
pub struct CardSelectors {
    pub card: Selector,
    pub title: Selector,
    pub company: Selector,
    pub location: Selector,
    pub salary: Selector,
    pub posted_date: Selector,
    pub summary: Selector,
    pub anchor: Selector,
    pub next_page: Selector,
}

impl CardSelectors {
    /// Compile a selector config, failing on the first invalid selector
    pub fn compile(config: &SelectorConfig) -> Result<Self> {
        Ok(Self {
            card: compile_one(&config.card)?,
            title: compile_one(&config.title)?,
            company: compile_one(&config.company)?,
            location: compile_one(&config.location)?,
            salary: compile_one(&config.salary)?,
            posted_date: compile_one(&config.posted_date)?,
            summary: compile_one(&config.summary)?,
            anchor: compile_one(&config.anchor)?,
            next_page: compile_one(&config.next_page)?,
        })
    }
}

fn compile_one(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| Error::selector(selector, e.to_string()))
}
