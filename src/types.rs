//! Common types used throughout jobharvest
//!
//! The record model for one job listing, the search query that seeds a
//! crawl, and the site description the crawl runs against.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use url::Url;

// ============================================================================
// Job Record
// ============================================================================

/// One extracted job listing. Immutable once created.
///
/// Field values degrade to the empty string when the corresponding markup
/// element is missing; `url` is the exception — it is the record's identity
/// key and must be an absolute URL.
///
/// The serde renames fix the CSV header row, matching the historical file
/// format consumers already parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRecord {
    #[serde(rename = "JobTitle")]
    pub title: String,
    #[serde(rename = "Company")]
    pub company: String,
    #[serde(rename = "Location")]
    pub location: String,
    #[serde(rename = "Salary")]
    pub salary: String,
    #[serde(rename = "PostDate")]
    pub posted_date: String,
    #[serde(rename = "Summary")]
    pub summary: String,
    #[serde(rename = "JobUrl")]
    pub url: String,
}

// ============================================================================
// Search Query
// ============================================================================

/// The job search that seeds a crawl
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    /// Job title or keywords (the site's `q` parameter)
    pub title: String,
    /// Location filter (the site's `l` parameter)
    pub location: String,
}

impl SearchQuery {
    /// Create a new search query
    pub fn new(title: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            location: location.into(),
        }
    }
}

// ============================================================================
// Site Config
// ============================================================================

/// Describes the job board being crawled
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// Base URL of the site, e.g. `https://ca.indeed.com`
    pub base_url: String,
    /// Path of the search results endpoint
    pub search_path: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: "https://ca.indeed.com".to_string(),
            search_path: "/jobs".to_string(),
        }
    }
}

impl SiteConfig {
    /// Create a site config for the given base URL, keeping the default
    /// search path
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Build the first results-page URL for a query.
    ///
    /// Query values are percent-encoded by the `url` crate, so titles like
    /// "C++ Developer" survive intact.
    pub fn search_url(&self, query: &SearchQuery) -> Result<Url> {
        let base = Url::parse(&self.base_url)?;
        let mut url = base.join(&self.search_path)?;
        url.query_pairs_mut()
            .append_pair("q", &query.title)
            .append_pair("l", &query.location);
        Ok(url)
    }
}
