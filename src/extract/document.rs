//! Parsed page handle and per-card extraction

use super::selectors::CardSelectors;
use crate::types::JobRecord;
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use url::Url;

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid regex"));

// Indeed prefixes dates with UI noise like "PostedPosted 3 days ago" or
// "EmployerActive 5 days ago".
static DATE_NOISE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:(?:Posted|EmployerActive)\s*)+").expect("valid regex"));

/// Collapse whitespace runs and trim
pub fn clean_text(text: &str) -> String {
    WHITESPACE.replace_all(text, " ").trim().to_string()
}

/// Strip the site's "Posted"/"EmployerActive" noise from a date string
pub fn normalize_posted_date(text: &str) -> String {
    DATE_NOISE.replace(&clean_text(text), "").trim().to_string()
}

/// A parsed results page.
///
/// Owned by exactly one loop iteration; the engine drops it before the next
/// fetch so no parsed markup outlives its page.
pub struct PageDocument {
    html: Html,
}

impl PageDocument {
    /// Parse raw page markup
    pub fn parse(body: &str) -> Self {
        Self {
            html: Html::parse_document(body),
        }
    }

    /// All listing cards on this page, in markup order
    pub fn cards<'a>(&'a self, selectors: &'a CardSelectors) -> Vec<JobCard<'a>> {
        self.html
            .select(&selectors.card)
            .map(|element| JobCard { element })
            .collect()
    }

    /// First element matching a selector, if any
    pub fn first_match(&self, selector: &Selector) -> Option<ElementRef<'_>> {
        self.html.select(selector).next()
    }
}

impl std::fmt::Debug for PageDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageDocument").finish_non_exhaustive()
    }
}

/// One listing card's markup fragment
pub struct JobCard<'a> {
    element: ElementRef<'a>,
}

impl<'a> JobCard<'a> {
    /// Parse this card into a record.
    ///
    /// Every text field is extracted independently and falls back to an
    /// empty string. Returns `None` only when the listing anchor or its
    /// href is missing, or the href does not resolve against the page URL —
    /// the caller skips such cards.
    pub fn parse(&self, selectors: &CardSelectors, page_url: &Url) -> Option<JobRecord> {
        let anchor = self.element.select(&selectors.anchor).next()?;
        let href = anchor.value().attr("href")?;
        let url = page_url.join(href).ok()?;

        Some(JobRecord {
            title: self.field_text(&selectors.title),
            company: self.field_text(&selectors.company),
            location: self.field_text(&selectors.location),
            salary: self.field_text(&selectors.salary),
            posted_date: self
                .first_text(&selectors.posted_date)
                .map(|t| normalize_posted_date(&t))
                .unwrap_or_default(),
            summary: self.field_text(&selectors.summary),
            url: url.to_string(),
        })
    }

    /// Extract one optional text field, empty string when absent
    fn field_text(&self, selector: &Selector) -> String {
        self.first_text(selector)
            .map(|t| clean_text(&t))
            .unwrap_or_default()
    }

    fn first_text(&self, selector: &Selector) -> Option<String> {
        self.element
            .select(selector)
            .next()
            .map(|el| el.text().collect::<String>())
    }
}

impl std::fmt::Debug for JobCard<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JobCard").finish_non_exhaustive()
    }
}
