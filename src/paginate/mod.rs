//! Next-page lookup
//!
//! Finds the next-page navigation control on a parsed results page and
//! resolves its href against the current page URL. Every failure mode —
//! no control, no href, unresolvable href — means "no next page"; the
//! crawl fails open into termination rather than into an error.

use crate::extract::{CardSelectors, PageDocument};
use tracing::debug;
use url::Url;

/// Locates the next results page from the current one
#[derive(Debug, Default)]
pub struct NextPageLocator;

impl NextPageLocator {
    /// Create a new locator
    pub fn new() -> Self {
        Self
    }

    /// Absolute URL of the next results page, if the page links one
    pub fn next_url(
        &self,
        doc: &PageDocument,
        selectors: &CardSelectors,
        current: &Url,
    ) -> Option<Url> {
        let Some(control) = doc.first_match(&selectors.next_page) else {
            debug!(page = %current, "no next-page control, crawl complete");
            return None;
        };

        let Some(href) = control.value().attr("href") else {
            debug!(page = %current, "next-page control has no href, treating as last page");
            return None;
        };

        match current.join(href) {
            Ok(next) => Some(next),
            Err(e) => {
                debug!(page = %current, href, error = %e, "unresolvable next-page href, treating as last page");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests;
