//! Run-scoped deduplication
//!
//! Tracks listing URLs already written this run. The set lives for one run
//! only and grows monotonically; at job-board scale (hundreds to thousands
//! of listings) no eviction is needed.

use std::collections::HashSet;

/// Set of listing URLs already emitted this run
#[derive(Debug, Default)]
pub struct DedupSet {
    seen: HashSet<String>,
}

impl DedupSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Has this URL not been seen yet?
    pub fn is_new(&self, url: &str) -> bool {
        !self.seen.contains(url)
    }

    /// Mark a URL as seen
    pub fn mark_seen(&mut self, url: impl Into<String>) {
        self.seen.insert(url.into());
    }

    /// Check and mark in one step: returns true iff the URL was new.
    ///
    /// This is the form the engine uses, so check and mark can never be
    /// reordered across records.
    pub fn accept(&mut self, url: &str) -> bool {
        self.seen.insert(url.to_string())
    }

    /// Number of distinct URLs seen
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    /// Is the set empty?
    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

#[cfg(test)]
mod tests;
