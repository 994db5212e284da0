//! HTML extraction
//!
//! Turns one fetched results page into job records. Each field is extracted
//! independently and degrades to an empty string when its element is
//! missing; only the listing anchor is mandatory, and a card without one is
//! skipped rather than aborting the run.

mod document;
mod selectors;

pub use document::{clean_text, normalize_posted_date, JobCard, PageDocument};
pub use selectors::{CardSelectors, SelectorConfig};
