//! Page fetching
//!
//! One HTTP GET per results page, with an explicit timeout and a
//! token-bucket pacer between requests. Any failure — network error,
//! timeout, or non-success status — surfaces as a single absence signal;
//! the crawl has no retry policy.

mod client;
mod pacer;

pub use client::{FetcherConfig, FetcherConfigBuilder, PageFetcher};
pub use pacer::{FetchPacer, PacerConfig};

#[cfg(test)]
mod tests;
