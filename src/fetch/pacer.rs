//! Inter-request pacing
//!
//! Uses the governor crate for token bucket pacing between page fetches.
//! This is a politeness delay, not rate-limit compliance: the crawl stays
//! strictly sequential either way.

use governor::clock::DefaultClock;
use governor::middleware::NoOpMiddleware;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter};
use std::num::NonZeroU32;
use std::sync::Arc;

/// Configuration for the fetch pacer
#[derive(Debug, Clone)]
pub struct PacerConfig {
    /// Maximum number of page fetches per second
    pub requests_per_second: u32,
    /// Burst size (max tokens in bucket)
    pub burst_size: u32,
}

impl Default for PacerConfig {
    fn default() -> Self {
        // One page per second is polite for a job board.
        Self {
            requests_per_second: 1,
            burst_size: 1,
        }
    }
}

impl PacerConfig {
    /// Create a new pacer config
    pub fn new(requests_per_second: u32, burst_size: u32) -> Self {
        Self {
            requests_per_second,
            burst_size,
        }
    }
}

/// Token bucket pacer for page fetches
#[derive(Clone)]
pub struct FetchPacer {
    limiter: Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock, NoOpMiddleware>>,
}

impl FetchPacer {
    /// Create a new pacer with the given config
    pub fn new(config: &PacerConfig) -> Self {
        let one = NonZeroU32::MIN;
        let quota =
            Quota::per_second(NonZeroU32::new(config.requests_per_second).unwrap_or(one))
                .allow_burst(NonZeroU32::new(config.burst_size).unwrap_or(one));

        Self {
            limiter: Arc::new(RateLimiter::direct(quota)),
        }
    }

    /// Wait until the next fetch may go out (blocks the crawl loop)
    pub async fn wait(&self) {
        self.limiter.until_ready().await;
    }

    /// Check whether a fetch could go out immediately
    pub fn check(&self) -> bool {
        self.limiter.check().is_ok()
    }
}

impl Default for FetchPacer {
    fn default() -> Self {
        Self::new(&PacerConfig::default())
    }
}

impl std::fmt::Debug for FetchPacer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FetchPacer").finish()
    }
}
