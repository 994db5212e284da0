//! HTTP page fetcher
//!
//! A thin wrapper over reqwest that issues one GET per results page.
//! The fetcher is constructed explicitly and passed into the engine —
//! there is no ambient global client. Failure of any kind collapses to
//! `None`, with the actual cause logged so operators can tell a dead site
//! from the natural end of pagination.

use super::pacer::{FetchPacer, PacerConfig};
use crate::error::{Error, Result};
use reqwest::Client;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, warn};

/// Configuration for the page fetcher
#[derive(Debug, Clone)]
pub struct FetcherConfig {
    /// Request timeout (explicit, never the client's implicit default)
    pub timeout: Duration,
    /// User agent string
    pub user_agent: String,
    /// Headers sent with every request
    pub default_headers: HashMap<String, String>,
    /// Pacing between page fetches; `None` disables pacing
    pub pacer: Option<PacerConfig>,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        let mut default_headers = HashMap::new();
        // Job boards serve challenge pages to clients that look headless;
        // a browser-shaped Accept header keeps the plain HTML coming.
        default_headers.insert(
            "Accept".to_string(),
            "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8".to_string(),
        );
        default_headers.insert("Accept-Language".to_string(), "en-CA,en;q=0.9".to_string());

        Self {
            timeout: Duration::from_secs(30),
            user_agent: concat!(
                "Mozilla/5.0 (X11; Linux x86_64; rv:128.0) ",
                "Gecko/20100101 Firefox/128.0"
            )
            .to_string(),
            default_headers,
            pacer: Some(PacerConfig::default()),
        }
    }
}

impl FetcherConfig {
    /// Create a new config builder
    pub fn builder() -> FetcherConfigBuilder {
        FetcherConfigBuilder::default()
    }
}

/// Builder for fetcher config
#[derive(Default)]
pub struct FetcherConfigBuilder {
    config: FetcherConfig,
}

impl FetcherConfigBuilder {
    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Add a default header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.default_headers.insert(key.into(), value.into());
        self
    }

    /// Set the pacer
    pub fn pacer(mut self, config: PacerConfig) -> Self {
        self.config.pacer = Some(config);
        self
    }

    /// Disable pacing
    pub fn no_pacer(mut self) -> Self {
        self.config.pacer = None;
        self
    }

    /// Build the config
    pub fn build(self) -> FetcherConfig {
        self.config
    }
}

/// Fetches one results page at a time
pub struct PageFetcher {
    client: Client,
    config: FetcherConfig,
    pacer: Option<FetchPacer>,
}

impl PageFetcher {
    /// Create a fetcher with default configuration
    pub fn new() -> Self {
        Self::with_config(FetcherConfig::default())
    }

    /// Create a fetcher with custom configuration
    pub fn with_config(config: FetcherConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .cookie_store(true)
            .build()
            .expect("Failed to build HTTP client");

        let pacer = config.pacer.as_ref().map(FetchPacer::new);

        Self {
            client,
            config,
            pacer,
        }
    }

    /// Check if pacing is enabled
    pub fn has_pacer(&self) -> bool {
        self.pacer.is_some()
    }

    /// Fetch one results page.
    ///
    /// Returns the raw markup, or `None` on network failure, timeout, or a
    /// non-success status. The cause is logged at warn so a fetch failure
    /// stays distinguishable from a crawl that simply ran out of pages.
    pub async fn fetch_page(&self, url: &str) -> Option<String> {
        match self.try_fetch(url).await {
            Ok(body) => {
                debug!(url, bytes = body.len(), "fetched results page");
                Some(body)
            }
            Err(e) => {
                warn!(url, error = %e, "page fetch failed, ending crawl");
                None
            }
        }
    }

    async fn try_fetch(&self, url: &str) -> Result<String> {
        if let Some(ref pacer) = self.pacer {
            pacer.wait().await;
        }

        let mut req = self.client.get(url);
        for (key, value) in &self.config.default_headers {
            req = req.header(key.as_str(), value.as_str());
        }

        let response = req.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::http_status(status.as_u16(), url));
        }

        Ok(response.text().await?)
    }
}

impl Default for PageFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for PageFetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageFetcher")
            .field("config", &self.config)
            .field("has_pacer", &self.pacer.is_some())
            .finish_non_exhaustive()
    }
}
