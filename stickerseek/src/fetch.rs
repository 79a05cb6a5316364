//! Fetching raw result payloads from the sticker-search service.
//!
//! [`PayloadFetcher`] is the seam between orchestration and the network.
//! The production implementation, [`GiphyFetcher`], issues one GET per page
//! against the configured endpoint and hands back the body verbatim. No
//! JSON parsing happens here; the extractor downstream scans raw text.

use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::config::GiphyConfig;
use crate::errors::FetchError;

/// Protocol for fetching one page of raw search results.
///
/// Implementations must be safe to call from async contexts and must not
/// retry on their own; the session issues exactly one fetch per recorded
/// page.
#[async_trait]
pub trait PayloadFetcher: Send + Sync {
    /// Fetches the raw payload for `term` at the given zero-based page index.
    ///
    /// The term arrives already normalized; it is passed through to the
    /// service as the query text unchanged.
    async fn fetch(&self, term: &str, page_index: u32) -> Result<String, FetchError>;

    /// The configuration this fetcher was built with.
    fn config(&self) -> &GiphyConfig;
}

/// Observer for fetch and extraction lifecycle events.
///
/// Implementations must not panic and should return quickly; callbacks run
/// inline on the session's path.
pub trait FetchObserver: Send + Sync {
    /// Called immediately before a fetch is issued.
    fn on_fetch_start(&self, term: &str, page_index: u32);

    /// Called when a fetch returned a body.
    fn on_fetch_complete(&self, term: &str, page_index: u32, duration_ms: f64, payload_len: usize);

    /// Called when a fetch failed.
    fn on_fetch_error(&self, term: &str, page_index: u32, error: &str);

    /// Called after link extraction over a fetched payload.
    fn on_extract_complete(&self, term: &str, page_index: u32, links_found: usize);
}

/// Observer that ignores all events.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpFetchObserver;

impl FetchObserver for NoOpFetchObserver {
    fn on_fetch_start(&self, _term: &str, _page_index: u32) {}
    fn on_fetch_complete(
        &self,
        _term: &str,
        _page_index: u32,
        _duration_ms: f64,
        _payload_len: usize,
    ) {
    }
    fn on_fetch_error(&self, _term: &str, _page_index: u32, _error: &str) {}
    fn on_extract_complete(&self, _term: &str, _page_index: u32, _links_found: usize) {}
}

/// Observer that emits structured `tracing` events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingFetchObserver;

impl FetchObserver for TracingFetchObserver {
    fn on_fetch_start(&self, term: &str, page_index: u32) {
        debug!(term, page_index, "fetch started");
    }

    fn on_fetch_complete(&self, term: &str, page_index: u32, duration_ms: f64, payload_len: usize) {
        info!(term, page_index, duration_ms, payload_len, "fetch completed");
    }

    fn on_fetch_error(&self, term: &str, page_index: u32, error: &str) {
        warn!(term, page_index, error, "fetch failed");
    }

    fn on_extract_complete(&self, term: &str, page_index: u32, links_found: usize) {
        debug!(term, page_index, links_found, "extraction completed");
    }
}

/// Fetcher backed by the Giphy sticker-search HTTP endpoint.
#[derive(Debug, Clone)]
pub struct GiphyFetcher {
    client: reqwest::Client,
    config: GiphyConfig,
}

impl GiphyFetcher {
    /// Creates a fetcher with the default configuration.
    pub fn new() -> Result<Self, FetchError> {
        Self::with_config(GiphyConfig::default())
    }

    /// Creates a fetcher with the given configuration.
    pub fn with_config(config: GiphyConfig) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(FetchError::Client)?;
        Ok(Self { client, config })
    }
}

#[async_trait]
impl PayloadFetcher for GiphyFetcher {
    async fn fetch(&self, term: &str, page_index: u32) -> Result<String, FetchError> {
        let offset = self.config.offset_for_page(page_index);
        let response = self
            .client
            .get(self.config.base_url.as_str())
            .query(&[("api_key", self.config.api_key.as_str()), ("q", term)])
            .query(&[("limit", self.config.page_size), ("offset", offset)])
            .send()
            .await
            .map_err(|err| FetchError::transport(&self.config.base_url, err))?;

        // Non-success statuses are not errors here. The service reports
        // problems in the body and the extractor simply finds no links in
        // them, so the body is handed back verbatim either way.
        let status = response.status();
        if !status.is_success() {
            warn!(%status, term, page_index, "search service returned non-success status");
        }

        response
            .text()
            .await
            .map_err(|err| FetchError::body(&self.config.base_url, err))
    }

    fn config(&self) -> &GiphyConfig {
        &self.config
    }
}
