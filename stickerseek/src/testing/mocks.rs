//! Scripted fetchers and recording observers for exercising session flows
//! without a network.

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::VecDeque;

use crate::config::GiphyConfig;
use crate::errors::FetchError;
use crate::fetch::{FetchObserver, PayloadFetcher};

/// Builds a transport-shaped [`FetchError`] without touching the network.
///
/// An empty-host URL makes request construction fail before any I/O, which
/// is the only way to obtain a real client error offline.
#[must_use]
pub fn transport_error() -> FetchError {
    match reqwest::Client::new().get("http://").build() {
        Err(err) => FetchError::transport("http://", err),
        Ok(_) => unreachable!("an empty-host URL cannot build into a request"),
    }
}

/// A [`PayloadFetcher`] that replays queued outcomes and records every call.
///
/// Outcomes are consumed front to back. Once the queue is exhausted, further
/// fetches return an empty payload, which extracts to zero links, the same
/// shape as a page past the end of the service's results.
#[derive(Debug, Default)]
pub struct ScriptedFetcher {
    outcomes: Mutex<VecDeque<Result<String, FetchError>>>,
    calls: Mutex<Vec<(String, u32)>>,
    config: GiphyConfig,
}

impl ScriptedFetcher {
    /// Creates a fetcher with no scripted outcomes.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a payload to deliver on a future fetch.
    pub fn push_payload(&self, payload: impl Into<String>) {
        self.outcomes.lock().push_back(Ok(payload.into()));
    }

    /// Queues a transport failure to deliver on a future fetch.
    pub fn push_failure(&self) {
        self.outcomes.lock().push_back(Err(transport_error()));
    }

    /// Every `(term, page_index)` pair fetched so far, in call order.
    #[must_use]
    pub fn calls(&self) -> Vec<(String, u32)> {
        self.calls.lock().clone()
    }

    /// Number of fetches issued so far.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }
}

#[async_trait]
impl PayloadFetcher for ScriptedFetcher {
    async fn fetch(&self, term: &str, page_index: u32) -> Result<String, FetchError> {
        self.calls.lock().push((term.to_string(), page_index));
        self.outcomes
            .lock()
            .pop_front()
            .unwrap_or_else(|| Ok(String::new()))
    }

    fn config(&self) -> &GiphyConfig {
        &self.config
    }
}

/// A [`FetchObserver`] that records a line per callback.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    events: Mutex<Vec<String>>,
}

impl RecordingObserver {
    /// Creates an observer with no recorded events.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The recorded event lines, in callback order.
    #[must_use]
    pub fn events(&self) -> Vec<String> {
        self.events.lock().clone()
    }
}

impl FetchObserver for RecordingObserver {
    fn on_fetch_start(&self, term: &str, page_index: u32) {
        self.events
            .lock()
            .push(format!("start {term} page {page_index}"));
    }

    fn on_fetch_complete(&self, term: &str, page_index: u32, _duration_ms: f64, payload_len: usize) {
        self.events
            .lock()
            .push(format!("complete {term} page {page_index} bytes {payload_len}"));
    }

    fn on_fetch_error(&self, term: &str, page_index: u32, error: &str) {
        self.events
            .lock()
            .push(format!("error {term} page {page_index}: {error}"));
    }

    fn on_extract_complete(&self, term: &str, page_index: u32, links_found: usize) {
        self.events
            .lock()
            .push(format!("extracted {term} page {page_index} links {links_found}"));
    }
}
