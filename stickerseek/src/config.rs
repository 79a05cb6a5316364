//! Configuration for the Giphy sticker-search endpoint.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for requests against the sticker-search service.
///
/// The defaults give the fixed request shape the session expects: 20 results
/// per page, offset derived from the page index, and the service's public
/// beta credential passed through unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GiphyConfig {
    /// API key passed through on every request.
    #[serde(default = "default_api_key")]
    pub api_key: String,
    /// Endpoint the search requests are issued against.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Results requested per page. The page offset is `page_index * page_size`.
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: f64,
    /// User agent string.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_api_key() -> String {
    "vQ3ODLXxGd1CZ5iFTqhTcG1sM40AdKFi".to_string()
}

fn default_base_url() -> String {
    "https://api.giphy.com/v1/stickers/search".to_string()
}

fn default_page_size() -> u32 {
    20
}

fn default_timeout() -> f64 {
    30.0
}

fn default_user_agent() -> String {
    concat!("stickerseek/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Default for GiphyConfig {
    fn default() -> Self {
        Self {
            api_key: default_api_key(),
            base_url: default_base_url(),
            page_size: default_page_size(),
            timeout_seconds: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

impl GiphyConfig {
    /// Creates a new configuration with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API key.
    #[must_use]
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = key.into();
        self
    }

    /// Sets the endpoint URL.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the page size.
    #[must_use]
    pub fn with_page_size(mut self, size: u32) -> Self {
        self.page_size = size;
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, seconds: f64) -> Self {
        self.timeout_seconds = seconds;
        self
    }

    /// Sets the user agent.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Gets the timeout as a `Duration`.
    ///
    /// Values that cannot form a duration (negative, NaN, infinite) fall
    /// back to the default timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::try_from_secs_f64(self.timeout_seconds)
            .unwrap_or_else(|_| Duration::from_secs_f64(default_timeout()))
    }

    /// Computes the result offset for a page index.
    #[must_use]
    pub fn offset_for_page(&self, page_index: u32) -> u32 {
        page_index * self.page_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = GiphyConfig::default();
        assert_eq!(config.page_size, 20);
        assert_eq!(config.timeout_seconds, 30.0);
        assert_eq!(config.base_url, "https://api.giphy.com/v1/stickers/search");
        assert!(!config.api_key.is_empty());
    }

    #[test]
    fn test_config_builder() {
        let config = GiphyConfig::new()
            .with_api_key("secret")
            .with_base_url("http://localhost:9000/search")
            .with_timeout(5.0)
            .with_user_agent("custom-agent");

        assert_eq!(config.api_key, "secret");
        assert_eq!(config.base_url, "http://localhost:9000/search");
        assert_eq!(config.timeout(), Duration::from_secs(5));
        assert_eq!(config.user_agent, "custom-agent");
    }

    #[test]
    fn test_offset_follows_page_size() {
        let config = GiphyConfig::default();
        assert_eq!(config.offset_for_page(0), 0);
        assert_eq!(config.offset_for_page(1), 20);
        assert_eq!(config.offset_for_page(3), 60);

        let small = GiphyConfig::new().with_page_size(5);
        assert_eq!(small.offset_for_page(2), 10);
    }

    #[test]
    fn test_config_deserializes_with_defaults() {
        let config: GiphyConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.page_size, 20);
    }

    #[test]
    fn test_invalid_timeout_falls_back_to_default() {
        let config = GiphyConfig::new().with_timeout(-1.0);
        assert_eq!(config.timeout(), Duration::from_secs(30));
    }
}
