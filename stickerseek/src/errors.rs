//! Error types for the stickerseek library.
//!
//! The taxonomy is small by design: fetching is the only fallible external
//! interaction, and the two history errors exist so the interactive layer can
//! turn them into guidance messages instead of crashing the loop.

use thiserror::Error;

/// The main error type for search session operations.
#[derive(Debug, Error)]
pub enum StickerSeekError {
    /// A fetch failed at the transport level.
    #[error("{0}")]
    Fetch(#[from] FetchError),

    /// An operation that needs prior history ran on an empty one.
    #[error("{0}")]
    NoHistory(#[from] NoHistoryError),

    /// A lookup referenced a term that was never searched.
    #[error("{0}")]
    TermNotFound(#[from] TermNotFoundError),
}

/// Transport-level failure while fetching a result page.
///
/// HTTP status codes are deliberately absent: the search service's body is
/// returned verbatim whatever the status, and only connection, request, or
/// body-read failures surface here.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// The request could not be sent or the connection failed.
    #[error("request to {url} failed: {source}")]
    Transport {
        /// The URL the request was issued against.
        url: String,
        /// The underlying client error.
        #[source]
        source: reqwest::Error,
    },

    /// The response body could not be read.
    #[error("failed to read response body from {url}: {source}")]
    Body {
        /// The URL the response came from.
        url: String,
        /// The underlying client error.
        #[source]
        source: reqwest::Error,
    },
}

impl FetchError {
    /// Creates a transport error for the given URL.
    #[must_use]
    pub fn transport(url: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Transport {
            url: url.into(),
            source,
        }
    }

    /// Creates a body-read error for the given URL.
    #[must_use]
    pub fn body(url: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Body {
            url: url.into(),
            source,
        }
    }
}

/// Error raised when an operation requires at least one prior search.
#[derive(Debug, Clone, Error)]
#[error("'{operation}' requires a previous search")]
pub struct NoHistoryError {
    /// The operation that was attempted on empty history.
    pub operation: String,
}

impl NoHistoryError {
    /// Creates a new no-history error for the named operation.
    #[must_use]
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
        }
    }
}

/// Error raised when a lookup references a term that was never searched.
#[derive(Debug, Clone, Error)]
#[error("term '{term}' has never been searched")]
pub struct TermNotFoundError {
    /// The normalized term that was looked up.
    pub term: String,
}

impl TermNotFoundError {
    /// Creates a new term-not-found error.
    #[must_use]
    pub fn new(term: impl Into<String>) -> Self {
        Self { term: term.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_history_error_message() {
        let err = NoHistoryError::new("next page");
        assert_eq!(err.to_string(), "'next page' requires a previous search");
    }

    #[test]
    fn test_term_not_found_error_message() {
        let err = TermNotFoundError::new("dragon");
        assert_eq!(err.to_string(), "term 'dragon' has never been searched");
    }

    #[test]
    fn test_umbrella_conversion_from_no_history() {
        let err: StickerSeekError = NoHistoryError::new("rank").into();
        assert!(matches!(err, StickerSeekError::NoHistory(_)));
        assert_eq!(err.to_string(), "'rank' requires a previous search");
    }

    #[test]
    fn test_umbrella_conversion_from_term_not_found() {
        let err: StickerSeekError = TermNotFoundError::new("cat").into();
        assert!(matches!(err, StickerSeekError::TermNotFound(_)));
    }
}
