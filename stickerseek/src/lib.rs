//! # Stickerseek
//!
//! An interactive session manager for Giphy sticker searches.
//!
//! Stickerseek runs paginated keyword searches against the sticker-search
//! service and accumulates everything it fetched in an in-memory history:
//!
//! - **Cursor-free pagination**: the next page for a term is derived by
//!   counting that term's recorded pages, never stored
//! - **Ad-hoc link extraction**: sticker links are scanned out of the raw
//!   payload text, with no JSON parsing on the hot path
//! - **Append-only history**: every fetched page is recorded for the life
//!   of the session, including link-less ones
//! - **Ranking and listing views**: per-term link totals and derived page
//!   numbers, all computed from the same history
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use stickerseek::prelude::*;
//!
//! let fetcher = Arc::new(GiphyFetcher::new()?);
//! let mut session = SearchSession::new(fetcher);
//!
//! // Fetch page 1 of "corgi", then page 2.
//! session.search_new("corgi").await?;
//! let record = session.search_next().await?;
//! println!("{} links on page 2", record.link_count());
//!
//! for entry in session.rank() {
//!     println!("{}: {}", entry.term, entry.total_links);
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    missing_docs,
    rust_2018_idioms
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::cast_possible_truncation
)]

pub mod config;
pub mod errors;
pub mod extract;
pub mod fetch;
pub mod history;
pub mod session;
mod session_tests;
pub mod testing;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::GiphyConfig;
    pub use crate::errors::{
        FetchError, NoHistoryError, StickerSeekError, TermNotFoundError,
    };
    pub use crate::extract::{extract_links, RESULT_LINK_FIELD, STICKER_LINK_PREFIX};
    pub use crate::fetch::{
        FetchObserver, GiphyFetcher, NoOpFetchObserver, PayloadFetcher,
        TracingFetchObserver,
    };
    pub use crate::history::{
        distinct_terms, links_for, list_all, rank, PageChoice, PageRecord,
        PageView, RankEntry, SearchHistory, SearchTerm,
    };
    pub use crate::session::SearchSession;
}
