//! In-memory search history: the append-only store of fetched pages, the
//! pagination policy, and the read-only views derived from it.
//!
//! All state lives in [`SearchHistory`] for the lifetime of the process;
//! nothing is persisted. Page numbers are never stored; they are derived
//! from each record's position among same-term records, so insertion order
//! is load-bearing.

mod rank;
mod store;
mod views;

pub use rank::{rank, RankEntry};
pub use store::{PageRecord, SearchHistory, SearchTerm};
pub use views::{distinct_terms, links_for, list_all, PageChoice, PageView};
