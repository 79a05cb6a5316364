//! Read-only listing and lookup views over a [`SearchHistory`].
//!
//! Nothing here mutates the store; every page number is derived on the fly
//! from record positions, never stored.

use serde::Serialize;
use std::collections::HashSet;

use super::store::{SearchHistory, SearchTerm};

/// One row of a history listing: a term, a derived 1-based page number, and
/// the links recorded for that page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageView<'a> {
    /// The term the page belongs to.
    pub term: &'a SearchTerm,
    /// 1-based position of this page among the term's pages.
    pub page_number: u32,
    /// Links recorded for the page, in extraction order.
    pub links: &'a [String],
}

/// Which of a term's pages a lookup should return.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageChoice {
    /// Every fetched page, concatenated in page order.
    AllPages,
    /// A single page by its 1-based display number.
    Page(u32),
}

impl PageChoice {
    /// Maps a raw page number from the interactive layer, where `0` means
    /// "all pages".
    #[must_use]
    pub fn from_raw(raw: u32) -> Self {
        if raw == 0 {
            Self::AllPages
        } else {
            Self::Page(raw)
        }
    }
}

/// Lists every recorded page in insertion order with derived page numbers.
#[must_use]
pub fn list_all(history: &SearchHistory) -> Vec<PageView<'_>> {
    let records = history.records();
    let mut views = Vec::with_capacity(records.len());
    for (at, record) in records.iter().enumerate() {
        let page_number = records[..=at]
            .iter()
            .filter(|r| r.term() == record.term())
            .count() as u32;
        views.push(PageView {
            term: record.term(),
            page_number,
            links: record.links(),
        });
    }
    views
}

/// Lists each searched term once, in order of first appearance.
#[must_use]
pub fn distinct_terms(history: &SearchHistory) -> Vec<&SearchTerm> {
    let mut seen = HashSet::new();
    let mut terms = Vec::new();
    for record in history.records() {
        if seen.insert(record.term()) {
            terms.push(record.term());
        }
    }
    terms
}

/// Collects the links recorded for a term, either for one page or across all
/// of them.
///
/// A term with no recorded pages, or a page number past what was fetched,
/// yields an empty vector. Distinguishing "never searched" from "no links"
/// is the caller's concern.
#[must_use]
pub fn links_for<'a>(
    history: &'a SearchHistory,
    term: &SearchTerm,
    choice: PageChoice,
) -> Vec<&'a str> {
    let mut links = Vec::new();
    let mut page = 0u32;
    for record in history.records() {
        if record.term() != term {
            continue;
        }
        page += 1;
        let wanted = match choice {
            PageChoice::AllPages => true,
            PageChoice::Page(n) => n == page,
        };
        if wanted {
            links.extend(record.links().iter().map(String::as_str));
        }
    }
    links
}
