//! The append-only search history store and its pagination policy.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// A normalized search term identifying a logical search.
///
/// The constructor lowercases its input, so two terms that differ only in
/// case compare equal by construction. All term identity in the crate
/// (pagination, ranking, lookups) goes through this type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SearchTerm(String);

impl SearchTerm {
    /// Creates a normalized term from raw user input.
    #[must_use]
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self(raw.as_ref().to_lowercase())
    }

    /// The normalized term text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SearchTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// Deserialization funnels through `new` so a round-tripped term is just as
// normalized as a constructed one.
impl<'de> Deserialize<'de> for SearchTerm {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::new(raw))
    }
}

/// One fetched page of results for a term.
///
/// Created exactly once, when a page's payload has been extracted, and
/// immutable afterwards. The page index is not stored: it is always derived
/// from the record's position among same-term records in the history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRecord {
    term: SearchTerm,
    links: Vec<String>,
    fetched_at: DateTime<Utc>,
}

impl PageRecord {
    /// Creates a record for a freshly extracted page.
    #[must_use]
    pub fn new(term: SearchTerm, links: Vec<String>) -> Self {
        Self {
            term,
            links,
            fetched_at: Utc::now(),
        }
    }

    /// The term this page belongs to.
    #[must_use]
    pub fn term(&self) -> &SearchTerm {
        &self.term
    }

    /// The extracted links, in extraction order. May be empty.
    #[must_use]
    pub fn links(&self) -> &[String] {
        &self.links
    }

    /// Number of links on this page.
    #[must_use]
    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    /// When the page was fetched. Informational only; plays no part in term
    /// identity, pagination, or ranking.
    #[must_use]
    pub fn fetched_at(&self) -> DateTime<Utc> {
        self.fetched_at
    }
}

/// Insertion-ordered, append-only collection of [`PageRecord`]s.
///
/// This is the sole persistent state for the process lifetime. The interface
/// offers no removal or reordering, so the n-th same-term record always
/// represents page index n-1 of that term's results; every derived page
/// number in the crate counts on that.
#[derive(Debug, Default, Serialize)]
pub struct SearchHistory {
    records: Vec<PageRecord>,
}

impl SearchHistory {
    /// Creates an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record and returns a reference to it.
    pub fn append(&mut self, record: PageRecord) -> &PageRecord {
        let at = self.records.len();
        self.records.push(record);
        &self.records[at]
    }

    /// All records in insertion order.
    #[must_use]
    pub fn records(&self) -> &[PageRecord] {
        &self.records
    }

    /// The most recently appended record.
    #[must_use]
    pub fn last(&self) -> Option<&PageRecord> {
        self.records.last()
    }

    /// Number of records (pages) across all terms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether any search has been recorded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of pages already fetched for a term. Zero for a term that was
    /// never searched.
    #[must_use]
    pub fn page_count(&self, term: &SearchTerm) -> u32 {
        self.records.iter().filter(|r| r.term() == term).count() as u32
    }

    /// Pagination policy: the page index to fetch next for a term.
    ///
    /// Always one past what has been seen: the count of existing same-term
    /// records. There is no upper bound; asking for a page beyond the
    /// service's results yields a valid empty-links record, not an error.
    #[must_use]
    pub fn next_page_index(&self, term: &SearchTerm) -> u32 {
        self.page_count(term)
    }

    /// Whether the term has at least one recorded page.
    #[must_use]
    pub fn contains_term(&self, term: &SearchTerm) -> bool {
        self.records.iter().any(|r| r.term() == term)
    }
}
