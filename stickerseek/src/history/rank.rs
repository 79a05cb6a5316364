//! Per-term ranking over the accumulated history.

use serde::Serialize;

use super::store::{SearchHistory, SearchTerm};

/// A term's total link volume across every page fetched for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankEntry {
    /// The searched term.
    pub term: SearchTerm,
    /// Sum of link counts over all of the term's pages.
    pub total_links: usize,
}

/// Aggregates link totals per distinct term.
///
/// Entries appear in first-appearance order, one per term regardless of how
/// many pages it has. Terms whose pages produced no links at all are still
/// listed, with a total of zero.
#[must_use]
pub fn rank(history: &SearchHistory) -> Vec<RankEntry> {
    let mut entries: Vec<RankEntry> = Vec::new();
    for record in history.records() {
        match entries.iter_mut().find(|e| e.term == *record.term()) {
            Some(entry) => entry.total_links += record.link_count(),
            None => entries.push(RankEntry {
                term: record.term().clone(),
                total_links: record.link_count(),
            }),
        }
    }
    entries
}
