//! Interactive search session orchestration.
//!
//! A [`SearchSession`] owns the append-only history and a fetcher, and runs
//! the fixed per-search sequence: derive the next page index for the term,
//! fetch that page's payload, extract sticker links from it, and append the
//! record. Requests are strictly sequential; there is no prefetching and no
//! concurrent fetching within a session.

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info};
use uuid::Uuid;

use crate::errors::{NoHistoryError, StickerSeekError, TermNotFoundError};
use crate::extract::{extract_links, RESULT_LINK_FIELD};
use crate::fetch::{FetchObserver, NoOpFetchObserver, PayloadFetcher};
use crate::history::{
    PageChoice, PageRecord, PageView, RankEntry, SearchHistory, SearchTerm,
};

/// An interactive sticker-search session.
///
/// All reads go through the session so every displayed page number comes
/// from the same derivation over the same history. A fetch failure is
/// reported to the caller and leaves the history exactly as it was.
pub struct SearchSession {
    id: Uuid,
    history: SearchHistory,
    fetcher: Arc<dyn PayloadFetcher>,
    observer: Arc<dyn FetchObserver>,
}

impl SearchSession {
    /// Creates a session over the given fetcher with no observer.
    #[must_use]
    pub fn new(fetcher: Arc<dyn PayloadFetcher>) -> Self {
        Self::with_observer(fetcher, Arc::new(NoOpFetchObserver))
    }

    /// Creates a session with an observer for fetch lifecycle events.
    #[must_use]
    pub fn with_observer(
        fetcher: Arc<dyn PayloadFetcher>,
        observer: Arc<dyn FetchObserver>,
    ) -> Self {
        let id = Uuid::new_v4();
        debug!(session_id = %id, "search session created");
        Self {
            id,
            history: SearchHistory::new(),
            fetcher,
            observer,
        }
    }

    /// The session's correlation id, present on its log events.
    #[must_use]
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Read-only access to the accumulated history.
    #[must_use]
    pub fn history(&self) -> &SearchHistory {
        &self.history
    }

    /// Searches for a term, fetching that term's next unseen page.
    ///
    /// The raw term is normalized first, so `"Cat"` continues the pagination
    /// of `"cat"`. A brand-new term starts at page index 0.
    pub async fn search_new(&mut self, raw_term: &str) -> Result<&PageRecord, StickerSeekError> {
        let term = SearchTerm::new(raw_term);
        self.run_search(term).await
    }

    /// Repeats the most recent search, fetching its next page.
    pub async fn search_next(&mut self) -> Result<&PageRecord, StickerSeekError> {
        let term = self
            .history
            .last()
            .map(|record| record.term().clone())
            .ok_or_else(|| NoHistoryError::new("next page"))?;
        self.run_search(term).await
    }

    async fn run_search(&mut self, term: SearchTerm) -> Result<&PageRecord, StickerSeekError> {
        let page_index = self.history.next_page_index(&term);
        self.observer.on_fetch_start(term.as_str(), page_index);
        let started = Instant::now();

        let payload = match self.fetcher.fetch(term.as_str(), page_index).await {
            Ok(payload) => payload,
            Err(err) => {
                self.observer
                    .on_fetch_error(term.as_str(), page_index, &err.to_string());
                return Err(err.into());
            }
        };
        let duration_ms = started.elapsed().as_secs_f64() * 1000.0;
        self.observer
            .on_fetch_complete(term.as_str(), page_index, duration_ms, payload.len());

        let links = extract_links(&payload, RESULT_LINK_FIELD);
        self.observer
            .on_extract_complete(term.as_str(), page_index, links.len());
        info!(
            session_id = %self.id,
            term = term.as_str(),
            page_index,
            links_found = links.len(),
            "page recorded"
        );

        Ok(self.history.append(PageRecord::new(term, links)))
    }

    /// The most recent record with its 1-based display page number.
    pub fn last_record(&self) -> Result<PageView<'_>, StickerSeekError> {
        let record = self
            .history
            .last()
            .ok_or_else(|| NoHistoryError::new("print last"))?;
        Ok(PageView {
            term: record.term(),
            page_number: self.history.page_count(record.term()),
            links: record.links(),
        })
    }

    /// Every recorded page in insertion order with derived page numbers.
    #[must_use]
    pub fn pages(&self) -> Vec<PageView<'_>> {
        crate::history::list_all(&self.history)
    }

    /// Each searched term once, in order of first appearance.
    #[must_use]
    pub fn terms(&self) -> Vec<&SearchTerm> {
        crate::history::distinct_terms(&self.history)
    }

    /// Number of pages fetched so far for a raw term.
    #[must_use]
    pub fn page_count(&self, raw_term: &str) -> u32 {
        self.history.page_count(&SearchTerm::new(raw_term))
    }

    /// Links recorded for a term, for one page or across all of them.
    ///
    /// Unlike the underlying view, a term with no history is an error here:
    /// the interactive layer asks for terms by name and needs to distinguish
    /// a typo from a link-less page.
    pub fn links_for(
        &self,
        raw_term: &str,
        choice: PageChoice,
    ) -> Result<Vec<&str>, StickerSeekError> {
        let term = SearchTerm::new(raw_term);
        if !self.history.contains_term(&term) {
            return Err(TermNotFoundError::new(term.as_str()).into());
        }
        Ok(crate::history::links_for(&self.history, &term, choice))
    }

    /// Per-term link totals in first-appearance order.
    #[must_use]
    pub fn rank(&self) -> Vec<RankEntry> {
        crate::history::rank(&self.history)
    }
}

