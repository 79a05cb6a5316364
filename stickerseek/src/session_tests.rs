//! Comprehensive tests for session orchestration.

#[cfg(test)]
mod tests {
    use crate::errors::StickerSeekError;
    use crate::history::PageChoice;
    use crate::session::SearchSession;
    use crate::testing::{empty_payload, sticker_payload, RecordingObserver, ScriptedFetcher};
    use pretty_assertions::assert_eq;
    use std::sync::Arc;

    fn scripted_session() -> (SearchSession, Arc<ScriptedFetcher>) {
        let fetcher = Arc::new(ScriptedFetcher::new());
        let session = SearchSession::new(fetcher.clone());
        (session, fetcher)
    }

    #[tokio::test]
    async fn test_search_new_records_extracted_links() {
        let (mut session, fetcher) = scripted_session();
        fetcher.push_payload(sticker_payload(&["happy-cat", "grumpy-cat"]));

        let record = session.search_new("Cat").await.unwrap();
        assert_eq!(record.term().as_str(), "cat");
        assert_eq!(
            record.links(),
            &[
                "https://giphy.com/stickers/happy-cat".to_string(),
                "https://giphy.com/stickers/grumpy-cat".to_string(),
            ]
        );
        assert_eq!(session.history().len(), 1);
        assert_eq!(fetcher.calls(), vec![("cat".to_string(), 0)]);
    }

    #[tokio::test]
    async fn test_pagination_advances_per_term_across_interleaving() {
        let (mut session, fetcher) = scripted_session();

        session.search_new("dog").await.unwrap();
        session.search_new("cat").await.unwrap();
        session.search_new("dog").await.unwrap();

        assert_eq!(
            fetcher.calls(),
            vec![
                ("dog".to_string(), 0),
                ("cat".to_string(), 0),
                ("dog".to_string(), 1),
            ]
        );
    }

    #[tokio::test]
    async fn test_case_differences_share_pagination() {
        let (mut session, fetcher) = scripted_session();

        session.search_new("Cat").await.unwrap();
        session.search_new("CAT").await.unwrap();

        assert_eq!(
            fetcher.calls(),
            vec![("cat".to_string(), 0), ("cat".to_string(), 1)]
        );
    }

    #[tokio::test]
    async fn test_search_next_repeats_most_recent_term() {
        let (mut session, fetcher) = scripted_session();

        session.search_new("dog").await.unwrap();
        session.search_new("cat").await.unwrap();
        session.search_next().await.unwrap();

        assert_eq!(fetcher.calls().last(), Some(&("cat".to_string(), 1)));
        assert_eq!(session.history().len(), 3);
    }

    #[tokio::test]
    async fn test_search_next_without_history_fails() {
        let (mut session, fetcher) = scripted_session();

        let err = session.search_next().await.unwrap_err();
        assert!(matches!(err, StickerSeekError::NoHistory(_)));
        assert_eq!(fetcher.call_count(), 0);
        assert!(session.history().is_empty());
    }

    #[tokio::test]
    async fn test_fetch_failure_leaves_history_untouched() {
        let (mut session, fetcher) = scripted_session();
        fetcher.push_failure();

        let err = session.search_new("cat").await.unwrap_err();
        assert!(matches!(err, StickerSeekError::Fetch(_)));
        assert!(session.history().is_empty());

        // The failed fetch recorded no page, so the retry starts over at 0.
        fetcher.push_payload(sticker_payload(&["second-try"]));
        session.search_new("cat").await.unwrap();
        assert_eq!(
            fetcher.calls(),
            vec![("cat".to_string(), 0), ("cat".to_string(), 0)]
        );
    }

    #[tokio::test]
    async fn test_empty_payload_still_records_a_page() {
        let (mut session, fetcher) = scripted_session();
        fetcher.push_payload(empty_payload());

        let record = session.search_new("obscure").await.unwrap();
        assert_eq!(record.link_count(), 0);
        assert_eq!(session.history().len(), 1);

        session.search_next().await.unwrap();
        assert_eq!(fetcher.calls().last(), Some(&("obscure".to_string(), 1)));
    }

    #[tokio::test]
    async fn test_last_record_reports_display_page_number() {
        let (mut session, _fetcher) = scripted_session();

        session.search_new("dog").await.unwrap();
        session.search_new("cat").await.unwrap();
        session.search_next().await.unwrap();

        let view = session.last_record().unwrap();
        assert_eq!(view.term.as_str(), "cat");
        assert_eq!(view.page_number, 2);
    }

    #[test]
    fn test_last_record_without_history_fails() {
        let (session, _fetcher) = scripted_session();
        let err = session.last_record().unwrap_err();
        assert!(matches!(err, StickerSeekError::NoHistory(_)));
    }

    #[tokio::test]
    async fn test_links_for_unknown_term_is_an_error() {
        let (mut session, fetcher) = scripted_session();
        fetcher.push_payload(sticker_payload(&["a"]));
        session.search_new("dog").await.unwrap();

        let err = session
            .links_for("cat", PageChoice::AllPages)
            .unwrap_err();
        assert!(matches!(err, StickerSeekError::TermNotFound(_)));
    }

    #[tokio::test]
    async fn test_links_for_single_page_and_all_pages() {
        let (mut session, fetcher) = scripted_session();
        fetcher.push_payload(sticker_payload(&["p1-a", "p1-b"]));
        fetcher.push_payload(sticker_payload(&["p2-a"]));
        session.search_new("dog").await.unwrap();
        session.search_next().await.unwrap();

        assert_eq!(
            session.links_for("DOG", PageChoice::Page(2)).unwrap(),
            vec!["https://giphy.com/stickers/p2-a"]
        );
        assert_eq!(
            session
                .links_for("dog", PageChoice::from_raw(0))
                .unwrap()
                .len(),
            3
        );
        assert!(session
            .links_for("dog", PageChoice::Page(9))
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn test_rank_totals_accumulate_across_pages() {
        let (mut session, fetcher) = scripted_session();
        fetcher.push_payload(sticker_payload(&["a", "b"]));
        fetcher.push_payload(sticker_payload(&["c"]));
        fetcher.push_payload(sticker_payload(&["d", "e", "f"]));
        session.search_new("dog").await.unwrap();
        session.search_new("cat").await.unwrap();
        session.search_new("dog").await.unwrap();

        let totals: Vec<(String, usize)> = session
            .rank()
            .into_iter()
            .map(|e| (e.term.as_str().to_string(), e.total_links))
            .collect();
        assert_eq!(
            totals,
            vec![("dog".to_string(), 5), ("cat".to_string(), 1)]
        );
    }

    #[tokio::test]
    async fn test_pages_and_terms_views() {
        let (mut session, fetcher) = scripted_session();
        fetcher.push_payload(sticker_payload(&["a"]));
        fetcher.push_payload(sticker_payload(&["b"]));
        fetcher.push_payload(sticker_payload(&["c"]));
        session.search_new("dog").await.unwrap();
        session.search_new("cat").await.unwrap();
        session.search_new("dog").await.unwrap();

        let rows: Vec<(String, u32)> = session
            .pages()
            .into_iter()
            .map(|v| (v.term.as_str().to_string(), v.page_number))
            .collect();
        assert_eq!(
            rows,
            vec![
                ("dog".to_string(), 1),
                ("cat".to_string(), 1),
                ("dog".to_string(), 2),
            ]
        );

        let terms: Vec<&str> = session.terms().iter().map(|t| t.as_str()).collect();
        assert_eq!(terms, vec!["dog", "cat"]);
        assert_eq!(session.page_count("Dog"), 2);
    }

    #[tokio::test]
    async fn test_observer_sees_the_fetch_lifecycle() {
        let fetcher = Arc::new(ScriptedFetcher::new());
        let observer = Arc::new(RecordingObserver::new());
        let mut session = SearchSession::with_observer(fetcher.clone(), observer.clone());

        fetcher.push_payload(sticker_payload(&["a"]));
        fetcher.push_failure();
        session.search_new("cat").await.unwrap();
        session.search_next().await.unwrap_err();

        let events = observer.events();
        assert_eq!(events.len(), 5);
        assert_eq!(events[0], "start cat page 0");
        assert!(events[1].starts_with("complete cat page 0"));
        assert_eq!(events[2], "extracted cat page 0 links 1");
        assert_eq!(events[3], "start cat page 1");
        assert!(events[4].starts_with("error cat page 1"));
    }

    #[test]
    fn test_sessions_get_distinct_ids() {
        let (a, _) = scripted_session();
        let (b, _) = scripted_session();
        assert_ne!(a.id(), b.id());
    }
}
