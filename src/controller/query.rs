//! Search/browse refresh logic

use std::sync::atomic::Ordering;
use std::time::Instant;

use crate::model::{normalize, DisplayRecord, RawResult, TypeFilter};
use super::AppController;

/// Which fetch path a refresh takes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FetchMode {
    /// Empty query: show the category's popular/trending listing
    Browse,
    /// Non-empty query: multi-type search plus client-side filter
    Search,
}

pub(crate) fn decide_mode(query: &str) -> FetchMode {
    if query.trim().is_empty() {
        FetchMode::Browse
    } else {
        FetchMode::Search
    }
}

/// Client-side filter over the raw media_type, applied to search results.
/// Browse listings are already scoped by their endpoint and skip this.
pub(crate) fn matches_filter(record: &RawResult, filter: TypeFilter) -> bool {
    match filter {
        TypeFilter::All => true,
        TypeFilter::Movie => record.media_type.as_deref() == Some("movie"),
        TypeFilter::Series => record.media_type.as_deref() == Some("tv"),
    }
}

impl AppController {
    /// Text-changed path: arm the debounce slot; the main loop fires it
    pub async fn schedule_refresh(&self) {
        self.debouncer.lock().await.trigger_at(Instant::now());
    }

    /// Fire the pending refresh if its quiet period has elapsed.
    /// Called from the main loop on every iteration.
    pub async fn tick(&self) {
        if self.debouncer.lock().await.fire_due(Instant::now()) {
            self.refresh().await;
        }
    }

    /// Filter-changed and startup path: refresh immediately. Any pending
    /// debounce is cancelled; the query text is read fresh here anyway.
    pub async fn refresh_now(&self) {
        self.debouncer.lock().await.cancel();
        self.refresh().await;
    }

    async fn refresh(&self) {
        let (query, filter) = {
            let model = self.model.lock().await;
            let snapshot = model.get_query_and_filter().await;
            model.set_content_loading(true).await;
            snapshot
        };
        let query = query.trim().to_string();

        let seq = self.fetch_seq.fetch_add(1, Ordering::SeqCst) + 1;
        let controller = self.clone();

        tokio::spawn(async move {
            let records = match decide_mode(&query) {
                FetchMode::Browse => {
                    tracing::debug!(filter = filter.label(), "browse refresh");
                    let raw = controller.tmdb.fetch_by_category(filter).await;
                    raw.iter().map(normalize).collect()
                }
                FetchMode::Search => {
                    tracing::debug!(query = %query, filter = filter.label(), "search refresh");
                    match controller.tmdb.search_multi(&query, 1).await {
                        Ok(raw) => raw
                            .iter()
                            .filter(|record| matches_filter(record, filter))
                            .map(normalize)
                            .collect(),
                        Err(e) => {
                            tracing::error!(query = %query, error = %e, "search failed");
                            Vec::new()
                        }
                    }
                }
            };
            controller.apply_if_current(seq, records).await;
        });
    }

    /// Apply a completed fetch only if no newer one was issued since;
    /// a stale response must not overwrite a newer listing.
    pub(crate) async fn apply_if_current(&self, seq: u64, records: Vec<DisplayRecord>) {
        if seq != self.fetch_seq.load(Ordering::SeqCst) {
            tracing::debug!(seq, "discarding stale fetch response");
            return;
        }
        let model = self.model.lock().await;
        model.apply_results(records).await;
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::Ordering;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    use super::{decide_mode, matches_filter, FetchMode};
    use crate::controller::AppController;
    use crate::model::{normalize, AppModel, RawResult, TmdbClient, TypeFilter};
    use crate::view::utils::results_label;
    use serde_json::json;

    fn mixed_results() -> Vec<RawResult> {
        serde_json::from_value(json!([
            {
                "title": "Batman Begins",
                "release_date": "2005-06-10",
                "media_type": "movie"
            },
            {
                "title": "The Batman",
                "release_date": "2022-03-01",
                "media_type": "movie"
            },
            {
                "name": "Batman: The Animated Series",
                "first_air_date": "1992-09-05",
                "media_type": "tv"
            }
        ]))
        .unwrap()
    }

    fn controller() -> AppController {
        AppController::new(Arc::new(Mutex::new(AppModel::new())), TmdbClient::new(""))
    }

    #[test]
    fn empty_or_whitespace_query_browses() {
        assert_eq!(decide_mode(""), FetchMode::Browse);
        assert_eq!(decide_mode("   "), FetchMode::Browse);
        assert_eq!(decide_mode("batman"), FetchMode::Search);
    }

    #[test]
    fn filter_keeps_only_matching_media_types() {
        let results = mixed_results();

        let movies: Vec<_> = results
            .iter()
            .filter(|r| matches_filter(r, TypeFilter::Movie))
            .collect();
        assert_eq!(movies.len(), 2);

        let series: Vec<_> = results
            .iter()
            .filter(|r| matches_filter(r, TypeFilter::Series))
            .collect();
        assert_eq!(series.len(), 1);

        let all: Vec<_> = results
            .iter()
            .filter(|r| matches_filter(r, TypeFilter::All))
            .collect();
        assert_eq!(all.len(), 3);
    }

    #[test]
    fn absent_media_type_never_matches_a_narrow_filter() {
        let record = RawResult::default();
        assert!(matches_filter(&record, TypeFilter::All));
        assert!(!matches_filter(&record, TypeFilter::Movie));
        assert!(!matches_filter(&record, TypeFilter::Series));
    }

    #[tokio::test]
    async fn stale_responses_are_discarded() {
        let controller = controller();
        controller.fetch_seq.store(2, Ordering::SeqCst);

        let stale = vec![normalize(&mixed_results()[0])];
        controller.apply_if_current(1, stale).await;

        let model = controller.model.lock().await;
        assert!(model.get_content_state().await.records.is_empty());
    }

    #[tokio::test]
    async fn current_response_is_applied() {
        let controller = controller();
        controller.fetch_seq.store(3, Ordering::SeqCst);

        let records: Vec<_> = mixed_results().iter().map(normalize).collect();
        controller.apply_if_current(3, records).await;

        let model = controller.model.lock().await;
        assert_eq!(model.get_content_state().await.records.len(), 3);
    }

    // "batman" with the movie filter: two movie records survive out of three
    #[tokio::test]
    async fn search_pipeline_end_to_end() {
        let controller = controller();
        let filter = TypeFilter::Movie;

        let records: Vec<_> = mixed_results()
            .iter()
            .filter(|r| matches_filter(r, filter))
            .map(normalize)
            .collect();
        controller.apply_if_current(0, records).await;

        let model = controller.model.lock().await;
        let content = model.get_content_state().await;
        assert_eq!(content.records.len(), 2);
        assert_eq!(results_label(content.records.len()), "2 resultado(s)");
        assert_eq!(content.records[0].title, "Batman Begins");
        assert_eq!(content.records[0].meta_line(), "2005 · movie");
    }

    // Browse mode with a failed category fetch renders the empty state
    #[tokio::test]
    async fn failed_browse_renders_empty_state() {
        let controller = controller();

        // A credential-less client degrades exactly like a failed fetch
        let raw = controller.tmdb.fetch_by_category(TypeFilter::Series).await;
        let records: Vec<_> = raw.iter().map(normalize).collect();
        controller.apply_if_current(0, records).await;

        let model = controller.model.lock().await;
        let content = model.get_content_state().await;
        assert!(content.records.is_empty());
        assert_eq!(results_label(content.records.len()), "0 resultados");
    }
}
