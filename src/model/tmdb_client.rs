//! TMDB API client wrapper

use reqwest::Client;
use thiserror::Error;

use super::raw::{RawResult, SearchPage};
use super::types::TypeFilter;

const BASE_URL: &str = "https://api.themoviedb.org/3";

#[derive(Debug, Error)]
pub enum TmdbError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status_code} - {message}")]
    Api { status_code: u16, message: String },
}

/// TMDB API client.
///
/// Holds the credential for the lifetime of the application; an empty
/// key short-circuits every call to an empty result set so the UI
/// degrades instead of failing.
#[derive(Clone)]
pub struct TmdbClient {
    client: Client,
    api_key: String,
}

impl TmdbClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
        }
    }

    pub fn has_credential(&self) -> bool {
        !self.api_key.is_empty()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", BASE_URL, path)
    }

    async fn handle_response(
        &self,
        response: reqwest::Response,
    ) -> Result<Vec<RawResult>, TmdbError> {
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(TmdbError::Api {
                status_code: status.as_u16(),
                message,
            });
        }
        let page: SearchPage = response.json().await?;
        Ok(page.results)
    }

    /// GET /search/multi, returning mixed movie/series/person records.
    ///
    /// Non-success statuses propagate as errors; the caller decides what
    /// a failed search renders as.
    pub async fn search_multi(
        &self,
        query: &str,
        page: u32,
    ) -> Result<Vec<RawResult>, TmdbError> {
        if !self.has_credential() {
            return Ok(Vec::new());
        }

        let page = page.to_string();
        let response = self
            .client
            .get(self.url("/search/multi"))
            .query(&[
                ("api_key", self.api_key.as_str()),
                ("query", query),
                ("page", page.as_str()),
                ("include_adult", "false"),
            ])
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Popular/trending listing backing the browse (empty query) path.
    /// Unlike search, every failure degrades to an empty list here.
    pub async fn fetch_by_category(&self, filter: TypeFilter) -> Vec<RawResult> {
        if !self.has_credential() {
            return Vec::new();
        }

        match self.category(filter).await {
            Ok(results) => results,
            Err(e) => {
                tracing::warn!(filter = filter.label(), error = %e, "category fetch failed");
                Vec::new()
            }
        }
    }

    async fn category(&self, filter: TypeFilter) -> Result<Vec<RawResult>, TmdbError> {
        let response = self
            .client
            .get(self.url(category_path(filter)))
            .query(&[("api_key", self.api_key.as_str()), ("page", "1")])
            .send()
            .await?;
        self.handle_response(response).await
    }
}

/// Endpoint serving each filter's browse listing
pub(crate) fn category_path(filter: TypeFilter) -> &'static str {
    match filter {
        TypeFilter::Movie => "/movie/popular",
        TypeFilter::Series => "/tv/popular",
        TypeFilter::All => "/trending/all/week",
    }
}
