//! Catalog facade: per-query pagers and the single-shot detail fetcher.

use std::sync::Arc;

use anyhow::Result;
use tracing::instrument;

use crate::pager::{MoviePager, PageQuery};
use crate::tmdb::{DEFAULT_LANGUAGE, LocalTmdbApi};
use crate::view::{MovieDetail, Normalizer};

/// Entry point for the UI layer.
///
/// Hands out independent page cursors per query family and fetches single
/// movie detail records. Holds no mutable state itself; all cursor state
/// lives inside the pagers it creates.
#[derive(Debug)]
pub struct MovieCatalog<A> {
    /// API handle shared with every pager created from this catalog.
    api: Arc<A>,
    /// Response language for all requests.
    language: String,
    /// Wire-to-view normalizer handed to pagers and the detail fetcher.
    normalizer: Normalizer,
}

impl<A: LocalTmdbApi> MovieCatalog<A> {
    /// Creates a catalog with the default language ("ko-KR") and normalizer.
    #[must_use]
    pub fn new(api: Arc<A>) -> Self {
        Self {
            api,
            language: String::from(DEFAULT_LANGUAGE),
            normalizer: Normalizer::new(),
        }
    }

    /// Sets the response language.
    #[must_use]
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Replaces the normalizer (custom image bases or sentinel).
    #[must_use]
    pub fn normalizer(mut self, normalizer: Normalizer) -> Self {
        self.normalizer = normalizer;
        self
    }

    /// Returns a fresh cursor over the popular listing, starting at page 1.
    ///
    /// Every call allocates an independent cursor.
    #[must_use]
    pub fn popular_pager(&self) -> MoviePager<A> {
        MoviePager::new(
            Arc::clone(&self.api),
            PageQuery::Popular,
            self.language.clone(),
            self.normalizer.clone(),
        )
    }

    /// Returns a fresh cursor over search results for `query`, starting at
    /// page 1.
    #[must_use]
    pub fn search_pager(&self, query: impl Into<String>) -> MoviePager<A> {
        MoviePager::new(
            Arc::clone(&self.api),
            PageQuery::Search(query.into()),
            self.language.clone(),
            self.normalizer.clone(),
        )
    }

    /// Fetches one movie's full detail record.
    ///
    /// Stateless and independent of any pager. The `movie_id` is used
    /// verbatim in the request path.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails, or if
    /// the API reports the ID as unknown.
    #[instrument(skip_all, fields(movie_id = %movie_id))]
    pub async fn movie_detail(&self, movie_id: &str) -> Result<MovieDetail> {
        let raw = self.api.movie_details(movie_id, &self.language).await?;
        Ok(self.normalizer.detail(&raw))
    }
}
