//! Stateful page cursors over TMDB listings.
//!
//! A `MoviePager` remembers which page it last requested and advances
//! monotonically. Each pager owns its cursor exclusively; independent
//! pagers never share state. There is no exhausted terminal state: paging
//! past the end returns an empty page flagged as last.

use std::sync::Arc;

use anyhow::Result;
use tracing::instrument;

use crate::tmdb::{LocalTmdbApi, PopularMoviesParams, SearchMoviesParams};
use crate::view::{MoviePage, Normalizer};

/// Query family a pager iterates over.
#[derive(Debug, Clone)]
pub(crate) enum PageQuery {
    /// The `movie/popular` listing.
    Popular,
    /// Free-text `search/movie` with the captured query.
    Search(String),
}

/// Stateful "fetch next page" cursor for one query family.
///
/// `next_page` takes `&mut self`, so a second fetch on the same pager
/// cannot start before the first resolves.
#[derive(Debug)]
pub struct MoviePager<A> {
    /// API handle, shared with the catalog and sibling pagers.
    api: Arc<A>,
    /// Captured query family.
    query: PageQuery,
    /// Response language.
    language: String,
    /// Wire-to-view normalizer.
    normalizer: Normalizer,
    /// Next page to request; starts at 1.
    current_page: u32,
}

impl<A: LocalTmdbApi> MoviePager<A> {
    pub(crate) fn new(
        api: Arc<A>,
        query: PageQuery,
        language: String,
        normalizer: Normalizer,
    ) -> Self {
        Self {
            api,
            query,
            language,
            normalizer,
            current_page: 1,
        }
    }

    /// Fetches the next page and advances the cursor.
    ///
    /// The cursor advances before the request is awaited, so the Nth call
    /// always requests page N even when earlier calls failed.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails. No
    /// retry is performed at this layer.
    #[instrument(skip_all, fields(page = %self.current_page))]
    pub async fn next_page(&mut self) -> Result<MoviePage> {
        let page = self.current_page;
        self.current_page = self.current_page.saturating_add(1);

        let response = match &self.query {
            PageQuery::Popular => {
                let params = PopularMoviesParams::new()
                    .language(self.language.as_str())
                    .page(page);
                self.api.popular_movies(&params).await?
            }
            PageQuery::Search(query) => {
                let params = SearchMoviesParams::new(query.as_str())
                    .language(self.language.as_str())
                    .page(page);
                self.api.search_movies(&params).await?
            }
        };

        Ok(self.normalizer.page(&response, page))
    }
}
