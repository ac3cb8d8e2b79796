//! `TmdbApi` trait definition.
#![allow(clippy::future_not_send)]

use anyhow::Result;

use super::types::{PopularMoviesParams, SearchMoviesParams, TmdbMovieDetails, TmdbPageResponse};

/// TMDB API trait.
///
/// Abstracts API operations for mock substitution in tests.
/// Uses `trait_variant::make` to generate a `Send`-bound async trait.
#[allow(clippy::module_name_repetitions)]
#[trait_variant::make(TmdbApi: Send)]
pub trait LocalTmdbApi {
    /// Fetches one page of the popular movie listing.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn popular_movies(&self, params: &PopularMoviesParams) -> Result<TmdbPageResponse>;

    /// Fetches one page of free-text movie search results.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    async fn search_movies(&self, params: &SearchMoviesParams) -> Result<TmdbPageResponse>;

    /// Fetches the full detail record for one movie.
    ///
    /// The `movie_id` is substituted into the request path verbatim.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails, or if
    /// the API reports an unknown ID.
    async fn movie_details(&self, movie_id: &str, language: &str) -> Result<TmdbMovieDetails>;
}
