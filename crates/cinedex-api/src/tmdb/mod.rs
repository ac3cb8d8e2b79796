//! TMDB API client module.
//!
//! Handles HTTP requests to the TMDB API v3 endpoints and retrieves
//! popular listings, search results, and movie detail records.

mod api;
mod client;
mod rate_limiter;
mod types;

#[allow(clippy::module_name_repetitions)]
pub use api::{LocalTmdbApi, TmdbApi};
#[allow(clippy::module_name_repetitions)]
pub use client::{TmdbClient, TmdbClientBuilder};
#[allow(clippy::module_name_repetitions)]
pub use types::{
    DEFAULT_LANGUAGE, PopularMoviesParams, SearchMoviesParams, TmdbGenre, TmdbMovieDetails,
    TmdbMovieResult, TmdbPageResponse,
};
