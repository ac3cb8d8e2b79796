//! TMDB API wire types and request parameters.
//!
//! Every upstream field is treated as potentially absent: optional fields
//! deserialize to `Option`, required-looking fields fall back to their
//! `Default` value. A sparse payload never drops an entry.

use serde::Deserialize;

/// Default response language for all requests.
pub const DEFAULT_LANGUAGE: &str = "ko-KR";

// --- Paginated listings ---

/// Paginated results envelope returned by `movie/popular` and `search/movie`.
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbPageResponse {
    /// Current page number.
    #[serde(default)]
    pub page: u32,
    /// Movie entries on this page.
    #[serde(default)]
    pub results: Vec<TmdbMovieResult>,
    /// Total number of pages.
    #[serde(default)]
    pub total_pages: u32,
    /// Total number of results.
    #[serde(default)]
    pub total_results: u32,
}

/// A single movie entry within a paginated listing.
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbMovieResult {
    /// TMDB movie ID.
    #[serde(default)]
    pub id: u64,
    /// Localized title.
    #[serde(default)]
    pub title: String,
    /// Original title.
    pub original_title: Option<String>,
    /// Original language (ISO 639-1).
    pub original_language: Option<String>,
    /// Release date (YYYY-MM-DD or null).
    pub release_date: Option<String>,
    /// Overview text.
    pub overview: Option<String>,
    /// Popularity score.
    #[serde(default)]
    pub popularity: f64,
    /// Vote average (0-10).
    #[serde(default)]
    pub vote_average: f64,
    /// Vote count.
    #[serde(default)]
    pub vote_count: u32,
    /// Genre IDs.
    #[serde(default)]
    pub genre_ids: Vec<u32>,
    /// Adult flag.
    #[serde(default)]
    pub adult: bool,
    /// Video flag.
    #[serde(default)]
    pub video: bool,
    /// Poster image path (leading slash, e.g. "/abc.jpg").
    pub poster_path: Option<String>,
    /// Backdrop image path.
    pub backdrop_path: Option<String>,
}

// --- Movie details ---

/// Response from the `movie/{movie_id}` endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbMovieDetails {
    /// TMDB movie ID.
    #[serde(default)]
    pub id: u64,
    /// Localized title.
    #[serde(default)]
    pub title: String,
    /// Original title.
    pub original_title: Option<String>,
    /// Original language (ISO 639-1).
    pub original_language: Option<String>,
    /// Genres, in API order.
    #[serde(default)]
    pub genres: Vec<TmdbGenre>,
    /// Overview text.
    pub overview: Option<String>,
    /// Tagline.
    pub tagline: Option<String>,
    /// Release date (YYYY-MM-DD or null).
    pub release_date: Option<String>,
    /// Runtime in minutes.
    pub runtime: Option<u32>,
    /// Release status (e.g., "Released").
    pub status: Option<String>,
    /// Popularity score.
    #[serde(default)]
    pub popularity: f64,
    /// Vote average (0-10).
    #[serde(default)]
    pub vote_average: f64,
    /// Vote count.
    #[serde(default)]
    pub vote_count: u32,
    /// Adult flag.
    #[serde(default)]
    pub adult: bool,
    /// Poster image path.
    pub poster_path: Option<String>,
    /// Backdrop image path.
    pub backdrop_path: Option<String>,
}

/// Genre entry.
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbGenre {
    /// Genre ID.
    #[serde(default)]
    pub id: u32,
    /// Genre name.
    #[serde(default)]
    pub name: String,
}

// --- Error Response ---

/// TMDB API error response body.
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbErrorResponse {
    /// TMDB error code.
    pub status_code: u32,
    /// Error message.
    pub status_message: String,
    /// Success flag (always false for errors).
    #[allow(dead_code)]
    pub success: bool,
}

// --- Request Parameters ---

/// Parameters for the `movie/popular` endpoint.
#[derive(Debug, Clone)]
pub struct PopularMoviesParams {
    /// Response language (default: "ko-KR").
    pub language: String,
    /// Result page (1-500, default: 1).
    pub page: u32,
}

impl PopularMoviesParams {
    /// Creates params with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self {
            language: String::from(DEFAULT_LANGUAGE),
            page: 1,
        }
    }

    /// Sets the response language.
    #[must_use]
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Sets the result page.
    #[must_use]
    pub const fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }
}

impl Default for PopularMoviesParams {
    fn default() -> Self {
        Self::new()
    }
}

/// Parameters for the `search/movie` endpoint.
#[derive(Debug, Clone)]
pub struct SearchMoviesParams {
    /// Search query (required).
    pub query: String,
    /// Response language (default: "ko-KR").
    pub language: String,
    /// Result page (1-500, default: 1).
    pub page: u32,
    /// Include adult content (default: false).
    pub include_adult: bool,
}

impl SearchMoviesParams {
    /// Creates new search params with the given query.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            language: String::from(DEFAULT_LANGUAGE),
            page: 1,
            include_adult: false,
        }
    }

    /// Sets the response language.
    #[must_use]
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Sets the result page.
    #[must_use]
    pub const fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }
}
