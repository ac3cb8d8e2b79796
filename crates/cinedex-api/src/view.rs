//! View model types and wire-to-view normalization.
//!
//! Projects the optional-field-laden TMDB payloads into the fixed shapes
//! the UI layer renders. Field-presence fallbacks live here and nowhere
//! else: a missing poster path yields a base-URL-only image URL, a missing
//! genre list yields a single sentinel entry, a missing overview stays
//! absent.

use crate::tmdb::{TmdbMovieDetails, TmdbMovieResult, TmdbPageResponse};

/// Base URL for thumbnail-sized poster images (listing entries).
const THUMBNAIL_IMAGE_BASE: &str = "https://image.tmdb.org/t/p/w220_and_h330_face";

/// Base URL for original-resolution poster images (detail view).
const ORIGINAL_IMAGE_BASE: &str = "https://image.tmdb.org/t/p/original";

/// Placeholder genre shown when the API reports none.
const NO_GENRE_LABEL: &str = "장르 없음";

/// One movie entry as rendered in a listing.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieSummary {
    /// Localized title.
    pub title: String,
    /// Thumbnail poster URL.
    pub image_url: String,
    /// Vote average (0-10).
    pub rating: f64,
    /// TMDB movie ID, stringified for the UI layer.
    pub id: String,
}

/// Full movie record as rendered in the detail view.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieDetail {
    /// Original-resolution poster URL.
    pub poster_url: String,
    /// Localized title.
    pub title: String,
    /// Genre names in API order; never empty.
    pub genres: Vec<String>,
    /// Vote average (0-10).
    pub rating: f64,
    /// Overview text, absent when the API has none.
    pub description: Option<String>,
}

/// One normalized page of a listing.
#[derive(Debug, Clone, PartialEq)]
pub struct MoviePage {
    /// Normalized entries, in API order.
    pub summaries: Vec<MovieSummary>,
    /// Whether the requested page was the last one.
    pub is_last_page: bool,
}

/// Converts wire payloads into view model shapes.
///
/// The image bases and the no-genre sentinel are configurable but default
/// to the fixed production constants.
#[derive(Debug, Clone)]
pub struct Normalizer {
    /// Prefix for listing thumbnails.
    thumbnail_image_base: String,
    /// Prefix for detail-view posters.
    original_image_base: String,
    /// Substitute genre when the API reports none.
    no_genre_label: String,
}

impl Normalizer {
    /// Creates a normalizer with the default bases and sentinel.
    #[must_use]
    pub fn new() -> Self {
        Self {
            thumbnail_image_base: String::from(THUMBNAIL_IMAGE_BASE),
            original_image_base: String::from(ORIGINAL_IMAGE_BASE),
            no_genre_label: String::from(NO_GENRE_LABEL),
        }
    }

    /// Overrides the thumbnail image base URL.
    #[must_use]
    pub fn thumbnail_image_base(mut self, base: impl Into<String>) -> Self {
        self.thumbnail_image_base = base.into();
        self
    }

    /// Overrides the original-resolution image base URL.
    #[must_use]
    pub fn original_image_base(mut self, base: impl Into<String>) -> Self {
        self.original_image_base = base.into();
        self
    }

    /// Overrides the no-genre sentinel label.
    #[must_use]
    pub fn no_genre_label(mut self, label: impl Into<String>) -> Self {
        self.no_genre_label = label.into();
        self
    }

    /// Normalizes one listing entry.
    ///
    /// The image URL is the thumbnail base concatenated with the raw
    /// `poster_path`; an absent path yields the bare base URL, passed
    /// through unchanged for the UI layer to deal with.
    #[must_use]
    pub fn summary(&self, raw: &TmdbMovieResult) -> MovieSummary {
        MovieSummary {
            title: raw.title.clone(),
            image_url: format!(
                "{}{}",
                self.thumbnail_image_base,
                raw.poster_path.as_deref().unwrap_or("")
            ),
            rating: raw.vote_average,
            id: raw.id.to_string(),
        }
    }

    /// Normalizes one detail record.
    ///
    /// Genres map to their names preserving order; an empty or missing
    /// list substitutes the sentinel. The poster uses the
    /// original-resolution base, distinct from the listing thumbnail base.
    #[must_use]
    pub fn detail(&self, raw: &TmdbMovieDetails) -> MovieDetail {
        let genres = if raw.genres.is_empty() {
            vec![self.no_genre_label.clone()]
        } else {
            raw.genres.iter().map(|g| g.name.clone()).collect()
        };

        MovieDetail {
            poster_url: format!(
                "{}{}",
                self.original_image_base,
                raw.poster_path.as_deref().unwrap_or("")
            ),
            title: raw.title.clone(),
            genres,
            rating: raw.vote_average,
            description: raw.overview.clone(),
        }
    }

    /// Normalizes one paginated envelope into a `MoviePage`.
    ///
    /// `requested_page` is the page number the caller asked for, compared
    /// against the server-reported total to detect the last page. A fetch
    /// past the end (server reports fewer total pages) also reads as last.
    #[must_use]
    pub fn page(&self, raw: &TmdbPageResponse, requested_page: u32) -> MoviePage {
        MoviePage {
            summaries: raw.results.iter().map(|r| self.summary(r)).collect(),
            is_last_page: requested_page >= raw.total_pages,
        }
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::indexing_slicing)]
    #![allow(clippy::float_cmp)]

    use super::*;
    use crate::tmdb::{TmdbGenre, TmdbMovieDetails, TmdbMovieResult, TmdbPageResponse};

    fn result_entry(id: u64, title: &str, poster_path: Option<&str>) -> TmdbMovieResult {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "title": title,
            "poster_path": poster_path,
            "vote_average": 7.5,
        }))
        .unwrap()
    }

    fn detail_entry(genres: &[(u32, &str)], overview: Option<&str>) -> TmdbMovieDetails {
        serde_json::from_value(serde_json::json!({
            "id": 99,
            "title": "X",
            "poster_path": "/p.jpg",
            "vote_average": 7.5,
            "overview": overview,
            "genres": genres
                .iter()
                .map(|(id, name)| serde_json::json!({"id": id, "name": name}))
                .collect::<Vec<_>>(),
        }))
        .unwrap()
    }

    #[test]
    fn test_summary_builds_thumbnail_url() {
        // Arrange
        let normalizer = Normalizer::new();
        let raw = result_entry(42, "파묘", Some("/abc.jpg"));

        // Act
        let summary = normalizer.summary(&raw);

        // Assert
        assert_eq!(
            summary.image_url,
            "https://image.tmdb.org/t/p/w220_and_h330_face/abc.jpg"
        );
        assert_eq!(summary.id, "42");
        assert_eq!(summary.title, "파묘");
        assert_eq!(summary.rating, 7.5);
    }

    #[test]
    fn test_summary_missing_poster_yields_base_only_url() {
        // Arrange
        let normalizer = Normalizer::new();
        let raw = result_entry(42, "파묘", None);

        // Act
        let summary = normalizer.summary(&raw);

        // Assert
        assert_eq!(summary.image_url, "https://image.tmdb.org/t/p/w220_and_h330_face");
    }

    #[test]
    fn test_detail_uses_original_resolution_base() {
        // Arrange
        let normalizer = Normalizer::new();
        let raw = detail_entry(&[(28, "액션")], Some("d"));

        // Act
        let detail = normalizer.detail(&raw);

        // Assert: distinct from the listing thumbnail base.
        assert_eq!(detail.poster_url, "https://image.tmdb.org/t/p/original/p.jpg");
    }

    #[test]
    fn test_detail_empty_genres_substitutes_sentinel() {
        // Arrange
        let normalizer = Normalizer::new();
        let raw = detail_entry(&[], Some("d"));

        // Act
        let detail = normalizer.detail(&raw);

        // Assert
        assert_eq!(detail.genres, vec![String::from("장르 없음")]);
    }

    #[test]
    fn test_detail_genres_preserve_order() {
        // Arrange
        let normalizer = Normalizer::new();
        let raw = detail_entry(&[(28, "Action"), (18, "Drama")], None);

        // Act
        let detail = normalizer.detail(&raw);

        // Assert
        assert_eq!(detail.genres, vec![String::from("Action"), String::from("Drama")]);
    }

    #[test]
    fn test_detail_missing_overview_stays_absent() {
        // Arrange
        let normalizer = Normalizer::new();
        let raw = detail_entry(&[(18, "드라마")], None);

        // Act
        let detail = normalizer.detail(&raw);

        // Assert: None, not Some("").
        assert_eq!(detail.description, None);
    }

    #[test]
    fn test_detail_missing_genres_field_substitutes_sentinel() {
        // Arrange: genres key entirely absent upstream.
        let normalizer = Normalizer::new();
        let raw: TmdbMovieDetails = serde_json::from_value(serde_json::json!({
            "id": 99,
            "title": "X",
            "vote_average": 6.0,
        }))
        .unwrap();

        // Act
        let detail = normalizer.detail(&raw);

        // Assert
        assert_eq!(detail.genres, vec![String::from("장르 없음")]);
    }

    #[test]
    fn test_custom_sentinel_label() {
        // Arrange
        let normalizer = Normalizer::new().no_genre_label("no genre");
        let raw = TmdbMovieDetails {
            genres: Vec::<TmdbGenre>::new(),
            ..serde_json::from_value(serde_json::json!({"id": 1, "title": "t"})).unwrap()
        };

        // Act
        let detail = normalizer.detail(&raw);

        // Assert
        assert_eq!(detail.genres, vec![String::from("no genre")]);
    }

    #[test]
    fn test_page_maps_all_results_in_order() {
        // Arrange
        let normalizer = Normalizer::new();
        let raw: TmdbPageResponse = serde_json::from_str(include_str!(
            "../../../fixtures/tmdb/popular_page1.json"
        ))
        .unwrap();

        // Act
        let page = normalizer.page(&raw, 1);

        // Assert
        assert_eq!(page.summaries.len(), 3);
        assert_eq!(page.summaries[0].title, "파묘");
        assert_eq!(page.summaries[2].title, "듄: 파트 2");
        assert!(page.is_last_page);
    }

    #[test]
    fn test_page_not_last_when_more_pages_remain() {
        // Arrange
        let normalizer = Normalizer::new();
        let raw: TmdbPageResponse = serde_json::from_str(include_str!(
            "../../../fixtures/tmdb/search_movie_page1.json"
        ))
        .unwrap();

        // Act
        let page = normalizer.page(&raw, 1);

        // Assert: total_pages = 4.
        assert!(!page.is_last_page);
    }

    #[test]
    fn test_page_past_the_end_reads_as_last() {
        // Arrange
        let normalizer = Normalizer::new();
        let raw: TmdbPageResponse = serde_json::from_str(include_str!(
            "../../../fixtures/tmdb/search_movie_empty.json"
        ))
        .unwrap();

        // Act: the caller kept paging past the end.
        let page = normalizer.page(&raw, 7);

        // Assert
        assert!(page.summaries.is_empty());
        assert!(page.is_last_page);
    }
}
