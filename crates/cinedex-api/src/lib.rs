//! Data-access library for cinedex.
//!
//! Fetches paginated movie listings (popular, free-text search) and single
//! movie detail records from the TMDB API, and normalizes the wire payloads
//! into the small view model consumed by the UI layer.

/// Catalog facade: per-query pagers and the single-shot detail fetcher.
pub mod catalog;

/// Stateful page cursors over TMDB listings.
pub mod pager;

/// TMDB API client.
pub mod tmdb;

/// View model types and wire-to-view normalization.
pub mod view;
