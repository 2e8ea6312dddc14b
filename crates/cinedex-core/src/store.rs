//! The `CatalogStore` trait.
//!
//! Implemented by storage backends (e.g. `cinedex-store-sqlite`). Schema reset
//! and bulk loading are backend-specific boot steps and are not part of this
//! trait; everything a running service needs afterwards is.

use std::future::Future;

use crate::movie::{Movie, RatingOutcome, RatingSummary};

/// Wrap a search term in the `%term%` wildcard form expected by
/// [`CatalogStore::search_title`].
///
/// `%` and `_` inside `term` are passed through and keep their wildcard
/// meaning.
pub fn title_pattern(term: &str) -> String { format!("%{term}%") }

/// Read/write access to a loaded movie catalog.
///
/// All methods return `Send` futures so the trait can be used from a
/// multi-threaded runtime (e.g. tokio with `axum`).
pub trait CatalogStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── Searches ──────────────────────────────────────────────────────────

  /// Movies whose title matches the SQL `LIKE` pattern `pattern`, in id
  /// order. Wildcards are the caller's responsibility (see
  /// [`title_pattern`]).
  fn search_title<'a>(
    &'a self,
    pattern: &'a str,
  ) -> impl Future<Output = Result<Vec<Movie>, Self::Error>> + Send + 'a;

  /// Movies tagged with exactly `genre`. A movie tagged twice with the same
  /// genre appears twice.
  fn search_genre<'a>(
    &'a self,
    genre: &'a str,
  ) -> impl Future<Output = Result<Vec<Movie>, Self::Error>> + Send + 'a;

  // ── Single movie ──────────────────────────────────────────────────────

  /// Look up one movie. Returns `None` if it does not exist.
  fn movie_detail(
    &self,
    movie_id: i64,
  ) -> impl Future<Output = Result<Option<Movie>, Self::Error>> + Send + '_;

  fn get_rating(
    &self,
    movie_id: i64,
  ) -> impl Future<Output = Result<RatingSummary, Self::Error>> + Send + '_;

  /// Genre labels for one movie, in the order they were loaded. Duplicated
  /// tags are returned as-is.
  fn get_genres(
    &self,
    movie_id: i64,
  ) -> impl Future<Output = Result<Vec<String>, Self::Error>> + Send + '_;

  // ── Writes ────────────────────────────────────────────────────────────

  /// Append a user rating. Values outside [`RATING_RANGE`] are not stored
  /// and yield [`RatingOutcome::Rejected`]. Accepted ratings are committed
  /// before this returns.
  ///
  /// [`RATING_RANGE`]: crate::movie::RATING_RANGE
  fn set_rating(
    &self,
    movie_id: i64,
    rating: i64,
  ) -> impl Future<Output = Result<RatingOutcome, Self::Error>> + Send + '_;

  // ── Genres ────────────────────────────────────────────────────────────

  /// Every distinct genre label in the catalog, sorted.
  fn list_genres(
    &self,
  ) -> impl Future<Output = Result<Vec<String>, Self::Error>> + Send + '_;
}
