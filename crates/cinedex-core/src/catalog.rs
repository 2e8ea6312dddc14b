//! [`Catalog`] — the query service handed to the presentation layer.
//!
//! Bundles a [`CatalogStore`] with a [`MetadataSource`]. Constructed once at
//! startup and shared (typically behind an `Arc`) by every request.

use serde::{Deserialize, Serialize};

use crate::{
  metadata::{MetadataSource, MovieMetadata},
  movie::{Movie, RatingOutcome, RatingSummary},
  store::CatalogStore,
};

/// Everything the detail view shows for one movie.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoviePage {
  pub movie:    Movie,
  pub genres:   Vec<String>,
  pub rating:   RatingSummary,
  /// `None` when the metadata service had nothing for us.
  pub metadata: Option<MovieMetadata>,
}

pub struct Catalog<S, M> {
  store:    S,
  metadata: M,
}

impl<S, M> Catalog<S, M>
where
  S: CatalogStore,
  M: MetadataSource,
{
  pub fn new(store: S, metadata: M) -> Self { Self { store, metadata } }

  pub async fn search_title(&self, pattern: &str) -> Result<Vec<Movie>, S::Error> {
    self.store.search_title(pattern).await
  }

  pub async fn search_genre(&self, genre: &str) -> Result<Vec<Movie>, S::Error> {
    self.store.search_genre(genre).await
  }

  pub async fn movie_detail(&self, movie_id: i64) -> Result<Option<Movie>, S::Error> {
    self.store.movie_detail(movie_id).await
  }

  pub async fn get_rating(&self, movie_id: i64) -> Result<RatingSummary, S::Error> {
    self.store.get_rating(movie_id).await
  }

  pub async fn get_genres(&self, movie_id: i64) -> Result<Vec<String>, S::Error> {
    self.store.get_genres(movie_id).await
  }

  pub async fn set_rating(
    &self,
    movie_id: i64,
    rating: i64,
  ) -> Result<RatingOutcome, S::Error> {
    self.store.set_rating(movie_id, rating).await
  }

  pub async fn list_genres(&self) -> Result<Vec<String>, S::Error> {
    self.store.list_genres().await
  }

  /// External metadata for `imdb_id`; `None` on any lookup failure.
  pub async fn imdb_data(&self, imdb_id: &str) -> Option<MovieMetadata> {
    self.metadata.fetch(imdb_id).await
  }

  /// Assemble the detail view for `movie_id`.
  ///
  /// Returns `None` for an unknown movie without consulting the metadata
  /// source.
  pub async fn movie_page(&self, movie_id: i64) -> Result<Option<MoviePage>, S::Error> {
    let Some(movie) = self.store.movie_detail(movie_id).await? else {
      return Ok(None);
    };

    let genres   = self.store.get_genres(movie_id).await?;
    let rating   = self.store.get_rating(movie_id).await?;
    let metadata = self.metadata.fetch(&movie.imdb_id).await;

    Ok(Some(MoviePage { movie, genres, rating, metadata }))
  }
}
