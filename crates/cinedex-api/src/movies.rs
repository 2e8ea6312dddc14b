//! Handlers for the movie detail view and the genre list.

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State, rejection::PathRejection},
};
use cinedex_core::{Catalog, CatalogStore, MetadataSource, MoviePage};

use crate::error::ApiError;

/// `GET /detail/{id}`: 404 if the movie does not exist, 400 if `id` is not an
/// integer.
pub async fn detail<S, M>(
  State(catalog): State<Arc<Catalog<S, M>>>,
  movie_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<MoviePage>, ApiError>
where
  S: CatalogStore,
  M: MetadataSource,
{
  let Path(movie_id) = movie_id?;
  let page = catalog
    .movie_page(movie_id)
    .await
    .map_err(ApiError::store)?
    .ok_or_else(|| ApiError::NotFound(format!("movie {movie_id} not found")))?;
  Ok(Json(page))
}

/// `GET /genres` — every distinct genre, sorted.
pub async fn genres<S, M>(
  State(catalog): State<Arc<Catalog<S, M>>>,
) -> Result<Json<Vec<String>>, ApiError>
where
  S: CatalogStore,
  M: MetadataSource,
{
  let genres = catalog.list_genres().await.map_err(ApiError::store)?;
  Ok(Json(genres))
}
