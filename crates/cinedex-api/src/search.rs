//! Handlers for `GET /title` and `GET /genre`.
//!
//! Both take the search term as `?query=`. Title searches match substrings;
//! genre searches match the label exactly.

use std::sync::Arc;

use axum::{
  Json,
  extract::{Query, State, rejection::QueryRejection},
};
use cinedex_core::{Catalog, CatalogStore, MetadataSource, Movie, title_pattern};
use serde::Deserialize;

use crate::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct SearchParams {
  pub query: String,
}

/// `GET /title?query=<term>`
pub async fn title<S, M>(
  State(catalog): State<Arc<Catalog<S, M>>>,
  params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<Vec<Movie>>, ApiError>
where
  S: CatalogStore,
  M: MetadataSource,
{
  let Query(params) = params?;
  let movies = catalog
    .search_title(&title_pattern(&params.query))
    .await
    .map_err(ApiError::store)?;
  Ok(Json(movies))
}

/// `GET /genre?query=<genre>`
pub async fn genre<S, M>(
  State(catalog): State<Arc<Catalog<S, M>>>,
  params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<Vec<Movie>>, ApiError>
where
  S: CatalogStore,
  M: MetadataSource,
{
  let Query(params) = params?;
  let movies = catalog
    .search_genre(&params.query)
    .await
    .map_err(ApiError::store)?;
  Ok(Json(movies))
}
