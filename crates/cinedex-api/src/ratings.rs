//! Handler for `POST /rating`.
//!
//! | Status | When |
//! |--------|------|
//! | `201`  | rating stored; body is the accepted outcome |
//! | `422`  | rating outside 1–5; body is the rejected outcome |
//! | `404`  | unknown movie |
//! | `400`  | body is not a `{"movie_id": int, "rating": int}` JSON object |

use std::sync::Arc;

use axum::{
  Json,
  extract::{State, rejection::JsonRejection},
  http::StatusCode,
  response::{IntoResponse, Response},
};
use cinedex_core::{Catalog, CatalogStore, MetadataSource};
use serde::Deserialize;

use crate::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct RatingBody {
  pub movie_id: i64,
  pub rating:   i64,
}

/// `POST /rating` — body: `{"movie_id":1,"rating":4}`
pub async fn submit<S, M>(
  State(catalog): State<Arc<Catalog<S, M>>>,
  body: Result<Json<RatingBody>, JsonRejection>,
) -> Result<Response, ApiError>
where
  S: CatalogStore,
  M: MetadataSource,
{
  let Json(body) = body?;
  let exists = catalog
    .movie_detail(body.movie_id)
    .await
    .map_err(ApiError::store)?
    .is_some();
  if !exists {
    return Err(ApiError::NotFound(format!("movie {} not found", body.movie_id)));
  }

  let outcome = catalog
    .set_rating(body.movie_id, body.rating)
    .await
    .map_err(ApiError::store)?;

  let status = if outcome.is_accepted() {
    StatusCode::CREATED
  } else {
    StatusCode::UNPROCESSABLE_ENTITY
  };
  Ok((status, Json(outcome)).into_response())
}
