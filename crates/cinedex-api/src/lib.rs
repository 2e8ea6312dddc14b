//! JSON API for the cinedex catalog.
//!
//! Exposes an axum [`Router`] over a shared [`Catalog`]. Templating, static
//! assets and transport concerns are the caller's responsibility.
//!
//! # Routes
//!
//! | Method | Path | Handler |
//! |--------|------|---------|
//! | `GET`  | `/genres` | [`movies::genres`] |
//! | `GET`  | `/title?query=` | [`search::title`] |
//! | `GET`  | `/genre?query=` | [`search::genre`] |
//! | `GET`  | `/detail/{id}` | [`movies::detail`] |
//! | `POST` | `/rating` | [`ratings::submit`] |

pub mod error;
pub mod movies;
pub mod ratings;
pub mod search;

use std::sync::Arc;

use axum::{
  Router,
  routing::{get, post},
};
use cinedex_core::{Catalog, CatalogStore, MetadataSource};

pub use error::ApiError;

/// Build the API router for `catalog`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S, M>(catalog: Arc<Catalog<S, M>>) -> Router<()>
where
  S: CatalogStore + 'static,
  M: MetadataSource + 'static,
{
  Router::new()
    .route("/genres", get(movies::genres::<S, M>))
    .route("/title", get(search::title::<S, M>))
    .route("/genre", get(search::genre::<S, M>))
    .route("/detail/{id}", get(movies::detail::<S, M>))
    .route("/rating", post(ratings::submit::<S, M>))
    .with_state(catalog)
}

// ─── Integration tests ────────────────────────────────────────────────────────
