//! Core types and trait definitions for the cinedex movie catalog.
//!
//! This crate is deliberately free of HTTP and database dependencies. The
//! SQLite backend, the OMDb client and the JSON API all build on it.

// We intentionally use native `async fn` in traits.
#![allow(async_fn_in_trait)]

pub mod catalog;
pub mod metadata;
pub mod movie;
pub mod store;

pub use catalog::{Catalog, MoviePage};
pub use metadata::{MetadataSource, MovieMetadata};
pub use movie::{Movie, RatingOutcome, RatingRejection, RatingSummary};
pub use store::{CatalogStore, title_pattern};
