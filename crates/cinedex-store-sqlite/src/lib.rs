//! SQLite backend for the cinedex movie catalog.
//!
//! Wraps [`tokio_rusqlite`] so all database access runs on a dedicated thread
//! without blocking the async runtime. Besides the [`CatalogStore`] queries,
//! [`SqliteStore`] owns the boot sequence: [`SqliteStore::reset_schema`]
//! followed by [`SqliteStore::load`].
//!
//! [`CatalogStore`]: cinedex_core::CatalogStore

mod loader;
mod schema;
mod store;

pub mod error;

pub use error::{Error, Result};
pub use loader::{LoadReport, SourceFiles, SourceReport};
pub use store::{SqliteStore, StoreOptions};
