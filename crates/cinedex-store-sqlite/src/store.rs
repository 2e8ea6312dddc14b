//! [`SqliteStore`] — the SQLite implementation of [`CatalogStore`].

use std::path::Path;

use cinedex_core::{
  CatalogStore, Movie, RatingOutcome, RatingRejection, RatingSummary,
};
use rusqlite::OptionalExtension as _;

use crate::{
  Result,
  loader::{self, LoadReport, SourceFiles},
  schema::{RESET_SCHEMA, connection_pragmas},
};

/// Options applied when opening a store.
#[derive(Debug, Clone, Copy)]
pub struct StoreOptions {
  /// Reject genre tags and ratings that reference unknown movies.
  pub enforce_foreign_keys: bool,
}

impl Default for StoreOptions {
  fn default() -> Self { Self { enforce_foreign_keys: true } }
}

// ─── Store ───────────────────────────────────────────────────────────────────

/// A movie catalog backed by a single SQLite connection.
///
/// Cloning is cheap — the inner connection is reference-counted, and every
/// clone talks to the same connection thread.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) the database file at `path`.
  ///
  /// The schema is left untouched; call [`reset_schema`](Self::reset_schema)
  /// before loading.
  pub async fn open(path: impl AsRef<Path>, options: StoreOptions) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.apply_options(options).await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory(options: StoreOptions) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.apply_options(options).await?;
    Ok(store)
  }

  async fn apply_options(&self, options: StoreOptions) -> Result<()> {
    let pragmas = connection_pragmas(options.enforce_foreign_keys);
    self
      .conn
      .call(move |conn| {
        conn.execute_batch(&pragmas)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Drop every table and recreate the schema from scratch.
  pub async fn reset_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(RESET_SCHEMA)?;
        Ok(())
      })
      .await?;
    tracing::debug!("schema reset");
    Ok(())
  }

  /// Populate the freshly reset schema from `sources`.
  ///
  /// All three files are read before anything is written; the inserts then
  /// run in a single transaction. A failed insert rolls the whole pass back.
  pub async fn load(&self, sources: &SourceFiles) -> Result<LoadReport> {
    let batch = loader::read_sources(sources).await?;
    let report = batch.report;

    self
      .conn
      .call(move |conn| {
        loader::insert_batch(conn, &batch)?;
        Ok(())
      })
      .await?;

    tracing::info!(%report, "catalog loaded");
    Ok(report)
  }
}

// ─── Row mapping ─────────────────────────────────────────────────────────────

const MOVIE_COLUMNS: &str = "m.movie_id, m.title, m.year, m.imdb_id";

fn movie_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Movie> {
  Ok(Movie {
    movie_id: row.get(0)?,
    title:    row.get(1)?,
    year:     row.get(2)?,
    imdb_id:  row.get(3)?,
  })
}

fn query_movies(
  conn: &rusqlite::Connection,
  sql: &str,
  param: &str,
) -> rusqlite::Result<Vec<Movie>> {
  let mut stmt = conn.prepare(sql)?;
  stmt
    .query_map(rusqlite::params![param], movie_from_row)?
    .collect()
}

fn query_strings(
  conn: &rusqlite::Connection,
  sql: &str,
  params: impl rusqlite::Params,
) -> rusqlite::Result<Vec<String>> {
  let mut stmt = conn.prepare(sql)?;
  stmt.query_map(params, |row| row.get(0))?.collect()
}

// ─── CatalogStore impl ───────────────────────────────────────────────────────

impl CatalogStore for SqliteStore {
  type Error = crate::Error;

  // ── Searches ──────────────────────────────────────────────────────────────

  async fn search_title(&self, pattern: &str) -> Result<Vec<Movie>> {
    let pattern = pattern.to_owned();
    let movies = self
      .conn
      .call(move |conn| {
        let sql = format!(
          "SELECT {MOVIE_COLUMNS} FROM Movie m
           WHERE m.title LIKE ?1
           ORDER BY m.movie_id"
        );
        Ok(query_movies(conn, &sql, &pattern)?)
      })
      .await?;
    Ok(movies)
  }

  async fn search_genre(&self, genre: &str) -> Result<Vec<Movie>> {
    let genre = genre.to_owned();
    let movies = self
      .conn
      .call(move |conn| {
        let sql = format!(
          "SELECT {MOVIE_COLUMNS} FROM Movie m
           JOIN GenreTag g ON g.movie_id = m.movie_id
           WHERE g.genre = ?1
           ORDER BY g.gtag_id"
        );
        Ok(query_movies(conn, &sql, &genre)?)
      })
      .await?;
    Ok(movies)
  }

  // ── Single movie ──────────────────────────────────────────────────────────

  async fn movie_detail(&self, movie_id: i64) -> Result<Option<Movie>> {
    let movie = self
      .conn
      .call(move |conn| {
        let sql = format!("SELECT {MOVIE_COLUMNS} FROM Movie m WHERE m.movie_id = ?1");
        Ok(
          conn
            .query_row(&sql, rusqlite::params![movie_id], movie_from_row)
            .optional()?,
        )
      })
      .await?;
    Ok(movie)
  }

  async fn get_rating(&self, movie_id: i64) -> Result<RatingSummary> {
    let (average, count): (Option<f64>, i64) = self
      .conn
      .call(move |conn| {
        Ok(conn.query_row(
          "SELECT round(avg(rating), 2), count(rating)
           FROM Rating
           WHERE movie_id = ?1",
          rusqlite::params![movie_id],
          |row| Ok((row.get(0)?, row.get(1)?)),
        )?)
      })
      .await?;

    Ok(RatingSummary { average, count: count.max(0) as u64 })
  }

  async fn get_genres(&self, movie_id: i64) -> Result<Vec<String>> {
    let genres = self
      .conn
      .call(move |conn| {
        Ok(query_strings(
          conn,
          "SELECT genre FROM GenreTag WHERE movie_id = ?1 ORDER BY gtag_id",
          rusqlite::params![movie_id],
        )?)
      })
      .await?;
    Ok(genres)
  }

  // ── Writes ────────────────────────────────────────────────────────────────

  async fn set_rating(&self, movie_id: i64, rating: i64) -> Result<RatingOutcome> {
    if let Some(reason) = RatingRejection::for_value(rating) {
      tracing::debug!(movie_id, rating, "rating out of range, not stored");
      return Ok(RatingOutcome::Rejected { reason });
    }

    let rating_id = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO Rating (movie_id, rating) VALUES (?1, ?2)",
          rusqlite::params![movie_id, rating],
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await?;

    Ok(RatingOutcome::Accepted { rating_id })
  }

  // ── Genres ────────────────────────────────────────────────────────────────

  async fn list_genres(&self) -> Result<Vec<String>> {
    let genres = self
      .conn
      .call(|conn| {
        Ok(query_strings(
          conn,
          "SELECT DISTINCT genre FROM GenreTag ORDER BY genre",
          [],
        )?)
      })
      .await?;
    Ok(genres)
  }
}
