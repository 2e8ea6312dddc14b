//! Error type for `cinedex-store-sqlite`.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("database error: {0}")]
  Database(tokio_rusqlite::Error),

  /// A bulk-load source file could not be read.
  #[error("cannot read source file {path:?}: {source}")]
  Source {
    path:   PathBuf,
    #[source]
    source: std::io::Error,
  },

  /// A genre tag or rating referenced a movie that does not exist.
  #[error("referential integrity violated: {0}")]
  ReferentialIntegrity(String),
}

/// Foreign-key failures get their own variant; everything else stays a
/// database error.
impl From<tokio_rusqlite::Error> for Error {
  fn from(err: tokio_rusqlite::Error) -> Self {
    if let tokio_rusqlite::Error::Rusqlite(rusqlite::Error::SqliteFailure(code, message)) = &err
      && code.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_FOREIGNKEY
    {
      return Error::ReferentialIntegrity(
        message.clone().unwrap_or_else(|| code.to_string()),
      );
    }
    Error::Database(err)
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
