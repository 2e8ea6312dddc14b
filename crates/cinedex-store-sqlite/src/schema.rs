//! SQL schema for the cinedex SQLite store.
//!
//! The catalog is rebuilt from its source files on every start, so there is
//! no migration story: [`RESET_SCHEMA`] drops everything and starts over.

/// Drop and recreate all tables.
///
/// Children are dropped before their parent so the drops succeed with
/// foreign-key enforcement switched on.
pub const RESET_SCHEMA: &str = "
DROP TABLE IF EXISTS Rating;
DROP TABLE IF EXISTS GenreTag;
DROP TABLE IF EXISTS Movie;

CREATE TABLE Movie (
    movie_id INTEGER PRIMARY KEY,
    title    TEXT,
    year     INTEGER,
    imdb_id  TEXT
);

-- Duplicate (movie_id, genre) pairs are allowed.
CREATE TABLE GenreTag (
    gtag_id  INTEGER PRIMARY KEY,
    movie_id INTEGER,
    genre    TEXT,
    FOREIGN KEY (movie_id) REFERENCES Movie(movie_id)
);

-- Append-only.
CREATE TABLE Rating (
    rating_id INTEGER PRIMARY KEY,
    movie_id  INTEGER,
    rating    INTEGER,
    FOREIGN KEY (movie_id) REFERENCES Movie(movie_id)
);

CREATE INDEX GenreTag_movie_idx ON GenreTag(movie_id);
CREATE INDEX GenreTag_genre_idx ON GenreTag(genre);
CREATE INDEX Rating_movie_idx   ON Rating(movie_id);
";

/// Connection pragmas applied once when the store is opened.
pub fn connection_pragmas(enforce_foreign_keys: bool) -> String {
  let fk = if enforce_foreign_keys { "ON" } else { "OFF" };
  format!("PRAGMA foreign_keys = {fk};")
}
