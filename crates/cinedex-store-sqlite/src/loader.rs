//! Bulk loading of the tab-separated source files.
//!
//! Each file starts with a header line that is discarded. Every other line is
//! trimmed and split on `\t`; lines with the wrong number of fields, or whose
//! id or rating fields do not parse as integers, are skipped and counted. A
//! movie's year is free-form in the source: anything that is not an integer,
//! including an empty field, is stored as NULL.

use std::{
  fmt,
  path::{Path, PathBuf},
};

use cinedex_core::Movie;

use crate::{Error, Result};

const MOVIES_FILE: &str = "movies.tsv";
const GENRES_FILE: &str = "genres.tsv";
const RATINGS_FILE: &str = "ratings.tsv";

/// Locations of the three source files.
#[derive(Debug, Clone)]
pub struct SourceFiles {
  pub movies:  PathBuf,
  pub genres:  PathBuf,
  pub ratings: PathBuf,
}

impl SourceFiles {
  /// The conventional `movies.tsv`, `genres.tsv`, `ratings.tsv` under `dir`.
  pub fn in_dir(dir: impl AsRef<Path>) -> Self {
    let dir = dir.as_ref();
    Self {
      movies:  dir.join(MOVIES_FILE),
      genres:  dir.join(GENRES_FILE),
      ratings: dir.join(RATINGS_FILE),
    }
  }
}

// ─── Reports ─────────────────────────────────────────────────────────────────

/// Line counts for one source file, header excluded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SourceReport {
  pub accepted: usize,
  pub skipped:  usize,
}

/// Outcome of one bulk-load pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
  pub movies:     SourceReport,
  pub genre_tags: SourceReport,
  pub ratings:    SourceReport,
}

impl fmt::Display for SourceReport {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{} accepted, {} skipped", self.accepted, self.skipped)
  }
}

impl fmt::Display for LoadReport {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "movies: {}; genre tags: {}; ratings: {}",
      self.movies, self.genre_tags, self.ratings
    )
  }
}

// ─── Parsed rows ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct GenreTagRow {
  pub movie_id: i64,
  pub genre:    String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RatingRow {
  pub movie_id: i64,
  pub rating:   i64,
}

/// Everything parsed from the three files, ready to insert.
#[derive(Debug, Default)]
pub(crate) struct Batch {
  pub movies:     Vec<Movie>,
  pub genre_tags: Vec<GenreTagRow>,
  pub ratings:    Vec<RatingRow>,
  pub report:     LoadReport,
}

/// Read and parse all three source files. Any unreadable file is fatal.
pub(crate) async fn read_sources(sources: &SourceFiles) -> Result<Batch> {
  let (movies, movies_report) = load_movies(&sources.movies).await?;
  let (genre_tags, genre_tags_report) = load_genre_tags(&sources.genres).await?;
  let (ratings, ratings_report) = load_ratings(&sources.ratings).await?;

  Ok(Batch {
    movies,
    genre_tags,
    ratings,
    report: LoadReport {
      movies:     movies_report,
      genre_tags: genre_tags_report,
      ratings:    ratings_report,
    },
  })
}

/// `id`, `title`, `year`, `imdb_id`.
pub(crate) async fn load_movies(path: &Path) -> Result<(Vec<Movie>, SourceReport)> {
  let text = read(path).await?;
  Ok(parse_source(path, &text, 4, |f| {
    Some(Movie {
      movie_id: f[0].parse().ok()?,
      title:    f[1].to_owned(),
      year:     f[2].parse().ok(),
      imdb_id:  f[3].to_owned(),
    })
  }))
}

/// `movie_id`, `genre`.
pub(crate) async fn load_genre_tags(
  path: &Path,
) -> Result<(Vec<GenreTagRow>, SourceReport)> {
  let text = read(path).await?;
  Ok(parse_source(path, &text, 2, |f| {
    Some(GenreTagRow { movie_id: f[0].parse().ok()?, genre: f[1].to_owned() })
  }))
}

/// `movie_id`, `rating`. Ratings from the source file are not range-checked.
pub(crate) async fn load_ratings(path: &Path) -> Result<(Vec<RatingRow>, SourceReport)> {
  let text = read(path).await?;
  Ok(parse_source(path, &text, 2, |f| {
    Some(RatingRow { movie_id: f[0].parse().ok()?, rating: f[1].parse().ok()? })
  }))
}

/// Insert a parsed batch inside one transaction, committed at the end.
pub(crate) fn insert_batch(
  conn: &mut rusqlite::Connection,
  batch: &Batch,
) -> rusqlite::Result<()> {
  let tx = conn.transaction()?;
  {
    let mut stmt = tx.prepare(
      "INSERT INTO Movie (movie_id, title, year, imdb_id) VALUES (?1, ?2, ?3, ?4)",
    )?;
    for m in &batch.movies {
      stmt.execute(rusqlite::params![m.movie_id, m.title, m.year, m.imdb_id])?;
    }

    let mut stmt =
      tx.prepare("INSERT INTO GenreTag (movie_id, genre) VALUES (?1, ?2)")?;
    for g in &batch.genre_tags {
      stmt.execute(rusqlite::params![g.movie_id, g.genre])?;
    }

    let mut stmt =
      tx.prepare("INSERT INTO Rating (movie_id, rating) VALUES (?1, ?2)")?;
    for r in &batch.ratings {
      stmt.execute(rusqlite::params![r.movie_id, r.rating])?;
    }
  }
  tx.commit()
}

async fn read(path: &Path) -> Result<String> {
  tokio::fs::read_to_string(path)
    .await
    .map_err(|source| Error::Source { path: path.to_owned(), source })
}

/// Split `text` into rows of exactly `width` fields and convert each with
/// `convert`. The first line is the header.
pub(crate) fn parse_source<T>(
  path: &Path,
  text: &str,
  width: usize,
  convert: impl Fn(&[&str]) -> Option<T>,
) -> (Vec<T>, SourceReport) {
  let mut rows = Vec::new();
  let mut report = SourceReport::default();

  for (idx, line) in text.lines().enumerate().skip(1) {
    let fields: Vec<&str> = line.trim().split('\t').collect();
    let row = if fields.len() == width { convert(&fields) } else { None };

    match row {
      Some(row) => {
        rows.push(row);
        report.accepted += 1;
      }
      None => {
        tracing::debug!(
          path = %path.display(),
          line = idx + 1,
          fields = fields.len(),
          "skipping malformed source line"
        );
        report.skipped += 1;
      }
    }
  }

  (rows, report)
}

#[cfg(test)]
mod tests {
  use super::*;

  fn pairs(text: &str) -> (Vec<(String, String)>, SourceReport) {
    parse_source(Path::new("test.tsv"), text, 2, |f| {
      Some((f[0].to_owned(), f[1].to_owned()))
    })
  }

  #[test]
  fn header_is_discarded() {
    let (rows, report) = pairs("movie_id\tgenre\n1\tDrama\n");
    assert_eq!(rows, [("1".to_owned(), "Drama".to_owned())]);
    assert_eq!(report, SourceReport { accepted: 1, skipped: 0 });
  }

  #[test]
  fn wrong_field_counts_are_skipped() {
    let text = "h1\th2\n1\tDrama\n2\n3\tComedy\textra\n\n4\tWestern\n";
    let (rows, report) = pairs(text);
    assert_eq!(rows.len(), 2);
    assert_eq!(report, SourceReport { accepted: 2, skipped: 3 });
  }

  #[test]
  fn trailing_whitespace_is_trimmed_before_splitting() {
    // A trailing tab disappears with the trim, leaving one field.
    let (rows, report) = pairs("h\n1\tAction\r\n2\t\n");
    assert_eq!(rows, [("1".to_owned(), "Action".to_owned())]);
    assert_eq!(report.skipped, 1);
  }

  #[test]
  fn header_only_and_empty_files_yield_nothing() {
    assert_eq!(pairs("movie_id\tgenre\n").1, SourceReport::default());
    assert_eq!(pairs("").1, SourceReport::default());
  }

  #[tokio::test]
  async fn unparseable_years_become_null() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("movies.tsv");
    std::fs::write(
      &path,
      "movie_id\ttitle\tyear\timdb_id\n\
       1\tThe Matrix\t1999\ttt0133093\n\
       2\tHeat\tunknown\ttt0113277\n\
       3\tStalker\t(1979)\ttt0079944\n\
       x\tBroken\t2000\ttt0000000\n",
    )
    .unwrap();

    let (rows, report) = load_movies(&path).await.unwrap();
    let years: Vec<_> = rows.iter().map(|m| (m.movie_id, m.year)).collect();
    assert_eq!(years, [(1, Some(1999)), (2, None), (3, None)]);
    assert_eq!(report, SourceReport { accepted: 3, skipped: 1 });
  }

  #[tokio::test]
  async fn ratings_need_integer_fields() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("ratings.tsv");
    std::fs::write(&path, "movie_id\trating\n1\t4\n1\t3.5\nx\t2\n2\t9\n").unwrap();

    let (rows, report) = load_ratings(&path).await.unwrap();
    assert_eq!(
      rows,
      [RatingRow { movie_id: 1, rating: 4 }, RatingRow { movie_id: 2, rating: 9 }]
    );
    assert_eq!(report, SourceReport { accepted: 2, skipped: 2 });
  }

  #[test]
  fn source_files_in_dir() {
    let files = SourceFiles::in_dir("assets/data");
    assert_eq!(files.movies, Path::new("assets/data/movies.tsv"));
    assert_eq!(files.genres, Path::new("assets/data/genres.tsv"));
    assert_eq!(files.ratings, Path::new("assets/data/ratings.tsv"));
  }

  #[test]
  fn report_display() {
    let report = LoadReport {
      movies:     SourceReport { accepted: 3, skipped: 1 },
      genre_tags: SourceReport { accepted: 5, skipped: 0 },
      ratings:    SourceReport { accepted: 2, skipped: 2 },
    };
    assert_eq!(
      report.to_string(),
      "movies: 3 accepted, 1 skipped; genre tags: 5 accepted, 0 skipped; ratings: 2 accepted, 2 skipped"
    );
  }
}
