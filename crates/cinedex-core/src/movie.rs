//! Catalog entries and the rating types attached to them.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

/// Ratings accepted from users, inclusive on both ends.
pub const RATING_RANGE: RangeInclusive<i64> = 1..=5;

/// A catalog entry. Created by the bulk loader and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
  pub movie_id: i64,
  pub title:    String,
  /// `None` when the source row left the year empty.
  pub year:     Option<i32>,
  /// External (IMDb-style) identifier, e.g. `tt0133093`.
  pub imdb_id:  String,
}

/// Aggregate over all ratings recorded for one movie.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatingSummary {
  /// Arithmetic mean rounded to two decimal places; `None` without ratings.
  pub average: Option<f64>,
  pub count:   u64,
}

impl RatingSummary {
  pub fn is_empty(&self) -> bool { self.count == 0 }
}

// ─── Rating submission ───────────────────────────────────────────────────────

/// Why a submitted rating was not stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RatingRejection {
  OutOfRange { value: i64 },
}

impl RatingRejection {
  /// Returns the rejection for `value`, or `None` if it may be stored.
  pub fn for_value(value: i64) -> Option<Self> {
    if RATING_RANGE.contains(&value) {
      None
    } else {
      Some(Self::OutOfRange { value })
    }
  }
}

/// Result of submitting a rating.
///
/// Rejection is an ordinary outcome rather than an error: the store is left
/// untouched and the caller decides how to surface it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum RatingOutcome {
  Accepted { rating_id: i64 },
  Rejected { reason: RatingRejection },
}

impl RatingOutcome {
  pub fn is_accepted(&self) -> bool { matches!(self, Self::Accepted { .. }) }
}
