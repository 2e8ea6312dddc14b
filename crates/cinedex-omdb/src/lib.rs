//! [`MetadataSource`] backed by the Open Movie Database (or any service that
//! answers `GET {base_url}?i=<imdb id>` with a JSON object).
//!
//! One request per lookup: no retries, no caching, a fixed request timeout.

pub mod error;

pub use error::{Error, Result};

use std::time::Duration;

use cinedex_core::{MetadataSource, MovieMetadata};
use reqwest::Client;
use serde::Deserialize;

pub const DEFAULT_BASE_URL: &str = "http://www.omdbapi.com/";

// ─── Configuration ────────────────────────────────────────────────────────────

/// Connection settings, usually the `[metadata]` table of the server config.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OmdbConfig {
  pub base_url:     String,
  /// Sent as `apikey` when present.
  pub api_key:      Option<String>,
  pub timeout_secs: u64,
}

impl Default for OmdbConfig {
  fn default() -> Self {
    Self {
      base_url:     DEFAULT_BASE_URL.to_string(),
      api_key:      None,
      timeout_secs: 10,
    }
  }
}

// ─── Client ───────────────────────────────────────────────────────────────────

/// HTTP client for the metadata service.
///
/// Cheap to clone — the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Clone)]
pub struct OmdbClient {
  http:   Client,
  config: OmdbConfig,
}

impl OmdbClient {
  pub fn new(config: OmdbConfig) -> Result<Self> {
    let http = Client::builder()
      .timeout(Duration::from_secs(config.timeout_secs))
      .build()?;
    Ok(Self { http, config })
  }

  /// `GET {base_url}?i=<imdb_id>[&apikey=<key>]`
  pub async fn lookup(&self, imdb_id: &str) -> Result<MovieMetadata> {
    let mut req = self.http.get(&self.config.base_url).query(&[("i", imdb_id)]);
    if let Some(key) = &self.config.api_key {
      req = req.query(&[("apikey", key)]);
    }

    let resp = req.send().await?;
    if !resp.status().is_success() {
      return Err(Error::Status(resp.status()));
    }
    Ok(resp.json().await?)
  }
}

impl MetadataSource for OmdbClient {
  async fn fetch(&self, imdb_id: &str) -> Option<MovieMetadata> {
    match self.lookup(imdb_id).await {
      Ok(metadata) => Some(metadata),
      Err(e) => {
        tracing::warn!(imdb_id, error = %e, "metadata lookup failed");
        None
      }
    }
  }
}
