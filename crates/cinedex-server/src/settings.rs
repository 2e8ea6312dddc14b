//! Server configuration: an optional TOML file layered under `CINEDEX_*`
//! environment variables.

use std::path::{Path, PathBuf};

use cinedex_omdb::OmdbConfig;
use serde::Deserialize;

/// Runtime server configuration, deserialised from `config.toml`.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
  pub host:                 String,
  pub port:                 u16,
  /// SQLite file; rebuilt from `data_dir` on every start.
  pub store_path:           PathBuf,
  /// Directory holding `movies.tsv`, `genres.tsv` and `ratings.tsv`.
  pub data_dir:             PathBuf,
  pub enforce_foreign_keys: bool,
  pub metadata:             OmdbConfig,
}

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      host:                 "127.0.0.1".to_string(),
      port:                 8880,
      store_path:           PathBuf::from("assets/data/movielens.db"),
      data_dir:             PathBuf::from("assets/data"),
      enforce_foreign_keys: true,
      metadata:             OmdbConfig::default(),
    }
  }
}

impl ServerConfig {
  /// Read `path` (if it exists) and overlay `CINEDEX_*` variables, e.g.
  /// `CINEDEX_PORT=9000` or `CINEDEX_METADATA__API_KEY=...`.
  pub fn load(path: &Path) -> Result<Self, config::ConfigError> {
    config::Config::builder()
      .add_source(config::File::from(path).required(false))
      .add_source(
        config::Environment::with_prefix("CINEDEX")
          .prefix_separator("_")
          .separator("__")
          .try_parsing(true),
      )
      .build()?
      .try_deserialize()
  }

  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }
}

/// Expand a leading `~` to the user's home directory.
pub fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}

#[cfg(test)]
mod tests {
  use config::{Config, File, FileFormat};

  use super::*;

  fn from_toml(toml: &str) -> ServerConfig {
    Config::builder()
      .add_source(File::from_str(toml, FileFormat::Toml))
      .build()
      .unwrap()
      .try_deserialize()
      .unwrap()
  }

  #[test]
  fn empty_file_uses_defaults() {
    let cfg = from_toml("");
    assert_eq!(cfg.address(), "127.0.0.1:8880");
    assert_eq!(cfg.data_dir, Path::new("assets/data"));
    assert!(cfg.enforce_foreign_keys);
    assert_eq!(cfg.metadata.timeout_secs, 10);
  }

  #[test]
  fn nested_metadata_table_is_read() {
    let cfg = from_toml(
      r#"
        port = 9000
        enforce_foreign_keys = false

        [metadata]
        base_url = "http://localhost:4000/"
        api_key  = "abc"
      "#,
    );
    assert_eq!(cfg.port, 9000);
    assert!(!cfg.enforce_foreign_keys);
    assert_eq!(cfg.metadata.base_url, "http://localhost:4000/");
    assert_eq!(cfg.metadata.api_key.as_deref(), Some("abc"));
    assert_eq!(cfg.metadata.timeout_secs, 10);
  }

  #[test]
  fn missing_file_is_not_an_error() {
    let cfg = ServerConfig::load(Path::new("/nonexistent/cinedex.toml")).unwrap();
    assert_eq!(cfg.store_path, Path::new("assets/data/movielens.db"));
  }

  #[test]
  fn tilde_is_expanded() {
    let Ok(home) = std::env::var("HOME") else { return };
    assert_eq!(
      expand_tilde(Path::new("~/movies.db")),
      PathBuf::from(home).join("movies.db")
    );
    assert_eq!(expand_tilde(Path::new("/abs/movies.db")), Path::new("/abs/movies.db"));
  }
}
