//! External movie metadata, looked up by IMDb identifier.

use std::future::Future;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The key-value object returned by a metadata service.
///
/// Kept as an untyped JSON object: the service's field set is not ours to
/// define, and callers only pick out a handful of keys.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MovieMetadata(pub Map<String, Value>);

impl MovieMetadata {
  pub fn get(&self, key: &str) -> Option<&Value> { self.0.get(key) }

  /// String value of `key`, if present and a string.
  pub fn field(&self, key: &str) -> Option<&str> {
    self.0.get(key).and_then(Value::as_str)
  }
}

impl From<Map<String, Value>> for MovieMetadata {
  fn from(map: Map<String, Value>) -> Self { Self(map) }
}

/// Capability to fetch metadata for an external movie identifier.
///
/// Implementations collapse every failure (transport, timeout, non-success
/// status, unparseable body) into `None`. They never retry.
pub trait MetadataSource: Send + Sync {
  fn fetch<'a>(
    &'a self,
    imdb_id: &'a str,
  ) -> impl Future<Output = Option<MovieMetadata>> + Send + 'a;
}
