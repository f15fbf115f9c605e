//! Raw content entries as supplied by a collection source.

use serde::{Deserialize, Serialize};

/// A JSON object map for storing arbitrary entry fields.
pub type JsonMap = serde_json::Map<String, serde_json::Value>;

/// Data key holding a localized override for the last route segment.
pub const PERMASLUG_KEY: &str = "permaslug";

/// A single entry of a content collection.
///
/// The payload in `data` is opaque to the index, only `permaslug` is read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentEntry {
    /// Content id (`<locale>/<segment>/...`).
    pub id: String,
    /// Name of the collection this entry came from.
    pub collection: String,
    /// Entry payload.
    #[serde(default)]
    pub data: JsonMap,
}

impl ContentEntry {
    pub fn new(id: impl Into<String>, collection: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            collection: collection.into(),
            data: JsonMap::new(),
        }
    }

    /// Set a data field.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    /// Set the `permaslug` data field.
    pub fn with_permaslug(self, permaslug: impl Into<String>) -> Self {
        self.with_field(PERMASLUG_KEY, permaslug.into())
    }

    /// Explicit slug override, if any.
    ///
    /// Non-string and blank values count as absent. Surrounding `/` are
    /// trimmed so a permaslug always stays a single route step.
    pub fn permaslug(&self) -> Option<&str> {
        self.data
            .get(PERMASLUG_KEY)
            .and_then(serde_json::Value::as_str)
            .map(|s| s.trim().trim_matches('/'))
            .filter(|s| !s.is_empty())
    }
}
