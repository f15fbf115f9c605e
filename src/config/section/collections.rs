//! `[collections]` configuration.
//!
//! ```toml
//! [collections]
//! declared = ["pages", "projects", "tags", "authors"]
//! routable = ["pages", "projects"]
//! ```

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

/// Declared content collections and the routable allow-list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectionsConfig {
    /// Every collection fetched from the source, in fetch order.
    pub declared: Vec<String>,
    /// Collections whose entries are published as addressable pages.
    pub routable: Vec<String>,
}

impl CollectionsConfig {
    pub const DECLARED: FieldPath = FieldPath::new("collections.declared");
    pub const ROUTABLE: FieldPath = FieldPath::new("collections.routable");

    pub fn new(
        declared: impl IntoIterator<Item = impl Into<String>>,
        routable: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            declared: declared.into_iter().map(Into::into).collect(),
            routable: routable.into_iter().map(Into::into).collect(),
        }
    }

    /// Check if entries of `collection` get a route.
    #[inline]
    pub fn is_routable(&self, collection: &str) -> bool {
        self.routable.iter().any(|c| c == collection)
    }

    /// Collections to fetch: `declared`, or `routable` when nothing is declared.
    ///
    /// A name listed twice is fetched once, at its first position.
    pub fn to_fetch(&self) -> Vec<String> {
        let names = if self.declared.is_empty() {
            &self.routable
        } else {
            &self.declared
        };

        let mut fetch: Vec<String> = Vec::with_capacity(names.len());
        for name in names {
            if !fetch.contains(name) {
                fetch.push(name.clone());
            }
        }
        fetch
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.routable.is_empty() {
            diag.warn(Self::ROUTABLE, "no routable collections, no routes will be built");
        }

        warn_repeated(&self.declared, Self::DECLARED, diag);
        warn_repeated(&self.routable, Self::ROUTABLE, diag);

        if self.declared.is_empty() {
            return;
        }

        for name in &self.routable {
            if !self.declared.contains(name) {
                diag.error_with_hint(
                    Self::ROUTABLE,
                    format!("routable collection `{name}` is not declared"),
                    format!("add \"{name}\" to `collections.declared`"),
                );
            }
        }
    }
}

fn warn_repeated(names: &[String], field: FieldPath, diag: &mut ConfigDiagnostics) {
    for (i, name) in names.iter().enumerate() {
        if names[..i].contains(name) {
            diag.warn_with_hint(
                field,
                format!("`{name}` is listed more than once"),
                "remove the repeated entry",
            );
        }
    }
}
