//! Collection sources.
//!
//! Loading and parsing content files is not done here: a source hands over
//! already-parsed [`ContentEntry`] lists, one call per declared collection.
//! Collections are independent, so [`fetch_collections`] asks for them in
//! parallel; the flattener re-sorts globally so fetch order never leaks into
//! the index.

use anyhow::Result;
use rayon::prelude::*;
use rustc_hash::FxHashMap;

use crate::core::ContentEntry;
use crate::index::IndexError;

/// Supplies the raw entries of a collection.
///
/// May be called concurrently for different collections.
pub trait CollectionSource: Send + Sync {
    fn fetch_entries(&self, collection: &str) -> Result<Vec<ContentEntry>>;
}

impl<F> CollectionSource for F
where
    F: Fn(&str) -> Result<Vec<ContentEntry>> + Send + Sync,
{
    fn fetch_entries(&self, collection: &str) -> Result<Vec<ContentEntry>> {
        self(collection)
    }
}

/// Fetch every collection in parallel.
///
/// The returned lists keep the order of `collections`. Entries with an empty
/// `collection` field are stamped with the collection they were fetched for.
pub fn fetch_collections(
    source: &dyn CollectionSource,
    collections: &[String],
) -> Result<Vec<Vec<ContentEntry>>, IndexError> {
    collections
        .par_iter()
        .map(|name| {
            let mut entries = source
                .fetch_entries(name)
                .map_err(|err| IndexError::source_failed(name, err))?;
            for entry in entries.iter_mut().filter(|e| e.collection.is_empty()) {
                entry.collection.clone_from(name);
            }
            Ok(entries)
        })
        .collect()
}

/// In-memory collection source.
///
/// Unknown collections yield an empty list.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    collections: FxHashMap<String, Vec<ContentEntry>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry to the collection named by `entry.collection`.
    pub fn insert(&mut self, entry: ContentEntry) {
        self.collections
            .entry(entry.collection.clone())
            .or_default()
            .push(entry);
    }

    /// Add a whole collection, stamping each entry with its name.
    pub fn with_collection(
        mut self,
        name: impl Into<String>,
        entries: impl IntoIterator<Item = ContentEntry>,
    ) -> Self {
        let name = name.into();
        let list = self.collections.entry(name.clone()).or_default();
        list.extend(entries.into_iter().map(|mut entry| {
            entry.collection.clone_from(&name);
            entry
        }));
        self
    }

    /// Total number of entries across collections.
    pub fn len(&self) -> usize {
        self.collections.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl CollectionSource for MemorySource {
    fn fetch_entries(&self, collection: &str) -> Result<Vec<ContentEntry>> {
        Ok(self.collections.get(collection).cloned().unwrap_or_default())
    }
}
