//! Hierarchy flattening: merge every collection into one ancestors-first list.

use std::sync::Arc;

use crate::core::ContentEntry;
use crate::core::id::{normalize_id, segment_count};

/// An entry with its normalized id, as it moves through the pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct FlatEntry {
    /// Normalized id.
    pub id: String,
    /// Entry as supplied by the source.
    pub raw: Arc<ContentEntry>,
}

impl FlatEntry {
    pub fn new(raw: ContentEntry) -> Self {
        Self {
            id: normalize_id(&raw.id),
            raw: Arc::new(raw),
        }
    }

    #[inline]
    pub fn collection(&self) -> &str {
        &self.raw.collection
    }
}

/// Merge all collection lists into one sequence where ancestors precede
/// descendants.
///
/// Sorted by `(segment count, id)`. The sort is stable, so entries sharing an
/// id stay in collection order. Input lists are left untouched.
pub fn flatten(lists: &[Vec<ContentEntry>]) -> Vec<FlatEntry> {
    let mut flat: Vec<FlatEntry> = lists
        .iter()
        .flatten()
        .cloned()
        .map(FlatEntry::new)
        .collect();

    flat.sort_by_cached_key(|entry| (segment_count(&entry.id), entry.id.clone()));
    flat
}
