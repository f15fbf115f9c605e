//! Dual index assembly: `by_id` and `by_route`.

use std::collections::hash_map::Entry;

use super::conflict::BuildWarning;
use super::entry::IndexedEntry;
use super::site::SiteIndex;

/// Assembles a [`SiteIndex`] from classified entries.
///
/// Entries must arrive in flattened order. Both maps are first-writer-wins
/// and independent: an entry that loses its route keeps its id.
#[derive(Debug, Default)]
pub struct DualIndexBuilder {
    index: SiteIndex,
}

impl DualIndexBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from warnings already collected by earlier stages.
    pub fn with_warnings(warnings: Vec<BuildWarning>) -> Self {
        Self {
            index: SiteIndex {
                warnings,
                ..SiteIndex::default()
            },
        }
    }

    pub fn push(&mut self, entry: IndexedEntry) {
        let index = &mut self.index;

        if let Some(existing) = index.by_id.get(entry.id()) {
            index.warnings.push(BuildWarning::DuplicateId {
                id: entry.id().to_string(),
                kept: existing.collection().to_string(),
                dropped: entry.collection().to_string(),
            });
            return;
        }

        if let IndexedEntry::Routable(routable) = &entry {
            match index.by_route.entry(routable.route.clone()) {
                Entry::Occupied(kept) => {
                    let kept = kept.get();
                    index.warnings.push(BuildWarning::DuplicateRoute {
                        route: routable.route.clone(),
                        kept_id: kept.id.clone(),
                        kept: kept.raw.collection.clone(),
                        dropped_id: routable.id.clone(),
                        dropped: routable.raw.collection.clone(),
                    });
                }
                Entry::Vacant(slot) => {
                    slot.insert(routable.clone());
                }
            }
        }

        index.by_id.insert(entry.id().to_string(), entry);
    }

    pub fn finish(self) -> SiteIndex {
        self.index
    }
}

impl Extend<IndexedEntry> for DualIndexBuilder {
    fn extend<T: IntoIterator<Item = IndexedEntry>>(&mut self, iter: T) {
        for entry in iter {
            self.push(entry);
        }
    }
}
