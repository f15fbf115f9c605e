//! Slug resolution and the id race.
//!
//! Walks the flattened entries once. The first entry to claim an id wins it;
//! every later claimant is reported and excluded from the rest of the
//! pipeline. Winners from routable collections get their slug resolved into
//! a [`SlugMap`] that the route builder reads ancestor segments from.

use rustc_hash::FxHashMap;

use super::IndexError;
use super::conflict::BuildWarning;
use super::flatten::FlatEntry;
use crate::config::CollectionsConfig;
use crate::core::id::{last_segment, split_locale};
use crate::debug;

/// Slug that designates the root of its parent (`en/home` -> `/`).
pub const HOME_SLUG: &str = "home";

/// Resolved slug of a routable entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlugInfo {
    pub collection: String,
    pub slug: String,
}

/// Normalized id -> resolved slug, routable id-race winners only.
pub type SlugMap = FxHashMap<String, SlugInfo>;

/// Outcome of the slug pass.
#[derive(Debug, Default)]
pub struct ResolvedSlugs {
    pub slugs: SlugMap,
    /// Indices (into the flattened list) of entries that won the id race.
    pub survivors: Vec<usize>,
    pub warnings: Vec<BuildWarning>,
}

impl ResolvedSlugs {
    /// Resolved slug for an id, if it is a routable winner.
    #[inline]
    pub fn slug(&self, id: &str) -> Option<&str> {
        self.slugs.get(id).map(|info| info.slug.as_str())
    }
}

/// Resolve the slug of a single routable entry.
///
/// Prefers the entry's permaslug, then the last segment of the id after the
/// locale token. `home` resolves to the empty slug.
pub fn resolve_slug(entry: &FlatEntry) -> Result<String, IndexError> {
    let slug = match entry.raw.permaslug() {
        Some(permaslug) => permaslug,
        None => {
            let (_, bare) = split_locale(&entry.id);
            if bare.is_empty() {
                return Err(IndexError::SlugResolution {
                    id: entry.id.clone(),
                });
            }
            last_segment(bare)
        }
    };

    Ok(if slug == HOME_SLUG {
        String::new()
    } else {
        slug.to_string()
    })
}

/// Run the id race and resolve slugs for routable winners.
///
/// `entries` must be in flattened (ancestors-first) order. Ids are claimed
/// across all collections, routable or not, so a losing entry produces exactly
/// one warning and never reaches the route stage.
pub fn resolve_slugs(
    entries: &[FlatEntry],
    collections: &CollectionsConfig,
) -> Result<ResolvedSlugs, IndexError> {
    let mut resolved = ResolvedSlugs::default();
    let mut claimed: FxHashMap<&str, &str> = FxHashMap::default();

    for (i, entry) in entries.iter().enumerate() {
        if let Some(&kept) = claimed.get(entry.id.as_str()) {
            resolved.warnings.push(BuildWarning::DuplicateId {
                id: entry.id.clone(),
                kept: kept.to_string(),
                dropped: entry.collection().to_string(),
            });
            continue;
        }
        claimed.insert(&entry.id, entry.collection());
        resolved.survivors.push(i);

        if !collections.is_routable(entry.collection()) {
            continue;
        }

        let slug = resolve_slug(entry)?;
        debug!("slug"; "{} -> {:?}", entry.id, slug);
        resolved.slugs.insert(
            entry.id.clone(),
            SlugInfo {
                collection: entry.collection().to_string(),
                slug,
            },
        );
    }

    Ok(resolved)
}
