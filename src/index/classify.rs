//! Entry classification: routable or not, with routes for the former.

use super::IndexError;
use super::entry::{IndexedEntry, NonRoutableEntry, RoutableEntry};
use super::flatten::FlatEntry;
use super::route::RouteBuilder;
use super::slug::ResolvedSlugs;
use crate::config::CollectionsConfig;
use crate::core::LocaleAuthority;

/// Turn id-race winners into indexed entries, in flattened order.
///
/// Losers of the id race are not visited at all. Routable winners get their
/// route built here, which fails the whole build on an unsupported locale.
pub fn classify(
    entries: &[FlatEntry],
    resolved: &ResolvedSlugs,
    collections: &CollectionsConfig,
    locales: &dyn LocaleAuthority,
) -> Result<Vec<IndexedEntry>, IndexError> {
    let routes = RouteBuilder::new(locales, &resolved.slugs);

    resolved
        .survivors
        .iter()
        .map(|&i| {
            let entry = &entries[i];
            if !collections.is_routable(entry.collection()) {
                return Ok(IndexedEntry::NonRoutable(NonRoutableEntry {
                    id: entry.id.clone(),
                    raw: entry.raw.clone(),
                }));
            }

            let route = routes.build(&entry.id)?;
            let locale = routes.locale_of(&entry.id)?;
            Ok(IndexedEntry::Routable(RoutableEntry {
                id: entry.id.clone(),
                raw: entry.raw.clone(),
                locale: locale.to_string(),
                route,
                slug: resolved.slug(&entry.id).unwrap_or_default().to_string(),
            }))
        })
        .collect()
}
