//! The built index and its queries.

use rustc_hash::FxHashMap;

use super::conflict::BuildWarning;
use super::entry::{IndexedEntry, RoutableEntry};
use crate::core::Route;
use crate::core::id::{normalize_id, split_locale};

/// Normalized id -> entry, every surviving entry.
pub type ById = FxHashMap<String, IndexedEntry>;

/// Route -> routable entry.
pub type ByRoute = FxHashMap<Route, RoutableEntry>;

/// The two lookup maps of a finished build.
///
/// Both maps are complete and consistent: a build either produces the whole
/// index or fails.
#[derive(Debug, Default, PartialEq)]
pub struct SiteIndex {
    pub(super) by_id: ById,
    pub(super) by_route: ByRoute,
    pub(super) warnings: Vec<BuildWarning>,
}

impl SiteIndex {
    #[inline]
    pub fn by_id(&self) -> &ById {
        &self.by_id
    }

    #[inline]
    pub fn by_route(&self) -> &ByRoute {
        &self.by_route
    }

    /// Collisions skipped during the build, in detection order.
    #[inline]
    pub fn warnings(&self) -> &[BuildWarning] {
        &self.warnings
    }

    /// Look up an entry by id (normalized before lookup).
    pub fn get(&self, id: &str) -> Option<&IndexedEntry> {
        self.by_id.get(normalize_id(id).as_str())
    }

    /// Look up a routable entry by route (normalized before lookup).
    pub fn get_by_route(&self, route: &str) -> Option<&RoutableEntry> {
        self.by_route.get(Route::from_raw(route).as_str())
    }

    /// Number of indexed entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    #[inline]
    pub fn route_count(&self) -> usize {
        self.by_route.len()
    }

    /// All routes, sorted.
    pub fn routes(&self) -> Vec<&Route> {
        let mut routes: Vec<_> = self.by_route.keys().collect();
        routes.sort();
        routes
    }

    /// Entries of one collection, sorted by id.
    pub fn entries_in(&self, collection: &str) -> Vec<&IndexedEntry> {
        let mut entries: Vec<_> = self
            .by_id
            .values()
            .filter(|e| e.collection() == collection)
            .collect();
        entries.sort_by(|a, b| a.id().cmp(b.id()));
        entries
    }

    /// Published entries of one locale, sorted by route.
    pub fn entries_for_locale(&self, locale: &str) -> Vec<&RoutableEntry> {
        let mut entries: Vec<_> = self
            .by_route
            .values()
            .filter(|e| e.locale == locale)
            .collect();
        entries.sort_by(|a, b| a.route.cmp(&b.route));
        entries
    }

    /// Published versions of the same content in other locales.
    ///
    /// Two entries are translations of each other when their ids match after
    /// the locale token (`en/projects/widgets` and `fr/projects/widgets`).
    /// Sorted by locale.
    pub fn translations(&self, id: &str) -> Vec<&RoutableEntry> {
        let id = normalize_id(id);
        let (locale, bare) = split_locale(&id);
        if bare.is_empty() {
            return Vec::new();
        }

        let mut entries: Vec<_> = self
            .by_route
            .values()
            .filter(|e| e.locale != locale && split_locale(&e.id).1 == bare)
            .collect();
        entries.sort_by(|a, b| a.locale.cmp(&b.locale));
        entries
    }
}
