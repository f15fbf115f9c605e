//! Content index - ids and routes for every entry of the site.
//!
//! # Pipeline
//!
//! ```text
//! fetch        collections in parallel           (source)
//!   -> flatten   one list, ancestors first          (flatten)
//!   -> slugs     id race + slug per routable id     (slug)
//!   -> classify  routable/non-routable, routes      (classify, route)
//!   -> index     by_id + by_route, first wins       (build)
//! ```
//!
//! # Module Structure
//!
//! - [`flatten`]: ancestors-first ordering
//! - [`slug`]: id race and slug resolution
//! - [`route`]: localized route building
//! - [`classify`]: entry shapes
//! - [`build`]: dual index assembly
//! - [`conflict`]: collision warnings
//! - [`cache`]: memoized index, process-wide handle
//!
//! # Usage
//!
//! ```ignore
//! let cache = IndexCache::new(IndexConfig::from_path(path)?, source);
//! let index = cache.get_index()?;
//! let page = index.get_by_route("/fr/projets");
//! ```

pub mod build;
pub mod cache;
pub mod classify;
pub mod conflict;
mod entry;
mod error;
pub mod flatten;
pub mod route;
mod site;
pub mod slug;

pub use build::DualIndexBuilder;
pub use cache::{IndexCache, IndexResult};
pub use conflict::{BuildWarning, print_warnings};
pub use entry::{IndexedEntry, NonRoutableEntry, RoutableEntry};
pub use error::IndexError;
pub use site::{ById, ByRoute, SiteIndex};
pub use slug::{SlugInfo, SlugMap};

use crate::config::{CollectionsConfig, IndexConfig};
use crate::core::{ContentEntry, LocaleAuthority};
use crate::source::{CollectionSource, fetch_collections};
use crate::{debug, log};

/// Fetch every configured collection and build the index.
pub fn build_site_index(
    config: &IndexConfig,
    source: &dyn CollectionSource,
) -> Result<SiteIndex, IndexError> {
    let lists = fetch_collections(source, &config.collections.to_fetch())?;
    index_entries(&lists, &config.collections, &config.i18n)
}

/// Build the index from already fetched collection lists.
///
/// Runs the whole pipeline; collisions are logged and kept on the index,
/// fatal errors are logged and returned.
pub fn index_entries(
    lists: &[Vec<ContentEntry>],
    collections: &CollectionsConfig,
    locales: &dyn LocaleAuthority,
) -> Result<SiteIndex, IndexError> {
    let result = run_pipeline(lists, collections, locales);

    match &result {
        Ok(index) => {
            print_warnings(index.warnings());
            debug!("index"; "indexed {} entries, {} routes", index.len(), index.route_count());
        }
        Err(err) => log!("error"; "{}", err),
    }
    result
}

fn run_pipeline(
    lists: &[Vec<ContentEntry>],
    collections: &CollectionsConfig,
    locales: &dyn LocaleAuthority,
) -> Result<SiteIndex, IndexError> {
    let flat = flatten::flatten(lists);
    let resolved = slug::resolve_slugs(&flat, collections)?;
    let classified = classify::classify(&flat, &resolved, collections, locales)?;

    let mut builder = DualIndexBuilder::with_warnings(resolved.warnings);
    builder.extend(classified);
    Ok(builder.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::I18nConfig;
    use crate::source::MemorySource;

    fn config() -> IndexConfig {
        IndexConfig::new(
            I18nConfig::new("en", ["en", "fr", "de"]),
            CollectionsConfig::new(
                ["pages", "projects", "tags", "authors"],
                ["pages", "projects"],
            ),
        )
    }

    fn page(id: &str) -> ContentEntry {
        ContentEntry::new(id, "")
    }

    fn build(source: &MemorySource) -> Result<SiteIndex, IndexError> {
        build_site_index(&config(), source)
    }

    fn site() -> MemorySource {
        MemorySource::new()
            .with_collection(
                "pages",
                [
                    page("en/home"),
                    page("fr/home"),
                    page("en/guides"),
                    page("en/guides/foo"),
                    page("fr/guides/foo"),
                ],
            )
            .with_collection(
                "projects",
                [
                    page("fr/projects/widgets").with_permaslug("widgets-fr"),
                    page("fr/projects").with_permaslug("projets"),
                    page("en/projects"),
                    page("en/projects/widgets"),
                ],
            )
            .with_collection("tags", [page("en/rust"), page("fr/rust")])
            .with_collection("authors", [page("en/ada")])
    }

    #[test]
    fn test_default_locale_omitted() {
        let index = build(&site()).unwrap();
        assert_eq!(index.get_by_route("/guides/foo").unwrap().id, "en/guides/foo");
    }

    #[test]
    fn test_other_locale_prefixed() {
        let index = build(&site()).unwrap();
        assert_eq!(index.get_by_route("/fr/guides/foo").unwrap().id, "fr/guides/foo");
    }

    #[test]
    fn test_home_is_root() {
        let index = build(&site()).unwrap();
        assert_eq!(index.get_by_route("/").unwrap().id, "en/home");
        assert_eq!(index.get_by_route("/fr").unwrap().id, "fr/home");
        let home = index.get("en/home").unwrap().as_routable().unwrap();
        assert_eq!(home.slug, "");
    }

    #[test]
    fn test_permaslug_propagation() {
        let index = build(&site()).unwrap();
        assert!(index.by_route().contains_key("/fr/projets/widgets-fr"));
        assert!(!index.by_route().contains_key("/fr/projects/widgets"));
        assert_eq!(
            index.get("fr/projects/widgets").unwrap().route().unwrap(),
            "/fr/projets/widgets-fr"
        );
    }

    #[test]
    fn test_non_routable_only_by_id() {
        let index = build(&site()).unwrap();
        let rust = index.get("en/rust").unwrap();
        assert!(!rust.is_routable());
        assert_eq!(rust.collection(), "tags");
        assert!(index.get_by_route("/rust").is_none());
        assert_eq!(index.len(), 12);
        assert_eq!(index.route_count(), 9);
    }

    #[test]
    fn test_id_collision_keeps_earlier() {
        let source = site().with_collection("pages", [page("en/projects/")]);
        let index = build(&source).unwrap();

        let warnings: Vec<_> = index.warnings().iter().filter(|w| w.is_duplicate_id()).collect();
        assert_eq!(warnings.len(), 1);
        // `pages` is declared before `projects`, so it is flattened first.
        assert_eq!(index.get("en/projects").unwrap().collection(), "pages");
        assert_eq!(
            *warnings[0],
            BuildWarning::DuplicateId {
                id: "en/projects".into(),
                kept: "pages".into(),
                dropped: "projects".into(),
            }
        );
        // The loser never competes for its route.
        assert!(index.warnings().iter().all(|w| !w.is_duplicate_route()));
    }

    #[test]
    fn test_route_collision_keeps_id() {
        // `en/home/info` has permaslug `about` under a `home` parent, so it
        // lands on `/about` next to `en/about`.
        let source = MemorySource::new().with_collection(
            "pages",
            [
                page("en/about"),
                page("en/home"),
                page("en/home/info").with_permaslug("about"),
            ],
        );
        let index = build(&source).unwrap();

        assert_eq!(index.get_by_route("/about").unwrap().id, "en/about");
        assert!(index.get("en/home/info").is_some());
        assert_eq!(index.warnings().len(), 1);
        assert!(index.warnings()[0].is_duplicate_route());
        assert_eq!(index.warnings()[0].dropped_id(), "en/home/info");
    }

    #[test]
    fn test_repeated_collection_is_not_a_collision() {
        let mut config = config();
        config.collections.declared = vec!["pages".into(), "pages".into()];
        let source =
            MemorySource::new().with_collection("pages", [page("en/about"), page("en/team")]);

        let index = build_site_index(&config, &source).unwrap();
        assert!(index.warnings().is_empty());
        assert_eq!(index.len(), 2);
        assert_eq!(index.route_count(), 2);
    }

    #[test]
    fn test_unsupported_locale_fails_build() {
        let source = site().with_collection("pages", [page("xx/guides/foo")]);
        let err = build(&source).unwrap_err();
        assert!(err.to_string().contains("xx"));
        assert!(matches!(err, IndexError::UnsupportedLocale { ref id, .. } if id == "xx/guides/foo"));
    }

    #[test]
    fn test_unresolvable_slug_fails_build() {
        let source = site().with_collection("pages", [page("de")]);
        let err = build(&source).unwrap_err();
        assert_eq!(err.entry_id(), Some("de"));
    }

    #[test]
    fn test_idempotent() {
        let source = site();
        assert_eq!(build(&source).unwrap(), build(&source).unwrap());
    }

    #[test]
    fn test_fetch_order_does_not_matter() {
        let mut reversed = config();
        reversed.collections.declared.reverse();

        let forward = build(&site()).unwrap();
        let backward = build_site_index(&reversed, &site()).unwrap();
        assert_eq!(forward.routes(), backward.routes());
    }

    #[test]
    fn test_translations() {
        let index = build(&site()).unwrap();
        let translations = index.translations("en/guides/foo");
        assert_eq!(translations.len(), 1);
        assert_eq!(translations[0].route, "/fr/guides/foo");

        let widgets: Vec<_> = index
            .translations("fr/projects/widgets")
            .into_iter()
            .map(|e| e.route.as_str())
            .collect();
        assert_eq!(widgets, ["/projects/widgets"]);
        assert!(index.translations("en/rust").is_empty());
    }

    #[test]
    fn test_locale_and_collection_queries() {
        let index = build(&site()).unwrap();

        let fr: Vec<_> = index
            .entries_for_locale("fr")
            .into_iter()
            .map(|e| e.route.as_str())
            .collect();
        assert_eq!(fr, ["/fr", "/fr/guides/foo", "/fr/projets", "/fr/projets/widgets-fr"]);

        let tags: Vec<_> = index.entries_in("tags").into_iter().map(|e| e.id()).collect();
        assert_eq!(tags, ["en/rust", "fr/rust"]);
    }

    #[test]
    fn test_lookup_normalizes_arguments() {
        let index = build(&site()).unwrap();
        assert!(index.get("/EN/guides/foo/").is_some());
        assert!(index.get_by_route("fr/projets/").is_some());
    }
}
