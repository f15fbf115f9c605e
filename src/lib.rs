//! tola-index - content ids and localized routes for multilingual static sites.
//!
//! Builds an in-memory, rebuildable projection of typed content collections:
//! every entry by canonical id, and every entry of a routable collection by
//! its public route. Parent permaslugs carry into child routes, locale
//! prefixes are validated, and id/route collisions resolve first-writer-wins.
//!
//! ```ignore
//! use tola_index::{IndexCache, IndexConfig, MemorySource};
//!
//! let cache = IndexCache::new(IndexConfig::from_path("index.toml".as_ref())?, source);
//! let index = cache.get_index()?;
//! for route in index.routes() { /* render */ }
//! cache.invalidate();
//! ```

pub mod config;
pub mod core;
pub mod index;
pub mod logger;
pub mod source;

pub use crate::config::{CollectionsConfig, I18nConfig, IndexConfig};
pub use crate::core::{ContentEntry, LocaleAuthority, Route};
pub use crate::index::{
    BuildWarning, IndexCache, IndexError, IndexResult, IndexedEntry, NonRoutableEntry,
    RoutableEntry, SiteIndex,
};
pub use crate::source::{CollectionSource, MemorySource};
