//! Indexed entry shapes.

use std::sync::Arc;

use crate::core::{ContentEntry, Route};

/// An entry of a routable collection, with its resolved route.
#[derive(Debug, Clone, PartialEq)]
pub struct RoutableEntry {
    /// Normalized id.
    pub id: String,
    pub raw: Arc<ContentEntry>,
    /// Locale token of the id.
    pub locale: String,
    pub route: Route,
    /// Resolved last route step (empty for `home`).
    pub slug: String,
}

/// An entry of a collection that is not published as a page.
#[derive(Debug, Clone, PartialEq)]
pub struct NonRoutableEntry {
    /// Normalized id.
    pub id: String,
    pub raw: Arc<ContentEntry>,
}

/// An entry of the id index.
///
/// Which shape applies is decided once, by collection membership in the
/// routable allow-list.
#[derive(Debug, Clone, PartialEq)]
pub enum IndexedEntry {
    Routable(RoutableEntry),
    NonRoutable(NonRoutableEntry),
}

impl IndexedEntry {
    #[inline]
    pub fn id(&self) -> &str {
        match self {
            Self::Routable(e) => &e.id,
            Self::NonRoutable(e) => &e.id,
        }
    }

    #[inline]
    pub fn raw(&self) -> &ContentEntry {
        match self {
            Self::Routable(e) => &e.raw,
            Self::NonRoutable(e) => &e.raw,
        }
    }

    #[inline]
    pub fn collection(&self) -> &str {
        &self.raw().collection
    }

    pub fn as_routable(&self) -> Option<&RoutableEntry> {
        match self {
            Self::Routable(e) => Some(e),
            Self::NonRoutable(_) => None,
        }
    }

    /// Route of a routable entry.
    pub fn route(&self) -> Option<&Route> {
        self.as_routable().map(|e| &e.route)
    }

    #[inline]
    pub fn is_routable(&self) -> bool {
        matches!(self, Self::Routable(_))
    }
}
