//! Duplicate id and route detection reports.
//!
//! Collisions never abort a build: the first entry (in flattened order) keeps
//! the key and every later claimant is skipped with one [`BuildWarning`].

use std::fmt;

use crate::core::Route;
use crate::log;

/// A non-fatal collision found while building the index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildWarning {
    /// Two entries normalize to the same id.
    DuplicateId {
        id: String,
        /// Collection of the entry that kept the id.
        kept: String,
        /// Collection of the skipped entry.
        dropped: String,
    },
    /// Two routable entries resolve to the same route.
    DuplicateRoute {
        route: Route,
        kept_id: String,
        kept: String,
        dropped_id: String,
        dropped: String,
    },
}

impl BuildWarning {
    /// Id of the entry that was skipped.
    pub fn dropped_id(&self) -> &str {
        match self {
            Self::DuplicateId { id, .. } => id,
            Self::DuplicateRoute { dropped_id, .. } => dropped_id,
        }
    }

    #[inline]
    pub fn is_duplicate_id(&self) -> bool {
        matches!(self, Self::DuplicateId { .. })
    }

    #[inline]
    pub fn is_duplicate_route(&self) -> bool {
        matches!(self, Self::DuplicateRoute { .. })
    }
}

impl fmt::Display for BuildWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateId { id, kept, dropped } => write!(
                f,
                "duplicate id `{id}`: kept entry from `{kept}`, skipped entry from `{dropped}`"
            ),
            Self::DuplicateRoute {
                route,
                kept_id,
                kept,
                dropped_id,
                dropped,
            } => write!(
                f,
                "duplicate route {route}: kept `{kept_id}` ({kept}), skipped `{dropped_id}` ({dropped})"
            ),
        }
    }
}

#[inline]
fn plural_s(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

/// Print warnings using the standard log format.
///
/// Output format:
/// ```text
/// [warning] 2 duplicates skipped (1 id, 1 route)
///   - duplicate id `en/projects`: kept entry from `pages`, skipped entry from `projects`
///   - duplicate route /about: kept `en/about` (pages), skipped `en/team/about` (pages)
/// ```
pub fn print_warnings(warnings: &[BuildWarning]) {
    if warnings.is_empty() {
        return;
    }

    let ids = warnings.iter().filter(|w| w.is_duplicate_id()).count();
    let routes = warnings.len() - ids;
    log!("warning"; "{} duplicate{} skipped ({} id{}, {} route{})",
        warnings.len(), plural_s(warnings.len()),
        ids, plural_s(ids),
        routes, plural_s(routes));

    for warning in warnings {
        eprintln!("  - {warning}");
    }
}
