//! Route building for routable ids.
//!
//! ```text
//! id:        fr/projects/widgets
//! prefixes:  fr/projects -> fr/projects/widgets
//! slugs:     projets        widgets-fr
//! route:     /fr/projets/widgets-fr
//! ```
//!
//! Ancestor segments come from the [`SlugMap`], so a permaslug on a parent
//! carries into every descendant route. The builder never resolves an
//! ancestor slug itself; the slug pass has already run over the whole
//! flattened list by the time any route is built.

use smallvec::SmallVec;

use super::IndexError;
use super::slug::SlugMap;
use crate::core::id::{last_segment, split_locale};
use crate::core::{LocaleAuthority, Route};
use crate::debug;

/// Cumulative prefixes of an id after its locale token, shallowest first.
///
/// `fr/a/b/c` -> `fr/a`, `fr/a/b`, `fr/a/b/c`; `fr` -> nothing.
pub fn cumulative_prefixes(id: &str) -> impl Iterator<Item = &str> {
    id.match_indices('/')
        .map(move |(i, _)| &id[..i])
        .chain(std::iter::once(id))
        .skip(1)
}

/// Builds localized routes from resolved slugs.
pub struct RouteBuilder<'a> {
    locales: &'a dyn LocaleAuthority,
    slugs: &'a SlugMap,
}

impl<'a> RouteBuilder<'a> {
    pub fn new(locales: &'a dyn LocaleAuthority, slugs: &'a SlugMap) -> Self {
        Self { locales, slugs }
    }

    /// Check the locale token of an id and return it.
    pub fn locale_of<'id>(&self, id: &'id str) -> Result<&'id str, IndexError> {
        let (locale, _) = split_locale(id);
        if self.locales.is_supported_locale(locale) {
            Ok(locale)
        } else {
            Err(IndexError::UnsupportedLocale {
                locale: locale.to_string(),
                id: id.to_string(),
            })
        }
    }

    /// Build the public route of a routable id.
    ///
    /// The default locale gets no prefix segment, every other locale keeps
    /// its token as the first segment.
    pub fn build(&self, id: &str) -> Result<Route, IndexError> {
        let locale = self.locale_of(id)?;

        let mut segments: SmallVec<[&str; 8]> = SmallVec::new();
        if !self.locales.is_default_locale(locale) {
            segments.push(locale);
        }
        for prefix in cumulative_prefixes(id) {
            let step = match self.slugs.get(prefix) {
                Some(info) => info.slug.as_str(),
                None => last_segment(prefix),
            };
            segments.push(step);
        }

        let route = Route::from_segments(segments);
        debug!("route"; "{} -> {}", id, route);
        Ok(route)
    }
}
