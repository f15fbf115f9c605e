//! Route type for type-safe public URL paths.
//!
//! - Internal representation: always decoded (human-readable)
//! - Browser boundary: encode on output via [`Route::to_encoded`]

use std::borrow::Borrow;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Decoded public route of a routable entry.
///
/// Invariants:
/// - Always starts with `/`
/// - Never ends with `/` unless it is the root route `/`
/// - Never contains empty segments (`//`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Route(Arc<str>);

impl Route {
    /// The site root route `/`.
    pub fn root() -> Self {
        Self(Arc::from("/"))
    }

    /// Normalize an arbitrary route string.
    ///
    /// Adds the leading slash, removes the trailing slash and collapses
    /// empty segments: `fr//projets/` -> `/fr/projets`.
    pub fn from_raw(raw: &str) -> Self {
        Self::from_segments(raw.trim().split('/'))
    }

    /// Join resolved segments into a route, skipping empty ones.
    ///
    /// An empty segment is what a `home` slug resolves to, so `["", "child"]`
    /// yields `/child` and `[""]` yields `/`.
    pub fn from_segments<'a>(segments: impl IntoIterator<Item = &'a str>) -> Self {
        let mut route = String::from("/");
        for segment in segments.into_iter().filter(|s| !s.is_empty()) {
            if route.len() > 1 {
                route.push('/');
            }
            route.push_str(segment);
        }
        Self(Arc::from(route))
    }

    /// Get the decoded route as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check if this is the site root.
    #[inline]
    pub fn is_root(&self) -> bool {
        self.0.as_ref() == "/"
    }

    /// Iterate over the non-empty segments of the route.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('/').filter(|s| !s.is_empty())
    }

    /// Get parent route.
    ///
    /// `/fr/projets` -> `/fr`, `/fr` -> `/`, `/` -> `None`
    pub fn parent(&self) -> Option<Self> {
        if self.is_root() {
            return None;
        }
        match self.0.rfind('/') {
            Some(0) | None => Some(Self::root()),
            Some(idx) => Some(Self(Arc::from(&self.0[..idx]))),
        }
    }

    /// Encode for browser (percent-encode non-ASCII and special characters).
    pub fn to_encoded(&self) -> String {
        use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
        self.0
            .split('/')
            .map(|segment| utf8_percent_encode(segment, NON_ALPHANUMERIC).to_string())
            .collect::<Vec<_>>()
            .join("/")
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Default for Route {
    fn default() -> Self {
        Self::root()
    }
}

impl AsRef<str> for Route {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Route {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Route {
    fn from(s: &str) -> Self {
        Self::from_raw(s)
    }
}

impl PartialEq<str> for Route {
    fn eq(&self, other: &str) -> bool {
        self.0.as_ref() == other
    }
}

impl PartialEq<&str> for Route {
    fn eq(&self, other: &&str) -> bool {
        self.0.as_ref() == *other
    }
}

impl Serialize for Route {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Route {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from_raw(&s))
    }
}
