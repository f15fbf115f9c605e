//! Content id helpers.
//!
//! A content id has the shape `<locale>/<segment>/.../<segment>`. Ids are
//! normalized once when an entry enters the pipeline, after that every
//! helper here assumes the normalized form (no empty segments, lowercase
//! locale token).

use smallvec::SmallVec;

/// Trailing segment dropped during normalization (`en/projects/index` -> `en/projects`).
const INDEX_SEGMENT: &str = "index";

/// Normalize a raw content id.
///
/// - trims whitespace and surrounding `/`
/// - collapses repeated `/`
/// - drops a trailing `index` segment unless it is the only segment
///   after the locale
/// - lowercases the locale token
pub fn normalize_id(raw: &str) -> String {
    let mut segments: SmallVec<[&str; 8]> =
        raw.trim().split('/').filter(|s| !s.is_empty()).collect();

    if segments.len() > 2 && segments.last() == Some(&INDEX_SEGMENT) {
        segments.pop();
    }

    let mut id = String::with_capacity(raw.len());
    for (i, segment) in segments.iter().enumerate() {
        if i == 0 {
            id.push_str(&segment.to_ascii_lowercase());
        } else {
            id.push('/');
            id.push_str(segment);
        }
    }
    id
}

/// Number of `/`-delimited segments in an id.
#[inline]
pub fn segment_count(id: &str) -> usize {
    id.split('/').filter(|s| !s.is_empty()).count()
}

/// Split an id into its locale token and the bare id after it.
///
/// `fr/projects/widgets` -> (`fr`, `projects/widgets`), `fr` -> (`fr`, ``)
#[inline]
pub fn split_locale(id: &str) -> (&str, &str) {
    id.split_once('/').unwrap_or((id, ""))
}

/// Last `/`-delimited segment of a path (`a/b/c` -> `c`).
#[inline]
pub fn last_segment(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// Check if `ancestor` is a strict path prefix of `id`.
///
/// `en/a` is an ancestor of `en/a/b` but not of `en/ab`.
pub fn is_ancestor(ancestor: &str, id: &str) -> bool {
    id.len() > ancestor.len()
        && id.starts_with(ancestor)
        && id.as_bytes()[ancestor.len()] == b'/'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_trims_and_collapses() {
        assert_eq!(normalize_id("/en//guides/foo/"), "en/guides/foo");
        assert_eq!(normalize_id("  en/guides  "), "en/guides");
        assert_eq!(normalize_id(""), "");
        assert_eq!(normalize_id("///"), "");
    }

    #[test]
    fn test_normalize_lowercases_locale_only() {
        assert_eq!(normalize_id("FR/Projects/Widgets"), "fr/Projects/Widgets");
    }

    #[test]
    fn test_normalize_index_segment() {
        assert_eq!(normalize_id("en/projects/index"), "en/projects");
        // `en/index` keeps its only segment
        assert_eq!(normalize_id("en/index"), "en/index");
    }

    #[test]
    fn test_segment_count() {
        assert_eq!(segment_count("en"), 1);
        assert_eq!(segment_count("en/a/b"), 3);
        assert_eq!(segment_count(""), 0);
    }

    #[test]
    fn test_split_locale() {
        assert_eq!(split_locale("fr/projects/widgets"), ("fr", "projects/widgets"));
        assert_eq!(split_locale("fr"), ("fr", ""));
    }

    #[test]
    fn test_last_segment() {
        assert_eq!(last_segment("a/b/c"), "c");
        assert_eq!(last_segment("c"), "c");
        assert_eq!(last_segment(""), "");
    }

    #[test]
    fn test_is_ancestor() {
        assert!(is_ancestor("en/a", "en/a/b"));
        assert!(!is_ancestor("en/a", "en/ab"));
        assert!(!is_ancestor("en/a", "en/a"));
    }
}
