//! Fatal index build errors.

use thiserror::Error;

/// Errors that abort an index build.
///
/// No partial index is ever published when one of these is returned.
#[derive(Debug, Error)]
pub enum IndexError {
    /// A routable id starts with a locale token that is not configured.
    #[error("{locale} is not a supported locale.")]
    UnsupportedLocale { locale: String, id: String },

    /// A routable entry has neither a permaslug nor a path after its locale.
    #[error("cannot resolve a slug for `{id}`: no permaslug and nothing after the locale")]
    SlugResolution { id: String },

    /// The collection source failed to deliver a collection.
    #[error("failed to fetch collection `{collection}`")]
    Source {
        collection: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },

    /// The process-wide index was requested before a cache was installed.
    #[error("no index cache installed")]
    NotInstalled,
}

impl IndexError {
    pub(crate) fn source_failed(collection: &str, err: anyhow::Error) -> Self {
        Self::Source {
            collection: collection.to_string(),
            source: err.into(),
        }
    }

    /// Id of the entry that caused the failure, if any.
    pub fn entry_id(&self) -> Option<&str> {
        match self {
            Self::UnsupportedLocale { id, .. } | Self::SlugResolution { id } => Some(id),
            Self::Source { .. } | Self::NotInstalled => None,
        }
    }
}
