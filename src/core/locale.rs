//! Locale authority seam.

/// Decides which locale tokens a content id may start with.
///
/// Implemented by [`I18nConfig`](crate::config::I18nConfig); tests and
/// embedders may provide their own.
pub trait LocaleAuthority: Send + Sync {
    /// Check if `token` is a supported locale.
    fn is_supported_locale(&self, token: &str) -> bool;

    /// The locale whose routes omit the locale prefix.
    fn default_locale(&self) -> &str;

    /// Check if `token` is the default locale.
    #[inline]
    fn is_default_locale(&self, token: &str) -> bool {
        token == self.default_locale()
    }
}
