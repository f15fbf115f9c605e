//! Configuration section definitions.
//!
//! Each module corresponds to a section in `index.toml`:
//!
//! | Module        | TOML Section     | Purpose                              |
//! |---------------|------------------|--------------------------------------|
//! | `i18n`        | `[i18n]`         | Supported locales, default locale    |
//! | `collections` | `[collections]`  | Declared and routable collections    |

mod collections;
mod i18n;

pub use collections::CollectionsConfig;
pub use i18n::I18nConfig;
