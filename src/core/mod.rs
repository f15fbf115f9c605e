//! Core types shared by the index pipeline.
//!
//! - [`entry`]: raw [`ContentEntry`] records
//! - [`id`]: content id normalization and segment helpers
//! - [`route`]: the [`Route`] newtype
//! - [`locale`]: the [`LocaleAuthority`] seam

mod entry;
pub mod id;
mod locale;
mod route;

pub use entry::{ContentEntry, JsonMap, PERMASLUG_KEY};
pub use locale::LocaleAuthority;
pub use route::Route;
