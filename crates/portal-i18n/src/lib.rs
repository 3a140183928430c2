//! Locale handling and localized-text resolution.
//!
//! Backend records carry display strings either as plain text (legacy data)
//! or as per-language maps keyed by language code. Everything the portal
//! renders goes through [`LocalizedText::resolve`], which never fails:
//! malformed or missing translations resolve to the empty string.

pub mod locale;
pub mod text;

pub use locale::{resolve_locale, Locale};
pub use text::{resolve_opt, LocalizedText};
