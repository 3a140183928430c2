//! Localized text values.
//!
//! The backend serves translatable fields in two wire shapes: a plain string
//! (already-resolved legacy data) or a `{lang: text}` map. The untagged serde
//! representation decodes both; resolution picks the requested language with
//! a fixed fallback order and degrades to `""` on malformed data.

use crate::locale::Locale;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A value that is either a plain string or a per-language map of strings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum LocalizedText {
    /// Legacy, already-resolved text. Returned unchanged for every locale.
    Plain(String),
    /// Per-language translations keyed by language code.
    Localized(BTreeMap<String, String>),
}

impl LocalizedText {
    /// Create a plain (locale-independent) value.
    pub fn plain(text: impl Into<String>) -> Self {
        LocalizedText::Plain(text.into())
    }

    /// Create a localized value from `(lang, text)` pairs.
    pub fn localized<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        LocalizedText::Localized(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Resolve to a display string for the requested locale.
    ///
    /// Lookup order for localized values: the requested language, then
    /// English, then Arabic. A map missing all three resolves to `""`.
    pub fn resolve(&self, locale: Locale) -> &str {
        match self {
            LocalizedText::Plain(s) => s,
            LocalizedText::Localized(map) => locale
                .fallback_chain()
                .iter()
                .find_map(|lang| map.get(*lang))
                .map(String::as_str)
                .unwrap_or(""),
        }
    }

    /// Whether resolution would yield an empty string for every locale.
    pub fn is_empty(&self) -> bool {
        match self {
            LocalizedText::Plain(s) => s.is_empty(),
            LocalizedText::Localized(map) => map.values().all(|v| v.is_empty()),
        }
    }
}

impl Default for LocalizedText {
    fn default() -> Self {
        LocalizedText::Plain(String::new())
    }
}

impl From<&str> for LocalizedText {
    fn from(s: &str) -> Self {
        LocalizedText::Plain(s.to_string())
    }
}

impl From<String> for LocalizedText {
    fn from(s: String) -> Self {
        LocalizedText::Plain(s)
    }
}

/// Resolve an optional field; absent values resolve to `""`.
pub fn resolve_opt(value: Option<&LocalizedText>, locale: Locale) -> &str {
    value.map(|v| v.resolve(locale)).unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_ignores_locale() {
        let text = LocalizedText::plain("X");
        assert_eq!(text.resolve(Locale::En), "X");
        assert_eq!(text.resolve(Locale::Ar), "X");
    }

    #[test]
    fn test_requested_locale_wins() {
        let text = LocalizedText::localized([("en", "Hello"), ("ar", "مرحبا")]);
        assert_eq!(text.resolve(Locale::Ar), "مرحبا");
        assert_eq!(text.resolve(Locale::En), "Hello");
    }

    #[test]
    fn test_falls_back_to_english() {
        let text = LocalizedText::localized([("en", "E")]);
        assert_eq!(text.resolve(Locale::Ar), "E");
    }

    #[test]
    fn test_falls_back_to_arabic() {
        let text = LocalizedText::localized([("ar", "A")]);
        assert_eq!(text.resolve(Locale::En), "A");
    }

    #[test]
    fn test_empty_map_resolves_empty() {
        let text = LocalizedText::Localized(BTreeMap::new());
        assert_eq!(text.resolve(Locale::En), "");
        assert!(text.is_empty());
    }

    #[test]
    fn test_resolve_opt_none() {
        assert_eq!(resolve_opt(None, Locale::En), "");
        let text = LocalizedText::plain("present");
        assert_eq!(resolve_opt(Some(&text), Locale::En), "present");
    }

    #[test]
    fn test_decodes_plain_string_wire_shape() {
        let text: LocalizedText = serde_json::from_str("\"legacy title\"").unwrap();
        assert_eq!(text, LocalizedText::plain("legacy title"));
    }

    #[test]
    fn test_decodes_map_wire_shape() {
        let text: LocalizedText =
            serde_json::from_str(r#"{"en": "Course", "ar": "دورة"}"#).unwrap();
        assert_eq!(text.resolve(Locale::Ar), "دورة");
    }

    #[test]
    fn test_unknown_extra_language_keys_tolerated() {
        let text: LocalizedText =
            serde_json::from_str(r#"{"fr": "Cours", "en": "Course"}"#).unwrap();
        assert_eq!(text.resolve(Locale::En), "Course");
    }
}
