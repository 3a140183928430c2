//! Display locales supported by the portal.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A display locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Locale {
    /// English (default, ultimate fallback).
    #[default]
    En,
    /// Arabic.
    Ar,
}

impl Locale {
    /// Get the language code (e.g., "en").
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ar => "ar",
        }
    }

    /// Parse a locale string, tolerant of case and region subtags
    /// ("en-US", "ar_EG").
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.is_empty() {
            return None;
        }
        let normalized = value.to_ascii_lowercase();
        let lang = normalized.split(['-', '_']).next().unwrap_or("");
        match lang {
            "en" => Some(Locale::En),
            "ar" => Some(Locale::Ar),
            _ => None,
        }
    }

    /// Whether this locale renders right-to-left.
    pub fn is_rtl(&self) -> bool {
        matches!(self, Locale::Ar)
    }

    /// Translation lookup order for this locale: the locale itself,
    /// then English, then Arabic.
    pub fn fallback_chain(&self) -> [&'static str; 3] {
        [self.as_str(), "en", "ar"]
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Resolve the effective locale from a stored user preference and a default.
///
/// An unparseable or absent preference falls back to the supplied default.
pub fn resolve_locale(user_pref: Option<&str>, default: Locale) -> Locale {
    user_pref.and_then(Locale::parse).unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        assert_eq!(Locale::parse("en"), Some(Locale::En));
        assert_eq!(Locale::parse("ar"), Some(Locale::Ar));
        assert_eq!(Locale::parse("fr"), None);
        assert_eq!(Locale::parse(""), None);
    }

    #[test]
    fn test_parse_region_tags() {
        assert_eq!(Locale::parse("en-US"), Some(Locale::En));
        assert_eq!(Locale::parse("ar_EG"), Some(Locale::Ar));
        assert_eq!(Locale::parse("AR"), Some(Locale::Ar));
        assert_eq!(Locale::parse("  en  "), Some(Locale::En));
    }

    #[test]
    fn test_rtl() {
        assert!(Locale::Ar.is_rtl());
        assert!(!Locale::En.is_rtl());
    }

    #[test]
    fn test_fallback_chain() {
        assert_eq!(Locale::Ar.fallback_chain(), ["ar", "en", "ar"]);
        assert_eq!(Locale::En.fallback_chain(), ["en", "en", "ar"]);
    }

    #[test]
    fn test_resolve_locale() {
        assert_eq!(resolve_locale(Some("ar"), Locale::En), Locale::Ar);
        assert_eq!(resolve_locale(None, Locale::Ar), Locale::Ar);
        assert_eq!(resolve_locale(Some("invalid"), Locale::En), Locale::En);
    }
}
