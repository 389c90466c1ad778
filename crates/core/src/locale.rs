//! Locale identifiers (`language[_COUNTRY[_variant]]`).
//!
//! Used to resolve a requested language such as `de_AT` to the closest
//! language the help pages are actually published in.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

static LANGUAGE_COUNTRY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([a-zA-Z]{2})(?:[_-]([a-zA-Z]{2}))?(?:[_-](\w+))?").expect("static regex")
});

/// A language, optionally narrowed by country and variant.
///
/// The language is a two-letter ISO-639 code stored lowercase, the country a
/// two-letter ISO-3166 code stored uppercase. A locale with no language is the
/// root (invariant) locale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Locale {
    language: Option<String>,
    country: Option<String>,
    variant: Option<String>,
}

impl Locale {
    /// The root (invariant) locale.
    pub fn root() -> Self {
        Self::default()
    }

    /// Builds a locale, dropping components that are not well formed.
    pub fn new(language: Option<&str>, country: Option<&str>, variant: Option<&str>) -> Self {
        let language = language
            .map(str::trim)
            .filter(|l| l.len() == 2)
            .map(str::to_ascii_lowercase);
        let country = country
            .map(str::trim)
            .filter(|c| c.len() == 2)
            .map(str::to_ascii_uppercase);
        let variant = variant
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_ascii_lowercase);
        Self {
            language,
            country,
            variant,
        }
    }

    /// Parses `de`, `de_AT`, `de-AT` or `de_AT_basic`.
    ///
    /// Anything that does not start with a two-letter language yields the root
    /// locale.
    pub fn parse(s: &str) -> Self {
        match LANGUAGE_COUNTRY.captures(s.trim()) {
            Some(c) => Self::new(
                c.get(1).map(|m| m.as_str()),
                c.get(2).map(|m| m.as_str()),
                c.get(3).map(|m| m.as_str()),
            ),
            None => Self::root(),
        }
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    pub fn country(&self) -> Option<&str> {
        self.country.as_deref()
    }

    pub fn variant(&self) -> Option<&str> {
        self.variant.as_deref()
    }

    pub fn is_root(&self) -> bool {
        self.language.is_none()
    }

    /// The immediate parent: drops the variant, then the country, then the
    /// language. The parent of the root locale is the root locale.
    pub fn parent(&self) -> Self {
        match (&self.language, &self.country, &self.variant) {
            (None, _, _) | (Some(_), None, _) => Self::root(),
            (Some(language), Some(_), None) => Self {
                language: Some(language.clone()),
                ..Self::default()
            },
            (Some(language), Some(country), Some(_)) => Self {
                language: Some(language.clone()),
                country: Some(country.clone()),
                variant: None,
            },
        }
    }

    /// This locale followed by each of its ancestors, excluding the root.
    pub fn lineage(&self) -> impl Iterator<Item = Locale> {
        std::iter::successors(Some(self.clone()), |l| Some(l.parent()))
            .take_while(|l| !l.is_root())
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.language, &self.country, &self.variant) {
            (None, _, _) => Ok(()),
            (Some(l), None, _) => write!(f, "{}", l),
            (Some(l), Some(c), None) => write!(f, "{}_{}", l, c),
            (Some(l), Some(c), Some(v)) => write!(f, "{}_{}_{}", l, c, v),
        }
    }
}
