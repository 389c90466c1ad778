//! Language resolution and the language picker menu.

use crate::error::HelpError;
use crate::locale::Locale;
use crate::query::QueryParameter;
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// The query parameter carrying the requested language.
pub const LANGUAGE_PARAMETER: &str = "language";

/// Language used when the request names none.
pub const FALLBACK_LANGUAGE: &str = "en";

/// CSS class of a menu entry.
pub const ITEM_CLASS: &str = "LanguageItem";

/// CSS class of the entry for the active language.
pub const CURRENT_ITEM_CLASS: &str = "LanguageItemCurrent";

/// One entry of the language picker: a language code and its flag icon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageEntry {
    pub code: String,
    pub icon: String,
}

impl LanguageEntry {
    pub fn new(code: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            icon: icon.into(),
        }
    }
}

/// The languages the help pages are published in, in display order.
pub fn default_languages() -> Vec<LanguageEntry> {
    vec![
        LanguageEntry::new("en", "en.png"),
        LanguageEntry::new("de", "de.png"),
        LanguageEntry::new("ru", "ru.png"),
    ]
}

/// An ordered, non-empty language mapping with unique codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageMenu {
    entries: Vec<LanguageEntry>,
    icon_directory: String,
}

impl LanguageMenu {
    /// Builds a menu, rejecting an empty mapping or a repeated code.
    pub fn new(
        entries: Vec<LanguageEntry>,
        icon_directory: impl Into<String>,
    ) -> Result<Self, HelpError> {
        if entries.is_empty() {
            return Err(HelpError::config("language menu has no entries"));
        }
        for (i, entry) in entries.iter().enumerate() {
            if entry.code.is_empty() {
                return Err(HelpError::config("language code must not be empty"));
            }
            if entries[..i].iter().any(|e| e.code == entry.code) {
                return Err(HelpError::config(format!(
                    "duplicate language code '{}'",
                    entry.code
                )));
            }
        }
        Ok(Self {
            entries,
            icon_directory: icon_directory.into(),
        })
    }

    pub fn entries(&self) -> &[LanguageEntry] {
        &self.entries
    }

    pub fn contains(&self, code: &str) -> bool {
        self.entries.iter().any(|e| e.code == code)
    }

    /// Renders one link per entry; the entry matching `active` gets
    /// [`CURRENT_ITEM_CLASS`], every other entry [`ITEM_CLASS`].
    pub fn render(&self, active: &str) -> String {
        let mut html = String::new();
        for entry in &self.entries {
            let class = if entry.code == active {
                CURRENT_ITEM_CLASS
            } else {
                ITEM_CLASS
            };
            // Writing to a String cannot fail.
            let _ = write!(
                html,
                r#"<a class="{class}" href="?{param}={code}" title="{code}"><img src="{dir}{icon}"/></a>"#,
                class = class,
                param = LANGUAGE_PARAMETER,
                code = entry.code,
                dir = self.icon_directory,
                icon = entry.icon,
            );
        }
        html
    }
}

/// Decides the active language for a page URL.
#[derive(Debug, Clone)]
pub struct LanguageResolver {
    parameter: QueryParameter,
    fallback: String,
    restrict_to: Option<Vec<String>>,
}

impl LanguageResolver {
    /// A resolver that accepts any non-empty `language` value.
    pub fn new(fallback: impl Into<String>) -> Result<Self, HelpError> {
        let fallback = fallback.into();
        if fallback.is_empty() {
            return Err(HelpError::config("fallback language must not be empty"));
        }
        Ok(Self {
            parameter: QueryParameter::new(LANGUAGE_PARAMETER)?,
            fallback,
            restrict_to: None,
        })
    }

    /// Only resolve to languages in `menu`. A requested locale outside the
    /// menu is narrowed through its parents (`de_AT` to `de`) before falling
    /// back.
    pub fn restricted_to(mut self, menu: &LanguageMenu) -> Self {
        self.restrict_to = Some(menu.entries().iter().map(|e| e.code.clone()).collect());
        self
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    /// Resolves the language requested by `url`.
    pub fn resolve(&self, url: &str) -> Result<String, HelpError> {
        let requested = self.parameter.extract(url)?.filter(|l| !l.is_empty());
        let Some(requested) = requested else {
            return Ok(self.fallback.clone());
        };

        let Some(allowed) = &self.restrict_to else {
            return Ok(requested);
        };
        if allowed.iter().any(|code| *code == requested) {
            return Ok(requested);
        }

        let narrowed = Locale::parse(&requested)
            .lineage()
            .map(|l| l.to_string())
            .find(|candidate| allowed.iter().any(|code| code == candidate));
        match narrowed {
            Some(code) => {
                log::debug!("Language '{}' resolved to '{}'", requested, code);
                Ok(code)
            }
            None => {
                log::info!(
                    "Language '{}' is not published, using '{}'",
                    requested,
                    self.fallback
                );
                Ok(self.fallback.clone())
            }
        }
    }
}
