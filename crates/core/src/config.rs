//! Help viewer configuration.
//!
//! Every field has a default, so an empty JSON object (or no configuration at
//! all) yields the stock viewer: English fallback, the `en`/`de`/`ru` menu,
//! measured header/footer and same-origin messaging.

use crate::error::HelpError;
use crate::language::{
    FALLBACK_LANGUAGE, LanguageEntry, LanguageMenu, LanguageResolver, default_languages,
};
use crate::layout::FrameSizing;
use crate::message::OriginPolicy;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ViewerConfig {
    pub fallback_language: String,
    pub languages: Vec<LanguageEntry>,
    pub icon_directory: String,
    /// Appended to the language code to form the navigator frame URL.
    pub toc_page: String,
    /// Appended to the language code to form the content frame URL.
    pub content_page: String,
    pub sizing: FrameSizing,
    /// Origins allowed to send frame messages. Empty means same origin only.
    pub allowed_origins: Vec<String>,
    /// Resolve only to languages listed in `languages`.
    pub restrict_to_menu_languages: bool,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            fallback_language: FALLBACK_LANGUAGE.to_string(),
            languages: default_languages(),
            icon_directory: "images/languages/".to_string(),
            toc_page: "/toc.html".to_string(),
            content_page: "/index.html".to_string(),
            sizing: FrameSizing::default(),
            allowed_origins: Vec::new(),
            restrict_to_menu_languages: false,
        }
    }
}

impl ViewerConfig {
    pub fn from_json(json: &str) -> Result<Self, HelpError> {
        let config: ViewerConfig = serde_json::from_str(json)
            .map_err(|e| HelpError::config(format!("invalid viewer config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), HelpError> {
        self.language_menu()?;
        self.language_resolver()?;
        Ok(())
    }

    pub fn language_menu(&self) -> Result<LanguageMenu, HelpError> {
        LanguageMenu::new(self.languages.clone(), self.icon_directory.clone())
    }

    pub fn language_resolver(&self) -> Result<LanguageResolver, HelpError> {
        let resolver = LanguageResolver::new(self.fallback_language.clone())?;
        if self.restrict_to_menu_languages {
            Ok(resolver.restricted_to(&self.language_menu()?))
        } else {
            Ok(resolver)
        }
    }

    pub fn origin_policy(&self) -> OriginPolicy {
        OriginPolicy::from_list(&self.allowed_origins)
    }
}
