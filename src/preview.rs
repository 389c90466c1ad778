// src/preview.rs
//! Static previews of the help pages.
//!
//! Renders the fragments and the frame plan the browser bindings would apply
//! for a given URL and window, so a help tree can be checked without opening
//! it in a browser.

use pytt_help_core::{FramePlan, HelpError, NavOptions, ViewerConfig, Viewport, render_nav};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PreviewError {
    #[error(transparent)]
    Help(#[from] HelpError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Renders previews for one viewer configuration.
#[derive(Debug, Clone, Default)]
pub struct Preview {
    config: ViewerConfig,
}

impl Preview {
    pub fn new(config: ViewerConfig) -> Result<Self, PreviewError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Loads the configuration from a JSON file.
    pub fn from_config_file(path: impl AsRef<Path>) -> Result<Self, PreviewError> {
        let path = path.as_ref();
        log::info!("Loading viewer config from {}", path.display());
        let json = fs::read_to_string(path)?;
        Ok(Self {
            config: ViewerConfig::from_json(&json)?,
        })
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    pub fn nav(&self, include_search: bool) -> String {
        render_nav(&NavOptions::default().with_search(include_search))
    }

    /// The language menu a page loaded at `url` shows.
    pub fn language_menu(&self, url: &str) -> Result<String, PreviewError> {
        let language = self.config.language_resolver()?.resolve(url)?;
        Ok(self.config.language_menu()?.render(&language))
    }

    pub fn plan(&self, url: &str, viewport: Viewport) -> Result<FramePlan, PreviewError> {
        Ok(FramePlan::initialize(url, viewport, &self.config)?)
    }

    /// The frame plan as pretty-printed JSON.
    pub fn plan_json(&self, url: &str, viewport: Viewport) -> Result<String, PreviewError> {
        Ok(serde_json::to_string_pretty(&self.plan(url, viewport)?)?)
    }
}
