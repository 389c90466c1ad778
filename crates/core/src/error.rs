// src/error.rs
//! Defines the error types shared by every help viewer operation.

use thiserror::Error;

/// The main error enum for the help viewer core.
#[derive(Error, Debug)]
pub enum HelpError {
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Malformed query parameter '{name}': {message}")]
    QueryDecode { name: String, message: String },
    #[error("Invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
    #[error("Message from origin '{0}' rejected")]
    RejectedOrigin(String),
    #[error("Cross-frame message error: {0}")]
    Message(#[from] serde_json::Error),
}

impl HelpError {
    pub fn config(message: impl Into<String>) -> Self {
        HelpError::Config(message.into())
    }
}
