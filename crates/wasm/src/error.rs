//! Error handling for WASM bindings.
//!
//! Converts help viewer errors and DOM failures into JavaScript `Error`
//! objects carrying a `code` property.

use pytt_help_core::HelpError;
use thiserror::Error;
use wasm_bindgen::prelude::*;

/// Error codes for TypeScript consumption.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Invalid viewer configuration
    Config,
    /// Malformed query string
    Query,
    /// A required element is missing from the page
    MissingElement,
    /// A DOM call threw
    Dom,
    /// Cross-frame message rejected or malformed
    Message,
    /// Unknown error
    Unknown,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::Config => "CONFIG_ERROR",
            ErrorCode::Query => "QUERY_ERROR",
            ErrorCode::MissingElement => "MISSING_ELEMENT",
            ErrorCode::Dom => "DOM_ERROR",
            ErrorCode::Message => "MESSAGE_ERROR",
            ErrorCode::Unknown => "UNKNOWN_ERROR",
        }
    }
}

/// A JavaScript-friendly error type.
#[derive(Error, Debug)]
#[error("{message}")]
pub struct ViewerError {
    code: ErrorCode,
    message: String,
}

impl ViewerError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Config, message)
    }

    /// The page has no element with id `id`.
    pub fn missing_element(id: &str) -> Self {
        Self::new(ErrorCode::MissingElement, format!("No element with id '{}'", id))
    }

    /// A DOM call failed with the thrown JavaScript value.
    pub fn dom(context: &str, thrown: JsValue) -> Self {
        Self::new(ErrorCode::Dom, format!("{}: {:?}", context, thrown))
    }
}

impl From<HelpError> for ViewerError {
    fn from(err: HelpError) -> Self {
        let code = match &err {
            HelpError::Config(_) => ErrorCode::Config,
            HelpError::QueryDecode { .. } => ErrorCode::Query,
            HelpError::InvalidPattern(_) => ErrorCode::Unknown,
            HelpError::RejectedOrigin(_) | HelpError::Message(_) => ErrorCode::Message,
        };
        Self::new(code, err.to_string())
    }
}

impl From<serde_wasm_bindgen::Error> for ViewerError {
    fn from(err: serde_wasm_bindgen::Error) -> Self {
        Self::new(ErrorCode::Message, err.to_string())
    }
}

impl From<ViewerError> for JsValue {
    fn from(err: ViewerError) -> Self {
        let js_error = js_sys::Error::new(&err.message);
        js_sys::Reflect::set(
            &js_error,
            &"code".into(),
            &JsValue::from_str(err.code.as_str()),
        )
        .ok();
        js_error.into()
    }
}
