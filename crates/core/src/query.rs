//! Query string parameter extraction.
//!
//! Parameters are looked up with a case-sensitive, exact-name match against the
//! whole URL, the same way a page script would do it with a regular expression:
//! the name must follow `?` or `&` and be terminated by `=`, `&`, `#` or the end
//! of the string.
//!
//! The result distinguishes three cases:
//!
//! - `None`: the parameter does not occur at all
//! - `Some("")`: the parameter occurs with an empty value (`?language=`) or no
//!   value at all (`?language&x=1`)
//! - `Some(value)`: the decoded value, with `+` read as a space

use crate::error::HelpError;
use regex::Regex;

/// A compiled matcher for one query parameter name.
#[derive(Debug, Clone)]
pub struct QueryParameter {
    name: String,
    pattern: Regex,
}

impl QueryParameter {
    /// Compiles a matcher for `name`. Regex metacharacters in the name are escaped.
    pub fn new(name: &str) -> Result<Self, HelpError> {
        let pattern = Regex::new(&format!(
            r"[?&]{}(=([^&#]*)|&|#|$)",
            regex::escape(name)
        ))?;
        Ok(Self {
            name: name.to_string(),
            pattern,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Extracts and decodes the parameter value from `url`.
    pub fn extract(&self, url: &str) -> Result<Option<String>, HelpError> {
        let Some(captures) = self.pattern.captures(url) else {
            return Ok(None);
        };
        let Some(raw) = captures.get(2) else {
            return Ok(Some(String::new()));
        };

        if let Some(at) = malformed_escape(raw.as_str()) {
            return Err(HelpError::QueryDecode {
                name: self.name.clone(),
                message: format!("malformed percent-escape at byte {}", at),
            });
        }

        let plus_as_space = raw.as_str().replace('+', " ");
        let decoded =
            urlencoding::decode(&plus_as_space).map_err(|e| HelpError::QueryDecode {
                name: self.name.clone(),
                message: e.to_string(),
            })?;
        Ok(Some(decoded.into_owned()))
    }
}

/// Offset of the first `%` not followed by two hex digits.
///
/// `urlencoding` passes such sequences through untouched; a browser's
/// `decodeURIComponent` rejects them.
fn malformed_escape(raw: &str) -> Option<usize> {
    let bytes = raw.as_bytes();
    bytes.iter().enumerate().find_map(|(i, &b)| {
        let valid = b != b'%'
            || (bytes.get(i + 1).is_some_and(u8::is_ascii_hexdigit)
                && bytes.get(i + 2).is_some_and(u8::is_ascii_hexdigit));
        (!valid).then_some(i)
    })
}

/// Reads the parameter `name` from `url`.
///
/// Convenience wrapper around [`QueryParameter`] for one-off lookups.
pub fn get_parameter_by_name(name: &str, url: &str) -> Result<Option<String>, HelpError> {
    QueryParameter::new(name)?.extract(url)
}
