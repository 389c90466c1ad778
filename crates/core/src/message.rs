//! The message schema exchanged between the TOC frame and the outer page.
//!
//! Both sides use [`FrameMessage`], so the sender and receiver cannot drift
//! apart. Messages are plain JSON objects tagged by `type`:
//!
//! ```json
//! { "type": "topicNav", "topic": "de/page3.html" }
//! ```
//!
//! Receivers check the sender's origin against an [`OriginPolicy`] before
//! decoding anything.

use crate::error::HelpError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Target origin used when posting to the parent window.
pub const ANY_ORIGIN: &str = "*";

/// A cross-frame message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum FrameMessage {
    /// Show `topic` in the content frame.
    TopicNav { topic: String },
}

impl FrameMessage {
    pub fn topic_nav(topic: impl Into<String>) -> Self {
        FrameMessage::TopicNav {
            topic: topic.into(),
        }
    }

    /// Decodes a received payload.
    ///
    /// Returns `Ok(None)` for payloads that are not frame messages at all
    /// (other scripts on the page post their own data); a payload that claims
    /// a known `type` but is malformed is an error.
    pub fn decode(payload: &Value) -> Result<Option<Self>, HelpError> {
        let known = matches!(
            payload.get("type").and_then(Value::as_str),
            Some("topicNav")
        );
        if !known {
            return Ok(None);
        }
        Ok(Some(serde_json::from_value(payload.clone())?))
    }

    pub fn to_value(&self) -> Result<Value, HelpError> {
        Ok(serde_json::to_value(self)?)
    }
}

/// Which senders a receiver accepts messages from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum OriginPolicy {
    /// Only the receiving window's own origin.
    #[default]
    SameOrigin,
    /// Exactly these origins. `"*"` accepts any origin.
    AllowList(Vec<String>),
}

impl OriginPolicy {
    /// An empty list means same-origin only.
    pub fn from_list(origins: &[String]) -> Self {
        if origins.is_empty() {
            OriginPolicy::SameOrigin
        } else {
            OriginPolicy::AllowList(origins.to_vec())
        }
    }

    /// Checks `origin` (the sender) against the policy for a receiver running
    /// at `own_origin`.
    pub fn check(&self, origin: &str, own_origin: &str) -> Result<(), HelpError> {
        let allowed = match self {
            OriginPolicy::SameOrigin => origin == own_origin,
            OriginPolicy::AllowList(list) => list
                .iter()
                .any(|o| o == ANY_ORIGIN || o.trim_end_matches('/') == origin),
        };
        if allowed {
            Ok(())
        } else {
            Err(HelpError::RejectedOrigin(origin.to_string()))
        }
    }
}
