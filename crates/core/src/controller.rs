//! Frame controller logic, independent of the DOM.
//!
//! [`FramePlan`] holds everything the outer help page needs on load: the
//! active language, the URLs of both frames, their height and the language
//! menu markup. [`MessageRouter`] decides what an incoming cross-frame message
//! does to the content frame.

use crate::config::ViewerConfig;
use crate::error::HelpError;
use crate::layout::Viewport;
use crate::message::{FrameMessage, OriginPolicy};
use serde::Serialize;
use serde_json::Value;

pub const NAVIGATOR_FRAME_ID: &str = "navigatorframe";
pub const CONTENT_FRAME_ID: &str = "contentframe";
pub const LANGUAGE_MENU_ID: &str = "langmenu";
pub const FOOTER_ID: &str = "footer";

/// The initial state of the outer help page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FramePlan {
    pub language: String,
    pub toc_url: String,
    pub content_url: String,
    pub frame_height: u32,
    pub language_menu: String,
}

impl FramePlan {
    /// Computes the plan for a page loaded at `url` in a window of `viewport`.
    pub fn initialize(
        url: &str,
        viewport: Viewport,
        config: &ViewerConfig,
    ) -> Result<Self, HelpError> {
        let menu = config.language_menu()?;
        let language = config.language_resolver()?.resolve(url)?;

        let plan = Self {
            toc_url: format!("{}{}", language, config.toc_page),
            content_url: format!("{}{}", language, config.content_page),
            frame_height: config.sizing.frame_height(viewport),
            language_menu: menu.render(&language),
            language,
        };
        log::debug!(
            "Frame plan for '{}': toc={}, content={}, height={}",
            plan.language,
            plan.toc_url,
            plan.content_url,
            plan.frame_height
        );
        Ok(plan)
    }
}

/// What to do with the content frame after a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Routing {
    /// Load this URL into the content frame.
    Navigate(String),
    /// Leave the content frame alone.
    Ignore,
}

/// Validates and interprets messages received by the outer page.
#[derive(Debug, Clone, Default)]
pub struct MessageRouter {
    policy: OriginPolicy,
}

impl MessageRouter {
    pub fn new(policy: OriginPolicy) -> Self {
        Self { policy }
    }

    pub fn from_config(config: &ViewerConfig) -> Self {
        Self::new(config.origin_policy())
    }

    pub fn policy(&self) -> &OriginPolicy {
        &self.policy
    }

    /// Routes a message from `origin` received by a page at `own_origin`.
    ///
    /// A foreign origin or a malformed `topicNav` payload is an error; any
    /// other payload is ignored.
    pub fn route(
        &self,
        origin: &str,
        own_origin: &str,
        payload: &Value,
    ) -> Result<Routing, HelpError> {
        self.policy.check(origin, own_origin)?;
        match FrameMessage::decode(payload)? {
            Some(FrameMessage::TopicNav { topic }) => Ok(Routing::Navigate(topic)),
            None => Ok(Routing::Ignore),
        }
    }
}
