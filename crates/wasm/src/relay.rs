//! Click relay for the TOC page.
//!
//! Runs inside the navigator frame. Every `toc1`..`toc9` anchor posts a
//! `topicNav` message to the parent page instead of navigating the frame
//! itself.

use crate::dom;
use crate::error::ViewerError;
use crate::listeners::{self, ListenerKey, Listeners};
use pytt_help_core::message::ANY_ORIGIN;
use pytt_help_core::{FrameMessage, TocOutline, toc_level};
use serde::Serialize;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Event, HtmlAnchorElement, Window};

/// Relay handle returned to JavaScript.
///
/// The click handlers outlive the handle; `detach()` removes them.
#[wasm_bindgen]
pub struct TocRelay {
    listeners: Option<ListenerKey>,
    count: usize,
    outline: TocOutline,
}

#[wasm_bindgen]
impl TocRelay {
    /// Wires every TOC anchor of the current document.
    ///
    /// `target_origin` restricts who may receive the messages; it defaults to
    /// `"*"`.
    #[wasm_bindgen]
    pub fn install(target_origin: Option<String>) -> Result<TocRelay, JsValue> {
        let target_origin = target_origin.unwrap_or_else(|| ANY_ORIGIN.to_string());
        Ok(Self::install_with(target_origin)?)
    }

    /// Number of anchors wired.
    #[wasm_bindgen(getter)]
    pub fn count(&self) -> usize {
        self.count
    }

    /// The nested topic outline as a plain object.
    #[wasm_bindgen]
    pub fn outline(&self) -> Result<JsValue, JsValue> {
        let value = self
            .outline
            .root()
            .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
            .map_err(ViewerError::from)?;
        Ok(value)
    }

    /// Restores the default behavior of every wired anchor.
    #[wasm_bindgen]
    pub fn detach(&mut self) {
        if let Some(key) = self.listeners.take() {
            listeners::release(key);
        }
    }
}

impl TocRelay {
    pub fn install_with(target_origin: String) -> Result<TocRelay, ViewerError> {
        let window = dom::window()?;
        let document = dom::document(&window)?;
        let links = document.get_elements_by_tag_name("a");

        let mut anchors = Vec::new();
        for i in 0..links.length() {
            let Some(anchor) = links
                .item(i)
                .and_then(|e| e.dyn_into::<HtmlAnchorElement>().ok())
            else {
                continue;
            };
            if toc_level(&anchor.class_name()).is_some() {
                anchors.push(anchor);
            }
        }

        let outline = TocOutline::from_anchors(anchors.iter().map(|a| {
            (
                a.class_name(),
                a.text_content().unwrap_or_default(),
                a.href(),
            )
        }));
        log::debug!("TOC outline has {} topics", outline.len());

        let mut installed = Listeners::new();
        for anchor in anchors {
            let closure = relay_click(window.clone(), anchor.clone(), target_origin.clone());
            if let Err(e) = installed.listen(&anchor, "click", closure) {
                installed.remove_all();
                return Err(ViewerError::dom("addEventListener(click)", e));
            }
        }

        if installed.is_empty() {
            log::debug!("No TOC anchors on this page");
        }
        Ok(TocRelay {
            count: installed.len(),
            listeners: Some(listeners::register(installed)),
            outline,
        })
    }
}

fn relay_click(
    window: Window,
    anchor: HtmlAnchorElement,
    target_origin: String,
) -> Closure<dyn FnMut(Event)> {
    Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        event.prevent_default();
        if let Err(e) = post_topic(&window, &anchor.href(), &target_origin) {
            log::error!("Cannot relay TOC click: {}", e);
        }
    })
}

/// Posts a `topicNav` message for `topic` to the parent window.
pub fn post_topic(window: &Window, topic: &str, target_origin: &str) -> Result<(), ViewerError> {
    let message = FrameMessage::topic_nav(topic)
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())?;
    let parent = window
        .parent()
        .map_err(|e| ViewerError::dom("window.parent", e))?
        .unwrap_or_else(|| window.clone());
    parent
        .post_message(&message, target_origin)
        .map_err(|e| ViewerError::dom("postMessage", e))
}
