//! The frame controller of the outer help page.
//!
//! On start it resolves the language, fills `#langmenu`, sizes and loads the
//! navigator and content frames, then keeps listening for window resizes and
//! for `topicNav` messages from the navigator frame.

use crate::dom;
use crate::error::ViewerError;
use crate::listeners::{self, Binding, ListenerKey, Listeners};
use pytt_help_core::controller::{
    CONTENT_FRAME_ID, FOOTER_ID, LANGUAGE_MENU_ID, NAVIGATOR_FRAME_ID,
};
use pytt_help_core::nav::NAV_CONTAINER_ID;
use pytt_help_core::{FramePlan, MessageRouter, Routing, ViewerConfig, Viewport};
use serde_json::Value;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Event, HtmlIFrameElement, MessageEvent, Window};

/// Controller handle returned to JavaScript.
///
/// The resize and message listeners stay registered for the life of the page,
/// even after the handle is freed or collected; only `detach()` removes them.
#[wasm_bindgen]
pub struct FrameController {
    state: Rc<ControllerState>,
    plan: FramePlan,
    listeners: Option<ListenerKey>,
}

struct ControllerState {
    window: Window,
    document: Document,
    config: ViewerConfig,
    router: MessageRouter,
    navigator: HtmlIFrameElement,
    content: HtmlIFrameElement,
    frame_height: Cell<u32>,
}

#[wasm_bindgen]
impl FrameController {
    /// Starts the controller for the current page.
    ///
    /// `config` is an optional plain object in the `ViewerConfig` JSON shape;
    /// missing fields take their defaults.
    #[wasm_bindgen]
    pub fn start(config: JsValue) -> Result<FrameController, JsValue> {
        let config = parse_config(config)?;
        Ok(Self::start_with(config)?)
    }

    /// Recomputes and applies the frame heights.
    #[wasm_bindgen]
    pub fn relayout(&self) -> Result<(), JsValue> {
        self.state.relayout()?;
        Ok(())
    }

    /// Loads `topic` into the content frame.
    #[wasm_bindgen]
    pub fn navigate(&self, topic: &str) {
        self.state.content.set_src(topic);
    }

    /// Removes the resize and message listeners. Later calls do nothing.
    #[wasm_bindgen]
    pub fn detach(&mut self) {
        if let Some(key) = self.listeners.take() {
            listeners::release(key);
        }
    }

    #[wasm_bindgen(getter)]
    pub fn language(&self) -> String {
        self.plan.language.clone()
    }

    #[wasm_bindgen(getter, js_name = tocUrl)]
    pub fn toc_url(&self) -> String {
        self.plan.toc_url.clone()
    }

    #[wasm_bindgen(getter, js_name = contentUrl)]
    pub fn content_url(&self) -> String {
        self.plan.content_url.clone()
    }

    /// Height last applied to both frames.
    #[wasm_bindgen(getter, js_name = frameHeight)]
    pub fn frame_height(&self) -> u32 {
        self.state.frame_height.get()
    }
}

impl FrameController {
    /// Starts the controller with an already parsed configuration.
    pub fn start_with(config: ViewerConfig) -> Result<FrameController, ViewerError> {
        config.validate()?;
        let window = dom::window()?;
        let document = dom::document(&window)?;
        let navigator = dom::iframe(&document, NAVIGATOR_FRAME_ID)?;
        let content = dom::iframe(&document, CONTENT_FRAME_ID)?;
        let router = MessageRouter::from_config(&config);

        let state = Rc::new(ControllerState {
            window,
            document,
            config,
            router,
            navigator,
            content,
            frame_height: Cell::new(0),
        });

        let url = state
            .window
            .location()
            .href()
            .map_err(|e| ViewerError::dom("location.href", e))?;
        let plan = FramePlan::initialize(&url, state.measure()?, &state.config)?;

        dom::element(&state.document, LANGUAGE_MENU_ID)?.set_inner_html(&plan.language_menu);
        state.apply_height(plan.frame_height);
        state.navigator.set_src(&plan.toc_url);
        state.content.set_src(&plan.content_url);
        log::info!("Help viewer started in '{}'", plan.language);

        let mut installed = Listeners::new();
        listen_resize(&state, &mut installed)?;
        listen_messages(&state, &mut installed);
        Ok(FrameController {
            state,
            plan,
            listeners: Some(listeners::register(installed)),
        })
    }
}

fn listen_resize(
    state: &Rc<ControllerState>,
    installed: &mut Listeners,
) -> Result<(), ViewerError> {
    let handler_state = Rc::clone(state);
    let closure = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
        if let Err(e) = handler_state.relayout() {
            log::error!("Frame relayout failed: {}", e);
        }
    });
    installed
        .listen(&state.window, "resize", closure)
        .map_err(|e| ViewerError::dom("addEventListener(resize)", e))
}

/// Registers the message handler, falling back to `onmessage` when
/// `addEventListener` is unavailable.
fn listen_messages(state: &Rc<ControllerState>, installed: &mut Listeners) {
    let handler_state = Rc::clone(state);
    let closure = Closure::<dyn FnMut(MessageEvent)>::new(move |event: MessageEvent| {
        handler_state.on_message(&event);
    });
    let callback = closure.as_ref().unchecked_ref::<js_sys::Function>().clone();
    let binding = match state
        .window
        .add_event_listener_with_callback("message", &callback)
    {
        Ok(()) => Binding::Listener {
            target: state.window.clone().into(),
            event: "message",
        },
        Err(e) => {
            log::warn!("addEventListener(message) failed, using onmessage: {:?}", e);
            state.window.set_onmessage(Some(&callback));
            Binding::OnMessage(state.window.clone())
        }
    };
    installed.keep(binding, callback, closure);
}

impl ControllerState {
    fn measure(&self) -> Result<Viewport, ViewerError> {
        let inner_height = dom::inner_height(&self.window)?;
        if !self.config.sizing.measures_chrome() {
            return Ok(Viewport::new(inner_height, 0, 0));
        }
        Ok(Viewport::new(
            inner_height,
            dom::offset_height(&self.document, NAV_CONTAINER_ID)?,
            dom::offset_height(&self.document, FOOTER_ID)?,
        ))
    }

    fn relayout(&self) -> Result<(), ViewerError> {
        let height = self.config.sizing.frame_height(self.measure()?);
        self.apply_height(height);
        Ok(())
    }

    fn apply_height(&self, height: u32) {
        let height_attr = height.to_string();
        self.navigator.set_height(&height_attr);
        self.content.set_height(&height_attr);
        self.frame_height.set(height);
    }

    fn on_message(&self, event: &MessageEvent) {
        let own_origin = match self.window.location().origin() {
            Ok(origin) => origin,
            Err(e) => {
                log::error!("Cannot read own origin: {:?}", e);
                return;
            }
        };
        // Payloads that are not plain data (blobs, ports, ...) are not ours.
        let Ok(payload) = serde_wasm_bindgen::from_value::<Value>(event.data()) else {
            log::debug!("Ignoring non-JSON message from {}", event.origin());
            return;
        };

        match self.router.route(&event.origin(), &own_origin, &payload) {
            Ok(Routing::Navigate(topic)) => {
                log::debug!("Content frame -> {}", topic);
                self.content.set_src(&topic);
            }
            Ok(Routing::Ignore) => log::debug!("Ignoring message from {}", event.origin()),
            Err(e) => log::warn!("{}", e),
        }
    }
}

fn parse_config(config: JsValue) -> Result<ViewerConfig, ViewerError> {
    if config.is_undefined() || config.is_null() {
        return Ok(ViewerConfig::default());
    }
    serde_wasm_bindgen::from_value(config)
        .map_err(|e| ViewerError::config(format!("Invalid viewer config: {}", e)))
}
