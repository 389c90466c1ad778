//! WebAssembly bindings for the PyTT help viewer.
//!
//! The help pages load this module and call one entry point per page role:
//!
//! - [`build_nav`] on every page, to inject the navigation bar into `#home`
//! - [`FrameController::start`] on the outer help page, to size and load the
//!   navigator and content frames and to follow `topicNav` messages
//! - [`TocRelay::install`] inside the navigator frame, to turn TOC clicks into
//!   `topicNav` messages for the outer page
//!
//! All computation lives in `pytt-help-core`; this crate only touches the DOM.
//!
//! # Example
//!
//! ```javascript
//! import init, { buildNav, FrameController } from './pytt_help_wasm.js';
//!
//! await init();
//!
//! buildNav();
//! const controller = FrameController.start({ allowedOrigins: [] });
//! console.log(controller.language, controller.frameHeight);
//! ```
//!
//! ```javascript
//! // toc.html
//! import init, { TocRelay } from './pytt_help_wasm.js';
//!
//! await init();
//! const relay = TocRelay.install(window.location.origin);
//! ```

mod dom;
mod error;
mod frames;
mod listeners;
mod nav;
mod relay;

pub use error::{ErrorCode, ViewerError};
pub use frames::FrameController;
pub use nav::build_nav;
pub use relay::{TocRelay, post_topic};

use wasm_bindgen::prelude::*;

/// Initialize the WASM module.
///
/// Sets up panic hooks for better error messages in the browser console.
/// It is called automatically when using wasm-pack's generated JavaScript.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();

    #[cfg(feature = "console-logging")]
    {
        console_log::init_with_level(log::Level::Debug).ok();
    }
}

/// Reads a query parameter from `url`.
///
/// Returns `undefined` when absent and `""` when present without a value.
#[wasm_bindgen(js_name = getParameterByName)]
pub fn get_parameter_by_name(name: &str, url: &str) -> Result<Option<String>, JsValue> {
    Ok(pytt_help_core::get_parameter_by_name(name, url).map_err(ViewerError::from)?)
}

/// Get the version of the pytt-help-wasm library.
#[wasm_bindgen(js_name = getVersion)]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
