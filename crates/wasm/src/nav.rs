//! Navigation bar injection.

use crate::dom;
use crate::error::ViewerError;
use pytt_help_core::nav::{NAV_CONTAINER_ID, SEARCH_FLAG};
use pytt_help_core::{NavOptions, render_nav};
use wasm_bindgen::prelude::*;
use web_sys::Window;

/// Injects the navigation bar into `#home`.
///
/// When `include_search` is not given, the page-global
/// `includeSearchBarInNavBar` decides with JavaScript truthiness; an undefined
/// global means no search form.
#[wasm_bindgen(js_name = buildNav)]
pub fn build_nav(include_search: Option<bool>) -> Result<(), JsValue> {
    let window = dom::window()?;
    let include_search = include_search.unwrap_or_else(|| search_flag(&window));
    inject_nav(&window, include_search)?;
    Ok(())
}

fn inject_nav(window: &Window, include_search: bool) -> Result<(), ViewerError> {
    let document = dom::document(window)?;
    let container = dom::element(&document, NAV_CONTAINER_ID)?;
    container.set_inner_html(&render_nav(&NavOptions::default().with_search(include_search)));
    log::debug!("Navigation bar injected (search: {})", include_search);
    Ok(())
}

/// Reads the page flag the way a page script would see it.
///
/// A `let`/`const` declared at the top level of a classic script is a global
/// binding but not a property of `window`, so the flag is evaluated as a plain
/// identifier. Pages whose CSP forbids `Function` still get `var` and
/// `window.` assignments through `Reflect`.
fn search_flag(window: &Window) -> bool {
    let lookup = js_sys::Function::new_no_args(&format!(
        "return typeof {flag} !== 'undefined' && !!{flag};",
        flag = SEARCH_FLAG
    ));
    match lookup.call0(&JsValue::UNDEFINED) {
        Ok(value) => value.is_truthy(),
        Err(_) => {
            log::debug!("Evaluating {} failed, reading window property", SEARCH_FLAG);
            js_sys::Reflect::get(window, &JsValue::from_str(SEARCH_FLAG))
                .map(|v| v.is_truthy())
                .unwrap_or(false)
        }
    }
}
