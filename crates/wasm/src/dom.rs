//! Small DOM helpers shared by the page components.

use crate::error::ViewerError;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlIFrameElement, Window};

pub fn window() -> Result<Window, ViewerError> {
    web_sys::window().ok_or_else(|| ViewerError::config("No window object available"))
}

pub fn document(window: &Window) -> Result<Document, ViewerError> {
    window
        .document()
        .ok_or_else(|| ViewerError::config("Window has no document"))
}

/// Looks up `#id`, failing when the page does not have it.
pub fn element(document: &Document, id: &str) -> Result<Element, ViewerError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| ViewerError::missing_element(id))
}

pub fn iframe(document: &Document, id: &str) -> Result<HtmlIFrameElement, ViewerError> {
    element(document, id)?
        .dyn_into::<HtmlIFrameElement>()
        .map_err(|_| ViewerError::config(format!("Element '{}' is not an iframe", id)))
}

/// Rendered height of `#id` in CSS pixels.
pub fn offset_height(document: &Document, id: &str) -> Result<u32, ViewerError> {
    let element = element(document, id)?
        .dyn_into::<HtmlElement>()
        .map_err(|_| ViewerError::config(format!("Element '{}' is not an HTML element", id)))?;
    Ok(element.offset_height().max(0) as u32)
}

pub fn inner_height(window: &Window) -> Result<u32, ViewerError> {
    let value = window
        .inner_height()
        .map_err(|e| ViewerError::dom("innerHeight", e))?;
    Ok(value.as_f64().unwrap_or(0.0).max(0.0) as u32)
}
