//! WebAssembly integration tests.
//!
//! These tests run in a headless browser using wasm-bindgen-test.
//!
//! Run with: wasm-pack test --headless --chrome crates/wasm

use pytt_help_core::{FrameMessage, ViewerConfig};
use pytt_help_wasm::{FrameController, TocRelay};
use serde::Serialize;
use serde_json::json;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::{Document, HtmlAnchorElement, HtmlIFrameElement, MessageEvent, MessageEventInit};

wasm_bindgen_test_configure!(run_in_browser);

/// Target origin for relays whose posted messages must not reach this page.
const UNREACHABLE_ORIGIN: &str = "https://unreachable.example";

const HELP_PAGE: &str = r#"
    <div id="home" style="height: 60px"></div>
    <div id="langmenu"></div>
    <iframe id="navigatorframe"></iframe>
    <iframe id="contentframe"></iframe>
    <div id="footer" style="height: 30px"></div>
"#;

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

/// Replaces the test fixture markup, leaving the runner's own output alone.
fn load_page(body: &str) -> Document {
    let document = document();
    let fixture = match document.get_element_by_id("fixture") {
        Some(fixture) => fixture,
        None => {
            let fixture = document.create_element("div").unwrap();
            fixture.set_id("fixture");
            document.body().unwrap().append_child(&fixture).unwrap();
            fixture
        }
    };
    fixture.set_inner_html(body);
    document
}

fn iframe(document: &Document, id: &str) -> HtmlIFrameElement {
    document
        .get_element_by_id(id)
        .unwrap()
        .dyn_into::<HtmlIFrameElement>()
        .unwrap()
}

fn own_origin() -> String {
    web_sys::window().unwrap().location().origin().unwrap()
}

fn dispatch_message(origin: &str, message: &FrameMessage) {
    let data = message
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .unwrap();
    let init = MessageEventInit::new();
    init.set_data(&data);
    init.set_origin(origin);
    let event = MessageEvent::new_with_event_init_dict("message", &init).unwrap();
    web_sys::window().unwrap().dispatch_event(&event).unwrap();
}

/// Dispatches a cancelable click on `#id` and returns whether it was cancelled.
fn click_cancelled(document: &Document, id: &str) -> bool {
    let anchor = document
        .get_element_by_id(id)
        .unwrap()
        .dyn_into::<web_sys::HtmlElement>()
        .unwrap();
    let init = web_sys::EventInit::new();
    init.set_cancelable(true);
    let event = web_sys::Event::new_with_event_init_dict("click", &init).unwrap();
    let not_cancelled = anchor.dispatch_event(&event).unwrap();
    assert_eq!(not_cancelled, !event.default_prevented());
    !not_cancelled
}

#[wasm_bindgen_test]
fn test_init() {
    let version = pytt_help_wasm::get_version();
    assert!(!version.is_empty());
}

#[wasm_bindgen_test]
fn test_get_parameter_by_name() {
    let value = pytt_help_wasm::get_parameter_by_name("language", "https://x/?language=de").unwrap();
    assert_eq!(value.as_deref(), Some("de"));
    let value = pytt_help_wasm::get_parameter_by_name("language", "https://x/").unwrap();
    assert_eq!(value, None);
}

#[wasm_bindgen_test]
fn test_build_nav() {
    let document = load_page(r#"<div id="home"></div>"#);
    pytt_help_wasm::build_nav(Some(true)).expect("Should inject the navigation bar");

    let home = document.get_element_by_id("home").unwrap();
    assert!(home.inner_html().contains("TravelBoom"));
    assert!(document.get_element_by_id("SearchInput").is_some());
    assert!(document.get_element_by_id("SubmitSearchButton").is_some());
    assert!(document.get_element_by_id("ResetSearchButton").is_some());
}

#[wasm_bindgen_test]
fn test_build_nav_reads_truthy_page_global() {
    let window = web_sys::window().unwrap();
    let flag = JsValue::from_str("includeSearchBarInNavBar");
    js_sys::Reflect::set(&window, &flag, &JsValue::from_f64(1.0)).unwrap();

    let document = load_page(r#"<div id="home"></div>"#);
    let result = pytt_help_wasm::build_nav(None);
    js_sys::Reflect::delete_property(&window, &flag).unwrap();

    result.expect("Should inject the navigation bar");
    assert!(document.get_element_by_id("SearchInput").is_some());
}

#[wasm_bindgen_test]
fn test_build_nav_reads_lexical_page_global() {
    let document = load_page(r#"<div id="home"></div>"#);
    // A top-level `let` in a classic script is global but not a window property.
    let script = document.create_element("script").unwrap();
    script.set_text_content(Some("let includeSearchBarInNavBar = 'yes';"));
    document.body().unwrap().append_child(&script).unwrap();
    let window = web_sys::window().unwrap();
    assert!(
        !js_sys::Reflect::has(&window, &JsValue::from_str("includeSearchBarInNavBar")).unwrap()
    );

    pytt_help_wasm::build_nav(None).expect("Should inject the navigation bar");
    assert!(document.get_element_by_id("SearchInput").is_some());
}

#[wasm_bindgen_test]
fn test_build_nav_without_container_fails() {
    load_page("");
    assert!(pytt_help_wasm::build_nav(Some(false)).is_err());
}

#[wasm_bindgen_test]
fn test_controller_loads_frames() {
    let document = load_page(HELP_PAGE);
    let mut controller =
        FrameController::start_with(ViewerConfig::default()).expect("Should start controller");

    // The test runner page carries no language parameter.
    assert_eq!(controller.language(), "en");
    assert_eq!(controller.toc_url(), "en/toc.html");
    assert!(iframe(&document, "navigatorframe").src().ends_with("en/toc.html"));
    assert!(iframe(&document, "contentframe").src().ends_with("en/index.html"));

    let menu = document.get_element_by_id("langmenu").unwrap().inner_html();
    assert_eq!(menu.matches("LanguageItemCurrent").count(), 1);

    let height = controller.frame_height();
    assert_eq!(iframe(&document, "contentframe").height(), height.to_string());
    controller.relayout().unwrap();
    assert_eq!(controller.frame_height(), height);
    controller.detach();
}

#[wasm_bindgen_test]
fn test_resize_event_resizes_frames() {
    let document = load_page(HELP_PAGE);
    let mut controller =
        FrameController::start_with(ViewerConfig::default()).expect("Should start controller");

    document
        .get_element_by_id("home")
        .unwrap()
        .set_attribute("style", "height: 100px")
        .unwrap();
    let window = web_sys::window().unwrap();
    let event = web_sys::Event::new("resize").unwrap();
    window.dispatch_event(&event).unwrap();

    let inner_height = window.inner_height().unwrap().as_f64().unwrap() as u32;
    let height = controller.frame_height();
    // Dynamic sizing: frames + header + footer + margin fill the window.
    assert_eq!(height, inner_height.saturating_sub(100 + 30 + 20));
    if height > 0 {
        assert_eq!(height + 100 + 30 + 20, inner_height);
    }
    assert_eq!(iframe(&document, "navigatorframe").height(), height.to_string());
    assert_eq!(iframe(&document, "contentframe").height(), height.to_string());
    controller.detach();
}

#[wasm_bindgen_test]
fn test_controller_requires_frames() {
    load_page(r#"<div id="home"></div><div id="footer"></div>"#);
    assert!(FrameController::start_with(ViewerConfig::default()).is_err());
}

#[wasm_bindgen_test]
fn test_topic_nav_message_from_own_origin() {
    let document = load_page(HELP_PAGE);
    let mut controller =
        FrameController::start_with(ViewerConfig::default()).expect("Should start controller");

    dispatch_message(&own_origin(), &FrameMessage::topic_nav("de/page3.html"));
    assert!(iframe(&document, "contentframe").src().ends_with("de/page3.html"));
    controller.detach();
}

#[wasm_bindgen_test]
fn test_topic_nav_message_from_foreign_origin_is_ignored() {
    let document = load_page(HELP_PAGE);
    let mut controller =
        FrameController::start_with(ViewerConfig::default()).expect("Should start controller");

    dispatch_message("https://evil.example", &FrameMessage::topic_nav("de/page3.html"));
    assert!(iframe(&document, "contentframe").src().ends_with("en/index.html"));
    controller.detach();
}

#[wasm_bindgen_test]
fn test_detached_controller_ignores_messages() {
    let document = load_page(HELP_PAGE);
    let mut controller =
        FrameController::start_with(ViewerConfig::default()).expect("Should start controller");
    controller.detach();

    dispatch_message(&own_origin(), &FrameMessage::topic_nav("ru/page1.html"));
    assert!(iframe(&document, "contentframe").src().ends_with("en/index.html"));
}

#[wasm_bindgen_test]
fn test_toc_relay_wires_toc_anchors_only() {
    load_page(
        r#"
        <a class="toc1" href="en/start.html">Start</a>
        <a class="toc2" href="en/install.html">Install</a>
        <a class="TopMenu" href="about_us.html">About</a>
        "#,
    );
    let mut relay =
        TocRelay::install_with(UNREACHABLE_ORIGIN.to_string()).expect("Should install relay");
    assert_eq!(relay.count(), 2);
    relay.detach();
}

#[wasm_bindgen_test]
fn test_toc_click_is_not_followed() {
    let document = load_page(r#"<a id="topic" class="toc2" href="de/page3.html">Page 3</a>"#);
    let mut relay =
        TocRelay::install_with(UNREACHABLE_ORIGIN.to_string()).expect("Should install relay");

    assert!(click_cancelled(&document, "topic"));

    relay.detach();
    assert!(!click_cancelled(&document, "topic"));
}

#[wasm_bindgen_test]
fn test_dropped_relay_keeps_relaying() {
    let document = load_page(r#"<a id="topic" class="toc1" href="de/page4.html">Page 4</a>"#);
    let relay =
        TocRelay::install_with(UNREACHABLE_ORIGIN.to_string()).expect("Should install relay");
    drop(relay);

    assert!(click_cancelled(&document, "topic"));
}

#[wasm_bindgen_test]
async fn test_toc_click_posts_topic_nav_to_parent() {
    let document = load_page(r#"<a id="topic" class="toc2" href="de/page5.html">Page 5</a>"#);
    let window = web_sys::window().unwrap();
    // The runner page is its own parent.
    let parent = window.parent().unwrap().unwrap_or_else(|| window.clone());

    let mut resolve = None;
    let received = js_sys::Promise::new(&mut |res, _rej| resolve = Some(res));
    let resolve = resolve.unwrap();
    let on_message = Closure::<dyn FnMut(MessageEvent)>::new(move |event: MessageEvent| {
        resolve.call1(&JsValue::UNDEFINED, &event.data()).unwrap();
    });
    parent
        .add_event_listener_with_callback("message", on_message.as_ref().unchecked_ref())
        .unwrap();

    let mut relay = TocRelay::install_with("*".to_string()).expect("Should install relay");
    let anchor = document
        .get_element_by_id("topic")
        .unwrap()
        .dyn_into::<HtmlAnchorElement>()
        .unwrap();
    anchor.click();

    let data = JsFuture::from(received).await.unwrap();
    parent
        .remove_event_listener_with_callback("message", on_message.as_ref().unchecked_ref())
        .unwrap();
    relay.detach();

    let message: serde_json::Value = serde_wasm_bindgen::from_value(data).unwrap();
    assert_eq!(message, json!({ "type": "topicNav", "topic": anchor.href() }));
    assert!(anchor.href().ends_with("de/page5.html"));
}
