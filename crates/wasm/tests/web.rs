//! WebAssembly integration tests.
//!
//! These tests run in a headless browser using wasm-bindgen-test.
//!
//! Run with: wasm-pack test --headless --chrome crates/wasm

#![cfg(target_arch = "wasm32")]

use pagenav_core::NavigatorConfig;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, HtmlElement, Window};

wasm_bindgen_test_configure!(run_in_browser);

const PAGE: &str = r##"
<nav>
  <a id="link-home" href="#home">Home</a>
  <a id="link-about" href="#about">About</a>
  <a id="link-gone" href="#gone">Gone</a>
</nav>
<section id="home" style="height: 1200px">Home</section>
<section id="about" style="height: 1200px">About</section>
<button id="back-to-top">Top</button>
<div style="height: 1000px"></div>
"##;

const WRAPPED_PAGE: &str = r##"
<nav>
  <a id="link-intro" href="#intro">Intro</a>
</nav>
<main style="position: relative; margin-top: 600px">
  <section id="intro" style="height: 1200px">Intro</section>
</main>
<div style="height: 2000px"></div>
"##;

fn document() -> Document {
    window().document().unwrap()
}

fn load(html: &str) -> Document {
    window().scroll_to_with_x_and_y(0.0, 0.0);
    let document = document();
    document.body().unwrap().set_inner_html(html);
    document
}

fn load_page() -> Document {
    load(PAGE)
}

fn window() -> Window {
    web_sys::window().unwrap()
}

async fn sleep(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _| {
        window()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
            .unwrap();
    });
    JsFuture::from(promise).await.unwrap();
}

fn has_class(document: &Document, id: &str, class: &str) -> bool {
    document
        .get_element_by_id(id)
        .unwrap()
        .class_list()
        .contains(class)
}

fn click(document: &Document, id: &str) {
    document
        .get_element_by_id(id)
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap()
        .click();
}

/// Test that the module initializes correctly.
#[wasm_bindgen_test]
fn test_init() {
    let version = pagenav_wasm::get_version();
    assert!(!version.is_empty());
}

#[wasm_bindgen_test]
fn test_mount_highlights_first_section() {
    let document = load_page();
    let nav = pagenav_wasm::mount_page_nav(JsValue::UNDEFINED).expect("Should mount");

    assert_eq!(nav.link_count(), 3);
    assert_eq!(nav.active_section().as_deref(), Some("home"));
    assert!(has_class(&document, "link-home", "active"));
    assert!(!has_class(&document, "link-about", "active"));
    assert!(!has_class(&document, "back-to-top", "visible"));
    nav.unmount();
}

#[wasm_bindgen_test]
fn test_link_click_prevents_default_navigation() {
    let document = load_page();
    let nav = pagenav_wasm::attach(NavigatorConfig::default()).expect("Should mount");
    let location = window().location();
    let before = location.hash().unwrap();

    click(&document, "link-home");
    click(&document, "link-gone");

    assert_eq!(location.hash().unwrap(), before);
    nav.unmount();
}

#[wasm_bindgen_test]
fn test_custom_config_object() {
    let document = load_page();
    let config = js_sys::JSON::parse(r#"{ "activeClass": "current" }"#).unwrap();
    let nav = pagenav_wasm::mount_page_nav(config).expect("Should mount");

    assert!(has_class(&document, "link-home", "current"));
    assert!(!has_class(&document, "link-home", "active"));
    nav.unmount();
}

#[wasm_bindgen_test]
fn test_invalid_config_rejected() {
    load_page();
    let config = js_sys::JSON::parse(r#"{ "headerOffset": -10 }"#).unwrap();
    assert!(pagenav_wasm::mount_page_nav(config).is_err());
}

#[wasm_bindgen_test]
fn test_invalid_selector_rejected() {
    load_page();
    let config = NavigatorConfig {
        selectors: pagenav_core::SelectorConfig {
            nav_links: "nav a[".to_string(),
            ..Default::default()
        },
        ..Default::default()
    };
    let err = pagenav_wasm::attach(config).err().expect("Should fail");
    assert_eq!(err.code(), pagenav_wasm::ErrorCode::Selector);
}

#[wasm_bindgen_test]
fn test_mount_replaces_existing_navigator() {
    let document = load_page();
    let default_nav = pagenav_wasm::attach(NavigatorConfig::default()).expect("Should mount");
    assert!(has_class(&document, "link-home", "active"));

    let config = js_sys::JSON::parse(r#"{ "activeClass": "current" }"#).unwrap();
    let nav = pagenav_wasm::mount_page_nav(config).expect("Should mount");

    assert!(!default_nav.is_mounted());
    assert_eq!(default_nav.link_count(), 0);
    assert!(nav.is_mounted());
    assert!(has_class(&document, "link-home", "current"));
    assert!(!has_class(&document, "link-home", "active"));

    window().scroll_to_with_x_and_y(0.0, 1300.0);
    assert_eq!(nav.refresh().as_deref(), Some("about"));
    assert!(has_class(&document, "link-about", "current"));
    assert!(!has_class(&document, "link-about", "active"));
    assert!(!has_class(&document, "link-home", "current"));
    nav.unmount();
}

#[wasm_bindgen_test]
fn test_unmount_clears_markers() {
    let document = load_page();
    let nav = pagenav_wasm::attach(NavigatorConfig::default()).expect("Should mount");
    assert!(has_class(&document, "link-home", "active"));

    nav.unmount();

    assert!(!has_class(&document, "link-home", "active"));
}

#[wasm_bindgen_test]
fn test_sections_measured_from_document_top() {
    let document = load(WRAPPED_PAGE);
    let nav = pagenav_wasm::attach(NavigatorConfig::default()).expect("Should mount");

    // The section sits 600px down inside a positioned wrapper.
    assert_eq!(nav.active_section(), None);
    assert!(!has_class(&document, "link-intro", "active"));

    window().scroll_to_with_x_and_y(0.0, 600.0);
    assert_eq!(nav.refresh().as_deref(), Some("intro"));
    assert!(has_class(&document, "link-intro", "active"));
    nav.unmount();
}

#[wasm_bindgen_test]
fn test_scroll_moves_highlight_and_back_to_top() {
    let document = load_page();
    let nav = pagenav_wasm::attach(NavigatorConfig::default()).expect("Should mount");

    window().scroll_to_with_x_and_y(0.0, 1300.0);
    assert_eq!(nav.refresh().as_deref(), Some("about"));
    assert!(has_class(&document, "link-about", "active"));
    assert!(!has_class(&document, "link-home", "active"));
    assert!(has_class(&document, "back-to-top", "visible"));

    window().scroll_to_with_x_and_y(0.0, 200.0);
    assert_eq!(nav.refresh().as_deref(), Some("home"));
    assert!(has_class(&document, "link-home", "active"));
    assert!(!has_class(&document, "back-to-top", "visible"));
    nav.unmount();
}

#[wasm_bindgen_test]
async fn test_back_to_top_click_scrolls_up() {
    let document = load_page();
    let nav = pagenav_wasm::attach(NavigatorConfig::default()).expect("Should mount");
    let location = window().location();
    let before = location.hash().unwrap();

    window().scroll_to_with_x_and_y(0.0, 1300.0);
    nav.refresh();
    assert!(has_class(&document, "back-to-top", "visible"));

    click(&document, "back-to-top");
    assert_eq!(location.hash().unwrap(), before);

    sleep(1500).await;
    assert!(window().scroll_y().unwrap() < 1300.0);
    nav.unmount();
}
