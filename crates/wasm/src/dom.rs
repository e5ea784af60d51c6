//! `PageHost` over the browser document.

use log::warn;
use pagenav_core::SelectorConfig;
use pagenav_traits::{HostError, PageHost, ScrollTarget};
use pagenav_types::ScrollState;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
    ScrollToOptions, Window,
};

/// The live DOM of the current page.
#[derive(Debug, Clone)]
pub struct DomHost {
    window: Window,
    document: Document,
    selectors: SelectorConfig,
}

impl DomHost {
    /// Binds to the global window and document and checks that every
    /// selector parses.
    pub fn new(selectors: SelectorConfig) -> Result<Self, HostError> {
        let window = web_sys::window().ok_or(HostError::NoWindow)?;
        let document = window.document().ok_or(HostError::NoDocument)?;

        for selector in [
            &selectors.nav_links,
            &selectors.sections,
            &selectors.back_to_top,
        ] {
            document
                .query_selector(selector)
                .map_err(|e| HostError::Query {
                    selector: selector.clone(),
                    message: js_message(&e),
                })?;
        }

        Ok(Self {
            window,
            document,
            selectors,
        })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    fn query_all(&self, selector: &str) -> Vec<Element> {
        let list = match self.document.query_selector_all(selector) {
            Ok(list) => list,
            Err(e) => {
                warn!("querySelectorAll({selector:?}) failed: {}", js_message(&e));
                return Vec::new();
            }
        };
        (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }
}

impl PageHost for DomHost {
    type Element = Element;

    fn nav_links(&self) -> Vec<Element> {
        self.query_all(&self.selectors.nav_links)
    }

    fn sections(&self) -> Vec<Element> {
        self.query_all(&self.selectors.sections)
    }

    fn back_to_top(&self) -> Option<Element> {
        self.document
            .query_selector(&self.selectors.back_to_top)
            .ok()
            .flatten()
    }

    fn attribute(&self, element: &Element, name: &str) -> Option<String> {
        element.get_attribute(name)
    }

    /// Distance from the top of the document. `offsetTop` is relative to the
    /// offset parent, so positioned wrappers would shift every section.
    fn offset_top(&self, element: &Element) -> f64 {
        let scroll_y = self.window.scroll_y().unwrap_or(0.0);
        element.get_bounding_client_rect().top() + scroll_y
    }

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn scroll_offset(&self) -> ScrollState {
        ScrollState::new(self.window.scroll_y().unwrap_or(0.0))
    }

    fn set_class(&self, element: &Element, class: &str, enabled: bool) {
        if let Err(e) = element.class_list().toggle_with_force(class, enabled) {
            warn!("Failed to toggle class {class:?}: {}", js_message(&e));
        }
    }

    fn smooth_scroll(&self, target: ScrollTarget<'_, Element>) {
        match target {
            ScrollTarget::Element(element) => {
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                options.set_block(ScrollLogicalPosition::Start);
                element.scroll_into_view_with_scroll_into_view_options(&options);
            }
            ScrollTarget::Offset(top) => {
                let options = ScrollToOptions::new();
                options.set_top(top);
                options.set_behavior(ScrollBehavior::Smooth);
                self.window.scroll_to_with_scroll_to_options(&options);
            }
        }
    }

    fn name(&self) -> &'static str {
        "DomHost"
    }
}

/// Best-effort text of a thrown JS value.
pub(crate) fn js_message(value: &wasm_bindgen::JsValue) -> String {
    value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{value:?}"))
}
