//! PageHost trait for abstracting the live document.
//!
//! The navigator only reads layout offsets and attributes and writes
//! presentational class markers; everything else (querying, event delivery,
//! scroll animation) belongs to the host.

use pagenav_types::ScrollState;
use std::fmt::Debug;
use thiserror::Error;

/// Error type for host setup failures.
///
/// Behavior on a mounted page never fails; these only surface while the host
/// itself is being acquired or wired up.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HostError {
    #[error("No global window is available")]
    NoWindow,

    #[error("Window has no document")]
    NoDocument,

    #[error("Invalid selector '{selector}': {message}")]
    Query { selector: String, message: String },

    #[error("Failed to register '{event}' listener: {message}")]
    Listener { event: String, message: String },
}

/// Where a smooth scroll should end up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollTarget<'a, E> {
    /// Bring the element's top edge to the viewport's top edge.
    Element(&'a E),
    /// Scroll to an absolute vertical offset.
    Offset(f64),
}

/// The document structure and scroll primitive a navigator runs against.
///
/// # Implementations
///
/// - `InMemoryPage`: deterministic page model (always available)
/// - `DomHost`: the browser document, in `pagenav-wasm`
pub trait PageHost {
    /// A handle to one element of the page.
    type Element: Clone + Debug;

    /// All navigation link elements, in document order.
    fn nav_links(&self) -> Vec<Self::Element>;

    /// All section elements, in document order.
    fn sections(&self) -> Vec<Self::Element>;

    /// The back-to-top control, if the page has one.
    fn back_to_top(&self) -> Option<Self::Element>;

    /// Reads an attribute from an element.
    fn attribute(&self, element: &Self::Element, name: &str) -> Option<String>;

    /// The element's current vertical offset from the top of the document.
    fn offset_top(&self, element: &Self::Element) -> f64;

    /// Resolves an identifier to an element (`getElementById` semantics).
    fn element_by_id(&self, id: &str) -> Option<Self::Element>;

    /// The current vertical scroll position.
    fn scroll_offset(&self) -> ScrollState;

    /// Adds (`enabled == true`) or removes a class on an element.
    fn set_class(&self, element: &Self::Element, class: &str, enabled: bool);

    /// Requests a smooth scroll. Fire-and-forget.
    fn smooth_scroll(&self, target: ScrollTarget<'_, Self::Element>);

    /// Returns a human-readable name for this host (for logging/debugging).
    fn name(&self) -> &'static str;
}

impl<T: PageHost + ?Sized> PageHost for &T {
    type Element = T::Element;

    fn nav_links(&self) -> Vec<Self::Element> {
        (**self).nav_links()
    }

    fn sections(&self) -> Vec<Self::Element> {
        (**self).sections()
    }

    fn back_to_top(&self) -> Option<Self::Element> {
        (**self).back_to_top()
    }

    fn attribute(&self, element: &Self::Element, name: &str) -> Option<String> {
        (**self).attribute(element, name)
    }

    fn offset_top(&self, element: &Self::Element) -> f64 {
        (**self).offset_top(element)
    }

    fn element_by_id(&self, id: &str) -> Option<Self::Element> {
        (**self).element_by_id(id)
    }

    fn scroll_offset(&self) -> ScrollState {
        (**self).scroll_offset()
    }

    fn set_class(&self, element: &Self::Element, class: &str, enabled: bool) {
        (**self).set_class(element, class, enabled)
    }

    fn smooth_scroll(&self, target: ScrollTarget<'_, Self::Element>) {
        (**self).smooth_scroll(target)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}
