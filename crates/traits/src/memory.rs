//! An in-memory page.
//!
//! Elements are stored in document order and must be pre-populated before a
//! navigator is mounted. Smooth scrolls are recorded and complete instantly;
//! no scroll event is dispatched, so callers replay `handle_scroll` themselves
//! the way a browser would after the animation.

use crate::host::{PageHost, ScrollTarget};
use pagenav_types::ScrollState;
use std::cell::RefCell;
use std::collections::BTreeSet;

/// A handle to an element of an [`InMemoryPage`] (its index in document order).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementHandle(usize);

/// What part an element plays on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementRole {
    NavLink,
    Section,
    BackToTop,
    Other,
}

/// A recorded smooth-scroll request.
#[derive(Debug, Clone, PartialEq)]
pub enum ScrollRequest {
    Element(ElementHandle),
    Offset(f64),
}

#[derive(Debug, Clone)]
struct PageElement {
    role: ElementRole,
    id: Option<String>,
    href: Option<String>,
    top: f64,
    classes: BTreeSet<String>,
}

#[derive(Debug, Default)]
struct PageState {
    elements: Vec<PageElement>,
    scroll: ScrollState,
    requests: Vec<ScrollRequest>,
}

/// A deterministic page model implementing [`PageHost`].
///
/// Single-threaded like the browser document it stands in for.
#[derive(Debug, Default)]
pub struct InMemoryPage {
    state: RefCell<PageState>,
}

impl InMemoryPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an element and returns its handle.
    pub fn add_element(
        &self,
        role: ElementRole,
        id: Option<&str>,
        href: Option<&str>,
        top: f64,
    ) -> ElementHandle {
        let mut state = self.state.borrow_mut();
        state.elements.push(PageElement {
            role,
            id: id.map(str::to_string),
            href: href.map(str::to_string),
            top,
            classes: BTreeSet::new(),
        });
        ElementHandle(state.elements.len() - 1)
    }

    pub fn add_section(&self, id: &str, top: f64) -> ElementHandle {
        self.add_element(ElementRole::Section, Some(id), None, top)
    }

    /// Adds a navigation link. Links sit in the fixed header, so their own
    /// offset is irrelevant and recorded as zero.
    pub fn add_nav_link(&self, href: &str) -> ElementHandle {
        self.add_element(ElementRole::NavLink, None, Some(href), 0.0)
    }

    pub fn add_back_to_top(&self) -> ElementHandle {
        self.add_element(ElementRole::BackToTop, Some("back-to-top"), None, 0.0)
    }

    /// Moves an element, e.g. to simulate content loading above it.
    pub fn set_top(&self, element: ElementHandle, top: f64) {
        if let Some(el) = self.state.borrow_mut().elements.get_mut(element.0) {
            el.top = top;
        }
    }

    /// Sets the scroll position (clamped to non-negative).
    pub fn set_scroll_offset(&self, offset: f64) {
        self.state.borrow_mut().scroll = ScrollState::new(offset);
    }

    pub fn has_class(&self, element: ElementHandle, class: &str) -> bool {
        self.state
            .borrow()
            .elements
            .get(element.0)
            .is_some_and(|el| el.classes.contains(class))
    }

    /// The classes currently set on an element, sorted.
    pub fn classes(&self, element: ElementHandle) -> Vec<String> {
        self.state
            .borrow()
            .elements
            .get(element.0)
            .map(|el| el.classes.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// All smooth-scroll requests made so far, oldest first.
    pub fn scroll_requests(&self) -> Vec<ScrollRequest> {
        self.state.borrow().requests.clone()
    }

    /// Drains the recorded smooth-scroll requests.
    pub fn take_scroll_requests(&self) -> Vec<ScrollRequest> {
        std::mem::take(&mut self.state.borrow_mut().requests)
    }

    pub fn len(&self) -> usize {
        self.state.borrow().elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.borrow().elements.is_empty()
    }

    fn with_role(&self, role: ElementRole) -> Vec<ElementHandle> {
        self.state
            .borrow()
            .elements
            .iter()
            .enumerate()
            .filter(|(_, el)| el.role == role)
            .map(|(i, _)| ElementHandle(i))
            .collect()
    }
}

impl PageHost for InMemoryPage {
    type Element = ElementHandle;

    fn nav_links(&self) -> Vec<ElementHandle> {
        self.with_role(ElementRole::NavLink)
    }

    fn sections(&self) -> Vec<ElementHandle> {
        self.with_role(ElementRole::Section)
    }

    fn back_to_top(&self) -> Option<ElementHandle> {
        self.with_role(ElementRole::BackToTop).into_iter().next()
    }

    fn attribute(&self, element: &ElementHandle, name: &str) -> Option<String> {
        let state = self.state.borrow();
        let el = state.elements.get(element.0)?;
        match name {
            "id" => el.id.clone(),
            "href" => el.href.clone(),
            "class" => Some(el.classes.iter().cloned().collect::<Vec<_>>().join(" ")),
            _ => None,
        }
    }

    fn offset_top(&self, element: &ElementHandle) -> f64 {
        self.state
            .borrow()
            .elements
            .get(element.0)
            .map(|el| el.top)
            .unwrap_or(0.0)
    }

    fn element_by_id(&self, id: &str) -> Option<ElementHandle> {
        self.state
            .borrow()
            .elements
            .iter()
            .position(|el| el.id.as_deref() == Some(id))
            .map(ElementHandle)
    }

    fn scroll_offset(&self) -> ScrollState {
        self.state.borrow().scroll
    }

    fn set_class(&self, element: &ElementHandle, class: &str, enabled: bool) {
        let mut state = self.state.borrow_mut();
        if let Some(el) = state.elements.get_mut(element.0) {
            if enabled {
                el.classes.insert(class.to_string());
            } else {
                el.classes.remove(class);
            }
        }
    }

    fn smooth_scroll(&self, target: ScrollTarget<'_, ElementHandle>) {
        let mut state = self.state.borrow_mut();
        let (request, offset) = match target {
            ScrollTarget::Element(handle) => {
                let top = state.elements.get(handle.0).map(|el| el.top).unwrap_or(0.0);
                (ScrollRequest::Element(*handle), top)
            }
            ScrollTarget::Offset(offset) => (ScrollRequest::Offset(offset), offset),
        };
        state.requests.push(request);
        state.scroll = ScrollState::new(offset);
    }

    fn name(&self) -> &'static str {
        "InMemoryPage"
    }
}
