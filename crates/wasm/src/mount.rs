//! Event wiring: connects a `PageNavigator` over the DOM to its click and
//! scroll listeners.

use crate::dom::{DomHost, js_message};
use crate::error::PageNavError;
use log::debug;
use pagenav_core::{NavigatorConfig, PageNavigator};
use pagenav_traits::HostError;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Event, EventTarget};

/// A registered event listener. Dropping it removes the listener before the
/// closure is freed.
struct Listener {
    target: EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

impl Listener {
    fn attach(
        target: &EventTarget,
        event: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<Self, HostError> {
        let closure = Closure::<dyn FnMut(Event)>::new(handler);
        target
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .map_err(|e| HostError::Listener {
                event: event.to_string(),
                message: js_message(&e),
            })?;
        Ok(Self {
            target: target.clone(),
            event,
            closure,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        self.target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref())
            .ok();
    }
}

/// A navigator together with the listeners it registered. Dropping it
/// removes the listeners and the markers it set.
struct Mounted {
    navigator: Rc<PageNavigator<DomHost>>,
    listeners: Vec<Listener>,
}

impl Drop for Mounted {
    fn drop(&mut self) {
        debug!("Unmounting navigator ({} listeners)", self.listeners.len());
        self.navigator.clear_markers();
    }
}

type Slot = Rc<RefCell<Option<Mounted>>>;

thread_local! {
    // The navigator that owns the page. At most one is mounted at a time.
    static CURRENT: RefCell<Option<Slot>> = const { RefCell::new(None) };
}

/// Whether a navigator currently owns the page.
#[cfg(feature = "auto-mount")]
pub(crate) fn is_mounted() -> bool {
    CURRENT.with(|current| current.borrow().is_some())
}

/// Handle to a navigator mounted on the current page.
///
/// The page has at most one navigator: mounting another one detaches this
/// one, after which the handle is inert. Listeners stay registered until
/// then or until `unmount()`, even if the handle itself is dropped.
#[wasm_bindgen]
pub struct PageNav {
    slot: Slot,
}

#[wasm_bindgen]
impl PageNav {
    /// Recomputes the active link and back-to-top visibility, e.g. after
    /// content above the fold changed height.
    #[wasm_bindgen]
    pub fn refresh(&self) -> Option<String> {
        self.slot.borrow().as_ref().and_then(|mounted| {
            mounted
                .navigator
                .handle_scroll()
                .active_section
                .map(|id| id.to_string())
        })
    }

    /// The id of the section currently considered active.
    #[wasm_bindgen(js_name = activeSection)]
    pub fn active_section(&self) -> Option<String> {
        self.slot
            .borrow()
            .as_ref()
            .and_then(|mounted| mounted.navigator.active_section())
            .map(|id| id.to_string())
    }

    /// Number of navigation links being tracked.
    #[wasm_bindgen(js_name = linkCount)]
    pub fn link_count(&self) -> usize {
        self.slot
            .borrow()
            .as_ref()
            .map_or(0, |mounted| mounted.navigator.links().len())
    }

    /// Whether this navigator still owns the page.
    #[wasm_bindgen(js_name = isMounted)]
    pub fn is_mounted(&self) -> bool {
        self.slot.borrow().is_some()
    }

    /// Removes every listener this navigator registered.
    #[wasm_bindgen]
    pub fn unmount(self) {
        CURRENT.with(|current| {
            let mut current = current.borrow_mut();
            if current
                .as_ref()
                .is_some_and(|slot| Rc::ptr_eq(slot, &self.slot))
            {
                *current = None;
            }
        });
        let mounted = self.slot.borrow_mut().take();
        drop(mounted);
    }
}

/// Mounts a navigator on the current document and registers its listeners:
/// one click listener per navigation link, one scroll listener on the window
/// and, if present, one click listener on the back-to-top control.
///
/// Replaces the navigator already mounted on the page, if any. When mounting
/// fails the previous navigator stays in place.
pub fn attach(config: NavigatorConfig) -> Result<PageNav, PageNavError> {
    let mounted = register(config)?;
    let navigator = Rc::clone(&mounted.navigator);
    let slot: Slot = Rc::new(RefCell::new(Some(mounted)));

    let previous = CURRENT.with(|current| current.borrow_mut().replace(Rc::clone(&slot)));
    if let Some(previous) = previous {
        let replaced = previous.borrow_mut().take();
        if replaced.is_some() {
            debug!("Replacing the navigator already mounted on this page");
        }
        drop(replaced);
        // The old navigator may have cleared classes the new one shares.
        navigator.handle_scroll();
    }

    Ok(PageNav { slot })
}

fn register(config: NavigatorConfig) -> Result<Mounted, PageNavError> {
    let host = DomHost::new(config.selectors.clone())?;
    let window: EventTarget = host.window().clone().into();
    let navigator = Rc::new(PageNavigator::mount(host, config)?);
    let mut listeners = Vec::with_capacity(navigator.links().len() + 2);

    for link in navigator.links() {
        let nav = Rc::clone(&navigator);
        let element = link.clone();
        listeners.push(Listener::attach(link, "click", move |event: Event| {
            event.prevent_default();
            nav.handle_link_click(&element);
        })?);
    }

    let nav = Rc::clone(&navigator);
    listeners.push(Listener::attach(&window, "scroll", move |_| {
        nav.handle_scroll();
    })?);

    if let Some(control) = navigator.back_to_top() {
        let nav = Rc::clone(&navigator);
        listeners.push(Listener::attach(control, "click", move |event: Event| {
            event.prevent_default();
            nav.handle_back_to_top_click();
        })?);
    }

    debug!("Registered {} listeners", listeners.len());
    Ok(Mounted {
        navigator,
        listeners,
    })
}
