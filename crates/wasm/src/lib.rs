//! WebAssembly bindings for pagenav.
//!
//! Runs the page navigator in the browser: highlights the navigation link of
//! the section being read, smooth-scrolls to anchors on click, and shows a
//! back-to-top control once the reader has scrolled far enough.
//!
//! ## Module Structure
//!
//! - [`dom`] - `DomHost`, the `PageHost` implementation over `web_sys::Document`
//! - [`mount`] - listener wiring and the `PageNav` handle
//! - [`error`] - Error types with JavaScript interop
//!
//! # Example
//!
//! With the default `auto-mount` feature nothing needs to be called: the
//! navigator mounts with the default configuration once the document is ready.
//! To configure it, call `mountPageNav`; the configured navigator takes over
//! from the default one:
//!
//! ```javascript
//! import init, { mountPageNav } from '@pagenav/wasm';
//!
//! await init();
//!
//! const nav = mountPageNav({
//!   headerOffset: 80,
//!   selectors: { navLinks: '.menu a', backToTop: '.to-top' },
//! });
//! console.log(nav.activeSection());
//! ```

pub mod dom;
mod error;
mod mount;

pub use dom::DomHost;
pub use error::{ErrorCode, PageNavError};
pub use mount::{PageNav, attach};

use pagenav_core::NavigatorConfig;
use wasm_bindgen::prelude::*;

/// Initialize the WASM module.
///
/// Sets up panic hooks for better error messages in the browser console and,
/// with `auto-mount`, mounts the default navigator once the DOM is ready.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();

    #[cfg(feature = "console-logging")]
    {
        console_log::init_with_level(log::Level::Debug).ok();
    }

    #[cfg(feature = "auto-mount")]
    auto::mount_when_ready();
}

/// Mount a navigator on the current page.
///
/// `config` is an optional plain object (see `NavigatorConfig`); missing
/// fields take their defaults. The new navigator replaces any navigator
/// already on the page, including the one mounted at load time.
#[wasm_bindgen(js_name = mountPageNav)]
pub fn mount_page_nav(config: JsValue) -> Result<PageNav, JsValue> {
    let config: NavigatorConfig = if config.is_undefined() || config.is_null() {
        NavigatorConfig::default()
    } else {
        serde_wasm_bindgen::from_value(config).map_err(PageNavError::from)?
    };
    Ok(attach(config)?)
}

/// Get the version of the pagenav-wasm library.
#[wasm_bindgen(js_name = getVersion)]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(feature = "auto-mount")]
mod auto {
    use crate::mount::{attach, is_mounted};
    use log::{debug, error};
    use pagenav_core::NavigatorConfig;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;

    pub(crate) fn mount_when_ready() {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        if document.ready_state() != "loading" {
            mount_default();
            return;
        }

        let callback = Closure::once_into_js(mount_default);
        if let Err(e) = document
            .add_event_listener_with_callback("DOMContentLoaded", callback.unchecked_ref())
        {
            error!(
                "Could not wait for DOMContentLoaded: {}",
                crate::dom::js_message(&e)
            );
        }
    }

    fn mount_default() {
        if is_mounted() {
            debug!("A navigator was mounted before the document was ready; skipping auto-mount");
            return;
        }
        // The page keeps the navigator after the handle goes away.
        if let Err(e) = attach(NavigatorConfig::default()) {
            error!("Failed to mount page navigator: {e}");
        }
    }
}
