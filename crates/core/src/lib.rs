//! # pagenav-core
//!
//! Platform-agnostic page navigation behavior:
//! - **active**: active-section selection and back-to-top visibility
//! - **navigator**: `PageNavigator`, which applies both to a page and handles clicks
//! - **config**: tunables (header offset, thresholds, class names, selectors)
//! - **error**: setup errors
//!
//! ## Design Principle
//!
//! This crate has **no platform dependencies**. The document is reached
//! through the `PageHost` trait; the browser binding lives in `pagenav-wasm`
//! and an in-memory page ships with `pagenav-traits`.

pub use pagenav_traits as traits;
pub use pagenav_types as types;

pub mod active;
pub mod config;
pub mod error;
pub mod navigator;

pub use active::{active_section, back_to_top_visible};
pub use config::{NavigatorConfig, SelectorConfig};
pub use error::NavigatorError;
pub use navigator::{NavigationState, PageNavigator};
