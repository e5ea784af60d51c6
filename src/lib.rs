//! # pagenav
//!
//! Scroll-spy page navigation. The behavior itself lives in
//! [`pagenav_core::PageNavigator`]; this crate adds page layout files and a
//! simulator that replays scrolls and clicks against an in-memory page.
//! The browser binding is `pagenav-wasm`.

pub mod error;
pub mod layout;
pub mod simulator;

pub use error::LayoutError;
pub use layout::PageLayout;
pub use simulator::{SimEvent, SimStep, Simulator};

pub use pagenav_core::{
    NavigationState, NavigatorConfig, NavigatorError, PageNavigator, SelectorConfig,
    active_section, back_to_top_visible,
};
pub use pagenav_traits::{HostError, InMemoryPage, PageHost, ScrollRequest, ScrollTarget};
pub use pagenav_types::{NavLink, ScrollState, Section, SectionId};
