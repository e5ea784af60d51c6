//! Page layout files.
//!
//! A layout describes a page for the in-memory host: its navigation links,
//! its sections and their offsets, and whether it has a back-to-top control.
//!
//! ```json
//! {
//!   "config": { "headerOffset": 120 },
//!   "sections": [ { "id": "home", "top": 0 }, { "id": "about", "top": 800 } ],
//!   "links": [ "#home", "#about" ],
//!   "backToTop": true
//! }
//! ```

use crate::error::LayoutError;
use pagenav_core::NavigatorConfig;
use pagenav_traits::InMemoryPage;
use pagenav_types::Section;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageLayout {
    pub config: NavigatorConfig,
    pub sections: Vec<Section>,
    /// `href` of every navigation link, in document order.
    pub links: Vec<String>,
    pub back_to_top: bool,
    /// Scroll position when the page is loaded.
    pub initial_scroll: f64,
}

impl PageLayout {
    pub fn from_json(source: &str) -> Result<Self, LayoutError> {
        let layout: PageLayout = serde_json::from_str(source)?;
        layout.validate()?;
        Ok(layout)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LayoutError> {
        let source = fs::read_to_string(path)?;
        Self::from_json(&source)
    }

    /// Section ids must be non-empty and unique and tops finite and
    /// non-negative. The navigator config is validated as well.
    pub fn validate(&self) -> Result<(), LayoutError> {
        let mut seen = HashSet::new();
        for (index, section) in self.sections.iter().enumerate() {
            if section.id.is_empty() {
                return Err(LayoutError::EmptySectionId { index });
            }
            if !section.top.is_finite() || section.top < 0.0 {
                return Err(LayoutError::InvalidTop {
                    id: section.id.to_string(),
                    top: section.top,
                });
            }
            if !seen.insert(section.id.as_str()) {
                return Err(LayoutError::DuplicateSectionId(section.id.to_string()));
            }
        }
        self.config.validate()?;
        Ok(())
    }

    /// Builds the page: links first (they live in the header), then the
    /// sections, then the back-to-top control.
    pub fn build_page(&self) -> InMemoryPage {
        let page = InMemoryPage::new();
        for href in &self.links {
            page.add_nav_link(href);
        }
        for section in &self.sections {
            page.add_section(section.id.as_str(), section.top);
        }
        if self.back_to_top {
            page.add_back_to_top();
        }
        page.set_scroll_offset(self.initial_scroll);
        page
    }
}
