use crate::error::NavigatorError;
use serde::{Deserialize, Serialize};

/// Lookahead added to the scroll offset so a section counts as active a
/// little before it reaches the top of the viewport (fixed header height).
pub const DEFAULT_HEADER_OFFSET: f64 = 120.0;

/// Scroll depth past which the back-to-top control is shown.
pub const DEFAULT_BACK_TO_TOP_THRESHOLD: f64 = 320.0;

pub const DEFAULT_ACTIVE_CLASS: &str = "active";
pub const DEFAULT_VISIBLE_CLASS: &str = "visible";

/// Queries a DOM host uses to find its elements.
///
/// Hosts that build their page directly (like `InMemoryPage`) ignore these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SelectorConfig {
    pub nav_links: String,
    pub sections: String,
    pub back_to_top: String,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            nav_links: "nav a[href^='#']".to_string(),
            sections: "section[id]".to_string(),
            back_to_top: "#back-to-top".to_string(),
        }
    }
}

/// Tunables for a [`PageNavigator`](crate::PageNavigator).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NavigatorConfig {
    pub header_offset: f64,
    pub back_to_top_threshold: f64,
    pub active_class: String,
    pub visible_class: String,
    pub selectors: SelectorConfig,
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self {
            header_offset: DEFAULT_HEADER_OFFSET,
            back_to_top_threshold: DEFAULT_BACK_TO_TOP_THRESHOLD,
            active_class: DEFAULT_ACTIVE_CLASS.to_string(),
            visible_class: DEFAULT_VISIBLE_CLASS.to_string(),
            selectors: SelectorConfig::default(),
        }
    }
}

impl NavigatorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_header_offset(mut self, offset: f64) -> Self {
        self.header_offset = offset;
        self
    }

    pub fn with_back_to_top_threshold(mut self, threshold: f64) -> Self {
        self.back_to_top_threshold = threshold;
        self
    }

    pub fn with_active_class(mut self, class: impl Into<String>) -> Self {
        self.active_class = class.into();
        self
    }

    pub fn with_visible_class(mut self, class: impl Into<String>) -> Self {
        self.visible_class = class.into();
        self
    }

    pub fn with_selectors(mut self, selectors: SelectorConfig) -> Self {
        self.selectors = selectors;
        self
    }

    /// Checks that offsets are finite and non-negative and class names are usable.
    pub fn validate(&self) -> Result<(), NavigatorError> {
        check_distance("headerOffset", self.header_offset)?;
        check_distance("backToTopThreshold", self.back_to_top_threshold)?;
        check_class("activeClass", &self.active_class)?;
        check_class("visibleClass", &self.visible_class)?;
        Ok(())
    }
}

fn check_distance(field: &str, value: f64) -> Result<(), NavigatorError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(NavigatorError::InvalidConfig(format!(
            "{field} must be a finite, non-negative number (got {value})"
        )))
    }
}

fn check_class(field: &str, class: &str) -> Result<(), NavigatorError> {
    if class.is_empty() || class.chars().any(char::is_whitespace) {
        Err(NavigatorError::InvalidConfig(format!(
            "{field} must be a single non-empty class name (got {class:?})"
        )))
    } else {
        Ok(())
    }
}
