use crate::ids::SectionId;
use serde::{Deserialize, Serialize};

/// A page region with a stable identifier and its offset from the top of the document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub id: SectionId,
    pub top: f64,
}

impl Section {
    pub fn new(id: impl Into<SectionId>, top: f64) -> Self {
        Self { id: id.into(), top }
    }
}

/// A navigation entry. The "active" flag is never stored here; it is derived
/// from the scroll position every time it is needed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub href: String,
}

impl NavLink {
    pub fn new(href: impl Into<String>) -> Self {
        Self { href: href.into() }
    }

    /// The section identifier this link points at, if any.
    pub fn target(&self) -> Option<&str> {
        fragment(&self.href)
    }

    pub fn points_at(&self, id: &SectionId) -> bool {
        self.target().is_some_and(|t| id.matches_fragment(t))
    }
}

/// Extracts the fragment of an `href`: the text after the first `#`.
///
/// Returns `None` when there is no `#` or the fragment is empty, so `"#"`
/// (a common placeholder href) never resolves to a section.
pub fn fragment(href: &str) -> Option<&str> {
    let (_, frag) = href.split_once('#')?;
    if frag.is_empty() { None } else { Some(frag) }
}
