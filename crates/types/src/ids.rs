//! Newtype wrapper for section identifiers
//!
//! Keeps section ids from being mixed up with raw `href` strings, which carry
//! a leading `#` and possibly a path.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

/// The identifier of a page section (the value of its `id` attribute)
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionId(Arc<str>);

impl SectionId {
    /// Creates a new SectionId from a string
    pub fn new(id: impl Into<Arc<str>>) -> Self {
        Self(id.into())
    }

    /// Returns the string representation of this section ID
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether a fragment reference (without its `#`) points at this section.
    pub fn matches_fragment(&self, fragment: &str) -> bool {
        !fragment.is_empty() && *self.0 == *fragment
    }
}

impl From<String> for SectionId {
    fn from(s: String) -> Self {
        Self(s.into())
    }
}

impl From<&str> for SectionId {
    fn from(s: &str) -> Self {
        Self(s.into())
    }
}

impl AsRef<str> for SectionId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_id_matches_fragment() {
        let id = SectionId::new("about");
        assert!(id.matches_fragment("about"));
        assert!(!id.matches_fragment("About"));
        assert!(!id.matches_fragment("#about"));
    }

    #[test]
    fn test_empty_id_never_matches() {
        let id = SectionId::new("");
        assert!(id.is_empty());
        assert!(!id.matches_fragment(""));
    }

    #[test]
    fn test_section_id_serde_transparent() {
        let id: SectionId = serde_json::from_str("\"contact\"").unwrap();
        assert_eq!(id.as_str(), "contact");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"contact\"");
    }
}
