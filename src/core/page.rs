//! Opaque page identifiers.
//!
//! A page is nothing more than an immutable text label. Equality is exact
//! string equality - no case normalization, no trimming.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier for a navigable location.
///
/// Pages are immutable values; the navigator never inspects their contents
/// beyond comparing them for exact equality. Names may contain spaces and
/// are preserved verbatim.
///
/// # Example
///
/// ```rust
/// use waypoint::core::Page;
///
/// let page = Page::from("About Us");
/// assert_eq!(page.name(), "About Us");
///
/// // Equality is exact: no case folding, no trimming.
/// assert_ne!(Page::from("about us"), Page::from("About Us"));
/// assert_ne!(Page::from("Home "), Page::home());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Page(String);

impl Page {
    /// The page every session starts on.
    ///
    /// # Example
    ///
    /// ```rust
    /// use waypoint::core::Page;
    ///
    /// assert_eq!(Page::home().name(), "Home");
    /// ```
    pub fn home() -> Self {
        Page("Home".to_string())
    }

    /// Get the page's name for display/logging.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Page {
    fn from(name: &str) -> Self {
        Page(name.to_string())
    }
}

impl From<String> for Page {
    fn from(name: String) -> Self {
        Page(name)
    }
}

impl AsRef<str> for Page {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_is_named_home() {
        assert_eq!(Page::home().name(), "Home");
        assert_eq!(Page::home(), Page::from("Home"));
    }

    #[test]
    fn equality_is_exact() {
        assert_eq!(Page::from("Gallery"), Page::from("Gallery"));
        assert_ne!(Page::from("gallery"), Page::from("Gallery"));
        assert_ne!(Page::from(" Gallery"), Page::from("Gallery"));
        assert_ne!(Page::from("Gallery "), Page::from("Gallery"));
    }

    #[test]
    fn names_with_spaces_are_preserved_verbatim() {
        let page = Page::from("About  Us");
        assert_eq!(page.name(), "About  Us");
    }

    #[test]
    fn display_matches_name() {
        let page = Page::from("Contact");
        assert_eq!(page.to_string(), "Contact");
    }

    #[test]
    fn page_serializes_as_plain_string() {
        let page = Page::from("About Us");
        let json = serde_json::to_string(&page).unwrap();
        assert_eq!(json, "\"About Us\"");

        let deserialized: Page = serde_json::from_str(&json).unwrap();
        assert_eq!(page, deserialized);
    }
}
