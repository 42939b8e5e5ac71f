//! Domain value types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A votable catalog entry.
///
/// `code` is the stable identifier (e.g. `:joy:`); `display` is an opaque
/// rendering payload, usually the Unicode glyph. Serialized as
/// `{"shortcode": ..., "unicode": ...}` both on the wire and in caches.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    #[serde(rename = "shortcode")]
    code: String,
    #[serde(rename = "unicode")]
    display: String,
}

impl Item {
    /// Creates a new item.
    ///
    /// # Example
    ///
    /// ```
    /// use emojivoto_core::Item;
    ///
    /// let item = Item::new(":doughnut:", "🍩");
    /// assert_eq!(item.code(), ":doughnut:");
    /// assert_eq!(item.display(), "🍩");
    /// ```
    pub fn new(code: impl Into<String>, display: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            display: display.into(),
        }
    }

    /// Returns the item code.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Returns the rendering payload.
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Serializes the item to its JSON payload.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Parses an item from a JSON payload produced by [`Item::to_json`].
    pub fn from_json(payload: &str) -> serde_json::Result<Self> {
        serde_json::from_str(payload)
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.display, self.code)
    }
}

/// Vote total for one code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VoteCount {
    /// The voted code
    #[serde(rename = "shortcode")]
    pub code: String,

    /// Number of votes recorded for `code`
    #[serde(rename = "votes")]
    pub count: u64,
}

impl VoteCount {
    /// Creates a new vote count.
    pub fn new(code: impl Into<String>, count: u64) -> Self {
        Self {
            code: code.into(),
            count,
        }
    }
}

impl fmt::Display for VoteCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.code, self.count)
    }
}
