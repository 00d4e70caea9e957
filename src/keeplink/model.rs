use serde::{Deserialize, Serialize};

/// A saved link.
///
/// There is no separate identifier: the `(name, url)` pair is the key, and
/// the serialized form is exactly `{"name": ..., "url": ...}` so the stored
/// blob stays a bare array of pairs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bookmark {
    pub name: String,
    pub url: String,
}

impl Bookmark {
    pub fn new(name: String, url: String) -> Self {
        Self { name, url }
    }

    /// Exact match on both fields.
    pub fn matches(&self, name: &str, url: &str) -> bool {
        self.name == name && self.url == url
    }
}
