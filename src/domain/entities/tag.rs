//! Tag entity: a multi-valued label, unique by normalized name.

use serde::{Deserialize, Serialize};

/// A tag with its derived usage count.
///
/// Identity is the normalized name string; there is no separate tag id in
/// the core. `usage_count` is computed from the article collection on read,
/// never stored or manually incremented.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    pub name: String,
    pub usage_count: usize,
}

impl Tag {
    pub fn new(name: impl Into<String>, usage_count: usize) -> Self {
        Self {
            name: name.into(),
            usage_count,
        }
    }
}
