//! Category entity: a user-defined single-valued grouping for articles.

use serde::{Deserialize, Serialize};

/// A named grouping with display color and manual ordering.
///
/// Categories are supplied by an external source; the core never invents
/// them. `article_count` is intentionally absent from the stored entity —
/// it is derived by counting matching articles (see
/// [`CategoryWithCount`]) so the count can never drift from the collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    pub color: String,
    pub display_order: i32,
    #[serde(default)]
    pub is_default: bool,
}

/// A category paired with its derived article count, for filter surfaces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryWithCount {
    #[serde(flatten)]
    pub category: Category,
    pub article_count: usize,
}
