//! Lenient wire-to-spec mapping for filter parameters.
//!
//! Filter state is optional, additive UI state: malformed values normalize
//! to "no constraint" instead of failing the request.

use serde::Deserialize;

use crate::application::services::filter_engine::{FilterSpec, SortKey};
use crate::domain::entities::ArticleStatus;

/// Raw filter parameters as they arrive from the UI shell (query string or
/// JSON). Everything is a loosely typed option on purpose.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ArticleFilterParams {
    pub status: Option<String>,
    pub category_id: Option<String>,
    pub favorite: Option<String>,
    pub search: Option<String>,
    pub sort: Option<String>,
}

impl ArticleFilterParams {
    /// Normalizes into a [`FilterSpec`] plus the search query.
    ///
    /// Unknown status or sort values, and favorite values other than
    /// `"true"`/`"1"`, all degrade to no constraint. Never fails.
    pub fn into_spec(self) -> (FilterSpec, String) {
        let spec = FilterSpec {
            status: self
                .status
                .as_deref()
                .and_then(ArticleStatus::parse_lenient),
            category_id: self.category_id.filter(|id| !id.trim().is_empty()),
            favorite: self.favorite.as_deref().map(parse_bool_lenient),
            sort: self.sort.as_deref().and_then(SortKey::parse_lenient),
        };

        let search = self.search.map(|s| s.trim().to_string()).unwrap_or_default();

        (spec, search)
    }
}

fn parse_bool_lenient(value: &str) -> bool {
    matches!(value.trim(), "true" | "1")
}
