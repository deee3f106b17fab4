//! Pure filter/search evaluation over the article collection.
//!
//! [`apply`] derives a filtered, ordered view without mutating its input.
//! Facet predicates combine conjunctively; the free-text query matches
//! case-insensitively as a substring over title, summary, author, and tag
//! names. These operations never fail — malformed filter state is
//! normalized to "no constraint" at the DTO boundary before it gets here.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{Article, ArticleStatus};

/// Explicit sort request. Absent = keep the source collection's order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Newest saves first.
    SavedAt,
    /// Title ascending, case-insensitive.
    Title,
}

impl SortKey {
    /// Lenient parse: unknown values mean "no explicit sort".
    pub fn parse_lenient(value: &str) -> Option<Self> {
        match value {
            "saved_at" => Some(SortKey::SavedAt),
            "title" => Some(SortKey::Title),
            _ => None,
        }
    }
}

/// Facet constraints applied conjunctively.
///
/// Every facet is optional; an unset facet passes everything through. A
/// default spec plus an empty query reproduces the source collection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSpec {
    /// Exact status match.
    pub status: Option<ArticleStatus>,
    /// Exact category match.
    pub category_id: Option<String>,
    /// `Some(true)` keeps only favorites; `Some(false)` and `None` are both
    /// "no constraint" — the UI toggle is on or absent, never inverted.
    pub favorite: Option<bool>,
    /// Explicit re-sort of the derived view.
    pub sort: Option<SortKey>,
}

impl FilterSpec {
    /// Whether this spec constrains nothing and requests no sort.
    pub fn is_unconstrained(&self) -> bool {
        *self == FilterSpec::default()
    }
}

/// Derives the visible subset of `articles` for a filter spec and search
/// query.
///
/// Returns a new sequence; the input collection is never mutated. Relative
/// source order is preserved (stable filter) unless `spec.sort` is set. An
/// empty result is a valid outcome.
pub fn apply(articles: &[Article], spec: &FilterSpec, query: &str) -> Vec<Article> {
    let needle = query.trim().to_lowercase();

    let mut result: Vec<Article> = articles
        .iter()
        .filter(|article| matches_facets(article, spec))
        .filter(|article| needle.is_empty() || matches_query(article, &needle))
        .cloned()
        .collect();

    match spec.sort {
        None => {}
        Some(SortKey::SavedAt) => result.sort_by(|a, b| b.saved_at.cmp(&a.saved_at)),
        Some(SortKey::Title) => {
            result.sort_by(|a, b| a.title.to_lowercase().cmp(&b.title.to_lowercase()))
        }
    }

    result
}

fn matches_facets(article: &Article, spec: &FilterSpec) -> bool {
    if let Some(status) = spec.status
        && article.status != status
    {
        return false;
    }

    if let Some(category_id) = &spec.category_id
        && article.category_id.as_deref() != Some(category_id.as_str())
    {
        return false;
    }

    if spec.favorite == Some(true) && !article.is_favorite {
        return false;
    }

    true
}

/// Case-insensitive substring match over the searchable fields. Absent
/// optional fields simply do not match; they are never an error.
fn matches_query(article: &Article, needle: &str) -> bool {
    let field_contains = |field: &str| field.to_lowercase().contains(needle);

    field_contains(&article.title)
        || article.summary.as_deref().is_some_and(field_contains)
        || article.author.as_deref().is_some_and(field_contains)
        || article.tags.iter().any(|tag| field_contains(tag))
}
