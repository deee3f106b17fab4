//! Article entity: one saved URL plus its metadata and reading state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::utils::site_name::site_name_of;

/// Reading state of a saved article.
///
/// A flat enum, not a workflow: any status can be set from any other.
/// Serialized lowercase to match the wire contract (`"unread"`, `"read"`,
/// `"archived"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArticleStatus {
    Unread,
    Read,
    Archived,
}

/// Error for status strings outside the three defined states.
#[derive(Debug, thiserror::Error)]
#[error("Unknown article status: {0}")]
pub struct InvalidStatus(pub String);

impl ArticleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ArticleStatus::Unread => "unread",
            ArticleStatus::Read => "read",
            ArticleStatus::Archived => "archived",
        }
    }

    /// Lenient parse for optional filter state: unknown values become `None`
    /// (no constraint) instead of an error.
    pub fn parse_lenient(value: &str) -> Option<Self> {
        value.parse().ok()
    }
}

impl std::str::FromStr for ArticleStatus {
    type Err = InvalidStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "unread" => Ok(ArticleStatus::Unread),
            "read" => Ok(ArticleStatus::Read),
            "archived" => Ok(ArticleStatus::Archived),
            other => Err(InvalidStatus(other.to_string())),
        }
    }
}

/// A saved article with metadata and user-specific reading state.
///
/// Field names serialize camelCase so the wire shape matches the external
/// article source/sink contract.
///
/// # Invariants
///
/// - `id` is unique across the collection (enforced by the library service)
/// - `reading_progress` stays within `[0, 1]`
/// - `tags` holds normalized names with no duplicates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    pub url: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
    pub saved_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_accessed_at: Option<DateTime<Utc>>,
    pub status: ArticleStatus,
    pub is_favorite: bool,
    pub reading_progress: f64,
    pub reading_time_seconds: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word_count: Option<u32>,
    pub language: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Article {
    /// Site name for display: the stored value when present, otherwise
    /// derived from the URL host. Never fails; malformed URLs fall back to
    /// the raw URL string.
    pub fn site_name(&self) -> String {
        self.site_name
            .clone()
            .unwrap_or_else(|| site_name_of(&self.url))
    }

    /// Estimated reading time in whole minutes, rounded up.
    pub fn reading_time_minutes(&self) -> u32 {
        self.reading_time_seconds.div_ceil(60)
    }

    pub fn has_tag(&self, name: &str) -> bool {
        self.tags.iter().any(|t| t == name)
    }
}

/// Clamps a reading progress value into `[0, 1]`.
///
/// Out-of-range input is clamped, not rejected. NaN maps to `0.0` so the
/// stored invariant holds for any caller-provided float.
pub fn clamp_progress(progress: f64) -> f64 {
    if progress.is_nan() {
        return 0.0;
    }
    progress.clamp(0.0, 1.0)
}

/// Metadata fetched for a saved URL by an external collaborator (scraper,
/// backend enrichment job). Applied to an article through the library
/// service once the fetch completes; `None` fields leave the article
/// unchanged.
#[derive(Debug, Clone, Default)]
pub struct ArticleMetadata {
    pub title: Option<String>,
    pub summary: Option<String>,
    pub thumbnail_url: Option<String>,
    pub author: Option<String>,
    pub site_name: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
    pub reading_time_seconds: Option<u32>,
    pub word_count: Option<u32>,
    pub language: Option<String>,
}

/// Input for the save operation.
#[derive(Debug, Clone, Default)]
pub struct SaveArticleForm {
    /// Required; must be an absolute http(s) URL.
    pub url: String,
    pub category_id: Option<String>,
    pub tags: Vec<String>,
    /// Optional metadata supplied alongside the URL (e.g., when the caller
    /// already scraped the page). Anything absent is derived or defaulted.
    pub metadata: ArticleMetadata,
}
