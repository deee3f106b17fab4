//! DTOs for the save-article boundary.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{Article, ArticleMetadata, SaveArticleForm};

/// Save form input as received from the UI shell.
///
/// Matches the external contract: a required absolute URL plus optional
/// category and tag names.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SaveArticleRequest {
    #[validate(url(message = "Invalid URL format"))]
    pub url: String,

    pub category_id: Option<String>,

    #[serde(default)]
    pub tags: Vec<String>,
}

impl SaveArticleRequest {
    /// Converts into the domain-level save form. Metadata arrives later
    /// through the external fetch, not with the form.
    pub fn into_form(self) -> SaveArticleForm {
        SaveArticleForm {
            url: self.url,
            category_id: self.category_id,
            tags: self.tags,
            metadata: ArticleMetadata::default(),
        }
    }
}

/// Response for a successful save.
#[derive(Debug, Serialize)]
pub struct SaveArticleResponse {
    pub message: String,
    pub article: Article,
}

/// Response carrying a derived article list view.
#[derive(Debug, Serialize)]
pub struct ArticleListResponse {
    pub articles: Vec<Article>,
    pub total: usize,
}
