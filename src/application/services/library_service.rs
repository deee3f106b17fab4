//! Library service: the authoritative in-memory article collection.
//!
//! Owns the single mutable copy of the article list plus the externally
//! supplied category list and the tag registry. All mutations are
//! synchronous, applied in invocation order, and atomic: a failed call
//! leaves the collection exactly as it was. Derived values (category
//! article counts, tag usage counts) are recomputed from the collection on
//! read.

use chrono::Utc;
use serde_json::json;

use crate::application::services::filter_engine::{self, FilterSpec};
use crate::application::services::tag_registry::{normalize_tag_name, TagRegistry};
use crate::domain::entities::{
    clamp_progress, Article, ArticleMetadata, ArticleStatus, Category, CategoryWithCount,
    SaveArticleForm, Tag,
};
use crate::domain::repositories::{ArticleRepository, CategoryProvider};
use crate::error::AppError;
use crate::utils::article_id::generate_article_id;
use crate::utils::site_name::site_name_of;
use crate::utils::url_validator::validate_save_url;

/// Language assigned to saved articles when neither the form nor the
/// configuration supplies one.
pub const FALLBACK_LANGUAGE: &str = "ja";

/// The collection store for one user's article library.
///
/// Single-writer by construction: callers hold it behind `&mut` on one
/// logical thread of control, so no locking is needed. Async work (metadata
/// fetch, persistence) happens outside and re-enters through the normal
/// mutation methods.
#[derive(Debug, Clone)]
pub struct LibraryService {
    articles: Vec<Article>,
    categories: Vec<Category>,
    tags: TagRegistry,
    default_language: String,
}

impl Default for LibraryService {
    fn default() -> Self {
        Self::new()
    }
}

impl LibraryService {
    pub fn new() -> Self {
        Self {
            articles: Vec::new(),
            categories: Vec::new(),
            tags: TagRegistry::new(),
            default_language: FALLBACK_LANGUAGE.to_string(),
        }
    }

    /// Overrides the language assigned to saves that carry no language
    /// metadata (see `DEFAULT_LANGUAGE` in [`crate::config`]).
    pub fn with_default_language(mut self, language: impl Into<String>) -> Self {
        self.default_language = language.into();
        self
    }

    /// Builds a service honoring the configured defaults.
    pub fn from_config(config: &crate::config::LibraryConfig) -> Self {
        Self::new().with_default_language(config.default_language.clone())
    }

    // ── Seeding from external collaborators ─────────────────────────────

    /// Replaces the collection with the contents of the external store and
    /// rebuilds the tag registry from it. Returns the number of articles
    /// loaded.
    ///
    /// # Errors
    ///
    /// Propagates the repository error; on failure the current collection
    /// is left untouched.
    pub async fn hydrate<R>(&mut self, repo: &R) -> Result<usize, AppError>
    where
        R: ArticleRepository + ?Sized,
    {
        let articles = repo.fetch_all().await?;

        self.tags = TagRegistry::from_articles(&articles);
        self.articles = articles;

        tracing::info!(count = self.articles.len(), "hydrated article collection");
        Ok(self.articles.len())
    }

    /// Loads the category list from its external source, ordered by
    /// `display_order`.
    pub async fn load_categories<P>(&mut self, provider: &P) -> Result<usize, AppError>
    where
        P: CategoryProvider + ?Sized,
    {
        let categories = provider.list().await?;
        self.set_categories(categories);
        Ok(self.categories.len())
    }

    /// Sets the externally supplied category list directly.
    pub fn set_categories(&mut self, mut categories: Vec<Category>) {
        categories.sort_by(|a, b| a.display_order.cmp(&b.display_order));
        self.categories = categories;
    }

    // ── Mutation operations ─────────────────────────────────────────────

    /// Saves a new article from a form.
    ///
    /// Assigns a fresh unique id, stamps `saved_at`, starts the article
    /// unread, unfavorited, at zero progress, derives the site name from
    /// the URL when not supplied, and registers each tag name with the
    /// registry (implicit creation, normalized identity).
    ///
    /// The store does not deduplicate by URL: saving the same URL twice
    /// yields two articles. Guarding against accidental double-submission
    /// is the UI's concern.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for a malformed or non-absolute
    /// URL, an empty tag name, or an unknown category id (when a category
    /// list has been supplied). Nothing is mutated on failure.
    pub fn save(&mut self, form: SaveArticleForm) -> Result<Article, AppError> {
        validate_save_url(&form.url)?;
        self.check_category(form.category_id.as_deref())?;

        // Normalize every tag before touching any state, so a bad name in
        // the middle of the list cannot leave a partial registration.
        let mut tags: Vec<String> = Vec::with_capacity(form.tags.len());
        for raw in &form.tags {
            let normalized = normalize_tag_name(raw)?;
            if !tags.contains(&normalized) {
                tags.push(normalized);
            }
        }

        for name in &tags {
            self.tags.resolve_or_create(name)?;
        }

        let metadata = form.metadata;
        let article = Article {
            id: self.fresh_id(),
            category_id: form.category_id,
            title: metadata.title.unwrap_or_else(|| form.url.clone()),
            summary: metadata.summary,
            thumbnail_url: metadata.thumbnail_url,
            author: metadata.author,
            site_name: Some(
                metadata
                    .site_name
                    .unwrap_or_else(|| site_name_of(&form.url)),
            ),
            published_at: metadata.published_at,
            saved_at: Utc::now(),
            last_accessed_at: None,
            status: ArticleStatus::Unread,
            is_favorite: false,
            reading_progress: 0.0,
            reading_time_seconds: metadata.reading_time_seconds.unwrap_or(0),
            word_count: metadata.word_count,
            language: metadata
                .language
                .unwrap_or_else(|| self.default_language.clone()),
            tags,
            url: form.url,
        };

        tracing::debug!(id = %article.id, url = %article.url, "saved article");

        let saved = article.clone();
        self.articles.push(article);
        Ok(saved)
    }

    /// Transitions an article's status. Any of the three statuses can be
    /// set from any other.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the id is absent. Missing-target
    /// behavior is uniform across all mutations here; callers that expect
    /// concurrent removal treat it as a silent no-op.
    pub fn set_status(&mut self, id: &str, status: ArticleStatus) -> Result<Article, AppError> {
        let article = self.article_mut(id)?;
        article.status = status;

        tracing::debug!(id, status = status.as_str(), "updated article status");
        Ok(article.clone())
    }

    /// Flips the favorite flag. Applying it twice restores the original
    /// value.
    pub fn toggle_favorite(&mut self, id: &str) -> Result<Article, AppError> {
        let article = self.article_mut(id)?;
        article.is_favorite = !article.is_favorite;
        Ok(article.clone())
    }

    /// Sets reading progress, clamping out-of-range input into `[0, 1]`
    /// rather than rejecting it.
    pub fn update_progress(&mut self, id: &str, progress: f64) -> Result<Article, AppError> {
        let clamped = clamp_progress(progress);
        if clamped != progress {
            tracing::warn!(id, progress, clamped, "reading progress clamped");
        }

        let article = self.article_mut(id)?;
        article.reading_progress = clamped;
        Ok(article.clone())
    }

    /// Applies externally fetched metadata to an article. `None` fields
    /// leave the current values unchanged.
    pub fn apply_metadata(&mut self, id: &str, metadata: ArticleMetadata) -> Result<Article, AppError> {
        let article = self.article_mut(id)?;

        if let Some(title) = metadata.title {
            article.title = title;
        }
        if metadata.summary.is_some() {
            article.summary = metadata.summary;
        }
        if metadata.thumbnail_url.is_some() {
            article.thumbnail_url = metadata.thumbnail_url;
        }
        if metadata.author.is_some() {
            article.author = metadata.author;
        }
        if metadata.site_name.is_some() {
            article.site_name = metadata.site_name;
        }
        if metadata.published_at.is_some() {
            article.published_at = metadata.published_at;
        }
        if let Some(seconds) = metadata.reading_time_seconds {
            article.reading_time_seconds = seconds;
        }
        if metadata.word_count.is_some() {
            article.word_count = metadata.word_count;
        }
        if let Some(language) = metadata.language {
            article.language = language;
        }

        Ok(article.clone())
    }

    /// Reassigns the article's category. `None` clears it.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for a category id absent from the
    /// supplied category list, [`AppError::NotFound`] for a missing
    /// article.
    pub fn set_category(&mut self, id: &str, category_id: Option<String>) -> Result<Article, AppError> {
        self.check_category(category_id.as_deref())?;

        let article = self.article_mut(id)?;
        article.category_id = category_id;
        Ok(article.clone())
    }

    /// Replaces the article's tags with the normalized, deduplicated form
    /// of `names`, registering unseen names with the registry.
    pub fn set_tags(&mut self, id: &str, names: &[String]) -> Result<Article, AppError> {
        // Validate before mutating anything: the target must exist and
        // every name must normalize.
        self.article_ref(id)?;

        let mut tags: Vec<String> = Vec::with_capacity(names.len());
        for raw in names {
            let normalized = normalize_tag_name(raw)?;
            if !tags.contains(&normalized) {
                tags.push(normalized);
            }
        }

        for name in &tags {
            self.tags.resolve_or_create(name)?;
        }

        let article = self.article_mut(id)?;
        article.tags = tags;
        Ok(article.clone())
    }

    /// Records that the article was opened.
    pub fn touch(&mut self, id: &str) -> Result<Article, AppError> {
        let article = self.article_mut(id)?;
        article.last_accessed_at = Some(Utc::now());
        Ok(article.clone())
    }

    /// Removes an article permanently and returns it. Derived tag and
    /// category counts reflect the removal immediately, since they are
    /// computed from the collection.
    pub fn delete(&mut self, id: &str) -> Result<Article, AppError> {
        let index = self
            .articles
            .iter()
            .position(|a| a.id == id)
            .ok_or_else(|| not_found(id))?;

        let removed = self.articles.remove(index);
        tracing::debug!(id, "deleted article");
        Ok(removed)
    }

    // ── Read side ───────────────────────────────────────────────────────

    /// The full collection, in save order.
    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn get(&self, id: &str) -> Option<&Article> {
        self.articles.iter().find(|a| a.id == id)
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Categories paired with derived article counts.
    pub fn categories_with_counts(&self) -> Vec<CategoryWithCount> {
        self.categories
            .iter()
            .map(|category| CategoryWithCount {
                article_count: self
                    .articles
                    .iter()
                    .filter(|a| a.category_id.as_deref() == Some(category.id.as_str()))
                    .count(),
                category: category.clone(),
            })
            .collect()
    }

    /// Known tags with derived usage counts, usage descending then name
    /// ascending.
    pub fn tags(&self) -> Vec<Tag> {
        self.tags.list_known(&self.articles)
    }

    /// Tag autocomplete for a prefix.
    pub fn suggest_tags(&self, prefix: &str, limit: usize) -> Vec<Tag> {
        self.tags.suggest(&self.articles, prefix, limit)
    }

    /// Derives the visible subset for a filter spec and search query. Pure
    /// with respect to the collection; see
    /// [`filter_engine::apply`].
    pub fn query(&self, spec: &FilterSpec, search: &str) -> Vec<Article> {
        filter_engine::apply(&self.articles, spec, search)
    }

    // ── Internals ───────────────────────────────────────────────────────

    fn fresh_id(&self) -> String {
        loop {
            let id = generate_article_id();
            if self.get(&id).is_none() {
                return id;
            }
        }
    }

    fn check_category(&self, category_id: Option<&str>) -> Result<(), AppError> {
        let Some(category_id) = category_id else {
            return Ok(());
        };

        // Without a loaded category list there is nothing to check against.
        if self.categories.is_empty() {
            return Ok(());
        }

        if self.categories.iter().any(|c| c.id == category_id) {
            Ok(())
        } else {
            Err(AppError::bad_request(
                "Unknown category",
                json!({ "categoryId": category_id }),
            ))
        }
    }

    fn article_ref(&self, id: &str) -> Result<&Article, AppError> {
        self.get(id).ok_or_else(|| not_found(id))
    }

    fn article_mut(&mut self, id: &str) -> Result<&mut Article, AppError> {
        self.articles
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| not_found(id))
    }
}

fn not_found(id: &str) -> AppError {
    AppError::not_found("Article not found", json!({ "id": id }))
}
