//! Tag registry: the single source of truth for known tag names.
//!
//! Tags are created implicitly the first time a name is used on a save;
//! there is no separate creation step. The registry owns only the set of
//! known names — usage counts are always recomputed from the article
//! collection so they cannot drift.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;
use serde_json::json;

use crate::domain::entities::{Article, Tag};
use crate::error::AppError;

/// Collapses runs of internal whitespace during normalization.
static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Normalizes a raw tag name to its canonical identity.
///
/// # Rules
///
/// 1. Leading/trailing whitespace is trimmed
/// 2. Internal whitespace runs collapse to a single space
/// 3. The result is folded to lowercase, so `" Go "` and `"go"` are the
///    same tag
///
/// # Errors
///
/// Returns [`AppError::Validation`] if the name is empty after trimming.
pub fn normalize_tag_name(name: &str) -> Result<String, AppError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(AppError::bad_request(
            "Tag name must not be empty",
            json!({ "name": name }),
        ));
    }

    let collapsed = WHITESPACE_RUN.replace_all(trimmed, " ");
    Ok(collapsed.to_lowercase())
}

/// Registry of known tag names for one user.
///
/// Answers "does this tag already exist" during save so near-duplicate
/// names do not proliferate. A name stays known even when its usage count
/// drops to zero, until explicitly pruned.
#[derive(Debug, Clone, Default)]
pub struct TagRegistry {
    known: BTreeSet<String>,
}

impl TagRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds the registry from an existing collection, e.g. after
    /// hydration from the external store.
    pub fn from_articles(articles: &[Article]) -> Self {
        let known = articles
            .iter()
            .flat_map(|a| a.tags.iter())
            .filter_map(|name| normalize_tag_name(name).ok())
            .collect();

        Self { known }
    }

    /// Resolves a raw name to its canonical form, registering it if unseen.
    ///
    /// Reuses the existing entry when the normalized name is already known,
    /// so repeated saves with case or whitespace variants converge on one
    /// tag.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] on an empty name after trimming.
    pub fn resolve_or_create(&mut self, name: &str) -> Result<String, AppError> {
        let normalized = normalize_tag_name(name)?;

        if self.known.insert(normalized.clone()) {
            tracing::debug!(tag = %normalized, "registered new tag");
        }

        Ok(normalized)
    }

    /// Whether the normalized form of `name` is already registered.
    pub fn contains(&self, name: &str) -> bool {
        normalize_tag_name(name)
            .map(|n| self.known.contains(&n))
            .unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.known.len()
    }

    pub fn is_empty(&self) -> bool {
        self.known.is_empty()
    }

    /// All known tags with derived usage counts, ordered by usage count
    /// descending, ties broken by name ascending. Used for suggestion and
    /// autocomplete surfaces.
    pub fn list_known(&self, articles: &[Article]) -> Vec<Tag> {
        let mut tags: Vec<Tag> = self
            .known
            .iter()
            .map(|name| Tag::new(name.clone(), usage_count(articles, name)))
            .collect();

        // BTreeSet iteration already yields name-ascending order; the stable
        // sort keeps that as the tie-break.
        tags.sort_by(|a, b| b.usage_count.cmp(&a.usage_count));
        tags
    }

    /// Autocomplete: known tags whose name starts with `prefix`
    /// (case-insensitive), same ordering as [`Self::list_known`], truncated
    /// to `limit`.
    pub fn suggest(&self, articles: &[Article], prefix: &str, limit: usize) -> Vec<Tag> {
        let needle = prefix.trim().to_lowercase();

        let mut tags = self.list_known(articles);
        tags.retain(|t| t.name.starts_with(&needle));
        tags.truncate(limit);
        tags
    }

    /// Drops known names no longer used by any article. Returns the pruned
    /// names.
    pub fn prune_unused(&mut self, articles: &[Article]) -> Vec<String> {
        let unused: Vec<String> = self
            .known
            .iter()
            .filter(|name| usage_count(articles, name) == 0)
            .cloned()
            .collect();

        for name in &unused {
            self.known.remove(name);
        }

        unused
    }
}

fn usage_count(articles: &[Article], name: &str) -> usize {
    articles.iter().filter(|a| a.has_tag(name)).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use crate::domain::entities::ArticleStatus;

    fn article_with_tags(id: &str, tags: &[&str]) -> Article {
        Article {
            id: id.to_string(),
            category_id: None,
            url: format!("https://example.com/{id}"),
            title: id.to_string(),
            summary: None,
            thumbnail_url: None,
            author: None,
            site_name: None,
            published_at: None,
            saved_at: Utc::now(),
            last_accessed_at: None,
            status: ArticleStatus::Unread,
            is_favorite: false,
            reading_progress: 0.0,
            reading_time_seconds: 0,
            word_count: None,
            language: "en".to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn test_normalize_trims_and_lowercases() {
        assert_eq!(normalize_tag_name(" Go ").unwrap(), "go");
        assert_eq!(normalize_tag_name("RUST").unwrap(), "rust");
    }

    #[test]
    fn test_normalize_collapses_inner_whitespace() {
        assert_eq!(
            normalize_tag_name("  machine   learning ").unwrap(),
            "machine learning"
        );
    }

    #[test]
    fn test_normalize_rejects_empty() {
        assert!(normalize_tag_name("").is_err());
        assert!(normalize_tag_name("   ").is_err());
        assert!(normalize_tag_name("\t\n").is_err());
    }

    #[test]
    fn test_resolve_or_create_folds_variants() {
        let mut registry = TagRegistry::new();

        let a = registry.resolve_or_create(" Go ").unwrap();
        let b = registry.resolve_or_create("go").unwrap();
        let c = registry.resolve_or_create("GO").unwrap();

        assert_eq!(a, "go");
        assert_eq!(a, b);
        assert_eq!(b, c);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_contains_is_normalization_aware() {
        let mut registry = TagRegistry::new();
        registry.resolve_or_create("rust").unwrap();

        assert!(registry.contains("Rust"));
        assert!(registry.contains(" RUST "));
        assert!(!registry.contains("go"));
        assert!(!registry.contains("  "));
    }

    #[test]
    fn test_list_known_orders_by_usage_then_name() {
        let mut registry = TagRegistry::new();
        for name in ["rust", "go", "wasm"] {
            registry.resolve_or_create(name).unwrap();
        }

        let articles = vec![
            article_with_tags("a1", &["rust", "go"]),
            article_with_tags("a2", &["rust"]),
            article_with_tags("a3", &["wasm"]),
        ];

        let tags = registry.list_known(&articles);
        let names: Vec<&str> = tags.iter().map(|t| t.name.as_str()).collect();

        // rust: 2 uses; go and wasm tie at 1 and fall back to name order.
        assert_eq!(names, vec!["rust", "go", "wasm"]);
        assert_eq!(tags[0].usage_count, 2);
    }

    #[test]
    fn test_counts_recompute_after_collection_changes() {
        let mut registry = TagRegistry::new();
        registry.resolve_or_create("rust").unwrap();

        let mut articles = vec![article_with_tags("a1", &["rust"])];
        assert_eq!(registry.list_known(&articles)[0].usage_count, 1);

        articles.clear();
        let tags = registry.list_known(&articles);
        assert_eq!(tags[0].usage_count, 0);
        assert_eq!(tags.len(), 1, "name stays known at zero usage");
    }

    #[test]
    fn test_suggest_prefix_and_limit() {
        let mut registry = TagRegistry::new();
        for name in ["rust", "rest", "redis", "go"] {
            registry.resolve_or_create(name).unwrap();
        }

        let articles = vec![
            article_with_tags("a1", &["rust"]),
            article_with_tags("a2", &["rust", "redis"]),
        ];

        let suggestions = registry.suggest(&articles, "Re", 10);
        let names: Vec<&str> = suggestions.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["redis", "rest"]);

        let limited = registry.suggest(&articles, "r", 1);
        assert_eq!(limited.len(), 1);
        assert_eq!(limited[0].name, "rust");
    }

    #[test]
    fn test_from_articles_seeds_known_names() {
        let articles = vec![
            article_with_tags("a1", &["rust", "go"]),
            article_with_tags("a2", &["go"]),
        ];

        let registry = TagRegistry::from_articles(&articles);
        assert_eq!(registry.len(), 2);
        assert!(registry.contains("rust"));
        assert!(registry.contains("go"));
    }

    #[test]
    fn test_prune_unused() {
        let mut registry = TagRegistry::new();
        registry.resolve_or_create("rust").unwrap();
        registry.resolve_or_create("stale").unwrap();

        let articles = vec![article_with_tags("a1", &["rust"])];

        let pruned = registry.prune_unused(&articles);
        assert_eq!(pruned, vec!["stale".to_string()]);
        assert!(registry.contains("rust"));
        assert!(!registry.contains("stale"));
    }
}
