//! Repository trait for the external article source/sink.

use crate::domain::entities::Article;
use crate::error::AppError;
use async_trait::async_trait;

/// External store the library is seeded from and persisted to.
///
/// The in-memory collection owned by
/// [`crate::application::services::LibraryService`] is authoritative within
/// the process; this trait is the boundary to a REST backend or local
/// storage keyed by article `id`. The core is agnostic to the transport's
/// serialization convention as long as a deterministic two-way mapping to
/// [`Article`] exists.
///
/// # Implementations
///
/// Supplied by the application shell. Test mocks available with `cfg(test)`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ArticleRepository: Send + Sync {
    /// Fetches every stored article for the current user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the store's payload cannot be
    /// mapped onto [`Article`].
    async fn fetch_all(&self) -> Result<Vec<Article>, AppError>;

    /// Persists a newly created article.
    async fn create(&self, article: &Article) -> Result<(), AppError>;

    /// Persists the current state of a mutated article.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the store no longer holds `id`.
    async fn update(&self, article: &Article) -> Result<(), AppError>;

    /// Removes an article from the store.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the store no longer holds `id`.
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}
