//! Boundary trait definitions for external collaborators.
//!
//! The article library core owns no transport or persistence format. These
//! traits abstract the external stores it is seeded from and persists to,
//! following the Repository pattern.
//!
//! # Available Boundaries
//!
//! - [`ArticleRepository`] - Article source/sink (REST backend, local storage)
//! - [`CategoryProvider`] - Read-only category list source
//!
//! # Testing
//!
//! Mock implementations are auto-generated via `mockall` under `cfg(test)`.

pub mod article_repository;
pub mod category_provider;

pub use article_repository::ArticleRepository;
pub use category_provider::CategoryProvider;

#[cfg(test)]
pub use article_repository::MockArticleRepository;
#[cfg(test)]
pub use category_provider::MockCategoryProvider;
