//! # readlater
//!
//! The state and filter engine for a personal "read-it-later" article
//! library: a user saves URLs, the library associates each with metadata
//! (title, summary, thumbnail, tags, category), and the user organizes,
//! filters, and tracks reading progress over the saved set.
//!
//! ## Architecture
//!
//! The crate follows Clean Architecture principles with clear layer
//! separation:
//!
//! - **Domain Layer** ([`domain`]) - Article/Category/Tag entities and
//!   boundary traits for external stores
//! - **Application Layer** ([`application`]) - The collection store
//!   ([`application::services::LibraryService`]), the pure filter/search
//!   engine, the tag registry, and the debounced query port
//! - **DTO Layer** ([`dto`]) - Wire-shape request/response types for the
//!   application shell
//!
//! Page layout, authentication, session plumbing, persistence, and network
//! transport belong to the embedding shell; the library reaches them only
//! through the [`domain::repositories`] traits.
//!
//! ## Concurrency Model
//!
//! Single-threaded cooperative execution: the collection store, filter
//! engine, and tag registry run on one logical thread of control, so
//! mutations are applied in invocation order and no locks are needed.
//! Asynchronous work (metadata fetch, persistence) completes outside and
//! re-enters through the normal mutation operations. Only the debounced
//! query port involves timing, and its cancellation is newest-wins.
//!
//! ## Quick Start
//!
//! ```
//! use readlater::prelude::*;
//!
//! let mut library = LibraryService::new();
//!
//! let form = SaveArticleForm {
//!     url: "https://blog.example.com/post".to_string(),
//!     tags: vec!["rust".to_string()],
//!     ..Default::default()
//! };
//! let article = library.save(form).unwrap();
//!
//! let unread = library.query(
//!     &FilterSpec { status: Some(ArticleStatus::Unread), ..Default::default() },
//!     "",
//! );
//! assert_eq!(unread[0].id, article.id);
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod dto;
pub mod error;
pub mod logging;
pub mod utils;

pub use error::AppError;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::query_debouncer::{spawn_query_debouncer, DEFAULT_DEBOUNCE};
    pub use crate::application::services::{FilterSpec, LibraryService, SortKey, TagRegistry};
    pub use crate::config::LibraryConfig;
    pub use crate::domain::entities::{
        Article, ArticleMetadata, ArticleStatus, Category, SaveArticleForm, Tag,
    };
    pub use crate::domain::repositories::{ArticleRepository, CategoryProvider};
    pub use crate::error::AppError;
}
