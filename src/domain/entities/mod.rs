//! Core domain entities representing the article library data model.
//!
//! Entities are plain data structures without orchestration logic; the only
//! behavior they carry is small, pure derivations (site name, reading time,
//! progress clamping).
//!
//! # Entity Types
//!
//! - [`Article`] - One saved URL plus its metadata and reading state
//! - [`Category`] - A single-valued grouping supplied by an external source
//! - [`Tag`] - A multi-valued label with a derived usage count
//!
//! # Design Pattern
//!
//! Creation inputs are separate structs ([`SaveArticleForm`],
//! [`ArticleMetadata`]) rather than partially initialized entities, so an
//! article is never observable in a half-built state.

pub mod article;
pub mod category;
pub mod tag;

pub use article::{
    clamp_progress, Article, ArticleMetadata, ArticleStatus, InvalidStatus, SaveArticleForm,
};
pub use category::{Category, CategoryWithCount};
pub use tag::Tag;
