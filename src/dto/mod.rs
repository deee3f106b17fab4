//! Wire-shape DTOs for the boundary with the application shell.
//!
//! - [`save_article`] - Save form input and article responses
//! - [`filters`] - Lenient filter parameter mapping

pub mod filters;
pub mod save_article;

pub use filters::ArticleFilterParams;
pub use save_article::{ArticleListResponse, SaveArticleRequest, SaveArticleResponse};
