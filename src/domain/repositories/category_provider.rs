//! Read-only source of user categories.

use crate::domain::entities::Category;
use crate::error::AppError;
use async_trait::async_trait;

/// Supplies the category list from an external backend.
///
/// Categories are never invented by the core; this trait is the only way
/// they enter the library. The list is read-only from the core's point of
/// view.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryProvider: Send + Sync {
    /// Lists all categories for the current user, in `display_order`.
    async fn list(&self) -> Result<Vec<Category>, AppError>;
}
