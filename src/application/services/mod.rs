//! Business logic services for the application layer.

pub mod filter_engine;
pub mod library_service;
pub mod tag_registry;

pub use filter_engine::{FilterSpec, SortKey};
pub use library_service::LibraryService;
pub use tag_registry::TagRegistry;
