//! Application layer: collection store, filter engine, and timing ports.
//!
//! This layer orchestrates domain operations over the in-memory article
//! collection and provides the query surfaces the UI consumes.
//!
//! # Components
//!
//! - [`services::library_service::LibraryService`] - Authoritative article
//!   collection with save/status/favorite/progress/tag/delete mutations
//! - [`services::filter_engine`] - Pure filter/search evaluation
//! - [`services::tag_registry::TagRegistry`] - Known tag names with derived
//!   usage counts
//! - [`query_debouncer`] - Delay-and-coalesce port for search input

pub mod query_debouncer;
pub mod services;
