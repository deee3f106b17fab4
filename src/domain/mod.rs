//! Domain layer containing the article library data model.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Boundary trait definitions for external stores
//!
//! # Design Principles
//!
//! - The domain layer has no dependency on transport or persistence details
//! - Derived values (category article counts, tag usage counts) are computed
//!   from the article collection, never stored alongside it
//! - Business orchestration lives in [`crate::application::services`]

pub mod entities;
pub mod repositories;
