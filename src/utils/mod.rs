//! Utility functions for id generation and URL processing.
//!
//! - [`article_id`] - Opaque article id generation
//! - [`site_name`] - Display site name derivation from URLs
//! - [`url_validator`] - Save-time URL validation

pub mod article_id;
pub mod site_name;
pub mod url_validator;
