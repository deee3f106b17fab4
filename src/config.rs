//! Library configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup by the embedding shell and
//! validated before the library is constructed.
//!
//! ## Variables
//!
//! - `SEARCH_DEBOUNCE_MS` - Delay before a search query reaches the filter
//!   engine (default: 300, min: 10, max: 10000)
//! - `DEFAULT_LANGUAGE` - Language assigned to saves without language
//!   metadata (default: `ja`)
//! - `TAG_SUGGESTION_LIMIT` - Maximum autocomplete suggestions (default: 10)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use std::env;
use std::time::Duration;

use anyhow::Result;

/// Library configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct LibraryConfig {
    /// Debounce delay for free-text search input.
    pub search_debounce: Duration,
    /// Default language for saved articles without language metadata.
    pub default_language: String,
    /// Maximum number of tag autocomplete suggestions returned.
    pub tag_suggestion_limit: usize,
    pub log_level: String,
    pub log_format: String,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            search_debounce: Duration::from_millis(300),
            default_language: "ja".to_string(),
            tag_suggestion_limit: 10,
            log_level: "info".to_string(),
            log_format: "text".to_string(),
        }
    }
}

impl LibraryConfig {
    /// Loads configuration from environment variables, falling back to
    /// defaults for anything unset or unparsable.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let search_debounce = env::var("SEARCH_DEBOUNCE_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_millis)
            .unwrap_or(defaults.search_debounce);

        let default_language =
            env::var("DEFAULT_LANGUAGE").unwrap_or(defaults.default_language);

        let tag_suggestion_limit = env::var("TAG_SUGGESTION_LIMIT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.tag_suggestion_limit);

        let log_level = env::var("RUST_LOG").unwrap_or(defaults.log_level);
        let log_format = env::var("LOG_FORMAT").unwrap_or(defaults.log_format);

        Self {
            search_debounce,
            default_language,
            tag_suggestion_limit,
            log_level,
            log_format,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `search_debounce` is outside 10..=10000 ms
    /// - `default_language` is empty
    /// - `tag_suggestion_limit` is outside 1..=100
    /// - `log_format` is not `text` or `json`
    pub fn validate(&self) -> Result<()> {
        let debounce_ms = self.search_debounce.as_millis();
        if !(10..=10_000).contains(&debounce_ms) {
            anyhow::bail!(
                "SEARCH_DEBOUNCE_MS must be between 10 and 10000, got {}",
                debounce_ms
            );
        }

        if self.default_language.trim().is_empty() {
            anyhow::bail!("DEFAULT_LANGUAGE must not be empty");
        }

        if self.tag_suggestion_limit == 0 || self.tag_suggestion_limit > 100 {
            anyhow::bail!(
                "TAG_SUGGESTION_LIMIT must be between 1 and 100, got {}",
                self.tag_suggestion_limit
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        Ok(())
    }

    /// Prints a configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Search debounce: {:?}", self.search_debounce);
        tracing::info!("  Default language: {}", self.default_language);
        tracing::info!("  Tag suggestion limit: {}", self.tag_suggestion_limit);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads `.env` if present, then loads and validates configuration.
///
/// # Errors
///
/// Returns an error if validation fails.
pub fn load_from_env() -> Result<LibraryConfig> {
    dotenvy::dotenv().ok();

    let config = LibraryConfig::from_env();
    config.validate()?;
    Ok(config)
}
