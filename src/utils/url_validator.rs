//! Save-time URL validation.
//!
//! A saved URL must be absolute and syntactically well-formed; everything
//! else about it (reachability, content type) is the concern of external
//! collaborators.

use serde_json::json;

use crate::error::AppError;

/// Validates a URL submitted through the save form.
///
/// # Rules
///
/// 1. Must parse as an absolute URL
/// 2. Scheme must be `http` or `https`
/// 3. Must carry a non-empty host
///
/// Returns the input unchanged on success. No normalization is applied:
/// the library intentionally does not deduplicate by URL, so there is no
/// canonical form to maintain.
///
/// # Errors
///
/// Returns [`AppError::Validation`] with the offending input in `details`.
pub fn validate_save_url(input: &str) -> Result<(), AppError> {
    let parsed = url::Url::parse(input).map_err(|e| {
        AppError::bad_request(
            "URL must be absolute and well-formed",
            json!({ "url": input, "reason": e.to_string() }),
        )
    })?;

    match parsed.scheme() {
        "http" | "https" => {}
        other => {
            return Err(AppError::bad_request(
                "Only HTTP and HTTPS URLs can be saved",
                json!({ "url": input, "scheme": other }),
            ));
        }
    }

    if parsed.host_str().is_none_or(str::is_empty) {
        return Err(AppError::bad_request(
            "URL must include a host",
            json!({ "url": input }),
        ));
    }

    Ok(())
}
