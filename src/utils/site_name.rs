//! Site name derivation from article URLs.

use url::Url;

/// Derives a display site name from a URL.
///
/// Extracts the hostname (e.g., `"blog.example.com"` from
/// `https://blog.example.com/post?x=1`). A leading `www.` prefix is
/// stripped. Never fails: malformed URLs and URLs without a host fall back
/// to the raw input string, so callers can render something for any saved
/// value.
pub fn site_name_of(url: &str) -> String {
    match Url::parse(url) {
        Ok(parsed) => match parsed.host_str() {
            Some(host) => host.strip_prefix("www.").unwrap_or(host).to_string(),
            None => url.to_string(),
        },
        Err(_) => url.to_string(),
    }
}
