//! Utility functions and helpers.

pub mod http;

use url::Url;

/// Normalize scraped text: collapse runs of whitespace (including NBSP)
/// into single spaces and trim the ends.
pub fn clean_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Normalize scraped text into an optional field: blank input becomes `None`.
pub fn clean_field(text: &str) -> Option<String> {
    let cleaned = clean_text(text);
    if cleaned.is_empty() { None } else { Some(cleaned) }
}

/// Resolve a potentially relative URL against a base URL.
pub fn resolve_url(base: &Url, href: &str) -> String {
    base.join(href)
        .map(|u| u.to_string())
        .unwrap_or_else(|_| href.to_string())
}
