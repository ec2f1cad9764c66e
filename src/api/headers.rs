//! Header parsing utilities for conditional requests.

use axum::http::{header, HeaderMap};

/// Extension trait for convenient header parsing.
pub trait HeaderMapExt {
    /// Get a header value as a string, returning None if missing.
    fn get_str(&self, name: &str) -> Option<&str>;

    /// Whether `If-None-Match` names the given entity tag (quoted form).
    ///
    /// Handles lists, weak validators and `*`.
    fn if_none_match(&self, etag: &str) -> bool;
}

impl HeaderMapExt for HeaderMap {
    fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(|v| v.to_str().ok())
    }

    fn if_none_match(&self, etag: &str) -> bool {
        let Some(value) = self.get_str(header::IF_NONE_MATCH.as_str()) else {
            return false;
        };
        value.split(',').map(str::trim).any(|candidate| {
            candidate == "*" || candidate.strip_prefix("W/").unwrap_or(candidate) == etag
        })
    }
}

/// Quote a hex digest as an entity tag: `"abc123"`.
pub fn quoted_etag(digest: &str) -> String {
    format!("\"{digest}\"")
}
