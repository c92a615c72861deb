//! Request DTOs for the blog insights API
//!
//! Defines the query parameters accepted by incoming requests.

use serde::Deserialize;

/// Query string for the search endpoint (GET /api/blog-search)
///
/// # Fields
/// - `query`: Substring to look for in blog titles
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub query: Option<String>,
}

impl SearchParams {
    /// Returns the query if it is present and non-empty.
    ///
    /// The value is returned verbatim; it doubles as the search cache key.
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref().filter(|q| !q.is_empty())
    }
}
