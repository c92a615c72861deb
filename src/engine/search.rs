//! Search Engine
//!
//! Case-insensitive substring search over blog titles.

use crate::error::Result;
use crate::models::BlogRecord;

/// Returns the records whose title contains `query`, ignoring case.
///
/// Input order is preserved. The caller guarantees `query` is non-empty.
///
/// # Errors
/// `InvalidRecord` if any record has no title.
pub fn search(blogs: &[BlogRecord], query: &str) -> Result<Vec<BlogRecord>> {
    let needle = query.to_lowercase();
    let mut matches = Vec::new();

    for blog in blogs {
        if blog.require_title()?.to_lowercase().contains(&needle) {
            matches.push(blog.clone());
        }
    }

    Ok(matches)
}
