//! Blog record model
//!
//! The shape of a single blog as returned by the upstream provider.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{AppError, Result};

/// A single blog record.
///
/// Only `id` and `title` are interpreted. Every other field the provider
/// sends is kept in `extra` and written back out unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogRecord {
    pub id: String,
    /// Absent or null titles deserialize to None
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl BlogRecord {
    /// Creates a record with a title and no extra fields.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: Some(title.into()),
            extra: Map::new(),
        }
    }

    /// Returns the title, or `InvalidRecord` when the record has none.
    pub fn require_title(&self) -> Result<&str> {
        self.title
            .as_deref()
            .ok_or_else(|| AppError::InvalidRecord(format!("blog '{}' has no title", self.id)))
    }
}

/// Upstream response envelope: `{ "blogs": [ ... ] }`.
#[derive(Debug, Clone, Deserialize)]
pub struct BlogsEnvelope {
    pub blogs: Vec<BlogRecord>,
}
