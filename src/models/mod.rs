//! Request and Response models for the blog insights API
//!
//! This module defines the blog record shape and the DTOs used for
//! serializing/deserializing HTTP request and response bodies.

pub mod blog;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use blog::{BlogRecord, BlogsEnvelope};
pub use requests::SearchParams;
pub use responses::{CacheStatsResponse, ErrorResponse, HealthResponse, SearchResponse};
