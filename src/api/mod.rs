//! API Module
//!
//! HTTP handlers and routing for the blog insights REST API.
//!
//! # Endpoints
//! - `GET /api/blog-stats` - Aggregate statistics over all blogs
//! - `GET /api/blog-search?query=` - Case-insensitive title search
//! - `GET /api/cache-stats` - Hit/miss/eviction counters for both caches
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
