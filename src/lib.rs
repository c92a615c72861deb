//! Blog Insights - cached analytics and search over an upstream blog API
//!
//! Serves aggregate blog statistics and case-insensitive title search, each
//! backed by a bounded in-memory cache with time-based expiry.

pub mod api;
pub mod cache;
pub mod config;
pub mod engine;
pub mod error;
pub mod models;
pub mod upstream;

pub use api::AppState;
pub use config::Config;
pub use upstream::{BlogSource, HasuraBlogClient};
