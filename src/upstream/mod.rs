//! Upstream Module
//!
//! Access to the third-party blog provider.

mod client;

use async_trait::async_trait;

use crate::error::UpstreamError;
use crate::models::BlogRecord;

pub use client::{HasuraBlogClient, ADMIN_SECRET_HEADER};

/// Source of the full blog list.
///
/// One call is one upstream attempt; implementations do not retry.
#[async_trait]
pub trait BlogSource: Send + Sync {
    async fn fetch_blogs(&self) -> Result<Vec<BlogRecord>, UpstreamError>;
}
