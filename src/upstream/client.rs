//! Upstream HTTP client
//!
//! Fetches the blog list from the Hasura REST endpoint.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::config::Config;
use crate::error::UpstreamError;
use crate::models::{BlogRecord, BlogsEnvelope};
use crate::upstream::BlogSource;

/// Header carrying the provider's admin secret.
pub const ADMIN_SECRET_HEADER: &str = "x-hasura-admin-secret";

/// Upstream status bodies are truncated to this many characters in errors.
const MAX_ERROR_BODY_CHARS: usize = 512;

/// Authenticated client for the blog provider.
pub struct HasuraBlogClient {
    client: reqwest::Client,
    url: String,
    admin_secret: String,
}

impl HasuraBlogClient {
    /// Creates a client for `url` that authenticates with `admin_secret`.
    pub fn new(
        url: impl Into<String>,
        admin_secret: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, UpstreamError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(UpstreamError::Http)?;

        Ok(Self {
            client,
            url: url.into(),
            admin_secret: admin_secret.into(),
        })
    }

    /// Creates a client from the loaded configuration.
    pub fn from_config(config: &Config) -> Result<Self, UpstreamError> {
        Self::new(
            config.upstream_url.clone(),
            config.admin_secret.clone(),
            Duration::from_secs(config.upstream_timeout_secs),
        )
    }

    #[cfg(test)]
    fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl BlogSource for HasuraBlogClient {
    async fn fetch_blogs(&self) -> Result<Vec<BlogRecord>, UpstreamError> {
        debug!(url = %self.url, "Fetching blogs from upstream");

        let response = self
            .client
            .get(&self.url)
            .header(ADMIN_SECRET_HEADER, &self.admin_secret)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(UpstreamError::Http)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                body: body.chars().take(MAX_ERROR_BODY_CHARS).collect(),
            });
        }

        let envelope: BlogsEnvelope = response.json().await.map_err(UpstreamError::Decode)?;

        info!(count = envelope.blogs.len(), "Fetched blogs from upstream");
        Ok(envelope.blogs)
    }
}
