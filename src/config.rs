//! Configuration Module
//!
//! Handles loading server configuration from environment variables, with an
//! optional `.env` file.

use std::env;
use std::fmt;
use std::time::Duration;

use crate::cache::{DEFAULT_MAX_AGE_MS, DEFAULT_MAX_ENTRIES};
use crate::error::ConfigError;

/// Default blog list endpoint
pub const DEFAULT_UPSTREAM_URL: &str = "https://intent-kit-16.hasura.app/api/rest/blogs";

/// Environment variable holding the upstream admin secret
pub const SECRET_ENV_VAR: &str = "SECRET_KEY";

/// Server configuration parameters.
///
/// Everything except the admin secret has a default.
#[derive(Clone)]
pub struct Config {
    /// Blog list endpoint
    pub upstream_url: String,
    /// Value sent in the admin secret header
    pub admin_secret: String,
    /// HTTP server port
    pub server_port: u16,
    /// Maximum entries per cache instance
    pub cache_max_entries: usize,
    /// Freshness window for cached results, in milliseconds
    pub cache_max_age_ms: u64,
    /// Timeout for upstream requests, in seconds
    pub upstream_timeout_secs: u64,
}

impl Config {
    /// Loads `.env` if present, then reads the process environment.
    ///
    /// # Environment Variables
    /// - `SECRET_KEY` - Upstream admin secret (required)
    /// - `UPSTREAM_URL` - Blog list endpoint (default: the Hasura REST URL)
    /// - `SERVER_PORT` - HTTP server port (default: 8000)
    /// - `CACHE_MAX_ENTRIES` - Entries per cache (default: 100)
    /// - `CACHE_MAX_AGE_MS` - Freshness window in ms (default: 60000)
    /// - `UPSTREAM_TIMEOUT_SECS` - Upstream request timeout (default: 30)
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds a config from an arbitrary variable lookup.
    ///
    /// Numeric values that fail to parse fall back to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let admin_secret = lookup(SECRET_ENV_VAR)
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::MissingSecret(SECRET_ENV_VAR))?;

        Ok(Self {
            upstream_url: lookup("UPSTREAM_URL")
                .filter(|s| !s.is_empty())
                .unwrap_or(defaults.upstream_url),
            admin_secret,
            server_port: lookup("SERVER_PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.server_port),
            cache_max_entries: lookup("CACHE_MAX_ENTRIES")
                .and_then(|v| v.parse().ok())
                .filter(|&n: &usize| n > 0)
                .unwrap_or(defaults.cache_max_entries),
            cache_max_age_ms: lookup("CACHE_MAX_AGE_MS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.cache_max_age_ms),
            upstream_timeout_secs: lookup("UPSTREAM_TIMEOUT_SECS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.upstream_timeout_secs),
        })
    }

    /// Freshness window as a Duration.
    pub fn cache_max_age(&self) -> Duration {
        Duration::from_millis(self.cache_max_age_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            upstream_url: DEFAULT_UPSTREAM_URL.to_string(),
            admin_secret: String::new(),
            server_port: 8000,
            cache_max_entries: DEFAULT_MAX_ENTRIES,
            cache_max_age_ms: DEFAULT_MAX_AGE_MS,
            upstream_timeout_secs: 30,
        }
    }
}

// The secret never appears in logs.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("upstream_url", &self.upstream_url)
            .field("admin_secret", &"<redacted>")
            .field("server_port", &self.server_port)
            .field("cache_max_entries", &self.cache_max_entries)
            .field("cache_max_age_ms", &self.cache_max_age_ms)
            .field("upstream_timeout_secs", &self.upstream_timeout_secs)
            .finish()
    }
}
