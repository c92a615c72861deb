//! API Handlers
//!
//! HTTP request handlers for each endpoint, plus the shared
//! check-cache-or-recompute flow they are built on.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tracing::{debug, info};

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};

use crate::cache::{Clock, SystemClock, TtlCache};
use crate::config::Config;
use crate::engine::{self, AnalyticsResult};
use crate::error::{ApiError, AppError, Result};
use crate::models::{
    BlogRecord, CacheStatsResponse, HealthResponse, SearchParams, SearchResponse,
};
use crate::upstream::BlogSource;

/// The analytics cache only ever holds this key.
pub const ANALYTICS_CACHE_KEY: &str = "analytics";

pub const STATS_FAILURE_MESSAGE: &str = "An error occurred while fetching and analysing blogs data";
pub const SEARCH_FAILURE_MESSAGE: &str = "An error occurred while fetching blogs";
pub const QUERY_REQUIRED_MESSAGE: &str = "Query parameter is required";

/// A cache instance shared between requests.
pub type SharedCache<V> = Arc<RwLock<TtlCache<V>>>;

/// Application state shared across all handlers.
///
/// Owns both caches and the upstream source. Each cache sits behind its own
/// lock, and neither lock is held while the upstream is being called.
#[derive(Clone)]
pub struct AppState {
    /// Analytics results, keyed by `ANALYTICS_CACHE_KEY`
    pub analytics_cache: SharedCache<AnalyticsResult>,
    /// Search responses, keyed by the raw query string
    pub search_cache: SharedCache<SearchResponse>,
    /// Upstream blog provider
    pub upstream: Arc<dyn BlogSource>,
}

impl AppState {
    /// Creates state with two empty caches on the system clock.
    pub fn new(upstream: Arc<dyn BlogSource>, max_entries: usize, max_age: Duration) -> Self {
        Self::with_clock(upstream, max_entries, max_age, Arc::new(SystemClock))
    }

    /// Creates state whose caches read time from `clock`.
    pub fn with_clock(
        upstream: Arc<dyn BlogSource>,
        max_entries: usize,
        max_age: Duration,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            analytics_cache: Arc::new(RwLock::new(TtlCache::with_clock(
                max_entries,
                max_age,
                clock.clone(),
            ))),
            search_cache: Arc::new(RwLock::new(TtlCache::with_clock(
                max_entries,
                max_age,
                clock,
            ))),
            upstream,
        }
    }

    /// Creates state sized from configuration.
    pub fn from_config(config: &Config, upstream: Arc<dyn BlogSource>) -> Self {
        Self::new(upstream, config.cache_max_entries, config.cache_max_age())
    }
}

// == Cache Or Compute ==
/// Returns the fresh cached value for `key`, or fetches the blog list,
/// runs `compute` on it, caches the result and returns it.
///
/// Concurrent misses on the same key may each fetch; the last one to
/// finish is what stays cached.
async fn cached_or_compute<V, F>(
    cache: &SharedCache<V>,
    key: &str,
    upstream: &dyn BlogSource,
    compute: F,
) -> Result<V>
where
    V: Clone,
    F: FnOnce(&[BlogRecord]) -> Result<V>,
{
    // Write lock: a lookup may drop a stale entry and always updates stats
    let cached = {
        let mut cache = cache.write().await;
        cache.get(key)
    };
    if let Ok(value) = cached {
        debug!(key, "Serving cached result");
        return Ok(value);
    }

    info!(key, "Cache miss, fetching blogs from upstream");
    let blogs = upstream.fetch_blogs().await?;
    let value = compute(&blogs)?;

    cache.write().await.set(key, value.clone());
    Ok(value)
}

/// Handler for GET /api/blog-stats
///
/// Returns aggregate statistics over all blogs.
pub async fn blog_stats_handler(
    State(state): State<AppState>,
) -> std::result::Result<Json<AnalyticsResult>, ApiError> {
    cached_or_compute(
        &state.analytics_cache,
        ANALYTICS_CACHE_KEY,
        state.upstream.as_ref(),
        engine::analyze,
    )
    .await
    .map(Json)
    .map_err(|e| e.into_api_error(STATS_FAILURE_MESSAGE))
}

/// Handler for GET /api/blog-search?query=...
///
/// Returns blogs whose titles contain the query, ignoring case. A missing,
/// empty or unparseable query is rejected before the cache or upstream is
/// touched.
pub async fn blog_search_handler(
    State(state): State<AppState>,
    params: std::result::Result<Query<SearchParams>, QueryRejection>,
) -> std::result::Result<Json<SearchResponse>, ApiError> {
    let params = match params {
        Ok(Query(params)) => params,
        Err(rejection) => {
            debug!(%rejection, "Unparseable search query string");
            SearchParams::default()
        }
    };

    search_blogs(&state, &params)
        .await
        .map(Json)
        .map_err(|e| e.into_api_error(SEARCH_FAILURE_MESSAGE))
}

async fn search_blogs(state: &AppState, params: &SearchParams) -> Result<SearchResponse> {
    let query = params
        .query()
        .ok_or_else(|| AppError::BadRequest(QUERY_REQUIRED_MESSAGE.to_string()))?;

    cached_or_compute(
        &state.search_cache,
        query,
        state.upstream.as_ref(),
        |blogs| engine::search(blogs, query).map(SearchResponse::new),
    )
    .await
}

/// Handler for GET /api/cache-stats
///
/// Returns statistics for both caches. Stale entries are purged first so
/// `total_entries` only counts live ones.
pub async fn cache_stats_handler(State(state): State<AppState>) -> Json<CacheStatsResponse> {
    let analytics = {
        let mut cache = state.analytics_cache.write().await;
        cache.purge_expired();
        cache.stats()
    };
    let search = {
        let mut cache = state.search_cache.write().await;
        cache.purge_expired();
        cache.stats()
    };

    Json(CacheStatsResponse { analytics, search })
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
