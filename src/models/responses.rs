//! Response DTOs for the blog insights API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::cache::CacheStats;
use crate::models::BlogRecord;

/// Response body for the search endpoint (GET /api/blog-search)
///
/// This whole value is what the search cache stores, so a cache hit
/// replays exactly the body the miss produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub search_result: Vec<BlogRecord>,
}

impl SearchResponse {
    pub fn new(search_result: Vec<BlogRecord>) -> Self {
        Self { search_result }
    }
}

/// Response body for the cache statistics endpoint (GET /api/cache-stats)
#[derive(Debug, Clone, Serialize)]
pub struct CacheStatsResponse {
    /// Statistics for the analytics cache
    pub analytics: CacheStats,
    /// Statistics for the search cache
    pub search: CacheStats,
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Generic, client-safe description of what went wrong
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_response_serialize() {
        let resp = SearchResponse::new(vec![BlogRecord::new("1", "Hello World")]);
        let json = serde_json::to_string(&resp).unwrap();
        assert_eq!(json, r#"{"searchResult":[{"id":"1","title":"Hello World"}]}"#);
    }

    #[test]
    fn test_empty_search_response_serialize() {
        let json = serde_json::to_string(&SearchResponse::new(Vec::new())).unwrap();
        assert_eq!(json, r#"{"searchResult":[]}"#);
    }

    #[test]
    fn test_cache_stats_response_serialize() {
        let resp = CacheStatsResponse {
            analytics: CacheStats::new(),
            search: CacheStats::new(),
        };
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["analytics"]["hits"], 0);
        assert_eq!(json["search"]["evictions"], 0);
    }

    #[test]
    fn test_health_response_serialize() {
        let resp = HealthResponse::healthy();
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("healthy"));
        assert!(json.contains("timestamp"));
    }

    #[test]
    fn test_error_response_serialize() {
        let resp = ErrorResponse::new("Query parameter is required");
        let json = serde_json::to_string(&resp).unwrap();
        assert_eq!(json, r#"{"error":"Query parameter is required"}"#);
    }
}
