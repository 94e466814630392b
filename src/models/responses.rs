//! Response DTOs for the lookup API
//!
//! Defines the structure of outgoing HTTP response bodies.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::cache::{CacheResult, CacheSource};
use crate::directory::User;

/// Response body for GET /users/:id
///
/// The user fields are flattened next to the cache metadata.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    #[serde(flatten)]
    pub user: User,
    /// Where the data came from
    pub source: CacheSource,
    /// When the served data was fetched from the origin
    pub cached_at: DateTime<Utc>,
}

impl UserResponse {
    /// Builds the body from a lookup result, backdating `cached_at` by the entry age.
    pub fn from_result(result: CacheResult<User>, now: DateTime<Utc>) -> Self {
        let cached_at = result
            .age
            .and_then(|age| chrono::Duration::from_std(age).ok())
            .map_or(now, |age| now - age);

        Self {
            user: result.data,
            source: result.source,
            cached_at,
        }
    }
}

/// Rounds an entry age to whole seconds for the `X-Cache-Age` header.
pub fn age_header_secs(age: Duration) -> u64 {
    (age.as_millis() as u64 + 500) / 1000
}

/// Response body for cache mutation endpoints
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
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
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::CacheStatus;
    use crate::directory::UserDirectory;

    fn user() -> User {
        UserDirectory::seeded().get(1).unwrap()
    }

    #[test]
    fn test_user_response_flattens_user() {
        let now = Utc::now();
        let resp = UserResponse::from_result(CacheResult::origin(user(), CacheStatus::Miss), now);
        let json = serde_json::to_value(&resp).unwrap();

        assert_eq!(json["id"], 1);
        assert_eq!(json["name"], "Leanne Graham");
        assert_eq!(json["source"], "origin");
        assert!(json.get("cachedAt").is_some());
        assert_eq!(resp.cached_at, now);
    }

    #[test]
    fn test_cached_at_backdated_by_age() {
        let now = Utc::now();
        let result = CacheResult::cached(user(), Duration::from_secs(12), CacheStatus::Hit);
        let resp = UserResponse::from_result(result, now);

        assert_eq!(resp.source, CacheSource::Cache);
        assert_eq!(now - resp.cached_at, chrono::Duration::seconds(12));
    }

    #[test]
    fn test_age_header_rounds_to_nearest_second() {
        assert_eq!(age_header_secs(Duration::from_millis(400)), 0);
        assert_eq!(age_header_secs(Duration::from_millis(1500)), 2);
        assert_eq!(age_header_secs(Duration::from_secs(40)), 40);
    }

    #[test]
    fn test_message_response_serialize() {
        let json = serde_json::to_string(&MessageResponse::new("All cache cleared")).unwrap();
        assert_eq!(json, r#"{"message":"All cache cleared"}"#);
    }

    #[test]
    fn test_health_response_serialize() {
        let resp = HealthResponse::healthy();
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("healthy"));
        assert!(json.contains("timestamp"));
    }
}
