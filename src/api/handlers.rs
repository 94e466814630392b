//! API Handlers
//!
//! HTTP request handlers for each lookup service endpoint.

use axum::{
    extract::{Path, State},
    http::{HeaderMap, HeaderName, HeaderValue},
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;

use crate::cache::{CachePolicy, CacheStats, CacheStore};
use crate::config::Config;
use crate::directory::{User, UserDirectory};
use crate::error::Result;
use crate::models::{
    age_header_secs, lenient_user_id, parse_user_id, user_cache_key, HealthResponse,
    MessageResponse, UserResponse,
};

/// Header carrying the lookup outcome
pub const CACHE_STATUS_HEADER: HeaderName = HeaderName::from_static("x-cache-status");
/// Header carrying the cached entry age in whole seconds
pub const CACHE_AGE_HEADER: HeaderName = HeaderName::from_static("x-cache-age");

/// Application state shared across all handlers.
///
/// The cache store is itself a shared handle, so cloning the state is cheap.
#[derive(Clone)]
pub struct AppState {
    /// Shared user cache
    pub cache: CacheStore<User>,
    /// Origin for cache misses
    pub directory: UserDirectory,
    /// Freshness thresholds applied to every user lookup
    pub policy: CachePolicy,
}

impl AppState {
    /// Creates a new AppState from its parts.
    pub fn new(cache: CacheStore<User>, directory: UserDirectory, policy: CachePolicy) -> Self {
        Self {
            cache,
            directory,
            policy,
        }
    }

    /// Creates a new AppState from configuration with the seeded directory.
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            CacheStore::new(config.origin_latency()),
            UserDirectory::seeded(),
            config.policy(),
        )
    }
}

/// Handler for GET /users/:id
///
/// Serves a user through the cache and reports the outcome in headers.
pub async fn get_user_handler(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Response> {
    let id = parse_user_id(&raw_id)?;

    let directory = state.directory.clone();
    let result = state
        .cache
        .lookup(&user_cache_key(id), move || directory.fetch(id), state.policy)
        .await?;

    let mut headers = HeaderMap::new();
    headers.insert(
        CACHE_STATUS_HEADER,
        HeaderValue::from_static(result.status.as_str()),
    );
    if let Some(age) = result.age {
        headers.insert(CACHE_AGE_HEADER, HeaderValue::from(age_header_secs(age)));
    }

    let body = UserResponse::from_result(result, Utc::now());
    Ok((headers, Json(body)).into_response())
}

/// Handler for GET /cache/stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<CacheStats> {
    Json(state.cache.stats().await)
}

/// Handler for DELETE /cache/:id
///
/// Succeeds whether or not the user was cached. The segment is read up to its
/// first non-digit, so `/cache/01` drops `user:1`; a segment with no leading
/// digits is used verbatim.
pub async fn invalidate_handler(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Json<MessageResponse> {
    let id = lenient_user_id(&raw_id).map_or(raw_id, |id| id.to_string());

    state.cache.invalidate(&user_cache_key(&id)).await;

    Json(MessageResponse::new(format!("Cache invalidated for user {}", id)))
}

/// Handler for DELETE /cache/clear
pub async fn clear_handler(State(state): State<AppState>) -> Json<MessageResponse> {
    state.cache.clear().await;
    Json(MessageResponse::new("All cache cleared"))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
