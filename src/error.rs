//! Error types for the lookup service
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

// == Cache Error Enum ==
/// Unified error type for the cache engine and its HTTP façade.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Malformed or out-of-range request data, rejected before the engine runs
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The origin fetch failed on the synchronous MISS/EXPIRED path
    #[error("Origin fetch failed for {key}")]
    Origin {
        key: String,
        #[source]
        source: anyhow::Error,
    },

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for CacheError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            CacheError::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            // Origin detail stays in the logs; callers get an opaque 500.
            CacheError::Origin { key, source } => {
                error!("Origin error for {}: {:#}", key, source);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            CacheError::Internal(msg) => {
                error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the lookup service.
pub type Result<T> = std::result::Result<T, CacheError>;
