//! Request and Response models for the lookup API
//!
//! Path validation on the way in, DTOs for the HTTP bodies on the way out.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{lenient_user_id, parse_user_id, user_cache_key};
pub use responses::{age_header_secs, HealthResponse, MessageResponse, UserResponse};
