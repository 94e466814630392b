//! API Module
//!
//! HTTP handlers and routing for the cached user lookup service.
//!
//! # Endpoints
//! - `GET /users/:id` - Look up a user through the cache
//! - `GET /cache/stats` - List cached keys with their ages
//! - `DELETE /cache/:id` - Invalidate one user
//! - `DELETE /cache/clear` - Clear the cache
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
