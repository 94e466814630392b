//! SWR Cache - A cached user lookup service
//!
//! Serves user records through an in-memory stale-while-revalidate cache with
//! background refresh and age-based eviction.

pub mod api;
pub mod cache;
pub mod config;
pub mod directory;
pub mod error;
pub mod models;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use tasks::spawn_eviction_sweep;
