//! Background Tasks Module
//!
//! Detached work owned by the cache engine.
//!
//! # Tasks
//! - Refresh: refetches a stale entry after its lookup has returned
//! - Eviction sweep: removes expired entries at a configured interval

mod eviction;
mod refresh;

pub use eviction::spawn_eviction_sweep;
pub use refresh::spawn_refresh;
