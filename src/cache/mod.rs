//! Cache Module
//!
//! Provides in-memory stale-while-revalidate caching with age-based eviction.

mod entry;
mod result;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use result::{CachePolicy, CacheResult, CacheSource, CacheStatus};
pub use stats::{CacheStats, KeyAge};
pub use store::CacheStore;
