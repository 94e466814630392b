//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with age tracking.

use std::time::Duration;

use tokio::time::Instant;

// == Cache Entry ==
/// Represents a single cache entry with value and metadata.
#[derive(Debug, Clone)]
pub struct CacheEntry<T> {
    /// The stored value
    pub value: T,
    /// When the value was last fetched from the origin
    pub stored_at: Instant,
    /// Retention window the value was stored with
    pub evict_after: Duration,
}

impl<T> CacheEntry<T> {
    // == Constructor ==
    /// Creates a new cache entry stamped with the current time.
    ///
    /// # Arguments
    /// * `value` - The value to store
    /// * `evict_after` - Age at which the entry must no longer be served
    pub fn new(value: T, evict_after: Duration) -> Self {
        Self {
            value,
            stored_at: Instant::now(),
            evict_after,
        }
    }

    // == Age ==
    /// Returns the time elapsed since the value was stored.
    pub fn age(&self) -> Duration {
        self.age_at(Instant::now())
    }

    /// Returns the entry age measured against `now`, saturating at zero.
    pub fn age_at(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.stored_at)
    }

    // == Is Expired ==
    /// Checks whether the entry has outlived its retention window.
    ///
    /// Boundary condition: an entry whose age equals `evict_after` is expired.
    pub fn is_expired_at(&self, now: Instant) -> bool {
        self.age_at(now) >= self.evict_after
    }
}
