//! Cache Store Module
//!
//! Stale-while-revalidate cache engine. A `CacheStore` is a cheap handle onto
//! one shared key/entry map; clones see the same entries.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::time::Instant;
use tracing::{debug, info};

use crate::cache::{CacheEntry, CachePolicy, CacheResult, CacheStats, CacheStatus, KeyAge};
use crate::error::{CacheError, Result};
use crate::tasks::spawn_refresh;

// == Cache Store ==
/// Shared cache storage with HIT / STALE / EXPIRED / MISS lookups.
pub struct CacheStore<T> {
    /// Key-value storage
    entries: Arc<RwLock<HashMap<String, CacheEntry<T>>>>,
    /// Simulated backing-store round trip on the synchronous fetch path
    origin_latency: Duration,
}

impl<T> Clone for CacheStore<T> {
    fn clone(&self) -> Self {
        Self {
            entries: Arc::clone(&self.entries),
            origin_latency: self.origin_latency,
        }
    }
}

impl<T> CacheStore<T>
where
    T: Clone + Send + Sync + 'static,
{
    // == Constructor ==
    /// Creates an empty store.
    ///
    /// # Arguments
    /// * `origin_latency` - Delay applied before every synchronous fetch
    pub fn new(origin_latency: Duration) -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            origin_latency,
        }
    }

    // == Lookup ==
    /// Returns the value for `key`, fetching or refreshing it as its age requires.
    ///
    /// - No entry: waits out the origin latency, fetches, stores. Status MISS.
    /// - Age below `stale_after`: cached value. Status HIT.
    /// - Age below `evict_after`: cached value returned at once while a detached
    ///   task refreshes the entry. Status STALE.
    /// - Otherwise: same as a miss, but status EXPIRED.
    ///
    /// Concurrent misses on one key are not coalesced; each caller fetches and
    /// the last fetch to complete owns the entry.
    ///
    /// # Errors
    /// `InvalidRequest` for an empty key, `Origin` when a synchronous fetch fails.
    pub async fn lookup<F, Fut>(&self, key: &str, fetch: F, policy: CachePolicy) -> Result<CacheResult<T>>
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = anyhow::Result<T>> + Send + 'static,
    {
        if key.is_empty() {
            return Err(CacheError::InvalidRequest("Key cannot be empty".to_string()));
        }

        let cached = {
            let entries = self.entries.read().await;
            entries.get(key).map(|entry| (entry.value.clone(), entry.age()))
        };

        let status = match cached {
            Some((value, age)) if age < policy.stale_after => {
                debug!("Cache HIT for {} (age: {}ms)", key, age.as_millis());
                return Ok(CacheResult::cached(value, age, CacheStatus::Hit));
            }
            Some((value, age)) if age < policy.evict_after => {
                info!(
                    "Cache STALE for {} (age: {}ms), refreshing in background",
                    key,
                    age.as_millis()
                );
                spawn_refresh(self.clone(), key.to_string(), fetch, policy.evict_after);
                return Ok(CacheResult::cached(value, age, CacheStatus::Stale));
            }
            Some((_, age)) => {
                info!("Cache EXPIRED for {} (age: {}ms)", key, age.as_millis());
                CacheStatus::Expired
            }
            None => {
                info!("Cache MISS for {}", key);
                CacheStatus::Miss
            }
        };

        tokio::time::sleep(self.origin_latency).await;

        let value = fetch().await.map_err(|source| CacheError::Origin {
            key: key.to_string(),
            source,
        })?;
        self.store(key, value.clone(), policy.evict_after).await;

        Ok(CacheResult::origin(value, status))
    }

    // == Store ==
    /// Overwrites the entry for `key` with a freshly stamped value.
    pub(crate) async fn store(&self, key: &str, value: T, evict_after: Duration) {
        let mut entries = self.entries.write().await;
        entries.insert(key.to_string(), CacheEntry::new(value, evict_after));
    }

    // == Invalidate ==
    /// Removes the entry for `key`; absent keys are ignored.
    pub async fn invalidate(&self, key: &str) {
        let removed = self.entries.write().await.remove(key).is_some();
        info!("Cache invalidated for {} (present: {})", key, removed);
    }

    // == Clear ==
    /// Removes every entry.
    pub async fn clear(&self) {
        let mut entries = self.entries.write().await;
        let count = entries.len();
        entries.clear();
        info!("All cache cleared ({} entries)", count);
    }

    // == Stats ==
    /// Snapshot of every key and its age, taken under a single lock.
    pub async fn stats(&self) -> CacheStats {
        let entries = self.entries.read().await;
        let now = Instant::now();
        let keys = entries
            .iter()
            .map(|(key, entry)| KeyAge {
                key: key.clone(),
                age: entry.age_at(now).as_millis() as u64,
            })
            .collect();
        CacheStats::from_keys(keys)
    }

    // == Evict Expired ==
    /// Removes entries whose current age has reached their retention window.
    ///
    /// Returns the number of entries removed.
    pub async fn evict_expired(&self) -> usize {
        let mut entries = self.entries.write().await;
        let now = Instant::now();
        let before = entries.len();

        entries.retain(|key, entry| {
            let expired = entry.is_expired_at(now);
            if expired {
                info!("Auto-expired cache for {}", key);
            }
            !expired
        });

        before - entries.len()
    }
}

// == Test Inspection ==
#[cfg(test)]
impl<T: Clone> CacheStore<T> {
    /// Returns a copy of the stored value without touching its metadata.
    pub(crate) async fn get_cached(&self, key: &str) -> Option<T> {
        let entries = self.entries.read().await;
        entries.get(key).map(|entry| entry.value.clone())
    }

    pub(crate) async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub(crate) async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}
