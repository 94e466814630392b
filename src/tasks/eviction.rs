//! Eviction Sweep Task
//!
//! Background task that periodically removes entries past their retention window.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::CacheStore;

/// Spawns a background task that periodically sweeps expired cache entries.
///
/// The task runs in an infinite loop, sleeping for the specified interval
/// between sweeps. Each sweep re-checks every entry's current age under the
/// write lock, so an entry refreshed since its last store is kept.
///
/// # Arguments
/// * `cache` - Handle onto the shared cache
/// * `interval` - Time between sweeps
///
/// # Returns
/// A JoinHandle for the spawned task, which can be used to abort the task
/// during graceful shutdown.
///
/// # Example
/// ```ignore
/// let cache = CacheStore::<User>::new(Duration::from_millis(500));
/// let sweep_handle = spawn_eviction_sweep(cache.clone(), Duration::from_secs(1));
/// // Later, during shutdown:
/// sweep_handle.abort();
/// ```
pub fn spawn_eviction_sweep<T>(cache: CacheStore<T>, interval: Duration) -> JoinHandle<()>
where
    T: Clone + Send + Sync + 'static,
{
    tokio::spawn(async move {
        info!(
            "Starting eviction sweep with interval of {}ms",
            interval.as_millis()
        );

        loop {
            tokio::time::sleep(interval).await;

            let removed = cache.evict_expired().await;

            if removed > 0 {
                info!("Eviction sweep: removed {} expired entries", removed);
            } else {
                debug!("Eviction sweep: no expired entries found");
            }
        }
    })
}
