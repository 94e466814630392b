//! Background Refresh Task
//!
//! Detached refetch started by a STALE lookup. The caller already has the
//! stale value; the outcome is routed to `on_refresh_complete`.

use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::cache::CacheStore;

/// Spawns a task that fetches a fresh value for `key` and stores it.
///
/// The store write is unconditional, so when several refreshes race the one
/// that completes last wins. The handle is returned for tests and callers that
/// want to await completion; `lookup` drops it.
///
/// # Arguments
/// * `store` - Handle onto the shared cache
/// * `key` - Key being refreshed
/// * `fetch` - Origin fetch supplied by the lookup caller
/// * `evict_after` - Retention window recorded on the refreshed entry
pub fn spawn_refresh<T, F, Fut>(
    store: CacheStore<T>,
    key: String,
    fetch: F,
    evict_after: Duration,
) -> JoinHandle<()>
where
    T: Clone + Send + Sync + 'static,
    F: FnOnce() -> Fut + Send + 'static,
    Fut: Future<Output = anyhow::Result<T>> + Send + 'static,
{
    tokio::spawn(async move {
        let outcome = fetch().await;
        on_refresh_complete(&store, &key, outcome, evict_after).await;
    })
}

/// Applies a finished refresh: store on success, log and drop on failure.
///
/// A failed refresh leaves the existing entry as it was; it keeps aging and is
/// eventually refetched synchronously or swept.
async fn on_refresh_complete<T>(
    store: &CacheStore<T>,
    key: &str,
    outcome: anyhow::Result<T>,
    evict_after: Duration,
) where
    T: Clone + Send + Sync + 'static,
{
    match outcome {
        Ok(value) => {
            store.store(key, value, evict_after).await;
            info!("Background refresh completed for {}", key);
        }
        Err(err) => {
            warn!("Background refresh failed for {}: {:#}", key, err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_refresh_stores_fetched_value() {
        let store: CacheStore<String> = CacheStore::new(Duration::from_millis(500));

        let handle = spawn_refresh(
            store.clone(),
            "u1".to_string(),
            || async { Ok::<_, anyhow::Error>("fresh".to_string()) },
            Duration::from_secs(300),
        );
        handle.await.unwrap();

        assert_eq!(store.get_cached("u1").await.as_deref(), Some("fresh"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_refresh_failure_is_dropped() {
        let store: CacheStore<String> = CacheStore::new(Duration::from_millis(500));

        let handle = spawn_refresh(
            store.clone(),
            "u1".to_string(),
            || async { Err::<String, _>(anyhow::anyhow!("origin unavailable")) },
            Duration::from_secs(300),
        );

        // The task itself completes cleanly; the failure never escapes it.
        assert!(handle.await.is_ok());
        assert!(store.is_empty().await);
    }

    #[tokio::test(start_paused = true)]
    async fn test_racing_refreshes_last_completion_wins() {
        let store: CacheStore<String> = CacheStore::new(Duration::from_millis(500));

        let first = spawn_refresh(
            store.clone(),
            "u1".to_string(),
            || async {
                tokio::time::sleep(Duration::from_secs(3)).await;
                Ok::<_, anyhow::Error>("issued first".to_string())
            },
            Duration::from_secs(300),
        );
        let second = spawn_refresh(
            store.clone(),
            "u1".to_string(),
            || async {
                tokio::time::sleep(Duration::from_secs(1)).await;
                Ok::<_, anyhow::Error>("issued second".to_string())
            },
            Duration::from_secs(300),
        );

        second.await.unwrap();
        assert_eq!(store.get_cached("u1").await.as_deref(), Some("issued second"));

        first.await.unwrap();
        assert_eq!(store.get_cached("u1").await.as_deref(), Some("issued first"));
    }
}
