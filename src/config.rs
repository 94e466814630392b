//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::time::Duration;

use crate::cache::CachePolicy;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Age in seconds after which cached data is served stale
    pub stale_after: u64,
    /// Age in seconds after which cached data is no longer served
    pub evict_after: u64,
    /// Simulated backing-store latency in milliseconds
    pub origin_latency_ms: u64,
    /// Eviction sweep interval in seconds
    pub sweep_interval: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `PORT` - HTTP server port (default: 4000)
    /// - `STALE_AFTER_SECS` - Stale threshold in seconds (default: 30)
    /// - `EVICT_AFTER_SECS` - Eviction threshold in seconds (default: 300)
    /// - `ORIGIN_LATENCY_MS` - Simulated origin latency (default: 500)
    /// - `SWEEP_INTERVAL_SECS` - Eviction sweep frequency in seconds (default: 1, minimum: 1)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            server_port: env_or("PORT", defaults.server_port),
            stale_after: env_or("STALE_AFTER_SECS", defaults.stale_after),
            evict_after: env_or("EVICT_AFTER_SECS", defaults.evict_after),
            origin_latency_ms: env_or("ORIGIN_LATENCY_MS", defaults.origin_latency_ms),
            // A zero interval would spin the sweep on the write lock.
            sweep_interval: env_or("SWEEP_INTERVAL_SECS", defaults.sweep_interval).max(1),
        }
    }

    /// Freshness thresholds handed to every lookup.
    pub fn policy(&self) -> CachePolicy {
        CachePolicy::new(
            Duration::from_secs(self.stale_after),
            Duration::from_secs(self.evict_after),
        )
    }

    pub fn origin_latency(&self) -> Duration {
        Duration::from_millis(self.origin_latency_ms)
    }

    /// Time between eviction sweeps, never less than one second.
    pub fn sweep_period(&self) -> Duration {
        Duration::from_secs(self.sweep_interval.max(1))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 4000,
            stale_after: 30,
            evict_after: 300,
            origin_latency_ms: 500,
            sweep_interval: 1,
        }
    }
}

fn env_or<T: std::str::FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
