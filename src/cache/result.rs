//! Lookup Result Module
//!
//! Freshness policy passed into a lookup and the tagged result handed back.

use std::fmt;
use std::time::Duration;

use serde::Serialize;

// == Cache Policy ==
/// Freshness thresholds for a lookup.
///
/// Callers keep `stale_after <= evict_after`; the store does not check it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CachePolicy {
    /// Age from which data is served stale and refreshed in the background
    pub stale_after: Duration,
    /// Age from which data is refetched synchronously and swept
    pub evict_after: Duration,
}

impl CachePolicy {
    pub fn new(stale_after: Duration, evict_after: Duration) -> Self {
        Self {
            stale_after,
            evict_after,
        }
    }
}

// == Cache Status ==
/// Outcome of a lookup, surfaced as the `X-Cache-Status` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CacheStatus {
    Hit,
    Miss,
    Stale,
    Expired,
}

impl CacheStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CacheStatus::Hit => "HIT",
            CacheStatus::Miss => "MISS",
            CacheStatus::Stale => "STALE",
            CacheStatus::Expired => "EXPIRED",
        }
    }
}

impl fmt::Display for CacheStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// == Cache Source ==
/// Where the returned data came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CacheSource {
    Cache,
    Origin,
}

// == Cache Result ==
/// Data returned by a lookup together with its cache metadata.
#[derive(Debug, Clone)]
pub struct CacheResult<T> {
    pub data: T,
    pub source: CacheSource,
    /// Entry age at call time; present only when cached data is returned
    pub age: Option<Duration>,
    pub status: CacheStatus,
}

impl<T> CacheResult<T> {
    /// Result served from an existing entry (HIT or STALE).
    pub fn cached(data: T, age: Duration, status: CacheStatus) -> Self {
        Self {
            data,
            source: CacheSource::Cache,
            age: Some(age),
            status,
        }
    }

    /// Result freshly fetched from the origin (MISS or EXPIRED).
    pub fn origin(data: T, status: CacheStatus) -> Self {
        Self {
            data,
            source: CacheSource::Origin,
            age: None,
            status,
        }
    }
}
