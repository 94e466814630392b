//! Cache Statistics Module
//!
//! Point-in-time snapshot of the keys held by the cache and their ages.

use serde::Serialize;

// == Key Age ==
/// A cached key and its age in milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyAge {
    pub key: String,
    pub age: u64,
}

// == Cache Stats ==
/// Snapshot returned by `CacheStore::stats`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheStats {
    /// Number of entries at snapshot time
    pub total_keys: usize,
    /// Every entry with its age, sorted by key
    pub keys: Vec<KeyAge>,
}

impl CacheStats {
    // == Constructor ==
    /// Builds a snapshot from key ages, ordering them by key.
    pub fn from_keys(mut keys: Vec<KeyAge>) -> Self {
        keys.sort_by(|a, b| a.key.cmp(&b.key));
        Self {
            total_keys: keys.len(),
            keys,
        }
    }

    // == Age Lookup ==
    /// Returns the age recorded for `key`, if present in the snapshot.
    pub fn age_of(&self, key: &str) -> Option<u64> {
        self.keys.iter().find(|k| k.key == key).map(|k| k.age)
    }
}
