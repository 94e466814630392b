//! Request validation for the lookup API
//!
//! Path parameters arrive as raw strings and are checked here before any
//! cache work happens.

use crate::error::{CacheError, Result};

/// Lowest user id served by the directory
pub const MIN_USER_ID: i64 = 1;
/// Highest user id served by the directory
pub const MAX_USER_ID: i64 = 4;

/// Parses a user id path segment.
///
/// Returns `InvalidRequest` when the segment is not an integer in
/// `MIN_USER_ID..=MAX_USER_ID`.
pub fn parse_user_id(raw: &str) -> Result<u32> {
    raw.trim()
        .parse::<i64>()
        .ok()
        .filter(|id| (MIN_USER_ID..=MAX_USER_ID).contains(id))
        .map(|id| id as u32)
        .ok_or_else(|| {
            CacheError::InvalidRequest(format!(
                "Invalid user ID. Must be {}-{}",
                MIN_USER_ID, MAX_USER_ID
            ))
        })
}

/// Reads the leading integer of a path segment, ignoring anything after it.
///
/// `"01"` and `"1abc"` both give `1`. No range check is applied; `None` when
/// the segment does not start with an optionally signed digit run.
pub fn lenient_user_id(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let digits_start = usize::from(trimmed.starts_with(['+', '-']));
    let digits_len = trimmed[digits_start..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits_len == 0 {
        return None;
    }
    trimmed[..digits_start + digits_len].parse().ok()
}

/// Cache key under which a user record is stored.
pub fn user_cache_key(id: impl std::fmt::Display) -> String {
    format!("user:{}", id)
}
