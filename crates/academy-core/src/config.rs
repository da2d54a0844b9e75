//! Environment lookups with defaults.
//!
//! Services call `dotenv::dotenv().ok()` first, then read individual
//! variables through these helpers.

use std::str::FromStr;

/// `key` from the environment, or `default` when unset or not valid UTF-8.
pub fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// `key` from the environment when set and non-empty.
pub fn env_opt(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

/// `key` parsed as `T`, or `default` when unset or unparsable.
pub fn env_parse_or<T: FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
