//! CORS allow-list normalization
//!
//! `ALLOWED_HOSTS` may arrive as a comma-separated string or as an
//! already-structured list. Anything else falls back to allowing every host.

use serde_json::Value;

use crate::error::ConfigError;

pub const ALLOWED_HOSTS_KEY: &str = "ALLOWED_HOSTS";

/// Wildcard entry meaning "any host"
pub const ANY_HOST: &str = "*";

/// Allow-list used when the variable is unset or has an unsupported shape
pub fn default_allowed_hosts() -> Vec<String> {
    vec![ANY_HOST.to_string()]
}

/// Split a comma-separated host list, trimming entries and dropping empty ones
pub fn split_hosts(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|host| !host.is_empty())
        .map(str::to_string)
        .collect()
}

/// Normalize a raw allow-list value
///
/// - string: split on `,` (see [`split_hosts`])
/// - list of strings: returned unchanged
/// - any other shape: `["*"]`
pub fn normalize_allowed_hosts(raw: &Value) -> Result<Vec<String>, ConfigError> {
    match raw {
        Value::String(s) => Ok(split_hosts(s)),
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(index, item)| match item {
                Value::String(host) => Ok(host.clone()),
                other => Err(ConfigError::InvalidValue {
                    key: ALLOWED_HOSTS_KEY,
                    reason: format!("entry {} must be a string, got {}", index, other),
                }),
            })
            .collect(),
        _ => Ok(default_allowed_hosts()),
    }
}

/// Parse the environment form of `ALLOWED_HOSTS`
///
/// The value is decoded as JSON first, so `["a","b"]` is a list and `42` is
/// a number. Text that is not valid JSON is treated as a plain string.
pub fn parse_allowed_hosts(raw: &str) -> Result<Vec<String>, ConfigError> {
    if raw.is_empty() {
        return Ok(Vec::new());
    }

    let value = serde_json::from_str::<Value>(raw)
        .unwrap_or_else(|_| Value::String(raw.to_string()));
    normalize_allowed_hosts(&value)
}
