//! Environment variable snapshots
//!
//! Settings are bound from an [`EnvSource`] rather than from `std::env`
//! directly, so the same binding code serves the process environment and
//! hand-built maps in tests.

use std::collections::HashMap;
use std::env;

/// Exact-case snapshot of environment variables
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvSource {
    vars: HashMap<String, String>,
}

impl EnvSource {
    /// Create an empty source (every lookup misses)
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot the current process environment
    ///
    /// Variables whose name or value is not valid UTF-8 are skipped.
    pub fn from_process() -> Self {
        env::vars_os()
            .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
            .collect()
    }

    /// Look up a variable by its exact name
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// Set a single variable, replacing any previous value
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(key.into(), value.into());
    }

    /// Layer `pairs` on top of this source; later values win
    pub fn overlay<I, K, V>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (key, value) in pairs {
            self.set(key, value);
        }
    }

    /// Number of variables in the snapshot
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Whether the snapshot holds no variables
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for EnvSource
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut source = Self::new();
        source.overlay(iter);
        source
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_sensitive() {
        let source: EnvSource = [("aws_region", "eu-west-1")].into_iter().collect();
        assert_eq!(source.get("aws_region"), Some("eu-west-1"));
        assert_eq!(source.get("AWS_REGION"), None);
    }

    #[test]
    fn test_overlay_replaces_existing() {
        let mut source: EnvSource = [("AWS_REGION", "us-east-1"), ("S3_REGION", "us-east-1")]
            .into_iter()
            .collect();
        source.overlay([("AWS_REGION", "ap-south-1")]);

        assert_eq!(source.get("AWS_REGION"), Some("ap-south-1"));
        assert_eq!(source.get("S3_REGION"), Some("us-east-1"));
        assert_eq!(source.len(), 2);
    }

    #[test]
    fn test_empty_source() {
        let source = EnvSource::new();
        assert!(source.is_empty());
        assert_eq!(source.get("PATH"), None);
    }
}
