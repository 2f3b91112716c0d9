//! Configuration error types

use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading [`Settings`](crate::config::Settings)
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid integer for {key}: {value:?}")]
    InvalidInteger {
        key: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("Invalid value for {key}: {reason}")]
    InvalidValue { key: &'static str, reason: String },

    #[error("Failed to read environment file {}: {source}", .path.display())]
    EnvFile {
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },
}

impl ConfigError {
    /// Name of the environment variable the error refers to, if any
    pub fn key(&self) -> Option<&'static str> {
        match self {
            ConfigError::InvalidInteger { key, .. } | ConfigError::InvalidValue { key, .. } => {
                Some(*key)
            }
            ConfigError::EnvFile { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_integer_message() {
        let source = "abc".parse::<i64>().unwrap_err();
        let err = ConfigError::InvalidInteger {
            key: "CACHE_TTL",
            value: "abc".to_string(),
            source,
        };
        assert_eq!(err.to_string(), "Invalid integer for CACHE_TTL: \"abc\"");
        assert_eq!(err.key(), Some("CACHE_TTL"));
    }

    #[test]
    fn test_env_file_has_no_key() {
        let err = ConfigError::EnvFile {
            path: PathBuf::from(".env"),
            source: dotenvy::Error::LineParse("=oops".to_string(), 0),
        };
        assert!(err.to_string().starts_with("Failed to read environment file .env"));
        assert_eq!(err.key(), None);
    }
}
