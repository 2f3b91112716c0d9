//! Configuration management module
//!
//! This module handles loading application settings from environment
//! variables and an optional `.env` file.

pub mod env_file;
pub mod hosts;
pub mod settings;
pub mod source;

#[cfg(test)]
pub(crate) mod test_env;

pub use env_file::{apply_env_file, read_env_file, DEFAULT_ENV_FILE};
pub use hosts::{normalize_allowed_hosts, parse_allowed_hosts};
pub use settings::Settings;
pub use source::EnvSource;
