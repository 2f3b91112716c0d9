//! Environment-driven settings for an AWS-backed web API

// Public modules
pub mod config;
pub mod error;
pub mod logging;

// Re-export commonly used types
pub use config::Settings;
pub use error::ConfigError;
