//! Logging utilities
//!
//! JSON `tracing` output on stderr, keeping stdout free for command output.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Default log level when neither `RUST_LOG` nor `--log-level` is given
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Build a filter from `RUST_LOG`, falling back to `log_level`
pub fn build_filter(log_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level))
}

/// Initialize the global tracing subscriber
///
/// Does nothing if a subscriber is already installed.
pub fn init_tracing(log_level: &str) {
    let console_layer = fmt::layer()
        .json()
        .with_writer(std::io::stderr)
        .with_filter(build_filter(log_level));

    let _ = tracing_subscriber::registry().with(console_layer).try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_env::{env_lock, EnvGuard};
    use std::env;

    #[test]
    fn test_filter_falls_back_to_level() {
        let _lock = env_lock();
        let _guard = EnvGuard::new(&["RUST_LOG"]);
        env::remove_var("RUST_LOG");

        assert_eq!(build_filter("warn").to_string(), "warn");
    }

    #[test]
    fn test_filter_prefers_rust_log() {
        let _lock = env_lock();
        let _guard = EnvGuard::new(&["RUST_LOG"]);
        env::set_var("RUST_LOG", "debug");

        assert_eq!(build_filter("warn").to_string(), "debug");
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init_tracing(DEFAULT_LOG_LEVEL);
        init_tracing("debug");
    }
}
