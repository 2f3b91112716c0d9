//! Helpers for tests that mutate the process environment

use std::env;
use std::sync::{Mutex, MutexGuard, OnceLock};

/// Serialize every test that reads or writes process environment variables
pub(crate) fn env_lock() -> MutexGuard<'static, ()> {
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Restores the named variables to their prior values on drop
pub(crate) struct EnvGuard {
    entries: Vec<(String, Option<String>)>,
}

impl EnvGuard {
    pub(crate) fn new(names: &[&str]) -> Self {
        let entries = names
            .iter()
            .map(|name| (name.to_string(), env::var(name).ok()))
            .collect();
        Self { entries }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (name, value) in self.entries.drain(..) {
            match value {
                Some(value) => env::set_var(&name, value),
                None => env::remove_var(&name),
            }
        }
    }
}
