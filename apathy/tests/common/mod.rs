//! Common test utilities for integration tests.

use std::env;
use std::path::{Path, PathBuf};

/// Every environment variable the library reads.
#[allow(dead_code)]
pub const APATHY_ENV_VARS: [&str; 3] = ["APATHY_BASE_DIR", "APATHY_OUTPUT_FORMAT", "APATHY_LOG_MODE"];

/// RAII guard for setting and restoring environment variables.
///
/// Tests using this must be marked `#[serial]`.
#[allow(dead_code)]
pub struct EnvGuard {
    key: String,
    old_value: Option<String>,
}

#[allow(dead_code)]
impl EnvGuard {
    pub fn set(key: &str, value: &str) -> Self {
        let old_value = env::var(key).ok();
        env::set_var(key, value);
        Self {
            key: key.to_string(),
            old_value,
        }
    }

    pub fn remove(key: &str) -> Self {
        let old_value = env::var(key).ok();
        env::remove_var(key);
        Self {
            key: key.to_string(),
            old_value,
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match &self.old_value {
            Some(val) => env::set_var(&self.key, val),
            None => env::remove_var(&self.key),
        }
    }
}

/// Clear all `APATHY_*` variables for the lifetime of the returned guards.
#[allow(dead_code)]
pub fn clear_apathy_env_vars() -> Vec<EnvGuard> {
    APATHY_ENV_VARS.iter().map(|k| EnvGuard::remove(k)).collect()
}

/// Changes the working directory and restores it on drop.
///
/// Tests using this must be marked `#[serial]`.
#[allow(dead_code)]
pub struct CwdGuard {
    old: PathBuf,
}

#[allow(dead_code)]
impl CwdGuard {
    pub fn enter(dir: &Path) -> Self {
        let old = env::current_dir().unwrap();
        env::set_current_dir(dir).unwrap();
        Self { old }
    }
}

impl Drop for CwdGuard {
    fn drop(&mut self) {
        let _ = env::set_current_dir(&self.old);
    }
}
