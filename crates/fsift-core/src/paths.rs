//! Common filesystem paths used by fsift.

use std::path::PathBuf;

/// Base directory for fsift state (config).
///
/// Defaults to `~/.config/fsift`, but can be overridden via `FSIFT_DIR` for
/// testing or per-project setups.
pub fn fsift_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("FSIFT_DIR") {
        return PathBuf::from(dir);
    }

    let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
    PathBuf::from(home).join(".config").join("fsift")
}

/// Path to the fsift configuration file.
pub fn config_path() -> PathBuf {
    fsift_dir().join("config.toml")
}

#[doc(hidden)]
pub fn test_env_lock() -> std::sync::MutexGuard<'static, ()> {
    use std::sync::{Mutex, OnceLock};
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}
