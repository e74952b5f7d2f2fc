// Calgroups platform paths for macOS
// Config: ~/Library/Application Support/Calgroups
// Data:   ~/Library/Application Support/Calgroups
// Cache:  ~/Library/Caches/Calgroups

use std::env;
use std::path::PathBuf;

/// Returns the home directory on macOS.
fn home_dir() -> PathBuf {
    PathBuf::from(env::var("HOME").unwrap_or_else(|_| String::from("/tmp")))
}

/// Returns the configuration directory for Calgroups on macOS.
/// `~/Library/Application Support/Calgroups`
pub fn get_config_dir() -> PathBuf {
    home_dir()
        .join("Library")
        .join("Application Support")
        .join("Calgroups")
}

/// Returns the data directory for Calgroups on macOS.
/// `~/Library/Application Support/Calgroups`
pub fn get_data_dir() -> PathBuf {
    home_dir()
        .join("Library")
        .join("Application Support")
        .join("Calgroups")
}

/// Returns the cache directory for Calgroups on macOS.
/// `~/Library/Caches/Calgroups`
pub fn get_cache_dir() -> PathBuf {
    home_dir().join("Library").join("Caches").join("Calgroups")
}
