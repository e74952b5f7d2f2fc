// Calgroups platform paths for Windows
// Config: %APPDATA%/Calgroups
// Data:   %APPDATA%/Calgroups
// Cache:  %LOCALAPPDATA%/Calgroups/cache

use std::env;
use std::path::PathBuf;

/// Returns the configuration directory for Calgroups on Windows.
/// `%APPDATA%/Calgroups`
pub fn get_config_dir() -> PathBuf {
    let appdata =
        env::var("APPDATA").unwrap_or_else(|_| String::from("C:\\Users\\Default\\AppData\\Roaming"));
    PathBuf::from(appdata).join("Calgroups")
}

/// Returns the data directory for Calgroups on Windows.
/// `%APPDATA%/Calgroups`
pub fn get_data_dir() -> PathBuf {
    let appdata =
        env::var("APPDATA").unwrap_or_else(|_| String::from("C:\\Users\\Default\\AppData\\Roaming"));
    PathBuf::from(appdata).join("Calgroups")
}

/// Returns the cache directory for Calgroups on Windows.
/// `%LOCALAPPDATA%/Calgroups/cache`
pub fn get_cache_dir() -> PathBuf {
    let local_appdata = env::var("LOCALAPPDATA")
        .unwrap_or_else(|_| String::from("C:\\Users\\Default\\AppData\\Local"));
    PathBuf::from(local_appdata)
        .join("Calgroups")
        .join("cache")
}
