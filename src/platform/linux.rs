// Calgroups platform paths for Linux
// Config: ~/.config/calgroups
// Data:   ~/.local/share/calgroups
// Cache:  ~/.cache/calgroups

use std::env;
use std::path::PathBuf;

/// Returns the configuration directory for Calgroups on Linux.
/// Uses `$XDG_CONFIG_HOME/calgroups` if set, otherwise `~/.config/calgroups`.
pub fn get_config_dir() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        PathBuf::from(xdg).join("calgroups")
    } else {
        let home = env::var("HOME").unwrap_or_else(|_| String::from("/tmp"));
        PathBuf::from(home).join(".config").join("calgroups")
    }
}

/// Returns the data directory for Calgroups on Linux.
/// Uses `$XDG_DATA_HOME/calgroups` if set, otherwise `~/.local/share/calgroups`.
pub fn get_data_dir() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_DATA_HOME") {
        PathBuf::from(xdg).join("calgroups")
    } else {
        let home = env::var("HOME").unwrap_or_else(|_| String::from("/tmp"));
        PathBuf::from(home)
            .join(".local")
            .join("share")
            .join("calgroups")
    }
}

/// Returns the cache directory for Calgroups on Linux.
/// Uses `$XDG_CACHE_HOME/calgroups` if set, otherwise `~/.cache/calgroups`.
pub fn get_cache_dir() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_CACHE_HOME") {
        PathBuf::from(xdg).join("calgroups")
    } else {
        let home = env::var("HOME").unwrap_or_else(|_| String::from("/tmp"));
        PathBuf::from(home).join(".cache").join("calgroups")
    }
}
