// Calgroups platform abstraction
// Provides platform-specific paths and utilities for Windows, macOS, and Linux.
//
// Uses `cfg(target_os)` for conditional compilation to select the correct
// platform-specific implementation at compile time.

use std::path::PathBuf;

#[cfg(target_os = "linux")]
mod linux;

#[cfg(target_os = "macos")]
mod macos;

#[cfg(target_os = "windows")]
mod windows;

/// Returns the platform-specific configuration directory for Calgroups.
///
/// - **Linux**: `~/.config/calgroups` (or `$XDG_CONFIG_HOME/calgroups`)
/// - **macOS**: `~/Library/Application Support/Calgroups`
/// - **Windows**: `%APPDATA%/Calgroups`
pub fn get_config_dir() -> PathBuf {
    #[cfg(target_os = "linux")]
    {
        linux::get_config_dir()
    }
    #[cfg(target_os = "macos")]
    {
        macos::get_config_dir()
    }
    #[cfg(target_os = "windows")]
    {
        windows::get_config_dir()
    }
}

/// Returns the platform-specific data directory for Calgroups.
///
/// - **Linux**: `~/.local/share/calgroups` (or `$XDG_DATA_HOME/calgroups`)
/// - **macOS**: `~/Library/Application Support/Calgroups`
/// - **Windows**: `%APPDATA%/Calgroups`
pub fn get_data_dir() -> PathBuf {
    #[cfg(target_os = "linux")]
    {
        linux::get_data_dir()
    }
    #[cfg(target_os = "macos")]
    {
        macos::get_data_dir()
    }
    #[cfg(target_os = "windows")]
    {
        windows::get_data_dir()
    }
}

/// Returns the platform-specific cache directory for Calgroups.
///
/// - **Linux**: `~/.cache/calgroups` (or `$XDG_CACHE_HOME/calgroups`)
/// - **macOS**: `~/Library/Caches/Calgroups`
/// - **Windows**: `%LOCALAPPDATA%/Calgroups/cache`
pub fn get_cache_dir() -> PathBuf {
    #[cfg(target_os = "linux")]
    {
        linux::get_cache_dir()
    }
    #[cfg(target_os = "macos")]
    {
        macos::get_cache_dir()
    }
    #[cfg(target_os = "windows")]
    {
        windows::get_cache_dir()
    }
}
