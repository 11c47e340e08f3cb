// SPDX-License-Identifier: MPL-2.0
//! Centralized path management for application directories.
//!
//! # Path Resolution Order
//!
//! 1. **Explicit override** - parameter to `_with_override()` functions (CLI, tests)
//! 2. **Environment variable** (`NOTEMARK_CONFIG_DIR`)
//! 3. **Platform default** - via `dirs` crate

use std::path::PathBuf;

/// Application name used for directory naming.
const APP_NAME: &str = "Notemark";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "NOTEMARK_CONFIG_DIR";

/// Name of the default lexeme overlay directory inside the config directory.
pub const LEXEME_OVERLAY_DIR: &str = "lexemes";

/// Returns the application config directory path.
///
/// This directory holds `settings.toml` and the default lexeme overlay.
///
/// # Resolution Order
///
/// 1. `NOTEMARK_CONFIG_DIR` environment variable (if set and non-empty)
/// 2. Platform-specific config directory:
///    - Linux: `~/.config/Notemark/`
///    - macOS: `~/Library/Application Support/Notemark/`
///    - Windows: `C:\Users\<User>\AppData\Roaming\Notemark\`
///
/// Returns `None` if the config directory cannot be determined (rare edge case).
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// Returns the application config directory path with an optional override.
///
/// # Arguments
///
/// * `override_path` - Optional path to use instead of default. Takes highest priority.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    // Priority 1: Explicit override
    if let Some(path) = override_path {
        return Some(path);
    }

    // Priority 2: Environment variable
    if let Ok(env_path) = std::env::var(ENV_CONFIG_DIR) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    // Priority 3: Platform default with app name
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

/// Returns the lexeme overlay directory used when the settings name none.
pub fn get_default_overlay_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    get_app_config_dir_with_override(override_path).map(|mut path| {
        path.push(LEXEME_OVERLAY_DIR);
        path
    })
}
