// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Interface language and theme mode
//! - `[assistant]` - Model used by the AI assistant
//! - `[lexemes]` - Optional directory of lexeme tables overriding the packaged ones
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `NOTEMARK_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use notemark::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.general.language = Some("fr".to_string());
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

use crate::domain::{AssistantModel, Choice, ThemeMode};
use crate::error::{Error, Result};
use crate::paths;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// Lexeme key (in the `common` namespace) of the notice shown when the
/// settings file could not be read.
pub const CONFIG_LOAD_ERROR_KEY: &str = "notification_config_load_error";

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// AI assistant settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssistantConfig {
    /// Model the assistant dialog talks to.
    #[serde(default = "default_model", deserialize_with = "deserialize_model")]
    pub model: AssistantModel,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
        }
    }
}

/// Lexeme loading settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct LexemeConfig {
    /// Directory of `<namespace>/<language>.toml` tables applied over the
    /// packaged ones.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overlay_dir: Option<PathBuf>,
}

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub assistant: AssistantConfig,

    #[serde(default)]
    pub lexemes: LexemeConfig,
}

fn default_theme_mode() -> ThemeMode {
    ThemeMode::default_member()
}

fn default_model() -> AssistantModel {
    AssistantModel::default_member()
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    deserialize_choice(deserializer, "theme_mode")
}

fn deserialize_model<'de, D>(deserializer: D) -> std::result::Result<AssistantModel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    deserialize_choice(deserializer, "model")
}

/// Case-insensitive deserialization of a [`Choice`] key.
fn deserialize_choice<'de, D, T>(deserializer: D, field: &str) -> std::result::Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Choice,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    T::from_key(&raw).ok_or_else(|| D::Error::custom(format!("invalid {}: {}", field, raw)))
}

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with the lexeme key of a warning to show the user.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!("ignoring {}: {}", path.display(), err);
                    return (Config::default(), Some(CONFIG_LOAD_ERROR_KEY.to_string()));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}
