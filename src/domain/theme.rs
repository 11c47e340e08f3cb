// SPDX-License-Identifier: MPL-2.0
//! Application theme selection.

use super::choice::Choice;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => {
                // Detect system theme; default to dark on detection error
                !matches!(dark_light::detect(), Ok(dark_light::Mode::Light))
            }
        }
    }

    /// Key of the menu label in the `settings` namespace.
    #[must_use]
    pub fn lexeme_key(self) -> &'static str {
        match self {
            ThemeMode::Light => "theme_light",
            ThemeMode::Dark => "theme_dark",
            ThemeMode::System => "theme_system",
        }
    }
}

impl Choice for ThemeMode {
    const SET: &'static str = "theme";
    const ALL: &'static [Self] = &[ThemeMode::Light, ThemeMode::Dark, ThemeMode::System];

    fn key(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
            ThemeMode::System => "system",
        }
    }

    fn is_default(self) -> bool {
        self == ThemeMode::default()
    }
}
