//! The persisted theme preference.
//!
//! Stored apart from the main config, at
//! `~/.config/glance/preferences.json`, because the app rewrites it every
//! time the theme is toggled.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::persistence::{read_config_file, user_config_dir, write_config_file};

/// Preferences file name inside the user config directory.
const PREFERENCES_FILE: &str = "preferences.json";

/// Light or dark colour scheme.
///
/// # Examples
///
/// ```
/// use glance_config::ThemeMode;
///
/// assert_eq!(ThemeMode::default(), ThemeMode::Dark);
/// assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeMode {
    /// Light background.
    Light,
    /// Dark background.
    #[default]
    Dark,
}

impl ThemeMode {
    /// Returns the other mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Returns `true` for [`ThemeMode::Dark`].
    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

/// User preferences that survive restarts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    /// Selected theme.
    #[serde(default)]
    pub theme: ThemeMode,
}

impl Preferences {
    /// Returns `~/.config/glance/preferences.json`.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn default_path() -> Result<PathBuf> {
        Ok(user_config_dir()?.join(PREFERENCES_FILE))
    }

    /// Reads preferences from `path`.
    ///
    /// Returns `Ok(None)` when the file does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Option<Self>> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(None);
        }
        read_config_file(path).map(Some)
    }

    /// Writes preferences to `path`, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
        write_config_file(path, self)
    }
}
