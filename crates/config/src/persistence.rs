//! Where glance keeps its files, and how they are read and written.
//!
//! Files are read as JSON5, which also accepts plain JSON, and written as
//! pretty-printed JSON. The config file is looked up in this order:
//!
//! 1. `./glance.json5`, `./glance.json`
//! 2. `<config dir>/glance/config.json5`, `<config dir>/glance/config.json`
//!
//! `<config dir>` is `~/.config` on Linux and the platform equivalent
//! elsewhere. The theme preference lives next to the config file, see
//! [`crate::Preferences::default_path`].

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

/// Config file names in the working directory, in priority order.
const LOCAL_FILE_NAMES: [&str; 2] = ["glance.json5", "glance.json"];

/// Application directory under the platform config directory.
const USER_CONFIG_DIR: &str = "glance";

/// Config file names in the user config directory, in priority order.
const USER_FILE_NAMES: [&str; 2] = ["config.json5", "config.json"];

/// Returns the first config file that exists.
///
/// `None` means the built-in defaults apply.
///
/// # Examples
///
/// ```no_run
/// use glance_config::persistence::find_config_file;
///
/// match find_config_file() {
///     Some(path) => println!("using {}", path.display()),
///     None => println!("using built-in endpoints"),
/// }
/// ```
#[must_use]
pub fn find_config_file() -> Option<PathBuf> {
    let local = LOCAL_FILE_NAMES.iter().map(PathBuf::from);
    let user = dirs::config_dir()
        .map(|dir| dir.join(USER_CONFIG_DIR))
        .into_iter()
        .flat_map(|dir| USER_FILE_NAMES.iter().map(move |name| dir.join(name)));
    first_existing(local.chain(user))
}

fn first_existing(candidates: impl IntoIterator<Item = PathBuf>) -> Option<PathBuf> {
    candidates.into_iter().find(|path| path.is_file())
}

/// Returns `<config dir>/glance`.
///
/// # Errors
///
/// Returns [`ConfigError::NoHomeDirectory`] if the platform has no config
/// directory.
pub fn user_config_dir() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join(USER_CONFIG_DIR))
        .ok_or(ConfigError::NoHomeDirectory)
}

/// Reads a JSON5 (or JSON) file into `T`.
///
/// # Errors
///
/// Returns [`ConfigError::ReadFile`] if the file cannot be read and
/// [`ConfigError::ParseJson5`] if its content does not match `T`.
///
/// # Examples
///
/// ```no_run
/// use glance_config::Config;
/// use glance_config::persistence::read_config_file;
///
/// # fn main() -> glance_config::Result<()> {
/// let config: Config = read_config_file("glance.json5")?;
/// println!("{} headlines per page", config.news.page_size);
/// # Ok(())
/// # }
/// ```
pub fn read_config_file<T: serde::de::DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json5::from_str(&content)?)
}

/// Writes `value` as pretty JSON, creating missing parent directories.
///
/// serde_json5 cannot serialize, so saved files are plain JSON, which the
/// reader accepts.
///
/// # Errors
///
/// Returns [`ConfigError::SerializeJson`] if `value` cannot be serialized
/// and [`ConfigError::WriteFile`] if the directory or file cannot be
/// written.
pub fn write_config_file<T: serde::Serialize>(path: impl AsRef<Path>, value: &T) -> Result<()> {
    let path = path.as_ref();
    let write_error = |source: std::io::Error| ConfigError::WriteFile {
        path: path.to_path_buf(),
        source,
    };

    let content = serde_json::to_string_pretty(value)?;
    if let Some(parent) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_error)?;
    }
    fs::write(path, content).map_err(write_error)
}
