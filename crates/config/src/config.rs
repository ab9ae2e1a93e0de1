//! Core configuration struct and loading logic.
//!
//! This module provides the main [`Config`] struct which aggregates the
//! settings of the three data providers.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::Result;
use crate::keys::{Provider, non_blank};
use crate::persistence::{find_config_file, read_config_file, write_config_file};
use crate::provider::{NewsConfig, ProviderConfig, provider_with_default};

/// The main configuration struct for the glance application.
///
/// # Examples
///
/// ```
/// use glance_config::{Config, ProviderConfig};
///
/// let config = Config::default();
/// assert!(config.weather.api_key.is_none());
///
/// let config = Config {
///     finance: ProviderConfig::with_key("https://proxy.local/av", "demo"),
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Forecast provider.
    #[serde(default = "ProviderConfig::weather", deserialize_with = "weather_section")]
    pub weather: ProviderConfig,

    /// Headline provider.
    #[serde(default)]
    pub news: NewsConfig,

    /// Stock quote provider.
    #[serde(default = "ProviderConfig::finance", deserialize_with = "finance_section")]
    pub finance: ProviderConfig,
}

fn weather_section<'de, D: Deserializer<'de>>(d: D) -> std::result::Result<ProviderConfig, D::Error> {
    provider_with_default(d, ProviderConfig::weather)
}

fn finance_section<'de, D: Deserializer<'de>>(d: D) -> std::result::Result<ProviderConfig, D::Error> {
    provider_with_default(d, ProviderConfig::finance)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            weather: ProviderConfig::weather(),
            news: NewsConfig::default(),
            finance: ProviderConfig::finance(),
        }
    }
}

impl Config {
    /// Creates a configuration with the built-in endpoints and no keys.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from the default file locations.
    ///
    /// Searches for configuration files in the following order:
    ///
    /// 1. Local: `./glance.json5` or `./glance.json`
    /// 2. User: `~/.config/glance/config.json5` or `~/.config/glance/config.json`
    ///
    /// If no configuration file is found, returns a default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file is found but cannot be
    /// read, parsed, or validated.
    pub fn load() -> Result<Self> {
        match find_config_file() {
            Some(path) => Self::load_from(path),
            None => Ok(Self::default()),
        }
    }

    /// Loads configuration from a specific file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or validated.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use glance_config::Config;
    ///
    /// # fn example() -> glance_config::Result<()> {
    /// let config = Config::load_from("custom-config.json5")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn load_from(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let config: Config = read_config_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Saves the configuration to a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save_to(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        write_config_file(path, self)
    }

    /// Validates every provider section.
    ///
    /// # Errors
    ///
    /// Returns the first validation failure.
    pub fn validate(&self) -> Result<()> {
        self.weather.validate(Provider::Weather.name())?;
        self.news.validate()?;
        self.finance.validate(Provider::Finance.name())?;
        Ok(())
    }

    /// Applies `GLANCE_*` environment overrides.
    #[must_use]
    pub fn with_env_overrides(self) -> Self {
        self.apply_overrides(|var| std::env::var(var).ok())
    }

    /// Applies overrides resolved through `lookup`.
    ///
    /// Separated from [`Config::with_env_overrides`] so tests need not touch
    /// the process environment.
    ///
    /// # Examples
    ///
    /// ```
    /// use glance_config::Config;
    ///
    /// let config = Config::default().apply_overrides(|var| {
    ///     (var == "GLANCE_WEATHER_API_KEY").then(|| "from-env".to_string())
    /// });
    /// assert_eq!(config.weather.api_key.as_deref(), Some("from-env"));
    /// ```
    #[must_use]
    pub fn apply_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        for provider in Provider::ALL {
            let key = non_blank(&lookup, provider.key_var());
            let base_url = non_blank(&lookup, provider.base_url_var());
            let (slot_key, slot_url) = match provider {
                Provider::Weather => (&mut self.weather.api_key, &mut self.weather.base_url),
                Provider::News => (&mut self.news.api_key, &mut self.news.base_url),
                Provider::Finance => (&mut self.finance.api_key, &mut self.finance.base_url),
            };
            if key.is_some() {
                *slot_key = key;
            }
            if let Some(url) = base_url {
                *slot_url = url;
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::{DEFAULT_FINANCE_URL, DEFAULT_NEWS_URL, DEFAULT_WEATHER_URL};
    use tempfile::TempDir;

    #[test]
    fn default_config() {
        let config = Config::default();
        assert_eq!(config.weather.base_url, DEFAULT_WEATHER_URL);
        assert_eq!(config.news.base_url, DEFAULT_NEWS_URL);
        assert_eq!(config.finance.base_url, DEFAULT_FINANCE_URL);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn new_config() {
        assert_eq!(Config::new(), Config::default());
    }

    #[test]
    fn deserialize_with_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn deserialize_partial_sections() {
        let json = r#"{"weather": {"api_key": "w"}, "finance": {"base_url": "http://localhost:9000"}}"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.weather.base_url, DEFAULT_WEATHER_URL);
        assert_eq!(config.weather.api_key.as_deref(), Some("w"));
        assert_eq!(config.finance.base_url, "http://localhost:9000");
        assert!(config.finance.api_key.is_none());
    }

    #[test]
    fn validate_rejects_bad_weather_url() {
        let config = Config {
            weather: ProviderConfig::new(""),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json5");
        std::fs::write(
            &path,
            r#"
            {
                weather: { api_key: "owm" },
                // proxy holds the key
                news: { base_url: "https://proxy.local/news", page_size: 10 },
            }
            "#,
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.weather.api_key.as_deref(), Some("owm"));
        assert_eq!(config.news.base_url, "https://proxy.local/news");
        assert_eq!(config.news.page_size, 10);
        assert_eq!(config.news.country, "us");
    }

    #[test]
    fn load_from_rejects_invalid_page_size() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json5");
        std::fs::write(&path, "{ news: { page_size: 0 } }").unwrap();

        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn save_and_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");

        let original = Config {
            finance: ProviderConfig::with_key("https://proxy.local/av", "demo"),
            ..Default::default()
        };

        original.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), original);
    }

    #[test]
    fn env_overrides_win_over_file_values() {
        let config = Config {
            news: NewsConfig {
                api_key: Some("from-file".to_string()),
                ..Default::default()
            },
            ..Default::default()
        }
        .apply_overrides(|var| match var {
            "GLANCE_NEWS_API_KEY" => Some("from-env".to_string()),
            "GLANCE_FINANCE_BASE_URL" => Some("http://127.0.0.1:1234".to_string()),
            _ => None,
        });

        assert_eq!(config.news.api_key.as_deref(), Some("from-env"));
        assert_eq!(config.finance.base_url, "http://127.0.0.1:1234");
        assert!(config.weather.api_key.is_none());
    }

    #[test]
    fn blank_env_values_are_ignored() {
        let config = Config::default()
            .apply_overrides(|var| (var == "GLANCE_WEATHER_API_KEY").then(|| "  ".to_string()));
        assert!(config.weather.api_key.is_none());
    }
}
