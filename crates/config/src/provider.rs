//! Per-provider endpoint and key settings.
//!
//! Each widget talks to one third-party HTTP API. The endpoint is
//! configurable so requests can be routed through a proxy that holds the
//! credential; in that setup the key is simply left unset.
//!
//! Every section falls back to its defaults field by field, so
//! `{ api_key: "k" }` is a complete section.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Default forecast endpoint.
pub const DEFAULT_WEATHER_URL: &str = "https://api.openweathermap.org/data/2.5/forecast";

/// Default headlines endpoint.
pub const DEFAULT_NEWS_URL: &str = "https://newsapi.org/v2/top-headlines";

/// Default stock quote endpoint.
pub const DEFAULT_FINANCE_URL: &str = "https://www.alphavantage.co/query";

/// Default headline country.
pub const DEFAULT_COUNTRY: &str = "us";

/// Default number of headlines per page.
pub const DEFAULT_PAGE_SIZE: u32 = 5;

/// Largest page size the headline provider accepts.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Endpoint and credential of the weather or finance provider.
///
/// # Examples
///
/// ```
/// use glance_config::ProviderConfig;
///
/// let config = ProviderConfig::new("https://proxy.local/weather");
/// assert!(config.api_key.is_none());
/// assert!(config.validate("weather").is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Endpoint URL, without query string.
    pub base_url: String,

    /// API key sent with each request, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

impl ProviderConfig {
    /// Creates a provider config without a key.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: None,
        }
    }

    /// Creates a provider config with a key.
    #[must_use]
    pub fn with_key(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: Some(api_key.into()),
        }
    }

    /// Default settings for the weather provider.
    #[must_use]
    pub fn weather() -> Self {
        Self::new(DEFAULT_WEATHER_URL)
    }

    /// Default settings for the finance provider.
    #[must_use]
    pub fn finance() -> Self {
        Self::new(DEFAULT_FINANCE_URL)
    }

    /// Checks that the endpoint is an HTTP(S) URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] otherwise.
    pub fn validate(&self, provider: &'static str) -> Result<()> {
        validate_base_url(provider, &self.base_url)
    }
}

/// Settings of the headline provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewsConfig {
    /// Endpoint URL, without query string.
    pub base_url: String,

    /// API key sent with each request, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Two-letter country code of the headlines.
    pub country: String,

    /// Number of articles per page.
    pub page_size: u32,
}

impl Default for NewsConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_NEWS_URL.to_string(),
            api_key: None,
            country: DEFAULT_COUNTRY.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl NewsConfig {
    /// Validates endpoint and page size.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint is invalid or the page size is
    /// outside `1..=100`.
    ///
    /// # Examples
    ///
    /// ```
    /// use glance_config::NewsConfig;
    ///
    /// let mut news = NewsConfig::default();
    /// assert!(news.validate().is_ok());
    ///
    /// news.page_size = 0;
    /// assert!(news.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        validate_base_url("news", &self.base_url)?;
        if !(1..=MAX_PAGE_SIZE).contains(&self.page_size) {
            return Err(ConfigError::InvalidPageSize(self.page_size));
        }
        Ok(())
    }
}

fn validate_base_url(provider: &'static str, url: &str) -> Result<()> {
    let trimmed = url.trim();
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        Ok(())
    } else {
        Err(ConfigError::InvalidBaseUrl {
            provider,
            url: url.to_string(),
        })
    }
}

/// Deserializes a provider section, filling absent fields from `default`.
pub(crate) fn provider_with_default<'de, D>(
    deserializer: D,
    default: fn() -> ProviderConfig,
) -> std::result::Result<ProviderConfig, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    struct Partial {
        base_url: Option<String>,
        api_key: Option<String>,
    }

    let partial = Partial::deserialize(deserializer)?;
    let fallback = default();
    Ok(ProviderConfig {
        base_url: partial.base_url.unwrap_or(fallback.base_url),
        api_key: partial.api_key.or(fallback.api_key),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_validate_accepts_http_and_https() {
        assert!(ProviderConfig::new("http://localhost:8080").validate("x").is_ok());
        assert!(ProviderConfig::new("https://example.com").validate("x").is_ok());
    }

    #[test]
    fn provider_validate_rejects_empty() {
        let err = ProviderConfig::new("  ").validate("finance").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidBaseUrl {
                provider: "finance",
                ..
            }
        ));
    }

    #[test]
    fn news_defaults() {
        let news = NewsConfig::default();
        assert_eq!(news.base_url, DEFAULT_NEWS_URL);
        assert_eq!(news.country, "us");
        assert_eq!(news.page_size, 5);
    }

    #[test]
    fn news_partial_section_keeps_defaults() {
        let news: NewsConfig = serde_json::from_str(r#"{"api_key": "k"}"#).unwrap();
        assert_eq!(news.base_url, DEFAULT_NEWS_URL);
        assert_eq!(news.api_key.as_deref(), Some("k"));
        assert_eq!(news.country, "us");
    }

    #[test]
    fn news_validate_rejects_oversized_page() {
        let news = NewsConfig {
            page_size: 101,
            ..Default::default()
        };
        assert!(matches!(news.validate(), Err(ConfigError::InvalidPageSize(101))));
    }

    #[test]
    fn api_key_not_serialized_when_none() {
        let json = serde_json::to_string(&ProviderConfig::weather()).unwrap();
        assert!(!json.contains("api_key"));
    }
}
