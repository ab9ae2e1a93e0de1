//! Environment overrides for provider keys and endpoints.
//!
//! Keys are usually kept out of config files. Each provider reads
//! `GLANCE_<PROVIDER>_API_KEY` and `GLANCE_<PROVIDER>_BASE_URL`; a set,
//! non-blank variable wins over the file value.

use std::fmt;

/// One of the three data providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Provider {
    /// Forecast provider.
    Weather,
    /// Headline provider.
    News,
    /// Stock quote provider.
    Finance,
}

impl Provider {
    /// All providers.
    pub const ALL: [Self; 3] = [Self::Weather, Self::News, Self::Finance];

    /// Section name in the config file.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Weather => "weather",
            Self::News => "news",
            Self::Finance => "finance",
        }
    }

    /// Environment variable holding this provider's API key.
    ///
    /// # Examples
    ///
    /// ```
    /// use glance_config::Provider;
    ///
    /// assert_eq!(Provider::News.key_var(), "GLANCE_NEWS_API_KEY");
    /// ```
    #[must_use]
    pub const fn key_var(self) -> &'static str {
        match self {
            Self::Weather => "GLANCE_WEATHER_API_KEY",
            Self::News => "GLANCE_NEWS_API_KEY",
            Self::Finance => "GLANCE_FINANCE_API_KEY",
        }
    }

    /// Environment variable holding this provider's endpoint.
    #[must_use]
    pub const fn base_url_var(self) -> &'static str {
        match self {
            Self::Weather => "GLANCE_WEATHER_BASE_URL",
            Self::News => "GLANCE_NEWS_BASE_URL",
            Self::Finance => "GLANCE_FINANCE_BASE_URL",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Looks up `var` with `lookup`, ignoring blank values.
pub(crate) fn non_blank(lookup: &impl Fn(&str) -> Option<String>, var: &str) -> Option<String> {
    lookup(var)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
