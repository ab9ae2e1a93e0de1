//! HTTP client for the three data providers.
//!
//! This module provides [`DashboardClient`], which issues one GET per fetch
//! and decodes the answer into protocol types.

use std::time::Duration;

use glance_config::{Config, NewsConfig, ProviderConfig};
use glance_protocol::{Article, DailyForecast, NewsCategory, PricePoint};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};

use crate::error::{Error, Result};
use crate::finance::IntradayResponse;
use crate::news::HeadlinesResponse;
use crate::weather::{ForecastResponse, aggregate_daily};

/// Per-request timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Endpoint of one provider.
///
/// The key is held as a [`SecretString`] so it never shows up in debug
/// output or traces.
#[derive(Debug, Clone)]
pub struct Endpoint {
    base_url: String,
    api_key: Option<SecretString>,
}

impl Endpoint {
    /// Creates an endpoint from a base URL and optional key.
    #[must_use]
    pub fn new(base_url: impl Into<String>, api_key: Option<SecretString>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key,
        }
    }

    /// Returns the base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns whether a key is configured.
    #[must_use]
    pub fn has_key(&self) -> bool {
        self.api_key.is_some()
    }

    fn key_param(&self, name: &'static str) -> Option<(&'static str, String)> {
        self.api_key
            .as_ref()
            .map(|key| (name, key.expose_secret().to_string()))
    }
}

impl From<&ProviderConfig> for Endpoint {
    fn from(config: &ProviderConfig) -> Self {
        Self::new(
            config.base_url.trim(),
            config.api_key.clone().map(SecretString::from),
        )
    }
}

impl From<&NewsConfig> for Endpoint {
    fn from(config: &NewsConfig) -> Self {
        Self::new(
            config.base_url.trim(),
            config.api_key.clone().map(SecretString::from),
        )
    }
}

/// Client for the forecast, headline and quote providers.
///
/// A provider without a key gets no key parameter, which is how requests
/// are routed through a proxy that injects the credential.
///
/// # Examples
///
/// ```no_run
/// use glance_config::Config;
/// use glance_protocol::NewsCategory;
/// use glance_providers::DashboardClient;
///
/// # async fn example() -> glance_providers::Result<()> {
/// let client = DashboardClient::new(&Config::default())?;
/// let articles = client.fetch_headlines(NewsCategory::Technology, 1).await?;
/// println!("{} headlines", articles.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct DashboardClient {
    http: reqwest::Client,
    weather: Endpoint,
    news: Endpoint,
    finance: Endpoint,
    country: String,
    page_size: u32,
}

impl DashboardClient {
    /// Creates a client for the endpoints in `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialised (for
    /// example, when no TLS backend is available).
    #[instrument(skip(config), fields(
        weather_key = config.weather.api_key.is_some(),
        news_key = config.news.api_key.is_some(),
        finance_key = config.finance.api_key.is_some(),
    ))]
    pub fn new(config: &Config) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("glance/", env!("CARGO_PKG_VERSION")))
            .build()?;
        debug!("created provider client");

        Ok(Self {
            http,
            weather: Endpoint::from(&config.weather),
            news: Endpoint::from(&config.news),
            finance: Endpoint::from(&config.finance),
            country: config.news.country.clone(),
            page_size: config.news.page_size,
        })
    }

    /// Returns the forecast endpoint.
    #[must_use]
    pub fn weather(&self) -> &Endpoint {
        &self.weather
    }

    /// Returns the headline endpoint.
    #[must_use]
    pub fn news(&self) -> &Endpoint {
        &self.news
    }

    /// Returns the quote endpoint.
    #[must_use]
    pub fn finance(&self) -> &Endpoint {
        &self.finance
    }

    /// Fetches the 5-day forecast for `city` and aggregates it per day.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingField`](crate::Error::MissingField) for an
    /// unknown city, or a transport/decode error.
    #[instrument(skip(self))]
    pub async fn fetch_forecast(&self, city: &str) -> Result<Vec<DailyForecast>> {
        let response: ForecastResponse = self
            .get_json(&self.weather, &forecast_query(&self.weather, city))
            .await?;
        let entries = response.into_entries()?;
        let days = aggregate_daily(&entries);
        debug!(samples = entries.len(), days = days.len(), "aggregated forecast");
        Ok(days)
    }

    /// Fetches one page of top headlines.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingField`](crate::Error::MissingField) when the
    /// provider sends no `articles`, or a transport/decode error.
    #[instrument(skip(self, category), fields(category = %category))]
    pub async fn fetch_headlines(&self, category: NewsCategory, page: u32) -> Result<Vec<Article>> {
        let query = headlines_query(&self.news, &self.country, self.page_size, category, page);
        let response: HeadlinesResponse = self.get_json(&self.news, &query).await?;
        let articles = response.into_articles()?;
        debug!(count = articles.len(), "fetched headlines");
        Ok(articles)
    }

    /// Fetches the hourly price series of `symbol`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingField`](crate::Error::MissingField) when the
    /// series is absent, or a transport/decode error.
    #[instrument(skip(self))]
    pub async fn fetch_intraday(&self, symbol: &str) -> Result<Vec<PricePoint>> {
        let response: IntradayResponse = self
            .get_json(&self.finance, &intraday_query(&self.finance, symbol))
            .await?;
        let points = response.into_points()?;
        debug!(count = points.len(), "fetched price series");
        Ok(points)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &Endpoint,
        query: &[(&'static str, String)],
    ) -> Result<T> {
        let response = self
            .http
            .get(endpoint.base_url())
            .query(query)
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            // Error documents still decode; the missing data field decides.
            warn!(%status, "provider returned an error status");
        }
        serde_json::from_str(&body).map_err(|e| {
            warn!(error = %e, bytes = body.len(), "response is not valid JSON");
            Error::Decode(e)
        })
    }
}

/// Builds the forecast query string parameters.
#[must_use]
pub fn forecast_query(endpoint: &Endpoint, city: &str) -> Vec<(&'static str, String)> {
    let mut query = vec![("q", city.to_string()), ("units", "metric".to_string())];
    query.extend(endpoint.key_param("appid"));
    query
}

/// Builds the headline query string parameters.
#[must_use]
pub fn headlines_query(
    endpoint: &Endpoint,
    country: &str,
    page_size: u32,
    category: NewsCategory,
    page: u32,
) -> Vec<(&'static str, String)> {
    let mut query = vec![
        ("country", country.to_string()),
        ("category", category.as_str().to_string()),
        ("pageSize", page_size.to_string()),
        ("page", page.to_string()),
    ];
    query.extend(endpoint.key_param("apiKey"));
    query
}

/// Builds the intraday query string parameters.
#[must_use]
pub fn intraday_query(endpoint: &Endpoint, symbol: &str) -> Vec<(&'static str, String)> {
    let mut query = vec![
        ("function", "TIME_SERIES_INTRADAY".to_string()),
        ("symbol", symbol.to_string()),
        ("interval", "60min".to_string()),
    ];
    query.extend(endpoint.key_param("apikey"));
    query
}
