#![allow(dead_code)]

use glance_config::{Config, NewsConfig, ProviderConfig};
use glance_providers::DashboardClient;
use httpmock::MockServer;

pub const WEATHER_PATH: &str = "/data/2.5/forecast";
pub const NEWS_PATH: &str = "/v2/top-headlines";
pub const FINANCE_PATH: &str = "/query";

pub fn setup_server() -> MockServer {
    MockServer::start()
}

/// Points every provider at `server`, with test keys.
pub fn keyed_config(server: &MockServer) -> Config {
    Config {
        weather: ProviderConfig::with_key(server.url(WEATHER_PATH), "owm-test"),
        news: NewsConfig {
            base_url: server.url(NEWS_PATH),
            api_key: Some("news-test".to_string()),
            ..NewsConfig::default()
        },
        finance: ProviderConfig::with_key(server.url(FINANCE_PATH), "av-test"),
    }
}

pub fn client_for(server: &MockServer) -> DashboardClient {
    DashboardClient::new(&keyed_config(server)).unwrap()
}

pub fn forecast_body(dates: &[&str], samples_per_day: usize) -> String {
    let entries: Vec<String> = dates
        .iter()
        .flat_map(|date| {
            (0..samples_per_day).map(move |n| {
                format!(
                    r#"{{"dt_txt": "{date} {:02}:00:00", "main": {{"temp_max": {}, "temp_min": {}}}, "weather": [{{"icon": "01d"}}]}}"#,
                    n * 3,
                    30 + n,
                    20 + n
                )
            })
        })
        .collect();
    format!(r#"{{"cod": "200", "list": [{}]}}"#, entries.join(","))
}

pub fn headlines_body(page: u32, count: usize) -> String {
    let articles: Vec<String> = (1..=count)
        .map(|n| {
            format!(
                r#"{{"source": {{"name": "Example Wire"}}, "title": "Headline {page}.{n}", "description": "Story {n}", "url": "https://news.example.com/{page}/{n}", "urlToImage": null, "publishedAt": "2024-01-05T12:30:00Z"}}"#
            )
        })
        .collect();
    format!(r#"{{"status": "ok", "articles": [{}]}}"#, articles.join(","))
}

/// Twelve hourly bars, newest first, as the quote provider sends them.
pub fn intraday_body() -> String {
    let bars: Vec<String> = (8..=19)
        .rev()
        .map(|hour| format!(r#""2024-01-05 {hour:02}:00:00": {{"1. open": "{}.0000"}}"#, 100 + hour))
        .collect();
    format!(
        r#"{{"Meta Data": {{"2. Symbol": "AAPL"}}, "Time Series (60min)": {{{}}}}}"#,
        bars.join(",")
    )
}
