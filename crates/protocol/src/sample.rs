//! Sample records for testing and demonstration.
//!
//! This module provides functions that build realistic forecasts, articles
//! and price series, so rendering and state code can be exercised without
//! a network connection.
//!
//! # Examples
//!
//! ```
//! use glance_protocol::sample::{sample_articles, sample_forecast};
//!
//! assert_eq!(sample_forecast().len(), 5);
//! assert_eq!(sample_articles(1, 5).len(), 5);
//! ```

use crate::finance::PricePoint;
use crate::news::Article;
use crate::weather::DailyForecast;

/// Returns a five-day forecast with a mix of icon codes.
#[must_use]
pub fn sample_forecast() -> Vec<DailyForecast> {
    vec![
        DailyForecast::new("Fri, Jan 5", 31.5, 22.1, "01d"),
        DailyForecast::new("Sat, Jan 6", 30.2, 21.8, "02d"),
        DailyForecast::new("Sun, Jan 7", 28.0, 20.4, "09d"),
        DailyForecast::new("Mon, Jan 8", 29.7, 21.0, "02n"),
        DailyForecast::new("Tue, Jan 9", 32.3, 23.5, "01d"),
    ]
}

/// Returns one page of articles.
///
/// Titles and URLs embed the page number and position, so articles from
/// different pages never compare equal.
///
/// # Examples
///
/// ```
/// use glance_protocol::sample::sample_articles;
///
/// let page = sample_articles(2, 3);
/// assert_eq!(page[0].title, "Headline 2.1");
/// ```
#[must_use]
pub fn sample_articles(page: u32, count: usize) -> Vec<Article> {
    (1..=count)
        .map(|n| {
            let mut article = Article::new(
                format!("Headline {page}.{n}"),
                format!("https://news.example.com/{page}/{n}"),
                "Example Wire",
            );
            article.description = Some(format!("Summary of story {n} on page {page}."));
            article.image_url = (n % 2 == 1).then(|| format!("https://img.example.com/{page}/{n}.jpg"));
            article.published_at = "2024-01-05T12:30:00Z".to_string();
            article
        })
        .collect()
}

/// Returns a chronological ten-point hourly price series.
#[must_use]
pub fn sample_price_points() -> Vec<PricePoint> {
    [
        ("10:00:00 AM", 184.10),
        ("11:00:00 AM", 184.95),
        ("12:00:00 PM", 185.40),
        ("1:00:00 PM", 185.02),
        ("2:00:00 PM", 186.30),
        ("3:00:00 PM", 186.88),
        ("4:00:00 PM", 186.15),
        ("5:00:00 PM", 186.60),
        ("6:00:00 PM", 187.05),
        ("7:00:00 PM", 187.25),
    ]
    .into_iter()
    .map(|(time, price)| PricePoint::new(time, price))
    .collect()
}
