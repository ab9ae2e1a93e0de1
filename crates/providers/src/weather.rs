//! Forecast decoding and daily aggregation.
//!
//! The forecast provider returns 3-hourly samples. [`aggregate_daily`]
//! groups them by calendar date and reduces each group to one
//! [`DailyForecast`] row.

use std::collections::HashMap;

use chrono::NaiveDate;
use glance_protocol::{DailyForecast, FORECAST_DAYS};
use serde::Deserialize;

use crate::error::{Error, Result};

/// Top-level forecast document. `list` is absent for unknown cities.
#[derive(Debug, Deserialize)]
pub struct ForecastResponse {
    /// Hourly samples, oldest first.
    pub list: Option<Vec<ForecastEntry>>,
}

impl ForecastResponse {
    /// Returns the samples, or [`Error::MissingField`] when absent.
    ///
    /// # Errors
    ///
    /// Fails if the provider omitted `list`.
    pub fn into_entries(self) -> Result<Vec<ForecastEntry>> {
        self.list.ok_or(Error::MissingField { field: "list" })
    }
}

/// One forecast sample.
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastEntry {
    /// Sample time, `YYYY-MM-DD HH:MM:SS`.
    pub dt_txt: String,
    /// Temperature readings.
    pub main: Readings,
    /// Conditions; only the first is used.
    #[serde(default)]
    pub weather: Vec<Condition>,
}

impl ForecastEntry {
    /// Builds a sample from its raw parts.
    #[must_use]
    pub fn new(dt_txt: &str, temp_max: f64, temp_min: f64, icon: &str) -> Self {
        Self {
            dt_txt: dt_txt.to_string(),
            main: Readings { temp_max, temp_min },
            weather: vec![Condition {
                icon: icon.to_string(),
            }],
        }
    }

    fn date_key(&self) -> &str {
        self.dt_txt.split(' ').next().unwrap_or_default()
    }

    fn icon(&self) -> &str {
        self.weather.first().map_or("", |c| c.icon.as_str())
    }
}

/// Temperature readings of a sample, in degrees Celsius.
#[derive(Debug, Clone, Deserialize)]
pub struct Readings {
    /// Maximum temperature.
    pub temp_max: f64,
    /// Minimum temperature.
    pub temp_min: f64,
}

/// A weather condition of a sample.
#[derive(Debug, Clone, Deserialize)]
pub struct Condition {
    /// Icon code such as `01d`.
    pub icon: String,
}

#[derive(Debug)]
struct DayGroup<'a> {
    date: &'a str,
    max: f64,
    min: f64,
    icons: Vec<&'a str>,
}

/// Reduces hourly samples to at most [`FORECAST_DAYS`] daily rows.
///
/// Days appear in the order their date was first seen. The maximum is
/// taken over `temp_max`, the minimum over `temp_min`, and the icon is the
/// [most frequent](most_frequent_icon) code of the day.
///
/// # Examples
///
/// ```
/// use glance_providers::weather::{ForecastEntry, aggregate_daily};
///
/// let entries = [
///     ForecastEntry::new("2024-01-05 09:00:00", 30.0, 24.0, "01d"),
///     ForecastEntry::new("2024-01-05 12:00:00", 32.0, 26.0, "02d"),
///     ForecastEntry::new("2024-01-06 09:00:00", 29.0, 22.0, "09d"),
/// ];
/// let days = aggregate_daily(&entries);
/// assert_eq!(days.len(), 2);
/// assert_eq!(days[0].date, "Fri, Jan 5");
/// assert_eq!(days[0].max_temp, 32.0);
/// assert_eq!(days[0].min_temp, 24.0);
/// ```
#[must_use]
pub fn aggregate_daily(entries: &[ForecastEntry]) -> Vec<DailyForecast> {
    let mut groups: Vec<DayGroup<'_>> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for entry in entries {
        let date = entry.date_key();
        let slot = *index.entry(date).or_insert_with(|| {
            groups.push(DayGroup {
                date,
                max: f64::NEG_INFINITY,
                min: f64::INFINITY,
                icons: Vec::new(),
            });
            groups.len() - 1
        });
        let group = &mut groups[slot];
        group.max = group.max.max(entry.main.temp_max);
        group.min = group.min.min(entry.main.temp_min);
        group.icons.push(entry.icon());
    }

    groups
        .into_iter()
        .take(FORECAST_DAYS)
        .map(|group| {
            DailyForecast::new(
                date_label(group.date),
                group.max,
                group.min,
                most_frequent_icon(&group.icons).unwrap_or_default(),
            )
        })
        .collect()
}

/// Picks the most frequent icon code.
///
/// When several codes share the highest count, the one whose last
/// occurrence comes latest wins.
///
/// # Examples
///
/// ```
/// use glance_providers::weather::most_frequent_icon;
///
/// assert_eq!(most_frequent_icon(&["01d", "02d", "02d"]).as_deref(), Some("02d"));
/// assert_eq!(most_frequent_icon(&["01d", "02d"]).as_deref(), Some("02d"));
/// assert_eq!(most_frequent_icon(&["02d", "01d", "01d", "02d"]).as_deref(), Some("02d"));
/// assert_eq!(most_frequent_icon(&[]), None);
/// ```
#[must_use]
pub fn most_frequent_icon(codes: &[&str]) -> Option<String> {
    let mut tally: HashMap<&str, (usize, usize)> = HashMap::new();
    for (position, &code) in codes.iter().enumerate() {
        let (count, last) = tally.entry(code).or_insert((0, 0));
        *count += 1;
        *last = position;
    }
    tally
        .into_iter()
        .max_by_key(|(_, rank)| *rank)
        .map(|(code, _)| code.to_string())
}

/// Formats a `YYYY-MM-DD` key as `Fri, Jan 5`.
///
/// Keys that are not dates are shown as-is.
#[must_use]
pub fn date_label(date: &str) -> String {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map(|d| d.format("%a, %b %-d").to_string())
        .unwrap_or_else(|_| date.to_string())
}
