//! Weather forecast types.
//!
//! This module defines the [`DailyForecast`] record rendered by the weather
//! widget, the fixed list of preset cities, and the mapping from provider
//! icon codes to terminal glyphs.

use serde::{Deserialize, Serialize};

/// Number of days shown in the forecast table.
pub const FORECAST_DAYS: usize = 5;

/// Cities offered as one-click presets, in display order.
pub const TOP_CITIES: [&str; 10] = [
    "Mumbai",
    "Lucknow",
    "Kolkata",
    "Patna",
    "Chennai",
    "Bhopal",
    "Jaipur",
    "Bangalore",
    "Ahmedabad",
    "Medak",
];

/// A one-day summary derived from the provider's 3-hour samples.
///
/// # Examples
///
/// ```
/// use glance_protocol::DailyForecast;
///
/// let day = DailyForecast::new("Fri, Jan 5", 31.5, 22.0, "01d");
/// assert!(day.max_temp >= day.min_temp);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyForecast {
    /// Display label for the date, e.g. `"Fri, Jan 5"`.
    pub date: String,
    /// Highest `temp_max` sample of the day, in °C.
    pub max_temp: f64,
    /// Lowest `temp_min` sample of the day, in °C.
    pub min_temp: f64,
    /// Representative provider icon code, e.g. `"02d"`.
    pub icon: String,
}

impl DailyForecast {
    /// Creates a new daily forecast record.
    #[must_use]
    pub fn new(date: impl Into<String>, max_temp: f64, min_temp: f64, icon: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            max_temp,
            min_temp,
            icon: icon.into(),
        }
    }

    /// Returns the icon classification for this day.
    #[must_use]
    pub fn weather_icon(&self) -> WeatherIcon {
        WeatherIcon::from_code(&self.icon)
    }
}

/// Coarse classification of a provider icon code.
///
/// Day (`d`) and night (`n`) variants map to the same classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeatherIcon {
    /// Clear sky (`01d`/`01n`).
    Sun,
    /// Few clouds (`02d`/`02n`).
    Clouds,
    /// Shower rain (`09d`/`09n`).
    Rain,
    /// Snow (`13d`/`13n`).
    Snow,
    /// Any other code.
    Overcast,
}

impl WeatherIcon {
    /// Classifies a provider icon code.
    ///
    /// # Examples
    ///
    /// ```
    /// use glance_protocol::WeatherIcon;
    ///
    /// assert_eq!(WeatherIcon::from_code("01n"), WeatherIcon::Sun);
    /// assert_eq!(WeatherIcon::from_code("50d"), WeatherIcon::Overcast);
    /// ```
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        match code {
            "01d" | "01n" => Self::Sun,
            "02d" | "02n" => Self::Clouds,
            "09d" | "09n" => Self::Rain,
            "13d" | "13n" => Self::Snow,
            _ => Self::Overcast,
        }
    }

    /// Returns the glyph drawn in the forecast table.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Sun => '\u{2600}',                    // ☀
            Self::Clouds | Self::Overcast => '\u{2601}', // ☁
            Self::Rain => '\u{2602}',                   // ☂
            Self::Snow => '\u{2744}',                   // ❄
        }
    }

    /// Returns a short label shown next to the glyph.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Sun => "Sunny",
            Self::Clouds => "Cloudy",
            Self::Rain => "Rain",
            Self::Snow => "Snow",
            Self::Overcast => "Overcast",
        }
    }
}

/// Formats a temperature the way the forecast table shows it.
///
/// Whole numbers drop their fractional part.
///
/// # Examples
///
/// ```
/// use glance_protocol::format_temperature;
///
/// assert_eq!(format_temperature(31.5), "31.5°C");
/// assert_eq!(format_temperature(30.0), "30°C");
/// ```
#[must_use]
pub fn format_temperature(celsius: f64) -> String {
    format!("{celsius}°C")
}
