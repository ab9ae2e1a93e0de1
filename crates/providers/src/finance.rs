//! Intraday series decoding.
//!
//! The quote provider returns a JSON object keyed by timestamp, newest
//! first. The crate enables `serde_json/preserve_order` so the map keeps
//! document order.

use chrono::NaiveDateTime;
use glance_protocol::{PricePoint, SERIES_WINDOW};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// Key of the hourly series in the provider document.
pub const SERIES_KEY: &str = "Time Series (60min)";

/// Field of a bar that holds the opening price.
const OPEN_KEY: &str = "1. open";

/// Top-level intraday document.
#[derive(Debug, Deserialize)]
pub struct IntradayResponse {
    /// Bars keyed by timestamp, in document order.
    #[serde(rename = "Time Series (60min)")]
    pub series: Option<Map<String, Value>>,
}

impl IntradayResponse {
    /// Shapes the series into chronological [`PricePoint`]s.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingField`] if the series is absent, which is how
    /// the provider reports unknown symbols and exhausted quotas.
    pub fn into_points(self) -> Result<Vec<PricePoint>> {
        let series = self.series.ok_or(Error::MissingField { field: SERIES_KEY })?;
        Ok(latest_points(series.into_iter().map(|(stamp, bar)| {
            let open = bar
                .get(OPEN_KEY)
                .and_then(Value::as_str)
                .and_then(|s| s.trim().parse::<f64>().ok())
                .filter(|price| price.is_finite());
            (stamp, open)
        })))
    }
}

/// Keeps the first [`SERIES_WINDOW`] bars and returns them oldest first.
///
/// Bars without a parsable, finite opening price are dropped after the
/// window is taken, so the result may be shorter than the window.
///
/// # Examples
///
/// ```
/// use glance_providers::finance::latest_points;
///
/// let bars = vec![
///     ("2024-01-05 19:00:00".to_string(), Some(187.25)),
///     ("2024-01-05 18:00:00".to_string(), Some(187.05)),
/// ];
/// let points = latest_points(bars);
/// assert_eq!(points[0].time, "6:00:00 PM");
/// assert_eq!(points[1].price, 187.25);
/// ```
#[must_use]
pub fn latest_points<I>(bars: I) -> Vec<PricePoint>
where
    I: IntoIterator<Item = (String, Option<f64>)>,
{
    let mut points: Vec<PricePoint> = bars
        .into_iter()
        .take(SERIES_WINDOW)
        .filter_map(|(stamp, open)| open.map(|price| PricePoint::new(time_label(&stamp), price)))
        .collect();
    points.reverse();
    points
}

/// Formats a provider timestamp as a 12-hour clock time, `7:00:00 PM`.
///
/// The provider reports US/Eastern wall-clock time; the label shows it
/// unchanged. Unparsable stamps are shown as-is.
#[must_use]
pub fn time_label(stamp: &str) -> String {
    NaiveDateTime::parse_from_str(stamp, "%Y-%m-%d %H:%M:%S")
        .map(|t| t.format("%-I:%M:%S %p").to_string())
        .unwrap_or_else(|_| stamp.to_string())
}
