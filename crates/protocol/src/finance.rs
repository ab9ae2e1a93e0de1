//! Stock price types.
//!
//! This module defines the [`PricePoint`] record plotted by the finance
//! widget and the preset ticker symbols.

use serde::{Deserialize, Serialize};

/// Ticker symbols offered as one-click presets, in display order.
pub const PRESET_SYMBOLS: [&str; 5] = ["AAPL", "GOOGL", "TSLA", "MSFT", "AMZN"];

/// Symbol fetched when the finance widget mounts.
pub const DEFAULT_SYMBOL: &str = "AAPL";

/// Number of most recent series entries plotted.
pub const SERIES_WINDOW: usize = 10;

/// One plotted sample of an intraday price series.
///
/// # Examples
///
/// ```
/// use glance_protocol::PricePoint;
///
/// let point = PricePoint::new("7:00:00 PM", 187.25);
/// assert_eq!(point.time, "7:00:00 PM");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Clock-time label for the sample, e.g. `"7:00:00 PM"`.
    pub time: String,
    /// Opening price of the interval.
    pub price: f64,
}

impl PricePoint {
    /// Creates a new price point.
    #[must_use]
    pub fn new(time: impl Into<String>, price: f64) -> Self {
        Self {
            time: time.into(),
            price,
        }
    }
}

/// Returns the lowest and highest price of a series, if it is not empty.
///
/// # Examples
///
/// ```
/// use glance_protocol::PricePoint;
/// use glance_protocol::finance::price_range;
///
/// let points = vec![PricePoint::new("a", 3.0), PricePoint::new("b", 1.0)];
/// assert_eq!(price_range(&points), Some((1.0, 3.0)));
/// assert_eq!(price_range(&[]), None);
/// ```
#[must_use]
pub fn price_range(points: &[PricePoint]) -> Option<(f64, f64)> {
    let first = points.first()?.price;
    Some(points.iter().fold((first, first), |(lo, hi), p| {
        (lo.min(p.price), hi.max(p.price))
    }))
}
