//! Weather widget state.
//!
//! The widget fetches nothing on mount. A preset button or a submitted
//! search issues one forecast request; the city title only changes once a
//! forecast for it arrives.

use glance_protocol::{DailyForecast, FetchFailure, FetchRequest, Generation, TOP_CITIES};
use tracing::debug;

use crate::search::SearchBox;

/// Shown while a forecast request is in flight.
pub const LOADING_TEXT: &str = "Fetching weather data...";

/// Shown before any city has been picked.
pub const EMPTY_TEXT: &str = "Select a city to view the forecast.";

/// Shown when the request or its decoding failed.
pub const FETCH_FAILED: &str = "Failed to fetch weather data.";

/// Returns the message for a city the provider does not know.
#[must_use]
pub fn invalid_city(city: &str) -> String {
    format!("Invalid city: {city}. Please try again.")
}

/// State of the weather widget.
#[derive(Debug, Clone, Default)]
pub struct WeatherState {
    /// City whose forecast is displayed.
    pub selected_city: Option<String>,
    /// Aggregated days of the displayed city.
    pub forecast: Vec<DailyForecast>,
    /// Whether a request is in flight.
    pub loading: bool,
    /// Error of the latest request.
    pub error: Option<String>,
    /// City search input.
    pub search: SearchBox,
    /// Preset button under the keyboard cursor.
    pub preset_cursor: usize,
    generation: Generation,
}

impl WeatherState {
    /// Creates an idle widget with no city selected.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds the widget for a fresh mount.
    ///
    /// The generation moves on, so answers to requests made before the
    /// reset are dropped.
    pub fn reset(&mut self) {
        *self = Self {
            generation: self.generation + 1,
            ..Self::new()
        };
    }

    /// Returns the generation of the latest request.
    #[must_use]
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Starts a forecast request for `city`.
    pub fn request(&mut self, city: impl Into<String>) -> FetchRequest {
        self.generation += 1;
        self.loading = true;
        self.error = None;
        FetchRequest::Forecast {
            generation: self.generation,
            city: city.into(),
        }
    }

    /// Requests the preset city at `index`.
    pub fn select_preset(&mut self, index: usize) -> Option<FetchRequest> {
        let city = TOP_CITIES.get(index)?;
        self.preset_cursor = index;
        Some(self.request(*city))
    }

    /// Submits the search box. Does nothing when it is blank.
    pub fn submit_search(&mut self) -> Option<FetchRequest> {
        let city = self.search.submit()?;
        Some(self.request(city))
    }

    /// Requests the displayed city again.
    pub fn refresh(&mut self) -> Option<FetchRequest> {
        let city = self.selected_city.clone()?;
        Some(self.request(city))
    }

    /// Moves the preset cursor, wrapping at both ends.
    pub fn move_cursor(&mut self, delta: isize) {
        let count = TOP_CITIES.len() as isize;
        self.preset_cursor = (self.preset_cursor as isize + delta).rem_euclid(count) as usize;
    }

    /// Returns the preset matching the displayed city.
    #[must_use]
    pub fn highlighted_preset(&self) -> Option<usize> {
        let city = self.selected_city.as_deref()?;
        TOP_CITIES.iter().position(|c| *c == city)
    }

    /// Applies a forecast outcome.
    ///
    /// Returns `false` and changes nothing when `generation` is not the
    /// latest request. On failure the previous forecast is kept.
    pub fn apply(
        &mut self,
        generation: Generation,
        city: String,
        result: Result<Vec<DailyForecast>, FetchFailure>,
    ) -> bool {
        if generation != self.generation {
            debug!(generation, latest = self.generation, %city, "dropping stale forecast");
            return false;
        }
        self.loading = false;
        match result {
            Ok(days) => {
                self.forecast = days;
                self.selected_city = Some(city);
            }
            Err(FetchFailure::Missing) => self.error = Some(invalid_city(&city)),
            Err(FetchFailure::Transport) => self.error = Some(FETCH_FAILED.to_string()),
        }
        true
    }
}
