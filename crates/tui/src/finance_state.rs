//! Finance widget state.

use glance_protocol::{
    DEFAULT_SYMBOL, FetchFailure, FetchRequest, Generation, PRESET_SYMBOLS, PricePoint,
};
use tracing::debug;

use crate::search::SearchBox;

/// Shown while a series request is in flight.
pub const LOADING_TEXT: &str = "Loading stock data...";

/// Shown when the provider answered without a series.
pub const LOAD_FAILED: &str = "Failed to load stock data.";

/// Shown when the request or its decoding failed.
pub const FETCH_ERROR: &str = "Error fetching stock data.";

/// State of the finance widget.
#[derive(Debug, Clone)]
pub struct FinanceState {
    /// Active symbol; shown in the title as soon as it is selected.
    pub symbol: String,
    /// Chronological opening prices of the active symbol.
    pub points: Vec<PricePoint>,
    /// Whether a request is in flight.
    pub loading: bool,
    /// Error of the latest request.
    pub error: Option<String>,
    /// Symbol search input; upper-cases as it is typed.
    pub search: SearchBox,
    /// Preset button under the keyboard cursor.
    pub preset_cursor: usize,
    generation: Generation,
}

impl Default for FinanceState {
    fn default() -> Self {
        Self {
            symbol: DEFAULT_SYMBOL.to_string(),
            points: Vec::new(),
            loading: false,
            error: None,
            search: SearchBox::upper_case(),
            preset_cursor: 0,
            generation: 0,
        }
    }
}

impl FinanceState {
    /// Creates a widget showing the default symbol with no data yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds the widget for a fresh mount, dropping in-flight answers.
    pub fn reset(&mut self) {
        *self = Self {
            generation: self.generation + 1,
            ..Self::new()
        };
    }

    /// Loads the default symbol.
    pub fn mount(&mut self) -> FetchRequest {
        self.load(DEFAULT_SYMBOL.to_string())
    }

    /// Returns the generation of the latest request.
    #[must_use]
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Makes `symbol` active and requests its series.
    ///
    /// The active symbol is not requested again.
    pub fn select_symbol(&mut self, symbol: impl Into<String>) -> Option<FetchRequest> {
        let symbol = symbol.into();
        (symbol != self.symbol).then(|| self.load(symbol))
    }

    fn load(&mut self, symbol: String) -> FetchRequest {
        self.symbol = symbol;
        self.generation += 1;
        self.loading = true;
        self.error = None;
        FetchRequest::Intraday {
            generation: self.generation,
            symbol: self.symbol.clone(),
        }
    }

    /// Selects the preset symbol at `index`.
    pub fn select_preset(&mut self, index: usize) -> Option<FetchRequest> {
        let symbol = PRESET_SYMBOLS.get(index)?;
        self.preset_cursor = index;
        self.select_symbol(*symbol)
    }

    /// Submits the search box. Does nothing when it is blank.
    pub fn submit_search(&mut self) -> Option<FetchRequest> {
        let symbol = self.search.submit()?;
        self.select_symbol(symbol)
    }

    /// Requests the active symbol again.
    pub fn refresh(&mut self) -> FetchRequest {
        self.load(self.symbol.clone())
    }

    /// Moves the preset cursor, wrapping at both ends.
    pub fn move_cursor(&mut self, delta: isize) {
        let count = PRESET_SYMBOLS.len() as isize;
        self.preset_cursor = (self.preset_cursor as isize + delta).rem_euclid(count) as usize;
    }

    /// Returns the preset matching the active symbol.
    #[must_use]
    pub fn highlighted_preset(&self) -> Option<usize> {
        PRESET_SYMBOLS.iter().position(|s| *s == self.symbol)
    }

    /// Applies a series outcome.
    ///
    /// Returns `false` and changes nothing when `generation` is not the
    /// latest request. On failure the previous series is kept.
    pub fn apply(
        &mut self,
        generation: Generation,
        result: Result<Vec<PricePoint>, FetchFailure>,
    ) -> bool {
        if generation != self.generation {
            debug!(generation, latest = self.generation, "dropping stale price series");
            return false;
        }
        self.loading = false;
        match result {
            Ok(points) => self.points = points,
            Err(FetchFailure::Missing) => self.error = Some(LOAD_FAILED.to_string()),
            Err(FetchFailure::Transport) => self.error = Some(FETCH_ERROR.to_string()),
        }
        true
    }
}
