//! Fetch requests and outcomes.
//!
//! Widgets never perform I/O themselves. They emit a [`FetchRequest`] tagged
//! with a [`Generation`] number; the dispatcher answers with a
//! [`FetchOutcome`] carrying the same number. A widget only applies an
//! outcome whose generation matches its latest request, so a slow response
//! for an old selection can never overwrite a newer one.

use crate::finance::PricePoint;
use crate::news::{Article, NewsCategory};
use crate::route::WidgetKind;
use crate::weather::DailyForecast;

/// Monotonically increasing request counter, one sequence per widget.
pub type Generation = u64;

/// Why a fetch produced no data.
///
/// # Examples
///
/// ```
/// use glance_protocol::FetchFailure;
///
/// assert_ne!(FetchFailure::Missing, FetchFailure::Transport);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FetchFailure {
    /// The provider answered, but the expected field was absent
    /// (unknown city, bad symbol, rejected key, ...).
    Missing,
    /// The request failed in transport, or the body could not be decoded.
    Transport,
}

/// A request for data, emitted by a widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchRequest {
    /// 5-day forecast for a city.
    Forecast {
        /// Request generation of the weather widget.
        generation: Generation,
        /// City name as entered or selected.
        city: String,
    },
    /// One page of top headlines.
    Headlines {
        /// Request generation of the news widget.
        generation: Generation,
        /// Category to browse.
        category: NewsCategory,
        /// 1-based page number.
        page: u32,
    },
    /// Intraday price series for a symbol.
    Intraday {
        /// Request generation of the finance widget.
        generation: Generation,
        /// Upper-case ticker symbol.
        symbol: String,
    },
}

impl FetchRequest {
    /// Returns the widget that issued this request.
    ///
    /// # Examples
    ///
    /// ```
    /// use glance_protocol::{FetchRequest, WidgetKind};
    ///
    /// let request = FetchRequest::Forecast { generation: 3, city: "Patna".into() };
    /// assert_eq!(request.widget(), WidgetKind::Weather);
    /// assert_eq!(request.generation(), 3);
    /// ```
    #[must_use]
    pub const fn widget(&self) -> WidgetKind {
        match self {
            Self::Forecast { .. } => WidgetKind::Weather,
            Self::Headlines { .. } => WidgetKind::News,
            Self::Intraday { .. } => WidgetKind::Finance,
        }
    }

    /// Returns the generation this request was tagged with.
    #[must_use]
    pub const fn generation(&self) -> Generation {
        match self {
            Self::Forecast { generation, .. }
            | Self::Headlines { generation, .. }
            | Self::Intraday { generation, .. } => *generation,
        }
    }
}

/// The settled result of a [`FetchRequest`].
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    /// Answer to [`FetchRequest::Forecast`].
    Forecast {
        /// Generation copied from the request.
        generation: Generation,
        /// City copied from the request.
        city: String,
        /// Aggregated days, or the failure kind.
        result: Result<Vec<DailyForecast>, FetchFailure>,
    },
    /// Answer to [`FetchRequest::Headlines`].
    Headlines {
        /// Generation copied from the request.
        generation: Generation,
        /// Category copied from the request.
        category: NewsCategory,
        /// Page copied from the request.
        page: u32,
        /// Articles of the page, or the failure kind.
        result: Result<Vec<Article>, FetchFailure>,
    },
    /// Answer to [`FetchRequest::Intraday`].
    Intraday {
        /// Generation copied from the request.
        generation: Generation,
        /// Symbol copied from the request.
        symbol: String,
        /// Chronological price points, or the failure kind.
        result: Result<Vec<PricePoint>, FetchFailure>,
    },
}

impl FetchOutcome {
    /// Returns the widget this outcome belongs to.
    #[must_use]
    pub const fn widget(&self) -> WidgetKind {
        match self {
            Self::Forecast { .. } => WidgetKind::Weather,
            Self::Headlines { .. } => WidgetKind::News,
            Self::Intraday { .. } => WidgetKind::Finance,
        }
    }

    /// Returns the generation of the request this outcome answers.
    #[must_use]
    pub const fn generation(&self) -> Generation {
        match self {
            Self::Forecast { generation, .. }
            | Self::Headlines { generation, .. }
            | Self::Intraday { generation, .. } => *generation,
        }
    }

    /// Builds a failed outcome answering `request`.
    ///
    /// # Examples
    ///
    /// ```
    /// use glance_protocol::{FetchFailure, FetchOutcome, FetchRequest};
    ///
    /// let request = FetchRequest::Intraday { generation: 2, symbol: "XYZ".into() };
    /// let outcome = FetchOutcome::failed(&request, FetchFailure::Transport);
    /// assert_eq!(outcome.generation(), 2);
    /// assert!(!outcome.is_success());
    /// ```
    #[must_use]
    pub fn failed(request: &FetchRequest, failure: FetchFailure) -> Self {
        match request {
            FetchRequest::Forecast { generation, city } => Self::Forecast {
                generation: *generation,
                city: city.clone(),
                result: Err(failure),
            },
            FetchRequest::Headlines {
                generation,
                category,
                page,
            } => Self::Headlines {
                generation: *generation,
                category: *category,
                page: *page,
                result: Err(failure),
            },
            FetchRequest::Intraday { generation, symbol } => Self::Intraday {
                generation: *generation,
                symbol: symbol.clone(),
                result: Err(failure),
            },
        }
    }

    /// Returns `true` if the fetch produced data.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        match self {
            Self::Forecast { result, .. } => result.is_ok(),
            Self::Headlines { result, .. } => result.is_ok(),
            Self::Intraday { result, .. } => result.is_ok(),
        }
    }
}
