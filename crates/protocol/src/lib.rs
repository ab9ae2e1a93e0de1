//! Shared protocol types for the glance application.
//!
//! This crate defines the core types used across all glance components:
//! the display-ready records each widget renders, the routes of the
//! dashboard, TUI messages, and the request/outcome pair exchanged between
//! the UI loop and the fetch dispatcher.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`weather`]: Daily forecast summaries and icon classification
//! - [`news`]: Articles and headline categories
//! - [`finance`]: Price points and preset symbols
//! - [`route`]: Dashboard routes and the widgets they mount
//! - [`fetch`]: Fetch requests, outcomes and failure kinds
//! - [`message`]: TUI event messages
//! - [`sample`]: Sample records for tests and demonstrations
//! - [`error`]: Error types for protocol operations
//!
//! # Examples
//!
//! ```
//! use glance_protocol::{FetchRequest, NewsCategory, Route, WidgetKind};
//!
//! let route: Route = "news".parse().unwrap();
//! assert_eq!(route.widgets(), &[WidgetKind::News]);
//!
//! let request = FetchRequest::Headlines {
//!     generation: 1,
//!     category: NewsCategory::Technology,
//!     page: 1,
//! };
//! assert_eq!(request.widget(), WidgetKind::News);
//! ```

pub mod error;
pub mod fetch;
pub mod finance;
pub mod message;
pub mod news;
pub mod route;
pub mod sample;
pub mod weather;

// Re-export primary types at crate root for convenience
pub use error::{ProtocolError, Result};
pub use fetch::{FetchFailure, FetchOutcome, FetchRequest, Generation};
pub use finance::{DEFAULT_SYMBOL, PRESET_SYMBOLS, PricePoint, SERIES_WINDOW};
pub use message::Message;
pub use news::{Article, NewsCategory, PAGE_SIZE};
pub use route::{Route, WidgetKind};
pub use weather::{DailyForecast, FORECAST_DAYS, TOP_CITIES, WeatherIcon, format_temperature};
