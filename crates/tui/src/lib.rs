//! Terminal UI for the glance dashboard.
//!
//! This crate provides a Ratatui-based terminal interface showing a weather
//! forecast, a paginated headline list and an intraday stock chart.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`app`]: Main application struct and run loop
//! - [`state`]: Shell state (route, sidebar, theme, help)
//! - [`weather_state`], [`news_state`], [`finance_state`]: Widget state
//! - [`search`]: Search input shared by the weather and finance widgets
//! - [`hitmap`]: Click regions recorded while rendering
//! - [`layout`]: Breakpoints and grid geometry
//! - [`theme`]: Light and dark palettes and the finance frame pulse
//! - [`terminal`]: Terminal setup, teardown, and panic handling
//! - [`event`]: Event handling and key mappings
//! - [`widgets`]: Rendering
//!
//! # Example
//!
//! ```no_run
//! use glance_protocol::Route;
//! use glance_tui::{App, terminal};
//! use tokio::sync::mpsc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     terminal::install_panic_hook();
//!     let mut terminal = terminal::setup_terminal()?;
//!
//!     let (request_tx, _request_rx) = mpsc::unbounded_channel();
//!     let (_outcome_tx, outcome_rx) = mpsc::unbounded_channel();
//!     let mut app = App::new(Route::Dashboard, request_tx, outcome_rx);
//!     let result = app.run(&mut terminal).await;
//!
//!     terminal::restore_terminal(&mut terminal)?;
//!     result
//! }
//! ```

pub mod app;
pub mod event;
pub mod finance_state;
pub mod hitmap;
pub mod layout;
pub mod news_state;
pub mod search;
pub mod state;
pub mod terminal;
pub mod theme;
pub mod weather_state;
pub mod widgets;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-export primary types at crate root for convenience
pub use app::App;
pub use state::AppState;
