//! Data providers for glance.
//!
//! This crate talks to the three HTTP APIs behind the dashboard widgets and
//! turns their documents into protocol types.
//!
//! # Overview
//!
//! - [`DashboardClient`]: one client for the forecast, headline and quote
//!   providers
//! - [`weather`]: forecast decoding and per-day aggregation
//! - [`news`]: headline decoding
//! - [`finance`]: intraday series decoding
//! - [`spawn_fetcher`]: the task that answers [`FetchRequest`]s from the UI
//! - [`Error`]: error types for provider calls
//!
//! # Keys
//!
//! API keys come from configuration and are held as
//! [`secrecy::SecretString`]. A provider with no key configured gets no key
//! parameter, so requests can go through a proxy that adds it.
//!
//! # Examples
//!
//! ```no_run
//! use glance_config::Config;
//! use glance_providers::DashboardClient;
//!
//! # async fn example() -> glance_providers::Result<()> {
//! let config = Config::load().unwrap_or_default().with_env_overrides();
//! let client = DashboardClient::new(&config)?;
//!
//! for day in client.fetch_forecast("Jaipur").await? {
//!     println!("{}: {} / {}", day.date, day.max_temp, day.min_temp);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! [`FetchRequest`]: glance_protocol::FetchRequest

pub mod client;
pub mod dispatch;
pub mod error;
pub mod finance;
pub mod news;
pub mod weather;

pub use client::{DashboardClient, Endpoint};
pub use dispatch::{fetch, spawn_fetcher};
pub use error::{Error, Result};
