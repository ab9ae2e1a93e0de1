//! Configuration management for the glance application.
//!
//! This crate handles loading, validating, and persisting configuration
//! from multiple sources (files, environment variables, defaults).
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`config`]: Core configuration struct and loading logic
//! - [`provider`]: Per-provider endpoint and key settings
//! - [`keys`]: Environment overrides for keys and endpoints
//! - [`preferences`]: The persisted theme preference
//! - [`persistence`]: Config file reading and writing
//! - [`error`]: Error types for configuration operations
//!
//! # Configuration Sources (Priority)
//!
//! Configuration is loaded from multiple sources with the following priority
//! (highest to lowest):
//!
//! 1. Environment variables (`GLANCE_*`)
//! 2. Local config (`./glance.json5` or `./glance.json`)
//! 3. User config (`~/.config/glance/config.json5` or `~/.config/glance/config.json`)
//! 4. Built-in defaults
//!
//! # File Format
//!
//! ```json5
//! {
//!   weather: { api_key: "owm-key" },
//!   news: { api_key: "newsapi-key", country: "gb" },
//!   // Route stock calls through a proxy that injects the key
//!   finance: { base_url: "https://proxy.internal/alphavantage" },
//! }
//! ```
//!
//! # Examples
//!
//! ```no_run
//! use glance_config::Config;
//!
//! # fn example() -> glance_config::Result<()> {
//! let config = Config::load()?.with_env_overrides();
//! println!("Weather endpoint: {}", config.weather.base_url);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod keys;
pub mod persistence;
pub mod preferences;
pub mod provider;

// Re-export primary types at crate root for convenience
pub use config::Config;
pub use error::{ConfigError, Result};
pub use keys::Provider;
pub use preferences::{Preferences, ThemeMode};
pub use provider::{NewsConfig, ProviderConfig};
