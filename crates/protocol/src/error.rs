//! Error types for the glance-protocol crate.
//!
//! This module defines the errors that can occur when parsing protocol
//! values from user-supplied text, such as route names on the command line.

use thiserror::Error;

/// Errors that can occur during protocol operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProtocolError {
    /// The given text does not name a dashboard route.
    #[error("unknown route: {0:?} (expected dashboard, weather, news or finance)")]
    UnknownRoute(String),

    /// The given text does not name a headline category.
    #[error("unknown news category: {0:?}")]
    UnknownCategory(String),
}

/// A specialized Result type for protocol operations.
pub type Result<T> = std::result::Result<T, ProtocolError>;
