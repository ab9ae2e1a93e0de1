//! Error types for provider calls.
//!
//! Every variant folds into one of the two [`FetchFailure`] kinds the
//! widgets know how to display.

use glance_protocol::FetchFailure;

/// Errors that can occur while calling a data provider.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The HTTP request could not be sent or its body could not be read.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body is not the JSON document we expected.
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The provider answered, but without the field that carries the data.
    ///
    /// Providers report unknown cities, bad symbols and rejected keys this
    /// way, usually alongside a non-2xx status.
    #[error("response has no `{field}` field")]
    MissingField {
        /// Name of the absent field.
        field: &'static str,
    },
}

impl Error {
    /// Maps this error to the failure kind shown by the widgets.
    #[must_use]
    pub const fn failure(&self) -> FetchFailure {
        match self {
            Self::MissingField { .. } => FetchFailure::Missing,
            Self::Http(_) | Self::Decode(_) => FetchFailure::Transport,
        }
    }
}

/// A specialized Result type for provider calls.
pub type Result<T> = std::result::Result<T, Error>;
