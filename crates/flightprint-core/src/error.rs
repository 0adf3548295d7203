// crates/flightprint-core/src/error.rs
use thiserror::Error;

/// Every failure the core can surface.
///
/// The first three variants are the service-level taxonomy; the rest wrap
/// the I/O and decoding errors that happen while loading datasets.
#[derive(Debug, Error)]
pub enum FlightprintError {
    /// Malformed caller input (empty query, bad airport code, ...).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A reference dataset could not be reached or read.
    #[error("data unavailable: {0}")]
    DataUnavailable(String),

    /// The external footprint provider failed. Never retried.
    #[error("footprint provider failed: {0}")]
    Provider(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[cfg(feature = "json")]
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Bincode(#[from] bincode::Error),
}

pub type Result<T> = std::result::Result<T, FlightprintError>;

impl FlightprintError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        FlightprintError::InvalidInput(msg.into())
    }
}
