//! Error types for the 76 Cafe Resto site

use thiserror::Error;

/// Main error type for site operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SiteError {
    /// The request never produced a response (offline, CORS, DNS)
    #[error("Network error: {0}")]
    Network(String),

    /// The endpoint answered with a non-success status
    #[error("Unexpected HTTP status {status} from {url}")]
    HttpStatus { status: u16, url: String },

    /// The follower endpoint answered, but not with the expected shape
    #[error("Invalid data format: {0}")]
    InvalidPayload(String),

    /// The follower count could not be turned into a number
    #[error("Invalid follower count: {0:?}")]
    InvalidCount(String),

    /// A reservation field violates the form constraints
    #[error("Invalid reservation: {0}")]
    InvalidReservation(String),

    /// Error during serialization/deserialization
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Site configuration is missing or malformed
    #[error("Configuration error: {0}")]
    Config(String),

    /// A browser API refused the call (popup blocked, observer unavailable)
    #[error("Browser error: {0}")]
    Browser(String),
}

impl From<serde_json::Error> for SiteError {
    fn from(err: serde_json::Error) -> Self {
        SiteError::Serialization(err.to_string())
    }
}

/// Result type alias using SiteError
pub type SiteResult<T> = Result<T, SiteError>;
