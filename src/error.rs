use thiserror::Error;

/// A required field was missing or empty.
///
/// Raised before any network I/O; an operation that fails validation never
/// issues a request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("missing required field `{field}`")]
pub struct ValidationError {
    pub field: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }
}

/// Upstream or transport failure, raised during or after network I/O.
#[derive(Debug, Error)]
pub enum HttpError {
    /// The service answered with a non-success status.
    #[error("events API returned {status}: {body}")]
    Status { status: u16, body: String },

    /// The request never produced a response.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body was not valid JSON.
    #[error("failed to parse response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Client error type
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Http(#[from] HttpError),
}

/// Result type alias for client operations
pub type Result<T, E = Error> = std::result::Result<T, E>;
