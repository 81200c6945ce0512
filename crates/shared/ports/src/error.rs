use thiserror::Error;

/// Failures talking to the exchange
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VenueError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Exchange rejected request: {code} - {message}")]
    Rejected { code: i64, message: String },

    #[error("Failed to decode response: {0}")]
    Decode(String),
}

impl VenueError {
    /// Returns true if the exchange understood the request and refused it
    pub fn is_rejection(&self) -> bool {
        matches!(self, VenueError::Rejected { .. })
    }
}

pub type VenueResult<T> = std::result::Result<T, VenueError>;
