//! Order Manager errors

use hermes_core::ConversionError;
use hermes_ports::VenueError;
use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Conversion failed: {0}")]
    Conversion(#[from] ConversionError),

    #[error("Exchange error: {0}")]
    Venue(#[from] VenueError),

    #[error("No book ticker returned for {0}")]
    TickerNotFound(String),

    #[error("Book ticker mismatch: requested {requested}, received {received}")]
    TickerMismatch { requested: String, received: String },

    #[error("Balance fraction must be between 0 and 1, got {0}")]
    InvalidFraction(Decimal),
}

pub type Result<T> = std::result::Result<T, Error>;
