//! Entry point errors and their classification

use hermes_core::ConversionError;
use hermes_gateway::ConfigError;
use hermes_ports::VenueError;
use thiserror::Error;

/// Coarse failure class reported across the C boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum ErrorKind {
    /// Missing credentials or unreadable configuration
    Configuration = 1,
    /// Malformed numeric text, bad enum code or precision
    Parse = 2,
    /// Quote amount divided by a zero price
    Division = 3,
    /// Network, timeout, unexpected response or missing ticker
    Transport = 4,
    /// The exchange refused the request
    ExchangeRejection = 5,
    Internal = 6,
}

impl ErrorKind {
    pub fn code(&self) -> i32 {
        *self as i32
    }
}

#[derive(Error, Debug)]
pub enum OrderError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Order(#[from] hermes_order_manager::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<ConversionError> for OrderError {
    fn from(e: ConversionError) -> Self {
        OrderError::Order(e.into())
    }
}

impl From<VenueError> for OrderError {
    fn from(e: VenueError) -> Self {
        OrderError::Order(e.into())
    }
}

impl OrderError {
    pub fn kind(&self) -> ErrorKind {
        use hermes_order_manager::Error as OmError;

        match self {
            OrderError::Config(_) => ErrorKind::Configuration,
            OrderError::InvalidArgument(_) => ErrorKind::Parse,
            OrderError::Internal(_) => ErrorKind::Internal,
            OrderError::Order(inner) => match inner {
                OmError::Conversion(ConversionError::DivisionByZero(_)) => ErrorKind::Division,
                OmError::Conversion(_) | OmError::InvalidFraction(_) => ErrorKind::Parse,
                OmError::Venue(e) if e.is_rejection() => ErrorKind::ExchangeRejection,
                OmError::Venue(_) | OmError::TickerNotFound(_) | OmError::TickerMismatch { .. } => {
                    ErrorKind::Transport
                }
            },
        }
    }
}
