//! Conversion errors raised while turning caller input into order values

use thiserror::Error;

/// Failures of the pure parsing/rounding layer
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    #[error("Invalid {field} '{value}': not a decimal number")]
    Parse { field: &'static str, value: String },

    #[error("Invalid {field} '{value}': must not be negative")]
    Negative { field: &'static str, value: String },

    #[error("Unknown {field} code: {code}")]
    UnknownCode { field: &'static str, code: i64 },

    #[error("Negative precision {0} is not supported")]
    NegativePrecision(i64),

    #[error("Precision {0} exceeds the maximum of 28 decimal places")]
    PrecisionOutOfRange(i64),

    #[error("Division by zero: {0} is zero")]
    DivisionByZero(&'static str),

    #[error("Arithmetic overflow computing {0}")]
    Overflow(&'static str),
}

pub type ConversionResult<T> = std::result::Result<T, ConversionError>;
