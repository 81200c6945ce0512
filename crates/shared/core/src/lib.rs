//! Hermes Core Domain
//!
//! Pure domain types for the Hermes limit-order pipeline.
//! This crate contains no async, no I/O, and is 100% unit testable.

pub mod entities;
pub mod error;
pub mod rounding;
pub mod values;

// Re-export commonly used types at crate root
pub use entities::{
    AmountCalculation,
    AmountType,
    BookSide,
    BookTicker,
    // Order flow
    OrderMode,
    OrderOutcome,
    OrderRequest,
    PriceOffset,
    PricingStrategy,
    ResolvedOrder,
    Side,
    SymbolPair,
    TimeInForce,
};
pub use error::{ConversionError, ConversionResult};
pub use rounding::{
    MAX_PRECISION, amount_from_quote, check_precision, format_decimal, parse_decimal,
    quantity_from_base, quote_to_base, round_down,
};
pub use values::{Price, Quantity, Symbol};
