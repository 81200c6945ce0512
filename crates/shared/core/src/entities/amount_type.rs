use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{ConversionError, ConversionResult};

/// Unit the caller's amount is denominated in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AmountType {
    /// Amount is already a base-asset quantity
    FixedBase,
    /// Amount is a quote-asset notional, divided by price to get a quantity
    FixedQuote,
}

impl AmountType {
    /// Decode the caller's integer code (0 = FixedBase, 1 = FixedQuote)
    pub fn from_code(code: i32) -> ConversionResult<Self> {
        match code {
            0 => Ok(AmountType::FixedBase),
            1 => Ok(AmountType::FixedQuote),
            other => Err(ConversionError::UnknownCode {
                field: "amount type",
                code: other as i64,
            }),
        }
    }
}

/// How the caller wants the order amount computed
///
/// The percentage variants size the order as a fraction of the free
/// balance held in the base or quote asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AmountCalculation {
    FixedBase(Decimal),
    FixedQuote(Decimal),
    /// Fraction (0..=1) of the free base-asset balance
    FixedBaseFromPercentage(Decimal),
    /// Fraction (0..=1) of the free quote-asset balance
    FixedQuoteFromPercentage(Decimal),
}

impl AmountCalculation {
    /// Amount type the computed amount is expressed in
    pub fn amount_type(&self) -> AmountType {
        match self {
            AmountCalculation::FixedBase(_) | AmountCalculation::FixedBaseFromPercentage(_) => {
                AmountType::FixedBase
            }
            AmountCalculation::FixedQuote(_) | AmountCalculation::FixedQuoteFromPercentage(_) => {
                AmountType::FixedQuote
            }
        }
    }
}
