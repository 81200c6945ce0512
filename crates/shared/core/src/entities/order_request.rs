use serde::{Deserialize, Serialize};

use super::{AmountType, OrderMode, Side};
use crate::error::{ConversionError, ConversionResult};
use crate::rounding::check_precision;

/// Caller intent for a single order, before any market data is consulted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRequest {
    /// Exchange instrument identifier (e.g. "BTCUSDT")
    pub symbol: String,
    pub side: Side,
    pub amount_type: AmountType,
    /// Raw decimal text, parsed during resolution
    pub amount: String,
    /// Decimal places the quantity is truncated to
    pub quantity_precision: u32,
    pub mode: OrderMode,
}

impl OrderRequest {
    pub fn new(
        symbol: impl Into<String>,
        side: Side,
        amount_type: AmountType,
        amount: impl Into<String>,
        quantity_precision: u32,
        mode: OrderMode,
    ) -> ConversionResult<Self> {
        let symbol = symbol.into();
        // Sent unencoded in signed query strings
        if symbol.is_empty() || !symbol.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ConversionError::Parse {
                field: "symbol",
                value: symbol,
            });
        }

        Ok(Self {
            symbol,
            side,
            amount_type,
            amount: amount.into(),
            quantity_precision,
            mode,
        })
    }

    /// Build from the integer codes used at the foreign-call boundary.
    ///
    /// The side arrives decoded: offset orders fix it regardless of the
    /// caller's code.
    pub fn from_codes(
        symbol: impl Into<String>,
        side: Side,
        amount_type: i32,
        amount: impl Into<String>,
        quantity_precision: i32,
        mode: i32,
    ) -> ConversionResult<Self> {
        Self::new(
            symbol,
            side,
            AmountType::from_code(amount_type)?,
            amount,
            check_precision(quantity_precision as i64)?,
            OrderMode::from_code(mode)?,
        )
    }

    /// Copy of this request with a different side
    pub fn with_side(&self, side: Side) -> Self {
        Self {
            side,
            ..self.clone()
        }
    }
}
