use serde::{Deserialize, Serialize};

use crate::error::{ConversionError, ConversionResult};

/// Order side (Buy or Sell)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    /// Decode the caller's integer code (0 = Buy, 1 = Sell)
    pub fn from_code(code: i32) -> ConversionResult<Self> {
        match code {
            0 => Ok(Side::Buy),
            1 => Ok(Side::Sell),
            other => Err(ConversionError::UnknownCode {
                field: "side",
                code: other as i64,
            }),
        }
    }

    /// Book side whose best price is used as the reference for this side.
    ///
    /// Buys reference the bid and sells the ask, so a market-reference
    /// order rests at the top of its own side of the book.
    pub fn reference_book_side(&self) -> BookSide {
        match self {
            Side::Buy => BookSide::Bid,
            Side::Sell => BookSide::Ask,
        }
    }

    /// Exchange wire form
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Buy => "BUY",
            Side::Sell => "SELL",
        }
    }
}

/// Side of the order book
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BookSide {
    /// Highest resting buy
    Bid,
    /// Lowest resting sell
    Ask,
}
