use serde::{Deserialize, Serialize};

use super::BookSide;
use crate::values::Price;

/// Best bid/ask snapshot for one symbol, as returned by the exchange
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookTicker {
    pub symbol: String,
    pub bid_price: Price,
    pub ask_price: Price,
}

impl BookTicker {
    pub fn new(symbol: impl Into<String>, bid_price: Price, ask_price: Price) -> Self {
        Self {
            symbol: symbol.into(),
            bid_price,
            ask_price,
        }
    }

    /// Best price on the given side of the book
    pub fn price(&self, side: BookSide) -> Price {
        match side {
            BookSide::Bid => self.bid_price,
            BookSide::Ask => self.ask_price,
        }
    }
}
