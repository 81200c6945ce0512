use serde::{Deserialize, Serialize};

use super::{OrderMode, Side, TimeInForce};
use crate::values::{Price, Quantity};

/// Fully specified limit order, ready to be dispatched
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedOrder {
    pub symbol: String,
    pub side: Side,
    /// Base-asset quantity, already truncated to the requested precision
    pub quantity: Quantity,
    pub price: Price,
    pub mode: OrderMode,
    pub time_in_force: TimeInForce,
}

impl ResolvedOrder {
    /// Create a good-till-cancelled limit order
    pub fn new(
        symbol: impl Into<String>,
        side: Side,
        quantity: Quantity,
        price: Price,
        mode: OrderMode,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            side,
            quantity,
            price,
            mode,
            time_in_force: TimeInForce::Gtc,
        }
    }

    /// Copy of this order at a different limit price
    pub fn with_price(&self, price: Price) -> Self {
        Self {
            price,
            ..self.clone()
        }
    }

    /// Quote-asset value of the order at its limit price, `None` on overflow
    pub fn notional(&self) -> Option<Price> {
        self.quantity.checked_mul(self.price)
    }
}
