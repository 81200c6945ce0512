use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::Side;

/// Offset applied to the market reference price.
///
/// Produces a real order that is unlikely to fill, for exercising live
/// integrations against a real book. Each offset carries its own side:
/// the caller's side is replaced, not combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PriceOffset {
    /// Buy 20% below the reference price
    LowBuy,
    /// Sell 20% above the reference price
    HighSell,
}

impl PriceOffset {
    /// Side every order using this offset is placed on
    pub fn side(&self) -> Side {
        match self {
            PriceOffset::LowBuy => Side::Buy,
            PriceOffset::HighSell => Side::Sell,
        }
    }

    /// Factor applied to the reference price
    pub fn multiplier(&self) -> Decimal {
        match self {
            PriceOffset::LowBuy => dec!(0.80),
            PriceOffset::HighSell => dec!(1.20),
        }
    }
}

/// How the limit price of an order is chosen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PricingStrategy {
    /// Best price on the reference side of the book, used verbatim
    MarketReference,
    /// Reference price scaled by an offset, truncated to `price_precision`
    Offset {
        offset: PriceOffset,
        price_precision: u32,
    },
    /// Caller-supplied price, truncated to `price_precision`; no market data
    Custom { price: String, price_precision: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_sides_are_fixed() {
        assert_eq!(PriceOffset::LowBuy.side(), Side::Buy);
        assert_eq!(PriceOffset::HighSell.side(), Side::Sell);
    }

    #[test]
    fn test_offset_multipliers() {
        assert_eq!(PriceOffset::LowBuy.multiplier(), dec!(0.8));
        assert_eq!(PriceOffset::HighSell.multiplier(), dec!(1.2));
    }
}
