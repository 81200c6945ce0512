//! Order Parameter Builder
//!
//! Turns an `OrderRequest` into a fully priced `ResolvedOrder` using one
//! of three pricing strategies:
//!
//! - **Market reference**: best price on the reference side of the book
//!   (Buy reads the bid, Sell reads the ask), used verbatim.
//! - **Offset**: the market reference price scaled by 0.80 (LowBuy) or
//!   1.20 (HighSell) and truncated. The offset fixes the side.
//! - **Custom**: a caller-supplied price. Never touches market data.
//!
//! Quantities are truncated to the request's quantity precision. A quote
//! amount is divided by the order price to get a base quantity.

use std::sync::Arc;

use hermes_core::{
    AmountType, ConversionError, OrderRequest, Price, PriceOffset, PricingStrategy, Quantity,
    ResolvedOrder, parse_decimal, quantity_from_base, quote_to_base, round_down,
};
use hermes_ports::MarketDataSource;
use log::{debug, warn};

use crate::error::Result;
use crate::market_data::fetch_book_ticker;

/// Derives exchange-ready limit order parameters
#[derive(Clone)]
pub struct OrderBuilder {
    market_data: Arc<dyn MarketDataSource>,
}

impl OrderBuilder {
    pub fn new(market_data: Arc<dyn MarketDataSource>) -> Self {
        Self { market_data }
    }

    /// Resolve `request` with the given pricing strategy
    pub async fn resolve(
        &self,
        request: &OrderRequest,
        strategy: &PricingStrategy,
    ) -> Result<ResolvedOrder> {
        match strategy {
            PricingStrategy::MarketReference => self.market_reference(request).await,
            PricingStrategy::Offset {
                offset,
                price_precision,
            } => self.offset(request, *offset, *price_precision).await,
            PricingStrategy::Custom {
                price,
                price_precision,
            } => self.custom_price(request, price, *price_precision),
        }
    }

    /// Price at the top of the book on the request's reference side
    pub async fn market_reference(&self, request: &OrderRequest) -> Result<ResolvedOrder> {
        let book_side = request.side.reference_book_side();
        let ticker = fetch_book_ticker(self.market_data.as_ref(), &request.symbol).await?;
        let price = ticker.price(book_side);

        let quantity = quantity_at(request, price)?;
        debug!(
            "{} {:?}: reference {:?} price={} quantity={}",
            request.symbol, request.side, book_side, price, quantity
        );

        Ok(ResolvedOrder::new(
            request.symbol.clone(),
            request.side,
            quantity,
            price,
            request.mode,
        ))
    }

    /// Market reference price scaled by `offset`.
    ///
    /// The quantity is derived at the unscaled reference price and reused.
    pub async fn offset(
        &self,
        request: &OrderRequest,
        offset: PriceOffset,
        price_precision: u32,
    ) -> Result<ResolvedOrder> {
        let side = offset.side();
        let request = if request.side != side {
            warn!(
                "{:?} on {} overrides requested side {:?} with {:?}",
                offset, request.symbol, request.side, side
            );
            request.with_side(side)
        } else {
            request.clone()
        };

        let reference = self.market_reference(&request).await?;
        let scaled = reference
            .price
            .checked_mul(offset.multiplier())
            .ok_or(ConversionError::Overflow("price"))?;
        let price = round_down(scaled, price_precision).normalize();

        debug!(
            "{} {:?}: reference price={} offset price={}",
            request.symbol, offset, reference.price, price
        );

        Ok(reference.with_price(price))
    }

    /// Caller-supplied price truncated to `price_precision`
    pub fn custom_price(
        &self,
        request: &OrderRequest,
        price: &str,
        price_precision: u32,
    ) -> Result<ResolvedOrder> {
        let price = round_down(parse_decimal("price", price)?, price_precision).normalize();
        let quantity = quantity_at(request, price)?;

        debug!(
            "{} {:?}: custom price={} quantity={}",
            request.symbol, request.side, price, quantity
        );

        Ok(ResolvedOrder::new(
            request.symbol.clone(),
            request.side,
            quantity,
            price,
            request.mode,
        ))
    }
}

/// Base quantity for `request` when trading at `price`
fn quantity_at(request: &OrderRequest, price: Price) -> Result<Quantity> {
    let quantity = match request.amount_type {
        AmountType::FixedBase => quantity_from_base(&request.amount, request.quantity_precision)?,
        AmountType::FixedQuote => {
            let amount = parse_decimal("amount", &request.amount)?;
            quote_to_base(price, amount, request.quantity_precision)?
        }
    };
    Ok(quantity)
}
