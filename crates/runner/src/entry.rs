//! Order entry points
//!
//! Each entry point resolves one order and makes exactly one order call
//! to the exchange. Test-mode orders come back as `Validated`, live ones
//! as `Placed` with the exchange order id.

use hermes_core::{
    AmountCalculation, OrderOutcome, OrderRequest, PriceOffset, PricingStrategy, SymbolPair,
};
use hermes_order_manager::{SizedAmount, size_amount};

use crate::error::OrderError;
use crate::session::TradingSession;

impl TradingSession {
    /// Limit order at the current best price on the reference side
    pub fn place_order(&self, request: &OrderRequest) -> Result<OrderOutcome, OrderError> {
        self.submit(request, PricingStrategy::MarketReference)
    }

    /// Buy 20% below the bid. The request's side is ignored.
    pub fn low_buy(
        &self,
        request: &OrderRequest,
        price_precision: u32,
    ) -> Result<OrderOutcome, OrderError> {
        self.submit(
            request,
            PricingStrategy::Offset {
                offset: PriceOffset::LowBuy,
                price_precision,
            },
        )
    }

    /// Sell 20% above the ask. The request's side is ignored.
    pub fn high_sell(
        &self,
        request: &OrderRequest,
        price_precision: u32,
    ) -> Result<OrderOutcome, OrderError> {
        self.submit(
            request,
            PricingStrategy::Offset {
                offset: PriceOffset::HighSell,
                price_precision,
            },
        )
    }

    /// Limit order at a caller-supplied price; reads no market data
    pub fn trade_custom_price(
        &self,
        request: &OrderRequest,
        price: &str,
        price_precision: u32,
    ) -> Result<OrderOutcome, OrderError> {
        self.submit(
            request,
            PricingStrategy::Custom {
                price: price.to_string(),
                price_precision,
            },
        )
    }

    /// Order amount for `calculation`, reading balances when needed
    pub fn size_amount(
        &self,
        pair: &SymbolPair,
        calculation: AmountCalculation,
    ) -> Result<SizedAmount, OrderError> {
        let sized = self.block_on(size_amount(self.account.as_ref(), pair, calculation))?;
        Ok(sized)
    }

    fn submit(
        &self,
        request: &OrderRequest,
        strategy: PricingStrategy,
    ) -> Result<OrderOutcome, OrderError> {
        self.block_on(async {
            let order = self.builder.resolve(request, &strategy).await?;
            let outcome = self.dispatcher.dispatch(&order).await?;
            Ok::<_, OrderError>(outcome)
        })
    }
}
