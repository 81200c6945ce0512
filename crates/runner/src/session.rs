//! Trading session
//!
//! Owns everything that should outlive a single order: the exchange
//! client (and its connection pool), the pipeline built on top of it,
//! and a current-thread tokio runtime that drives the async calls from
//! synchronous callers. Dropping the session releases all of it.

use std::future::Future;
use std::sync::Arc;

use hermes_gateway::{BinanceRestClient, ExchangeConfig};
use hermes_order_manager::{OrderBuilder, OrderDispatcher};
use hermes_ports::{AccountSource, MarketDataSource, OrderVenue};
use log::info;
use tokio::runtime::{Builder, Runtime};

use crate::error::OrderError;

pub struct TradingSession {
    pub(crate) builder: OrderBuilder,
    pub(crate) dispatcher: OrderDispatcher,
    pub(crate) account: Arc<dyn AccountSource>,
    runtime: Runtime,
}

impl TradingSession {
    /// Open a session against the exchange described by `config`
    pub fn from_config(config: &ExchangeConfig) -> Result<Self, OrderError> {
        let runtime = build_runtime()?;
        let client = {
            let _guard = runtime.enter();
            Arc::new(BinanceRestClient::new(config)?)
        };
        info!("Trading session opened for {}", client.base_url());

        Ok(Self::assemble(
            runtime,
            client.clone(),
            client.clone(),
            client,
        ))
    }

    /// Open a session configured from the environment (and `.env`)
    pub fn from_env() -> Result<Self, OrderError> {
        let config = ExchangeConfig::from_env()?;
        Self::from_config(&config)
    }

    /// Open a session over arbitrary port implementations
    pub fn with_ports(
        market_data: Arc<dyn MarketDataSource>,
        venue: Arc<dyn OrderVenue>,
        account: Arc<dyn AccountSource>,
    ) -> Result<Self, OrderError> {
        Ok(Self::assemble(build_runtime()?, market_data, venue, account))
    }

    fn assemble(
        runtime: Runtime,
        market_data: Arc<dyn MarketDataSource>,
        venue: Arc<dyn OrderVenue>,
        account: Arc<dyn AccountSource>,
    ) -> Self {
        Self {
            builder: OrderBuilder::new(market_data),
            dispatcher: OrderDispatcher::new(venue),
            account,
            runtime,
        }
    }

    /// Drive `future` to completion on the session runtime.
    ///
    /// Must not be called from inside another tokio runtime.
    pub(crate) fn block_on<F: Future>(&self, future: F) -> F::Output {
        self.runtime.block_on(future)
    }
}

fn build_runtime() -> Result<Runtime, OrderError> {
    Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| OrderError::Internal(format!("failed to start runtime: {}", e)))
}
