//! Order Dispatcher
//!
//! Sends a resolved order to the exchange in test or live mode. One round
//! trip per call, no retries.

use std::sync::Arc;

use hermes_core::{OrderMode, OrderOutcome, ResolvedOrder};
use hermes_ports::OrderVenue;
use log::{info, warn};

use crate::error::Result;

#[derive(Clone)]
pub struct OrderDispatcher {
    venue: Arc<dyn OrderVenue>,
}

impl OrderDispatcher {
    pub fn new(venue: Arc<dyn OrderVenue>) -> Self {
        Self { venue }
    }

    /// Send to the mode the order was resolved with
    pub async fn dispatch(&self, order: &ResolvedOrder) -> Result<OrderOutcome> {
        match order.mode {
            OrderMode::Test => self.test_order(order).await,
            OrderMode::Live => self.execute_order(order).await,
        }
    }

    /// Have the exchange validate the order without placing it
    pub async fn test_order(&self, order: &ResolvedOrder) -> Result<OrderOutcome> {
        match self.venue.test_limit_order(order).await {
            Ok(()) => {
                info!(
                    "Test order validated: {} {} {} @ {}",
                    order.symbol,
                    order.side.as_str(),
                    order.quantity,
                    order.price
                );
                Ok(OrderOutcome::Validated)
            }
            Err(e) => {
                warn!("Test order failed for {}: {}", order.symbol, e);
                Err(e.into())
            }
        }
    }

    /// Place the order on the book
    pub async fn execute_order(&self, order: &ResolvedOrder) -> Result<OrderOutcome> {
        match self.venue.place_limit_order(order).await {
            Ok(ack) => {
                match order.notional() {
                    Some(notional) => info!(
                        "Order {} placed: {} {} {} @ {} notional={} ({})",
                        ack.order_id,
                        order.symbol,
                        order.side.as_str(),
                        order.quantity,
                        order.price,
                        notional,
                        ack.status
                    ),
                    None => info!(
                        "Order {} placed: {} {} {} @ {} ({})",
                        ack.order_id,
                        order.symbol,
                        order.side.as_str(),
                        order.quantity,
                        order.price,
                        ack.status
                    ),
                }
                Ok(OrderOutcome::Placed {
                    order_id: ack.order_id,
                })
            }
            Err(e) => {
                warn!("Order failed for {}: {}", order.symbol, e);
                Err(e.into())
            }
        }
    }
}
