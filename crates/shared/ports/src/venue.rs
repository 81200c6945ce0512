use async_trait::async_trait;
use hermes_core::ResolvedOrder;

use crate::error::VenueResult;

/// Exchange acknowledgement of a live order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderAck {
    pub symbol: String,
    pub order_id: u64,
    /// Exchange order status at acknowledgement time (e.g. "NEW")
    pub status: String,
}

/// Port for submitting limit orders
///
/// Both calls are a single round trip; no retries.
#[async_trait]
pub trait OrderVenue: Send + Sync {
    /// Ask the exchange to validate the order without placing it
    async fn test_limit_order(&self, order: &ResolvedOrder) -> VenueResult<()>;

    /// Place the order on the book
    async fn place_limit_order(&self, order: &ResolvedOrder) -> VenueResult<OrderAck>;
}
