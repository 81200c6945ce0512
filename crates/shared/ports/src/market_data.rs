use async_trait::async_trait;
use hermes_core::BookTicker;

use crate::error::VenueResult;

/// Port for best bid/ask lookups
///
/// Implementations return whatever the exchange sent for the symbol;
/// picking and validating the entry is the caller's job.
#[async_trait]
pub trait MarketDataSource: Send + Sync {
    async fn book_tickers(&self, symbol: &str) -> VenueResult<Vec<BookTicker>>;
}
