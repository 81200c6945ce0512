//! Market data access
//!
//! The book ticker endpoint is asked for one symbol, so exactly one entry
//! for that symbol is expected back. Anything else is an error rather
//! than a silently wrong price.

use hermes_core::BookTicker;
use hermes_ports::MarketDataSource;
use log::debug;

use crate::error::{Error, Result};

/// Fetch the current best bid/ask for `symbol`
pub async fn fetch_book_ticker(source: &dyn MarketDataSource, symbol: &str) -> Result<BookTicker> {
    let tickers = source.book_tickers(symbol).await?;

    let ticker = tickers
        .into_iter()
        .next()
        .ok_or_else(|| Error::TickerNotFound(symbol.to_string()))?;

    if !ticker.symbol.eq_ignore_ascii_case(symbol) {
        return Err(Error::TickerMismatch {
            requested: symbol.to_string(),
            received: ticker.symbol,
        });
    }

    debug!(
        "Book ticker {}: bid={} ask={}",
        ticker.symbol, ticker.bid_price, ticker.ask_price
    );
    Ok(ticker)
}
