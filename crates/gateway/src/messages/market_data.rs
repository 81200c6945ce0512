//! Book ticker messages

use hermes_core::{BookTicker, parse_decimal};
use hermes_ports::VenueError;
use serde::Deserialize;

/// One entry of `GET /api/v3/ticker/bookTicker`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookTickerMessage {
    pub symbol: String,
    pub bid_price: String,
    #[serde(default)]
    pub bid_qty: Option<String>,
    pub ask_price: String,
    #[serde(default)]
    pub ask_qty: Option<String>,
}

/// The endpoint answers with an object for a single symbol and an
/// array otherwise.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum BookTickerPayload {
    Many(Vec<BookTickerMessage>),
    One(BookTickerMessage),
}

impl BookTickerPayload {
    pub fn into_vec(self) -> Vec<BookTickerMessage> {
        match self {
            BookTickerPayload::Many(tickers) => tickers,
            BookTickerPayload::One(ticker) => vec![ticker],
        }
    }
}

impl TryFrom<BookTickerMessage> for BookTicker {
    type Error = VenueError;

    fn try_from(msg: BookTickerMessage) -> Result<Self, Self::Error> {
        let bid_price = parse_decimal("bidPrice", &msg.bid_price)
            .map_err(|e| VenueError::Decode(e.to_string()))?;
        let ask_price = parse_decimal("askPrice", &msg.ask_price)
            .map_err(|e| VenueError::Decode(e.to_string()))?;

        Ok(BookTicker::new(msg.symbol, bid_price, ask_price))
    }
}
