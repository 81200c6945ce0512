//! Hermes Ports
//!
//! Port definitions (traits) for the Hermes order pipeline.
//! These define the boundary between order derivation and the exchange
//! client; the pipeline only ever talks to these traits.

mod account;
mod error;
mod market_data;
mod venue;

pub use account::AccountSource;
pub use error::{VenueError, VenueResult};
pub use market_data::MarketDataSource;
pub use venue::{OrderAck, OrderVenue};
