//! Wire message types for the exchange REST API
//!
//! These mirror the JSON bodies the exchange sends and convert into the
//! domain types from `hermes-core`.

pub mod account;
pub mod market_data;
pub mod order;

pub use account::{AccountInfo, BalanceEntry};
pub use market_data::{BookTickerMessage, BookTickerPayload};
pub use order::{ApiError, NewOrderResponse, limit_order_params};
