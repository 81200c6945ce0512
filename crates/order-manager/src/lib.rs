//! Hermes Order Manager
//!
//! Turns a caller's order request into a single exchange call:
//! - **Market data**: best bid/ask lookup for the order's symbol
//! - **Builder**: derives price and quantity under a pricing strategy
//! - **Dispatcher**: sends the order in test (validate-only) or live mode
//! - **Sizing**: computes amounts from account balances
//!
//! ## Architecture
//!
//! ```text
//! OrderRequest + PricingStrategy
//!          │
//!  ┌───────▼────────┐   MarketDataSource   ┌──────────┐
//!  │  OrderBuilder  │◄─────────────────────│ Exchange │
//!  └───────┬────────┘                      │  client  │
//!          │ ResolvedOrder                 │          │
//!  ┌───────▼────────┐   OrderVenue         │          │
//!  │OrderDispatcher │─────────────────────►│          │
//!  └───────┬────────┘                      └──────────┘
//!          │
//!     OrderOutcome
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use hermes_order_manager::{OrderBuilder, OrderDispatcher};
//!
//! let builder = OrderBuilder::new(client.clone());
//! let dispatcher = OrderDispatcher::new(client);
//!
//! let order = builder.resolve(&request, &PricingStrategy::MarketReference).await?;
//! let outcome = dispatcher.dispatch(&order).await?;
//! ```

pub mod builder;
pub mod dispatcher;
pub mod error;
pub mod market_data;
pub mod sizing;

// Re-export main types
pub use builder::OrderBuilder;
pub use dispatcher::OrderDispatcher;
pub use error::{Error, Result};
pub use market_data::fetch_book_ticker;
pub use sizing::{SizedAmount, size_amount};
