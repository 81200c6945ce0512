//! Hermes Gateway
//!
//! Exchange access for the Hermes order pipeline:
//! - `ExchangeConfig`: connection settings and credentials (file, env, `.env`)
//! - `HmacSigner`: HMAC-SHA256 signing of private requests
//! - `messages`: JSON wire types
//! - `BinanceRestClient`: implements the `hermes-ports` traits over REST
//!
//! ## Architecture
//!
//! ```text
//!  Order pipeline (hermes-order-manager)
//!         │ MarketDataSource / OrderVenue / AccountSource
//!    ┌────▼──────────────┐
//!    │ BinanceRestClient │── HmacSigner
//!    └────┬──────────────┘
//!         │ HTTPS (reqwest)
//!    ┌────▼────┐
//!    │Exchange │
//!    └─────────┘
//! ```

pub mod config;
pub mod error;
pub mod messages;
pub mod rest_client;
pub mod signer;

// Re-export commonly used types
pub use config::{Credentials, DEFAULT_BASE_URL, ExchangeConfig};
pub use error::ConfigError;
pub use rest_client::BinanceRestClient;
pub use signer::{HmacSigner, build_query_string};
