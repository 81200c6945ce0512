//! Hermes Runner
//!
//! Entry points of the Hermes order library:
//!
//! - **Session**: long-lived handle owning the exchange client and runtime
//! - **Entry points**: `place_order`, `low_buy`, `high_sell`,
//!   `trade_custom_price` on [`TradingSession`]
//! - **FFI**: the same four operations as C symbols for non-Rust hosts
//! - **Logging**: `env_logger` setup shared by the library and the CLI
//!
//! ## Architecture
//!
//! ```text
//!   C host (ctypes)        Rust caller        hermes-order CLI
//!         │                     │                    │
//!   ┌─────▼─────┐               │                    │
//!   │    ffi    │               │                    │
//!   └─────┬─────┘               │                    │
//!         └──────────┬──────────┴────────────────────┘
//!              ┌─────▼──────────┐
//!              │ TradingSession │  runtime + client
//!              └─────┬──────────┘
//!                    │ OrderBuilder → OrderDispatcher
//!              ┌─────▼──────────┐
//!              │    Exchange    │
//!              └────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use hermes_core::{AmountType, OrderMode, OrderRequest, Side};
//! use hermes_runner::TradingSession;
//!
//! let session = TradingSession::from_env()?;
//! let request = OrderRequest::new("BTCUSDT", Side::Buy, AmountType::FixedBase, "2", 2, OrderMode::Test)?;
//! let outcome = session.place_order(&request)?;
//! ```

pub mod entry;
pub mod error;
pub mod ffi;
pub mod logging;
pub mod session;

// Re-export main types
pub use error::{ErrorKind, OrderError};
pub use logging::init_logging;
pub use session::TradingSession;
