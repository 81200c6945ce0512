mod amount_type;
mod book_ticker;
mod order_mode;
mod order_request;
mod outcome;
mod pricing;
mod resolved_order;
mod side;
mod symbol_pair;
mod time_in_force;

pub use amount_type::{AmountCalculation, AmountType};
pub use book_ticker::BookTicker;
pub use order_mode::OrderMode;
pub use order_request::OrderRequest;
pub use outcome::OrderOutcome;
pub use pricing::{PriceOffset, PricingStrategy};
pub use resolved_order::ResolvedOrder;
pub use side::{BookSide, Side};
pub use symbol_pair::SymbolPair;
pub use time_in_force::TimeInForce;
