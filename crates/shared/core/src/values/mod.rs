use rust_decimal::Decimal;

/// Price value - uses Decimal for precision
pub type Price = Decimal;

/// Quantity value in base-asset units - uses Decimal for precision
pub type Quantity = Decimal;

/// Exchange instrument identifier (e.g. "BTCUSDT")
pub type Symbol = String;
