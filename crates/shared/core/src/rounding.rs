//! Rounding and unit conversion
//!
//! Exchange filters reject quantities and prices with more decimal places
//! than the market allows, so every derived value is truncated (never
//! rounded up) to the caller's precision before it is sent.

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{ConversionError, ConversionResult};

/// Largest scale a `Decimal` can carry
pub const MAX_PRECISION: u32 = 28;

/// Truncate `value` to `places` fractional digits.
///
/// Equivalent to `floor(value * 10^places) / 10^places`, computed exactly.
/// The result never exceeds `value` and never has more than `places`
/// fractional digits; `places = 0` is integer truncation.
pub fn round_down(value: Decimal, places: u32) -> Decimal {
    value.round_dp_with_strategy(places, RoundingStrategy::ToNegativeInfinity)
}

/// Validate a caller-supplied precision
pub fn check_precision(places: i64) -> ConversionResult<u32> {
    if places < 0 {
        return Err(ConversionError::NegativePrecision(places));
    }
    if places > MAX_PRECISION as i64 {
        return Err(ConversionError::PrecisionOutOfRange(places));
    }
    Ok(places as u32)
}

/// Parse a non-negative decimal numeral.
///
/// Accepts plain (`"0.015"`) and scientific (`"1.5e-2"`) notation with
/// surrounding whitespace. The scale of plain input is preserved, so
/// `"9.90"` stays `9.90`.
pub fn parse_decimal(field: &'static str, text: &str) -> ConversionResult<Decimal> {
    let trimmed = text.trim();
    let invalid = || ConversionError::Parse {
        field,
        value: text.to_string(),
    };

    if trimmed.is_empty() {
        return Err(invalid());
    }

    let value = Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| invalid())?;

    if value < Decimal::ZERO {
        return Err(ConversionError::Negative {
            field,
            value: text.to_string(),
        });
    }

    if value.is_zero() {
        // "-0" parses with the sign bit set
        return Ok(Decimal::ZERO);
    }

    Ok(value)
}

/// Minimal plain-decimal form: no trailing zeros, no exponent
pub fn format_decimal(value: Decimal) -> String {
    value.normalize().to_string()
}

/// Parse a base-asset amount and truncate it to `precision`
pub fn quantity_from_base(amount: &str, precision: u32) -> ConversionResult<Decimal> {
    let amount = parse_decimal("amount", amount)?;
    Ok(round_down(amount, precision).normalize())
}

/// Convert a quote-asset notional into a base quantity at `price`
pub fn quote_to_base(price: Decimal, amount: Decimal, precision: u32) -> ConversionResult<Decimal> {
    if price.is_zero() {
        return Err(ConversionError::DivisionByZero("price"));
    }

    let quantity = amount
        .checked_div(price)
        .ok_or(ConversionError::Overflow("quantity"))?;

    Ok(round_down(quantity, precision).normalize())
}

/// Text form of [`quote_to_base`]
pub fn amount_from_quote(price: &str, amount: &str, precision: u32) -> ConversionResult<Decimal> {
    let price = parse_decimal("price", price)?;
    let amount = parse_decimal("amount", amount)?;
    quote_to_base(price, amount, precision)
}
