//! C ABI exports
//!
//! Symbol names and argument order are a stable ABI for hosts such as
//! Python via ctypes:
//!
//! ```text
//! PlaceOrder(symbol, side, amount_type, amount, quantity_precision, mode)
//! LowBuy(symbol, side, amount_type, amount, quantity_precision, mode, price_precision)
//! HighSell(symbol, side, amount_type, amount, quantity_precision, mode, price_precision)
//! TradeCustomPrice(symbol, side, amount_type, amount, quantity_precision, mode, price, price_precision)
//! ```
//!
//! Codes: side 0=Buy 1=Sell, amount type 0=FixedBase 1=FixedQuote,
//! mode 0=Live 1=Test. Each call returns the exchange order id, or 0 when
//! nothing was placed. A validated test order also returns 0; use
//! `LastErrorKind()` to tell it apart from a failure.
//!
//! All calls share one lazily opened session configured from the
//! environment. Calls are serialized on it. Panics never cross the
//! boundary.

use std::cell::Cell;
use std::ffi::{CStr, c_char};
use std::panic::{self, AssertUnwindSafe};
use std::sync::{Mutex, PoisonError};

use hermes_core::{OrderOutcome, OrderRequest, PriceOffset, Side, check_precision};
use log::{debug, error};

use crate::error::{ErrorKind, OrderError};
use crate::logging::init_logging;
use crate::session::TradingSession;

static SESSION: Mutex<Option<TradingSession>> = Mutex::new(None);

thread_local! {
    static LAST_ERROR: Cell<i32> = const { Cell::new(0) };
}

fn set_last_error(code: i32) {
    LAST_ERROR.with(|cell| cell.set(code));
}

/// Install `session` as the shared session, returning the one it replaces
pub fn install_session(session: TradingSession) -> Option<TradingSession> {
    SESSION
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .replace(session)
}

/// Drop the shared session. Returns true if one was open.
pub fn release_session() -> bool {
    let session = SESSION.lock().unwrap_or_else(PoisonError::into_inner).take();
    session.is_some()
}

fn with_shared_session<T>(
    f: impl FnOnce(&TradingSession) -> Result<T, OrderError>,
) -> Result<T, OrderError> {
    let mut guard = SESSION.lock().unwrap_or_else(PoisonError::into_inner);
    if guard.is_none() {
        *guard = Some(TradingSession::from_env()?);
    }
    let Some(session) = guard.as_ref() else {
        return Err(OrderError::Internal("session unavailable".to_string()));
    };
    f(session)
}

/// Run `f`, converting every failure (including panics) into the 0 sentinel
fn guarded(op: &str, f: impl FnOnce() -> Result<OrderOutcome, OrderError>) -> i64 {
    init_logging();

    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        let outcome = f()?;
        i64::try_from(outcome.order_id()).map_err(|_| {
            OrderError::Internal(format!("order id {} does not fit in i64", outcome.order_id()))
        })
    }));

    match result {
        Ok(Ok(order_id)) => {
            set_last_error(0);
            order_id
        }
        Ok(Err(e)) => {
            error!("{} failed: {}", op, e);
            set_last_error(e.kind().code());
            0
        }
        Err(_) => {
            error!("{} panicked", op);
            set_last_error(ErrorKind::Internal.code());
            0
        }
    }
}

/// # Safety
///
/// `ptr` must be null or point to a NUL-terminated string that stays
/// valid for the duration of the call.
unsafe fn read_str(ptr: *const c_char, name: &str) -> Result<String, OrderError> {
    if ptr.is_null() {
        return Err(OrderError::InvalidArgument(format!("{} is null", name)));
    }
    // SAFETY: non-null and NUL-terminated per the caller contract
    let text = unsafe { CStr::from_ptr(ptr) };
    text.to_str()
        .map(str::to_string)
        .map_err(|_| OrderError::InvalidArgument(format!("{} is not valid UTF-8", name)))
}

/// # Safety
///
/// Same contract as [`read_str`] for `symbol` and `amount`.
unsafe fn read_request(
    symbol: *const c_char,
    side: Side,
    amount_type: i32,
    amount: *const c_char,
    quantity_precision: i32,
    mode: i32,
) -> Result<OrderRequest, OrderError> {
    let symbol = unsafe { read_str(symbol, "symbol") }?;
    let amount = unsafe { read_str(amount, "amount") }?;
    Ok(OrderRequest::from_codes(
        symbol,
        side,
        amount_type,
        amount,
        quantity_precision,
        mode,
    )?)
}

/// Side of an offset order; the caller's code is only logged
fn offset_side(op: &str, offset: PriceOffset, side: i32) -> Side {
    let forced = offset.side();
    if Side::from_code(side).ok() != Some(forced) {
        debug!("{} ignores side code {}, using {}", op, side, forced.as_str());
    }
    forced
}

/// Limit order at the best bid (Buy) or ask (Sell).
///
/// # Safety
///
/// `symbol` and `amount` must be null or NUL-terminated strings valid for
/// the duration of the call.
#[unsafe(no_mangle)]
#[allow(non_snake_case)]
pub unsafe extern "C" fn PlaceOrder(
    symbol: *const c_char,
    side: i32,
    amount_type: i32,
    amount: *const c_char,
    quantity_precision: i32,
    mode: i32,
) -> i64 {
    guarded("PlaceOrder", || {
        let side = Side::from_code(side)?;
        let request =
            unsafe { read_request(symbol, side, amount_type, amount, quantity_precision, mode) }?;
        with_shared_session(|session| session.place_order(&request))
    })
}

/// Buy 20% below the bid; `side` is ignored and may be any value.
///
/// # Safety
///
/// See [`PlaceOrder`].
#[unsafe(no_mangle)]
#[allow(non_snake_case)]
pub unsafe extern "C" fn LowBuy(
    symbol: *const c_char,
    side: i32,
    amount_type: i32,
    amount: *const c_char,
    quantity_precision: i32,
    mode: i32,
    price_precision: i32,
) -> i64 {
    guarded("LowBuy", || {
        let side = offset_side("LowBuy", PriceOffset::LowBuy, side);
        let request =
            unsafe { read_request(symbol, side, amount_type, amount, quantity_precision, mode) }?;
        let price_precision = check_precision(price_precision as i64)?;
        with_shared_session(|session| session.low_buy(&request, price_precision))
    })
}

/// Sell 20% above the ask; `side` is ignored and may be any value.
///
/// # Safety
///
/// See [`PlaceOrder`].
#[unsafe(no_mangle)]
#[allow(non_snake_case)]
pub unsafe extern "C" fn HighSell(
    symbol: *const c_char,
    side: i32,
    amount_type: i32,
    amount: *const c_char,
    quantity_precision: i32,
    mode: i32,
    price_precision: i32,
) -> i64 {
    guarded("HighSell", || {
        let side = offset_side("HighSell", PriceOffset::HighSell, side);
        let request =
            unsafe { read_request(symbol, side, amount_type, amount, quantity_precision, mode) }?;
        let price_precision = check_precision(price_precision as i64)?;
        with_shared_session(|session| session.high_sell(&request, price_precision))
    })
}

/// Limit order at `price`, truncated to `price_precision`.
///
/// # Safety
///
/// `symbol`, `amount` and `price` must be null or NUL-terminated strings
/// valid for the duration of the call.
#[unsafe(no_mangle)]
#[allow(non_snake_case)]
#[allow(clippy::too_many_arguments)]
pub unsafe extern "C" fn TradeCustomPrice(
    symbol: *const c_char,
    side: i32,
    amount_type: i32,
    amount: *const c_char,
    quantity_precision: i32,
    mode: i32,
    price: *const c_char,
    price_precision: i32,
) -> i64 {
    guarded("TradeCustomPrice", || {
        let side = Side::from_code(side)?;
        let request =
            unsafe { read_request(symbol, side, amount_type, amount, quantity_precision, mode) }?;
        let price = unsafe { read_str(price, "price") }?;
        let price_precision = check_precision(price_precision as i64)?;
        with_shared_session(|session| session.trade_custom_price(&request, &price, price_precision))
    })
}

/// Close the shared session, releasing its connections and runtime
#[unsafe(no_mangle)]
#[allow(non_snake_case)]
pub extern "C" fn ReleaseSession() {
    if panic::catch_unwind(release_session).is_err() {
        error!("ReleaseSession panicked");
    }
}

/// Error class of the last call on this thread, 0 if it succeeded
#[unsafe(no_mangle)]
#[allow(non_snake_case)]
pub extern "C" fn LastErrorKind() -> i32 {
    LAST_ERROR.with(|cell| cell.get())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CString;
    use std::ptr;

    #[test]
    fn test_null_symbol() {
        let amount = CString::new("1").unwrap();
        let id = unsafe { PlaceOrder(ptr::null(), 0, 0, amount.as_ptr(), 2, 1) };
        assert_eq!(id, 0);
        assert_eq!(LastErrorKind(), ErrorKind::Parse.code());
    }

    #[test]
    fn test_unknown_codes_are_parse_errors() {
        let symbol = CString::new("BTCUSDT").unwrap();
        let amount = CString::new("1").unwrap();

        let id = unsafe { PlaceOrder(symbol.as_ptr(), 2, 0, amount.as_ptr(), 2, 1) };
        assert_eq!(id, 0);
        assert_eq!(LastErrorKind(), ErrorKind::Parse.code());

        let id = unsafe { LowBuy(symbol.as_ptr(), 0, 5, amount.as_ptr(), 2, 1, 2) };
        assert_eq!(id, 0);
        assert_eq!(LastErrorKind(), ErrorKind::Parse.code());

        let id = unsafe { HighSell(symbol.as_ptr(), 0, 0, amount.as_ptr(), 2, -1, 2) };
        assert_eq!(id, 0);
        assert_eq!(LastErrorKind(), ErrorKind::Parse.code());
    }

    #[test]
    fn test_offset_side_ignores_caller_code() {
        assert_eq!(offset_side("LowBuy", PriceOffset::LowBuy, 5), Side::Buy);
        assert_eq!(offset_side("LowBuy", PriceOffset::LowBuy, 1), Side::Buy);
        assert_eq!(offset_side("HighSell", PriceOffset::HighSell, -1), Side::Sell);
        assert_eq!(offset_side("HighSell", PriceOffset::HighSell, 1), Side::Sell);
    }

    #[test]
    fn test_negative_precision() {
        let symbol = CString::new("BTCUSDT").unwrap();
        let amount = CString::new("1").unwrap();
        let price = CString::new("10").unwrap();

        let id = unsafe { PlaceOrder(symbol.as_ptr(), 0, 0, amount.as_ptr(), -3, 1) };
        assert_eq!(id, 0);
        assert_eq!(LastErrorKind(), ErrorKind::Parse.code());

        let id = unsafe {
            TradeCustomPrice(symbol.as_ptr(), 0, 0, amount.as_ptr(), 2, 1, price.as_ptr(), -1)
        };
        assert_eq!(id, 0);
        assert_eq!(LastErrorKind(), ErrorKind::Parse.code());
    }

    #[test]
    fn test_invalid_utf8() {
        let symbol = CString::new(vec![0xff, 0xfe]).unwrap();
        let amount = CString::new("1").unwrap();
        let id = unsafe { PlaceOrder(symbol.as_ptr(), 0, 0, amount.as_ptr(), 2, 1) };
        assert_eq!(id, 0);
        assert_eq!(LastErrorKind(), ErrorKind::Parse.code());
    }

    #[test]
    fn test_panic_does_not_unwind() {
        let id = guarded("test", || panic!("boom"));
        assert_eq!(id, 0);
        assert_eq!(LastErrorKind(), ErrorKind::Internal.code());
    }
}
