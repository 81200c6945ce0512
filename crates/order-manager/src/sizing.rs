//! Balance-based order sizing
//!
//! Fixed amounts pass through. Percentage amounts take a fraction of the
//! free balance in the base or quote asset of the pair.

use hermes_core::{AmountCalculation, AmountType, ConversionError, SymbolPair, format_decimal};
use hermes_ports::AccountSource;
use log::debug;
use rust_decimal::Decimal;

use crate::error::{Error, Result};

/// Amount ready to go into an `OrderRequest`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizedAmount {
    pub amount_type: AmountType,
    /// Plain decimal text, e.g. "0.125"
    pub amount: String,
}

/// Compute the order amount for `calculation` on `pair`
pub async fn size_amount(
    account: &dyn AccountSource,
    pair: &SymbolPair,
    calculation: AmountCalculation,
) -> Result<SizedAmount> {
    let amount = match calculation {
        AmountCalculation::FixedBase(amount) | AmountCalculation::FixedQuote(amount) => {
            if amount < Decimal::ZERO {
                return Err(ConversionError::Negative {
                    field: "amount",
                    value: amount.to_string(),
                }
                .into());
            }
            amount
        }
        AmountCalculation::FixedBaseFromPercentage(fraction) => {
            fraction_of_balance(account, &pair.base, fraction).await?
        }
        AmountCalculation::FixedQuoteFromPercentage(fraction) => {
            fraction_of_balance(account, &pair.quote, fraction).await?
        }
    };

    Ok(SizedAmount {
        amount_type: calculation.amount_type(),
        amount: format_decimal(amount),
    })
}

async fn fraction_of_balance(account: &dyn AccountSource, asset: &str, fraction: Decimal) -> Result<Decimal> {
    if fraction < Decimal::ZERO || fraction > Decimal::ONE {
        return Err(Error::InvalidFraction(fraction));
    }

    let balance = account.free_balance(asset).await?;
    let amount = balance
        .checked_mul(fraction)
        .ok_or(ConversionError::Overflow("amount"))?;

    debug!("{} of free {} balance {} = {}", fraction, asset, balance, amount);
    Ok(amount)
}
