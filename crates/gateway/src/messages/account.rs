//! Account messages

use hermes_core::parse_decimal;
use hermes_ports::VenueError;
use rust_decimal::Decimal;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct BalanceEntry {
    pub asset: String,
    pub free: String,
    pub locked: String,
}

/// Response of `GET /api/v3/account` (balances only)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountInfo {
    #[serde(default)]
    pub balances: Vec<BalanceEntry>,
}

impl AccountInfo {
    /// Free balance of `asset`, zero when the account holds none
    pub fn free_balance(&self, asset: &str) -> Result<Decimal, VenueError> {
        match self.balances.iter().find(|b| b.asset.eq_ignore_ascii_case(asset)) {
            Some(entry) => parse_decimal("free", &entry.free).map_err(|e| VenueError::Decode(e.to_string())),
            None => Ok(Decimal::ZERO),
        }
    }
}
