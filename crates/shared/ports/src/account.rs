use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::error::VenueResult;

/// Port for account balance lookups
#[async_trait]
pub trait AccountSource: Send + Sync {
    /// Free (unlocked) balance of `asset`; zero when the asset is not held
    async fn free_balance(&self, asset: &str) -> VenueResult<Decimal>;
}
