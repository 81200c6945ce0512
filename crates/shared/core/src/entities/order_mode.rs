use serde::{Deserialize, Serialize};

use crate::error::{ConversionError, ConversionResult};

/// Whether an order is really placed or only validated by the exchange
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderMode {
    /// Real placement; mutates the exchange-side order book
    Live,
    /// Server-side validation only, nothing is placed
    Test,
}

impl OrderMode {
    /// Decode the caller's integer code (0 = Live, 1 = Test)
    pub fn from_code(code: i32) -> ConversionResult<Self> {
        match code {
            0 => Ok(OrderMode::Live),
            1 => Ok(OrderMode::Test),
            other => Err(ConversionError::UnknownCode {
                field: "mode",
                code: other as i64,
            }),
        }
    }
}
