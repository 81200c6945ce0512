use serde::{Deserialize, Serialize};

use crate::error::{ConversionError, ConversionResult};

/// Base/quote asset pair of a spot market
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SymbolPair {
    pub base: String,
    pub quote: String,
}

impl SymbolPair {
    pub fn new(base: impl Into<String>, quote: impl Into<String>) -> Self {
        Self {
            base: base.into().to_uppercase(),
            quote: quote.into().to_uppercase(),
        }
    }

    /// Parse the unified "BASE/QUOTE" form, e.g. "BTC/USDT"
    pub fn parse(text: &str) -> ConversionResult<Self> {
        let asset = |s: &str| !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric());

        match text.trim().split_once('/') {
            Some((base, quote)) if asset(base.trim()) && asset(quote.trim()) => {
                Ok(Self::new(base.trim(), quote.trim()))
            }
            _ => Err(ConversionError::Parse {
                field: "symbol pair",
                value: text.to_string(),
            }),
        }
    }

    /// Exchange instrument identifier, e.g. "BTCUSDT"
    pub fn exchange_symbol(&self) -> String {
        format!("{}{}", self.base, self.quote)
    }
}
