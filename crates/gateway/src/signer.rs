//! HMAC-SHA256 request signing
//!
//! Signed endpoints carry a `timestamp` parameter and a hex-encoded
//! `signature` computed over the query string that precedes it. The API
//! key travels separately in the `X-MBX-APIKEY` header.

use std::fmt;

use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::config::Credentials;
use crate::error::ConfigError;

type HmacSha256 = Hmac<Sha256>;

pub const API_KEY_HEADER: &str = "X-MBX-APIKEY";

/// Join parameters into `key=value&key=value`, keeping their order
pub fn build_query_string(params: &[(String, String)]) -> String {
    params
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join("&")
}

/// Signs request parameters with the account's secret key
#[derive(Clone)]
pub struct HmacSigner {
    api_key: String,
    mac: HmacSha256,
}

impl HmacSigner {
    pub fn new(credentials: &Credentials) -> Result<Self, ConfigError> {
        let mac = HmacSha256::new_from_slice(credentials.api_secret.as_bytes()).map_err(|_| {
            ConfigError::InvalidValue {
                key: "api_secret",
                value: "<redacted>".to_string(),
            }
        })?;

        Ok(Self {
            api_key: credentials.api_key.clone(),
            mac,
        })
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Hex-encoded HMAC-SHA256 of `payload`
    pub fn signature(&self, payload: &str) -> String {
        let mut mac = self.mac.clone();
        mac.update(payload.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }

    /// Append `timestamp` and then `signature` to `params`
    pub fn sign(&self, params: &mut Vec<(String, String)>, timestamp: u64) {
        params.push(("timestamp".to_string(), timestamp.to_string()));

        let query = build_query_string(params);
        let signature = self.signature(&query);

        params.push(("signature".to_string(), signature));
    }
}

impl fmt::Debug for HmacSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HmacSigner").finish_non_exhaustive()
    }
}
