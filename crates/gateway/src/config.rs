//! Exchange connection settings
//!
//! Settings come from a JSON file, from environment variables, or both:
//! the file (if `HERMES_CONFIG` names one) provides the base and the
//! environment overrides individual fields. Credentials are read from
//! `API_KEY` and `SECRET`, optionally through a `.env` file.

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const DEFAULT_BASE_URL: &str = "https://api.binance.us";

pub const ENV_CONFIG_PATH: &str = "HERMES_CONFIG";
pub const ENV_BASE_URL: &str = "HERMES_BASE_URL";
pub const ENV_TIMEOUT_MS: &str = "HERMES_TIMEOUT_MS";
pub const ENV_RECV_WINDOW_MS: &str = "HERMES_RECV_WINDOW_MS";
pub const ENV_API_KEY: &str = "API_KEY";
pub const ENV_SECRET: &str = "SECRET";

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_request_timeout_ms() -> u64 {
    10_000
}

fn default_recv_window_ms() -> u64 {
    5_000
}

/// API key pair used to sign requests
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub api_key: String,
    pub api_secret: String,
}

impl Credentials {
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &"<redacted>")
            .field("api_secret", &"<redacted>")
            .finish()
    }
}

/// Connection settings for one exchange
#[derive(Clone, Serialize, Deserialize)]
pub struct ExchangeConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Whole-request timeout for every HTTP call
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,

    /// `recvWindow` sent with signed requests
    #[serde(default = "default_recv_window_ms")]
    pub recv_window_ms: u64,

    #[serde(default)]
    pub api_key: Option<String>,

    #[serde(default)]
    pub api_secret: Option<String>,
}

impl Default for ExchangeConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_ms: default_request_timeout_ms(),
            recv_window_ms: default_recv_window_ms(),
            api_key: None,
            api_secret: None,
        }
    }
}

impl fmt::Debug for ExchangeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExchangeConfig")
            .field("base_url", &self.base_url)
            .field("request_timeout_ms", &self.request_timeout_ms)
            .field("recv_window_ms", &self.recv_window_ms)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("api_secret", &self.api_secret.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl ExchangeConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: ExchangeConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from the process environment.
    ///
    /// A `.env` file in the working directory (or a parent) is loaded
    /// first; variables already set in the environment win.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::load(None)
    }

    /// Like [`ExchangeConfig::from_env`], with an explicit config file
    /// taking the place of `HERMES_CONFIG`
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Ok(env_path) = dotenvy::dotenv() {
            log::debug!("Loaded environment from {}", env_path.display());
        }

        let path = path
            .map(Path::to_path_buf)
            .or_else(|| std::env::var_os(ENV_CONFIG_PATH).map(PathBuf::from));

        let base = match path {
            Some(path) => {
                log::info!("Loading exchange config from {}", path.display());
                Self::from_file(path)?
            }
            None => Self::default(),
        };

        base.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from a key lookup (normally the environment)
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_BASE_URL) {
            self.base_url = url;
        }
        if let Some(value) = lookup(ENV_TIMEOUT_MS) {
            self.request_timeout_ms = parse_millis(ENV_TIMEOUT_MS, &value)?;
        }
        if let Some(value) = lookup(ENV_RECV_WINDOW_MS) {
            self.recv_window_ms = parse_millis(ENV_RECV_WINDOW_MS, &value)?;
        }
        if let Some(key) = lookup(ENV_API_KEY) {
            self.api_key = Some(key);
        }
        if let Some(secret) = lookup(ENV_SECRET) {
            self.api_secret = Some(secret);
        }

        self.validate()?;
        Ok(self)
    }

    /// Set credentials directly
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.api_key = Some(credentials.api_key);
        self.api_secret = Some(credentials.api_secret);
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_request_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.request_timeout_ms = timeout_ms;
        self
    }

    /// Key pair for signed requests; both halves must be present and non-empty
    pub fn credentials(&self) -> Result<Credentials, ConfigError> {
        let api_key = non_empty(self.api_key.as_deref()).ok_or(ConfigError::MissingCredential(ENV_API_KEY))?;
        let api_secret = non_empty(self.api_secret.as_deref()).ok_or(ConfigError::MissingCredential(ENV_SECRET))?;
        Ok(Credentials::new(api_key, api_secret))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ConfigError::InvalidValue {
                key: "base_url",
                value: self.base_url.clone(),
            });
        }
        if self.request_timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                key: "request_timeout_ms",
                value: "0".to_string(),
            });
        }
        Ok(())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn parse_millis(key: &'static str, value: &str) -> Result<u64, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ExchangeConfig::from_json("{}").unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.request_timeout_ms, 10_000);
        assert_eq!(config.recv_window_ms, 5_000);
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "base_url": "http://127.0.0.1:8080",
            "request_timeout_ms": 2500,
            "api_key": "key",
            "api_secret": "secret"
        }"#;
        let config = ExchangeConfig::from_json(json).unwrap();
        assert_eq!(config.base_url, "http://127.0.0.1:8080");
        assert_eq!(config.request_timeout(), Duration::from_millis(2500));

        let credentials = config.credentials().unwrap();
        assert_eq!(credentials, Credentials::new("key", "secret"));
    }

    #[test]
    fn test_from_json_rejects_bad_input() {
        assert!(matches!(
            ExchangeConfig::from_json("not json"),
            Err(ConfigError::ParseError(_))
        ));
        assert!(matches!(
            ExchangeConfig::from_json(r#"{"base_url": "ftp://example"}"#),
            Err(ConfigError::InvalidValue { key: "base_url", .. })
        ));
        assert!(matches!(
            ExchangeConfig::from_json(r#"{"request_timeout_ms": 0}"#),
            Err(ConfigError::InvalidValue { key: "request_timeout_ms", .. })
        ));
    }

    #[test]
    fn test_from_missing_file() {
        assert!(matches!(
            ExchangeConfig::from_file("/nonexistent/hermes.json"),
            Err(ConfigError::IoError(_))
        ));
    }

    #[test]
    fn test_overrides() {
        let lookup = lookup_from(&[
            (ENV_BASE_URL, "http://localhost:9000"),
            (ENV_TIMEOUT_MS, "750"),
            (ENV_API_KEY, "abc"),
            (ENV_SECRET, "xyz"),
        ]);
        let config = ExchangeConfig::default().with_overrides(lookup).unwrap();

        assert_eq!(config.base_url, "http://localhost:9000");
        assert_eq!(config.request_timeout_ms, 750);
        assert_eq!(config.recv_window_ms, 5_000);
        assert_eq!(config.credentials().unwrap().api_key, "abc");
    }

    #[test]
    fn test_override_with_bad_number() {
        let lookup = lookup_from(&[(ENV_TIMEOUT_MS, "soon")]);
        assert!(matches!(
            ExchangeConfig::default().with_overrides(lookup),
            Err(ConfigError::InvalidValue { key: ENV_TIMEOUT_MS, .. })
        ));
    }

    #[test]
    fn test_missing_credentials() {
        let config = ExchangeConfig::default();
        assert!(matches!(
            config.credentials(),
            Err(ConfigError::MissingCredential(ENV_API_KEY))
        ));

        let config = ExchangeConfig::default().with_overrides(lookup_from(&[(ENV_API_KEY, "abc")])).unwrap();
        assert!(matches!(
            config.credentials(),
            Err(ConfigError::MissingCredential(ENV_SECRET))
        ));

        let config = ExchangeConfig::default().with_overrides(lookup_from(&[(ENV_API_KEY, "  "), (ENV_SECRET, "s")])).unwrap();
        assert!(matches!(
            config.credentials(),
            Err(ConfigError::MissingCredential(ENV_API_KEY))
        ));
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let config = ExchangeConfig::default().with_credentials(Credentials::new("my-key", "my-secret"));
        let printed = format!("{:?}", config);
        assert!(!printed.contains("my-key"));
        assert!(!printed.contains("my-secret"));

        let printed = format!("{:?}", config.credentials().unwrap());
        assert!(!printed.contains("my-secret"));
    }
}
