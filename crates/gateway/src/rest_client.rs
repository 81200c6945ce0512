//! Binance-compatible spot REST client
//!
//! One `reqwest::Client` per instance, so connections are pooled across
//! calls. Implements the three ports the order pipeline talks to.

use std::time::{SystemTime, UNIX_EPOCH};

use async_trait::async_trait;
use hermes_core::{BookTicker, ResolvedOrder};
use hermes_ports::{AccountSource, MarketDataSource, OrderAck, OrderVenue, VenueError, VenueResult};
use log::{debug, warn};
use reqwest::{Client, Method};
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;

use crate::config::ExchangeConfig;
use crate::error::ConfigError;
use crate::messages::{
    AccountInfo, ApiError, BookTickerPayload, NewOrderResponse, limit_order_params,
};
use crate::signer::{API_KEY_HEADER, HmacSigner, build_query_string};

pub mod endpoints {
    pub const BOOK_TICKER: &str = "/api/v3/ticker/bookTicker";
    pub const ORDER_TEST: &str = "/api/v3/order/test";
    pub const ORDER: &str = "/api/v3/order";
    pub const ACCOUNT: &str = "/api/v3/account";
}

fn timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default()
}

fn transport_error(err: reqwest::Error) -> VenueError {
    if err.is_timeout() {
        VenueError::Timeout(err.to_string())
    } else {
        VenueError::Transport(err.to_string())
    }
}

/// REST client for a Binance-compatible spot exchange
#[derive(Clone, Debug)]
pub struct BinanceRestClient {
    client: Client,
    base_url: String,
    signer: HmacSigner,
    recv_window_ms: u64,
}

impl BinanceRestClient {
    /// Build a client from configuration; fails without credentials
    pub fn new(config: &ExchangeConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let signer = HmacSigner::new(&config.credentials()?)?;

        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| ConfigError::Client(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            signer,
            recv_window_ms: config.recv_window_ms,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Best bid/ask for `symbol`
    pub async fn get_book_tickers(&self, symbol: &str) -> VenueResult<Vec<BookTicker>> {
        let params = vec![("symbol".to_string(), symbol.to_string())];
        let payload: BookTickerPayload = self.get_public(endpoints::BOOK_TICKER, &params).await?;

        payload.into_vec().into_iter().map(BookTicker::try_from).collect()
    }

    /// Validate a limit order without placing it
    pub async fn test_order(&self, order: &ResolvedOrder) -> VenueResult<()> {
        let _: serde_json::Value = self
            .send_signed(Method::POST, endpoints::ORDER_TEST, limit_order_params(order))
            .await?;
        Ok(())
    }

    /// Place a limit order
    pub async fn create_order(&self, order: &ResolvedOrder) -> VenueResult<NewOrderResponse> {
        self.send_signed(Method::POST, endpoints::ORDER, limit_order_params(order))
            .await
    }

    /// Account snapshot with balances
    pub async fn get_account(&self) -> VenueResult<AccountInfo> {
        self.send_signed(Method::GET, endpoints::ACCOUNT, Vec::new())
            .await
    }

    async fn get_public<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(String, String)],
    ) -> VenueResult<T> {
        let url = format!("{}{}?{}", self.base_url, path, build_query_string(params));
        debug!("GET {}", url);

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(transport_error)?;

        self.handle_response(resp).await
    }

    async fn send_signed<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        mut params: Vec<(String, String)>,
    ) -> VenueResult<T> {
        params.push(("recvWindow".to_string(), self.recv_window_ms.to_string()));
        self.signer.sign(&mut params, timestamp_ms());

        let url = format!("{}{}?{}", self.base_url, path, build_query_string(&params));
        debug!("{} {}{}", method, self.base_url, path);

        let resp = self
            .client
            .request(method, &url)
            .header(API_KEY_HEADER, self.signer.api_key())
            .send()
            .await
            .map_err(transport_error)?;

        self.handle_response(resp).await
    }

    async fn handle_response<T: DeserializeOwned>(&self, resp: reqwest::Response) -> VenueResult<T> {
        let status = resp.status();
        let text = resp.text().await.map_err(transport_error)?;

        if !status.is_success() {
            if let Ok(err) = serde_json::from_str::<ApiError>(&text) {
                warn!("Exchange rejected request: {} - {}", err.code, err.msg);
                return Err(VenueError::Rejected {
                    code: err.code,
                    message: err.msg,
                });
            }
            return Err(VenueError::Http {
                status: status.as_u16(),
                body: text,
            });
        }

        serde_json::from_str(&text).map_err(|e| VenueError::Decode(e.to_string()))
    }
}

#[async_trait]
impl MarketDataSource for BinanceRestClient {
    async fn book_tickers(&self, symbol: &str) -> VenueResult<Vec<BookTicker>> {
        self.get_book_tickers(symbol).await
    }
}

#[async_trait]
impl OrderVenue for BinanceRestClient {
    async fn test_limit_order(&self, order: &ResolvedOrder) -> VenueResult<()> {
        self.test_order(order).await
    }

    async fn place_limit_order(&self, order: &ResolvedOrder) -> VenueResult<OrderAck> {
        let resp = self.create_order(order).await?;
        Ok(OrderAck {
            symbol: resp.symbol,
            order_id: resp.order_id,
            status: resp.status.unwrap_or_else(|| "NEW".to_string()),
        })
    }
}

#[async_trait]
impl AccountSource for BinanceRestClient {
    async fn free_balance(&self, asset: &str) -> VenueResult<Decimal> {
        self.get_account().await?.free_balance(asset)
    }
}
