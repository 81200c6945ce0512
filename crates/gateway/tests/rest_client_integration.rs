//! Integration test: BinanceRestClient <-> mock exchange
//!
//! Spins up an axum server on an ephemeral port that speaks the subset of
//! the spot REST API the client uses, and records every request it sees.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    Json, Router,
    extract::{Query, State},
    http::{HeaderMap, StatusCode, Uri},
    routing::{get, post},
};
use hermes_core::{OrderMode, ResolvedOrder, Side};
use hermes_gateway::{BinanceRestClient, Credentials, ExchangeConfig, HmacSigner};
use hermes_ports::{AccountSource, MarketDataSource, OrderVenue, VenueError};
use rust_decimal_macros::dec;
use serde_json::{Value, json};

const API_KEY: &str = "test-api-key";
const API_SECRET: &str = "test-api-secret";

#[derive(Debug, Clone)]
struct Recorded {
    path: &'static str,
    query: String,
    api_key: Option<String>,
}

#[derive(Clone, Default)]
struct MockExchange {
    requests: Arc<Mutex<Vec<Recorded>>>,
}

impl MockExchange {
    fn record(&self, path: &'static str, query: String, headers: &HeaderMap) {
        let api_key = headers
            .get("x-mbx-apikey")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        self.requests.lock().unwrap().push(Recorded { path, query, api_key });
    }

    fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }
}

fn raw_query(uri: &Uri) -> String {
    uri.query().unwrap_or_default().to_string()
}

async fn book_ticker(Query(params): Query<HashMap<String, String>>) -> (StatusCode, Json<Value>) {
    match params.get("symbol").map(String::as_str) {
        Some("BTCUSDT") => (
            StatusCode::OK,
            Json(json!({
                "symbol": "BTCUSDT",
                "bidPrice": "9.90",
                "bidQty": "3.00000000",
                "askPrice": "10.00",
                "askQty": "1.50000000"
            })),
        ),
        Some("MULTI") => (
            StatusCode::OK,
            Json(json!([
                {"symbol": "MULTI", "bidPrice": "1.1", "askPrice": "1.2"},
                {"symbol": "OTHER", "bidPrice": "2.1", "askPrice": "2.2"}
            ])),
        ),
        _ => (
            StatusCode::BAD_REQUEST,
            Json(json!({"code": -1121, "msg": "Invalid symbol."})),
        ),
    }
}

async fn order_test(
    State(exchange): State<MockExchange>,
    headers: HeaderMap,
    uri: Uri,
    Query(params): Query<HashMap<String, String>>,
) -> (StatusCode, Json<Value>) {
    exchange.record("/api/v3/order/test", raw_query(&uri), &headers);

    if params.get("quantity").map(String::as_str) == Some("0") {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"code": -1013, "msg": "Filter failure: LOT_SIZE"})),
        );
    }
    (StatusCode::OK, Json(json!({})))
}

async fn order(
    State(exchange): State<MockExchange>,
    headers: HeaderMap,
    uri: Uri,
    Query(params): Query<HashMap<String, String>>,
) -> (StatusCode, Json<Value>) {
    exchange.record("/api/v3/order", raw_query(&uri), &headers);

    (
        StatusCode::OK,
        Json(json!({
            "symbol": params.get("symbol").cloned().unwrap_or_default(),
            "orderId": 28,
            "orderListId": -1,
            "clientOrderId": "6gCrw2kRUAF9CvJDGP16IP",
            "transactTime": 1507725176595u64,
            "price": params.get("price").cloned().unwrap_or_default(),
            "origQty": params.get("quantity").cloned().unwrap_or_default(),
            "executedQty": "0",
            "status": "NEW",
            "timeInForce": "GTC",
            "type": "LIMIT",
            "side": params.get("side").cloned().unwrap_or_default()
        })),
    )
}

async fn account(
    State(exchange): State<MockExchange>,
    headers: HeaderMap,
    uri: Uri,
) -> (StatusCode, Json<Value>) {
    exchange.record("/api/v3/account", raw_query(&uri), &headers);

    (
        StatusCode::OK,
        Json(json!({
            "canTrade": true,
            "balances": [
                {"asset": "BTC", "free": "0.50000000", "locked": "0.00000000"},
                {"asset": "USDT", "free": "1000.00", "locked": "0.00"}
            ]
        })),
    )
}

async fn spawn_exchange() -> (String, MockExchange) {
    let exchange = MockExchange::default();
    let app = Router::new()
        .route("/api/v3/ticker/bookTicker", get(book_ticker))
        .route("/api/v3/order/test", post(order_test))
        .route("/api/v3/order", post(order))
        .route("/api/v3/account", get(account))
        .with_state(exchange.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}", addr), exchange)
}

fn client_for(base_url: &str) -> BinanceRestClient {
    let config = ExchangeConfig::default()
        .with_base_url(base_url)
        .with_request_timeout_ms(2_000)
        .with_credentials(Credentials::new(API_KEY, API_SECRET));
    BinanceRestClient::new(&config).unwrap()
}

fn buy_order(quantity: rust_decimal::Decimal, mode: OrderMode) -> ResolvedOrder {
    ResolvedOrder::new("BTCUSDT", Side::Buy, quantity, dec!(9.90), mode)
}

#[tokio::test]
async fn test_book_ticker_single_object() {
    let _ = env_logger::try_init();
    let (url, _) = spawn_exchange().await;
    let client = client_for(&url);

    let tickers = client.book_tickers("BTCUSDT").await.unwrap();
    assert_eq!(tickers.len(), 1);
    assert_eq!(tickers[0].symbol, "BTCUSDT");
    assert_eq!(tickers[0].bid_price.to_string(), "9.90");
    assert_eq!(tickers[0].ask_price.to_string(), "10.00");
}

#[tokio::test]
async fn test_book_ticker_array() {
    let _ = env_logger::try_init();
    let (url, _) = spawn_exchange().await;
    let client = client_for(&url);

    let tickers = client.book_tickers("MULTI").await.unwrap();
    assert_eq!(tickers.len(), 2);
    assert_eq!(tickers[1].ask_price, dec!(2.2));
}

#[tokio::test]
async fn test_book_ticker_unknown_symbol_is_rejection() {
    let _ = env_logger::try_init();
    let (url, _) = spawn_exchange().await;
    let client = client_for(&url);

    let err = client.book_tickers("NOPE").await.unwrap_err();
    assert_eq!(
        err,
        VenueError::Rejected {
            code: -1121,
            message: "Invalid symbol.".to_string()
        }
    );
}

#[tokio::test]
async fn test_order_test_is_signed() {
    let _ = env_logger::try_init();
    let (url, exchange) = spawn_exchange().await;
    let client = client_for(&url);

    client
        .test_limit_order(&buy_order(dec!(2), OrderMode::Test))
        .await
        .unwrap();

    let requests = exchange.requests();
    assert_eq!(requests.len(), 1);
    let recorded = &requests[0];
    assert_eq!(recorded.path, "/api/v3/order/test");
    assert_eq!(recorded.api_key.as_deref(), Some(API_KEY));

    let (unsigned, signature) = recorded.query.rsplit_once("&signature=").unwrap();
    assert!(unsigned.starts_with(
        "symbol=BTCUSDT&side=BUY&type=LIMIT&timeInForce=GTC&quantity=2&price=9.90&recvWindow=5000&timestamp="
    ));

    let signer = HmacSigner::new(&Credentials::new(API_KEY, API_SECRET)).unwrap();
    assert_eq!(signature, signer.signature(unsigned));
}

#[tokio::test]
async fn test_order_test_rejected() {
    let _ = env_logger::try_init();
    let (url, _) = spawn_exchange().await;
    let client = client_for(&url);

    let err = client
        .test_limit_order(&buy_order(dec!(0), OrderMode::Test))
        .await
        .unwrap_err();
    assert!(err.is_rejection());
    assert!(matches!(err, VenueError::Rejected { code: -1013, .. }));
}

#[tokio::test]
async fn test_place_order_returns_id() {
    let _ = env_logger::try_init();
    let (url, exchange) = spawn_exchange().await;
    let client = client_for(&url);

    let ack = client
        .place_limit_order(&buy_order(dec!(0.5), OrderMode::Live))
        .await
        .unwrap();
    assert_eq!(ack.order_id, 28);
    assert_eq!(ack.symbol, "BTCUSDT");
    assert_eq!(ack.status, "NEW");

    let requests = exchange.requests();
    assert_eq!(requests[0].path, "/api/v3/order");
    assert!(requests[0].query.contains("quantity=0.5"));
}

#[tokio::test]
async fn test_free_balance() {
    let _ = env_logger::try_init();
    let (url, exchange) = spawn_exchange().await;
    let client = client_for(&url);

    assert_eq!(client.free_balance("BTC").await.unwrap(), dec!(0.5));
    assert_eq!(client.free_balance("ETH").await.unwrap(), dec!(0));

    let requests = exchange.requests();
    assert_eq!(requests.len(), 2);
    assert!(requests.iter().all(|r| r.query.contains("&signature=")));
}

#[tokio::test]
async fn test_non_json_error_is_http_error() {
    let _ = env_logger::try_init();
    let app = Router::new().route(
        "/api/v3/ticker/bookTicker",
        get(|| async { (StatusCode::BAD_GATEWAY, "upstream down") }),
    );
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let client = client_for(&format!("http://{}", addr));
    let err = client.book_tickers("BTCUSDT").await.unwrap_err();
    assert_eq!(
        err,
        VenueError::Http {
            status: 502,
            body: "upstream down".to_string()
        }
    );
}

#[tokio::test]
async fn test_undecodable_body_is_decode_error() {
    let _ = env_logger::try_init();
    let app = Router::new().route(
        "/api/v3/ticker/bookTicker",
        get(|| async { Json(json!({"unexpected": true})) }),
    );
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let client = client_for(&format!("http://{}", addr));
    let err = client.book_tickers("BTCUSDT").await.unwrap_err();
    assert!(matches!(err, VenueError::Decode(_)));
}

#[tokio::test]
async fn test_slow_exchange_times_out() {
    let _ = env_logger::try_init();
    let app = Router::new().route(
        "/api/v3/ticker/bookTicker",
        get(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Json(json!({}))
        }),
    );
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let config = ExchangeConfig::default()
        .with_base_url(format!("http://{}", addr))
        .with_request_timeout_ms(200)
        .with_credentials(Credentials::new(API_KEY, API_SECRET));
    let client = BinanceRestClient::new(&config).unwrap();

    let err = client.book_tickers("BTCUSDT").await.unwrap_err();
    assert!(matches!(err, VenueError::Timeout(_)), "got {:?}", err);
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    let _ = env_logger::try_init();
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = client_for(&format!("http://{}", addr));
    let err = client.book_tickers("BTCUSDT").await.unwrap_err();
    assert!(matches!(err, VenueError::Transport(_)), "got {:?}", err);
}
