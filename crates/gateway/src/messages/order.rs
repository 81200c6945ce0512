//! Order messages

use hermes_core::ResolvedOrder;
use serde::Deserialize;

/// Error body returned with non-2xx responses
#[derive(Debug, Clone, Deserialize)]
pub struct ApiError {
    pub code: i64,
    pub msg: String,
}

/// Unsigned parameters of a GTC limit order, in wire order
pub fn limit_order_params(order: &ResolvedOrder) -> Vec<(String, String)> {
    vec![
        ("symbol".to_string(), order.symbol.clone()),
        ("side".to_string(), order.side.as_str().to_string()),
        ("type".to_string(), "LIMIT".to_string()),
        ("timeInForce".to_string(), order.time_in_force.as_str().to_string()),
        ("quantity".to_string(), order.quantity.to_string()),
        ("price".to_string(), order.price.to_string()),
    ]
}

/// Response of `POST /api/v3/order`.
///
/// Only `symbol` and `orderId` are guaranteed; the rest depends on the
/// requested response type.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrderResponse {
    pub symbol: String,
    pub order_id: u64,
    #[serde(default)]
    pub client_order_id: Option<String>,
    #[serde(default)]
    pub transact_time: Option<i64>,
    #[serde(default)]
    pub price: Option<String>,
    #[serde(default)]
    pub orig_qty: Option<String>,
    #[serde(default)]
    pub executed_qty: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use hermes_core::{OrderMode, Side};
    use rust_decimal_macros::dec;

    #[test]
    fn test_limit_order_params() {
        let order = ResolvedOrder::new("BTCUSDT", Side::Sell, dec!(0.5), dec!(10.00), OrderMode::Live);
        let params = limit_order_params(&order);
        let pairs: Vec<(&str, &str)> = params.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();

        assert_eq!(
            pairs,
            vec![
                ("symbol", "BTCUSDT"),
                ("side", "SELL"),
                ("type", "LIMIT"),
                ("timeInForce", "GTC"),
                ("quantity", "0.5"),
                ("price", "10.00"),
            ]
        );
    }

    #[test]
    fn test_full_response() {
        let json = r#"{
            "symbol": "BTCUSDT",
            "orderId": 28,
            "orderListId": -1,
            "clientOrderId": "6gCrw2kRUAF9CvJDGP16IP",
            "transactTime": 1507725176595,
            "price": "9.90",
            "origQty": "2",
            "executedQty": "0",
            "status": "NEW",
            "timeInForce": "GTC",
            "type": "LIMIT",
            "side": "BUY",
            "fills": []
        }"#;
        let resp: NewOrderResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.order_id, 28);
        assert_eq!(resp.status.as_deref(), Some("NEW"));
    }

    #[test]
    fn test_ack_response() {
        let json = r#"{"symbol":"BTCUSDT","orderId":12345678901,"orderListId":-1,"clientOrderId":"x","transactTime":1}"#;
        let resp: NewOrderResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.order_id, 12_345_678_901);
        assert!(resp.status.is_none());
    }

    #[test]
    fn test_api_error() {
        let err: ApiError = serde_json::from_str(r#"{"code":-2010,"msg":"Account has insufficient balance"}"#).unwrap();
        assert_eq!(err.code, -2010);
    }
}
