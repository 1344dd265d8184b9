//! Typed response shapes.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;

/// One side-by-side level of the order book as served by
/// `GET /orderBook/L2`-style endpoints.
///
/// This crate does not maintain a book; the type exists so callers can
/// deserialize depth rows out of the raw body text themselves.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OrderBookItem {
    pub symbol: String,
    pub level: i32,
    pub bid_size: i64,
    pub bid_price: Decimal,
    pub ask_size: i64,
    pub ask_price: Decimal,
    pub timestamp: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn order_book_item_deserializes_from_exchange_json() {
        let raw = r#"{
            "symbol": "XBTUSD",
            "level": 0,
            "bidSize": 1200,
            "bidPrice": "97123.5",
            "askSize": 800,
            "askPrice": "97124.0",
            "timestamp": "2024-01-01T00:00:00.000Z"
        }"#;

        let item: OrderBookItem = serde_json::from_str(raw).unwrap();
        assert_eq!(item.symbol, "XBTUSD");
        assert_eq!(item.level, 0);
        assert_eq!(item.bid_size, 1200);
        assert_eq!(item.bid_price, dec!(97123.5));
        assert_eq!(item.ask_size, 800);
        assert_eq!(item.ask_price, dec!(97124.0));
        assert_eq!(item.timestamp.timestamp(), 1_704_067_200);
    }
}
