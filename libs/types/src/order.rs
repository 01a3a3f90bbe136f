//! Order side and per-user order records

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Order side (buyer or seller)
///
/// Serialized lowercase to match the key-value store's key segments
/// (`buy`, `sell`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    /// Both sides, in the order the snapshot assembles them.
    pub const BOTH: [Side; 2] = [Side::Buy, Side::Sell];

    /// Key segment for this side.
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Buy => "buy",
            Side::Sell => "sell",
        }
    }

    /// Get the opposite side
    pub fn opposite(&self) -> Self {
        match self {
            Side::Buy => Side::Sell,
            Side::Sell => Side::Buy,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Side {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "buy" => Ok(Side::Buy),
            "sell" => Ok(Side::Sell),
            other => Err(format!("unknown side: {other:?}")),
        }
    }
}

/// A user's order, hydrated from its record hash in the store.
///
/// The matching engine owns these records; this system only reads them
/// by id. A listed id whose record hash is missing hydrates to an
/// id-only record with every other field absent, rather than failing
/// the whole batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserOrder {
    pub order_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub side: Option<Side>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl UserOrder {
    /// Record for an id whose hash was missing from the store.
    pub fn missing(order_id: impl Into<String>) -> Self {
        Self {
            order_id: order_id.into(),
            side: None,
            price: None,
            quantity: None,
            status: None,
        }
    }

    /// True when no field beyond the id could be hydrated.
    pub fn is_partial(&self) -> bool {
        self.side.is_none()
            && self.price.is_none()
            && self.quantity.is_none()
            && self.status.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn side_round_trips_through_key_segment() {
        assert_eq!("buy".parse::<Side>().unwrap(), Side::Buy);
        assert_eq!("sell".parse::<Side>().unwrap(), Side::Sell);
        assert_eq!(Side::Buy.as_str(), "buy");
        assert!("BUY".parse::<Side>().is_err());
    }

    #[test]
    fn side_opposite() {
        assert_eq!(Side::Buy.opposite(), Side::Sell);
        assert_eq!(Side::Sell.opposite(), Side::Buy);
    }

    #[test]
    fn user_order_serializes_camel_case() {
        let order = UserOrder {
            order_id: "o1".to_string(),
            side: Some(Side::Buy),
            price: Some(Decimal::new(1005, 1)),
            quantity: Some(10),
            status: Some("open".to_string()),
        };
        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["orderId"], "o1");
        assert_eq!(json["side"], "buy");
        assert_eq!(json["price"], 100.5);
        assert_eq!(json["quantity"], 10);
    }

    #[test]
    fn missing_record_omits_absent_fields() {
        let order = UserOrder::missing("o2");
        assert!(order.is_partial());
        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["orderId"], "o2");
        assert!(json.get("price").is_none());
        assert!(json.get("status").is_none());
    }
}
