//! Price levels and the bounded order-book snapshot
//!
//! A snapshot is a point-in-time, possibly internally inconsistent read
//! of the book: the aggregator reads the per-price aggregate hashes and
//! sibling id sets without snapshot isolation, and a concurrently
//! mutating matching engine can leave `order_count` momentarily out of
//! step with the id set. Consumers must tolerate that.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Maximum visible depth per side. Truncation happens before
/// `max_quantity` is computed, so depth ratios are always relative to
/// the visible window, not the full book.
pub const MAX_DEPTH: usize = 15;

/// The aggregate of all resting orders at one price on one side.
///
/// Synthesized per query from the store's aggregate hash and sibling
/// sorted set; never stored in this form. `order_count` is trusted from
/// the aggregate hash and is not reconciled against `order_ids.len()`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceLevel {
    pub price: Decimal,
    pub total_quantity: u64,
    pub order_count: u64,
    /// Resting order ids at this price. Fetched for future detail
    /// expansion; consumers currently only rely on their existence.
    #[serde(default)]
    pub order_ids: Vec<String>,
}

impl PriceLevel {
    /// Normalized visual depth in `[0, 1]` relative to the largest
    /// visible level. Zero when the visible window is empty.
    pub fn depth_ratio(&self, max_quantity: u64) -> f64 {
        if max_quantity == 0 {
            0.0
        } else {
            self.total_quantity as f64 / max_quantity as f64
        }
    }
}

/// A ranked, depth-bounded view of both sides of the book.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookSnapshot {
    pub symbol: String,
    /// Sorted by price, strictly descending.
    pub buy_orders: Vec<PriceLevel>,
    /// Sorted by price, strictly ascending.
    pub sell_orders: Vec<PriceLevel>,
    /// Max `total_quantity` over the truncated union of both sides;
    /// zero for an empty book.
    pub max_quantity: u64,
}

impl BookSnapshot {
    /// Well-defined snapshot of a symbol with no levels on either side.
    pub fn empty(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            buy_orders: Vec::new(),
            sell_orders: Vec::new(),
            max_quantity: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.buy_orders.is_empty() && self.sell_orders.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal::Decimal;

    fn level(price: i64, qty: u64) -> PriceLevel {
        PriceLevel {
            price: Decimal::new(price, 0),
            total_quantity: qty,
            order_count: 1,
            order_ids: Vec::new(),
        }
    }

    #[test]
    fn depth_ratio_of_empty_window_is_zero() {
        assert_eq!(level(100, 50).depth_ratio(0), 0.0);
    }

    #[test]
    fn serializes_http_contract_field_names() {
        let snap = BookSnapshot {
            symbol: "AAPL".to_string(),
            buy_orders: vec![level(100, 50)],
            sell_orders: vec![],
            max_quantity: 50,
        };
        let json = serde_json::to_value(&snap).unwrap();
        assert_eq!(json["buyOrders"][0]["totalQuantity"], 50);
        assert_eq!(json["buyOrders"][0]["orderCount"], 1);
        assert_eq!(json["maxQuantity"], 50);
        assert!(json["sellOrders"].as_array().unwrap().is_empty());
    }

    #[test]
    fn empty_snapshot_has_zero_max_quantity() {
        let snap = BookSnapshot::empty("AAPL");
        assert!(snap.is_empty());
        assert_eq!(snap.max_quantity, 0);
    }

    proptest! {
        #[test]
        fn depth_ratio_stays_in_unit_interval(qty in 0u64..1_000_000, max in 1u64..1_000_000) {
            let ratio = level(100, qty.min(max)).depth_ratio(max);
            prop_assert!((0.0..=1.0).contains(&ratio));
        }
    }
}
