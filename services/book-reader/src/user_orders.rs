//! Per-user order hydration
//!
//! Resolves a user's order-id set into full order records. The per-id
//! lookups are independent and fan out concurrently; the assembled list
//! keeps the order the set read returned the ids in, which is
//! store-defined and not guaranteed stable across calls.

use crate::error::ReadError;
use crate::store::KvStore;
use futures::future::try_join_all;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::str::FromStr;
use types::order::{Side, UserOrder};

/// Hydrate every order id indexed for `user_id` under `symbol`.
///
/// A listed id whose record hash is missing yields an id-only record
/// (see [`UserOrder::missing`]) rather than aborting the batch; a store
/// failure aborts the whole call.
pub async fn user_orders(
    store: &dyn KvStore,
    symbol: &str,
    user_id: &str,
) -> Result<Vec<UserOrder>, ReadError> {
    let order_ids = store
        .smembers(&format!("{symbol}:user:{user_id}:orders"))
        .await?;

    let reads = order_ids.into_iter().map(|order_id| async move {
        let record = store
            .hgetall(&format!("{symbol}:orders:{order_id}"))
            .await?;
        Ok::<_, ReadError>(hydrate(order_id, record))
    });
    try_join_all(reads).await
}

fn hydrate(order_id: String, record: HashMap<String, String>) -> UserOrder {
    if record.is_empty() {
        tracing::warn!(%order_id, "indexed order has no record hash");
        return UserOrder::missing(order_id);
    }
    UserOrder {
        order_id,
        side: record.get("side").and_then(|v| v.parse::<Side>().ok()),
        price: record.get("price").and_then(|v| Decimal::from_str(v).ok()),
        quantity: record.get("quantity").and_then(|v| v.parse().ok()),
        status: record.get("status").cloned(),
    }
}
