//! Order-book aggregation
//!
//! Builds a ranked, depth-bounded snapshot for one symbol from the
//! per-price-level schema. Per-level reads are independent and fan out
//! concurrently; the final sort imposes the only required ordering.

use crate::error::ReadError;
use crate::store::KvStore;
use futures::future::try_join_all;
use rust_decimal::Decimal;
use std::str::FromStr;
use types::book::{BookSnapshot, PriceLevel, MAX_DEPTH};
use types::order::Side;

const INFO_SUFFIX: &str = ":info";

/// Produce the bounded snapshot for `symbol`.
///
/// Each side is sorted (buys descending, sells ascending) and truncated
/// to [`MAX_DEPTH`] levels before `max_quantity` is computed, so depth
/// ratios are relative to the visible window rather than the full book.
/// A symbol with no levels on either side yields a well-defined empty
/// snapshot with `max_quantity == 0`.
///
/// Any store failure aborts the whole call; partial snapshots are never
/// returned.
pub async fn snapshot(store: &dyn KvStore, symbol: &str) -> Result<BookSnapshot, ReadError> {
    let (mut buys, mut sells) = futures::try_join!(
        side_levels(store, symbol, Side::Buy),
        side_levels(store, symbol, Side::Sell),
    )?;

    buys.sort_by(|a, b| b.price.cmp(&a.price));
    sells.sort_by(|a, b| a.price.cmp(&b.price));
    buys.truncate(MAX_DEPTH);
    sells.truncate(MAX_DEPTH);

    let max_quantity = buys
        .iter()
        .chain(sells.iter())
        .map(|level| level.total_quantity)
        .max()
        .unwrap_or(0);

    Ok(BookSnapshot {
        symbol: symbol.to_string(),
        buy_orders: buys,
        sell_orders: sells,
        max_quantity,
    })
}

/// Assemble the unsorted levels of one side.
///
/// Enumerates `<symbol>:<side>:*`, keeps the aggregate-hash keys (the
/// `:info` suffix), and reads each aggregate hash together with its
/// sibling ordered set of resting order ids. The aggregate hash is
/// trusted as-is: `order_count` is never reconciled against the sibling
/// set's cardinality.
async fn side_levels(
    store: &dyn KvStore,
    symbol: &str,
    side: Side,
) -> Result<Vec<PriceLevel>, ReadError> {
    let keys = store.keys(&format!("{symbol}:{side}:*")).await?;

    let reads = keys
        .into_iter()
        .filter(|key| key.ends_with(INFO_SUFFIX))
        .map(|key| read_level(store, symbol, side, key));
    try_join_all(reads).await
}

async fn read_level(
    store: &dyn KvStore,
    symbol: &str,
    side: Side,
    info_key: String,
) -> Result<PriceLevel, ReadError> {
    // price is the third colon-delimited segment of the info key
    let price_segment = info_key
        .split(':')
        .nth(2)
        .ok_or_else(|| ReadError::BadRecord {
            key: info_key.clone(),
            reason: "missing price segment".to_string(),
        })?;
    let price = Decimal::from_str(price_segment).map_err(|e| ReadError::BadRecord {
        key: info_key.clone(),
        reason: format!("unparseable price {price_segment:?}: {e}"),
    })?;

    let level_key = format!("{symbol}:{side}:{price_segment}");
    let (info, order_ids) = futures::try_join!(
        store.hgetall(&info_key),
        store.zrange_all(&level_key),
    )?;

    Ok(PriceLevel {
        price,
        total_quantity: numeric_field(&info, "total_quantity"),
        order_count: numeric_field(&info, "order_count"),
        order_ids,
    })
}

/// Missing or unparseable numeric hash fields default to 0.
fn numeric_field(hash: &std::collections::HashMap<String, String>, field: &str) -> u64 {
    hash.get(field).and_then(|v| v.parse().ok()).unwrap_or(0)
}
