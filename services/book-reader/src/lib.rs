//! Order-book read model
//!
//! Translates the matching engine's sparse per-price-level key-value
//! schema into a ranked, depth-bounded book snapshot, and hydrates a
//! user's order-id set into full order records. All store access is
//! read-only; the matching engine owns every key this crate touches.
//!
//! Schema consumed (see `store::KvStore`):
//!
//! ```text
//! <symbol>:<side>:<price>:info      hash  total_quantity, order_count
//! <symbol>:<side>:<price>           zset  member = order id
//! <symbol>:user:<userId>:orders     set   member = order id
//! <symbol>:orders:<orderId>         hash  side, price, quantity, status
//! ```
//!
//! Reads are committed-at-call-time with no isolation across the
//! multiple reads one snapshot performs, so a concurrently writing
//! engine can yield a momentarily inconsistent snapshot. Accepted, not
//! corrected.

pub mod aggregate;
pub mod error;
pub mod memory;
pub mod store;
pub mod user_orders;

pub use aggregate::snapshot;
pub use error::{ReadError, StoreError};
pub use memory::MemoryStore;
pub use store::KvStore;
pub use user_orders::user_orders;
