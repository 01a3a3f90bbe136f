//! Types library for the exchange front gateway
//!
//! Shared type definitions for the read-model services: the order-book
//! snapshot shape served to the browser and the hydrated per-user order
//! records. Prices are `rust_decimal::Decimal` everywhere; quantities and
//! counts are non-negative integers.
//!
//! # Modules
//! - `order`: side and per-user order records
//! - `book`: price levels and the bounded book snapshot

pub mod book;
pub mod order;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::book::*;
    pub use crate::order::*;
}
