//! Key-value store seam
//!
//! The production store is an external collaborator owned by the
//! matching engine; this trait names exactly the four read operations
//! the schema requires. A store client is injected at construction and
//! must be safe for concurrent use by multiple in-flight requests
//! (`Send + Sync`, process-scoped lifecycle).

use crate::error::StoreError;
use async_trait::async_trait;
use std::collections::HashMap;

#[async_trait]
pub trait KvStore: Send + Sync {
    /// Enumerate keys matching `pattern`. Only a single trailing `*`
    /// wildcard is supported (prefix match), which is all the schema
    /// needs. Enumeration order is store-defined.
    async fn keys(&self, pattern: &str) -> Result<Vec<String>, StoreError>;

    /// Read a hash in full. A missing key reads as an empty map, which
    /// the callers rely on for missing-record hydration.
    async fn hgetall(&self, key: &str) -> Result<HashMap<String, String>, StoreError>;

    /// Read a set in full. Member order is store-defined and not
    /// guaranteed stable across calls.
    async fn smembers(&self, key: &str) -> Result<Vec<String>, StoreError>;

    /// Read an ordered set in full, ascending by score.
    async fn zrange_all(&self, key: &str) -> Result<Vec<String>, StoreError>;
}
