//! In-memory implementation of the store seam
//!
//! Dashmap-backed, safe for concurrent readers and writers. Used by
//! tests and by the gateway binary when no external store is wired; the
//! write surface mirrors what the matching engine would do to the real
//! store (hset/sadd/zadd) so fixtures can be seeded through the same
//! schema.

use crate::error::StoreError;
use crate::store::KvStore;
use async_trait::async_trait;
use dashmap::DashMap;
use std::collections::HashMap;

#[derive(Debug, Clone)]
enum Value {
    Hash(HashMap<String, String>),
    Set(Vec<String>),
    /// (score, member), kept sorted ascending by score.
    Zset(Vec<(f64, String)>),
}

/// Concurrent in-memory key-value store.
#[derive(Default)]
pub struct MemoryStore {
    entries: DashMap<String, Value>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set one hash field, creating the hash if absent.
    pub fn hset(&self, key: &str, field: &str, value: &str) {
        let mut entry = self
            .entries
            .entry(key.to_string())
            .or_insert_with(|| Value::Hash(HashMap::new()));
        if let Value::Hash(hash) = entry.value_mut() {
            hash.insert(field.to_string(), value.to_string());
        }
    }

    /// Set several hash fields at once.
    pub fn hset_all(&self, key: &str, fields: &[(&str, &str)]) {
        for (field, value) in fields {
            self.hset(key, field, value);
        }
    }

    /// Add a member to a set; duplicates are ignored.
    pub fn sadd(&self, key: &str, member: &str) {
        let mut entry = self
            .entries
            .entry(key.to_string())
            .or_insert_with(|| Value::Set(Vec::new()));
        if let Value::Set(members) = entry.value_mut() {
            if !members.iter().any(|m| m == member) {
                members.push(member.to_string());
            }
        }
    }

    /// Add a scored member to an ordered set, keeping score order.
    pub fn zadd(&self, key: &str, score: f64, member: &str) {
        let mut entry = self
            .entries
            .entry(key.to_string())
            .or_insert_with(|| Value::Zset(Vec::new()));
        if let Value::Zset(members) = entry.value_mut() {
            members.retain(|(_, m)| m != member);
            let at = members
                .iter()
                .position(|(s, _)| *s > score)
                .unwrap_or(members.len());
            members.insert(at, (score, member.to_string()));
        }
    }

    pub fn del(&self, key: &str) {
        self.entries.remove(key);
    }
}

#[async_trait]
impl KvStore for MemoryStore {
    async fn keys(&self, pattern: &str) -> Result<Vec<String>, StoreError> {
        let prefix = pattern.strip_suffix('*').unwrap_or(pattern);
        Ok(self
            .entries
            .iter()
            .map(|entry| entry.key().clone())
            .filter(|key| key.starts_with(prefix))
            .collect())
    }

    async fn hgetall(&self, key: &str) -> Result<HashMap<String, String>, StoreError> {
        Ok(match self.entries.get(key).map(|e| e.value().clone()) {
            Some(Value::Hash(hash)) => hash,
            _ => HashMap::new(),
        })
    }

    async fn smembers(&self, key: &str) -> Result<Vec<String>, StoreError> {
        Ok(match self.entries.get(key).map(|e| e.value().clone()) {
            Some(Value::Set(members)) => members,
            _ => Vec::new(),
        })
    }

    async fn zrange_all(&self, key: &str) -> Result<Vec<String>, StoreError> {
        Ok(match self.entries.get(key).map(|e| e.value().clone()) {
            Some(Value::Zset(members)) => members.into_iter().map(|(_, m)| m).collect(),
            _ => Vec::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn keys_filters_by_prefix() {
        let store = MemoryStore::new();
        store.hset("AAPL:buy:100:info", "total_quantity", "50");
        store.hset("AAPL:sell:101:info", "total_quantity", "30");
        store.sadd("AAPL:user:u1:orders", "o1");

        let mut keys = store.keys("AAPL:buy:*").await.unwrap();
        keys.sort();
        assert_eq!(keys, vec!["AAPL:buy:100:info"]);
    }

    #[tokio::test]
    async fn missing_hash_reads_as_empty_map() {
        let store = MemoryStore::new();
        assert!(store.hgetall("nope").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn zrange_returns_members_in_score_order() {
        let store = MemoryStore::new();
        store.zadd("AAPL:buy:100", 3.0, "o3");
        store.zadd("AAPL:buy:100", 1.0, "o1");
        store.zadd("AAPL:buy:100", 2.0, "o2");

        let members = store.zrange_all("AAPL:buy:100").await.unwrap();
        assert_eq!(members, vec!["o1", "o2", "o3"]);
    }

    #[tokio::test]
    async fn sadd_ignores_duplicates() {
        let store = MemoryStore::new();
        store.sadd("s", "a");
        store.sadd("s", "a");
        assert_eq!(store.smembers("s").await.unwrap(), vec!["a"]);
    }
}
