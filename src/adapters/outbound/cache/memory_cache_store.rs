use super::StoredValue;
use crate::ports::outbound::{CacheStore, Clock};
use crate::shared::Result;
use dashmap::DashMap;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

/// MemoryCacheStore adapter: process-local cache with TTL expiry
///
/// Thread-safe; one instance can be shared by every engine in a process.
/// Expired entries are dropped lazily when read.
pub struct MemoryCacheStore {
    entries: DashMap<String, StoredValue>,
    clock: Arc<dyn Clock>,
}

impl MemoryCacheStore {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: DashMap::new(),
            clock,
        }
    }

    /// Number of stored entries, including expired ones not yet read back
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl CacheStore for MemoryCacheStore {
    fn get(&self, key: &str) -> Result<Option<Value>> {
        let now = self.clock.now();
        if let Some(stored) = self.entries.get(key) {
            if stored.is_live(now) {
                return Ok(Some(stored.value.clone()));
            }
        }
        self.entries.remove_if(key, |_, stored| !stored.is_live(now));
        Ok(None)
    }

    fn set(&self, key: &str, value: Value, ttl: Duration) -> Result<()> {
        let stored = StoredValue::new(value, self.clock.now(), ttl);
        self.entries.insert(key.to_string(), stored);
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}
