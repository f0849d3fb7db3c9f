/// Cache store adapters
mod file_cache_store;
mod memory_cache_store;

pub use file_cache_store::FileCacheStore;
pub use memory_cache_store::MemoryCacheStore;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;

/// A cached value together with the instant it stops being readable
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredValue {
    value: Value,
    expires_at: DateTime<Utc>,
}

impl StoredValue {
    fn new(value: Value, now: DateTime<Utc>, ttl: Duration) -> Self {
        let ttl = chrono::Duration::from_std(ttl).unwrap_or(chrono::Duration::MAX);
        Self {
            value,
            expires_at: now.checked_add_signed(ttl).unwrap_or(DateTime::<Utc>::MAX_UTC),
        }
    }

    fn is_live(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }
}
