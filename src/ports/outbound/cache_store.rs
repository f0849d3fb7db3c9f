use crate::shared::Result;
use serde_json::Value;
use std::time::Duration;

/// CacheStore port: host-supplied key/value storage with per-entry TTL
///
/// Entries whose TTL has elapsed must read back as absent. Implementations
/// must be `Send + Sync`; several processes or engines may share one store
/// and the last write wins.
pub trait CacheStore: Send + Sync {
    /// Returns the live value stored under `key`, if any
    fn get(&self, key: &str) -> Result<Option<Value>>;

    /// Stores `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: Value, ttl: Duration) -> Result<()>;

    /// Removes `key`; deleting an absent key is not an error
    fn delete(&self, key: &str) -> Result<()>;
}
