use crate::ports::outbound::CacheStore;
use crate::shared::error::UpdaterError;
use crate::update_check::domain::{UpdateCountCacheEntry, VersionCheckCacheEntry};
use crate::update_check::services::CacheKeys;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

/// Lifetime of a version-check entry after a resolved batch (24 hours)
pub const VERSION_CHECK_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// Lifetime of a version-check entry after the remote could not be reached (30 minutes)
pub const FAILED_CHECK_TTL: Duration = Duration::from_secs(30 * 60);

/// Lifetime of the derived update count (12 hours)
pub const UPDATE_COUNT_TTL: Duration = Duration::from_secs(12 * 60 * 60);

/// Sole writer of the version-check and update-count cache entries
///
/// Both entries live under fixed key names. Storing a new version-check
/// entry drops the update count derived from the previous one; `flush`
/// drops both. Unreadable entries are treated as absent.
#[derive(Clone)]
pub struct VersionCheckCache {
    store: Arc<dyn CacheStore>,
    keys: CacheKeys,
}

impl VersionCheckCache {
    pub fn new(store: Arc<dyn CacheStore>, keys: CacheKeys) -> Self {
        Self { store, keys }
    }

    pub fn keys(&self) -> &CacheKeys {
        &self.keys
    }

    /// The current entry, whatever fingerprint it was stored with.
    pub fn load(&self) -> Option<VersionCheckCacheEntry> {
        self.read(&self.keys.version_check())
    }

    /// Replaces the entry wholesale and invalidates the derived count.
    pub fn store(&self, entry: &VersionCheckCacheEntry, ttl: Duration) {
        self.write(&self.keys.version_check(), entry, ttl);
        if let Err(e) = self.store.delete(&self.keys.update_count()) {
            tracing::warn!(error = %e, "failed to drop stale update count");
        }
    }

    pub fn load_count(&self) -> Option<UpdateCountCacheEntry> {
        self.read(&self.keys.update_count())
    }

    pub fn store_count(&self, entry: &UpdateCountCacheEntry) {
        self.write(&self.keys.update_count(), entry, UPDATE_COUNT_TTL);
    }

    /// Unconditionally deletes the version-check entry and the update count.
    pub fn flush(&self) -> Result<(), UpdaterError> {
        self.store
            .delete(&self.keys.version_check())
            .map_err(UpdaterError::storage)?;
        self.store
            .delete(&self.keys.update_count())
            .map_err(UpdaterError::storage)?;
        tracing::debug!(prefix = self.keys.prefix(), "flushed version-check cache");
        Ok(())
    }

    fn read<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let value = match self.store.get(key) {
            Ok(value) => value?,
            Err(e) => {
                tracing::warn!(key, error = %e, "cache read failed; treating entry as absent");
                return None;
            }
        };

        match serde_json::from_value(value) {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::warn!(key, error = %e, "discarding unreadable cache entry");
                None
            }
        }
    }

    fn write<T: Serialize>(&self, key: &str, entry: &T, ttl: Duration) {
        let result = serde_json::to_value(entry)
            .map_err(anyhow::Error::from)
            .and_then(|value| self.store.set(key, value, ttl));
        if let Err(e) = result {
            tracing::warn!(key, error = %e, "cache write failed");
        }
    }
}
