use super::StoredValue;
use crate::ports::outbound::{CacheStore, Clock};
use crate::shared::security::{read_regular_file, write_file_atomically};
use crate::shared::Result;
use anyhow::Context;
use serde_json::Value;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

const CACHE_DIRNAME: &str = "cache";

/// FileCacheStore adapter: one JSON file per cache entry
///
/// Lets separate CLI invocations share version-check and license data.
/// Entries live under `<state_dir>/cache/<key>.json` and each write replaces
/// only its own file, so processes sharing a state directory never undo each
/// other's writes to different keys. Writes to the same key are last write wins.
pub struct FileCacheStore {
    dir: PathBuf,
    clock: Arc<dyn Clock>,
}

impl FileCacheStore {
    pub fn new(state_dir: &Path, clock: Arc<dyn Clock>) -> Self {
        Self {
            dir: state_dir.join(CACHE_DIRNAME),
            clock,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File holding `key`; characters outside `[A-Za-z0-9._~-]` are percent-encoded
    pub fn entry_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", urlencoding::encode(key)))
    }

    fn read_entry(&self, path: &Path) -> Result<Option<StoredValue>> {
        if !path.exists() {
            return Ok(None);
        }

        let content = read_regular_file(path, "cache file")?;
        match serde_json::from_str(&content) {
            Ok(stored) => Ok(Some(stored)),
            Err(e) => {
                // A corrupt entry only costs a refetch
                tracing::warn!(path = %path.display(), error = %e, "discarding unreadable cache file");
                Ok(None)
            }
        }
    }

    fn remove_entry(path: &Path) -> Result<()> {
        match fs::remove_file(path) {
            Err(e) if e.kind() != ErrorKind::NotFound => Err(e)
                .with_context(|| format!("Failed to delete cache file: {}", path.display())),
            _ => Ok(()),
        }
    }
}

impl CacheStore for FileCacheStore {
    fn get(&self, key: &str) -> Result<Option<Value>> {
        let path = self.entry_path(key);
        let Some(stored) = self.read_entry(&path)? else {
            return Ok(None);
        };

        if stored.is_live(self.clock.now()) {
            Ok(Some(stored.value))
        } else {
            Self::remove_entry(&path)?;
            Ok(None)
        }
    }

    fn set(&self, key: &str, value: Value, ttl: Duration) -> Result<()> {
        let stored = StoredValue::new(value, self.clock.now(), ttl);
        let content = serde_json::to_vec_pretty(&stored)?;
        write_file_atomically(&self.entry_path(key), &content, "cache file")
    }

    fn delete(&self, key: &str) -> Result<()> {
        Self::remove_entry(&self.entry_path(key))
    }
}
