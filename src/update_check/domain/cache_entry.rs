use super::DownloadEntry;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-identifier outcomes keyed by identifier
pub type Downloads = BTreeMap<String, DownloadEntry>;

/// The single cached result of the latest version-check batch
///
/// The entry is only usable while `fingerprint_hash` matches the fingerprint
/// of the current batch and license key. It is always replaced wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VersionCheckCacheEntry {
    pub fingerprint_hash: String,
    pub fetched_at: DateTime<Utc>,
    #[serde(default)]
    pub downloads: Downloads,
    #[serde(default)]
    pub had_errors: bool,
}

impl VersionCheckCacheEntry {
    /// Entry recorded after the remote could not be reached.
    pub fn failed(fingerprint_hash: String, fetched_at: DateTime<Utc>) -> Self {
        Self {
            fingerprint_hash,
            fetched_at,
            downloads: Downloads::new(),
            had_errors: true,
        }
    }

    /// Entry recorded after a successful batch response.
    pub fn resolved(fingerprint_hash: String, fetched_at: DateTime<Utc>, downloads: Downloads) -> Self {
        let had_errors = downloads.values().any(DownloadEntry::is_error);
        Self {
            fingerprint_hash,
            fetched_at,
            downloads,
            had_errors,
        }
    }

    pub fn matches(&self, fingerprint_hash: &str) -> bool {
        self.fingerprint_hash == fingerprint_hash
    }
}

/// Cached number of components with a pending update
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateCountCacheEntry {
    pub count: usize,
    pub computed_at: DateTime<Utc>,
}
