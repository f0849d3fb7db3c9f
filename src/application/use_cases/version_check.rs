use crate::application::use_cases::{
    LicenseStateManager, VersionCheckCache, FAILED_CHECK_TTL, VERSION_CHECK_TTL,
};
use crate::ports::outbound::{Clock, Inventory, RemoteClient, RemoteRequest};
use crate::shared::error::{RemoteError, UpdaterError};
use crate::update_check::domain::{
    Component, DownloadEntry, Downloads, IdentifierBatch, VersionCheckCacheEntry,
};
use serde_json::Value;
use std::sync::Arc;

/// VersionCheckEngine - batched, fingerprint-validated version lookups
///
/// All installed identifiers go out in one request. The response is cached
/// under a single fixed key together with the fingerprint of the batch and
/// license key it answered; a later read reuses it only while that
/// fingerprint still matches.
///
/// Remote failures never surface from [`get_update_data`](Self::get_update_data):
/// they are recorded as an empty entry with a short TTL so that callers see
/// "no data" and the check is retried after half an hour. Several processes
/// sharing one cache store may fetch the same batch concurrently; either
/// write is a valid entry for the fingerprint.
pub struct VersionCheckEngine {
    inventory: Arc<dyn Inventory>,
    remote: Arc<dyn RemoteClient>,
    licenses: Arc<LicenseStateManager>,
    cache: VersionCheckCache,
    clock: Arc<dyn Clock>,
    site_url: String,
}

impl VersionCheckEngine {
    pub fn new(
        inventory: Arc<dyn Inventory>,
        remote: Arc<dyn RemoteClient>,
        licenses: Arc<LicenseStateManager>,
        cache: VersionCheckCache,
        clock: Arc<dyn Clock>,
        site_url: String,
    ) -> Self {
        Self {
            inventory,
            remote,
            licenses,
            cache,
            clock,
            site_url,
        }
    }

    /// Per-identifier version data for the current inventory
    ///
    /// # Errors
    /// Only local failures (inventory, key store) and a missing endpoint
    /// configuration are returned; every other remote failure yields an
    /// empty map.
    pub fn get_update_data(&self) -> Result<Downloads, UpdaterError> {
        let components = self
            .inventory
            .list_components()
            .map_err(UpdaterError::inventory)?;
        self.update_data_for(&components)
    }

    /// Same as [`get_update_data`](Self::get_update_data) for an inventory
    /// snapshot the caller already holds.
    pub fn update_data_for(&self, components: &[Component]) -> Result<Downloads, UpdaterError> {
        let batch = IdentifierBatch::from_components(components);
        if batch.is_empty() {
            return Ok(Downloads::new());
        }

        let license_key = self.licenses.get_active_key()?;
        let fingerprint = batch.fingerprint(license_key.as_deref());

        if let Some(entry) = self.cache.load() {
            if entry.matches(fingerprint.as_str()) {
                tracing::debug!(identifiers = batch.len(), "version data served from cache");
                return Ok(entry.downloads);
            }
            tracing::debug!("cached version data belongs to another batch");
        }

        let request = RemoteRequest::Versions {
            license_key,
            website: self.site_url.clone(),
            downloads: batch.to_csv(),
            hash: fingerprint.to_string(),
        };

        tracing::info!(identifiers = batch.len(), "fetching latest versions");
        let body = match self.remote.send(&request).and_then(Self::require_map) {
            Ok(body) => body,
            Err(RemoteError::MissingConfiguration { field }) => {
                return Err(UpdaterError::MissingConfiguration { field });
            }
            Err(e) => {
                tracing::warn!(
                    code = e.code(),
                    error = %e,
                    "version check failed; retrying in {} minutes",
                    FAILED_CHECK_TTL.as_secs() / 60
                );
                let entry =
                    VersionCheckCacheEntry::failed(fingerprint.to_string(), self.clock.now());
                self.cache.store(&entry, FAILED_CHECK_TTL);
                return Ok(entry.downloads);
            }
        };

        let mut downloads = Downloads::new();
        for identifier in batch.identifiers() {
            let entry = DownloadEntry::from_remote(body.get(identifier.as_str()));
            if let DownloadEntry::Failed(error) = &entry {
                tracing::warn!(identifier = %identifier, error = %error.message, "remote error for component");
            }
            downloads.insert(identifier.clone(), entry);
        }

        let entry =
            VersionCheckCacheEntry::resolved(fingerprint.to_string(), self.clock.now(), downloads);
        self.cache.store(&entry, VERSION_CHECK_TTL);
        Ok(entry.downloads)
    }

    /// The version data for one identifier (the "show details" lookup).
    pub fn component_info(&self, identifier: &str) -> Result<Option<DownloadEntry>, UpdaterError> {
        Ok(self.get_update_data()?.remove(identifier))
    }

    /// Whatever entry is cached, without fingerprint validation or network access.
    pub fn cached_entry(&self) -> Option<VersionCheckCacheEntry> {
        self.cache.load()
    }

    pub fn cache(&self) -> &VersionCheckCache {
        &self.cache
    }

    /// Drops cached version data and the derived update count.
    pub fn flush(&self) -> Result<(), UpdaterError> {
        self.cache.flush()
    }

    fn require_map(body: Value) -> Result<Value, RemoteError> {
        match body {
            // An empty result set may arrive as `[]`
            Value::Object(_) | Value::Array(_) => Ok(body),
            other => Err(RemoteError::InvalidResponse {
                message: format!("expected a map of versions, got {}", other),
            }),
        }
    }
}
