use crate::application::use_cases::VersionCheckCache;
use crate::ports::outbound::{CacheStore, Inventory, LicenseKeyStore, RemoteClient, RemoteRequest};
use crate::shared::error::UpdaterError;
use crate::update_check::domain::{
    is_truthy, ActivationOutcome, IdentifierBatch, License, LicenseOptions,
};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

/// Lifetime of resolved license details (1 hour)
pub const LICENSE_DETAILS_TTL: Duration = Duration::from_secs(60 * 60);

/// LicenseStateManager - owns the active license key and its remote validity
///
/// Any change to the stored key flushes the version-check cache before the
/// call returns, because the key is part of the version-check fingerprint.
/// A key that the service reports as unknown, or as inactive on this site,
/// is cleared locally.
pub struct LicenseStateManager {
    remote: Arc<dyn RemoteClient>,
    cache: Arc<dyn CacheStore>,
    key_store: Arc<dyn LicenseKeyStore>,
    inventory: Arc<dyn Inventory>,
    version_cache: VersionCheckCache,
    site_url: String,
}

impl LicenseStateManager {
    pub fn new(
        remote: Arc<dyn RemoteClient>,
        cache: Arc<dyn CacheStore>,
        key_store: Arc<dyn LicenseKeyStore>,
        inventory: Arc<dyn Inventory>,
        version_cache: VersionCheckCache,
        site_url: String,
    ) -> Self {
        Self {
            remote,
            cache,
            key_store,
            inventory,
            version_cache,
            site_url,
        }
    }

    /// The locally stored key, without any network access
    pub fn get_active_key(&self) -> Result<Option<String>, UpdaterError> {
        let options = self.key_store.load().map_err(UpdaterError::storage)?;
        Ok(options.active_key().map(str::to_string))
    }

    /// Resolves the active license
    ///
    /// With `include_remote = false` only the stored key is returned (as an
    /// unresolved [`License`]). Otherwise the details come from the cache or,
    /// on a miss, from the license endpoint.
    ///
    /// # Returns
    /// `None` when no key is stored, or when the service reports the key as
    /// inactive on this site (the key is cleared in that case).
    ///
    /// # Errors
    /// - `InvalidLicense` when the response carries no `license` object
    /// - `Remote` for service errors; a not-found error also clears the key
    pub fn get_license_details(&self, include_remote: bool) -> Result<Option<License>, UpdaterError> {
        let Some(key) = self.get_active_key()? else {
            return Ok(None);
        };

        if !include_remote {
            return Ok(Some(License::unresolved(&key)));
        }

        let cache_key = self.version_cache.keys().license_details(&key);
        if let Some(license) = self.cached_license(&cache_key, &key) {
            tracing::debug!("license details served from cache");
            return Ok(Some(license));
        }

        let request = RemoteRequest::LicenseDetails {
            license_key: key.clone(),
            website: self.site_url.clone(),
            downloads: self.downloads_csv()?,
        };

        let body = match self.remote.send(&request) {
            Ok(body) => body,
            Err(e) if e.is_license_not_found() => {
                tracing::info!(code = e.code(), "license key not recognized; clearing it");
                self.clear_active_key()?;
                return Err(e.into());
            }
            Err(e) => return Err(e.into()),
        };

        let license = Self::license_from_body(&key, &body)?;

        if !license.is_active_on_site() {
            tracing::info!("license is not active on this site; clearing it");
            self.clear_active_key()?;
            return Ok(None);
        }

        self.cache_license(&cache_key, &license);
        Ok(Some(license))
    }

    /// Stores `key` as the active license and flushes version-check data.
    pub fn set_active_key(&self, key: &str) -> Result<(), UpdaterError> {
        let key = key.trim();
        if key.is_empty() {
            return Err(UpdaterError::InvalidLicense {
                message: "License key must not be empty".to_string(),
            });
        }

        let mut options = self.key_store.load().map_err(UpdaterError::storage)?;
        options.license_key = Some(key.to_string());
        self.key_store.save(&options).map_err(UpdaterError::storage)?;
        tracing::info!("license key stored");

        self.version_cache.flush()
    }

    /// Forgets the active key (and legacy keys) and flushes version-check data.
    pub fn clear_active_key(&self) -> Result<(), UpdaterError> {
        let options = self.key_store.load().map_err(UpdaterError::storage)?;
        if let Some(key) = options.active_key() {
            let cache_key = self.version_cache.keys().license_details(key);
            if let Err(e) = self.cache.delete(&cache_key) {
                tracing::warn!(error = %e, "failed to drop cached license details");
            }
        }

        self.key_store
            .save(&LicenseOptions::default())
            .map_err(UpdaterError::storage)?;
        tracing::info!("license key cleared");

        self.version_cache.flush()
    }

    /// Activates `key` for this site and makes it the active license
    ///
    /// # Errors
    /// - `Remote` with the service's message when activation is refused
    /// - `InvalidLicense` when the response has no license or the license
    ///   is still not active on this site
    pub fn activate_license(&self, key: &str) -> Result<ActivationOutcome, UpdaterError> {
        let key = key.trim();
        if key.is_empty() {
            return Err(UpdaterError::InvalidLicense {
                message: "License key must not be empty".to_string(),
            });
        }

        let request = RemoteRequest::ActivateLicense {
            license_key: key.to_string(),
            website: self.site_url.clone(),
            downloads: self.downloads_csv()?,
        };
        let body = self.remote.send(&request)?;

        let license = Self::license_from_body(key, &body)?;
        let is_membership = body.get("is_membership").is_some_and(is_truthy)
            || license.raw_details().get("is_membership").is_some_and(is_truthy);

        if !license.is_active_on_site() && !is_membership {
            return Err(UpdaterError::InvalidLicense {
                message: "The license could not be activated on this site".to_string(),
            });
        }

        self.set_active_key(key)?;
        self.cache_license(&self.version_cache.keys().license_details(key), &license);
        tracing::info!(is_membership, "license activated");

        Ok(ActivationOutcome {
            license,
            is_membership,
        })
    }

    /// Deactivates the active license on this site and clears it locally
    ///
    /// A key the service no longer knows is cleared as if deactivation
    /// succeeded. Other errors leave local state untouched.
    pub fn deactivate_license(&self) -> Result<(), UpdaterError> {
        let Some(key) = self.get_active_key()? else {
            return Err(UpdaterError::NoActiveLicense);
        };

        let request = RemoteRequest::DeactivateLicense {
            license_key: key,
            website: self.site_url.clone(),
            downloads: self.downloads_csv()?,
        };

        match self.remote.send(&request) {
            Ok(_) => {}
            Err(e) if e.is_license_not_found() => {
                tracing::info!(code = e.code(), "license already unknown to the service");
            }
            Err(e) => return Err(e.into()),
        }

        self.clear_active_key()
    }

    fn license_from_body(key: &str, body: &Value) -> Result<License, UpdaterError> {
        body.get("license")
            .cloned()
            .and_then(|details| License::from_details(key, details))
            .ok_or_else(|| UpdaterError::InvalidLicense {
                message: "The licensing service did not return license details".to_string(),
            })
    }

    fn cached_license(&self, cache_key: &str, key: &str) -> Option<License> {
        match self.cache.get(cache_key) {
            Ok(value) => value.and_then(|details| License::from_details(key, details)),
            Err(e) => {
                tracing::warn!(error = %e, "license cache read failed");
                None
            }
        }
    }

    fn cache_license(&self, cache_key: &str, license: &License) {
        if let Err(e) = self
            .cache
            .set(cache_key, license.raw_details().clone(), LICENSE_DETAILS_TTL)
        {
            tracing::warn!(error = %e, "failed to cache license details");
        }
    }

    fn downloads_csv(&self) -> Result<String, UpdaterError> {
        let components = self
            .inventory
            .list_components()
            .map_err(UpdaterError::inventory)?;
        Ok(IdentifierBatch::from_components(&components).to_csv())
    }
}
