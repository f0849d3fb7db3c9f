use crate::application::dto::UpdateReport;
use crate::application::use_cases::{
    LicenseStateManager, UpdateReconciler, VersionCheckCache, VersionCheckEngine,
};
use crate::config::UpdaterConfig;
use crate::ports::outbound::{CacheStore, Clock, Inventory, LicenseKeyStore, RemoteClient};
use crate::shared::error::UpdaterError;
use crate::update_check::domain::{ActivationOutcome, Downloads};
use crate::update_check::services::CacheKeys;
use std::sync::Arc;

/// Host-supplied collaborators the engine is built from
#[derive(Clone)]
pub struct Collaborators {
    pub inventory: Arc<dyn Inventory>,
    pub remote: Arc<dyn RemoteClient>,
    pub cache: Arc<dyn CacheStore>,
    pub key_store: Arc<dyn LicenseKeyStore>,
    pub clock: Arc<dyn Clock>,
}

/// Updater - wires the license manager, version-check engine and reconciler
///
/// The host calls these methods at its trigger points (schedule tick,
/// license action, package update) instead of registering callbacks.
pub struct Updater {
    inventory: Arc<dyn Inventory>,
    licenses: Arc<LicenseStateManager>,
    versions: Arc<VersionCheckEngine>,
    updates: UpdateReconciler,
}

impl Updater {
    pub fn new(config: &UpdaterConfig, collaborators: Collaborators) -> Self {
        let Collaborators {
            inventory,
            remote,
            cache,
            key_store,
            clock,
        } = collaborators;

        let version_cache =
            VersionCheckCache::new(cache.clone(), CacheKeys::new(&config.cache_prefix));

        let licenses = Arc::new(LicenseStateManager::new(
            remote.clone(),
            cache,
            key_store,
            inventory.clone(),
            version_cache.clone(),
            config.site_url.clone(),
        ));

        let versions = Arc::new(VersionCheckEngine::new(
            inventory.clone(),
            remote,
            licenses.clone(),
            version_cache,
            clock.clone(),
            config.site_url.clone(),
        ));

        let updates = UpdateReconciler::new(inventory.clone(), versions.clone(), clock);

        Self {
            inventory,
            licenses,
            versions,
            updates,
        }
    }

    pub fn licenses(&self) -> &LicenseStateManager {
        &self.licenses
    }

    pub fn versions(&self) -> &VersionCheckEngine {
        &self.versions
    }

    pub fn updates(&self) -> &UpdateReconciler {
        &self.updates
    }

    /// Periodic re-check: refreshes version data if needed and returns the update count.
    pub fn on_schedule_tick(&self) -> Result<usize, UpdaterError> {
        self.versions.get_update_data()?;
        self.updates.get_update_count()
    }

    /// Fetches (or reuses) version data and reports every installed component
    ///
    /// With `force`, cached version data is dropped first.
    pub fn check_updates(&self, force: bool) -> Result<UpdateReport, UpdaterError> {
        if force {
            self.versions.flush()?;
        }

        let components = self
            .inventory
            .list_components()
            .map_err(UpdaterError::inventory)?;
        let downloads = self.versions.update_data_for(&components)?;
        let update_count = self.updates.get_update_count()?;

        Ok(UpdateReport::new(&components, &downloads, update_count))
    }

    /// The installed set changed; a fingerprint mismatch forces the refetch.
    pub fn on_inventory_changed(&self) -> Result<Downloads, UpdaterError> {
        self.versions.get_update_data()
    }

    /// A package was installed; cached versions no longer describe the site.
    pub fn on_update_applied(&self) -> Result<(), UpdaterError> {
        self.versions.flush()
    }

    pub fn activate_license(&self, key: &str) -> Result<ActivationOutcome, UpdaterError> {
        self.licenses.activate_license(key)
    }

    pub fn deactivate_license(&self) -> Result<(), UpdaterError> {
        self.licenses.deactivate_license()
    }
}
