use crate::application::use_cases::VersionCheckEngine;
use crate::ports::outbound::{Clock, Inventory};
use crate::shared::error::UpdaterError;
use crate::update_check::domain::{Component, PendingUpdate, UpdateCountCacheEntry};
use crate::update_check::services::UpdateDetector;
use std::sync::Arc;

/// UpdateReconciler - decides which installed components have an update
///
/// Reads only what the version-check engine has already cached; none of
/// these methods ever triggers a network call.
pub struct UpdateReconciler {
    inventory: Arc<dyn Inventory>,
    versions: Arc<VersionCheckEngine>,
    clock: Arc<dyn Clock>,
}

impl UpdateReconciler {
    pub fn new(
        inventory: Arc<dyn Inventory>,
        versions: Arc<VersionCheckEngine>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            inventory,
            versions,
            clock,
        }
    }

    /// Number of installed components with a newer remote version
    ///
    /// Returns 0 when no version check has been cached. The count itself is
    /// cached for 12 hours and dropped whenever the version data changes.
    pub fn get_update_count(&self) -> Result<usize, UpdaterError> {
        let Some(entry) = self.versions.cached_entry() else {
            return Ok(0);
        };

        if let Some(cached) = self.versions.cache().load_count() {
            return Ok(cached.count);
        }

        let components = self.components()?;
        let count = UpdateDetector::count(&components, &entry.downloads);
        self.versions.cache().store_count(&UpdateCountCacheEntry {
            count,
            computed_at: self.clock.now(),
        });
        tracing::debug!(count, "update count recomputed");

        Ok(count)
    }

    /// True if the component with `identifier` has a newer cached remote version.
    pub fn has_update(&self, identifier: &str) -> Result<bool, UpdaterError> {
        let Some(entry) = self.versions.cached_entry() else {
            return Ok(false);
        };

        Ok(self
            .components()?
            .iter()
            .filter(|component| component.identifier() == identifier)
            .any(|component| UpdateDetector::has_update(component, &entry.downloads)))
    }

    /// Components with a pending update, for the update pipeline.
    pub fn pending_updates(&self) -> Result<Vec<PendingUpdate>, UpdaterError> {
        let Some(entry) = self.versions.cached_entry() else {
            return Ok(Vec::new());
        };

        Ok(UpdateDetector::pending_updates(
            &self.components()?,
            &entry.downloads,
        ))
    }

    fn components(&self) -> Result<Vec<Component>, UpdaterError> {
        self.inventory
            .list_components()
            .map_err(UpdaterError::inventory)
    }
}
