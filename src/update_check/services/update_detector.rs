use crate::update_check::domain::{Component, Downloads, PendingUpdate, VersionInfo};
use crate::update_check::policies::VersionComparison;

/// UpdateDetector service for reconciling remote versions with the inventory
///
/// Pure business logic: no cache or network access. Components whose
/// identifier has no entry, or only an error entry, never have an update.
pub struct UpdateDetector;

impl UpdateDetector {
    /// True if the downloads hold a strictly newer version for `component`.
    pub fn has_update(component: &Component, downloads: &Downloads) -> bool {
        Self::newer_version(component, downloads).is_some()
    }

    /// Number of local components with an update available
    pub fn count(components: &[Component], downloads: &Downloads) -> usize {
        components
            .iter()
            .filter(|component| Self::has_update(component, downloads))
            .count()
    }

    /// Pending updates in inventory order
    pub fn pending_updates(components: &[Component], downloads: &Downloads) -> Vec<PendingUpdate> {
        components
            .iter()
            .filter_map(|component| {
                let info = Self::newer_version(component, downloads)?;
                Some(PendingUpdate {
                    identifier: component.identifier().to_string(),
                    slug: component.slug().to_string(),
                    installed_version: component.installed_version().to_string(),
                    new_version: info.version.clone(),
                    package: info
                        .is_downloadable()
                        .then(|| info.download_link.clone()),
                    requires_php: info.requires_php.clone(),
                })
            })
            .collect()
    }

    fn newer_version<'a>(
        component: &Component,
        downloads: &'a Downloads,
    ) -> Option<&'a VersionInfo> {
        downloads
            .get(component.identifier())
            .and_then(|entry| entry.version_info())
            .filter(|info| VersionComparison::is_newer(&info.version, component.installed_version()))
    }
}
