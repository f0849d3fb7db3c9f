use crate::update_check::domain::{Component, DownloadEntry, Downloads};
use crate::update_check::policies::VersionComparison;

/// Where one installed component stands against the remote data
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComponentState {
    /// The remote version is not newer than the installed one
    UpToDate { remote_version: String },
    /// A newer version exists; `downloadable` is false without entitlement
    UpdateAvailable {
        new_version: String,
        downloadable: bool,
    },
    /// The service reported an error for this identifier
    Failed { message: String },
    /// No remote data (no check cached, or the last check failed)
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentStatus {
    pub identifier: String,
    pub installed_version: String,
    pub state: ComponentState,
}

/// UpdateReport - response DTO for an update check
///
/// One status per installed component, in inventory order, plus the
/// reconciled update count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateReport {
    pub statuses: Vec<ComponentStatus>,
    pub update_count: usize,
}

impl UpdateReport {
    pub fn new(components: &[Component], downloads: &Downloads, update_count: usize) -> Self {
        let statuses = components
            .iter()
            .map(|component| ComponentStatus {
                identifier: component.identifier().to_string(),
                installed_version: component.installed_version().to_string(),
                state: Self::state_of(component, downloads.get(component.identifier())),
            })
            .collect();

        Self {
            statuses,
            update_count,
        }
    }

    pub fn has_updates(&self) -> bool {
        self.update_count > 0
    }

    fn state_of(component: &Component, entry: Option<&DownloadEntry>) -> ComponentState {
        match entry {
            None => ComponentState::Unknown,
            Some(DownloadEntry::Failed(error)) => ComponentState::Failed {
                message: error.message.clone(),
            },
            Some(DownloadEntry::Available(info)) => {
                if VersionComparison::is_newer(&info.version, component.installed_version()) {
                    ComponentState::UpdateAvailable {
                        new_version: info.version.clone(),
                        downloadable: info.is_downloadable(),
                    }
                } else {
                    ComponentState::UpToDate {
                        remote_version: info.version.clone(),
                    }
                }
            }
        }
    }
}
