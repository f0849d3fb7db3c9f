/// Use cases module containing application business logic orchestration
mod license_state;
mod update_reconciler;
mod updater;
mod version_check;
mod version_check_cache;

pub use license_state::{LicenseStateManager, LICENSE_DETAILS_TTL};
pub use update_reconciler::UpdateReconciler;
pub use updater::{Collaborators, Updater};
pub use version_check::VersionCheckEngine;
pub use version_check_cache::{
    VersionCheckCache, FAILED_CHECK_TTL, UPDATE_COUNT_TTL, VERSION_CHECK_TTL,
};
