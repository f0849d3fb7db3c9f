use crate::shared::Result;
use crate::update_check::domain::LicenseOptions;

/// LicenseKeyStore port for the persisted license settings
///
/// Holds the active key and any legacy key list under one
/// configuration-scoped record.
pub trait LicenseKeyStore: Send + Sync {
    /// Loads the stored settings; a missing record loads as the default
    fn load(&self) -> Result<LicenseOptions>;

    /// Replaces the stored settings
    fn save(&self, options: &LicenseOptions) -> Result<()>;
}
