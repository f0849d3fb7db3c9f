use crate::ports::outbound::LicenseKeyStore;
use crate::shared::Result;
use crate::update_check::domain::LicenseOptions;
use std::sync::Mutex;

/// MemoryLicenseKeyStore adapter keeping license settings in process memory
#[derive(Default)]
pub struct MemoryLicenseKeyStore {
    options: Mutex<LicenseOptions>,
}

impl MemoryLicenseKeyStore {
    pub fn new(options: LicenseOptions) -> Self {
        Self {
            options: Mutex::new(options),
        }
    }
}

impl LicenseKeyStore for MemoryLicenseKeyStore {
    fn load(&self) -> Result<LicenseOptions> {
        let guard = self
            .options
            .lock()
            .map_err(|_| anyhow::anyhow!("license store lock poisoned"))?;
        Ok(guard.clone())
    }

    fn save(&self, options: &LicenseOptions) -> Result<()> {
        let mut guard = self
            .options
            .lock()
            .map_err(|_| anyhow::anyhow!("license store lock poisoned"))?;
        *guard = options.clone();
        Ok(())
    }
}
