use crate::adapters::outbound::cache::FileCacheStore;
use crate::adapters::outbound::clock::SystemClock;
use crate::adapters::outbound::inventory::ManifestInventory;
use crate::adapters::outbound::license_store::FileLicenseKeyStore;
use crate::adapters::outbound::network::HizzleApiClient;
use crate::application::use_cases::{Collaborators, Updater};
use crate::config::UpdaterConfig;
use crate::ports::outbound::Clock;
use crate::shared::Result;
use std::sync::Arc;

/// Factory for building an [`Updater`] over the file-backed adapters
///
/// The cache store and license key store live in `state_dir`; the
/// inventory is read from the configured manifest.
pub struct UpdaterFactory;

impl UpdaterFactory {
    /// Creates the production collaborators for `config`
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built (e.g., an
    /// invalid request header in the configuration).
    pub fn collaborators(config: &UpdaterConfig) -> Result<Collaborators> {
        let clock: Arc<dyn Clock> = Arc::new(SystemClock);

        Ok(Collaborators {
            inventory: Arc::new(ManifestInventory::new(config.inventory.clone())),
            remote: Arc::new(HizzleApiClient::new(config)?),
            cache: Arc::new(FileCacheStore::new(&config.state_dir, clock.clone())),
            key_store: Arc::new(FileLicenseKeyStore::new(&config.state_dir)),
            clock,
        })
    }

    pub fn create(config: &UpdaterConfig) -> Result<Updater> {
        let collaborators = Self::collaborators(config)?;
        Ok(Updater::new(config, collaborators))
    }
}
