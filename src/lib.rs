//! hizzle-updater - license-gated update checks for vendor components
//!
//! This library decides whether locally installed components have newer
//! versions available from a vendor's licensing service, and resolves the
//! license that entitles the site to download them. Version lookups are
//! batched into one request and cached under a fingerprint of the batch and
//! license key, so an unchanged site never hits the network twice.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`update_check`): Components, licenses, download entries,
//!   version comparison and update detection
//! - **Application Layer** (`application`): License state, version-check
//!   engine, update reconciliation and the `Updater` facade
//! - **Ports** (`ports`): Interfaces for the host platform (inventory, cache
//!   store, key store, clock) and the remote service
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use hizzle_updater::prelude::*;
//! use std::path::Path;
//!
//! # fn main() -> Result<()> {
//! let file = load_config_from_path(Path::new("hizzle-updater.config.yml"))?;
//! let config = UpdaterConfig::try_from(file)?;
//! let updater = UpdaterFactory::create(&config)?;
//!
//! // Refresh version data if the cache no longer matches, then count updates
//! let count = updater.on_schedule_tick()?;
//! println!("{} update(s) available", count);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod ports;
pub mod shared;
pub mod update_check;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::cache::{FileCacheStore, MemoryCacheStore};
    pub use crate::adapters::outbound::clock::SystemClock;
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::inventory::{ManifestInventory, StaticInventory};
    pub use crate::adapters::outbound::license_store::{
        FileLicenseKeyStore, MemoryLicenseKeyStore,
    };
    pub use crate::adapters::outbound::network::HizzleApiClient;
    pub use crate::application::dto::{ComponentState, ComponentStatus, UpdateReport};
    pub use crate::application::factories::UpdaterFactory;
    pub use crate::application::use_cases::{
        Collaborators, LicenseStateManager, UpdateReconciler, Updater, VersionCheckCache,
        VersionCheckEngine, FAILED_CHECK_TTL, LICENSE_DETAILS_TTL, UPDATE_COUNT_TTL,
        VERSION_CHECK_TTL,
    };
    pub use crate::config::{discover_config, load_config_from_path, ConfigFile, UpdaterConfig};
    pub use crate::ports::outbound::{
        CacheStore, Clock, Inventory, LicenseKeyStore, ProgressReporter, RemoteClient,
        RemoteRequest,
    };
    pub use crate::shared::error::{ExitCode, RemoteError, UpdaterError};
    pub use crate::shared::Result;
    pub use crate::update_check::domain::{
        ActivationOutcome, Component, DownloadEntry, Downloads, ErrorInfo, IdentifierBatch,
        License, LicenseOptions, PendingUpdate, VersionCheckCacheEntry, VersionInfo,
    };
    pub use crate::update_check::policies::VersionComparison;
    pub use crate::update_check::services::{CacheKeys, UpdateDetector};
}
