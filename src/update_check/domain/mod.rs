pub mod cache_entry;
pub mod component;
pub mod download;
pub mod identifier_batch;
pub mod license;
pub mod update;

pub use cache_entry::{Downloads, UpdateCountCacheEntry, VersionCheckCacheEntry};
pub use component::Component;
pub use download::{DownloadEntry, ErrorInfo, VersionInfo};
pub use identifier_batch::{Fingerprint, IdentifierBatch};
pub use license::{is_truthy, ActivationOutcome, License, LicenseOptions};
pub use update::PendingUpdate;
