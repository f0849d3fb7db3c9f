/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with the host platform and the licensing service.
pub mod cache_store;
pub mod clock;
pub mod inventory;
pub mod license_key_store;
pub mod progress_reporter;
pub mod remote_client;

pub use cache_store::CacheStore;
pub use clock::Clock;
pub use inventory::Inventory;
pub use license_key_store::LicenseKeyStore;
pub use progress_reporter::ProgressReporter;
pub use remote_client::{RemoteClient, RemoteRequest};
