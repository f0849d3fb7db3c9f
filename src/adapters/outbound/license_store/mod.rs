/// License key store adapters
mod file_license_key_store;
mod memory_license_key_store;

pub use file_license_key_store::FileLicenseKeyStore;
pub use memory_license_key_store::MemoryLicenseKeyStore;
