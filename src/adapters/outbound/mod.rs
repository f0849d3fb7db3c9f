/// Outbound adapters - Infrastructure implementations of outbound ports
pub mod cache;
pub mod clock;
pub mod console;
pub mod inventory;
pub mod license_store;
pub mod network;
