/// Inventory adapters listing installed components
mod manifest_inventory;
mod static_inventory;

pub use manifest_inventory::ManifestInventory;
pub use static_inventory::StaticInventory;
