use crate::shared::Result;
use crate::update_check::domain::Component;

/// Inventory port listing the vendor's locally installed components
///
/// Each call reads the inventory afresh.
pub trait Inventory: Send + Sync {
    /// Lists installed components
    ///
    /// # Errors
    /// Returns an error if the inventory source cannot be read or parsed
    fn list_components(&self) -> Result<Vec<Component>>;
}
