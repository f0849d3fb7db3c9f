use crate::ports::outbound::Inventory;
use crate::shared::Result;
use crate::update_check::domain::Component;
use std::sync::RwLock;

/// StaticInventory adapter holding an in-memory component list
///
/// Used by embedders that already know what is installed, and by tests
/// that change the inventory between calls.
#[derive(Default)]
pub struct StaticInventory {
    components: RwLock<Vec<Component>>,
}

impl StaticInventory {
    pub fn new(components: Vec<Component>) -> Self {
        Self {
            components: RwLock::new(components),
        }
    }

    /// Replaces the installed components
    pub fn replace(&self, components: Vec<Component>) -> Result<()> {
        let mut guard = self
            .components
            .write()
            .map_err(|_| anyhow::anyhow!("inventory lock poisoned"))?;
        *guard = components;
        Ok(())
    }
}

impl Inventory for StaticInventory {
    fn list_components(&self) -> Result<Vec<Component>> {
        let guard = self
            .components
            .read()
            .map_err(|_| anyhow::anyhow!("inventory lock poisoned"))?;
        Ok(guard.clone())
    }
}
