use crate::ports::outbound::Inventory;
use crate::shared::security::read_regular_file;
use crate::shared::Result;
use crate::update_check::domain::Component;
use anyhow::Context;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
struct Manifest {
    #[serde(default, rename = "component")]
    components: Vec<ManifestEntry>,
}

#[derive(Debug, Deserialize)]
struct ManifestEntry {
    identifier: String,
    #[serde(default)]
    slug: String,
    version: String,
}

/// ManifestInventory adapter reading installed components from a TOML file
///
/// ```toml
/// [[component]]
/// identifier = "noptin-ads"
/// slug = "noptin-ads/noptin-ads.php"
/// version = "1.2.0"
/// ```
///
/// The manifest is re-read on every call. A missing manifest means nothing
/// is installed.
pub struct ManifestInventory {
    path: PathBuf,
}

impl ManifestInventory {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parses manifest content into validated components
    pub fn parse(content: &str) -> Result<Vec<Component>> {
        let manifest: Manifest = toml::from_str(content).context("Failed to parse component manifest")?;

        manifest
            .components
            .into_iter()
            .enumerate()
            .map(|(index, entry)| {
                Component::new(entry.identifier, entry.slug, entry.version)
                    .with_context(|| format!("Invalid component entry #{}", index + 1))
            })
            .collect()
    }
}

impl Inventory for ManifestInventory {
    fn list_components(&self) -> Result<Vec<Component>> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "component manifest not found; inventory is empty");
            return Ok(Vec::new());
        }

        let content = read_regular_file(&self.path, "component manifest")?;
        Self::parse(&content)
            .with_context(|| format!("Failed to load components from {}", self.path.display()))
    }
}
