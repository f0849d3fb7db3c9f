use crate::ports::outbound::LicenseKeyStore;
use crate::shared::security::{read_regular_file, write_file_atomically};
use crate::shared::Result;
use crate::update_check::domain::LicenseOptions;
use anyhow::Context;
use std::path::{Path, PathBuf};

const LICENSE_FILENAME: &str = "license.json";

/// FileLicenseKeyStore adapter persisting license settings as JSON in the state directory
pub struct FileLicenseKeyStore {
    path: PathBuf,
}

impl FileLicenseKeyStore {
    pub fn new(state_dir: &Path) -> Self {
        Self {
            path: state_dir.join(LICENSE_FILENAME),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LicenseKeyStore for FileLicenseKeyStore {
    fn load(&self) -> Result<LicenseOptions> {
        if !self.path.exists() {
            return Ok(LicenseOptions::default());
        }

        let content = read_regular_file(&self.path, "license file")?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse license file: {}", self.path.display()))
    }

    /// Replaces the file atomically; on unix it is readable by the owner only.
    fn save(&self, options: &LicenseOptions) -> Result<()> {
        let content = serde_json::to_vec_pretty(options)?;
        write_file_atomically(&self.path, &content, "license file")
    }
}
