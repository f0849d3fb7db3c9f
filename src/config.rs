//! Configuration file support for hizzle-updater.
//!
//! Provides YAML-based configuration through `hizzle-updater.config.yml`
//! files: a permissive on-disk schema, file loading and discovery, and
//! validation into the typed [`UpdaterConfig`] the engine is built from.

use anyhow::Context;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::shared::error::UpdaterError;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "hizzle-updater.config.yml";

const DEFAULT_CACHE_PREFIX: &str = "hizzle";
const DEFAULT_STATE_DIR: &str = ".hizzle-updater";
const DEFAULT_INVENTORY: &str = "components.toml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub license_api_url: Option<String>,
    pub versions_api_url: Option<String>,
    pub site_url: Option<String>,
    pub cache_prefix: Option<String>,
    pub request_headers: Option<BTreeMap<String, String>>,
    pub state_dir: Option<PathBuf>,
    pub inventory: Option<PathBuf>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: BTreeMap<String, serde_yaml_ng::Value>,
}

/// Validated configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdaterConfig {
    pub license_api_url: String,
    pub versions_api_url: String,
    pub site_url: String,
    pub cache_prefix: String,
    pub request_headers: BTreeMap<String, String>,
    pub state_dir: PathBuf,
    pub inventory: PathBuf,
}

impl TryFrom<ConfigFile> for UpdaterConfig {
    type Error = UpdaterError;

    fn try_from(file: ConfigFile) -> std::result::Result<Self, Self::Error> {
        Ok(Self {
            license_api_url: required_url(file.license_api_url, "license_api_url")?,
            versions_api_url: required_url(file.versions_api_url, "versions_api_url")?,
            site_url: required_url(file.site_url, "site_url")?,
            cache_prefix: file
                .cache_prefix
                .map(|p| p.trim().to_string())
                .filter(|p| !p.is_empty())
                .unwrap_or_else(|| DEFAULT_CACHE_PREFIX.to_string()),
            request_headers: file.request_headers.unwrap_or_default(),
            state_dir: file
                .state_dir
                .unwrap_or_else(|| PathBuf::from(DEFAULT_STATE_DIR)),
            inventory: file
                .inventory
                .unwrap_or_else(|| PathBuf::from(DEFAULT_INVENTORY)),
        })
    }
}

fn required_url(value: Option<String>, field: &str) -> std::result::Result<String, UpdaterError> {
    value
        .map(|v| v.trim().trim_end_matches('/').to_string())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| UpdaterError::MissingConfiguration {
            field: field.to_string(),
        })
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile =
        serde_yaml_ng::from_str(&content).map_err(|e| UpdaterError::ConfigError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        tracing::warn!(field = %key, "unknown config field will be ignored");
    }
}
