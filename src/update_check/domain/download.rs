use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Latest remote version data for one identifier
///
/// An empty `download_link` means the version is known but the license does
/// not entitle this site to download it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionInfo {
    pub version: String,
    #[serde(default)]
    pub download_link: String,
    #[serde(default)]
    pub requires_php: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl VersionInfo {
    pub fn is_downloadable(&self) -> bool {
        !self.download_link.trim().is_empty()
    }
}

/// Per-identifier error reported inside an otherwise successful batch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    pub message: String,
}

/// Outcome for one identifier of a version-check batch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DownloadEntry {
    Available(VersionInfo),
    Failed(ErrorInfo),
}

impl DownloadEntry {
    /// Interprets one identifier's slot of the versions endpoint response.
    ///
    /// `None` (identifier absent from the response) becomes a `Failed` entry.
    pub fn from_remote(slot: Option<&Value>) -> Self {
        let Some(slot) = slot else {
            return Self::failed("No version information was returned for this component");
        };

        if let Some(error) = slot.get("error").filter(|e| !e.is_null()) {
            let message = match error {
                Value::String(s) => s.clone(),
                other => other
                    .get("message")
                    .and_then(Value::as_str)
                    .map(str::to_string)
                    .unwrap_or_else(|| other.to_string()),
            };
            return Self::failed(message);
        }

        let Some(version) = slot.get("version").and_then(scalar_to_string) else {
            return Self::failed("Malformed version information");
        };

        DownloadEntry::Available(VersionInfo {
            version,
            download_link: string_field(slot, "download_link").unwrap_or_default(),
            requires_php: string_field(slot, "requires_php").unwrap_or_default(),
            name: string_field(slot, "name"),
            description: string_field(slot, "description"),
        })
    }

    fn failed(message: impl Into<String>) -> Self {
        DownloadEntry::Failed(ErrorInfo {
            message: message.into(),
        })
    }

    pub fn version_info(&self) -> Option<&VersionInfo> {
        match self {
            DownloadEntry::Available(info) => Some(info),
            DownloadEntry::Failed(_) => None,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, DownloadEntry::Failed(_))
    }
}

fn string_field(slot: &Value, field: &str) -> Option<String> {
    slot.get(field)
        .and_then(scalar_to_string)
        .filter(|s| !s.is_empty())
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
