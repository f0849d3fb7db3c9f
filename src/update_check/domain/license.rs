use serde::{Deserialize, Serialize};
use serde_json::Value;

/// License value object with the remote validity details for one key
#[derive(Debug, Clone, PartialEq)]
pub struct License {
    key: String,
    is_active_on_site: bool,
    raw_details: Value,
}

impl License {
    /// Builds a license from the `license` object returned by the service.
    ///
    /// Returns `None` when `details` is not a JSON object.
    pub fn from_details(key: &str, details: Value) -> Option<Self> {
        if !details.is_object() {
            return None;
        }

        let is_active_on_site = details.get("is_active_on_site").is_some_and(is_truthy);

        Some(Self {
            key: key.to_string(),
            is_active_on_site,
            raw_details: details,
        })
    }

    /// A stored key whose remote details were not requested.
    pub fn unresolved(key: &str) -> Self {
        Self {
            key: key.to_string(),
            is_active_on_site: false,
            raw_details: Value::Null,
        }
    }

    /// True when the remote details were fetched (or read from cache).
    pub fn is_resolved(&self) -> bool {
        !self.raw_details.is_null()
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn is_active_on_site(&self) -> bool {
        self.is_active_on_site
    }

    pub fn raw_details(&self) -> &Value {
        &self.raw_details
    }

    /// Convenience accessor for a string field of the raw details.
    pub fn detail_str(&self, field: &str) -> Option<&str> {
        self.raw_details.get(field).and_then(Value::as_str)
    }
}

/// Result of a successful license activation
#[derive(Debug, Clone, PartialEq)]
pub struct ActivationOutcome {
    pub license: License,
    /// The key applies to every component rather than a fixed list
    pub is_membership: bool,
}

/// Locally stored license settings
///
/// `legacy_keys` holds keys saved by older releases that kept one key per
/// component.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LicenseOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license_key: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub legacy_keys: Vec<String>,
}

impl LicenseOptions {
    /// The explicit key if set, otherwise the first non-blank legacy key.
    pub fn active_key(&self) -> Option<&str> {
        self.license_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .or_else(|| {
                self.legacy_keys
                    .iter()
                    .map(|key| key.trim())
                    .find(|key| !key.is_empty())
            })
    }
}

/// Loose boolean interpretation used by the service (`true`, `1`, `"yes"`, ...)
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => {
            let s = s.trim();
            !s.is_empty() && s != "0" && !s.eq_ignore_ascii_case("false")
        }
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
        Value::Null => false,
    }
}
