use super::Component;
use serde_json::Value;
use sha2::{Digest, Sha256};
use std::collections::BTreeSet;
use std::fmt;

/// Distinct, lexicographically sorted identifiers of the installed components
///
/// Sorting makes the batch, and therefore its fingerprint, independent of
/// the order in which the inventory enumerates components.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IdentifierBatch {
    identifiers: Vec<String>,
}

impl IdentifierBatch {
    pub fn from_components(components: &[Component]) -> Self {
        let identifiers: BTreeSet<&str> = components.iter().map(Component::identifier).collect();
        Self {
            identifiers: identifiers.into_iter().map(str::to_string).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.identifiers.is_empty()
    }

    pub fn len(&self) -> usize {
        self.identifiers.len()
    }

    pub fn identifiers(&self) -> &[String] {
        &self.identifiers
    }

    /// Comma-joined identifiers, as sent in the `downloads` query parameter.
    pub fn to_csv(&self) -> String {
        self.identifiers.join(",")
    }

    /// Hash of the serialized batch followed by the active license key.
    pub fn fingerprint(&self, license_key: Option<&str>) -> Fingerprint {
        let serialized = Value::from(self.identifiers.clone()).to_string();

        let mut hasher = Sha256::new();
        hasher.update(serialized.as_bytes());
        hasher.update(license_key.unwrap_or_default().as_bytes());
        Fingerprint(hex::encode(hasher.finalize()))
    }
}

/// Cache-validity fingerprint of an identifier batch plus license key
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fingerprint(String);

impl Fingerprint {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
