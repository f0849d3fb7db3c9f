use sha2::{Digest, Sha256};

/// Builds the namespaced cache key names used by the engine
///
/// License keys never appear verbatim in a key name: their slot is derived
/// from a SHA-256 digest salted with the namespace prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheKeys {
    prefix: String,
}

impl CacheKeys {
    pub fn new(prefix: &str) -> Self {
        let prefix = prefix.trim();
        Self {
            prefix: if prefix.is_empty() {
                "hizzle".to_string()
            } else {
                prefix.to_string()
            },
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Fixed key of the version-check batch result
    pub fn version_check(&self) -> String {
        format!("{}_version_check", self.prefix)
    }

    /// Fixed key of the derived update count
    pub fn update_count(&self) -> String {
        format!("{}_update_count", self.prefix)
    }

    /// Key of the cached remote details for one license key
    pub fn license_details(&self, license_key: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.prefix.as_bytes());
        hasher.update([0u8]);
        hasher.update(license_key.as_bytes());
        let digest = hex::encode(hasher.finalize());
        format!("{}_license_{}", self.prefix, &digest[..32])
    }
}

impl Default for CacheKeys {
    fn default() -> Self {
        Self::new("hizzle")
    }
}
