use crate::shared::Result;

/// Maximum length for identifiers and slugs (security limit)
const MAX_IDENTIFIER_LENGTH: usize = 255;

/// Maximum length for installed versions (security limit)
const MAX_VERSION_LENGTH: usize = 100;

/// Component value object: one locally installed unit tracked by the vendor
///
/// `identifier` is the remote-facing name, `slug` the local inventory key.
/// A fresh set of components is produced on every inventory read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    identifier: String,
    slug: String,
    installed_version: String,
}

impl Component {
    pub fn new(identifier: String, slug: String, installed_version: String) -> Result<Self> {
        let identifier = identifier.trim().to_string();
        if identifier.is_empty() {
            anyhow::bail!("Component identifier cannot be empty");
        }

        if identifier.len() > MAX_IDENTIFIER_LENGTH || slug.len() > MAX_IDENTIFIER_LENGTH {
            anyhow::bail!(
                "Component identifier or slug is too long. Maximum allowed: {} bytes",
                MAX_IDENTIFIER_LENGTH
            );
        }

        // Identifiers are joined with commas into the batch query
        if identifier.contains(',') || identifier.chars().any(char::is_whitespace) {
            anyhow::bail!(
                "Component identifier '{}' must not contain commas or whitespace",
                identifier
            );
        }

        let installed_version = installed_version.trim().to_string();
        if installed_version.is_empty() {
            anyhow::bail!("Installed version of '{}' cannot be empty", identifier);
        }

        if installed_version.len() > MAX_VERSION_LENGTH {
            anyhow::bail!(
                "Installed version of '{}' is too long ({} bytes). Maximum allowed: {} bytes",
                identifier,
                installed_version.len(),
                MAX_VERSION_LENGTH
            );
        }

        let slug = if slug.trim().is_empty() {
            identifier.clone()
        } else {
            slug.trim().to_string()
        };

        Ok(Self {
            identifier,
            slug,
            installed_version,
        })
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn installed_version(&self) -> &str {
        &self.installed_version
    }
}
