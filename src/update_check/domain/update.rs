/// A local component whose cached remote version is newer than the installed one
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingUpdate {
    pub identifier: String,
    pub slug: String,
    pub installed_version: String,
    pub new_version: String,
    /// Package URL; `None` when the license does not grant the download
    pub package: Option<String>,
    pub requires_php: String,
}
