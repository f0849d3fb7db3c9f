use crate::shared::Result;
use anyhow::Context;
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Maximum size of any local state or manifest file (10 MB)
pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Validates that a value can be used as a single URL path segment
///
/// # Security
/// License keys are interpolated into the license endpoint path, so anything
/// that could change the request target is rejected before encoding.
///
/// # Errors
/// Returns an error if the value is blank, contains path separators, `..`,
/// or one of `?`, `#`, `@`.
pub fn validate_url_segment(value: &str, description: &str) -> Result<()> {
    if value.trim().is_empty() {
        anyhow::bail!("{} must not be empty", description);
    }

    if value.contains('/') || value.contains('\\') {
        anyhow::bail!(
            "Security: {} contains path separators which are not allowed",
            description
        );
    }

    if value.contains("..") {
        anyhow::bail!("Security: {} contains '..' which is not allowed", description);
    }

    if value.contains('#') || value.contains('?') || value.contains('@') {
        anyhow::bail!("Security: {} contains URL-unsafe characters", description);
    }

    Ok(())
}

/// Reads a regular file into a string after symlink and size checks
///
/// # Security
/// Uses `symlink_metadata()` so the link itself is inspected, not its target.
///
/// # Errors
/// Returns an error if:
/// - The path cannot be inspected
/// - The path is a symbolic link or not a regular file
/// - The file exceeds [`MAX_FILE_SIZE`]
pub fn read_regular_file(path: &Path, file_description: &str) -> Result<String> {
    let metadata = fs::symlink_metadata(path).map_err(|e| {
        anyhow::anyhow!("Failed to read {} metadata: {}", file_description, e)
    })?;

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. For security reasons, symbolic links are not allowed.",
            path.display()
        );
    }

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    if metadata.len() > MAX_FILE_SIZE {
        anyhow::bail!(
            "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
            path.display(),
            metadata.len(),
            MAX_FILE_SIZE
        );
    }

    fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", file_description, e))
}

/// Replaces a local state file atomically, readable by the owner only
///
/// The content goes to a uniquely named temporary file in the same directory,
/// which is then renamed over `path`. Concurrent writers never share a
/// temporary file and readers see either the old or the new content.
///
/// # Errors
/// Returns an error if the directory cannot be created or the temporary
/// file cannot be written or persisted.
pub fn write_file_atomically(path: &Path, contents: &[u8], file_description: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create state directory: {}", dir.display()))?;

    let mut tmp = NamedTempFile::new_in(dir)
        .with_context(|| format!("Failed to create temporary {} in {}", file_description, dir.display()))?;
    tmp.write_all(contents)
        .and_then(|_| tmp.as_file().sync_all())
        .with_context(|| format!("Failed to write {}: {}", file_description, path.display()))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        tmp.as_file()
            .set_permissions(fs::Permissions::from_mode(0o600))
            .with_context(|| format!("Failed to restrict {} permissions", file_description))?;
    }

    tmp.persist(path)
        .with_context(|| format!("Failed to replace {}: {}", file_description, path.display()))?;
    Ok(())
}
