use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow schedulers and CI systems to distinguish between
/// different types of failures and successes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - no updates pending, or `--fail-on-updates` not requested
    Success = 0,
    /// Updates are available and `--fail-on-updates` was given
    UpdatesAvailable = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (remote error, missing configuration, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::UpdatesAvailable => write!(f, "Updates Available (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Remote error codes that mean the license key is unknown to the service.
const LICENSE_NOT_FOUND_CODES: &[&str] = &["license_not_found", "invalid_license_key"];

/// Errors produced at the remote client boundary.
///
/// Every outbound call collapses transport failures, malformed bodies and
/// structured error envelopes into one of these variants.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RemoteError {
    #[error("Could not reach the licensing service: {message}\n\n💡 Hint: Check your network connection and try again later")]
    Transport { message: String },

    #[error("The licensing service returned an invalid response: {message}")]
    InvalidResponse { message: String },

    #[error("{message}")]
    Application {
        code: String,
        message: String,
        status: Option<u16>,
    },

    #[error("Missing configuration: {field}\n\n💡 Hint: Set '{field}' in hizzle-updater.config.yml")]
    MissingConfiguration { field: String },
}

impl RemoteError {
    /// Stable, machine-readable error code.
    pub fn code(&self) -> &str {
        match self {
            RemoteError::Transport { .. } => "transport_error",
            RemoteError::InvalidResponse { .. } => "invalid_response",
            RemoteError::Application { code, .. } => code,
            RemoteError::MissingConfiguration { .. } => "missing_configuration",
        }
    }

    /// True when the service reports that the license key does not exist.
    pub fn is_license_not_found(&self) -> bool {
        match self {
            RemoteError::Application { code, status, .. } => {
                LICENSE_NOT_FOUND_CODES.contains(&code.as_str()) || *status == Some(404)
            }
            _ => false,
        }
    }
}

/// Application-specific errors for license resolution and update checks.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// keeping the user-facing messages next to the variants.
#[derive(Debug, Error)]
pub enum UpdaterError {
    #[error(transparent)]
    Remote(#[from] RemoteError),

    #[error("Invalid license: {message}\n\n💡 Hint: Verify the license key in your account dashboard")]
    InvalidLicense { message: String },

    #[error("Missing configuration: {field}\n\n💡 Hint: Set '{field}' in hizzle-updater.config.yml")]
    MissingConfiguration { field: String },

    #[error("No active license key\n\n💡 Hint: Activate a license first with `hizzle-updater license activate <KEY>`")]
    NoActiveLicense,

    #[error("Failed to access local state\nDetails: {details}")]
    Storage { details: String },

    #[error("Failed to read installed components\nDetails: {details}\n\n💡 Hint: Check the component manifest for syntax errors")]
    Inventory { details: String },

    #[error("Failed to load config file: {path}\nDetails: {details}\n\n💡 Hint: Ensure the file contains valid YAML syntax")]
    ConfigError { path: PathBuf, details: String },
}

impl UpdaterError {
    /// Stable, machine-readable error code.
    pub fn code(&self) -> &str {
        match self {
            UpdaterError::Remote(e) => e.code(),
            UpdaterError::InvalidLicense { .. } => "invalid_license",
            UpdaterError::MissingConfiguration { .. } => "missing_configuration",
            UpdaterError::NoActiveLicense => "no_active_license",
            UpdaterError::Storage { .. } => "storage_error",
            UpdaterError::Inventory { .. } => "inventory_error",
            UpdaterError::ConfigError { .. } => "config_error",
        }
    }

    pub(crate) fn storage(err: impl fmt::Display) -> Self {
        UpdaterError::Storage {
            details: format!("{:#}", err),
        }
    }

    pub(crate) fn inventory(err: impl fmt::Display) -> Self {
        UpdaterError::Inventory {
            details: format!("{:#}", err),
        }
    }
}
