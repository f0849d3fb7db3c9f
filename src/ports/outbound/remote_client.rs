use crate::shared::error::RemoteError;
use serde_json::Value;

/// One call against the licensing service
///
/// `downloads` is always the comma-joined identifier list of the current
/// inventory; `website` is the site's canonical URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteRequest {
    /// `GET {license_api}/{key}/?website=..&downloads=..`
    LicenseDetails {
        license_key: String,
        website: String,
        downloads: String,
    },
    /// `POST {license_api}/{key}/activate`
    ActivateLicense {
        license_key: String,
        website: String,
        downloads: String,
    },
    /// `POST {license_api}/{key}/deactivate`
    DeactivateLicense {
        license_key: String,
        website: String,
        downloads: String,
    },
    /// `GET {versions_api}?hizzle_license=..&hizzle_license_url=..&downloads=..&hash=..`
    Versions {
        license_key: Option<String>,
        website: String,
        downloads: String,
        hash: String,
    },
}

impl RemoteRequest {
    /// Short name used in log fields.
    pub fn endpoint_name(&self) -> &'static str {
        match self {
            RemoteRequest::LicenseDetails { .. } => "license",
            RemoteRequest::ActivateLicense { .. } => "license_activate",
            RemoteRequest::DeactivateLicense { .. } => "license_deactivate",
            RemoteRequest::Versions { .. } => "versions",
        }
    }
}

/// RemoteClient port for the licensing/version service
///
/// Implementations block until the call completes or times out, and
/// normalize every failure into a [`RemoteError`]. A successful call returns
/// the decoded JSON body.
pub trait RemoteClient: Send + Sync {
    /// Sends a request and returns the success payload
    ///
    /// # Errors
    /// - `Transport` when the service cannot be reached or times out
    /// - `InvalidResponse` for empty or non-JSON bodies
    /// - `Application` for structured `{code, message}` error envelopes
    /// - `MissingConfiguration` when the endpoint URL is not configured
    fn send(&self, request: &RemoteRequest) -> Result<Value, RemoteError>;
}
