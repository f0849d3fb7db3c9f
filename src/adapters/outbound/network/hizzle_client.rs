use crate::config::UpdaterConfig;
use crate::ports::outbound::{RemoteClient, RemoteRequest};
use crate::shared::error::RemoteError;
use crate::shared::security::validate_url_segment;
use crate::shared::Result;
use reqwest::blocking::{Client, RequestBuilder};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

/// Body of the activate/deactivate calls
#[derive(Debug, Serialize)]
struct LicenseActionBody<'a> {
    website: &'a str,
    downloads: &'a str,
}

/// HizzleApiClient adapter for the licensing and versions endpoints
///
/// Implements the RemoteClient port over a blocking reqwest client: the
/// caller waits until the response arrives or the fixed timeout elapses.
///
/// # Security
/// - License keys are validated and percent-encoded before being placed
///   in the URL path
/// - No retries: a failed version check is cached briefly by the engine
pub struct HizzleApiClient {
    client: Client,
    license_api_url: String,
    versions_api_url: String,
}

impl HizzleApiClient {
    const TIMEOUT_SECONDS: u64 = 15;

    /// Creates a client from validated configuration
    ///
    /// # Errors
    /// Returns an error if a configured request header is not a valid
    /// header name/value, or if the HTTP client cannot be built.
    pub fn new(config: &UpdaterConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        for (name, value) in &config.request_headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| anyhow::anyhow!("Invalid request header name '{}': {}", name, e))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| anyhow::anyhow!("Invalid value for request header '{}': {}", name, e))?;
            headers.insert(name, value);
        }

        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("hizzle-updater/{}", version);
        let client = Client::builder()
            .timeout(Duration::from_secs(Self::TIMEOUT_SECONDS))
            .user_agent(user_agent)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            license_api_url: config.license_api_url.clone(),
            versions_api_url: config.versions_api_url.clone(),
        })
    }

    /// Builds the URL for a request without sending it.
    pub fn url_for(&self, request: &RemoteRequest) -> std::result::Result<String, RemoteError> {
        match request {
            RemoteRequest::LicenseDetails {
                license_key,
                website,
                downloads,
            } => Ok(format!(
                "{}/?website={}&downloads={}",
                self.license_url(license_key)?,
                urlencoding::encode(website),
                urlencoding::encode(downloads)
            )),
            RemoteRequest::ActivateLicense { license_key, .. } => {
                Ok(format!("{}/activate", self.license_url(license_key)?))
            }
            RemoteRequest::DeactivateLicense { license_key, .. } => {
                Ok(format!("{}/deactivate", self.license_url(license_key)?))
            }
            RemoteRequest::Versions {
                license_key,
                website,
                downloads,
                hash,
            } => {
                let base = Self::require(&self.versions_api_url, "versions_api_url")?;
                let mut params: Vec<(&str, &str)> = Vec::with_capacity(4);
                if let Some(key) = license_key {
                    params.push(("hizzle_license", key.as_str()));
                }
                params.push(("hizzle_license_url", website.as_str()));
                params.push(("downloads", downloads.as_str()));
                params.push(("hash", hash.as_str()));

                let query = params
                    .iter()
                    .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
                    .collect::<Vec<_>>()
                    .join("&");
                let separator = if base.contains('?') { '&' } else { '?' };
                Ok(format!("{}{}{}", base, separator, query))
            }
        }
    }

    fn license_url(&self, license_key: &str) -> std::result::Result<String, RemoteError> {
        let base = Self::require(&self.license_api_url, "license_api_url")?;
        validate_url_segment(license_key, "License key").map_err(|e| {
            RemoteError::Application {
                code: "invalid_license_key".to_string(),
                message: e.to_string(),
                status: None,
            }
        })?;
        Ok(format!("{}/{}", base, urlencoding::encode(license_key.trim())))
    }

    fn require<'a>(url: &'a str, field: &str) -> std::result::Result<&'a str, RemoteError> {
        let url = url.trim().trim_end_matches('/');
        if url.is_empty() {
            return Err(RemoteError::MissingConfiguration {
                field: field.to_string(),
            });
        }
        Ok(url)
    }

    fn build(&self, request: &RemoteRequest) -> std::result::Result<RequestBuilder, RemoteError> {
        let url = self.url_for(request)?;
        let builder = match request {
            RemoteRequest::LicenseDetails { .. } | RemoteRequest::Versions { .. } => {
                self.client.get(&url)
            }
            RemoteRequest::ActivateLicense {
                website, downloads, ..
            }
            | RemoteRequest::DeactivateLicense {
                website, downloads, ..
            } => self.client.post(&url).json(&LicenseActionBody { website, downloads }),
        };
        Ok(builder.header(reqwest::header::ACCEPT, "application/json"))
    }
}

impl RemoteClient for HizzleApiClient {
    fn send(&self, request: &RemoteRequest) -> std::result::Result<Value, RemoteError> {
        let builder = self.build(request)?;

        let response = builder.send().map_err(|e| RemoteError::Transport {
            message: e.to_string(),
        })?;
        let status = response.status().as_u16();
        let body = response.text().map_err(|e| RemoteError::Transport {
            message: e.to_string(),
        })?;

        tracing::debug!(endpoint = request.endpoint_name(), status, "remote call completed");
        interpret_response(status, &body)
    }
}

/// Maps an HTTP status and body onto the success payload or a RemoteError
///
/// - Empty or non-JSON body: `InvalidResponse`
/// - JSON object with string `code` and `message`: `Application`
/// - Any other non-2xx status: `Application` with code `http_<status>`
pub fn interpret_response(status: u16, body: &str) -> std::result::Result<Value, RemoteError> {
    if body.trim().is_empty() {
        return Err(RemoteError::InvalidResponse {
            message: format!("empty response body (HTTP {})", status),
        });
    }

    let value: Value = serde_json::from_str(body).map_err(|e| RemoteError::InvalidResponse {
        message: format!("response is not valid JSON (HTTP {}): {}", status, e),
    })?;

    if let (Some(code), Some(message)) = (
        value.get("code").and_then(Value::as_str),
        value.get("message").and_then(Value::as_str),
    ) {
        return Err(RemoteError::Application {
            code: code.to_string(),
            message: message.to_string(),
            status: Some(status),
        });
    }

    if !(200..300).contains(&status) {
        return Err(RemoteError::Application {
            code: format!("http_{}", status),
            message: format!("The licensing service returned HTTP {}", status),
            status: Some(status),
        });
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;
    use std::collections::BTreeMap;
    use std::path::PathBuf;

    fn config(base: &str) -> UpdaterConfig {
        UpdaterConfig {
            license_api_url: format!("{}/licenses", base),
            versions_api_url: format!("{}/versions", base),
            site_url: "https://example.com".to_string(),
            cache_prefix: "hizzle".to_string(),
            request_headers: BTreeMap::new(),
            state_dir: PathBuf::from(".state"),
            inventory: PathBuf::from("components.toml"),
        }
    }

    fn versions_request(license_key: Option<&str>) -> RemoteRequest {
        RemoteRequest::Versions {
            license_key: license_key.map(str::to_string),
            website: "https://example.com".to_string(),
            downloads: "ads,forms".to_string(),
            hash: "abc123".to_string(),
        }
    }

    #[test]
    fn test_client_creation() {
        assert!(HizzleApiClient::new(&config("https://api.test")).is_ok());
    }

    #[test]
    fn test_invalid_header_name_is_rejected() {
        let mut config = config("https://api.test");
        config
            .request_headers
            .insert("bad header".to_string(), "x".to_string());
        assert!(HizzleApiClient::new(&config).is_err());
    }

    #[test]
    fn test_versions_url_omits_absent_license() {
        let client = HizzleApiClient::new(&config("https://api.test")).unwrap();
        let url = client.url_for(&versions_request(None)).unwrap();
        assert_eq!(
            url,
            "https://api.test/versions?hizzle_license_url=https%3A%2F%2Fexample.com&downloads=ads%2Cforms&hash=abc123"
        );
    }

    #[test]
    fn test_versions_url_with_license() {
        let client = HizzleApiClient::new(&config("https://api.test")).unwrap();
        let url = client.url_for(&versions_request(Some("KEY 1"))).unwrap();
        assert!(url.contains("?hizzle_license=KEY%201&"));
    }

    #[test]
    fn test_license_url_encodes_key_and_query() {
        let client = HizzleApiClient::new(&config("https://api.test")).unwrap();
        let url = client
            .url_for(&RemoteRequest::LicenseDetails {
                license_key: "ABC-123".to_string(),
                website: "https://example.com".to_string(),
                downloads: "forms".to_string(),
            })
            .unwrap();
        assert_eq!(
            url,
            "https://api.test/licenses/ABC-123/?website=https%3A%2F%2Fexample.com&downloads=forms"
        );
    }

    #[test]
    fn test_license_key_with_path_separator_is_rejected() {
        let client = HizzleApiClient::new(&config("https://api.test")).unwrap();
        let result = client.url_for(&RemoteRequest::ActivateLicense {
            license_key: "../admin".to_string(),
            website: String::new(),
            downloads: String::new(),
        });
        assert!(result.unwrap_err().is_license_not_found());
    }

    #[test]
    fn test_missing_versions_url() {
        let mut config = config("https://api.test");
        config.versions_api_url = String::new();
        let client = HizzleApiClient::new(&config).unwrap();
        let err = client.send(&versions_request(None)).unwrap_err();
        assert_eq!(
            err,
            RemoteError::MissingConfiguration {
                field: "versions_api_url".to_string()
            }
        );
    }

    #[test]
    fn test_interpret_success() {
        let value = interpret_response(200, r#"{"forms": {"version": "1.0.0"}}"#).unwrap();
        assert_eq!(value["forms"]["version"], "1.0.0");
    }

    #[test]
    fn test_interpret_error_envelope() {
        let err = interpret_response(
            400,
            r#"{"code": "license_not_found", "message": "Invalid license key", "data": {"status": 400}}"#,
        )
        .unwrap_err();
        assert!(err.is_license_not_found());
        assert_eq!(format!("{}", err), "Invalid license key");
    }

    #[test]
    fn test_interpret_empty_and_malformed_bodies() {
        assert_eq!(interpret_response(200, "  ").unwrap_err().code(), "invalid_response");
        assert_eq!(
            interpret_response(200, "<html>").unwrap_err().code(),
            "invalid_response"
        );
    }

    #[test]
    fn test_interpret_non_success_without_envelope() {
        let err = interpret_response(503, r#"{"busy": true}"#).unwrap_err();
        assert_eq!(err.code(), "http_503");
    }

    #[test]
    fn test_send_versions_request() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/versions")
                .query_param("hizzle_license", "KEY-1")
                .query_param("hizzle_license_url", "https://example.com")
                .query_param("downloads", "ads,forms")
                .query_param("hash", "abc123");
            then.status(200)
                .json_body(json!({"ads": {"version": "2.0.0"}, "forms": {"error": "nope"}}));
        });

        let client = HizzleApiClient::new(&config(&server.base_url())).unwrap();
        let body = client.send(&versions_request(Some("KEY-1"))).unwrap();

        mock.assert();
        assert_eq!(body["ads"]["version"], "2.0.0");
        assert_eq!(body["forms"]["error"], "nope");
    }

    #[test]
    fn test_send_activation_posts_body_and_headers() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/licenses/KEY-1/activate")
                .header("x-client", "tests")
                .json_body(json!({"website": "https://example.com", "downloads": "forms"}));
            then.status(200)
                .json_body(json!({"license": {"is_active_on_site": true}}));
        });

        let mut config = config(&server.base_url());
        config
            .request_headers
            .insert("X-Client".to_string(), "tests".to_string());
        let client = HizzleApiClient::new(&config).unwrap();
        let body = client
            .send(&RemoteRequest::ActivateLicense {
                license_key: "KEY-1".to_string(),
                website: "https://example.com".to_string(),
                downloads: "forms".to_string(),
            })
            .unwrap();

        mock.assert();
        assert_eq!(body["license"]["is_active_on_site"], true);
    }

    #[test]
    fn test_send_maps_error_envelope() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/licenses/GONE/");
            then.status(404)
                .json_body(json!({"code": "license_not_found", "message": "Not found", "data": {}}));
        });

        let client = HizzleApiClient::new(&config(&server.base_url())).unwrap();
        let err = client
            .send(&RemoteRequest::LicenseDetails {
                license_key: "GONE".to_string(),
                website: "https://example.com".to_string(),
                downloads: String::new(),
            })
            .unwrap_err();
        assert!(err.is_license_not_found());
    }

    #[test]
    fn test_send_transport_error() {
        // Nothing listens on port 9 of the loopback interface
        let client = HizzleApiClient::new(&config("http://127.0.0.1:9")).unwrap();
        let err = client.send(&versions_request(None)).unwrap_err();
        assert_eq!(err.code(), "transport_error");
    }
}
