use hizzle_updater::prelude::*;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

/// Mock RemoteClient that records every request and answers per endpoint
///
/// Endpoints without a configured response answer with `{}`.
#[derive(Default)]
pub struct MockRemoteClient {
    responses: Mutex<HashMap<&'static str, std::result::Result<Value, RemoteError>>>,
    requests: Mutex<Vec<RemoteRequest>>,
    delay: Option<Duration>,
}

impl MockRemoteClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sleeps inside every call, widening race windows
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn with_versions(self, body: Value) -> Self {
        self.respond("versions", Ok(body));
        self
    }

    pub fn with_license(self, body: Value) -> Self {
        self.respond("license", Ok(body));
        self
    }

    /// Replaces the response for `endpoint` ("versions", "license", ...)
    pub fn respond(&self, endpoint: &'static str, response: std::result::Result<Value, RemoteError>) {
        self.responses.lock().unwrap().insert(endpoint, response);
    }

    pub fn fail(&self, endpoint: &'static str) {
        self.respond(
            endpoint,
            Err(RemoteError::Transport {
                message: "connection refused".to_string(),
            }),
        );
    }

    pub fn requests(&self) -> Vec<RemoteRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn calls(&self, endpoint: &str) -> usize {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|request| request.endpoint_name() == endpoint)
            .count()
    }

    pub fn total_calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

impl RemoteClient for MockRemoteClient {
    fn send(&self, request: &RemoteRequest) -> std::result::Result<Value, RemoteError> {
        self.requests.lock().unwrap().push(request.clone());
        if let Some(delay) = self.delay {
            std::thread::sleep(delay);
        }
        self.responses
            .lock()
            .unwrap()
            .get(request.endpoint_name())
            .cloned()
            .unwrap_or_else(|| Ok(json!({})))
    }
}
