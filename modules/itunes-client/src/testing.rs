//! Test doubles for the transport and connectivity seams.
//!
//! `MockTransport` maps a URL to a canned (status, body) response and records
//! every request it serves, so tests can assert on the exact URL and header
//! set without touching the network. `FixedProbe` forces the connectivity
//! branch either way.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::connectivity::ConnectivityProbe;
use crate::error::{Result, SearchError};
use crate::transport::{RawResponse, Transport};

/// One request as seen by `MockTransport`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
}

/// HashMap-based transport. Returns `Err` for unregistered URLs unless a
/// fallback is set. Builder pattern: `.on_get()`, `.on_any()`.
pub struct MockTransport {
    responses: HashMap<String, RawResponse>,
    fallback: Option<RawResponse>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self {
            responses: HashMap::new(),
            fallback: None,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Canned response for an exact URL.
    pub fn on_get(mut self, url: &str, status: u16, body: &str) -> Self {
        self.responses.insert(
            url.to_string(),
            RawResponse {
                status,
                body: body.as_bytes().to_vec(),
            },
        );
        self
    }

    /// Canned response for any URL without a dedicated mapping.
    pub fn on_any(mut self, status: u16, body: &str) -> Self {
        self.fallback = Some(RawResponse {
            status,
            body: body.as_bytes().to_vec(),
        });
        self
    }

    /// Every request served so far, in order.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn get(&self, url: &str, headers: &[(&str, &str)]) -> Result<RawResponse> {
        self.requests.lock().unwrap().push(RecordedRequest {
            url: url.to_string(),
            headers: headers
                .iter()
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect(),
        });

        if let Some(resp) = self.responses.get(url) {
            return Ok(resp.clone());
        }
        if let Some(resp) = &self.fallback {
            return Ok(resp.clone());
        }
        Err(SearchError::Network(format!(
            "no mock response registered for {url}"
        )))
    }
}

/// Probe with a fixed answer. `FixedProbe(false)` forces the offline branch.
pub struct FixedProbe(pub bool);

impl ConnectivityProbe for FixedProbe {
    fn is_reachable(&self) -> bool {
        self.0
    }
}
