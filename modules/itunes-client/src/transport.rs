//! Raw HTTP transport seam.
//!
//! `Transport` performs one asynchronous GET per call and resolves exactly
//! once with status and body bytes. No retry, no cancellation; timeout policy
//! is whatever the underlying client defaults to. The trait boundary lets
//! tests run the full search path against `testing::MockTransport` without
//! touching the network.

use async_trait::async_trait;

use crate::error::Result;

/// A raw HTTP response: status code plus body bytes.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

#[async_trait]
pub trait Transport: Send + Sync {
    /// Issue one GET with the given headers. Opens one connection per call.
    async fn get(&self, url: &str, headers: &[(&str, &str)]) -> Result<RawResponse>;
}

/// reqwest-backed transport.
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &str, headers: &[(&str, &str)]) -> Result<RawResponse> {
        let mut request = self.client.get(url);
        for (name, value) in headers {
            request = request.header(*name, *value);
        }

        let resp = request.send().await?;
        let status = resp.status().as_u16();
        let body = resp.bytes().await?.to_vec();

        Ok(RawResponse { status, body })
    }
}
