//! Blocking `reqwest` implementation of [`HttpTransport`].

use super::{HttpResponse, HttpTransport};
use crate::error::{AuditError, Result};
use reqwest::blocking::{Client, Response};
use reqwest::header::CONTENT_TYPE;
use std::time::Duration;

/// HTTP transport backed by a shared blocking `reqwest` client.
pub struct ReqwestTransport {
    client: Client,
}

/// Helper to convert reqwest errors to fetch errors
fn network_error(url: &str, err: &reqwest::Error) -> AuditError {
    AuditError::network(url, err.to_string())
}

impl ReqwestTransport {
    /// Create a transport whose requests are bounded by `timeout`.
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .map_err(|e| network_error("building HTTP client", &e))?;

        Ok(Self { client })
    }

    fn read(url: &str, response: Response) -> Result<HttpResponse> {
        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response
            .bytes()
            .map_err(|e| network_error(url, &e))?
            .to_vec();

        tracing::debug!("{} -> {} ({} bytes)", url, status, body.len());
        Ok(HttpResponse {
            status,
            content_type,
            body,
        })
    }
}

impl HttpTransport for ReqwestTransport {
    fn get(&self, url: &str) -> Result<HttpResponse> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| network_error(url, &e))?;
        Self::read(url, response)
    }

    fn head(&self, url: &str) -> Result<HttpResponse> {
        let response = self
            .client
            .head(url)
            .send()
            .map_err(|e| network_error(url, &e))?;
        Self::read(url, response)
    }

    fn post(&self, url: &str, content_type: &str, body: &[u8]) -> Result<HttpResponse> {
        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, content_type)
            .body(body.to_vec())
            .send()
            .map_err(|e| network_error(url, &e))?;
        Self::read(url, response)
    }

    fn name(&self) -> &'static str {
        "reqwest"
    }
}
