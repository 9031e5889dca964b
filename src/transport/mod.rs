//! HTTP access for every remote interaction of an audit.
//!
//! All network traffic goes through the [`HttpTransport`] trait so the
//! pipeline can run against the real [`ReqwestTransport`] (with the `remote`
//! feature), the [`OfflineTransport`] null object, or a test double.

mod offline;
#[cfg(feature = "remote")]
mod reqwest_client;

pub use offline::OfflineTransport;
#[cfg(feature = "remote")]
pub use reqwest_client::ReqwestTransport;

use crate::error::{AuditError, Result};
use std::time::Duration;

/// Default per-request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// A fully-read HTTP response.
#[derive(Debug, Clone, Default)]
pub struct HttpResponse {
    pub status: u16,
    /// Value of the `Content-Type` header, if any
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            content_type: None,
            body: body.into(),
        }
    }

    #[must_use]
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.status == 200
    }

    /// Whether the server declares an HTML document
    #[must_use]
    pub fn is_html(&self) -> bool {
        self.content_type
            .as_deref()
            .is_some_and(|ct| ct.trim_start().starts_with("text/html"))
    }

    /// Body decoded as UTF-8, replacing invalid sequences
    #[must_use]
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Turn any status other than 200 into an error.
    pub fn require_ok(self, url: &str) -> Result<Self> {
        if self.is_ok() {
            Ok(self)
        } else {
            Err(AuditError::http_status(url, self.status))
        }
    }
}

/// Blocking HTTP operations used by the auditor.
///
/// Implementations return `Ok` for every response that arrived, whatever its
/// status; `Err` is reserved for transport failures (DNS, TLS, timeout).
pub trait HttpTransport: Send + Sync {
    /// GET a URL and read the whole body.
    fn get(&self, url: &str) -> Result<HttpResponse>;

    /// HEAD a URL; the returned body is empty.
    fn head(&self, url: &str) -> Result<HttpResponse>;

    /// POST `body` with the given `Content-Type` header.
    fn post(&self, url: &str, content_type: &str, body: &[u8]) -> Result<HttpResponse>;

    /// Name of this transport, for logs
    fn name(&self) -> &'static str;
}

/// Create the default transport for this build.
///
/// Uses [`ReqwestTransport`] when the `remote` feature is enabled, otherwise
/// the [`OfflineTransport`] null object.
pub fn default_transport(timeout: Duration) -> Result<Box<dyn HttpTransport>> {
    #[cfg(feature = "remote")]
    {
        Ok(Box::new(ReqwestTransport::new(timeout)?))
    }
    #[cfg(not(feature = "remote"))]
    {
        let _ = timeout;
        Ok(Box::new(OfflineTransport))
    }
}
