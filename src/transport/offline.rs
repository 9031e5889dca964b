//! Transport that never touches the network.

use super::{HttpResponse, HttpTransport};
use crate::error::{AuditError, FetchErrorKind, Result};

/// A transport that fails every request.
///
/// Null object used when the crate is built without the `remote` feature.
/// Every stage degrades the way it would on a network outage: vocabularies
/// are served from cache or left empty, checks that need remote data fail.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineTransport;

impl OfflineTransport {
    fn refuse(url: &str) -> AuditError {
        AuditError::fetch(url, FetchErrorKind::RemoteDisabled)
    }
}

impl HttpTransport for OfflineTransport {
    fn get(&self, url: &str) -> Result<HttpResponse> {
        Err(Self::refuse(url))
    }

    fn head(&self, url: &str) -> Result<HttpResponse> {
        Err(Self::refuse(url))
    }

    fn post(&self, url: &str, _content_type: &str, _body: &[u8]) -> Result<HttpResponse> {
        Err(Self::refuse(url))
    }

    fn name(&self) -> &'static str {
        "offline"
    }
}
