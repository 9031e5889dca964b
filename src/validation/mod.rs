//! DCAT-AP conformance checking through the EU Data Portal SHACL service.
//!
//! Each (media type, download URL) pair of a dataset is downloaded through
//! the [`ResourceCache`] and posted to the validation endpoint with the
//! declared media type as `Content-Type`. The first failing pair decides the
//! outcome and the remaining pairs are never posted.

mod outcome;

pub use outcome::{ComplianceOutcome, FailureReason};

use crate::error::AuditError;
use crate::model::{DatasetId, MediaDownload};
use crate::resources::{fetch_resource, readable_size, resource_key, ResourceCache};
use crate::transport::HttpTransport;

/// Default SHACL validation endpoint
pub const DCAT_AP_VALIDATION_ENDPOINT: &str =
    "https://data.europa.eu/api/mqa/shacl/validation/report";

/// Status the endpoint answers for a document that violates the shapes
const REJECTED_STATUS: u16 = 400;

/// Validator for the media-type/download pairs of one dataset.
pub struct DcatApValidator<'a> {
    transport: &'a dyn HttpTransport,
    cache: &'a ResourceCache,
    endpoint: String,
    enabled: bool,
}

impl<'a> DcatApValidator<'a> {
    pub fn new(transport: &'a dyn HttpTransport, cache: &'a ResourceCache) -> Self {
        Self {
            transport,
            cache,
            endpoint: DCAT_AP_VALIDATION_ENDPOINT.to_string(),
            enabled: true,
        }
    }

    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// A disabled validator reports every dataset as untested.
    #[must_use]
    pub const fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Validate every pair in order, stopping at the first failure.
    pub fn validate(&self, id: &DatasetId, pairs: &[MediaDownload]) -> ComplianceOutcome {
        if !self.enabled {
            tracing::debug!("DCAT-AP validation disabled, skipping {}", id);
            return ComplianceOutcome::Untested;
        }
        if pairs.is_empty() {
            tracing::info!("{}: no media type with a download URL to validate", id);
            return ComplianceOutcome::Untested;
        }

        for pair in pairs {
            if let Err(reason) = self.validate_pair(id, pair) {
                tracing::warn!(
                    "{}: DCAT-AP check failed for {} ({}): {}",
                    id,
                    pair.media_type,
                    pair.url,
                    reason
                );
                return ComplianceOutcome::Failed {
                    media_type: pair.media_type.clone(),
                    url: pair.url.clone(),
                    reason,
                };
            }
        }

        ComplianceOutcome::Passed {
            resources: pairs.len(),
        }
    }

    fn validate_pair(&self, id: &DatasetId, pair: &MediaDownload) -> Result<(), FailureReason> {
        let key = resource_key(&pair.media_type, &pair.url);
        let bytes = fetch_resource(self.transport, self.cache, id, &key, &pair.url)
            .map_err(|e| FailureReason::Download(e.to_string()))?;
        if bytes.is_empty() {
            return Err(FailureReason::Download("empty body".to_string()));
        }

        let response = self
            .transport
            .post(&self.endpoint, &pair.media_type, &bytes)
            .map_err(|e: AuditError| FailureReason::Network(e.to_string()))?;

        match response.status {
            200 => {
                tracing::info!(
                    "{}: {} passed DCAT-AP validation [{}]",
                    id,
                    pair.media_type,
                    readable_size(bytes.len() as u64)
                );
                Ok(())
            }
            REJECTED_STATUS => Err(FailureReason::Rejected(response.text())),
            status => Err(FailureReason::UnexpectedStatus(status)),
        }
    }
}
