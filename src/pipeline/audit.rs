//! Audit of a single catalog page.

use crate::error::{ErrorContext, Result};
use crate::extract::{HtmlPage, MetadataExtractor};
use crate::model::DatasetId;
use crate::profile::TableProfiler;
use crate::quality::ScoringEngine;
use crate::reports::DatasetReport;
use crate::resources::ResourceCache;
use crate::transport::HttpTransport;
use crate::validation::{DcatApValidator, DCAT_AP_VALIDATION_ENDPOINT};
use crate::vocabulary::Vocabularies;

/// Shared, read-only state of an audit run.
///
/// One context serves every dataset of a batch; it is `Sync` so workers can
/// share it.
pub struct AuditContext<'a> {
    pub transport: &'a dyn HttpTransport,
    pub vocabularies: &'a Vocabularies,
    pub resources: ResourceCache,
    /// URL prefix in front of the dataset identifier
    pub id_prefix: String,
    pub validation_enabled: bool,
    pub validation_endpoint: String,
}

impl<'a> AuditContext<'a> {
    pub fn new(
        transport: &'a dyn HttpTransport,
        vocabularies: &'a Vocabularies,
        resources: ResourceCache,
    ) -> Self {
        Self {
            transport,
            vocabularies,
            resources,
            id_prefix: crate::model::DEFAULT_CATALOG_PREFIX.to_string(),
            validation_enabled: true,
            validation_endpoint: DCAT_AP_VALIDATION_ENDPOINT.to_string(),
        }
    }

    #[must_use]
    pub fn with_id_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.id_prefix = prefix.into();
        self
    }

    #[must_use]
    pub fn with_validation(mut self, enabled: bool, endpoint: impl Into<String>) -> Self {
        self.validation_enabled = enabled;
        self.validation_endpoint = endpoint.into();
        self
    }

    fn validator(&self) -> DcatApValidator<'_> {
        DcatApValidator::new(self.transport, &self.resources)
            .with_endpoint(self.validation_endpoint.clone())
            .enabled(self.validation_enabled)
    }
}

/// Audit one catalog page.
///
/// Only the page fetch itself can fail; every later stage degrades to an
/// absent signal, an untested compliance or a `NoData` profile.
pub fn audit_dataset(ctx: &AuditContext<'_>, url: &str) -> Result<DatasetReport> {
    let id = DatasetId::from_url(url, &ctx.id_prefix);
    if id.is_fallback() {
        tracing::warn!("{} is not a catalog dataset URL, using id {:?}", url, id.as_str());
    }

    let response = ctx
        .transport
        .get(url)
        .and_then(|r| r.require_ok(url))
        .context("fetching catalog page")?;
    let page = HtmlPage::parse(&response.text());

    let signals = MetadataExtractor::new(ctx.transport).extract(&page, url);
    let compliance = ctx.validator().validate(&id, &signals.media_downloads);
    let quality = ScoringEngine::new().score(&signals, ctx.vocabularies, &compliance);
    let profile = TableProfiler::new(ctx.transport, &ctx.resources)
        .profile_resources(&id, &signals.download_links);

    tracing::info!(
        "{}: interoperability {}, reusability {}, total {}",
        id,
        quality.interoperability.points,
        quality.reusability.points,
        quality.total
    );

    Ok(DatasetReport {
        url: url.to_string(),
        id,
        signals,
        quality,
        compliance,
        profile,
    })
}
