//! The `data.json` metadata record linked from a catalog page.

use super::extractor::{find_source_formats, find_source_href};
use super::page::CatalogPage;
use crate::error::{AuditError, ErrorContext, ParseErrorKind, Result};
use crate::model::MediaDownload;
use crate::transport::HttpTransport;
use serde::Deserialize;
use url::Url;

/// Source format under which catalogs export the machine-readable record
pub const METADATA_EXPORT_FORMAT: &str = "Data.json";

/// Subset of a DCAT-US `data.json` record; every field may be absent.
#[derive(Debug, Default, Deserialize)]
pub struct MetadataDocument {
    #[serde(default)]
    pub distribution: Vec<Distribution>,
}

/// One entry of the `distribution` array.
#[derive(Debug, Default, Deserialize)]
pub struct Distribution {
    #[serde(rename = "mediaType", default)]
    pub media_type: Option<String>,
    #[serde(rename = "downloadURL", default)]
    pub download_url: Option<String>,
}

impl MetadataDocument {
    pub fn from_json(bytes: &[u8]) -> Result<Self> {
        serde_json::from_slice::<Self>(bytes).context("data.json")
    }

    /// Declared media types, in distribution order.
    #[must_use]
    pub fn media_types(&self) -> Vec<String> {
        self.distribution
            .iter()
            .filter_map(|d| d.media_type.clone())
            .collect()
    }

    /// Distributions that declare both a media type and a download URL.
    #[must_use]
    pub fn media_downloads(&self) -> Vec<MediaDownload> {
        self.distribution
            .iter()
            .filter_map(|d| {
                Some(MediaDownload::new(
                    d.media_type.clone()?,
                    d.download_url.clone()?,
                ))
            })
            .collect()
    }
}

/// Absolute URL of the metadata record, resolved against the page URL.
pub fn resolve_source_url(page: &impl CatalogPage, page_url: &str) -> Option<String> {
    let href = find_source_href(page)?;
    match Url::parse(page_url).and_then(|base| base.join(&href)) {
        Ok(url) => Some(url.to_string()),
        Err(e) => {
            tracing::debug!("Cannot resolve metadata link {:?}: {}", href, e);
            None
        }
    }
}

fn fetch_document(transport: &dyn HttpTransport, url: &str) -> Result<MetadataDocument> {
    let response = transport.get(url)?.require_ok(url)?;
    if response.body.is_empty() {
        return Err(AuditError::parse(
            url,
            ParseErrorKind::InvalidJson("empty body".to_string()),
        ));
    }
    MetadataDocument::from_json(&response.body).context(url)
}

/// Media types and (media type, download URL) pairs of a dataset.
///
/// Only attempted when the page offers a `Data.json` export. A missing
/// export, a failed fetch or a malformed record all yield empty results.
pub fn find_media_types(
    transport: &dyn HttpTransport,
    page: &impl CatalogPage,
    page_url: &str,
) -> (Vec<String>, Vec<MediaDownload>) {
    let has_export = find_source_formats(page)
        .iter()
        .any(|f| f == METADATA_EXPORT_FORMAT);
    if !has_export {
        tracing::debug!("No {} export on {}", METADATA_EXPORT_FORMAT, page_url);
        return (Vec::new(), Vec::new());
    }

    let Some(url) = resolve_source_url(page, page_url) else {
        return (Vec::new(), Vec::new());
    };

    match fetch_document(transport, &url) {
        Ok(doc) => (doc.media_types(), doc.media_downloads()),
        Err(e) => {
            tracing::warn!("Ignoring metadata record: {}", e);
            (Vec::new(), Vec::new())
        }
    }
}
