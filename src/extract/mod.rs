//! Signal extraction from catalog pages.
//!
//! [`MetadataExtractor`] turns one parsed catalog page into
//! [`DatasetSignals`]. The individual field lookups are public so callers can
//! probe a single field, and they all work against the [`CatalogPage`] trait
//! rather than a concrete HTML parser.

mod extractor;
mod metadata_source;
mod page;

pub use extractor::{
    find_access_restrictions, find_download_links, find_formats, find_license,
    find_source_formats, find_source_href, find_table_value, find_title, have_contact,
    have_publisher, is_noreply,
};
pub use metadata_source::{
    find_media_types, resolve_source_url, Distribution, MetadataDocument, METADATA_EXPORT_FORMAT,
};
pub use page::{CatalogPage, HtmlElement, HtmlPage, PageElement};

use crate::model::DatasetSignals;
use crate::transport::HttpTransport;

/// Extracts [`DatasetSignals`] from catalog pages.
///
/// The transport is only used for the secondary `data.json` record.
pub struct MetadataExtractor<'a> {
    transport: &'a dyn HttpTransport,
}

impl<'a> MetadataExtractor<'a> {
    pub fn new(transport: &'a dyn HttpTransport) -> Self {
        Self { transport }
    }

    /// Extract every signal from `page`, which was served from `page_url`.
    pub fn extract(&self, page: &impl CatalogPage, page_url: &str) -> DatasetSignals {
        let (media_types, media_downloads) = find_media_types(self.transport, page, page_url);

        let signals = DatasetSignals {
            title: find_title(page),
            formats: find_formats(page),
            media_types,
            media_downloads,
            licenses: find_license(page),
            access_level: find_access_restrictions(page),
            has_contact: have_contact(page),
            has_publisher: have_publisher(page),
            download_links: find_download_links(page),
        };

        tracing::debug!(
            "Extracted {} formats, {} media types, {} licenses, {} download links from {}",
            signals.formats.len(),
            signals.media_types.len(),
            signals.licenses.len(),
            signals.download_links.len(),
            page_url
        );
        signals
    }
}
