//! Field extraction from catalog pages.
//!
//! Every function here is total: a missing element yields an explicit "not
//! found" value (`None`, empty list, `false`) and never an error.

use super::page::{CatalogPage, PageElement};
use crate::model::DownloadLink;
use indexmap::IndexSet;
use std::collections::BTreeSet;

/// Formats that describe a link rather than a downloadable resource
const EXCLUDED_FORMATS: &[&str] = &["Landing Page", "Esri REST"];

/// Labels under which catalogs publish license information
const LICENSE_LABELS: &[&str] = &["License", "License Url", "Licence", "Licence Url"];

/// Placeholder the catalog shows when no license was declared
const NO_LICENSE_SENTINEL: &str = "No license information was provided";

const FREE_TEXT_LICENSE_PREFIX: &str = "License:";

const RESOURCES_SECTION: &str = "section#dataset-resources";
const METADATA_SOURCE_SECTION: &str = "section#dataset-metadata-source";

/// Dataset title from the page heading.
pub fn find_title(page: &impl CatalogPage) -> Option<String> {
    page.find("h1[itemprop=name]")
        .map(|h| h.text().trim().to_string())
}

/// Value cell of the table row whose header cell reads `label`.
pub fn find_table_value(page: &impl CatalogPage, label: &str) -> Option<String> {
    let header = page.find_by_text("th", label)?;
    let row = header.parent()?;
    row.select("td")
        .into_iter()
        .next()
        .map(|cell| cell.text().trim().to_string())
}

/// License strings from every known labelling convention.
///
/// Non-empty hits are unioned and deduplicated; the "no license" placeholder
/// is dropped.
pub fn find_license(page: &impl CatalogPage) -> BTreeSet<String> {
    let mut licenses: Vec<String> = LICENSE_LABELS
        .iter()
        .filter_map(|label| {
            let value = find_table_value(page, label);
            tracing::trace!("{:<12} {:?}", label, value);
            value
        })
        .collect();

    if let Some(tag) = page.find_by_text("strong", FREE_TEXT_LICENSE_PREFIX)
        && let Some(container) = tag.parent()
    {
        let text = container.text();
        let text = text.trim();
        let value = text.strip_prefix(FREE_TEXT_LICENSE_PREFIX).unwrap_or(text);
        licenses.push(value.trim().to_string());
    }

    licenses
        .into_iter()
        .filter(|l| !l.is_empty() && !l.contains(NO_LICENSE_SENTINEL))
        .collect()
}

/// Value of the "Public Access Level" field.
pub fn find_access_restrictions(page: &impl CatalogPage) -> Option<String> {
    find_table_value(page, "Public Access Level")
}

/// Format badges inside `section`, first-appearance order, deduplicated.
fn format_labels(page: &impl CatalogPage, section: &str) -> Vec<String> {
    let Some(section) = page.find(section) else {
        return Vec::new();
    };

    section
        .select("span.format-label")
        .into_iter()
        .map(|span| span.text().trim().to_string())
        .collect::<IndexSet<_>>()
        .into_iter()
        .collect()
}

/// Declared resource formats, without link-only pseudo formats.
pub fn find_formats(page: &impl CatalogPage) -> Vec<String> {
    let mut formats = format_labels(page, RESOURCES_SECTION);
    formats.retain(|f| !EXCLUDED_FORMATS.contains(&f.as_str()));
    formats
}

/// Formats offered for the catalog's own metadata record (e.g. `Data.json`).
pub fn find_source_formats(page: &impl CatalogPage) -> Vec<String> {
    format_labels(page, METADATA_SOURCE_SECTION)
}

/// `href` of the "Download Metadata" link, as written on the page.
pub fn find_source_href(page: &impl CatalogPage) -> Option<String> {
    let section = page.find(METADATA_SOURCE_SECTION)?;
    section
        .select("a")
        .into_iter()
        .find(|a| a.text().trim() == "Download Metadata")
        .and_then(|a| a.attr("href"))
}

/// `(data-format, href)` of every download button in the resources section.
pub fn find_download_links(page: &impl CatalogPage) -> Vec<DownloadLink> {
    let Some(section) = page.find(RESOURCES_SECTION) else {
        return Vec::new();
    };

    section
        .select("i.fa.fa-download")
        .into_iter()
        .filter_map(|icon| icon.parent())
        .filter_map(|link| Some(DownloadLink::new(link.attr("data-format")?, link.attr("href")?)))
        .collect()
}

/// Whether the contact address is a real mailbox.
///
/// Addresses containing `no-reply` do not count as a contact point.
#[must_use]
pub fn is_noreply(address: &str) -> bool {
    address.contains("no-reply")
}

/// Whether the page names a usable contact point.
pub fn have_contact(page: &impl CatalogPage) -> bool {
    let Some(contact) = page.find("a[title=contact]") else {
        tracing::debug!("No contact element");
        return false;
    };
    match contact.attr("href") {
        Some(address) => !is_noreply(&address),
        None => false,
    }
}

/// Whether the page names a publisher.
pub fn have_publisher(page: &impl CatalogPage) -> bool {
    // Older catalog templates misspell the title attribute
    page.find("a[title=publisher], a[title=publsher]").is_some()
}
