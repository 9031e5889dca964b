//! Raw quality signals extracted from a catalog page.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A media type declared in the metadata document together with the URL
/// of the distribution it describes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaDownload {
    pub media_type: String,
    pub url: String,
}

impl MediaDownload {
    pub fn new(media_type: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            media_type: media_type.into(),
            url: url.into(),
        }
    }
}

/// A downloadable resource listed on the page, tagged with the format the
/// catalog claims for it (`data-format` attribute, e.g. `csv`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadLink {
    pub format: String,
    pub url: String,
}

impl DownloadLink {
    pub fn new(format: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            format: format.into(),
            url: url.into(),
        }
    }
}

/// Everything the scorer and the downstream stages need from one page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetSignals {
    /// Dataset title, informational only
    pub title: Option<String>,
    /// Declared resource formats, first-appearance order, deduplicated
    pub formats: Vec<String>,
    /// Media types from the `data.json` distribution list
    pub media_types: Vec<String>,
    /// Distributions that declare both a media type and a download URL
    pub media_downloads: Vec<MediaDownload>,
    /// License strings found under any of the known labels
    pub licenses: BTreeSet<String>,
    /// Value of the "Public Access Level" field
    pub access_level: Option<String>,
    pub has_contact: bool,
    pub has_publisher: bool,
    pub download_links: Vec<DownloadLink>,
}
