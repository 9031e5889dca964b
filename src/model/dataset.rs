//! Dataset identifiers derived from catalog URLs.

use serde::{Deserialize, Serialize};
use std::fmt;
use xxhash_rust::xxh3::xxh3_64;

/// Path prefix of dataset pages on the US federal open-data catalog.
pub const DEFAULT_CATALOG_PREFIX: &str = "https://catalog.data.gov/dataset/";

/// Identifier used when a URL does not have the catalog dataset shape.
pub const FALLBACK_DATASET_ID: &str = "temp";

/// Stable identifier of a dataset, used as cache key and report file name.
///
/// Derived deterministically from the catalog page URL: the part after the
/// catalog prefix, or [`FALLBACK_DATASET_ID`] when the prefix is absent.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DatasetId(String);

impl DatasetId {
    /// Derive the identifier using the default data.gov prefix.
    #[must_use]
    pub fn from_catalog_url(url: &str) -> Self {
        Self::from_url(url, DEFAULT_CATALOG_PREFIX)
    }

    /// Derive the identifier from `url` given a catalog path prefix.
    #[must_use]
    pub fn from_url(url: &str, prefix: &str) -> Self {
        let suffix = url
            .find(prefix)
            .map(|pos| &url[pos + prefix.len()..])
            .map(|rest| rest.trim_end_matches('/'))
            .filter(|rest| !rest.is_empty());

        match suffix {
            // Slugs never contain separators, but the id ends up in file names
            Some(rest) => Self(rest.replace(['/', '\\'], "_")),
            None => Self(FALLBACK_DATASET_ID.to_string()),
        }
    }

    /// Whether derivation fell back to the placeholder identifier
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        self.0 == FALLBACK_DATASET_ID
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// File-name stem for the artifacts of the dataset at `page_url`.
    ///
    /// Every non-catalog URL shares the fallback id, so the stem then carries
    /// a digest of the page URL.
    #[must_use]
    pub fn file_stem(&self, page_url: &str) -> String {
        if self.is_fallback() {
            format!("{}-{}", self.0, url_digest(page_url))
        } else {
            self.0.clone()
        }
    }
}

/// Stable 16-hex-digit digest of a URL.
#[must_use]
pub fn url_digest(url: &str) -> String {
    format!("{:016x}", xxh3_64(url.as_bytes()))
}

impl fmt::Display for DatasetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for DatasetId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
