//! Downloaded dataset resources and their on-disk cache.

use crate::error::{AuditError, ErrorContext, FetchErrorKind, Result};
use crate::model::{url_digest, DatasetId};
use crate::transport::HttpTransport;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

static UNSAFE_FILE_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_-]").expect("static regex"));

/// Directory of raw resource files, one per (dataset, resource key).
///
/// File names are `<dataset id>_<key>` with every character outside
/// `[A-Za-z0-9_-]` replaced by `_`. Keys from [`resource_key`] carry the
/// resource URL digest, so distinct resources never share a path.
#[derive(Debug, Clone)]
pub struct ResourceCache {
    dir: PathBuf,
}

impl ResourceCache {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Cache path for the resource of `id` tagged with `format`.
    #[must_use]
    pub fn path(&self, id: &DatasetId, format: &str) -> PathBuf {
        let name = format!("{}_{}", id.as_str(), format);
        self.dir
            .join(UNSAFE_FILE_CHARS.replace_all(&name, "_").into_owned())
    }

    /// Cached bytes, if present.
    #[must_use]
    pub fn read(&self, id: &DatasetId, format: &str) -> Option<Vec<u8>> {
        fs::read(self.path(id, format)).ok()
    }

    pub fn write(&self, id: &DatasetId, format: &str, bytes: &[u8]) -> Result<PathBuf> {
        fs::create_dir_all(&self.dir).map_err(|e| AuditError::io(&self.dir, e))?;
        let path = self.path(id, format);
        fs::write(&path, bytes).map_err(|e| AuditError::io(&path, e))?;
        Ok(path)
    }
}

/// Cache key of the resource at `url` claiming format `tag`.
///
/// A cached file stays bound to the URL it was downloaded from, whatever
/// order the catalog lists its resources in.
#[must_use]
pub fn resource_key(tag: &str, url: &str) -> String {
    format!("{tag}_{}", url_digest(url))
}

/// Bytes of a dataset resource, read through the cache.
///
/// On a miss the URL is probed with HEAD first: a resource served as
/// `text/html` is a landing page rather than a data file and is rejected
/// before the body is downloaded. The GET must answer 200.
pub fn fetch_resource(
    transport: &dyn HttpTransport,
    cache: &ResourceCache,
    id: &DatasetId,
    format: &str,
    url: &str,
) -> Result<Vec<u8>> {
    if let Some(bytes) = cache.read(id, format) {
        tracing::debug!(
            "Using cached {} resource of {} ({})",
            format,
            id,
            readable_size(bytes.len() as u64)
        );
        return Ok(bytes);
    }

    let head = transport.head(url)?;
    if head.is_html() {
        let content_type = head.content_type.unwrap_or_default();
        return Err(AuditError::fetch(
            url,
            FetchErrorKind::NotADataFile(content_type),
        ));
    }

    let response = transport.get(url)?.require_ok(url)?;
    tracing::info!(
        "Downloaded {} ({})",
        url,
        readable_size(response.body.len() as u64)
    );

    if let Err(e) = cache
        .write(id, format, &response.body)
        .with_context(|| format!("caching {format} resource of {id}"))
    {
        tracing::warn!("{}", e);
    }
    Ok(response.body)
}

/// Byte count rendered with a binary unit suffix, e.g. `1.50 KB`.
#[must_use]
pub fn readable_size(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

    let mut size = bytes as f64;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }

    if unit == 0 {
        format!("{bytes} B")
    } else {
        format!("{size:.2} {}", UNITS[unit])
    }
}
