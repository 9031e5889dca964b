//! Tabular profiling of a dataset's primary CSV resource.
//!
//! [`TableProfiler`] walks the download links of a dataset, tries every link
//! tagged `csv` in order and profiles the first one that decodes into a
//! non-empty [`Table`]. When none does the outcome is
//! [`ProfileOutcome::NoData`], which reports display as "no tabular data".

mod stats;
mod table;

pub use stats::profile_table;
pub use table::{Column, Table, NA_MARKERS};

use crate::model::{DatasetId, DownloadLink, ProfileOutcome};
use crate::resources::{fetch_resource, resource_key, ResourceCache};
use crate::transport::HttpTransport;

/// Format tag of the only resources that are profiled
pub const PROFILED_FORMAT: &str = "csv";

pub struct TableProfiler<'a> {
    transport: &'a dyn HttpTransport,
    cache: &'a ResourceCache,
}

impl<'a> TableProfiler<'a> {
    pub fn new(transport: &'a dyn HttpTransport, cache: &'a ResourceCache) -> Self {
        Self { transport, cache }
    }

    /// Profile the first usable CSV resource among `links`.
    pub fn profile_resources(&self, id: &DatasetId, links: &[DownloadLink]) -> ProfileOutcome {
        let candidates = links
            .iter()
            .filter(|link| link.format.eq_ignore_ascii_case(PROFILED_FORMAT));

        for link in candidates {
            let key = resource_key(&link.format.to_ascii_lowercase(), &link.url);
            let bytes = match fetch_resource(self.transport, self.cache, id, &key, &link.url) {
                Ok(bytes) => bytes,
                Err(e) => {
                    tracing::debug!("{}: skipping {}: {}", id, link.url, e);
                    continue;
                }
            };

            match Table::from_csv(&bytes) {
                Ok(table) if !table.is_empty() => {
                    tracing::debug!(
                        "{}: profiling {} ({} rows, {} columns)",
                        id,
                        link.url,
                        table.row_count,
                        table.column_count()
                    );
                    return ProfileOutcome::Profiled(profile_table(&table));
                }
                Ok(_) => tracing::debug!("{}: {} holds no rows", id, link.url),
                Err(e) => tracing::warn!("{}: cannot read {}: {}", id, link.url, e),
            }
        }

        tracing::info!("{}: no tabular resource to profile", id);
        ProfileOutcome::NoData
    }
}
