//! Configuration types for fair-audit.

use super::defaults::{CACHE_DIR_NAME, DEFAULT_JOBS, DEFAULT_REPORT_DIR, DEFAULT_TIMEOUT_SECS};
use crate::model::DEFAULT_CATALOG_PREFIX;
use crate::reports::ReportFormat;
use crate::validation::DCAT_AP_VALIDATION_ENDPOINT;
use crate::vocabulary::{VocabularySources, LICENCE_VOCABULARY_URL, MEDIA_TYPE_REGISTRY_URL};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Application configuration.
///
/// Loaded from a `.fair-audit.yaml` file; command-line flags override the
/// file values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Which datasets to audit and how to identify them
    pub catalog: CatalogConfig,
    /// HTTP settings
    pub network: NetworkConfig,
    /// On-disk cache for vocabularies and downloaded resources
    pub cache: CacheConfig,
    /// Vocabulary sources
    pub vocabulary: VocabularyConfig,
    /// DCAT-AP validation service
    pub validation: ValidationConfig,
    /// Report files and console output
    pub output: OutputConfig,
    /// Run behavior
    pub behavior: BehaviorConfig,
}

impl AppConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Root of the cache, the configured directory or the platform default.
    #[must_use]
    pub fn cache_dir(&self) -> PathBuf {
        self.cache.dir.clone().unwrap_or_else(|| {
            dirs::cache_dir()
                .unwrap_or_else(|| PathBuf::from(".cache"))
                .join(CACHE_DIR_NAME)
        })
    }

    #[must_use]
    pub fn vocabulary_dir(&self) -> PathBuf {
        self.cache_dir().join("vocabularies")
    }

    #[must_use]
    pub fn resource_dir(&self) -> PathBuf {
        self.cache_dir().join("resources")
    }

    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.network.timeout_secs)
    }

    #[must_use]
    pub fn vocabulary_sources(&self) -> VocabularySources {
        VocabularySources {
            media_type_url: self.vocabulary.media_type_url.clone(),
            licence_url: self.vocabulary.licence_url.clone(),
        }
    }
}

/// Dataset selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct CatalogConfig {
    /// Catalog page URLs audited when none are given on the command line
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub urls: Vec<String>,
    /// URL prefix in front of the dataset identifier
    pub id_prefix: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            urls: Vec::new(),
            id_prefix: DEFAULT_CATALOG_PREFIX.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct NetworkConfig {
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct CacheConfig {
    /// Cache root (defaults to the platform cache directory)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct VocabularyConfig {
    /// Registry page listing media types
    pub media_type_url: String,
    /// SKOS RDF/XML licence list
    pub licence_url: String,
}

impl Default for VocabularyConfig {
    fn default() -> Self {
        Self {
            media_type_url: MEDIA_TYPE_REGISTRY_URL.to_string(),
            licence_url: LICENCE_VOCABULARY_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ValidationConfig {
    /// Submit resources to the validation service
    pub enabled: bool,
    /// SHACL validation endpoint
    pub endpoint: String,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            endpoint: DCAT_AP_VALIDATION_ENDPOINT.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    /// Write one report file per dataset
    pub write_reports: bool,
    /// Report file format
    pub format: ReportFormat,
    /// Directory receiving the report files
    pub report_dir: PathBuf,
    /// Disable colored console output
    pub no_color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            write_reports: true,
            format: ReportFormat::default(),
            report_dir: PathBuf::from(DEFAULT_REPORT_DIR),
            no_color: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Datasets audited concurrently
    pub jobs: usize,
    /// Exit with code 2 when a dataset scores below this total
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_score: Option<u32>,
    /// Suppress the console report
    pub quiet: bool,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            jobs: DEFAULT_JOBS,
            min_score: None,
            quiet: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.behavior.jobs, 1);
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert!(config.validation.enabled);
        assert_eq!(config.output.report_dir, PathBuf::from("reports"));
        assert_eq!(config.output.format, ReportFormat::Csv);
    }

    #[test]
    fn test_cache_layout() {
        let config = AppConfig {
            cache: CacheConfig {
                dir: Some(PathBuf::from("/tmp/fa")),
            },
            ..Default::default()
        };
        assert_eq!(config.vocabulary_dir(), PathBuf::from("/tmp/fa/vocabularies"));
        assert_eq!(config.resource_dir(), PathBuf::from("/tmp/fa/resources"));
    }

    #[test]
    fn test_default_cache_dir_is_namespaced() {
        assert!(AppConfig::default().cache_dir().ends_with("fair-audit"));
    }
}
