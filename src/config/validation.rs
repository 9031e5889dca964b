//! Configuration validation for fair-audit.

use super::types::{
    AppConfig, BehaviorConfig, CatalogConfig, NetworkConfig, ValidationConfig, VocabularyConfig,
};
use url::Url;

/// Upper bound for concurrently audited datasets
const MAX_JOBS: usize = 64;

/// Upper bound for the per-request timeout, in seconds
const MAX_TIMEOUT_SECS: u64 = 600;

/// Error type for configuration validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl ConfigError {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

fn check_http_url(field: &str, value: &str) -> Option<ConfigError> {
    match Url::parse(value) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => None,
        Ok(url) => Some(ConfigError::new(
            field,
            format!("Unsupported scheme '{}' in {value}", url.scheme()),
        )),
        Err(e) => Some(ConfigError::new(field, format!("Invalid URL '{value}': {e}"))),
    }
}

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        errors.extend(self.catalog.validate());
        errors.extend(self.network.validate());
        errors.extend(self.vocabulary.validate());
        errors.extend(self.validation.validate());
        errors.extend(self.behavior.validate());
        errors
    }
}

impl Validatable for CatalogConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors: Vec<ConfigError> = self
            .urls
            .iter()
            .filter_map(|url| check_http_url("catalog.urls", url))
            .collect();
        if self.id_prefix.is_empty() {
            errors.push(ConfigError::new("catalog.id_prefix", "Must not be empty"));
        }
        errors
    }
}

impl Validatable for NetworkConfig {
    fn validate(&self) -> Vec<ConfigError> {
        if (1..=MAX_TIMEOUT_SECS).contains(&self.timeout_secs) {
            Vec::new()
        } else {
            vec![ConfigError::new(
                "network.timeout_secs",
                format!(
                    "Timeout must be between 1 and {MAX_TIMEOUT_SECS} seconds, got {}",
                    self.timeout_secs
                ),
            )]
        }
    }
}

impl Validatable for VocabularyConfig {
    fn validate(&self) -> Vec<ConfigError> {
        [
            check_http_url("vocabulary.media_type_url", &self.media_type_url),
            check_http_url("vocabulary.licence_url", &self.licence_url),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

impl Validatable for ValidationConfig {
    fn validate(&self) -> Vec<ConfigError> {
        if !self.enabled {
            return Vec::new();
        }
        check_http_url("validation.endpoint", &self.endpoint)
            .into_iter()
            .collect()
    }
}

impl Validatable for BehaviorConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if !(1..=MAX_JOBS).contains(&self.jobs) {
            errors.push(ConfigError::new(
                "behavior.jobs",
                format!("Jobs must be between 1 and {MAX_JOBS}, got {}", self.jobs),
            ));
        }
        if let Some(min_score) = self.min_score
            && min_score > 185
        {
            errors.push(ConfigError::new(
                "behavior.min_score",
                format!("No dataset can score above 185, got {min_score}"),
            ));
        }
        errors
    }
}
