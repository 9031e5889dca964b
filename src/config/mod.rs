//! Configuration for fair-audit.
//!
//! - Type-safe configuration structures with defaults
//! - Validation for all configuration values
//! - YAML config file loading and discovery
//!
//! # Configuration File
//!
//! Place a `.fair-audit.yaml` file in your project root or
//! `~/.config/fair-audit/`:
//!
//! ```yaml
//! behavior:
//!   jobs: 4
//!   min_score: 120
//! validation:
//!   enabled: false
//! output:
//!   format: json
//! ```

mod defaults;
pub mod file;
mod types;
mod validation;

pub use defaults::{
    CACHE_DIR_NAME, DEFAULT_CATALOG_URLS, DEFAULT_JOBS, DEFAULT_REPORT_DIR, DEFAULT_TIMEOUT_SECS,
};
pub use file::{
    discover_config_file, generate_example_config, load_config_file, load_or_default,
    user_config_dir, ConfigFileError, CONFIG_FILE_NAMES,
};
pub use types::{
    AppConfig, BehaviorConfig, CacheConfig, CatalogConfig, NetworkConfig, OutputConfig,
    ValidationConfig, VocabularyConfig,
};
pub use validation::{ConfigError, Validatable};

/// Generate a JSON Schema for the `AppConfig` configuration format.
///
/// The schema documents every option of `.fair-audit.yaml` and can be used
/// by editors for validation and autocompletion.
pub fn generate_json_schema() -> crate::error::Result<String> {
    let schema = schemars::schema_for!(AppConfig);
    Ok(serde_json::to_string_pretty(&schema)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_schema_lists_sections() {
        let schema = generate_json_schema().unwrap();
        for section in ["catalog", "network", "validation", "behavior"] {
            assert!(schema.contains(section), "{section}");
        }
    }
}
