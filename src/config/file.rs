//! Configuration file loading and discovery.

use super::types::AppConfig;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Config file names searched in every candidate directory.
pub const CONFIG_FILE_NAMES: &[&str] = &[
    ".fair-audit.yaml",
    ".fair-audit.yml",
    "fair-audit.yaml",
    "fair-audit.yml",
];

/// Discover a config file by searching standard locations.
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Current directory
/// 3. Git repository root (if in a repo)
/// 4. User config directory (~/.config/fair-audit/)
/// 5. Home directory
#[must_use]
pub fn discover_config_file(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path
        && path.exists()
    {
        return Some(path.to_path_buf());
    }

    if let Ok(cwd) = std::env::current_dir()
        && let Some(path) = find_config_in_dir(&cwd)
    {
        return Some(path);
    }

    if let Some(git_root) = find_git_root()
        && let Some(path) = find_config_in_dir(&git_root)
    {
        return Some(path);
    }

    if let Some(path) = user_config_dir().and_then(|dir| find_config_in_dir(&dir)) {
        return Some(path);
    }

    dirs::home_dir().and_then(|home| find_config_in_dir(&home))
}

/// Per-user configuration directory.
#[must_use]
pub fn user_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("fair-audit"))
}

fn find_config_in_dir(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
}

/// Walk up from the working directory to the enclosing git checkout.
fn find_git_root() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    cwd.ancestors()
        .find(|dir| dir.join(".git").exists())
        .map(Path::to_path_buf)
}

/// Error type for config file operations.
#[derive(Debug, Error)]
pub enum ConfigFileError {
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_yaml_ng::Error),
}

/// Load an `AppConfig` from a YAML file.
pub fn load_config_file(path: &Path) -> Result<AppConfig, ConfigFileError> {
    if !path.exists() {
        return Err(ConfigFileError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    Ok(serde_yaml_ng::from_str(&content)?)
}

/// Load config from discovered file, or return default.
#[must_use]
pub fn load_or_default(explicit_path: Option<&Path>) -> (AppConfig, Option<PathBuf>) {
    discover_config_file(explicit_path).map_or_else(
        || (AppConfig::default(), None),
        |path| match load_config_file(&path) {
            Ok(config) => (config, Some(path)),
            Err(e) => {
                tracing::warn!("Failed to load config from {}: {}", path.display(), e);
                (AppConfig::default(), None)
            }
        },
    )
}

/// Commented example config, written by `config init`.
#[must_use]
pub fn generate_example_config() -> String {
    r"# fair-audit configuration
# Place this file at .fair-audit.yaml in your project root or
# ~/.config/fair-audit/fair-audit.yaml. Command-line flags override it.

catalog:
  # Audited when no URL is given on the command line
  # urls:
  #   - https://catalog.data.gov/dataset/street-names
  id_prefix: https://catalog.data.gov/dataset/

network:
  timeout_secs: 30

cache:
  # Defaults to the platform cache directory
  # dir: ./.fair-audit-cache

vocabulary:
  media_type_url: https://www.iana.org/assignments/media-types/media-types.xhtml
  licence_url: https://gitlab.com/european-data-portal/edp-vocabularies/-/raw/master/edp-licences-skos.rdf?inline=false

validation:
  enabled: true
  endpoint: https://data.europa.eu/api/mqa/shacl/validation/report

output:
  write_reports: true
  # csv, json or console
  format: csv
  report_dir: reports
  no_color: false

behavior:
  jobs: 1
  # min_score: 100
  quiet: false
"
    .to_string()
}
