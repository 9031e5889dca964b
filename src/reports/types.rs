//! Report type definitions.

use crate::model::{DatasetId, DatasetSignals, ProfileOutcome};
use crate::quality::QualityReport;
use crate::validation::ComplianceOutcome;
use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// File format of the per-dataset report
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Spreadsheet-style grid for spreadsheet import
    #[default]
    Csv,
    /// Structured JSON output
    Json,
    /// The console rendering, without colors
    Console,
}

impl ReportFormat {
    /// File extension for reports of this format
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Console => "txt",
        }
    }
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Csv => write!(f, "csv"),
            Self::Json => write!(f, "json"),
            Self::Console => write!(f, "console"),
        }
    }
}

/// Everything known about one audited dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetReport {
    /// Catalog page the dataset was read from
    pub url: String,
    pub id: DatasetId,
    pub signals: DatasetSignals,
    pub quality: QualityReport,
    pub compliance: ComplianceOutcome,
    pub profile: ProfileOutcome,
}

impl DatasetReport {
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.signals.title.as_deref()
    }

    /// Report file name for this dataset, e.g. `street-names.csv`.
    ///
    /// Datasets without a catalog id are told apart by a page URL digest.
    #[must_use]
    pub fn file_name(&self, format: ReportFormat) -> String {
        format!("{}.{}", self.id.file_stem(&self.url), format.extension())
    }
}
