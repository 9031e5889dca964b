//! Report generation for audited datasets.
//!
//! Three renderings of a [`DatasetReport`] are provided, each of which can
//! also be written to the report directory:
//! - Console: human-readable rubric, scores and column table
//! - Spreadsheet: a fixed cell grid written as CSV, one file per dataset
//! - JSON: the full report for programmatic use

mod console;
mod json;
mod spreadsheet;
mod types;

pub use console::ConsoleReporter;
pub use json::JsonReporter;
pub use spreadsheet::{SpreadsheetReporter, SPREADSHEET_LABELS};
pub use types::{DatasetReport, ReportFormat};

use std::io::Write;
use thiserror::Error;

/// Errors that can occur during report generation
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Format error: {0}")]
    FormatError(#[from] std::fmt::Error),
}

impl From<csv::Error> for ReportError {
    fn from(err: csv::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

impl From<serde_json::Error> for ReportError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Render the report of one dataset
    fn generate(&self, report: &DatasetReport) -> Result<String, ReportError>;

    /// Write the rendered report to a writer
    fn write_report(
        &self,
        report: &DatasetReport,
        writer: &mut dyn Write,
    ) -> Result<(), ReportError> {
        let content = self.generate(report)?;
        writer.write_all(content.as_bytes())?;
        Ok(())
    }

    /// Get the format this generator produces
    fn format(&self) -> ReportFormat;
}

/// File reporter for `format`.
#[must_use]
pub fn create_reporter(format: ReportFormat) -> Box<dyn ReportGenerator + Send + Sync> {
    match format {
        ReportFormat::Csv => Box::new(SpreadsheetReporter::new()),
        ReportFormat::Json => Box::new(JsonReporter::new()),
        ReportFormat::Console => Box::new(ConsoleReporter::new().no_color()),
    }
}
