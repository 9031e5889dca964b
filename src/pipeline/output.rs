//! Output handling for reports.

use crate::error::{AuditError, ErrorContext, Result};
use crate::reports::{DatasetReport, ReportGenerator};
use std::path::{Path, PathBuf};

/// Target for output - either stdout or a file
#[derive(Debug, Clone)]
pub enum OutputTarget {
    /// Write to stdout
    Stdout,
    /// Write to a file
    File(PathBuf),
}

impl OutputTarget {
    /// Create output target from optional path
    #[must_use]
    pub fn from_option(path: Option<PathBuf>) -> Self {
        path.map_or(Self::Stdout, Self::File)
    }
}

/// Determine if color should be used based on flags and environment
#[must_use]
pub fn should_use_color(no_color_flag: bool) -> bool {
    !no_color_flag && std::env::var("NO_COLOR").is_err()
}

/// Write output to the target (stdout or file)
pub fn write_output(content: &str, target: &OutputTarget) -> Result<()> {
    match target {
        OutputTarget::Stdout => {
            println!("{content}");
            Ok(())
        }
        OutputTarget::File(path) => {
            std::fs::write(path, content).map_err(|e| AuditError::io(path, e))?;
            tracing::info!("Written to {}", path.display());
            Ok(())
        }
    }
}

/// Render `report` with `reporter` into `<dir>/<id>.<ext>`.
pub fn write_report_file(
    dir: &Path,
    report: &DatasetReport,
    reporter: &dyn ReportGenerator,
) -> Result<PathBuf> {
    std::fs::create_dir_all(dir).map_err(|e| AuditError::io(dir, e))?;

    let path = dir.join(report.file_name(reporter.format()));
    let mut file = std::fs::File::create(&path).map_err(|e| AuditError::io(&path, e))?;
    reporter
        .write_report(report, &mut file)
        .with_context(|| path.display().to_string())?;

    tracing::debug!("Report written to {}", path.display());
    Ok(path)
}
