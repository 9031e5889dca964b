//! JSON report generator.

use super::{DatasetReport, ReportError, ReportFormat, ReportGenerator};
use chrono::Utc;
use serde::Serialize;

#[derive(Serialize)]
struct JsonReport<'a> {
    tool: ToolInfo,
    generated_at: String,
    #[serde(flatten)]
    report: &'a DatasetReport,
    total: u32,
    max_total: u32,
}

#[derive(Serialize)]
struct ToolInfo {
    name: &'static str,
    version: &'static str,
}

/// JSON report generator
pub struct JsonReporter {
    /// Pretty print output
    pretty: bool,
}

impl JsonReporter {
    /// Create a new JSON reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { pretty: true }
    }

    /// Set pretty printing
    #[must_use]
    pub const fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for JsonReporter {
    fn generate(&self, report: &DatasetReport) -> Result<String, ReportError> {
        let document = JsonReport {
            tool: ToolInfo {
                name: env!("CARGO_PKG_NAME"),
                version: env!("CARGO_PKG_VERSION"),
            },
            generated_at: Utc::now().to_rfc3339(),
            report,
            total: report.quality.total,
            max_total: report.quality.max_total(),
        };

        let json = if self.pretty {
            serde_json::to_string_pretty(&document)?
        } else {
            serde_json::to_string(&document)?
        };
        Ok(json)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ProfileOutcome;
    use crate::reports::fixtures;

    #[test]
    fn test_json_shape() {
        let report = fixtures::report(ProfileOutcome::Profiled(fixtures::profile()));
        let json = JsonReporter::new().pretty(false).generate(&report).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["tool"]["name"], "fair-audit");
        assert_eq!(value["id"], "street-names");
        assert_eq!(value["total"], 125);
        assert_eq!(value["max_total"], 185);
        assert_eq!(value["compliance"]["status"], "untested");
        assert_eq!(value["profile"]["status"], "profiled");
        assert_eq!(value["profile"]["columns"][1]["stats"]["kind"], "non_numeric");
        assert_eq!(value["quality"]["interoperability"]["points"], 60);
    }

    #[test]
    fn test_no_data_profile() {
        let report = fixtures::report(ProfileOutcome::NoData);
        let json = JsonReporter::new().generate(&report).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["profile"]["status"], "no_data");
    }
}
