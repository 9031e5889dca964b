//! Spreadsheet report generator.
//!
//! Lays the report out as a fixed cell grid and writes it as CSV:
//!
//! | row      | content                                                   |
//! |----------|-----------------------------------------------------------|
//! | 1        | the 15 labels (12 checks, rating, row and column count)   |
//! | 2        | `+`/`-` per check, total score, rows, columns             |
//! | 6        | column statistics header                                  |
//! | 7..      | one row per profiled column                               |
//! | 9 + n    | `link` and the catalog URL (n = table rows)               |

use super::{DatasetReport, ReportError, ReportFormat, ReportGenerator};
use crate::model::ProfileOutcome;

/// Header of row 1
pub const SPREADSHEET_LABELS: [&str; 15] = [
    "Format",
    "Media_type",
    "Format_Media_type_from_vocabulary",
    "Non_proprietary",
    "Machine_readable",
    "DCATAP_compliance",
    "License_information",
    "License_vocabulary",
    "Access_restrictions",
    "Access_restrictions_vocabulary",
    "Contact_point",
    "Publisher",
    "Rating",
    "Num_Rows",
    "Num_Columns",
];

const GRID_WIDTH: usize = SPREADSHEET_LABELS.len();

const STATS_HEADER: [&str; 7] = ["", "Missing", "Unique", "Zeros", "Max", "Min", "Mean"];

const NO_DATA_ROW: &str = "no tabular data";

/// Spreadsheet (CSV grid) report generator.
pub struct SpreadsheetReporter;

impl SpreadsheetReporter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn rows(report: &DatasetReport) -> Vec<Vec<String>> {
        let mut rows: Vec<Vec<String>> = Vec::new();

        rows.push(SPREADSHEET_LABELS.iter().map(|l| (*l).to_string()).collect());

        let mut values: Vec<String> = report
            .quality
            .results()
            .map(|r| if r.passed { "+" } else { "-" }.to_string())
            .collect();
        values.push(report.quality.total.to_string());
        match &report.profile {
            ProfileOutcome::Profiled(profile) => {
                values.push(profile.row_count.to_string());
                values.push(profile.column_count.to_string());
            }
            ProfileOutcome::NoData => {
                values.push(String::new());
                values.push(String::new());
            }
        }
        rows.push(values);

        // Rows 3 to 5 stay blank
        rows.extend(std::iter::repeat_n(Vec::new(), 3));
        rows.push(STATS_HEADER.iter().map(|h| (*h).to_string()).collect());

        let table_rows = match &report.profile {
            ProfileOutcome::Profiled(profile) => {
                for column in &profile.columns {
                    let [zeros, min, max, mean] = column.stats.display_cells();
                    rows.push(vec![
                        column.name.clone(),
                        column.missing_count.to_string(),
                        column.unique_count.to_string(),
                        zeros,
                        max,
                        min,
                        mean,
                    ]);
                }
                profile.columns.len()
            }
            ProfileOutcome::NoData => {
                rows.push(vec![NO_DATA_ROW.to_string()]);
                1
            }
        };

        rows.extend(std::iter::repeat_n(Vec::new(), 2));
        rows.push(vec!["link".to_string(), report.url.clone()]);
        debug_assert_eq!(rows.len(), 9 + table_rows);

        rows
    }
}

impl Default for SpreadsheetReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for SpreadsheetReporter {
    fn generate(&self, report: &DatasetReport) -> Result<String, ReportError> {
        let mut writer = csv::WriterBuilder::new().from_writer(Vec::new());

        for mut row in Self::rows(report) {
            row.resize(GRID_WIDTH, String::new());
            writer.write_record(&row)?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| ReportError::SerializationError(e.to_string()))?;
        String::from_utf8(bytes).map_err(|e| ReportError::SerializationError(e.to_string()))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Csv
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::fixtures;

    fn grid(report: &DatasetReport) -> Vec<Vec<String>> {
        let content = SpreadsheetReporter::new().generate(report).unwrap();
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_reader(content.as_bytes());
        reader
            .records()
            .map(|r| r.unwrap().iter().map(str::to_string).collect())
            .collect()
    }

    #[test]
    fn test_flag_row() {
        let report = fixtures::report(ProfileOutcome::Profiled(fixtures::profile()));
        let rows = grid(&report);

        assert_eq!(rows[0], SPREADSHEET_LABELS);
        assert_eq!(
            rows[1],
            vec!["+", "-", "-", "+", "+", "-", "+", "+", "+", "+", "+", "-", "125", "4", "2"]
        );
    }

    #[test]
    fn test_statistics_table_and_link() {
        let report = fixtures::report(ProfileOutcome::Profiled(fixtures::profile()));
        let rows = grid(&report);

        assert_eq!(rows.len(), 11);
        assert_eq!(&rows[5][1..7], &["Missing", "Unique", "Zeros", "Max", "Min", "Mean"]);
        assert_eq!(&rows[6][..7], &["count", "1", "2", "2", "3", "0", "1.00"]);
        assert_eq!(&rows[7][..7], &["name", "0", "4", "-", "-", "-", "-"]);
        assert_eq!(&rows[10][..2], &["link", fixtures::URL]);
        assert!(rows.iter().all(|r| r.len() == GRID_WIDTH));
    }

    #[test]
    fn test_no_data_layout() {
        let report = fixtures::report(ProfileOutcome::NoData);
        let rows = grid(&report);

        assert_eq!(&rows[1][12..], &["125", "", ""]);
        assert_eq!(rows[6][0], NO_DATA_ROW);
        assert_eq!(rows[9][0], "link");
    }
}
