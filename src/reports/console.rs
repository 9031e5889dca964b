//! Console report generator.
//!
//! Renders the rubric the way an auditor reads it: each check prefixed with
//! its weight, sub-totals per dimension, then the column statistics table.

use super::{DatasetReport, ReportError, ReportFormat, ReportGenerator};
use crate::model::ProfileOutcome;
use crate::quality::DimensionScore;
use std::fmt::Write as _;
use unicode_width::UnicodeWidthStr;

/// Apply ANSI color formatting if colored output is enabled.
fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if colored {
        match color {
            "red" => format!("\x1b[31m{text}\x1b[0m"),
            "green" => format!("\x1b[32m{text}\x1b[0m"),
            "yellow" => format!("\x1b[33m{text}\x1b[0m"),
            "cyan" => format!("\x1b[36m{text}\x1b[0m"),
            "bold" => format!("\x1b[1m{text}\x1b[0m"),
            "dim" => format!("\x1b[2m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    } else {
        text.to_string()
    }
}

/// Left-align `text` in `width` terminal columns.
fn pad(text: &str, width: usize) -> String {
    let used = UnicodeWidthStr::width(text);
    format!("{text}{}", " ".repeat(width.saturating_sub(used)))
}

const LABEL_WIDTH: usize = 42;
const STATS_HEADER: [&str; 8] = [
    "#", "Column", "Unique", "Missing", "Zeros", "Min", "Max", "Mean",
];

/// Console reporter for terminal output
pub struct ConsoleReporter {
    /// Use colored output
    colored: bool,
}

impl ConsoleReporter {
    /// Create a new console reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }

    fn flag(&self, passed: bool) -> String {
        if passed {
            self.color("+", "green")
        } else {
            self.color("-", "red")
        }
    }

    fn write_dimension(&self, out: &mut String, score: &DimensionScore) -> std::fmt::Result {
        writeln!(
            out,
            "{}",
            self.color(&format!("---{}---", score.dimension.name()), "bold")
        )?;
        for result in &score.results {
            let label = format!("[{:>2}] {}:", result.check.weight(), result.check.name());
            writeln!(out, "{}{}", pad(&label, LABEL_WIDTH), self.flag(result.passed))?;
        }
        let rating = format!("Rating {}:", score.dimension.name());
        writeln!(
            out,
            "{}{}/{}",
            pad(&rating, LABEL_WIDTH),
            score.points,
            score.max_points
        )
    }

    fn write_profile(&self, out: &mut String, profile: &ProfileOutcome) -> std::fmt::Result {
        writeln!(out, "{}", self.color("---File---", "bold"))?;
        let ProfileOutcome::Profiled(profile) = profile else {
            return writeln!(out, "{}", self.color("no tabular data", "yellow"));
        };

        writeln!(out, "Rows:    {}", profile.row_count)?;
        writeln!(out, "Columns: {}", profile.column_count)?;

        let mut rows: Vec<Vec<String>> = Vec::with_capacity(profile.columns.len() + 1);
        rows.push(STATS_HEADER.iter().map(|h| (*h).to_string()).collect());

        for (index, column) in profile.columns.iter().enumerate() {
            let [zeros, min, max, mean] = column.stats.display_cells();
            rows.push(vec![
                (index + 1).to_string(),
                column.name.clone(),
                column.unique_count.to_string(),
                column.missing_count.to_string(),
                zeros,
                min,
                max,
                mean,
            ]);
        }

        let widths: Vec<usize> = (0..rows[0].len())
            .map(|i| {
                rows.iter()
                    .map(|r| UnicodeWidthStr::width(r[i].as_str()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        for (index, row) in rows.iter().enumerate() {
            let line = row
                .iter()
                .zip(&widths)
                .map(|(cell, width)| pad(cell, *width))
                .collect::<Vec<_>>()
                .join("  ");
            let line = line.trim_end();
            if index == 0 {
                writeln!(out, "{}", self.color(line, "dim"))?;
            } else {
                writeln!(out, "{line}")?;
            }
        }
        Ok(())
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for ConsoleReporter {
    fn generate(&self, report: &DatasetReport) -> Result<String, ReportError> {
        let mut out = String::new();
        let signals = &report.signals;

        writeln!(out, "{}", self.color(&report.url, "cyan"))?;
        if let Some(title) = report.title() {
            writeln!(out, "{}  {}", self.color("Title:", "cyan"), title)?;
        }
        writeln!(
            out,
            "{}  {}",
            self.color("Formats:", "cyan"),
            signals.formats.join(", ")
        )?;
        writeln!(
            out,
            "{}  {}",
            self.color("Media types:", "cyan"),
            signals.media_types.join(", ")
        )?;
        writeln!(
            out,
            "{}  {}",
            self.color("License:", "cyan"),
            signals.licenses.iter().cloned().collect::<Vec<_>>().join(", ")
        )?;
        writeln!(
            out,
            "{}  {}",
            self.color("Access:", "cyan"),
            signals.access_level.as_deref().unwrap_or("-")
        )?;
        writeln!(
            out,
            "{}  {}",
            self.color("DCAT-AP:", "cyan"),
            report.compliance
        )?;

        self.write_dimension(&mut out, &report.quality.interoperability)?;
        self.write_dimension(&mut out, &report.quality.reusability)?;

        writeln!(out, "{}", self.color("---", "bold"))?;
        writeln!(
            out,
            "{}{}",
            pad("Common rating:", LABEL_WIDTH),
            self.color(
                &format!("{}/{}", report.quality.total, report.quality.max_total()),
                "bold"
            )
        )?;

        self.write_profile(&mut out, &report.profile)?;
        Ok(out)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Console
    }
}
