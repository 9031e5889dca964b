//! Column profile of a downloaded tabular resource.

use serde::{Deserialize, Serialize};

/// Rendered in place of statistics that do not apply to a column.
pub const NOT_APPLICABLE: &str = "-";

/// Statistics that only exist for numeric columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ColumnStats {
    Numeric {
        /// Every value is an integer
        integer: bool,
        zero_count: usize,
        min: f64,
        max: f64,
        /// Arithmetic mean, rounded to 2 decimals
        mean: f64,
    },
    NonNumeric,
}

impl ColumnStats {
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::Numeric { .. })
    }

    #[must_use]
    pub const fn zero_count(&self) -> Option<usize> {
        match self {
            Self::Numeric { zero_count, .. } => Some(*zero_count),
            Self::NonNumeric => None,
        }
    }

    #[must_use]
    pub const fn min(&self) -> Option<f64> {
        match self {
            Self::Numeric { min, .. } => Some(*min),
            Self::NonNumeric => None,
        }
    }

    #[must_use]
    pub const fn max(&self) -> Option<f64> {
        match self {
            Self::Numeric { max, .. } => Some(*max),
            Self::NonNumeric => None,
        }
    }

    #[must_use]
    pub const fn mean(&self) -> Option<f64> {
        match self {
            Self::Numeric { mean, .. } => Some(*mean),
            Self::NonNumeric => None,
        }
    }

    /// Display cells for zero count, min, max and mean, in that order.
    #[must_use]
    pub fn display_cells(&self) -> [String; 4] {
        match self {
            Self::Numeric {
                integer,
                zero_count,
                min,
                max,
                mean,
            } => [
                zero_count.to_string(),
                format_bound(*min, *integer),
                format_bound(*max, *integer),
                format!("{mean:.2}"),
            ],
            Self::NonNumeric => [
                NOT_APPLICABLE.to_string(),
                NOT_APPLICABLE.to_string(),
                NOT_APPLICABLE.to_string(),
                NOT_APPLICABLE.to_string(),
            ],
        }
    }
}

fn format_bound(value: f64, integer: bool) -> String {
    if integer {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}

/// Profile of a single column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnProfile {
    pub name: String,
    /// Distinct non-missing values
    pub unique_count: usize,
    pub missing_count: usize,
    pub stats: ColumnStats,
}

/// Shape and per-column statistics of a table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileProfile {
    pub row_count: usize,
    pub column_count: usize,
    pub columns: Vec<ColumnProfile>,
}

impl FileProfile {
    #[must_use]
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    #[must_use]
    pub fn unique_counts(&self) -> Vec<usize> {
        self.columns.iter().map(|c| c.unique_count).collect()
    }

    #[must_use]
    pub fn missing_counts(&self) -> Vec<usize> {
        self.columns.iter().map(|c| c.missing_count).collect()
    }

    #[must_use]
    pub fn zero_counts(&self) -> Vec<Option<usize>> {
        self.columns.iter().map(|c| c.stats.zero_count()).collect()
    }

    #[must_use]
    pub fn min_values(&self) -> Vec<Option<f64>> {
        self.columns.iter().map(|c| c.stats.min()).collect()
    }

    #[must_use]
    pub fn max_values(&self) -> Vec<Option<f64>> {
        self.columns.iter().map(|c| c.stats.max()).collect()
    }

    #[must_use]
    pub fn mean_values(&self) -> Vec<Option<f64>> {
        self.columns.iter().map(|c| c.stats.mean()).collect()
    }

    /// Number of columns with numeric statistics
    #[must_use]
    pub fn numeric_columns(&self) -> usize {
        self.columns.iter().filter(|c| c.stats.is_numeric()).count()
    }
}

/// Result of looking for a profilable resource among a dataset's downloads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ProfileOutcome {
    Profiled(FileProfile),
    /// No downloadable CSV resource parsed into a non-empty table
    NoData,
}

impl ProfileOutcome {
    #[must_use]
    pub const fn profile(&self) -> Option<&FileProfile> {
        match self {
            Self::Profiled(profile) => Some(profile),
            Self::NoData => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_numeric_cells_use_placeholder() {
        let cells = ColumnStats::NonNumeric.display_cells();
        assert!(cells.iter().all(|c| c == NOT_APPLICABLE));
    }

    #[test]
    fn test_numeric_cells() {
        let stats = ColumnStats::Numeric {
            integer: true,
            zero_count: 2,
            min: 0.0,
            max: 3.0,
            mean: 1.0,
        };
        assert_eq!(stats.display_cells(), ["2", "0", "3", "1.00"]);

        let stats = ColumnStats::Numeric {
            integer: false,
            zero_count: 0,
            min: 0.5,
            max: 2.25,
            mean: 1.38,
        };
        assert_eq!(stats.display_cells(), ["0", "0.5", "2.25", "1.38"]);
    }

    #[test]
    fn test_no_data_has_no_profile() {
        assert!(ProfileOutcome::NoData.profile().is_none());
    }
}
