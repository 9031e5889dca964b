//! Per-column statistics.

use super::table::{Column, Table};
use crate::model::{ColumnProfile, ColumnStats, FileProfile};
use std::collections::HashSet;

/// Profile every column of `table`.
#[must_use]
pub fn profile_table(table: &Table) -> FileProfile {
    FileProfile {
        row_count: table.row_count,
        column_count: table.column_count(),
        columns: table.columns.iter().map(profile_column).collect(),
    }
}

/// Parsed numeric cells of a column, or `None` if any present cell is not a
/// number or the column has no values at all.
///
/// NaN spellings that are not NA markers (`NAN`, `+nan`) are text.
fn numeric_values(column: &Column) -> Option<Vec<f64>> {
    let values: Option<Vec<f64>> = column
        .cells
        .iter()
        .flatten()
        .map(|cell| cell.trim().parse::<f64>().ok().filter(|v| !v.is_nan()))
        .collect();
    values.filter(|v| !v.is_empty())
}

fn is_integer_column(column: &Column) -> bool {
    column
        .cells
        .iter()
        .all(|cell| cell.as_deref().is_some_and(|c| c.trim().parse::<i64>().is_ok()))
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn numeric_stats(values: &[f64], integer: bool) -> ColumnStats {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let mean = values.iter().sum::<f64>() / values.len() as f64;

    ColumnStats::Numeric {
        integer,
        zero_count: values.iter().filter(|v| **v == 0.0).count(),
        min,
        max,
        mean: round2(mean),
    }
}

fn profile_column(column: &Column) -> ColumnProfile {
    let missing_count = column.cells.iter().filter(|c| c.is_none()).count();

    let (unique_count, stats) = match numeric_values(column) {
        Some(values) => {
            // -0.0 and 0.0 are the same value
            let unique: HashSet<u64> = values.iter().map(|v| (v + 0.0).to_bits()).collect();
            (
                unique.len(),
                numeric_stats(&values, is_integer_column(column)),
            )
        }
        None => {
            let unique: HashSet<&str> = column.cells.iter().flatten().map(String::as_str).collect();
            (unique.len(), ColumnStats::NonNumeric)
        }
    };

    ColumnProfile {
        name: column.name.clone(),
        unique_count,
        missing_count,
        stats,
    }
}
