//! Delimited-text decoding into named, column-major string cells.

use crate::error::{AuditError, ParseErrorKind, Result};
use std::collections::HashSet;

/// Cell values read as missing.
pub const NA_MARKERS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// One named column; `None` marks a missing cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub name: String,
    pub cells: Vec<Option<String>>,
}

/// A decoded table. Every column has `row_count` cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub columns: Vec<Column>,
    pub row_count: usize,
}

impl Table {
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// A table without rows or without columns carries no data.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.row_count == 0 || self.columns.is_empty()
    }

    /// Decode comma-separated bytes.
    ///
    /// The first record is the header. Blank header names become
    /// `Unnamed: <index>` and repeated names get `.1`, `.2`, ... suffixes.
    /// Short rows are padded with missing cells; a row with more fields than
    /// the header is an error.
    pub fn from_csv(bytes: &[u8]) -> Result<Self> {
        let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(bytes);

        let mut records = reader.byte_records();
        let header = loop {
            match records.next() {
                Some(record) => {
                    let record = record?;
                    if !is_blank(&record) {
                        break record;
                    }
                }
                None => {
                    return Err(AuditError::parse("CSV header", ParseErrorKind::EmptyTable));
                }
            }
        };

        let names = header_names(&header);
        let width = names.len();
        let mut columns: Vec<Column> = names
            .into_iter()
            .map(|name| Column {
                name,
                cells: Vec::new(),
            })
            .collect();

        let mut row_count = 0;
        for record in records {
            let record = record?;
            if is_blank(&record) {
                continue;
            }
            if record.len() > width {
                return Err(AuditError::parse(
                    "CSV body",
                    ParseErrorKind::InvalidCsv(format!(
                        "expected {} fields in row {}, saw {}",
                        width,
                        row_count + 1,
                        record.len()
                    )),
                ));
            }

            for (index, column) in columns.iter_mut().enumerate() {
                column.cells.push(record.get(index).and_then(cell_value));
            }
            row_count += 1;
        }

        Ok(Self { columns, row_count })
    }
}

/// An empty line; rows of empty fields such as `,,` still count.
fn is_blank(record: &csv::ByteRecord) -> bool {
    record.len() <= 1 && record.iter().all(<[u8]>::is_empty)
}

fn decode(field: &[u8]) -> String {
    String::from_utf8_lossy(field).into_owned()
}

fn cell_value(field: &[u8]) -> Option<String> {
    let value = decode(field);
    if NA_MARKERS.contains(&value.as_str()) {
        None
    } else {
        Some(value)
    }
}

fn header_names(header: &csv::ByteRecord) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut names = Vec::with_capacity(header.len());

    for (index, field) in header.iter().enumerate() {
        let raw = decode(field);
        let base = if raw.trim().is_empty() {
            format!("Unnamed: {index}")
        } else {
            raw
        };

        let mut name = base.clone();
        let mut suffix = 1;
        while seen.contains(&name) {
            name = format!("{base}.{suffix}");
            suffix += 1;
        }
        seen.insert(name.clone());
        names.push(name);
    }
    names
}
