use std::io::Read;

use anyhow::{Context, Result};
use csv::ReaderBuilder;

use facloc_model::PrepError;

use crate::fetch::fetch_source;

/// Raw tabular form of a fetched resource: one header row plus string cells.
///
/// Rows are padded to header width so column indexes are always in bounds.
#[derive(Debug, Clone)]
pub struct SourceTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl SourceTable {
    /// Index of a column by exact header name.
    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }

    /// Index of a column that must exist in the source schema.
    pub fn require_column(&self, name: &str) -> facloc_model::Result<usize> {
        self.column(name)
            .ok_or_else(|| PrepError::MissingColumn(name.to_string()))
    }
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Read a CSV table with a single leading header row.
///
/// Cells are trimmed and BOM markers stripped; fully empty records are
/// skipped.
pub fn read_source_table(reader: impl Read) -> Result<SourceTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);
    let headers: Vec<String> = reader
        .headers()
        .context("read csv header")?
        .iter()
        .map(normalize_cell)
        .collect();
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.context("read csv record")?;
        if record.iter().all(|value| value.trim().is_empty()) {
            continue;
        }
        let mut row = Vec::with_capacity(headers.len());
        for idx in 0..headers.len() {
            row.push(normalize_cell(record.get(idx).unwrap_or("")));
        }
        rows.push(row);
    }
    Ok(SourceTable { headers, rows })
}

/// Fetch a source address (URL or local path) and parse it as a CSV table.
pub fn load_source_table(source: &str) -> Result<SourceTable> {
    let text = fetch_source(source)?;
    read_source_table(text.as_bytes()).with_context(|| format!("parse {source}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_column_reports_schema_failures() {
        let table = SourceTable {
            headers: vec!["BRANCH".to_string(), "ADDRESS".to_string()],
            rows: Vec::new(),
        };
        assert_eq!(table.require_column("ADDRESS").unwrap(), 1);
        let error = table.require_column("LOCATION").unwrap_err();
        assert!(matches!(error, PrepError::MissingColumn(name) if name == "LOCATION"));
    }
}
