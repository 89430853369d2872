//! Tolerant CSV reading for registry exports.
//!
//! Exports from the registry sometimes carry a title row or notes above the
//! real header, so the file is read headerless and the header row is located
//! by looking for the known column names.

use std::path::Path;

use anyhow::{Context, Result};
use csv::ReaderBuilder;

use crate::columns::is_known_header;

/// A CSV file as a header row plus string cells.
#[derive(Debug, Clone)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl CsvTable {
    /// Case-insensitive column index lookup.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers
            .iter()
            .position(|header| header.eq_ignore_ascii_case(name))
    }

    /// Cell at `(row, col)`, `None` when empty or out of bounds.
    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        let value = self.rows.get(row)?.get(col)?.as_str();
        if value.is_empty() { None } else { Some(value) }
    }
}

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    trimmed.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Find the header row: the first of the leading rows that names at least
/// one known registry column. Falls back to the first row.
fn detect_header_row(rows: &[Vec<String>]) -> usize {
    let probe = rows.len().min(5);
    for (idx, row) in rows.iter().take(probe).enumerate() {
        if row
            .iter()
            .any(|cell| is_known_header(&normalize_header(cell)))
        {
            return idx;
        }
    }
    0
}

/// Read a CSV file into a [`CsvTable`], skipping blank rows and anything
/// above the detected header row.
pub fn read_csv_table(path: &Path) -> Result<CsvTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("read csv: {}", path.display()))?;

    let mut raw_rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.with_context(|| format!("read record: {}", path.display()))?;
        let row: Vec<String> = record.iter().map(normalize_cell).collect();
        if row.iter().all(|value| value.is_empty()) {
            continue;
        }
        raw_rows.push(row);
    }
    if raw_rows.is_empty() {
        return Ok(CsvTable {
            headers: Vec::new(),
            rows: Vec::new(),
        });
    }

    let header_index = detect_header_row(&raw_rows);
    let headers: Vec<String> = raw_rows[header_index]
        .iter()
        .map(|value| normalize_header(value))
        .collect();
    let mut rows = Vec::new();
    for record in raw_rows.iter().skip(header_index + 1) {
        let mut row = Vec::with_capacity(headers.len());
        for idx in 0..headers.len() {
            let value = record.get(idx).map(String::as_str).unwrap_or("");
            row.push(normalize_cell(value));
        }
        rows.push(row);
    }
    Ok(CsvTable { headers, rows })
}
