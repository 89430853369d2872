//! Schema-on-read ingestion of registry CSV exports.

pub mod columns;
pub mod csv_table;
pub mod records;

use std::path::Path;

use anyhow::Result;

pub use columns::ColumnMap;
pub use csv_table::{CsvTable, read_csv_table};
pub use records::raw_records;

use surv_model::RawRecord;

/// Read a CSV file straight into raw records.
pub fn read_raw_records(path: &Path) -> Result<Vec<RawRecord>> {
    let table = read_csv_table(path)?;
    Ok(raw_records(&table))
}
