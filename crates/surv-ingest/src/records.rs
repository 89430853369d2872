//! Mapping table rows to [`RawRecord`]s.

use tracing::{debug, warn};

use surv_model::RawRecord;

use crate::columns::ColumnMap;
use crate::csv_table::CsvTable;

/// Build one raw record per data row.
///
/// Empty cells and missing columns become `None`; no row is rejected here.
pub fn raw_records(table: &CsvTable) -> Vec<RawRecord> {
    let columns = ColumnMap::resolve(table);
    if columns.missing_both_dates() {
        warn!(
            headers = ?table.headers,
            "no date columns recognized; no record will yield a survival time"
        );
    }

    let mut records = Vec::with_capacity(table.rows.len());
    for row in 0..table.rows.len() {
        records.push(RawRecord {
            row,
            diagnosis_date: field(table, row, columns.diagnosis_date),
            last_info_date: field(table, row, columns.last_info_date),
            topo_group: field(table, row, columns.topo_group),
            stage: field(table, row, columns.stage),
            event: field(table, row, columns.event),
        });
    }
    debug!(record_count = records.len(), "raw records built");
    records
}

fn field(table: &CsvTable, row: usize, col: Option<usize>) -> Option<String> {
    table.cell(row, col?).map(str::to_string)
}
