//! Column aliasing for registry export headers.
//!
//! The source schema is read on the fly: columns are matched by a small set
//! of known aliases, case-insensitively, and missing columns simply leave
//! the corresponding record field unset.

use crate::csv_table::CsvTable;

/// Aliases for the diagnosis date column.
pub const DIAGNOSIS_DATE: &[&str] = &["DTDIAG", "DT_DIAG", "DATA_DIAGNOSTICO", "DIAGNOSIS_DATE"];
/// Aliases for the last-information date column.
pub const LAST_INFO_DATE: &[&str] = &["DTULTINFO", "DT_ULT_INFO", "DATA_ULT_INFO", "LAST_INFO_DATE"];
/// Aliases for the topography group column.
pub const TOPO_GROUP: &[&str] = &["TOPOGRUP", "TOPO_GRUP", "TOPO_GROUP", "TOPOGRAPHY"];
/// Aliases for the clinical stage column.
pub const STAGE: &[&str] = &["EC", "ESTADIO", "ESTADIO_CLINICO", "STAGE"];
/// Aliases for the optional event/death marker column.
pub const EVENT: &[&str] = &["OBITO", "EVENTO", "EVENT", "DEATH"];

/// True when `header` matches any known registry column alias.
pub fn is_known_header(header: &str) -> bool {
    [DIAGNOSIS_DATE, LAST_INFO_DATE, TOPO_GROUP, STAGE, EVENT]
        .iter()
        .any(|aliases| {
            aliases
                .iter()
                .any(|alias| alias.eq_ignore_ascii_case(header))
        })
}

/// Resolved column positions for one table.
#[derive(Debug, Clone, Copy, Default)]
pub struct ColumnMap {
    pub diagnosis_date: Option<usize>,
    pub last_info_date: Option<usize>,
    pub topo_group: Option<usize>,
    pub stage: Option<usize>,
    pub event: Option<usize>,
}

impl ColumnMap {
    /// Resolve the known columns against a table's headers.
    pub fn resolve(table: &CsvTable) -> Self {
        Self {
            diagnosis_date: find(table, DIAGNOSIS_DATE),
            last_info_date: find(table, LAST_INFO_DATE),
            topo_group: find(table, TOPO_GROUP),
            stage: find(table, STAGE),
            event: find(table, EVENT),
        }
    }

    /// True when neither date column was found; the table cannot yield any
    /// usable survival time.
    pub fn missing_both_dates(&self) -> bool {
        self.diagnosis_date.is_none() && self.last_info_date.is_none()
    }
}

fn find(table: &CsvTable, aliases: &[&str]) -> Option<usize> {
    aliases
        .iter()
        .find_map(|alias| table.column_index(alias))
}
