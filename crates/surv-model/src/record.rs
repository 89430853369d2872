//! Raw and transformed clinical case records.

use chrono::NaiveDate;

/// One row as read from the source table, before any typing.
///
/// Every field is optional: registry exports routinely carry empty cells and
/// the reader tolerates missing columns (schema-on-read). The `row` index is
/// the 0-based position in the source data and is the record's stable
/// identity through all later stages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRecord {
    /// 0-based data row index in the source table.
    pub row: usize,
    /// Diagnosis date as written in the source (DTDIAG).
    pub diagnosis_date: Option<String>,
    /// Date of last information as written in the source (DTULTINFO).
    pub last_info_date: Option<String>,
    /// Topography group code (TOPOGRUP), taken as-is.
    pub topo_group: Option<String>,
    /// Clinical stage code (EC), e.g. "IIIA" or "IVB".
    pub stage: Option<String>,
    /// Optional event marker. Absent means the record is an observed event,
    /// matching the registry export where every row is a recorded death.
    pub event: Option<String>,
}

/// A transformed record with derived survival fields.
///
/// Produced once per [`RawRecord`] by the transform stage and immutable from
/// then on. Filtering, partitioning and estimation never mutate records;
/// each stage produces a new collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Source row index, carried through for diagnostics.
    pub row: usize,
    pub diagnosis_date: Option<NaiveDate>,
    pub last_info_date: Option<NaiveDate>,
    /// Days between diagnosis and last information. `None` when either date
    /// is missing or unparseable. May be negative before validation when the
    /// source dates are inconsistent.
    pub survival_time: Option<i64>,
    /// Whether the event of interest was observed. Right-censored rows carry
    /// `false`; the current registry export sets this `true` everywhere.
    pub event_observed: bool,
    /// Calendar year of the diagnosis date.
    pub diagnosis_year: Option<i32>,
    pub topo_group: Option<String>,
    /// Stage code as written in the source.
    pub stage_raw: Option<String>,
    /// Canonical stage grouping key ("IIIA" -> "III").
    pub stage_clean: Option<String>,
}

impl Record {
    /// Whether the record can contribute to a time-to-event calculation.
    pub fn is_usable(&self) -> bool {
        self.survival_time.is_some()
    }
}
