//! Multi-criteria inclusion filtering over transformed records.

use std::collections::BTreeSet;

use tracing::debug;

use surv_model::{FilterCriteria, Record};

/// Distinct non-null values observed for each filterable field, in sorted
/// order. These are the default inclusion sets and what an interactive
/// caller presents as the available filter choices.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObservedValues {
    pub years: BTreeSet<i32>,
    pub topo_groups: BTreeSet<String>,
    pub stages: BTreeSet<String>,
}

impl ObservedValues {
    pub fn collect(records: &[Record]) -> Self {
        let mut observed = Self::default();
        for record in records {
            if let Some(year) = record.diagnosis_year {
                observed.years.insert(year);
            }
            if let Some(topo) = &record.topo_group {
                observed.topo_groups.insert(topo.clone());
            }
            if let Some(stage) = &record.stage_clean {
                observed.stages.insert(stage.clone());
            }
        }
        observed
    }
}

/// Apply the inclusion criteria, producing a new collection.
///
/// A record passes iff each field's value is non-null and a member of the
/// corresponding set; an unset set means "any observed value", which a
/// non-null value satisfies by definition. A null field therefore never
/// passes, even unfiltered — records that cannot be placed are silently
/// dropped rather than erroring (best-effort policy, see the model docs).
///
/// An empty result is a valid, reportable state, not a failure.
pub fn filter_records(records: &[Record], criteria: &FilterCriteria) -> Vec<Record> {
    let filtered: Vec<Record> = records
        .iter()
        .filter(|record| passes(record, criteria))
        .cloned()
        .collect();
    debug!(
        input = records.len(),
        output = filtered.len(),
        unrestricted = criteria.is_unrestricted(),
        "filter applied"
    );
    filtered
}

fn passes(record: &Record, criteria: &FilterCriteria) -> bool {
    let year_ok = match (record.diagnosis_year, &criteria.years) {
        (Some(year), Some(allowed)) => allowed.contains(&year),
        (Some(_), None) => true,
        (None, _) => false,
    };
    let topo_ok = match (&record.topo_group, &criteria.topo_groups) {
        (Some(topo), Some(allowed)) => allowed.contains(topo),
        (Some(_), None) => true,
        (None, _) => false,
    };
    let stage_ok = match (&record.stage_clean, &criteria.stages) {
        (Some(stage), Some(allowed)) => allowed.contains(stage),
        (Some(_), None) => true,
        (None, _) => false,
    };
    year_ok && topo_ok && stage_ok
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(year: Option<i32>, topo: Option<&str>, stage: Option<&str>) -> Record {
        Record {
            row: 0,
            diagnosis_date: None,
            last_info_date: None,
            survival_time: Some(10),
            event_observed: true,
            diagnosis_year: year,
            topo_group: topo.map(String::from),
            stage_raw: stage.map(String::from),
            stage_clean: stage.map(String::from),
        }
    }

    #[test]
    fn default_filter_keeps_only_fully_populated_records() {
        let records = vec![
            record(Some(2020), Some("C50"), Some("III")),
            record(None, Some("C50"), Some("III")),
            record(Some(2020), None, Some("III")),
            record(Some(2020), Some("C50"), None),
        ];
        let filtered = filter_records(&records, &FilterCriteria::new());
        assert_eq!(filtered.len(), 1);
    }

    #[test]
    fn narrowed_sets_apply_independently() {
        let records = vec![
            record(Some(2019), Some("C50"), Some("III")),
            record(Some(2020), Some("C50"), Some("III")),
            record(Some(2020), Some("C34"), Some("IV")),
        ];
        let criteria = FilterCriteria::new().with_years([2020]);
        assert_eq!(filter_records(&records, &criteria).len(), 2);

        let criteria = FilterCriteria::new().with_years([2020]).with_stages(["III"]);
        assert_eq!(filter_records(&records, &criteria).len(), 1);
    }

    #[test]
    fn filtering_is_idempotent() {
        let records = vec![
            record(Some(2019), Some("C50"), Some("III")),
            record(Some(2020), Some("C34"), Some("IV")),
            record(None, Some("C34"), Some("IV")),
        ];
        let criteria = FilterCriteria::new().with_topo_groups(["C34"]);
        let once = filter_records(&records, &criteria);
        let twice = filter_records(&once, &criteria);
        assert_eq!(once, twice);
    }

    #[test]
    fn empty_result_is_valid() {
        let records = vec![record(Some(2019), Some("C50"), Some("III"))];
        let criteria = FilterCriteria::new().with_years([1999]);
        assert!(filter_records(&records, &criteria).is_empty());
    }

    #[test]
    fn observed_values_are_distinct_and_sorted() {
        let records = vec![
            record(Some(2020), Some("C50"), Some("IV")),
            record(Some(2019), Some("C50"), Some("III")),
            record(Some(2020), None, None),
        ];
        let observed = ObservedValues::collect(&records);
        assert_eq!(observed.years.iter().copied().collect::<Vec<_>>(), vec![2019, 2020]);
        assert_eq!(observed.topo_groups.len(), 1);
        assert_eq!(
            observed.stages.iter().cloned().collect::<Vec<_>>(),
            vec!["III".to_string(), "IV".to_string()]
        );
    }
}
