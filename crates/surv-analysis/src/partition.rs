//! Partitioning a filtered cohort into labeled comparison groups.

use std::collections::BTreeMap;

use tracing::debug;

use surv_model::{GroupingKey, Record};

/// One comparison group: a legend label and its member records.
pub type Group = (String, Vec<Record>);

/// Split the filtered collection by the chosen dimension.
///
/// `GroupingKey::None` yields a single group labeled "All". Otherwise each
/// distinct non-null value of the field becomes one group labeled
/// `"{dimension} = {value}"`, emitted in ascending order of the value
/// (numeric for years, lexical for strings) so output ordering is
/// deterministic. Records with a null grouping field belong to no group.
pub fn partition(records: &[Record], key: GroupingKey) -> Vec<Group> {
    let groups = match key {
        GroupingKey::None => vec![("All".to_string(), records.to_vec())],
        GroupingKey::DiagnosisYear => {
            let mut by_year: BTreeMap<i32, Vec<Record>> = BTreeMap::new();
            for record in records {
                if let Some(year) = record.diagnosis_year {
                    by_year.entry(year).or_default().push(record.clone());
                }
            }
            by_year
                .into_iter()
                .map(|(year, members)| (label(key, &year.to_string()), members))
                .collect()
        }
        GroupingKey::TopoGroup | GroupingKey::StageClean => {
            let mut by_value: BTreeMap<String, Vec<Record>> = BTreeMap::new();
            for record in records {
                let value = match key {
                    GroupingKey::TopoGroup => record.topo_group.as_ref(),
                    _ => record.stage_clean.as_ref(),
                };
                if let Some(value) = value {
                    by_value
                        .entry(value.clone())
                        .or_default()
                        .push(record.clone());
                }
            }
            by_value
                .into_iter()
                .map(|(value, members)| (label(key, &value), members))
                .collect()
        }
    };
    debug!(group_count = groups.len(), key = ?key, "cohort partitioned");
    groups
}

fn label(key: GroupingKey, value: &str) -> String {
    match key.dimension() {
        Some(dimension) => format!("{dimension} = {value}"),
        None => "All".to_string(),
    }
}
