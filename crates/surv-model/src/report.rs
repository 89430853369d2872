//! Per-run cohort bookkeeping: what came in, what was excluded, and why.

use serde::{Deserialize, Serialize};

/// Records removed before estimation, by reason.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExclusionCounts {
    /// Missing or unparseable diagnosis/last-info date, so no survival time.
    pub missing_date: usize,
    /// Negative survival time excluded by policy.
    pub negative_time: usize,
    /// Negative survival time clamped to zero by policy (kept, but counted).
    pub clamped_time: usize,
}

impl ExclusionCounts {
    /// Records that were dropped (clamped records stay in the cohort).
    pub fn dropped(&self) -> usize {
        self.missing_date + self.negative_time
    }
}

/// Summary of one comparison group after estimation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupSummary {
    pub label: String,
    pub records: usize,
    pub events: usize,
    /// Distinct observed times in the group's curve.
    pub curve_points: usize,
}

/// Bookkeeping for one analysis run.
///
/// Every stage degrades to "fewer records" rather than failing the run, so
/// the report is how data-quality problems stay visible to the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CohortReport {
    /// Data rows read from the source table.
    pub input_rows: usize,
    /// Records with a usable (non-null, non-negative) survival time.
    pub usable_records: usize,
    /// Records remaining after the inclusion filters.
    pub filtered_records: usize,
    pub excluded: ExclusionCounts,
    pub groups: Vec<GroupSummary>,
    /// Groups that produced no curve (nothing to estimate).
    pub empty_groups: Vec<String>,
}

impl CohortReport {
    /// True when the filtered cohort had nothing to estimate.
    pub fn is_empty_cohort(&self) -> bool {
        self.filtered_records == 0
    }

    pub fn total_events(&self) -> usize {
        self.groups.iter().map(|group| group.events).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_serializes() {
        let report = CohortReport {
            input_rows: 10,
            usable_records: 8,
            filtered_records: 6,
            excluded: ExclusionCounts {
                missing_date: 2,
                negative_time: 0,
                clamped_time: 1,
            },
            groups: vec![GroupSummary {
                label: "All".to_string(),
                records: 6,
                events: 6,
                curve_points: 4,
            }],
            empty_groups: vec![],
        };
        let json = serde_json::to_string(&report).expect("serialize report");
        let round: CohortReport = serde_json::from_str(&json).expect("deserialize report");
        assert_eq!(round, report);
        assert_eq!(round.total_events(), 6);
        assert_eq!(round.excluded.dropped(), 2);
    }
}
