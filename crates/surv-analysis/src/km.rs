//! The Kaplan-Meier product-limit estimator.
//!
//! For each distinct observed time `t_i` (ascending), with `n_i` records
//! still at risk and `d_i` observed events at exactly `t_i`:
//!
//! ```text
//! S(t_i) = S(t_{i-1}) * (1 - d_i / n_i),    S before the first time = 1
//! ```
//!
//! Ties at the same time are aggregated, not processed one by one: the
//! at-risk count drops by the full tied cohort (events and censored rows
//! alike) before the next distinct time. Censored rows never contribute to
//! `d_i`, so the estimator stays correct if right-censored data appears.

use std::collections::BTreeMap;

use tracing::debug;

use surv_model::{CurvePoint, Record, SurvError, SurvivalCurve};

/// Event/total tallies at one distinct time.
#[derive(Debug, Default, Clone, Copy)]
struct TimeTally {
    events: usize,
    total: usize,
}

/// Estimate the survival step function for one group.
///
/// Records must carry non-negative survival times; upstream transformation
/// enforces that, but the estimator rejects violations defensively instead
/// of corrupting the ordering. An empty group yields
/// [`SurvError::EmptyGroup`] so the caller can report "nothing to estimate"
/// rather than plot a degenerate curve.
///
/// The input is never mutated; each invocation is independent, so per-group
/// calls are safe to run in parallel.
pub fn estimate(label: &str, records: &[Record]) -> Result<SurvivalCurve, SurvError> {
    if records.is_empty() {
        return Err(SurvError::EmptyGroup {
            label: label.to_string(),
        });
    }

    let mut tallies: BTreeMap<i64, TimeTally> = BTreeMap::new();
    for record in records {
        let time = record
            .survival_time
            .ok_or(SurvError::MissingSurvivalTime { row: record.row })?;
        if time < 0 {
            return Err(SurvError::NegativeSurvivalTime {
                row: record.row,
                days: time,
            });
        }
        let tally = tallies.entry(time).or_default();
        tally.total += 1;
        if record.event_observed {
            tally.events += 1;
        }
    }

    let mut at_risk = records.len();
    let mut survival = 1.0_f64;
    let mut n_events = 0usize;
    let mut points = Vec::with_capacity(tallies.len());
    for (time, tally) in tallies {
        // at_risk is the count immediately before processing this time
        if tally.events > 0 {
            survival *= 1.0 - tally.events as f64 / at_risk as f64;
            n_events += tally.events;
        }
        points.push(CurvePoint { time, survival });
        at_risk -= tally.total;
    }

    debug!(
        label,
        n_total = records.len(),
        n_events,
        point_count = points.len(),
        final_survival = points.last().map_or(1.0, |p| p.survival),
        "curve estimated"
    );
    Ok(SurvivalCurve {
        label: label.to_string(),
        points,
        n_total: records.len(),
        n_events,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(row: usize, time: i64, event: bool) -> Record {
        Record {
            row,
            diagnosis_date: None,
            last_info_date: None,
            survival_time: Some(time),
            event_observed: event,
            diagnosis_year: None,
            topo_group: None,
            stage_raw: None,
            stage_clean: None,
        }
    }

    #[test]
    fn aggregates_ties_at_the_same_time() {
        // Times [5, 5, 10], all events. At t=5: d=2, n=3, S = 1/3.
        // At t=10: d=1, n=1, S = 0.
        let records = vec![record(0, 5, true), record(1, 5, true), record(2, 10, true)];
        let curve = estimate("All", &records).expect("estimate");
        assert_eq!(curve.points.len(), 2);
        assert_eq!(curve.points[0].time, 5);
        assert!((curve.points[0].survival - 1.0 / 3.0).abs() < 1e-12);
        assert_eq!(curve.points[1].time, 10);
        assert_eq!(curve.points[1].survival, 0.0);
        assert_eq!(curve.n_total, 3);
        assert_eq!(curve.n_events, 3);
    }

    #[test]
    fn single_record_at_time_zero_drops_to_zero() {
        let curve = estimate("All", &[record(0, 0, true)]).expect("estimate");
        assert_eq!(curve.points, vec![CurvePoint { time: 0, survival: 0.0 }]);
    }

    #[test]
    fn all_records_at_one_time_survive_to_zero() {
        let records: Vec<Record> = (0..4).map(|row| record(row, 7, true)).collect();
        let curve = estimate("All", &records).expect("estimate");
        assert_eq!(curve.points.len(), 1);
        assert_eq!(curve.points[0].survival, 0.0);
    }

    #[test]
    fn censored_records_reduce_risk_without_events() {
        // Event at t=2 among 3 at risk (S = 2/3); censored at t=4 leaves one
        // at risk; event at t=6 with n=1 drives S to 0.
        let records = vec![
            record(0, 2, true),
            record(1, 4, false),
            record(2, 6, true),
        ];
        let curve = estimate("All", &records).expect("estimate");
        assert_eq!(curve.n_events, 2);
        assert_eq!(curve.points.len(), 3);
        assert!((curve.points[0].survival - 2.0 / 3.0).abs() < 1e-12);
        // Censored-only time keeps the running probability
        assert_eq!(curve.points[1].survival, curve.points[0].survival);
        assert_eq!(curve.points[2].survival, 0.0);
    }

    #[test]
    fn empty_group_is_a_signal() {
        let error = estimate("stage = IV", &[]).unwrap_err();
        assert!(matches!(error, SurvError::EmptyGroup { .. }));
    }

    #[test]
    fn missing_time_is_rejected_defensively() {
        let mut bad = record(3, 5, true);
        bad.survival_time = None;
        let error = estimate("All", &[bad]).unwrap_err();
        assert!(matches!(error, SurvError::MissingSurvivalTime { row: 3 }));
    }

    #[test]
    fn negative_time_is_rejected() {
        let error = estimate("All", &[record(1, -3, true)]).unwrap_err();
        assert!(matches!(
            error,
            SurvError::NegativeSurvivalTime { row: 1, days: -3 }
        ));
    }

    #[test]
    fn input_is_not_mutated() {
        let records = vec![record(0, 5, true), record(1, 3, true)];
        let before = records.clone();
        let _ = estimate("All", &records).expect("estimate");
        assert_eq!(records, before);
    }

    #[test]
    fn times_are_strictly_increasing() {
        let records = vec![
            record(0, 9, true),
            record(1, 3, true),
            record(2, 9, true),
            record(3, 1, true),
        ];
        let curve = estimate("All", &records).expect("estimate");
        let times: Vec<i64> = curve.points.iter().map(|p| p.time).collect();
        assert_eq!(times, vec![1, 3, 9]);
    }
}
