//! Record transformation and validation.
//!
//! Each raw record is transformed independently with no shared state:
//! unparseable fields become `None` and never fail the batch. Validation
//! applies the configured policy for negative survival times, which the
//! source data can produce when DTULTINFO precedes DTDIAG.

use chrono::Datelike;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use surv_model::{RawRecord, Record, SurvError};

use crate::dates::parse_date;
use crate::stage::clean_stage;

/// What to do with a record whose derived survival time is negative.
///
/// The source does not guarantee `last_info_date >= diagnosis_date`, so the
/// policy is explicit rather than an implicit correction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NegativeTimePolicy {
    /// Drop the record and count it as excluded.
    #[default]
    Exclude,
    /// Keep the record with its survival time clamped to zero.
    ClampToZero,
    /// Abort the run: treat inconsistent dates as a data-quality error.
    Fail,
}

/// Counts gathered while transforming a batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransformStats {
    pub input: usize,
    /// Records with a usable survival time after validation.
    pub usable: usize,
    /// Records excluded for lacking a computable survival time.
    pub missing_date: usize,
    /// Records excluded under [`NegativeTimePolicy::Exclude`].
    pub negative_excluded: usize,
    /// Records clamped under [`NegativeTimePolicy::ClampToZero`].
    pub clamped: usize,
}

/// A transformed batch plus its bookkeeping.
#[derive(Debug, Clone)]
pub struct TransformedCohort {
    /// All transformed records, including ones without a survival time
    /// (the filter stage drops null-field records).
    pub records: Vec<Record>,
    pub stats: TransformStats,
}

/// Transform one raw record. Pure: no shared state, no failure modes.
///
/// Values the event column treats as "not observed" (censored): `0`,
/// `false`, `nao`, `não`, `no`, `n`. Anything else, including an absent
/// column, marks an observed event, matching the registry export where
/// every row is a recorded death.
pub fn transform(raw: &RawRecord) -> Record {
    let diagnosis_date = raw.diagnosis_date.as_deref().and_then(parse_date);
    let last_info_date = raw.last_info_date.as_deref().and_then(parse_date);
    let survival_time = match (diagnosis_date, last_info_date) {
        (Some(diag), Some(last)) => Some((last - diag).num_days()),
        _ => None,
    };
    Record {
        row: raw.row,
        diagnosis_date,
        last_info_date,
        survival_time,
        event_observed: raw.event.as_deref().map_or(true, parse_event),
        diagnosis_year: diagnosis_date.map(|date| date.year()),
        topo_group: raw.topo_group.clone(),
        stage_raw: raw.stage.clone(),
        stage_clean: raw.stage.as_deref().and_then(clean_stage),
    }
}

fn parse_event(value: &str) -> bool {
    !matches!(
        value.trim().to_lowercase().as_str(),
        "0" | "false" | "nao" | "não" | "no" | "n"
    )
}

/// Transform a whole batch and apply the negative-time policy.
///
/// Records without a survival time are kept (filtering excludes them by
/// field nullity) but counted; negative times are excluded, clamped, or
/// abort the run per `policy`.
pub fn transform_all(
    raws: &[RawRecord],
    policy: NegativeTimePolicy,
) -> Result<TransformedCohort, SurvError> {
    let mut stats = TransformStats {
        input: raws.len(),
        ..TransformStats::default()
    };
    let mut records = Vec::with_capacity(raws.len());

    for raw in raws {
        let mut record = transform(raw);
        match record.survival_time {
            None => {
                stats.missing_date += 1;
                records.push(record);
            }
            Some(days) if days < 0 => match policy {
                NegativeTimePolicy::Exclude => {
                    warn!(row = record.row, days, "negative survival time excluded");
                    stats.negative_excluded += 1;
                }
                NegativeTimePolicy::ClampToZero => {
                    warn!(row = record.row, days, "negative survival time clamped to 0");
                    record.survival_time = Some(0);
                    stats.clamped += 1;
                    stats.usable += 1;
                    records.push(record);
                }
                NegativeTimePolicy::Fail => {
                    return Err(SurvError::NegativeSurvivalTime {
                        row: record.row,
                        days,
                    });
                }
            },
            Some(_) => {
                stats.usable += 1;
                records.push(record);
            }
        }
    }

    debug!(
        input = stats.input,
        usable = stats.usable,
        missing_date = stats.missing_date,
        negative_excluded = stats.negative_excluded,
        clamped = stats.clamped,
        "transform complete"
    );
    Ok(TransformedCohort { records, stats })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(diag: &str, last: &str) -> RawRecord {
        RawRecord {
            row: 0,
            diagnosis_date: (!diag.is_empty()).then(|| diag.to_string()),
            last_info_date: (!last.is_empty()).then(|| last.to_string()),
            topo_group: None,
            stage: Some("IIIA".to_string()),
            event: None,
        }
    }

    #[test]
    fn derives_survival_time_in_days() {
        let record = transform(&raw("2020-01-01", "2020-01-31"));
        assert_eq!(record.survival_time, Some(30));
        assert_eq!(record.diagnosis_year, Some(2020));
        assert_eq!(record.stage_clean.as_deref(), Some("III"));
        assert!(record.event_observed);
    }

    #[test]
    fn missing_date_nulls_survival_time() {
        assert_eq!(transform(&raw("", "2020-01-31")).survival_time, None);
        assert_eq!(transform(&raw("2020-01-01", "")).survival_time, None);
        assert_eq!(transform(&raw("garbage", "2020-01-31")).survival_time, None);
    }

    #[test]
    fn event_column_marks_censored_rows() {
        let mut record = raw("2020-01-01", "2020-06-01");
        record.event = Some("0".to_string());
        assert!(!transform(&record).event_observed);
        record.event = Some("1".to_string());
        assert!(transform(&record).event_observed);
        record.event = Some("NAO".to_string());
        assert!(!transform(&record).event_observed);
    }

    #[test]
    fn exclude_policy_drops_negative_times() {
        let raws = vec![raw("2020-06-01", "2020-01-01"), raw("2020-01-01", "2020-06-01")];
        let cohort = transform_all(&raws, NegativeTimePolicy::Exclude).expect("transform");
        assert_eq!(cohort.records.len(), 1);
        assert_eq!(cohort.stats.negative_excluded, 1);
        assert_eq!(cohort.stats.usable, 1);
    }

    #[test]
    fn clamp_policy_keeps_record_at_zero() {
        let raws = vec![raw("2020-06-01", "2020-01-01")];
        let cohort = transform_all(&raws, NegativeTimePolicy::ClampToZero).expect("transform");
        assert_eq!(cohort.records[0].survival_time, Some(0));
        assert_eq!(cohort.stats.clamped, 1);
        assert_eq!(cohort.stats.usable, 1);
    }

    #[test]
    fn fail_policy_aborts() {
        let raws = vec![raw("2020-06-01", "2020-01-01")];
        let error = transform_all(&raws, NegativeTimePolicy::Fail).unwrap_err();
        assert!(matches!(
            error,
            SurvError::NegativeSurvivalTime { days: -152, .. }
        ));
    }
}
