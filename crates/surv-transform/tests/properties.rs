//! Property tests for the transformation helpers.

use chrono::NaiveDate;
use proptest::prelude::*;

use surv_model::RawRecord;
use surv_transform::{clean_stage, transform};

proptest! {
    /// Cleaning strips every substage character and is idempotent.
    #[test]
    fn clean_stage_strips_and_is_idempotent(raw in "[IVXABC12 ]{0,12}") {
        if let Some(cleaned) = clean_stage(&raw) {
            prop_assert!(!cleaned.chars().any(|ch| "ABC12".contains(ch)));
            prop_assert_eq!(cleaned.trim(), cleaned.as_str());
            prop_assert_eq!(clean_stage(&cleaned), Some(cleaned.clone()));
        }
    }

    /// With both dates present, survival time is the exact day difference.
    #[test]
    fn survival_time_is_exact_day_difference(
        diag_offset in 0i64..20_000,
        span in -1_000i64..20_000,
    ) {
        let epoch = NaiveDate::from_ymd_opt(1950, 1, 1).unwrap();
        let diag = epoch + chrono::Duration::days(diag_offset);
        let last = diag + chrono::Duration::days(span);
        let raw = RawRecord {
            row: 0,
            diagnosis_date: Some(diag.format("%Y-%m-%d").to_string()),
            last_info_date: Some(last.format("%Y-%m-%d").to_string()),
            topo_group: None,
            stage: None,
            event: None,
        };
        let record = transform(&raw);
        prop_assert_eq!(record.survival_time, Some(span));
        prop_assert_eq!(record.diagnosis_year, Some(chrono::Datelike::year(&diag)));
    }
}
