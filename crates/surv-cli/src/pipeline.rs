//! Analysis pipeline with explicit stages.
//!
//! The pipeline follows these stages in order:
//! 1. **Ingest**: read the source CSV into raw records
//! 2. **Transform**: derive survival time, year, clean stage; apply the
//!    negative-time policy
//! 3. **Filter**: apply the inclusion criteria
//! 4. **Partition**: split into comparison groups
//! 5. **Estimate**: one Kaplan-Meier curve per group
//!
//! Each stage takes the output of the previous stage and returns typed
//! results; no stage mutates its input.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, info, info_span, warn};

use surv_analysis::{ObservedValues, estimate, filter_records, partition};
use surv_ingest::{raw_records, read_csv_table};
use surv_model::{
    CohortReport, ExclusionCounts, FilterCriteria, GroupSummary, GroupingKey, Record,
    SurvError, SurvivalCurve,
};
use surv_transform::{NegativeTimePolicy, transform_all};

/// Everything needed to run one analysis.
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    pub input: PathBuf,
    pub criteria: FilterCriteria,
    pub group_by: GroupingKey,
    pub negative_times: NegativeTimePolicy,
}

/// The analysis result handed to renderers and exporters: the bookkeeping
/// report plus one curve per non-empty group, in deterministic label order.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisOutcome {
    pub report: CohortReport,
    pub curves: Vec<SurvivalCurve>,
}

/// Run the full pipeline for one request.
pub fn run_analysis(request: &AnalysisRequest) -> Result<AnalysisOutcome> {
    let analyze_span = info_span!("analyze", input = %request.input.display());
    let _analyze_guard = analyze_span.enter();
    let analyze_start = Instant::now();

    let (records, input_rows, stats) = load_records(&request.input, request.negative_times)?;

    // Only records with a survival time can contribute to estimation.
    let usable: Vec<Record> = records
        .iter()
        .filter(|record| record.is_usable())
        .cloned()
        .collect();

    let filter_start = Instant::now();
    let filtered = filter_records(&usable, &request.criteria);
    debug!(
        input = usable.len(),
        output = filtered.len(),
        duration_ms = filter_start.elapsed().as_millis(),
        "filter stage complete"
    );
    if filtered.is_empty() {
        warn!("no data under current filters");
    }

    let groups = partition(&filtered, request.group_by);

    let mut curves = Vec::with_capacity(groups.len());
    let mut summaries = Vec::with_capacity(groups.len());
    let mut empty_groups = Vec::new();
    for (label, members) in &groups {
        let estimate_span = info_span!("estimate", group = %label);
        let _estimate_guard = estimate_span.enter();
        match estimate(label, members) {
            Ok(curve) => {
                summaries.push(GroupSummary {
                    label: label.clone(),
                    records: curve.n_total,
                    events: curve.n_events,
                    curve_points: curve.points.len(),
                });
                curves.push(curve);
            }
            Err(SurvError::EmptyGroup { label }) => {
                warn!(group = %label, "nothing to estimate");
                empty_groups.push(label);
            }
            Err(error) => {
                return Err(error).with_context(|| format!("estimate group '{label}'"));
            }
        }
    }

    let report = CohortReport {
        input_rows,
        usable_records: stats.usable,
        filtered_records: filtered.len(),
        excluded: ExclusionCounts {
            missing_date: stats.missing_date,
            negative_time: stats.negative_excluded,
            clamped_time: stats.clamped,
        },
        groups: summaries,
        empty_groups,
    };

    info!(
        input_rows,
        usable_records = report.usable_records,
        filtered_records = report.filtered_records,
        group_count = curves.len(),
        duration_ms = analyze_start.elapsed().as_millis(),
        "analysis complete"
    );
    Ok(AnalysisOutcome { report, curves })
}

/// List the distinct filterable values observed in a file.
pub fn observed_columns(input: &Path) -> Result<ObservedValues> {
    let (records, _, _) = load_records(input, NegativeTimePolicy::Exclude)?;
    Ok(ObservedValues::collect(&records))
}

/// Ingest and transform stages shared by `analyze` and `columns`.
fn load_records(
    input: &Path,
    negative_times: NegativeTimePolicy,
) -> Result<(Vec<Record>, usize, surv_transform::TransformStats)> {
    let ingest_start = Instant::now();
    let raws = info_span!("ingest").in_scope(|| -> Result<_> {
        let table =
            read_csv_table(input).with_context(|| format!("read {}", input.display()))?;
        let raws = raw_records(&table);
        debug!(
            rows = raws.len(),
            columns = table.headers.len(),
            duration_ms = ingest_start.elapsed().as_millis(),
            "ingest complete"
        );
        Ok(raws)
    })?;
    let input_rows = raws.len();

    let transform_start = Instant::now();
    let cohort = info_span!("transform").in_scope(|| {
        transform_all(&raws, negative_times).context("transform records")
    })?;
    debug!(
        usable = cohort.stats.usable,
        missing_date = cohort.stats.missing_date,
        duration_ms = transform_start.elapsed().as_millis(),
        "transform stage complete"
    );
    Ok((cohort.records, input_rows, cohort.stats))
}
