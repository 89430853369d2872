//! Subcommand implementations.

use anyhow::Result;

use surv_cli::export::{write_curves_csv, write_json};
use surv_cli::pipeline::{AnalysisRequest, observed_columns, run_analysis};
use surv_model::{FilterCriteria, GroupingKey};
use surv_transform::NegativeTimePolicy;

use crate::cli::{AnalyzeArgs, ColumnsArgs, GroupByArg, NegativeTimesArg};
use crate::types::AnalysisResult;

pub fn run_analyze(args: &AnalyzeArgs) -> Result<AnalysisResult> {
    let mut criteria = FilterCriteria::new();
    if !args.years.is_empty() {
        criteria = criteria.with_years(args.years.iter().copied());
    }
    if !args.topo_groups.is_empty() {
        criteria = criteria.with_topo_groups(args.topo_groups.iter().cloned());
    }
    if !args.stages.is_empty() {
        criteria = criteria.with_stages(args.stages.iter().cloned());
    }

    let request = AnalysisRequest {
        input: args.input.clone(),
        criteria,
        group_by: match args.group_by {
            GroupByArg::None => GroupingKey::None,
            GroupByArg::Topo => GroupingKey::TopoGroup,
            GroupByArg::Stage => GroupingKey::StageClean,
            GroupByArg::Year => GroupingKey::DiagnosisYear,
        },
        negative_times: match args.negative_times {
            NegativeTimesArg::Exclude => NegativeTimePolicy::Exclude,
            NegativeTimesArg::Clamp => NegativeTimePolicy::ClampToZero,
            NegativeTimesArg::Fail => NegativeTimePolicy::Fail,
        },
    };

    let outcome = run_analysis(&request)?;

    let (json_path, curves_csv_path) = if args.dry_run {
        (None, None)
    } else {
        if let Some(path) = &args.out {
            write_json(path, &outcome)?;
        }
        if let Some(path) = &args.curves_csv {
            write_curves_csv(path, &outcome.curves)?;
        }
        (args.out.clone(), args.curves_csv.clone())
    };

    let has_errors = outcome.report.is_empty_cohort();
    Ok(AnalysisResult {
        input: args.input.clone(),
        outcome,
        json_path,
        curves_csv_path,
        has_errors,
    })
}

pub fn run_columns(args: &ColumnsArgs) -> Result<()> {
    let observed = observed_columns(&args.input)?;

    println!("Diagnosis years:");
    for year in &observed.years {
        println!("  {year}");
    }
    println!("Topography groups:");
    for topo in &observed.topo_groups {
        println!("  {topo}");
    }
    println!("Clean stages:");
    for stage in &observed.stages {
        println!("  {stage}");
    }
    Ok(())
}
