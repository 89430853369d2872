use std::path::PathBuf;

use surv_cli::pipeline::AnalysisOutcome;

#[derive(Debug)]
pub struct AnalysisResult {
    pub input: PathBuf,
    pub outcome: AnalysisOutcome,
    pub json_path: Option<PathBuf>,
    pub curves_csv_path: Option<PathBuf>,
    /// Set when the filtered cohort was empty: there was nothing to plot.
    pub has_errors: bool,
}
