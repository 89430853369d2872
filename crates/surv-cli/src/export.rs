//! Curve and report export for external renderers.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use surv_model::SurvivalCurve;

use crate::pipeline::AnalysisOutcome;

/// Write the full outcome (report + curves) as pretty JSON.
pub fn write_json(path: &Path, outcome: &AnalysisOutcome) -> Result<()> {
    let mut file =
        File::create(path).with_context(|| format!("create {}", path.display()))?;
    serde_json::to_writer_pretty(&mut file, outcome)
        .with_context(|| format!("write json {}", path.display()))?;
    file.write_all(b"\n")?;
    Ok(())
}

/// Write the curves as flat CSV rows (`group,time,survival`), groups in
/// label order, suitable for any plotting tool.
pub fn write_curves_csv(path: &Path, curves: &[SurvivalCurve]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("create {}", path.display()))?;
    writer.write_record(["group", "time", "survival"])?;
    for curve in curves {
        for point in &curve.points {
            let time = point.time.to_string();
            let survival = point.survival.to_string();
            writer.write_record([curve.label.as_str(), time.as_str(), survival.as_str()])?;
        }
    }
    writer
        .flush()
        .with_context(|| format!("flush {}", path.display()))?;
    Ok(())
}
