//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "surv",
    version,
    about = "Kaplan-Meier survival curves from registry CSV exports",
    long_about = "Compute Kaplan-Meier survival curves from a registry CSV export.\n\n\
                  Derives survival time from diagnosis and last-information dates,\n\
                  filters by diagnosis year, topography group, and clinical stage,\n\
                  and estimates one curve per comparison group."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Estimate survival curves for a cohort CSV file.
    Analyze(AnalyzeArgs),

    /// List the distinct filterable values observed in a file.
    Columns(ColumnsArgs),
}

#[derive(Parser)]
pub struct AnalyzeArgs {
    /// Path to the registry CSV export.
    #[arg(value_name = "CSV_FILE")]
    pub input: PathBuf,

    /// Include only these diagnosis years (repeatable).
    #[arg(long = "year", value_name = "YEAR")]
    pub years: Vec<i32>,

    /// Include only these topography groups (repeatable).
    #[arg(long = "topo", value_name = "CODE")]
    pub topo_groups: Vec<String>,

    /// Include only these clean stage codes (repeatable), e.g. III or IV.
    #[arg(long = "stage", value_name = "STAGE")]
    pub stages: Vec<String>,

    /// Dimension to compare curves by.
    #[arg(long = "group-by", value_enum, default_value = "none")]
    pub group_by: GroupByArg,

    /// Policy for records whose last-information date precedes diagnosis.
    #[arg(long = "negative-times", value_enum, default_value = "exclude")]
    pub negative_times: NegativeTimesArg,

    /// Write the report and curves as JSON.
    #[arg(long = "out", value_name = "FILE")]
    pub out: Option<PathBuf>,

    /// Write the curve points as flat CSV (group,time,survival).
    #[arg(long = "curves-csv", value_name = "FILE")]
    pub curves_csv: Option<PathBuf>,

    /// Analyze and report without writing output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct ColumnsArgs {
    /// Path to the registry CSV export.
    #[arg(value_name = "CSV_FILE")]
    pub input: PathBuf,
}

/// Grouping dimension choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum GroupByArg {
    None,
    Topo,
    Stage,
    Year,
}

/// Negative survival time policy choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum NegativeTimesArg {
    Exclude,
    Clamp,
    Fail,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
