use thiserror::Error;

/// Errors surfaced by the estimation stages.
///
/// Unparseable fields and incomplete records are not errors: they degrade to
/// nulled fields or excluded records and are counted in the [`CohortReport`].
///
/// [`CohortReport`]: crate::report::CohortReport
#[derive(Debug, Error)]
pub enum SurvError {
    /// A group reached the estimator with zero records. This is a signal,
    /// not a crash: callers skip the group and report "nothing to estimate".
    #[error("group '{label}' has no records to estimate")]
    EmptyGroup { label: String },
    /// A record without a survival time reached the estimator. Upstream
    /// filtering should have removed it.
    #[error("record at row {row} has no survival time")]
    MissingSurvivalTime { row: usize },
    /// A negative survival time reached the estimator. The transform stage
    /// applies the configured negative-time policy before this point.
    #[error("record at row {row} has a negative survival time ({days} days)")]
    NegativeSurvivalTime { row: usize, days: i64 },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Message(String),
}

pub type Result<T> = std::result::Result<T, SurvError>;
