pub mod criteria;
pub mod curve;
pub mod error;
pub mod record;
pub mod report;

pub use criteria::{FilterCriteria, GroupingKey};
pub use curve::{CurvePoint, SurvivalCurve};
pub use error::{Result, SurvError};
pub use record::{RawRecord, Record};
pub use report::{CohortReport, ExclusionCounts, GroupSummary};
