//! Transformation of raw registry rows into typed survival records.

pub mod dates;
pub mod stage;
pub mod transform;

pub use dates::parse_date;
pub use stage::clean_stage;
pub use transform::{
    NegativeTimePolicy, TransformStats, TransformedCohort, transform, transform_all,
};
