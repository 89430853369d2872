//! Library components for the `surv` CLI.

pub mod export;
pub mod logging;
pub mod pipeline;
