//! Analytical core: filtering, partitioning, and Kaplan-Meier estimation.
//!
//! Every stage is a pure function over an immutable input collection and
//! produces a new collection or curve; nothing here performs I/O or holds
//! shared mutable state.

pub mod filter;
pub mod km;
pub mod partition;

pub use filter::{ObservedValues, filter_records};
pub use km::estimate;
pub use partition::{Group, partition};
