//! Filter criteria and grouping dimensions for cohort selection.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Inclusion criteria over the three filterable record fields.
///
/// Each set is independent. `None` means "all observed distinct values" for
/// that field; a record with a null field never passes, because the observed
/// sets are computed from non-null values only. This is a deliberate
/// best-effort policy: records with unset fields are silently dropped from
/// consideration rather than erroring.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Allowed diagnosis years, or `None` for all observed years.
    pub years: Option<BTreeSet<i32>>,
    /// Allowed topography groups, or `None` for all observed groups.
    pub topo_groups: Option<BTreeSet<String>>,
    /// Allowed clean stage codes, or `None` for all observed stages.
    pub stages: Option<BTreeSet<String>>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to the given diagnosis years.
    #[must_use]
    pub fn with_years(mut self, years: impl IntoIterator<Item = i32>) -> Self {
        self.years = Some(years.into_iter().collect());
        self
    }

    /// Restrict to the given topography groups.
    #[must_use]
    pub fn with_topo_groups<I, S>(mut self, groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.topo_groups = Some(groups.into_iter().map(Into::into).collect());
        self
    }

    /// Restrict to the given clean stage codes.
    #[must_use]
    pub fn with_stages<I, S>(mut self, stages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stages = Some(stages.into_iter().map(Into::into).collect());
        self
    }

    /// True when no set has been narrowed.
    pub fn is_unrestricted(&self) -> bool {
        self.years.is_none() && self.topo_groups.is_none() && self.stages.is_none()
    }
}

/// Dimension used to partition the filtered cohort into comparison groups.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupingKey {
    /// Whole filtered cohort as a single group labeled "All".
    #[default]
    None,
    TopoGroup,
    StageClean,
    DiagnosisYear,
}

impl GroupingKey {
    /// Dimension name used in group labels ("topo = C50").
    pub fn dimension(self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::TopoGroup => Some("topo"),
            Self::StageClean => Some("stage"),
            Self::DiagnosisYear => Some("year"),
        }
    }
}
