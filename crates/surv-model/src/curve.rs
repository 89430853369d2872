//! Survival step functions produced by the estimator.

use serde::{Deserialize, Serialize};

/// One step of a survival curve: the estimated probability of surviving
/// past `time` days.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    /// Days since diagnosis.
    pub time: i64,
    /// Estimated survival probability, in `[0, 1]`.
    pub survival: f64,
}

/// An ordered survival step function for one comparison group.
///
/// Points are strictly increasing in time and non-increasing in probability.
/// The curve conceptually starts at `(0, 1.0)` before the first observed
/// time. Immutable after creation; any renderer can consume it as an ordered
/// list of `(time, probability)` pairs plus the label for legending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurvivalCurve {
    /// Group label for legending, e.g. "All" or "stage = III".
    pub label: String,
    pub points: Vec<CurvePoint>,
    /// Records that entered the estimate.
    pub n_total: usize,
    /// Observed events among them.
    pub n_events: usize,
}

impl SurvivalCurve {
    /// Step-function lookup: survival probability at `time` days.
    ///
    /// Returns 1.0 before the first observed time.
    pub fn survival_at(&self, time: i64) -> f64 {
        self.points
            .iter()
            .take_while(|point| point.time <= time)
            .last()
            .map_or(1.0, |point| point.survival)
    }

    /// Final value of the step function, or 1.0 for a curve with no points.
    pub fn final_survival(&self) -> f64 {
        self.points.last().map_or(1.0, |point| point.survival)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn curve() -> SurvivalCurve {
        SurvivalCurve {
            label: "All".to_string(),
            points: vec![
                CurvePoint {
                    time: 5,
                    survival: 0.5,
                },
                CurvePoint {
                    time: 10,
                    survival: 0.25,
                },
            ],
            n_total: 4,
            n_events: 3,
        }
    }

    #[test]
    fn survival_at_steps_down() {
        let curve = curve();
        assert_eq!(curve.survival_at(0), 1.0);
        assert_eq!(curve.survival_at(4), 1.0);
        assert_eq!(curve.survival_at(5), 0.5);
        assert_eq!(curve.survival_at(9), 0.5);
        assert_eq!(curve.survival_at(100), 0.25);
    }

    #[test]
    fn final_survival_uses_last_point() {
        assert_eq!(curve().final_survival(), 0.25);
    }
}
