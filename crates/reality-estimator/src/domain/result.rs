//! Estimation result

use crate::domain::criteria::Criteria;
use serde::{Deserialize, Serialize};

/// Outcome of one estimation
///
/// Holds its own copy of the criteria it was computed from, so later edits
/// to the caller's criteria do not change it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimationResult {
    /// Matching share of the population, in percent (>= 0.01)
    pub percentage: f64,
    /// Estimated number of matching men
    pub count: u64,
    /// Criteria snapshot at call time
    pub criteria: Criteria,
}

impl EstimationResult {
    /// Width of the proportional bar, in percent of the full bar
    pub fn bar_width(&self) -> f64 {
        self.percentage.min(100.0)
    }
}
