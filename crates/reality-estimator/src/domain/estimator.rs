//! Match estimation
//!
//! Multiplies one match mass per criteria dimension into a running
//! percentage, under the assumption that the dimensions are independent.
//!
//! The product starts at 100 rather than 1, and the masses are applied in a
//! fixed order (age, height, religion, salary, body type, education, smoking,
//! marital). Both are observable in the last bits of the result and are kept
//! as-is.

use crate::constants::{PERCENTAGE_FLOOR, PERCENTAGE_SCALE};
use crate::domain::criteria::{Categorical, Criteria};
use crate::domain::dataset::{CategoryTable, RangeBucket, ReferenceDataset, SalaryBracket};
use crate::domain::result::EstimationResult;
use serde::Serialize;
use tracing::{debug, trace};

/// Per-dimension multipliers behind one estimate
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchBreakdown {
    pub age: f64,
    pub height: f64,
    pub religion: f64,
    pub salary: f64,
    pub body_type: f64,
    pub education: f64,
    pub smoking_status: f64,
    pub marital_status: f64,
}

impl MatchBreakdown {
    /// Multipliers in application order, with their field names
    pub fn multipliers(&self) -> [(&'static str, f64); 8] {
        [
            ("age", self.age),
            ("height", self.height),
            ("religion", self.religion),
            ("salary", self.salary),
            ("bodyType", self.body_type),
            ("education", self.education),
            ("smokingStatus", self.smoking_status),
            ("maritalStatus", self.marital_status),
        ]
    }

    /// Product of all multipliers on the percentage scale, before the floor
    pub fn raw_percentage(&self) -> f64 {
        self.multipliers()
            .iter()
            .fold(PERCENTAGE_SCALE, |p, (_, m)| p * m)
    }
}

/// Sum the mass of every bucket the `[min, max]` selection overlaps
///
/// Returns 0.0 when nothing overlaps.
pub fn range_match(buckets: &[RangeBucket], min: i32, max: i32) -> f64 {
    buckets
        .iter()
        .filter(|b| b.overlaps(min, max))
        .fold(0.0, |acc, b| acc + b.mass)
}

/// Sum the mass of every salary bracket included for this minimum
pub fn salary_match(brackets: &[SalaryBracket], min_salary: i32) -> f64 {
    brackets
        .iter()
        .filter(|b| b.includes(min_salary))
        .fold(0.0, |acc, b| acc + b.mass)
}

/// Multiplier of one categorical choice
///
/// `Any` contributes 1.0; unlisted codes use the table's fallback.
pub fn category_multiplier<C: Categorical + ?Sized>(table: &CategoryTable, choice: &C) -> f64 {
    if choice.is_any() {
        1.0
    } else {
        table.mass_or_fallback(choice.code())
    }
}

/// Compute every dimension's multiplier without combining them
pub fn estimate_breakdown(criteria: &Criteria, data: &ReferenceDataset) -> MatchBreakdown {
    let breakdown = MatchBreakdown {
        age: range_match(data.age, criteria.min_age, criteria.max_age),
        height: range_match(data.height, criteria.min_height, criteria.max_height),
        religion: category_multiplier(&data.religion, &criteria.religion),
        salary: salary_match(data.salary, criteria.min_salary),
        body_type: category_multiplier(&data.body_type, &criteria.body_type),
        education: category_multiplier(&data.education, &criteria.education),
        smoking_status: category_multiplier(&data.smoking, &criteria.smoking_status),
        marital_status: category_multiplier(&data.marital, &criteria.marital_status),
    };

    for (name, multiplier) in breakdown.multipliers() {
        trace!(dimension = name, multiplier, "match mass");
    }

    breakdown
}

/// Estimate the share and number of the population matching all criteria
///
/// Never fails: reversed or out-of-domain ranges produce a zero mass for
/// that dimension, and the result is floored at 0.01%.
pub fn estimate(criteria: &Criteria, data: &ReferenceDataset) -> EstimationResult {
    let breakdown = estimate_breakdown(criteria, data);
    let percentage = breakdown.raw_percentage().max(PERCENTAGE_FLOOR);
    let count = population_count(percentage, data.total_population);

    debug!(percentage, count, ?breakdown, "estimated match");

    EstimationResult {
        percentage,
        count,
        criteria: criteria.clone(),
    }
}

/// Convert a percentage into a head count
///
/// `f64::round` rounds half away from zero; for the non-negative inputs seen
/// here that matches rounding half up.
#[inline]
pub fn population_count(percentage: f64, total_population: u64) -> u64 {
    ((percentage / PERCENTAGE_SCALE) * total_population as f64).round() as u64
}
