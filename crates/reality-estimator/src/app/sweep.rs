//! Control sweep
//!
//! This module evaluates the estimator at every position of one integer
//! control while holding the other criteria fixed, for "what if" tables.

use crate::constants::{AGE_RANGE, HEIGHT_RANGE, SALARY_RANGE, SALARY_STEP};
use crate::domain::criteria::{Criteria, CriteriaError, CriteriaField};
use crate::domain::dataset::ReferenceDataset;
use crate::domain::estimator::estimate;
use rayon::prelude::*;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Integer control that can be swept
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SweepAxis {
    MinAge,
    MaxAge,
    MinHeight,
    MaxHeight,
    MinSalary,
}

impl SweepAxis {
    pub const ALL: [SweepAxis; 5] = [
        Self::MinAge,
        Self::MaxAge,
        Self::MinHeight,
        Self::MaxHeight,
        Self::MinSalary,
    ];

    /// The criteria field this axis drives
    pub fn field(&self) -> CriteriaField {
        match self {
            Self::MinAge => CriteriaField::MinAge,
            Self::MaxAge => CriteriaField::MaxAge,
            Self::MinHeight => CriteriaField::MinHeight,
            Self::MaxHeight => CriteriaField::MaxHeight,
            Self::MinSalary => CriteriaField::MinSalary,
        }
    }

    /// Every control position, in ascending order
    pub fn positions(&self) -> Vec<i32> {
        let ((min, max), step) = match self {
            Self::MinAge | Self::MaxAge => (AGE_RANGE, 1),
            Self::MinHeight | Self::MaxHeight => (HEIGHT_RANGE, 1),
            Self::MinSalary => (SALARY_RANGE, SALARY_STEP),
        };
        (min..=max).step_by(step as usize).collect()
    }

    /// Copy of `base` with this axis set to `value`
    pub fn apply(&self, base: &Criteria, value: i32) -> Criteria {
        let mut criteria = base.clone();
        match self {
            Self::MinAge => criteria.min_age = value,
            Self::MaxAge => criteria.max_age = value,
            Self::MinHeight => criteria.min_height = value,
            Self::MaxHeight => criteria.max_height = value,
            Self::MinSalary => criteria.min_salary = value,
        }
        criteria
    }
}

impl FromStr for SweepAxis {
    type Err = CriteriaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let field: CriteriaField = s
            .parse()
            .map_err(|_| CriteriaError::UnknownAxis(s.to_string()))?;
        Self::ALL
            .into_iter()
            .find(|axis| axis.field() == field)
            .ok_or_else(|| CriteriaError::UnknownAxis(s.to_string()))
    }
}

impl fmt::Display for SweepAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field().name())
    }
}

/// One estimate along a sweep
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SweepPoint {
    /// Axis position
    pub value: i32,
    pub percentage: f64,
    pub count: u64,
}

/// Estimate at every position of `axis`, holding the rest of `base` fixed
///
/// Positions are evaluated in parallel; the output is in axis order.
pub fn sweep(base: &Criteria, axis: SweepAxis, data: &ReferenceDataset) -> Vec<SweepPoint> {
    let positions = axis.positions();
    debug!(%axis, points = positions.len(), "sweeping");

    positions
        .into_par_iter()
        .map(|value| {
            let result = estimate(&axis.apply(base, value), data);
            SweepPoint {
                value,
                percentage: result.percentage,
                count: result.count,
            }
        })
        .collect()
}
