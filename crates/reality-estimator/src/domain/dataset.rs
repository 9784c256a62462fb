//! Reference population distributions
//!
//! This module holds the static Cyprus male population tables the estimator
//! multiplies together. The literal values are part of the estimator's
//! contract and must not be renormalized.

use crate::constants::{
    BODY_TYPE_FALLBACK, EDUCATION_FALLBACK, MARITAL_FALLBACK, RELIGION_FALLBACK,
    SMOKING_FALLBACK, TOTAL_POPULATION,
};

/// A contiguous sub-range of a numeric dimension
///
/// A missing bound means the bucket is open on that side.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RangeBucket {
    pub label: &'static str,
    pub lower: Option<i32>,
    pub upper: Option<i32>,
    pub mass: f64,
}

impl RangeBucket {
    /// Check whether a `[min, max]` selection touches this bucket
    ///
    /// Inclusive on both edges; any overlap counts the whole bucket.
    #[inline]
    pub fn overlaps(&self, min: i32, max: i32) -> bool {
        self.upper.is_none_or(|upper| min <= upper) && self.lower.is_none_or(|lower| max >= lower)
    }
}

/// Inclusion rule of a salary bracket against the caller's minimum
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SalaryRule {
    /// Included when the minimum is at most this value
    AtMost(i32),
    /// Included when the minimum is strictly above this value
    Above(i32),
}

/// A salary bracket with its population mass
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SalaryBracket {
    pub label: &'static str,
    pub rule: SalaryRule,
    pub mass: f64,
}

impl SalaryBracket {
    #[inline]
    pub fn includes(&self, min_salary: i32) -> bool {
        match self.rule {
            SalaryRule::AtMost(edge) => min_salary <= edge,
            SalaryRule::Above(edge) => min_salary > edge,
        }
    }
}

/// Flat category table with a fallback for codes it does not list
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CategoryTable {
    pub entries: &'static [(&'static str, f64)],
    pub fallback: f64,
}

impl CategoryTable {
    /// Probability of a listed code
    pub fn mass(&self, code: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(key, _)| *key == code)
            .map(|(_, mass)| *mass)
    }

    /// Probability of a code, or the fallback when it is not listed
    pub fn mass_or_fallback(&self, code: &str) -> f64 {
        self.mass(code).unwrap_or(self.fallback)
    }

    pub fn sum(&self) -> f64 {
        self.entries.iter().map(|(_, mass)| mass).sum()
    }
}

/// The full set of reference distributions
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReferenceDataset {
    pub total_population: u64,
    pub age: &'static [RangeBucket],
    pub height: &'static [RangeBucket],
    pub religion: CategoryTable,
    pub salary: &'static [SalaryBracket],
    pub body_type: CategoryTable,
    pub education: CategoryTable,
    pub smoking: CategoryTable,
    pub marital: CategoryTable,
}

impl ReferenceDataset {
    /// The built-in Cyprus dataset
    pub fn cyprus() -> &'static ReferenceDataset {
        &CYPRUS
    }

    /// Sum of the age table (0.77 for the Cyprus data)
    pub fn age_sum(&self) -> f64 {
        self.age.iter().map(|b| b.mass).sum()
    }

    pub fn height_sum(&self) -> f64 {
        self.height.iter().map(|b| b.mass).sum()
    }

    pub fn salary_sum(&self) -> f64 {
        self.salary.iter().map(|b| b.mass).sum()
    }
}

// =============================================================================
// Cyprus tables
// =============================================================================

const fn bucket(label: &'static str, lower: Option<i32>, upper: Option<i32>, mass: f64) -> RangeBucket {
    RangeBucket {
        label,
        lower,
        upper,
        mass,
    }
}

static AGE_BUCKETS: [RangeBucket; 6] = [
    bucket("18-24", None, Some(24), 0.08),
    bucket("25-34", Some(25), Some(34), 0.15),
    bucket("35-44", Some(35), Some(44), 0.14),
    bucket("45-54", Some(45), Some(54), 0.13),
    bucket("55-64", Some(55), Some(64), 0.12),
    bucket("65+", Some(65), None, 0.15),
];

// Adjacent height buckets share their edge value.
static HEIGHT_BUCKETS: [RangeBucket; 6] = [
    bucket("under165", None, Some(165), 0.05),
    bucket("165-170", Some(165), Some(170), 0.20),
    bucket("170-175", Some(170), Some(175), 0.30),
    bucket("175-180", Some(175), Some(180), 0.25),
    bucket("180-185", Some(180), Some(185), 0.15),
    bucket("over185", Some(185), None, 0.05),
];

static SALARY_BRACKETS: [SalaryBracket; 5] = [
    SalaryBracket {
        label: "under1000",
        rule: SalaryRule::AtMost(1000),
        mass: 0.15,
    },
    SalaryBracket {
        label: "1000-1500",
        rule: SalaryRule::AtMost(1500),
        mass: 0.25,
    },
    SalaryBracket {
        label: "1500-2500",
        rule: SalaryRule::AtMost(2500),
        mass: 0.35,
    },
    SalaryBracket {
        label: "2500-4000",
        rule: SalaryRule::AtMost(4000),
        mass: 0.18,
    },
    SalaryBracket {
        label: "over4000",
        rule: SalaryRule::Above(4000),
        mass: 0.07,
    },
];

static CYPRUS: ReferenceDataset = ReferenceDataset {
    total_population: TOTAL_POPULATION,
    age: &AGE_BUCKETS,
    height: &HEIGHT_BUCKETS,
    religion: CategoryTable {
        entries: &[
            ("orthodox", 0.95),
            ("catholic", 0.015),
            ("protestant", 0.01),
            ("muslim", 0.006),
            ("other", 0.019),
        ],
        fallback: RELIGION_FALLBACK,
    },
    salary: &SALARY_BRACKETS,
    body_type: CategoryTable {
        entries: &[
            ("slim", 0.25),
            ("athletic", 0.30),
            ("average", 0.35),
            ("heavyset", 0.10),
        ],
        fallback: BODY_TYPE_FALLBACK,
    },
    education: CategoryTable {
        entries: &[
            ("highschool", 0.30),
            ("bachelor", 0.45),
            ("master", 0.20),
            ("phd", 0.05),
        ],
        fallback: EDUCATION_FALLBACK,
    },
    smoking: CategoryTable {
        entries: &[("nonsmoker", 0.65), ("smoker", 0.35)],
        fallback: SMOKING_FALLBACK,
    },
    marital: CategoryTable {
        entries: &[("single", 0.35), ("divorced", 0.08), ("widowed", 0.02)],
        fallback: MARITAL_FALLBACK,
    },
};
