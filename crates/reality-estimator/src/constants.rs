//! Estimator constants
//!
//! Note: the reference distribution tables live in domain/dataset.rs.

// =============================================================================
// Population
// =============================================================================

/// Total male population the estimate is scaled to
pub const TOTAL_POPULATION: u64 = 684_000;

/// Starting value of the running product (percentage scale, not 1.0)
pub const PERCENTAGE_SCALE: f64 = 100.0;

/// Smallest percentage ever reported
pub const PERCENTAGE_FLOOR: f64 = 0.01;

// =============================================================================
// Fallback multipliers for unrecognized categorical codes
// =============================================================================

pub const RELIGION_FALLBACK: f64 = 0.01;
pub const BODY_TYPE_FALLBACK: f64 = 0.25;
pub const EDUCATION_FALLBACK: f64 = 0.25;
pub const SMOKING_FALLBACK: f64 = 0.5;
pub const MARITAL_FALLBACK: f64 = 0.45;

// =============================================================================
// Control domains
// =============================================================================

/// Age slider bounds (inclusive)
pub const AGE_RANGE: (i32, i32) = (18, 65);

/// Height slider bounds in cm (inclusive)
pub const HEIGHT_RANGE: (i32, i32) = (150, 200);

/// Minimum salary slider bounds in EUR (inclusive)
pub const SALARY_RANGE: (i32, i32) = (500, 8000);

/// Minimum salary slider step
pub const SALARY_STEP: i32 = 100;

// =============================================================================
// Default criteria (restored by reset)
// =============================================================================

pub const DEFAULT_MIN_AGE: i32 = 25;
pub const DEFAULT_MAX_AGE: i32 = 40;
pub const DEFAULT_MIN_HEIGHT: i32 = 170;
pub const DEFAULT_MAX_HEIGHT: i32 = 190;
pub const DEFAULT_MIN_SALARY: i32 = 1500;
