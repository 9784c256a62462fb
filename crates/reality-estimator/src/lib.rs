//! reality-estimator - How many men in Cyprus match a set of partner criteria
//!
//! This crate provides functionality to:
//! - Describe filter criteria (age, height, religion, salary, body type, education, smoking, marital status)
//! - Estimate the matching share and head count under an independence model
//! - Drive the estimator from a front end (session, result report, control sweeps)

pub mod app;
pub mod constants;
pub mod domain;

// Re-export commonly used types
pub use app::report::ResultReport;
pub use app::session::{Session, View};
pub use app::sweep::{SweepAxis, SweepPoint, sweep};
pub use constants::*;
pub use domain::criteria::{
    BodyType, Categorical, Criteria, CriteriaError, CriteriaField, Education, MaritalStatus,
    Religion, SmokingStatus, normalize_code,
};
pub use domain::dataset::ReferenceDataset;
pub use domain::estimator::{MatchBreakdown, estimate, estimate_breakdown};
pub use domain::result::EstimationResult;
