//! Application layer - Use case implementations
//!
//! This module drives the estimator on behalf of a front end: editing
//! criteria, switching views, formatting results and sweeping controls.

pub mod report;
pub mod session;
pub mod sweep;
