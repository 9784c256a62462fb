//! Domain layer - Pure computational logic
//!
//! This module contains the criteria model, the reference tables and the
//! estimator, without I/O or shared state.

pub mod criteria;
pub mod dataset;
pub mod estimator;
pub mod result;
