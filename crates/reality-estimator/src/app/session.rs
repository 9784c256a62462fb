//! Criteria editing session
//!
//! This module holds the state a front end keeps between estimations: the
//! criteria being edited, which view is showing, and the last result.

use crate::domain::criteria::{Criteria, CriteriaError, CriteriaField, normalize_code};
use crate::domain::dataset::ReferenceDataset;
use crate::domain::estimator::estimate;
use crate::domain::result::EstimationResult;
use tracing::info;

/// Which screen the front end shows
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum View {
    /// Criteria entry
    #[default]
    Criteria,
    /// Estimation results
    Results,
}

/// Mutable front-end state around the pure estimator
#[derive(Clone, Debug)]
pub struct Session {
    criteria: Criteria,
    view: View,
    result: Option<EstimationResult>,
    data: &'static ReferenceDataset,
}

impl Session {
    /// Start on the criteria view with default criteria and the Cyprus data
    pub fn new() -> Self {
        Self::with_dataset(ReferenceDataset::cyprus())
    }

    /// Start with a different reference dataset
    pub fn with_dataset(data: &'static ReferenceDataset) -> Self {
        Self {
            criteria: Criteria::default(),
            view: View::Criteria,
            result: None,
            data,
        }
    }

    /// Start from existing criteria
    pub fn with_criteria(mut self, criteria: Criteria) -> Self {
        self.criteria = criteria;
        self
    }

    pub fn criteria(&self) -> &Criteria {
        &self.criteria
    }

    pub fn criteria_mut(&mut self) -> &mut Criteria {
        &mut self.criteria
    }

    pub fn view(&self) -> View {
        self.view
    }

    /// Last computed result, if any
    pub fn result(&self) -> Option<&EstimationResult> {
        self.result.as_ref()
    }

    /// Edit one field by name
    ///
    /// # Arguments
    /// * `field` - Field name, camelCase or snake_case
    /// * `value` - New value as text; categorical codes ignore case and
    ///   surrounding whitespace
    pub fn set(&mut self, field: &str, value: &str) -> Result<(), CriteriaError> {
        let field: CriteriaField = field.parse()?;
        if field.is_categorical() {
            self.criteria.set_field(field, &normalize_code(value))?;
        } else {
            self.criteria.set_field(field, value)?;
        }
        info!(%field, value, "criteria updated");
        Ok(())
    }

    /// Run the estimator on the current criteria and show the results
    pub fn calculate(&mut self) -> &EstimationResult {
        let result = estimate(&self.criteria, self.data);
        info!(
            percentage = result.percentage,
            count = result.count,
            "calculated"
        );
        self.view = View::Results;
        self.result.insert(result)
    }

    /// Restore the default criteria and return to the criteria view
    ///
    /// The last result is kept; it is just no longer on screen.
    pub fn reset(&mut self) {
        self.criteria = Criteria::default();
        self.view = View::Criteria;
        info!("criteria reset");
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
