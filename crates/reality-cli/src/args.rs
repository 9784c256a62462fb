//! Criteria flags shared by the CLI tools

use reality_estimator::{
    BodyType, Criteria, Education, MaritalStatus, Religion, SmokingStatus, normalize_code,
};
use tracing::warn;

/// Criteria flags; anything left unset keeps the default criteria value.
#[derive(clap::Args, Debug, Default)]
pub struct CriteriaArgs {
    /// Minimum age (18-65).
    #[arg(long, allow_hyphen_values = true)]
    pub min_age: Option<i32>,

    /// Maximum age (18-65).
    #[arg(long, allow_hyphen_values = true)]
    pub max_age: Option<i32>,

    /// Minimum height in cm (150-200).
    #[arg(long, allow_hyphen_values = true)]
    pub min_height: Option<i32>,

    /// Maximum height in cm (150-200).
    #[arg(long, allow_hyphen_values = true)]
    pub max_height: Option<i32>,

    /// Religion: any, orthodox, catholic, protestant, muslim, other.
    #[arg(long)]
    pub religion: Option<String>,

    /// Minimum monthly salary in EUR (500-8000, step 100).
    #[arg(long, allow_hyphen_values = true)]
    pub min_salary: Option<i32>,

    /// Body type: any, slim, athletic, average, heavyset.
    #[arg(long)]
    pub body_type: Option<String>,

    /// Education: any, highschool, bachelor, master, phd.
    #[arg(long)]
    pub education: Option<String>,

    /// Smoking status: any, nonsmoker, smoker.
    #[arg(long = "smoking")]
    pub smoking_status: Option<String>,

    /// Marital status: any, single, divorced, widowed.
    #[arg(long = "marital")]
    pub marital_status: Option<String>,
}

impl CriteriaArgs {
    /// Apply the given flags on top of the default criteria.
    ///
    /// Categorical codes ignore case and surrounding whitespace.
    pub fn to_criteria(&self) -> Criteria {
        let mut criteria = Criteria::default();

        if let Some(v) = self.min_age {
            criteria.min_age = v;
        }
        if let Some(v) = self.max_age {
            criteria.max_age = v;
        }
        if let Some(v) = self.min_height {
            criteria.min_height = v;
        }
        if let Some(v) = self.max_height {
            criteria.max_height = v;
        }
        if let Some(v) = self.min_salary {
            criteria.min_salary = v;
        }
        if let Some(v) = &self.religion {
            criteria.religion = Religion::from(normalize_code(v));
        }
        if let Some(v) = &self.body_type {
            criteria.body_type = BodyType::from(normalize_code(v));
        }
        if let Some(v) = &self.education {
            criteria.education = Education::from(normalize_code(v));
        }
        if let Some(v) = &self.smoking_status {
            criteria.smoking_status = SmokingStatus::from(normalize_code(v));
        }
        if let Some(v) = &self.marital_status {
            criteria.marital_status = MaritalStatus::from(normalize_code(v));
        }

        criteria
    }
}

/// Log every control-domain violation; the estimate still runs.
pub fn warn_invalid(criteria: &Criteria) {
    for err in criteria.validate() {
        warn!("{err}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        criteria: CriteriaArgs,
    }

    #[test]
    fn test_no_flags_gives_defaults() {
        let cli = TestCli::parse_from(["test"]);
        assert_eq!(cli.criteria.to_criteria(), Criteria::default());
    }

    #[test]
    fn test_flags_override_defaults() {
        let cli = TestCli::parse_from([
            "test",
            "--min-age",
            "30",
            "--religion",
            "orthodox",
            "--smoking",
            "nonsmoker",
            "--marital",
            "any",
        ]);
        let criteria = cli.criteria.to_criteria();

        assert_eq!(criteria.min_age, 30);
        assert_eq!(criteria.max_age, 40);
        assert_eq!(criteria.religion, Religion::Orthodox);
        assert_eq!(criteria.smoking_status, SmokingStatus::NonSmoker);
        assert_eq!(criteria.marital_status, MaritalStatus::Any);
    }

    #[test]
    fn test_codes_ignore_case() {
        let cli = TestCli::parse_from(["test", "--religion", "Orthodox", "--marital", " ANY "]);
        let criteria = cli.criteria.to_criteria();

        assert_eq!(criteria.religion, Religion::Orthodox);
        assert_eq!(criteria.marital_status, MaritalStatus::Any);
    }

    #[test]
    fn test_extreme_salary_is_reported() {
        let cli = TestCli::parse_from(["test", "--min-salary", "-2147483648"]);
        let criteria = cli.criteria.to_criteria();

        assert_eq!(criteria.min_salary, i32::MIN);
        assert!(!criteria.validate().is_empty());
        warn_invalid(&criteria);
    }

    #[test]
    fn test_unknown_code_kept() {
        let cli = TestCli::parse_from(["test", "--education", "mba"]);
        let criteria = cli.criteria.to_criteria();
        assert_eq!(criteria.education, Education::Unrecognized("mba".to_string()));
    }
}
