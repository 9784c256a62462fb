//! Search criteria definitions
//!
//! This module defines the criteria record a caller edits field by field,
//! the categorical choice enums, and validation against the control domains.

use crate::constants::{
    AGE_RANGE, DEFAULT_MAX_AGE, DEFAULT_MAX_HEIGHT, DEFAULT_MIN_AGE, DEFAULT_MIN_HEIGHT,
    DEFAULT_MIN_SALARY, HEIGHT_RANGE, SALARY_RANGE, SALARY_STEP,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Common interface of the categorical choices
///
/// Every choice has an `Any` option that disables filtering on that dimension,
/// and a canonical lowercase code used for table lookups. Conversion from text
/// matches codes exactly; front ends that accept typed input run it through
/// [`normalize_code`] first.
pub trait Categorical {
    /// Canonical code (e.g. "orthodox"), or the verbatim input for unrecognized values
    fn code(&self) -> &str;

    /// True when the dimension should not filter
    fn is_any(&self) -> bool;

    /// True when the code is outside the known domain
    fn is_unrecognized(&self) -> bool;
}

/// Trim and lowercase a typed categorical code
pub fn normalize_code(input: &str) -> String {
    input.trim().to_ascii_lowercase()
}

macro_rules! categorical_choice {
    (
        $(#[$meta:meta])*
        $name:ident { $($(#[$vmeta:meta])* $variant:ident => $code:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            /// No filtering on this dimension
            #[default]
            Any,
            $($(#[$vmeta])* $variant,)+
            /// A code outside the known domain, kept verbatim
            Unrecognized(String),
        }

        impl $name {
            /// All known codes, in control order
            pub const CODES: &'static [&'static str] = &["any", $($code),+];
        }

        impl Categorical for $name {
            fn code(&self) -> &str {
                match self {
                    Self::Any => "any",
                    $(Self::$variant => $code,)+
                    Self::Unrecognized(code) => code,
                }
            }

            fn is_any(&self) -> bool {
                matches!(self, Self::Any)
            }

            fn is_unrecognized(&self) -> bool {
                matches!(self, Self::Unrecognized(_))
            }
        }

        impl From<&str> for $name {
            fn from(code: &str) -> Self {
                match code {
                    "any" => Self::Any,
                    $($code => Self::$variant,)+
                    _ => Self::Unrecognized(code.to_string()),
                }
            }
        }

        impl From<String> for $name {
            fn from(code: String) -> Self {
                Self::from(code.as_str())
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.code().to_string()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.code())
            }
        }
    };
}

categorical_choice! {
    /// Religion choice
    Religion {
        Orthodox => "orthodox",
        Catholic => "catholic",
        Protestant => "protestant",
        Muslim => "muslim",
        Other => "other",
    }
}

categorical_choice! {
    /// Body type choice
    BodyType {
        Slim => "slim",
        Athletic => "athletic",
        Average => "average",
        Heavyset => "heavyset",
    }
}

categorical_choice! {
    /// Education level choice
    Education {
        HighSchool => "highschool",
        Bachelor => "bachelor",
        Master => "master",
        Phd => "phd",
    }
}

categorical_choice! {
    /// Smoking status choice
    SmokingStatus {
        NonSmoker => "nonsmoker",
        Smoker => "smoker",
    }
}

categorical_choice! {
    /// Marital status choice
    MaritalStatus {
        Single => "single",
        Divorced => "divorced",
        Widowed => "widowed",
    }
}

/// Filter criteria for one estimation
///
/// Integer fields are not clamped: reversed or out-of-domain ranges are
/// representable and simply match less of the population.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Criteria {
    pub min_age: i32,
    pub max_age: i32,
    /// Minimum height in cm
    pub min_height: i32,
    /// Maximum height in cm
    pub max_height: i32,
    pub religion: Religion,
    /// Minimum monthly salary in EUR
    pub min_salary: i32,
    pub body_type: BodyType,
    pub education: Education,
    pub smoking_status: SmokingStatus,
    pub marital_status: MaritalStatus,
}

impl Default for Criteria {
    fn default() -> Self {
        Self {
            min_age: DEFAULT_MIN_AGE,
            max_age: DEFAULT_MAX_AGE,
            min_height: DEFAULT_MIN_HEIGHT,
            max_height: DEFAULT_MAX_HEIGHT,
            religion: Religion::Any,
            min_salary: DEFAULT_MIN_SALARY,
            body_type: BodyType::Any,
            education: Education::Any,
            smoking_status: SmokingStatus::Any,
            marital_status: MaritalStatus::Single,
        }
    }
}

impl Criteria {
    /// Set one field from its textual value
    ///
    /// Integer fields must parse as `i32`. Categorical fields accept any text
    /// and match it exactly; codes outside the domain are kept as `Unrecognized`.
    pub fn set_field(&mut self, field: CriteriaField, value: &str) -> Result<(), CriteriaError> {
        let parse_int = || {
            value
                .trim()
                .parse::<i32>()
                .map_err(|_| CriteriaError::InvalidNumber {
                    field: field.name(),
                    value: value.to_string(),
                })
        };

        match field {
            CriteriaField::MinAge => self.min_age = parse_int()?,
            CriteriaField::MaxAge => self.max_age = parse_int()?,
            CriteriaField::MinHeight => self.min_height = parse_int()?,
            CriteriaField::MaxHeight => self.max_height = parse_int()?,
            CriteriaField::MinSalary => self.min_salary = parse_int()?,
            CriteriaField::Religion => self.religion = Religion::from(value),
            CriteriaField::BodyType => self.body_type = BodyType::from(value),
            CriteriaField::Education => self.education = Education::from(value),
            CriteriaField::SmokingStatus => self.smoking_status = SmokingStatus::from(value),
            CriteriaField::MaritalStatus => self.marital_status = MaritalStatus::from(value),
        }
        Ok(())
    }

    /// Current value of one field, as text
    pub fn field_value(&self, field: CriteriaField) -> String {
        match field {
            CriteriaField::MinAge => self.min_age.to_string(),
            CriteriaField::MaxAge => self.max_age.to_string(),
            CriteriaField::MinHeight => self.min_height.to_string(),
            CriteriaField::MaxHeight => self.max_height.to_string(),
            CriteriaField::MinSalary => self.min_salary.to_string(),
            CriteriaField::Religion => self.religion.to_string(),
            CriteriaField::BodyType => self.body_type.to_string(),
            CriteriaField::Education => self.education.to_string(),
            CriteriaField::SmokingStatus => self.smoking_status.to_string(),
            CriteriaField::MaritalStatus => self.marital_status.to_string(),
        }
    }

    /// Check every field against its control domain
    ///
    /// The estimator never calls this; it is for callers that accept input
    /// from outside the controls. An empty vector means all fields are valid.
    pub fn validate(&self) -> Vec<CriteriaError> {
        let mut errors = Vec::new();

        let ranged = [
            (CriteriaField::MinAge, self.min_age, AGE_RANGE),
            (CriteriaField::MaxAge, self.max_age, AGE_RANGE),
            (CriteriaField::MinHeight, self.min_height, HEIGHT_RANGE),
            (CriteriaField::MaxHeight, self.max_height, HEIGHT_RANGE),
            (CriteriaField::MinSalary, self.min_salary, SALARY_RANGE),
        ];
        for (field, value, (min, max)) in ranged {
            if value < min || value > max {
                errors.push(CriteriaError::OutOfRange {
                    field: field.name(),
                    value,
                    min,
                    max,
                });
            }
        }

        if self.min_salary.rem_euclid(SALARY_STEP) != SALARY_RANGE.0.rem_euclid(SALARY_STEP) {
            errors.push(CriteriaError::OffStep {
                field: CriteriaField::MinSalary.name(),
                value: self.min_salary,
                step: SALARY_STEP,
            });
        }

        let categorical: [(CriteriaField, &dyn Categorical); 5] = [
            (CriteriaField::Religion, &self.religion),
            (CriteriaField::BodyType, &self.body_type),
            (CriteriaField::Education, &self.education),
            (CriteriaField::SmokingStatus, &self.smoking_status),
            (CriteriaField::MaritalStatus, &self.marital_status),
        ];
        for (field, value) in categorical {
            if value.is_unrecognized() {
                errors.push(CriteriaError::UnknownCode {
                    field: field.name(),
                    code: value.code().to_string(),
                });
            }
        }

        errors
    }
}

/// Names of the editable criteria fields
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CriteriaField {
    MinAge,
    MaxAge,
    MinHeight,
    MaxHeight,
    Religion,
    MinSalary,
    BodyType,
    Education,
    SmokingStatus,
    MaritalStatus,
}

impl CriteriaField {
    /// All fields, in form order
    pub const ALL: [CriteriaField; 10] = [
        Self::MinAge,
        Self::MaxAge,
        Self::MinHeight,
        Self::MaxHeight,
        Self::Religion,
        Self::MinSalary,
        Self::BodyType,
        Self::Education,
        Self::SmokingStatus,
        Self::MaritalStatus,
    ];

    /// True for the fields backed by a categorical choice
    pub fn is_categorical(&self) -> bool {
        matches!(
            self,
            Self::Religion
                | Self::BodyType
                | Self::Education
                | Self::SmokingStatus
                | Self::MaritalStatus
        )
    }

    /// camelCase field name
    pub fn name(&self) -> &'static str {
        match self {
            Self::MinAge => "minAge",
            Self::MaxAge => "maxAge",
            Self::MinHeight => "minHeight",
            Self::MaxHeight => "maxHeight",
            Self::Religion => "religion",
            Self::MinSalary => "minSalary",
            Self::BodyType => "bodyType",
            Self::Education => "education",
            Self::SmokingStatus => "smokingStatus",
            Self::MaritalStatus => "maritalStatus",
        }
    }
}

impl FromStr for CriteriaField {
    type Err = CriteriaError;

    /// Accepts camelCase (`minAge`) and snake_case (`min_age`) names
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect::<String>()
            .to_ascii_lowercase();

        Self::ALL
            .into_iter()
            .find(|field| field.name().to_ascii_lowercase() == normalized)
            .ok_or_else(|| CriteriaError::UnknownField(s.to_string()))
    }
}

impl fmt::Display for CriteriaField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Criteria editing and validation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CriteriaError {
    /// No criteria field has this name
    #[error("Unknown field: {0}")]
    UnknownField(String),
    /// Integer field given a non-integer value
    #[error("Invalid number for {field}: {value}")]
    InvalidNumber { field: &'static str, value: String },
    /// Value outside the control's domain
    #[error("{field} out of range: {value} (expected {min}-{max})")]
    OutOfRange {
        field: &'static str,
        value: i32,
        min: i32,
        max: i32,
    },
    /// Value not on the control's step grid
    #[error("{field} is not a multiple of {step}: {value}")]
    OffStep {
        field: &'static str,
        value: i32,
        step: i32,
    },
    /// Categorical code outside the known domain
    #[error("Unknown {field} code: {code}")]
    UnknownCode { field: &'static str, code: String },
    /// No sweep axis has this name
    #[error("Unknown sweep axis: {0}")]
    UnknownAxis(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_criteria() {
        let criteria = Criteria::default();
        assert_eq!(criteria.min_age, 25);
        assert_eq!(criteria.max_age, 40);
        assert_eq!(criteria.min_height, 170);
        assert_eq!(criteria.max_height, 190);
        assert_eq!(criteria.religion, Religion::Any);
        assert_eq!(criteria.min_salary, 1500);
        assert_eq!(criteria.body_type, BodyType::Any);
        assert_eq!(criteria.education, Education::Any);
        assert_eq!(criteria.smoking_status, SmokingStatus::Any);
        assert_eq!(criteria.marital_status, MaritalStatus::Single);
    }

    #[test]
    fn test_categorical_from_code() {
        assert_eq!(Religion::from("orthodox"), Religion::Orthodox);
        assert_eq!(Religion::from("muslim"), Religion::Muslim);
        assert_eq!(Education::from("phd"), Education::Phd);
        assert_eq!(SmokingStatus::from("any"), SmokingStatus::Any);
        assert_eq!(
            Religion::from("pastafarian"),
            Religion::Unrecognized("pastafarian".to_string())
        );
    }

    #[test]
    fn test_categorical_code_round_trip() {
        for code in Religion::CODES {
            assert_eq!(Religion::from(*code).code(), *code);
        }
        for code in MaritalStatus::CODES {
            assert_eq!(MaritalStatus::from(*code).code(), *code);
        }
    }

    #[test]
    fn test_categorical_lookup_is_exact() {
        assert_eq!(
            Religion::from("Orthodox"),
            Religion::Unrecognized("Orthodox".to_string())
        );
        assert_eq!(
            SmokingStatus::from(" ANY "),
            SmokingStatus::Unrecognized(" ANY ".to_string())
        );
        assert_eq!(Religion::from(normalize_code(" Orthodox ").as_str()), Religion::Orthodox);
        assert_eq!(SmokingStatus::from(normalize_code(" ANY ")), SmokingStatus::Any);
    }

    #[test]
    fn test_unrecognized_keeps_input() {
        let value = BodyType::from("Muscular");
        assert!(value.is_unrecognized());
        assert!(!value.is_any());
        assert_eq!(value.code(), "Muscular");
    }

    #[test]
    fn test_field_from_str() {
        assert_eq!("minAge".parse::<CriteriaField>(), Ok(CriteriaField::MinAge));
        assert_eq!("min_age".parse::<CriteriaField>(), Ok(CriteriaField::MinAge));
        assert_eq!(
            "smoking-status".parse::<CriteriaField>(),
            Ok(CriteriaField::SmokingStatus)
        );
        assert_eq!(
            "shoeSize".parse::<CriteriaField>(),
            Err(CriteriaError::UnknownField("shoeSize".to_string()))
        );
    }

    #[test]
    fn test_set_field() {
        let mut criteria = Criteria::default();
        criteria.set_field(CriteriaField::MinAge, "30").unwrap();
        criteria.set_field(CriteriaField::Religion, "catholic").unwrap();
        criteria.set_field(CriteriaField::MaritalStatus, "any").unwrap();

        assert_eq!(criteria.min_age, 30);
        assert_eq!(criteria.religion, Religion::Catholic);
        assert_eq!(criteria.marital_status, MaritalStatus::Any);
        assert_eq!(criteria.field_value(CriteriaField::MinAge), "30");
    }

    #[test]
    fn test_set_field_invalid_number() {
        let mut criteria = Criteria::default();
        let result = criteria.set_field(CriteriaField::MinSalary, "lots");
        assert!(matches!(
            result,
            Err(CriteriaError::InvalidNumber {
                field: "minSalary",
                ..
            })
        ));
        assert_eq!(criteria.min_salary, 1500);
    }

    #[test]
    fn test_validate_default_is_clean() {
        assert!(Criteria::default().validate().is_empty());
    }

    #[test]
    fn test_validate_reports_each_problem() {
        let criteria = Criteria {
            min_age: 10,
            max_height: 250,
            min_salary: 1550,
            religion: Religion::from("unknown"),
            ..Criteria::default()
        };

        let errors = criteria.validate();
        assert_eq!(errors.len(), 4);
        assert!(errors.contains(&CriteriaError::OutOfRange {
            field: "minAge",
            value: 10,
            min: 18,
            max: 65,
        }));
        assert!(errors.contains(&CriteriaError::OffStep {
            field: "minSalary",
            value: 1550,
            step: 100,
        }));
    }

    #[test]
    fn test_validate_extreme_integers() {
        for field in CriteriaField::ALL.into_iter().filter(|f| !f.is_categorical()) {
            for value in [i32::MIN, i32::MAX] {
                let mut criteria = Criteria::default();
                criteria.set_field(field, &value.to_string()).unwrap();

                let errors = criteria.validate();
                assert!(
                    errors
                        .iter()
                        .any(|e| matches!(e, CriteriaError::OutOfRange { field: f, .. } if *f == field.name())),
                    "{field} = {value}: {errors:?}"
                );
            }
        }
    }

    #[test]
    fn test_validate_salary_step_below_range() {
        let criteria = Criteria {
            min_salary: -100,
            ..Criteria::default()
        };
        assert!(!criteria
            .validate()
            .iter()
            .any(|e| matches!(e, CriteriaError::OffStep { .. })));

        let criteria = Criteria {
            min_salary: i32::MIN,
            ..Criteria::default()
        };
        assert!(criteria
            .validate()
            .contains(&CriteriaError::OffStep {
                field: "minSalary",
                value: i32::MIN,
                step: 100,
            }));
    }

    #[test]
    fn test_error_display() {
        let err = CriteriaError::OutOfRange {
            field: "maxAge",
            value: 70,
            min: 18,
            max: 65,
        };
        assert_eq!(err.to_string(), "maxAge out of range: 70 (expected 18-65)");
    }
}
