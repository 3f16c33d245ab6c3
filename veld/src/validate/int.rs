//! Integer validation rules.

use crate::validate::error::Error;
use crate::validate::schema::Validator;

/// Validates `i64` values.
#[derive(Debug, Clone, Default)]
pub struct IntValidator {
    min: Option<i64>,
    max: Option<i64>,
    positive: bool,
    negative: bool,
}

/// Create a new integer validator.
pub fn int() -> IntValidator {
    IntValidator::default()
}

impl IntValidator {
    /// Require the value to be at least `value`.
    pub fn min(mut self, value: i64) -> Self {
        self.min = Some(value);
        self
    }

    /// Require the value to be at most `value`.
    pub fn max(mut self, value: i64) -> Self {
        self.max = Some(value);
        self
    }

    /// Require the value to be strictly positive.
    pub fn positive(mut self) -> Self {
        self.positive = true;
        self
    }

    /// Require the value to be strictly negative.
    pub fn negative(mut self) -> Self {
        self.negative = true;
        self
    }
}

impl Validator<i64> for IntValidator {
    fn validate(&self, value: &i64) -> Option<Error> {
        if let Some(min) = self.min {
            if *value < min {
                return Some(Error::new(
                    "too_small",
                    format!("value must be at least {min}"),
                ));
            }
        }

        if let Some(max) = self.max {
            if *value > max {
                return Some(Error::new(
                    "too_large",
                    format!("value must be at most {max}"),
                ));
            }
        }

        if self.positive && *value <= 0 {
            return Some(Error::new("not_positive", "value must be positive"));
        }

        if self.negative && *value >= 0 {
            return Some(Error::new("not_negative", "value must be negative"));
        }

        None
    }
}
