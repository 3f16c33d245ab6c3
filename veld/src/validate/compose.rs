//! Composition combinators over validators.

use crate::validate::error::Error;
use crate::validate::schema::Validator;

/// Passes when at least one inner validator passes.
pub struct OneOf<T> {
    validators: Vec<Box<dyn Validator<T>>>,
}

/// Create a validator that passes if any of `validators` passes.
pub fn one_of<T>(validators: Vec<Box<dyn Validator<T>>>) -> OneOf<T> {
    OneOf { validators }
}

impl<T> Validator<T> for OneOf<T> {
    fn validate(&self, value: &T) -> Option<Error> {
        let mut last = None;
        for validator in &self.validators {
            match validator.validate(value) {
                None => return None,
                err => last = err,
            }
        }
        Some(Error {
            field: last.map(|e| e.field).unwrap_or_default(),
            code: "no_match".to_string(),
            message: "value did not match any of the requirements".to_string(),
        })
    }
}

/// Passes when every inner validator passes.
pub struct AllOf<T> {
    validators: Vec<Box<dyn Validator<T>>>,
}

/// Create a validator that passes if all of `validators` pass.
pub fn all_of<T>(validators: Vec<Box<dyn Validator<T>>>) -> AllOf<T> {
    AllOf { validators }
}

impl<T> Validator<T> for AllOf<T> {
    fn validate(&self, value: &T) -> Option<Error> {
        for validator in &self.validators {
            if let Some(err) = validator.validate(value) {
                return Some(err);
            }
        }
        None
    }
}

/// Inverts another validator.
pub struct Not<T> {
    validator: Box<dyn Validator<T>>,
}

/// Create a validator that passes if `validator` fails.
pub fn not<T>(validator: impl Validator<T> + 'static) -> Not<T> {
    Not {
        validator: Box::new(validator),
    }
}

impl<T> Validator<T> for Not<T> {
    fn validate(&self, value: &T) -> Option<Error> {
        match self.validator.validate(value) {
            None => Some(Error::new(
                "invalid_match",
                "value matched when it should not have",
            )),
            Some(_) => None,
        }
    }
}
