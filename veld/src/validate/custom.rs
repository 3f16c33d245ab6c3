//! Custom predicate validators.

use crate::validate::error::Error;
use crate::validate::schema::Validator;

/// Wraps a closure as a standalone validator.
pub struct Custom<T> {
    check: Box<dyn Fn(&T) -> Option<Error>>,
}

/// Create a validator from a closure.
pub fn custom<T>(check: impl Fn(&T) -> Option<Error> + 'static) -> Custom<T> {
    Custom {
        check: Box::new(check),
    }
}

impl<T> Validator<T> for Custom<T> {
    fn validate(&self, value: &T) -> Option<Error> {
        (self.check)(value)
    }
}
