//! Nested-struct delegation.

use crate::validate::error::Error;
use crate::validate::schema::{Schema, Validator};

/// Delegates validation of a field to another schema.
pub struct Nested<T> {
    schema: Schema<T>,
}

/// Create a validator that runs `schema` against the field value.
///
/// Only the first error of the nested schema is surfaced, carrying the
/// nested field name.
pub fn nested<T>(schema: Schema<T>) -> Nested<T> {
    Nested { schema }
}

impl<T: Clone + 'static> Validator<T> for Nested<T> {
    fn validate(&self, value: &T) -> Option<Error> {
        self.schema.validate(value).get().first().cloned()
    }
}
