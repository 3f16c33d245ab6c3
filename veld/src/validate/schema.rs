//! Struct schemas: ordered per-field rules built with a fluent chain.

use crate::validate::error::{Error, Errors};

/// A validation rule for values of type `T`.
pub trait Validator<T> {
    /// Validate a value, returning `None` on success.
    fn validate(&self, value: &T) -> Option<Error>;
}

/// A validation schema for struct values of type `T`.
///
/// Rules run in declaration order; each failing rule contributes one
/// [`Error`] to the returned [`Errors`] collection.
pub struct Schema<T> {
    rules: Vec<FieldRule<T>>,
}

struct FieldRule<T> {
    field: String,
    check: Box<dyn Fn(&T) -> Option<Error>>,
}

/// Create an empty schema for values of type `T`.
pub fn schema<T>() -> Schema<T> {
    Schema { rules: Vec::new() }
}

impl<T: Clone + 'static> Schema<T> {
    /// Add a field rule without a field name.
    ///
    /// This is the handwritten schema DSL form; errors produced by the rule
    /// carry an empty `field`. Run `veld gen` over the declaring file to
    /// produce an equivalent schema with field names attached.
    pub fn field<F, V>(self, selector: impl Fn(T) -> F + 'static, validator: V) -> Self
    where
        F: 'static,
        V: Validator<F> + 'static,
    {
        self.field_as("", selector, validator)
    }

    /// Add a field rule under an explicit field name.
    ///
    /// Generated code uses this form: the generator reads the field name out
    /// of the selector at build time, so no runtime introspection is needed.
    pub fn field_as<F, V>(
        mut self,
        name: &str,
        selector: impl Fn(T) -> F + 'static,
        validator: V,
    ) -> Self
    where
        F: 'static,
        V: Validator<F> + 'static,
    {
        self.rules.push(FieldRule {
            field: name.to_string(),
            check: Box::new(move |value: &T| validator.validate(&selector(value.clone()))),
        });
        self
    }

    /// Run every rule against `value`, collecting one error per failure.
    pub fn validate(&self, value: &T) -> Errors {
        let mut errors = Errors::new();
        for rule in &self.rules {
            if let Some(mut err) = (rule.check)(value) {
                if err.field.is_empty() {
                    err.field = rule.field.clone();
                }
                errors.add(err);
            }
        }
        errors
    }
}
