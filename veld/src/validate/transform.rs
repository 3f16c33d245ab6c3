//! Transform and parse pipelines around validators.
//!
//! A [`Transform`] rewrites the value before the wrapped validator sees it; a
//! [`Parse`] converts it to another type first. Neither form is recognized by
//! the code generator.

use crate::validate::error::Error;
use crate::validate::schema::Validator;

/// Applies a chain of transformations before validating.
pub struct Transform<T> {
    inner: Box<dyn Validator<T>>,
    transforms: Vec<Box<dyn Fn(T) -> T>>,
    default_val: Option<T>,
    catch_val: Option<T>,
}

impl<T: 'static> Transform<T> {
    /// Wrap a validator with an empty transformation chain.
    pub fn new(inner: impl Validator<T> + 'static) -> Self {
        Self {
            inner: Box::new(inner),
            transforms: Vec::new(),
            default_val: None,
            catch_val: None,
        }
    }

    /// Append a transformation to the chain.
    pub fn pipe(mut self, f: impl Fn(T) -> T + 'static) -> Self {
        self.transforms.push(Box::new(f));
        self
    }

    /// Substitute `val` when the input is the type's zero value.
    pub fn default_value(mut self, val: T) -> Self {
        self.default_val = Some(val);
        self
    }

    /// Fall back to validating `val` when the transformed value fails.
    pub fn catch(mut self, val: T) -> Self {
        self.catch_val = Some(val);
        self
    }
}

impl<T> Validator<T> for Transform<T>
where
    T: Clone + Default + PartialEq,
{
    fn validate(&self, value: &T) -> Option<Error> {
        let mut value = value.clone();
        if let Some(ref default) = self.default_val {
            if value == T::default() {
                value = default.clone();
            }
        }

        for transform in &self.transforms {
            value = transform(value);
        }

        match self.inner.validate(&value) {
            Some(err) => match self.catch_val {
                Some(ref fallback) => self.inner.validate(fallback),
                None => Some(err),
            },
            None => None,
        }
    }
}

/// Parses the value into another type, then validates the result.
pub struct Parse<T, U> {
    parse: Box<dyn Fn(&T) -> Result<U, String>>,
    inner: Box<dyn Validator<U>>,
}

impl<T, U: 'static> Parse<T, U> {
    /// Create a parse validator from a fallible conversion.
    pub fn new(
        parse: impl Fn(&T) -> Result<U, String> + 'static,
        inner: impl Validator<U> + 'static,
    ) -> Self {
        Self {
            parse: Box::new(parse),
            inner: Box::new(inner),
        }
    }
}

impl<T, U> Validator<T> for Parse<T, U> {
    fn validate(&self, value: &T) -> Option<Error> {
        match (self.parse)(value) {
            Ok(parsed) => self.inner.validate(&parsed),
            Err(msg) => Some(Error::new(
                "parse_error",
                format!("failed to parse value: {msg}"),
            )),
        }
    }
}
