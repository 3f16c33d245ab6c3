//! Validation error values.
//!
//! Validation failures are ordinary data, never panics: a validator returns
//! `Option<Error>` and a schema collects them into an [`Errors`] value.

use serde::Serialize;

/// A single validation error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Error {
    /// Name of the failing field. Empty for unattributed errors.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub field: String,

    /// Stable machine-readable code (`too_short`, `invalid_email`, ...).
    pub code: String,

    /// Human-readable message.
    pub message: String,
}

impl Error {
    /// Create an error with an empty field name.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: String::new(),
            code: code.into(),
            message: message.into(),
        }
    }

    /// Attach a field name.
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = field.into();
        self
    }
}

/// A collection of validation errors, one per failed field rule.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct Errors {
    errors: Vec<Error>,
}

impl Errors {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an error.
    pub fn add(&mut self, error: Error) {
        self.errors.push(error);
    }

    /// Whether any error was recorded.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// All recorded errors, in rule order.
    pub fn get(&self) -> &[Error] {
        &self.errors
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Error> {
        self.errors.iter()
    }
}

impl IntoIterator for Errors {
    type Item = Error;
    type IntoIter = std::vec::IntoIter<Error>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}
