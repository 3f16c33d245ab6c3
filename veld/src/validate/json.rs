//! Structured-data validation rules.

use serde_json::Value;

use crate::validate::error::Error;
use crate::validate::schema::Validator;

/// Validates `serde_json::Value` values.
///
/// A string value is first parsed as JSON; the rules then run against the
/// parsed document.
#[derive(Default)]
pub struct JsonValidator {
    custom: Option<Box<dyn Fn(&Value) -> Option<Error>>>,
}

/// Create a new JSON validator.
pub fn json() -> JsonValidator {
    JsonValidator::default()
}

impl JsonValidator {
    /// Add a custom rule over the parsed document.
    pub fn custom(mut self, f: impl Fn(&Value) -> Option<Error> + 'static) -> Self {
        self.custom = Some(Box::new(f));
        self
    }

    /// Require the document to be a JSON object.
    pub fn object(self) -> Self {
        self.custom(|v| {
            if v.is_object() {
                None
            } else {
                Some(Error::new("not_object", "must be a JSON object"))
            }
        })
    }

    /// Require the document to be a JSON array.
    pub fn array(self) -> Self {
        self.custom(|v| {
            if v.is_array() {
                None
            } else {
                Some(Error::new("not_array", "must be a JSON array"))
            }
        })
    }
}

impl Validator<Value> for JsonValidator {
    fn validate(&self, value: &Value) -> Option<Error> {
        let parsed;
        let value = if let Value::String(s) = value {
            match serde_json::from_str::<Value>(s) {
                Ok(v) => {
                    parsed = v;
                    &parsed
                }
                Err(e) => {
                    return Some(Error::new(
                        "invalid_json",
                        format!("invalid JSON format: {e}"),
                    ));
                }
            }
        } else {
            value
        };

        if let Some(ref custom) = self.custom {
            if let Some(err) = custom(value) {
                return Some(err);
            }
        }

        None
    }
}
