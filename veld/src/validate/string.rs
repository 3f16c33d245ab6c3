//! String validation rules.

use regex::Regex;

use crate::validate::error::Error;
use crate::validate::int::int;
use crate::validate::schema::Validator;
use crate::validate::time::time;
use crate::validate::transform::{Parse, Transform};

/// Validates string values.
#[derive(Default)]
pub struct StringValidator {
    min_len: Option<usize>,
    max_len: Option<usize>,
    pattern: Option<Regex>,
    email: bool,
    required: bool,
    optional: bool,
    default_val: Option<String>,
    custom: Option<Box<dyn Fn(&str) -> Option<Error>>>,
}

/// Create a new string validator.
pub fn string() -> StringValidator {
    StringValidator::default()
}

impl StringValidator {
    /// Require at least `len` bytes.
    pub fn min_len(mut self, len: usize) -> Self {
        self.min_len = Some(len);
        self
    }

    /// Require at most `len` bytes.
    pub fn max_len(mut self, len: usize) -> Self {
        self.max_len = Some(len);
        self
    }

    /// Require the value to match a regular expression.
    ///
    /// Panics if `pattern` is not a valid expression; patterns are part of
    /// the schema, not runtime input.
    pub fn pattern(mut self, pattern: &str) -> Self {
        self.pattern = Some(Regex::new(pattern).expect("invalid pattern"));
        self
    }

    /// Alias for [`StringValidator::pattern`].
    pub fn matches(self, pattern: &str) -> Self {
        self.pattern(pattern)
    }

    /// Require the value to look like an email address.
    pub fn email(mut self) -> Self {
        self.email = true;
        self
    }

    /// Reject blank values.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Skip all rules when the value is blank.
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Substitute `val` when the value is blank.
    pub fn default_value(mut self, val: &str) -> Self {
        self.default_val = Some(val.to_string());
        self
    }

    /// Add a custom rule, run after the built-in rules.
    pub fn custom(mut self, f: impl Fn(&str) -> Option<Error> + 'static) -> Self {
        self.custom = Some(Box::new(f));
        self
    }

    /// Trim surrounding whitespace before validating.
    pub fn trim(self) -> Transform<String> {
        Transform::new(self).pipe(|s: String| s.trim().to_string())
    }

    /// Lowercase the value before validating.
    pub fn lowercase(self) -> Transform<String> {
        Transform::new(self).pipe(|s: String| s.to_lowercase())
    }

    /// Uppercase the value before validating.
    pub fn uppercase(self) -> Transform<String> {
        Transform::new(self).pipe(|s: String| s.to_uppercase())
    }

    /// Parse the value as an integer and validate the result.
    pub fn parse_int(self) -> Parse<String, i64> {
        Parse::new(
            |s: &String| s.parse::<i64>().map_err(|e| e.to_string()),
            int(),
        )
    }

    /// Parse the value as an RFC 3339 timestamp and validate the result.
    pub fn parse_rfc3339(self) -> Parse<String, chrono::DateTime<chrono::Utc>> {
        Parse::new(
            |s: &String| {
                chrono::DateTime::parse_from_rfc3339(s)
                    .map(|dt| dt.with_timezone(&chrono::Utc))
                    .map_err(|e| e.to_string())
            },
            time(),
        )
    }
}

impl Validator<String> for StringValidator {
    fn validate(&self, value: &String) -> Option<Error> {
        let mut value: &str = value;
        if let Some(ref default) = self.default_val {
            if value.trim().is_empty() {
                value = default;
            }
        }

        if self.required && value.trim().is_empty() {
            return Some(Error::new("required", "field is required"));
        }

        if self.optional && value.trim().is_empty() {
            return None;
        }

        if let Some(min) = self.min_len {
            if value.len() < min {
                return Some(Error::new(
                    "too_short",
                    format!("must be at least {min} characters"),
                ));
            }
        }

        if let Some(max) = self.max_len {
            if value.len() > max {
                return Some(Error::new(
                    "too_long",
                    format!("must be at most {max} characters"),
                ));
            }
        }

        if let Some(ref pattern) = self.pattern {
            if !pattern.is_match(value) {
                return Some(Error::new("invalid_format", "invalid format"));
            }
        }

        if self.email && (!value.contains('@') || !value.contains('.')) {
            return Some(Error::new(
                "invalid_email",
                "must be a valid email address",
            ));
        }

        if let Some(ref custom) = self.custom {
            if let Some(err) = custom(value) {
                return Some(err);
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(v: &StringValidator, s: &str) -> Option<Error> {
        v.validate(&s.to_string())
    }

    #[test]
    fn test_length_bounds() {
        let v = string().min_len(3).max_len(5);
        assert_eq!(check(&v, "ab").unwrap().code, "too_short");
        assert_eq!(check(&v, "abcdef").unwrap().code, "too_long");
        assert!(check(&v, "abc").is_none());
        assert!(check(&v, "abcde").is_none());
    }

    #[test]
    fn test_email() {
        let v = string().email();
        assert!(check(&v, "john@example.com").is_none());
        assert_eq!(check(&v, "not-an-email").unwrap().code, "invalid_email");
    }

    #[test]
    fn test_pattern() {
        let v = string().pattern("^[a-z]+$");
        assert!(check(&v, "abc").is_none());
        assert_eq!(check(&v, "Abc1").unwrap().code, "invalid_format");
    }

    #[test]
    fn test_required_and_optional() {
        let v = string().required();
        assert_eq!(check(&v, "  ").unwrap().code, "required");

        let v = string().optional().min_len(3);
        assert!(check(&v, "").is_none(), "blank optional skips rules");
        assert_eq!(check(&v, "ab").unwrap().code, "too_short");
    }

    #[test]
    fn test_default_value_substitutes_blank() {
        let v = string().default_value("fallback").min_len(3);
        assert!(check(&v, "").is_none());
        assert_eq!(check(&v, "ab").unwrap().code, "too_short");
    }

    #[test]
    fn test_custom_runs_last() {
        let v = string().min_len(2).custom(|s| {
            if s.starts_with('x') {
                Some(Error::new("starts_with_x", "must not start with x"))
            } else {
                None
            }
        });
        assert_eq!(check(&v, "x").unwrap().code, "too_short");
        assert_eq!(check(&v, "xy").unwrap().code, "starts_with_x");
        assert!(check(&v, "yz").is_none());
    }
}
