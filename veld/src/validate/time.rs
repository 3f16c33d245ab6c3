//! Timestamp validation rules.

use chrono::{DateTime, Datelike, Utc, Weekday};

use crate::validate::error::Error;
use crate::validate::schema::Validator;

/// Validates `DateTime<Utc>` values.
#[derive(Default)]
pub struct TimeValidator {
    after: Option<DateTime<Utc>>,
    before: Option<DateTime<Utc>>,
    between: Option<(DateTime<Utc>, DateTime<Utc>)>,
    custom: Option<Box<dyn Fn(&DateTime<Utc>) -> Option<Error>>>,
}

/// Create a new timestamp validator.
pub fn time() -> TimeValidator {
    TimeValidator::default()
}

impl TimeValidator {
    /// Require the value to be strictly after `t`.
    pub fn after(mut self, t: DateTime<Utc>) -> Self {
        self.after = Some(t);
        self
    }

    /// Require the value to be strictly before `t`.
    pub fn before(mut self, t: DateTime<Utc>) -> Self {
        self.before = Some(t);
        self
    }

    /// Require the value to fall inside `[start, end]`.
    pub fn between(mut self, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        self.between = Some((start, end));
        self
    }

    /// Add a custom rule, run after the built-in rules.
    pub fn custom(mut self, f: impl Fn(&DateTime<Utc>) -> Option<Error> + 'static) -> Self {
        self.custom = Some(Box::new(f));
        self
    }

    /// Require the value to be in the future.
    pub fn future(self) -> Self {
        self.after(Utc::now())
    }

    /// Require the value to be in the past.
    pub fn past(self) -> Self {
        self.before(Utc::now())
    }

    /// Require the value to fall on a Monday through Friday.
    pub fn business_day(self) -> Self {
        self.custom(|t| {
            if matches!(t.weekday(), Weekday::Sat | Weekday::Sun) {
                Some(Error::new(
                    "not_business_day",
                    "must be a business day (Monday-Friday)",
                ))
            } else {
                None
            }
        })
    }
}

impl Validator<DateTime<Utc>> for TimeValidator {
    fn validate(&self, value: &DateTime<Utc>) -> Option<Error> {
        if let Some(after) = self.after {
            if *value <= after {
                return Some(Error::new(
                    "too_early",
                    format!("time must be after {}", after.to_rfc3339()),
                ));
            }
        }

        if let Some(before) = self.before {
            if *value >= before {
                return Some(Error::new(
                    "too_late",
                    format!("time must be before {}", before.to_rfc3339()),
                ));
            }
        }

        if let Some((start, end)) = self.between {
            if *value < start || *value > end {
                return Some(Error::new(
                    "out_of_range",
                    format!(
                        "time must be between {} and {}",
                        start.to_rfc3339(),
                        end.to_rfc3339()
                    ),
                ));
            }
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
    use chrono::TimeZone;

    fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_after_before() {
        let v = time().after(at(2020, 1, 1)).before(at(2030, 1, 1));
        assert!(v.validate(&at(2025, 6, 1)).is_none());
        assert_eq!(v.validate(&at(2019, 1, 1)).unwrap().code, "too_early");
        assert_eq!(v.validate(&at(2031, 1, 1)).unwrap().code, "too_late");
    }

    #[test]
    fn test_between() {
        let v = time().between(at(2020, 1, 1), at(2020, 12, 31));
        assert!(v.validate(&at(2020, 6, 1)).is_none());
        assert_eq!(v.validate(&at(2021, 1, 1)).unwrap().code, "out_of_range");
    }

    #[test]
    fn test_business_day() {
        let v = time().business_day();
        // 2024-01-01 was a Monday, 2024-01-06 a Saturday.
        assert!(v.validate(&at(2024, 1, 1)).is_none());
        assert_eq!(
            v.validate(&at(2024, 1, 6)).unwrap().code,
            "not_business_day"
        );
    }

    #[test]
    fn test_future_past() {
        let past = at(2000, 1, 1);
        assert_eq!(time().future().validate(&past).unwrap().code, "too_early");
        assert!(time().past().validate(&past).is_none());
    }
}
