//! Inclusive bounds of a temporal field.

use std::fmt;

use super::TemporalField;
use crate::error::{TemporalError, TemporalResult};

/// Inclusive `[min, max]` range of valid values for a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ValueRange {
    min: i64,
    max: i64,
}

impl ValueRange {
    /// Creates a fixed range.
    ///
    /// ## Panics
    ///
    /// Panics if `min` is greater than `max`.
    #[must_use]
    pub const fn of(min: i64, max: i64) -> Self {
        assert!(min <= max, "minimum value must be less than maximum value");
        Self { min, max }
    }

    #[must_use]
    pub const fn min(self) -> i64 {
        self.min
    }

    #[must_use]
    pub const fn max(self) -> i64 {
        self.max
    }

    /// Returns whether every value in the range fits in an `i32`.
    #[must_use]
    pub const fn is_int_value(self) -> bool {
        self.min >= i32::MIN as i64 && self.max <= i32::MAX as i64
    }

    #[must_use]
    pub const fn is_valid_value(self, value: i64) -> bool {
        value >= self.min && value <= self.max
    }

    #[must_use]
    pub const fn is_valid_int_value(self, value: i64) -> bool {
        self.is_int_value() && self.is_valid_value(value)
    }

    /// Checks that `value` lies within the range.
    ///
    /// ## Errors
    /// Returns `InvalidRange` naming `field` when the value is outside the range.
    pub fn check_valid_value(self, value: i64, field: &dyn TemporalField) -> TemporalResult<i64> {
        if self.is_valid_value(value) {
            Ok(value)
        } else {
            Err(TemporalError::InvalidRange {
                field: field.name().to_string(),
                range: self,
                value,
            })
        }
    }

    /// Checks that `value` lies within the range and that the range is `i32`-sized.
    ///
    /// ## Errors
    /// Returns `Overflow` if the range cannot be represented as `i32`, or
    /// `InvalidRange` when the value is outside the range.
    pub fn check_valid_int_value(
        self,
        value: i64,
        field: &dyn TemporalField,
    ) -> TemporalResult<i32> {
        if !self.is_int_value() {
            return Err(TemporalError::Overflow(format!(
                "field {} has range {self} which does not fit in 32 bits",
                field.name()
            )));
        }
        let value = self.check_valid_value(value, field)?;
        i32::try_from(value).map_err(|e| TemporalError::Overflow(format!("{value}: {e}")))
    }
}

impl fmt::Display for ValueRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::temporal::ChronoField;

    #[test]
    fn range_bounds() {
        let range = ValueRange::of(1, 7);
        assert!(range.is_valid_value(1));
        assert!(range.is_valid_value(7));
        assert!(!range.is_valid_value(0));
        assert!(!range.is_valid_value(8));
        assert_eq!(range.to_string(), "1 - 7");
    }

    #[test]
    fn int_value_detection() {
        assert!(ValueRange::of(1, 12).is_int_value());
        assert!(!ValueRange::of(0, i64::from(i32::MAX) + 1).is_int_value());
        assert!(!ValueRange::of(i64::MIN, i64::MAX).is_valid_int_value(0));
    }

    #[test]
    fn check_valid_value_reports_field() {
        let err = ValueRange::of(1, 12)
            .check_valid_value(13, &ChronoField::MonthOfYear)
            .expect_err("13 is out of range");
        assert!(err.to_string().contains("MonthOfYear"));
        assert!(err.to_string().contains("13"));
    }

    #[test]
    fn check_valid_int_value_rejects_wide_range() {
        let err = ValueRange::of(i64::MIN, i64::MAX)
            .check_valid_int_value(5, &ChronoField::InstantSeconds)
            .expect_err("range is wider than i32");
        assert!(matches!(err, TemporalError::Overflow(_)));
    }
}
