//! Partial dates: a year, a year-month and a month-day.

use std::fmt;

use super::narrow;
use crate::calendar::Month;
use crate::error::{TemporalError, TemporalResult};
use crate::temporal::{
    ChronoField, ChronoUnit, Chronology, Temporal, TemporalAccessor, TemporalField, ValueRange,
};

/// A proleptic ISO year, `-999_999_999..=999_999_999`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Year(i32);

impl Year {
    /// ## Errors
    /// Returns `InvalidRange` if `year` is outside the supported range.
    pub fn of(year: i32) -> TemporalResult<Self> {
        ChronoField::Year
            .range()
            .check_valid_value(i64::from(year), &ChronoField::Year)?;
        Ok(Self(year))
    }

    /// Proleptic Gregorian leap year rule.
    #[must_use]
    pub const fn is_leap_year(year: i64) -> bool {
        year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
    }

    #[must_use]
    pub const fn value(self) -> i32 {
        self.0
    }

    #[must_use]
    pub const fn is_leap(self) -> bool {
        Self::is_leap_year(self.0 as i64)
    }

    /// Number of days in the year.
    #[must_use]
    pub const fn length(self) -> u16 {
        if self.is_leap() { 366 } else { 365 }
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TemporalAccessor for Year {
    fn is_supported(&self, field: &dyn TemporalField) -> bool {
        match field.as_chrono_field() {
            Some(chrono) => chrono == ChronoField::Year,
            None => field.is_supported_by(self),
        }
    }

    fn get_long(&self, field: &dyn TemporalField) -> TemporalResult<i64> {
        match field.as_chrono_field() {
            Some(ChronoField::Year) => Ok(i64::from(self.0)),
            Some(other) => Err(TemporalError::unsupported(other)),
            None => field.get_from(self),
        }
    }

    fn precision(&self) -> Option<ChronoUnit> {
        Some(ChronoUnit::Years)
    }

    fn chronology(&self) -> Option<Chronology> {
        Some(Chronology::ISO)
    }
}

/// A year and month, such as `2026-10`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct YearMonth {
    year: i32,
    month: Month,
}

impl YearMonth {
    /// ## Errors
    /// Returns `InvalidRange` if `year` is outside the supported range.
    pub fn of(year: i32, month: Month) -> TemporalResult<Self> {
        let year = Year::of(year)?.value();
        Ok(Self { year, month })
    }

    #[must_use]
    pub const fn year(self) -> i32 {
        self.year
    }

    #[must_use]
    pub const fn month(self) -> Month {
        self.month
    }

    #[must_use]
    pub const fn length_of_month(self) -> u8 {
        self.month.length(Year::is_leap_year(self.year as i64))
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month.value())
    }
}

impl TemporalAccessor for YearMonth {
    fn is_supported(&self, field: &dyn TemporalField) -> bool {
        match field.as_chrono_field() {
            Some(chrono) => matches!(chrono, ChronoField::Year | ChronoField::MonthOfYear),
            None => field.is_supported_by(self),
        }
    }

    fn get_long(&self, field: &dyn TemporalField) -> TemporalResult<i64> {
        match field.as_chrono_field() {
            Some(ChronoField::Year) => Ok(i64::from(self.year)),
            Some(ChronoField::MonthOfYear) => Ok(i64::from(self.month.value())),
            Some(other) => Err(TemporalError::unsupported(other)),
            None => field.get_from(self),
        }
    }

    fn precision(&self) -> Option<ChronoUnit> {
        Some(ChronoUnit::Months)
    }

    fn chronology(&self) -> Option<Chronology> {
        Some(Chronology::ISO)
    }
}

impl Temporal for YearMonth {
    fn with_field(&self, field: &dyn TemporalField, value: i64) -> TemporalResult<Self> {
        match field.as_chrono_field() {
            Some(chrono @ (ChronoField::Year | ChronoField::MonthOfYear)) => {
                chrono.range().check_valid_value(value, field)?;
                let value = narrow::<i32>(value, field)?;
                if chrono == ChronoField::Year {
                    Self::of(value, self.month)
                } else {
                    Self::of(self.year, Month::of(value)?)
                }
            }
            Some(other) => Err(TemporalError::unsupported(other)),
            None => Err(TemporalError::unsupported(field.name())),
        }
    }
}

/// A month and day of month, such as `--12-25`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MonthDay {
    month: Month,
    day: u8,
}

impl MonthDay {
    /// ## Errors
    /// Returns `InvalidRange` if `day` does not occur in `month` in any year.
    pub fn of(month: Month, day: u8) -> TemporalResult<Self> {
        let range = Self::day_range(month);
        range.check_valid_value(i64::from(day), &ChronoField::DayOfMonth)?;
        Ok(Self { month, day })
    }

    fn day_range(month: Month) -> ValueRange {
        ValueRange::of(1, i64::from(month.max_length()))
    }

    #[must_use]
    pub const fn month(self) -> Month {
        self.month
    }

    #[must_use]
    pub const fn day(self) -> u8 {
        self.day
    }

    /// Returns whether this month-day exists in `year` (false only for February 29th).
    #[must_use]
    pub const fn is_valid_year(self, year: i32) -> bool {
        self.day <= self.month.length(Year::is_leap_year(year as i64))
    }
}

impl fmt::Display for MonthDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "--{:02}-{:02}", self.month.value(), self.day)
    }
}

impl TemporalAccessor for MonthDay {
    fn is_supported(&self, field: &dyn TemporalField) -> bool {
        match field.as_chrono_field() {
            Some(chrono) => matches!(chrono, ChronoField::MonthOfYear | ChronoField::DayOfMonth),
            None => field.is_supported_by(self),
        }
    }

    fn range(&self, field: &dyn TemporalField) -> TemporalResult<ValueRange> {
        match field.as_chrono_field() {
            Some(ChronoField::DayOfMonth) => Ok(Self::day_range(self.month)),
            Some(ChronoField::MonthOfYear) => Ok(ChronoField::MonthOfYear.range()),
            Some(other) => Err(TemporalError::unsupported(other)),
            None => field.range_refined_by(self),
        }
    }

    fn get_long(&self, field: &dyn TemporalField) -> TemporalResult<i64> {
        match field.as_chrono_field() {
            Some(ChronoField::MonthOfYear) => Ok(i64::from(self.month.value())),
            Some(ChronoField::DayOfMonth) => Ok(i64::from(self.day)),
            Some(other) => Err(TemporalError::unsupported(other)),
            None => field.get_from(self),
        }
    }

    fn chronology(&self) -> Option<Chronology> {
        Some(Chronology::ISO)
    }
}
