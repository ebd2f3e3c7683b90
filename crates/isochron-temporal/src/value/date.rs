//! ISO calendar dates, backed by `chrono::NaiveDate`.
//!
//! The field logic here is shared with the `NaiveDate` impls at the bottom of
//! the file, so a plain chrono date can be read and adjusted by the
//! calendrical enumerations just like a [`LocalDate`].

use std::fmt;

use chrono::{Datelike, Days, NaiveDate};

use super::{Year, narrow};
use crate::calendar::{DayOfWeek, Month};
use crate::error::{TemporalError, TemporalResult};
use crate::temporal::{
    ChronoField, ChronoUnit, Chronology, Temporal, TemporalAccessor, TemporalField, ValueRange,
};

/// `NaiveDate::num_days_from_ce` of 1970-01-01.
const UNIX_EPOCH_DAYS_FROM_CE: i64 = 719_163;

/// A date without time or zone, such as `2026-10-16`.
///
/// Years are limited to the range `chrono` can represent (about ±262,000).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LocalDate(NaiveDate);

impl LocalDate {
    /// ## Errors
    /// Returns `InvalidRange` if `day` does not exist in the month, or
    /// `Overflow` if `year` is outside the representable range.
    pub fn of(year: i32, month: Month, day: u8) -> TemporalResult<Self> {
        let length = month.length(Year::is_leap_year(i64::from(year)));
        ValueRange::of(1, i64::from(length))
            .check_valid_value(i64::from(day), &ChronoField::DayOfMonth)?;
        NaiveDate::from_ymd_opt(year, u32::from(month.value()), u32::from(day))
            .map(Self)
            .ok_or_else(|| TemporalError::Overflow(format!("year {year} is out of range")))
    }

    #[must_use]
    pub const fn from_naive(date: NaiveDate) -> Self {
        Self(date)
    }

    #[must_use]
    pub const fn as_naive(self) -> NaiveDate {
        self.0
    }

    #[must_use]
    pub fn year(self) -> i32 {
        self.0.year()
    }

    #[must_use]
    pub fn month(self) -> Month {
        month_of(self.0)
    }

    #[must_use]
    pub fn day(self) -> u8 {
        day_of(self.0)
    }

    #[must_use]
    pub fn day_of_week(self) -> DayOfWeek {
        self.0.weekday().into()
    }

    #[must_use]
    pub fn is_leap_year(self) -> bool {
        self.0.leap_year()
    }

    /// Days since 1970-01-01.
    #[must_use]
    pub fn to_epoch_day(self) -> i64 {
        i64::from(self.0.num_days_from_ce()) - UNIX_EPOCH_DAYS_FROM_CE
    }
}

impl From<NaiveDate> for LocalDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl From<LocalDate> for NaiveDate {
    fn from(date: LocalDate) -> Self {
        date.0
    }
}

impl fmt::Display for LocalDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

fn month_of(date: NaiveDate) -> Month {
    Month::ALL[date.month0() as usize]
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "chrono days of month are 1-31"
)]
fn day_of(date: NaiveDate) -> u8 {
    date.day() as u8
}

pub(crate) fn is_date_field(field: ChronoField) -> bool {
    field.is_date_based()
}

pub(crate) fn date_range(date: NaiveDate, field: ChronoField) -> TemporalResult<ValueRange> {
    match field {
        ChronoField::DayOfMonth => Ok(ValueRange::of(
            1,
            i64::from(month_of(date).length(date.leap_year())),
        )),
        ChronoField::DayOfYear => Ok(ValueRange::of(1, if date.leap_year() { 366 } else { 365 })),
        other if is_date_field(other) => Ok(other.range()),
        other => Err(TemporalError::unsupported(other)),
    }
}

pub(crate) fn date_get(date: NaiveDate, field: ChronoField) -> TemporalResult<i64> {
    match field {
        ChronoField::DayOfWeek => Ok(i64::from(date.weekday().number_from_monday())),
        ChronoField::DayOfMonth => Ok(i64::from(date.day())),
        ChronoField::DayOfYear => Ok(i64::from(date.ordinal())),
        ChronoField::EpochDay => Ok(i64::from(date.num_days_from_ce()) - UNIX_EPOCH_DAYS_FROM_CE),
        ChronoField::MonthOfYear => Ok(i64::from(date.month())),
        ChronoField::Year => Ok(i64::from(date.year())),
        other => Err(TemporalError::unsupported(other)),
    }
}

pub(crate) fn date_with(
    date: NaiveDate,
    field: ChronoField,
    value: i64,
) -> TemporalResult<NaiveDate> {
    if !is_date_field(field) {
        return Err(TemporalError::unsupported(field));
    }
    date_range(date, field)?.check_valid_value(value, &field)?;
    let out_of_range = || TemporalError::Overflow(format!("{field} {value} from {date}"));
    match field {
        ChronoField::DayOfWeek => {
            let current = i64::from(date.weekday().number_from_monday());
            plus_days(date, value - current)
        }
        ChronoField::DayOfMonth => date.with_day(narrow(value, &field)?).ok_or_else(out_of_range),
        ChronoField::DayOfYear => date
            .with_ordinal(narrow(value, &field)?)
            .ok_or_else(out_of_range),
        ChronoField::EpochDay => {
            let days_from_ce = value
                .checked_add(UNIX_EPOCH_DAYS_FROM_CE)
                .ok_or_else(out_of_range)?;
            NaiveDate::from_num_days_from_ce_opt(narrow(days_from_ce, &field)?)
                .ok_or_else(out_of_range)
        }
        ChronoField::MonthOfYear => {
            resolve_previous_valid(date.year(), Month::of(narrow(value, &field)?)?, date.day())
        }
        ChronoField::Year => {
            resolve_previous_valid(narrow(value, &field)?, month_of(date), date.day())
        }
        other => Err(TemporalError::unsupported(other)),
    }
}

fn plus_days(date: NaiveDate, days: i64) -> TemporalResult<NaiveDate> {
    let shifted = if days >= 0 {
        date.checked_add_days(Days::new(days.unsigned_abs()))
    } else {
        date.checked_sub_days(Days::new(days.unsigned_abs()))
    };
    shifted.ok_or_else(|| TemporalError::Overflow(format!("{date} plus {days} days")))
}

/// Builds a date, clamping the day to the end of a shorter month.
fn resolve_previous_valid(year: i32, month: Month, day: u32) -> TemporalResult<NaiveDate> {
    let day = day.min(u32::from(month.length(Year::is_leap_year(i64::from(year)))));
    NaiveDate::from_ymd_opt(year, u32::from(month.value()), day)
        .ok_or_else(|| TemporalError::Overflow(format!("year {year} is out of range")))
}

impl TemporalAccessor for LocalDate {
    fn is_supported(&self, field: &dyn TemporalField) -> bool {
        self.0.is_supported(field)
    }

    fn range(&self, field: &dyn TemporalField) -> TemporalResult<ValueRange> {
        match field.as_chrono_field() {
            Some(chrono) => date_range(self.0, chrono),
            None => field.range_refined_by(self),
        }
    }

    fn get_long(&self, field: &dyn TemporalField) -> TemporalResult<i64> {
        match field.as_chrono_field() {
            Some(chrono) => date_get(self.0, chrono),
            None => field.get_from(self),
        }
    }

    fn precision(&self) -> Option<ChronoUnit> {
        Some(ChronoUnit::Days)
    }

    fn chronology(&self) -> Option<Chronology> {
        Some(Chronology::ISO)
    }
}

impl Temporal for LocalDate {
    fn with_field(&self, field: &dyn TemporalField, value: i64) -> TemporalResult<Self> {
        match field.as_chrono_field() {
            Some(chrono) => date_with(self.0, chrono, value).map(Self),
            None => Err(TemporalError::unsupported(field.name())),
        }
    }
}

impl TemporalAccessor for NaiveDate {
    fn is_supported(&self, field: &dyn TemporalField) -> bool {
        match field.as_chrono_field() {
            Some(chrono) => is_date_field(chrono),
            None => field.is_supported_by(self),
        }
    }

    fn range(&self, field: &dyn TemporalField) -> TemporalResult<ValueRange> {
        match field.as_chrono_field() {
            Some(chrono) => date_range(*self, chrono),
            None => field.range_refined_by(self),
        }
    }

    fn get_long(&self, field: &dyn TemporalField) -> TemporalResult<i64> {
        match field.as_chrono_field() {
            Some(chrono) => date_get(*self, chrono),
            None => field.get_from(self),
        }
    }

    fn precision(&self) -> Option<ChronoUnit> {
        Some(ChronoUnit::Days)
    }

    fn chronology(&self) -> Option<Chronology> {
        Some(Chronology::ISO)
    }
}

impl Temporal for NaiveDate {
    fn with_field(&self, field: &dyn TemporalField, value: i64) -> TemporalResult<Self> {
        match field.as_chrono_field() {
            Some(chrono) => date_with(*self, chrono, value),
            None => Err(TemporalError::unsupported(field.name())),
        }
    }
}
