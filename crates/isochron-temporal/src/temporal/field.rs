//! Temporal fields: the built-in ISO fields and the trait caller-defined fields implement.

use std::fmt;

use super::{ChronoUnit, TemporalAccessor, ValueRange};
use crate::error::TemporalResult;

/// A named, queryable property of a date/time-like value.
///
/// Temporals answer built-in fields ([`ChronoField`]) themselves. Any other field
/// is asked to resolve itself against the temporal through the `*_by`/`*_from`
/// methods, so caller-defined fields work with every temporal type.
pub trait TemporalField: fmt::Debug {
    fn name(&self) -> &str;

    /// The outer range of valid values, independent of any particular temporal.
    fn range(&self) -> ValueRange;

    /// Returns the built-in field this is, if any.
    fn as_chrono_field(&self) -> Option<ChronoField> {
        None
    }

    fn is_supported_by(&self, temporal: &dyn TemporalAccessor) -> bool;

    /// Returns the range of valid values for this field within `temporal`.
    ///
    /// ## Errors
    /// Returns an error if the field is not supported by `temporal`.
    fn range_refined_by(&self, temporal: &dyn TemporalAccessor) -> TemporalResult<ValueRange>;

    /// Extracts this field's value from `temporal`.
    ///
    /// ## Errors
    /// Returns an error if the value cannot be obtained from `temporal`.
    fn get_from(&self, temporal: &dyn TemporalAccessor) -> TemporalResult<i64>;
}

/// The standard ISO fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChronoField {
    NanoOfSecond,
    SecondOfMinute,
    MinuteOfHour,
    HourOfDay,
    DayOfWeek,
    DayOfMonth,
    DayOfYear,
    EpochDay,
    MonthOfYear,
    Year,
    InstantSeconds,
    OffsetSeconds,
}

impl ChronoField {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NanoOfSecond => "NanoOfSecond",
            Self::SecondOfMinute => "SecondOfMinute",
            Self::MinuteOfHour => "MinuteOfHour",
            Self::HourOfDay => "HourOfDay",
            Self::DayOfWeek => "DayOfWeek",
            Self::DayOfMonth => "DayOfMonth",
            Self::DayOfYear => "DayOfYear",
            Self::EpochDay => "EpochDay",
            Self::MonthOfYear => "MonthOfYear",
            Self::Year => "Year",
            Self::InstantSeconds => "InstantSeconds",
            Self::OffsetSeconds => "OffsetSeconds",
        }
    }

    /// Outer range of the field. Fields such as `DayOfMonth` are narrowed by
    /// the temporal they are read from.
    #[must_use]
    pub const fn range(self) -> ValueRange {
        match self {
            Self::NanoOfSecond => ValueRange::of(0, 999_999_999),
            Self::SecondOfMinute | Self::MinuteOfHour => ValueRange::of(0, 59),
            Self::HourOfDay => ValueRange::of(0, 23),
            Self::DayOfWeek => ValueRange::of(1, 7),
            Self::DayOfMonth => ValueRange::of(1, 31),
            Self::DayOfYear => ValueRange::of(1, 366),
            Self::EpochDay => ValueRange::of(-365_243_219_162, 365_241_780_471),
            Self::MonthOfYear => ValueRange::of(1, 12),
            Self::Year => ValueRange::of(-999_999_999, 999_999_999),
            Self::InstantSeconds => ValueRange::of(i64::MIN, i64::MAX),
            Self::OffsetSeconds => ValueRange::of(-18 * 3600, 18 * 3600),
        }
    }

    #[must_use]
    pub const fn base_unit(self) -> ChronoUnit {
        match self {
            Self::NanoOfSecond => ChronoUnit::Nanos,
            Self::SecondOfMinute | Self::InstantSeconds | Self::OffsetSeconds => {
                ChronoUnit::Seconds
            }
            Self::MinuteOfHour => ChronoUnit::Minutes,
            Self::HourOfDay => ChronoUnit::Hours,
            Self::DayOfWeek | Self::DayOfMonth | Self::DayOfYear | Self::EpochDay => {
                ChronoUnit::Days
            }
            Self::MonthOfYear => ChronoUnit::Months,
            Self::Year => ChronoUnit::Years,
        }
    }

    #[must_use]
    pub const fn is_date_based(self) -> bool {
        matches!(
            self,
            Self::DayOfWeek
                | Self::DayOfMonth
                | Self::DayOfYear
                | Self::EpochDay
                | Self::MonthOfYear
                | Self::Year
        )
    }

    #[must_use]
    pub const fn is_time_based(self) -> bool {
        matches!(
            self,
            Self::NanoOfSecond | Self::SecondOfMinute | Self::MinuteOfHour | Self::HourOfDay
        )
    }
}

impl fmt::Display for ChronoField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TemporalField for ChronoField {
    fn name(&self) -> &str {
        self.as_str()
    }

    fn range(&self) -> ValueRange {
        ChronoField::range(*self)
    }

    fn as_chrono_field(&self) -> Option<ChronoField> {
        Some(*self)
    }

    fn is_supported_by(&self, temporal: &dyn TemporalAccessor) -> bool {
        temporal.is_supported(self)
    }

    fn range_refined_by(&self, temporal: &dyn TemporalAccessor) -> TemporalResult<ValueRange> {
        temporal.range(self)
    }

    fn get_from(&self, temporal: &dyn TemporalAccessor) -> TemporalResult<i64> {
        temporal.get_long(self)
    }
}
