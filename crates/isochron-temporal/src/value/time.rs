use std::fmt;

use chrono::{NaiveTime, Timelike};

use super::{NANOS_PER_SECOND, narrow};
use crate::error::{TemporalError, TemporalResult};
use crate::temporal::{
    ChronoField, ChronoUnit, Temporal, TemporalAccessor, TemporalField, ValueRange,
};

/// A wall-clock time without date or zone, to nanosecond precision.
///
/// Leap seconds are not represented; a `chrono` leap second folds into the
/// preceding second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LocalTime(NaiveTime);

impl LocalTime {
    pub const MIDNIGHT: Self = Self(NaiveTime::MIN);

    /// ## Errors
    /// Returns `InvalidRange` naming the first component that is out of range.
    pub fn of(hour: u8, minute: u8, second: u8, nano: u32) -> TemporalResult<Self> {
        ChronoField::HourOfDay
            .range()
            .check_valid_value(i64::from(hour), &ChronoField::HourOfDay)?;
        ChronoField::MinuteOfHour
            .range()
            .check_valid_value(i64::from(minute), &ChronoField::MinuteOfHour)?;
        ChronoField::SecondOfMinute
            .range()
            .check_valid_value(i64::from(second), &ChronoField::SecondOfMinute)?;
        ChronoField::NanoOfSecond
            .range()
            .check_valid_value(i64::from(nano), &ChronoField::NanoOfSecond)?;
        NaiveTime::from_hms_nano_opt(
            u32::from(hour),
            u32::from(minute),
            u32::from(second),
            nano,
        )
        .map(Self)
        .ok_or_else(|| TemporalError::Overflow(format!("{hour}:{minute}:{second}.{nano}")))
    }

    #[must_use]
    pub fn from_naive(time: NaiveTime) -> Self {
        let nanos = time.nanosecond() % 1_000_000_000;
        Self(time.with_nanosecond(nanos).unwrap_or(time))
    }

    #[must_use]
    pub const fn as_naive(self) -> NaiveTime {
        self.0
    }

    #[must_use]
    #[expect(clippy::cast_possible_truncation, reason = "hours are 0-23")]
    pub fn hour(self) -> u8 {
        self.0.hour() as u8
    }

    #[must_use]
    #[expect(clippy::cast_possible_truncation, reason = "minutes are 0-59")]
    pub fn minute(self) -> u8 {
        self.0.minute() as u8
    }

    #[must_use]
    #[expect(clippy::cast_possible_truncation, reason = "seconds are 0-59")]
    pub fn second(self) -> u8 {
        self.0.second() as u8
    }

    #[must_use]
    pub fn nano(self) -> u32 {
        self.0.nanosecond()
    }

    /// Nanoseconds since midnight.
    #[must_use]
    pub fn to_nano_of_day(self) -> i64 {
        i64::from(self.0.num_seconds_from_midnight()) * NANOS_PER_SECOND
            + i64::from(self.0.nanosecond())
    }
}

impl From<NaiveTime> for LocalTime {
    fn from(time: NaiveTime) -> Self {
        Self::from_naive(time)
    }
}

impl From<LocalTime> for NaiveTime {
    fn from(time: LocalTime) -> Self {
        time.0
    }
}

impl fmt::Display for LocalTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%H:%M:%S%.f"))
    }
}

pub(crate) fn time_range(field: ChronoField) -> TemporalResult<ValueRange> {
    if field.is_time_based() {
        Ok(field.range())
    } else {
        Err(TemporalError::unsupported(field))
    }
}

pub(crate) fn time_get(time: NaiveTime, field: ChronoField) -> TemporalResult<i64> {
    match field {
        ChronoField::NanoOfSecond => Ok(i64::from(time.nanosecond())),
        ChronoField::SecondOfMinute => Ok(i64::from(time.second())),
        ChronoField::MinuteOfHour => Ok(i64::from(time.minute())),
        ChronoField::HourOfDay => Ok(i64::from(time.hour())),
        other => Err(TemporalError::unsupported(other)),
    }
}

pub(crate) fn time_with(
    time: NaiveTime,
    field: ChronoField,
    value: i64,
) -> TemporalResult<NaiveTime> {
    time_range(field)?.check_valid_value(value, &field)?;
    let value: u32 = narrow(value, &field)?;
    let adjusted = match field {
        ChronoField::NanoOfSecond => time.with_nanosecond(value),
        ChronoField::SecondOfMinute => time.with_second(value),
        ChronoField::MinuteOfHour => time.with_minute(value),
        ChronoField::HourOfDay => time.with_hour(value),
        other => return Err(TemporalError::unsupported(other)),
    };
    adjusted.ok_or_else(|| TemporalError::Overflow(format!("{field} {value} from {time}")))
}

impl TemporalAccessor for LocalTime {
    fn is_supported(&self, field: &dyn TemporalField) -> bool {
        match field.as_chrono_field() {
            Some(chrono) => chrono.is_time_based(),
            None => field.is_supported_by(self),
        }
    }

    fn range(&self, field: &dyn TemporalField) -> TemporalResult<ValueRange> {
        match field.as_chrono_field() {
            Some(chrono) => time_range(chrono),
            None => field.range_refined_by(self),
        }
    }

    fn get_long(&self, field: &dyn TemporalField) -> TemporalResult<i64> {
        match field.as_chrono_field() {
            Some(chrono) => time_get(self.0, chrono),
            None => field.get_from(self),
        }
    }

    fn precision(&self) -> Option<ChronoUnit> {
        Some(ChronoUnit::Nanos)
    }
}

impl Temporal for LocalTime {
    fn with_field(&self, field: &dyn TemporalField, value: i64) -> TemporalResult<Self> {
        match field.as_chrono_field() {
            Some(chrono) => time_with(self.0, chrono, value).map(Self),
            None => Err(TemporalError::unsupported(field.name())),
        }
    }
}
