//! Day of the week (ISO-8601: Monday = 1 through Sunday = 7).

use std::fmt;

use serde::{Deserialize, Serialize};

use super::cyclic;
use crate::error::{TemporalError, TemporalResult};
use crate::temporal::{
    ChronoField, ChronoUnit, Temporal, TemporalAccessor, TemporalAdjuster, TemporalField,
    TemporalQuery, ValueRange,
};

/// A day of the week.
///
/// Use [`DayOfWeek::value`] for the ISO numbering; the declaration order is
/// Monday first, so ordering compares days within an ISO week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayOfWeek {
    /// All days in ISO order.
    pub const ALL: [Self; 7] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    const COUNT: usize = Self::ALL.len();

    const FIELD: ChronoField = ChronoField::DayOfWeek;

    /// Returns the day for an ISO value from 1 (Monday) to 7 (Sunday).
    ///
    /// ## Errors
    /// Returns `InvalidRange` if `value` is outside `1..=7`.
    pub fn of(value: i32) -> TemporalResult<Self> {
        usize::try_from(value)
            .ok()
            .and_then(|v| v.checked_sub(1))
            .and_then(|ordinal| Self::ALL.get(ordinal).copied())
            .ok_or_else(|| TemporalError::InvalidRange {
                field: Self::FIELD.to_string(),
                range: Self::FIELD.range(),
                value: i64::from(value),
            })
    }

    /// Obtains the day of the week from any temporal that carries the
    /// day-of-week field. A `DayOfWeek` converts to itself.
    ///
    /// ## Errors
    /// Returns `Conversion`, naming the temporal's type and wrapping the cause,
    /// if the field cannot be read.
    pub fn from_temporal(temporal: &dyn TemporalAccessor) -> TemporalResult<Self> {
        temporal
            .get(&Self::FIELD)
            .and_then(Self::of)
            .map_err(|source| TemporalError::Conversion {
                target: "DayOfWeek",
                type_name: temporal.type_name(),
                source: Box::new(source),
            })
    }

    /// ISO value, 1 (Monday) to 7 (Sunday).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8 + 1
    }

    /// Zero-based position in [`DayOfWeek::ALL`].
    #[must_use]
    pub const fn ordinal(self) -> usize {
        self as usize
    }

    /// Upper-case English name, e.g. `"MONDAY"`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Monday => "MONDAY",
            Self::Tuesday => "TUESDAY",
            Self::Wednesday => "WEDNESDAY",
            Self::Thursday => "THURSDAY",
            Self::Friday => "FRIDAY",
            Self::Saturday => "SATURDAY",
            Self::Sunday => "SUNDAY",
        }
    }

    /// Parses a full English day name (case-insensitive).
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|day| day.as_str().eq_ignore_ascii_case(s))
    }

    /// Whether `field` can be read from this day of the week.
    #[must_use]
    pub fn is_supported(self, field: &dyn TemporalField) -> bool {
        match field.as_chrono_field() {
            Some(chrono) => chrono == Self::FIELD,
            None => field.is_supported_by(&self),
        }
    }

    /// Range of `field` for a day of the week: `1..=7` for the day-of-week field.
    ///
    /// ## Errors
    /// Returns `UnsupportedField` for any other built-in field.
    pub fn range(self, field: &dyn TemporalField) -> TemporalResult<ValueRange> {
        match field.as_chrono_field() {
            Some(Self::FIELD) => Ok(Self::FIELD.range()),
            Some(other) => Err(TemporalError::unsupported(other)),
            None => field.range_refined_by(&self),
        }
    }

    /// Reads `field` as an `i32`.
    ///
    /// ## Errors
    /// Returns `UnsupportedField` for other built-in fields. A caller-defined
    /// field fails with `InvalidRange` when its value lies outside the field's
    /// own range, and with `Overflow` when that range does not fit in `i32`.
    pub fn get(self, field: &dyn TemporalField) -> TemporalResult<i32> {
        if field.as_chrono_field() == Some(Self::FIELD) {
            return Ok(i32::from(self.value()));
        }
        self.range(field)?.check_valid_int_value(self.get_long(field)?, field)
    }

    /// Reads `field` as an `i64`.
    ///
    /// ## Errors
    /// Returns `UnsupportedField` for other built-in fields; caller-defined
    /// fields report their own errors.
    pub fn get_long(self, field: &dyn TemporalField) -> TemporalResult<i64> {
        match field.as_chrono_field() {
            Some(Self::FIELD) => Ok(i64::from(self.value())),
            Some(other) => Err(TemporalError::unsupported(other)),
            None => field.get_from(&self),
        }
    }

    /// Returns the day `days` after this one, wrapping around the week.
    #[must_use]
    pub const fn plus(self, days: i64) -> Self {
        Self::ALL[cyclic::advance(self.ordinal(), days, Self::COUNT)]
    }

    /// Returns the day `days` before this one, wrapping around the week.
    #[must_use]
    pub const fn minus(self, days: i64) -> Self {
        Self::ALL[cyclic::retreat(self.ordinal(), days, Self::COUNT)]
    }

    /// Runs `query` against this day. The precision query answers `Days`.
    pub fn query<Q: TemporalQuery>(self, query: &Q) -> Q::Output {
        query.query_from(&self)
    }

    /// Returns `temporal` with its day-of-week field set to this day.
    ///
    /// ## Errors
    /// Returns whatever the temporal reports when the field cannot be set.
    pub fn adjust_into<T: Temporal>(self, temporal: &T) -> TemporalResult<T> {
        temporal.with_field(&Self::FIELD, i64::from(self.value()))
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TemporalAccessor for DayOfWeek {
    fn is_supported(&self, field: &dyn TemporalField) -> bool {
        DayOfWeek::is_supported(*self, field)
    }

    fn get_long(&self, field: &dyn TemporalField) -> TemporalResult<i64> {
        DayOfWeek::get_long(*self, field)
    }

    fn range(&self, field: &dyn TemporalField) -> TemporalResult<ValueRange> {
        DayOfWeek::range(*self, field)
    }

    fn get(&self, field: &dyn TemporalField) -> TemporalResult<i32> {
        DayOfWeek::get(*self, field)
    }

    fn precision(&self) -> Option<ChronoUnit> {
        Some(ChronoUnit::Days)
    }
}

impl TemporalAdjuster for DayOfWeek {
    fn adjust_into<T: Temporal>(&self, temporal: &T) -> TemporalResult<T> {
        DayOfWeek::adjust_into(*self, temporal)
    }
}

impl From<chrono::Weekday> for DayOfWeek {
    fn from(weekday: chrono::Weekday) -> Self {
        match weekday {
            chrono::Weekday::Mon => Self::Monday,
            chrono::Weekday::Tue => Self::Tuesday,
            chrono::Weekday::Wed => Self::Wednesday,
            chrono::Weekday::Thu => Self::Thursday,
            chrono::Weekday::Fri => Self::Friday,
            chrono::Weekday::Sat => Self::Saturday,
            chrono::Weekday::Sun => Self::Sunday,
        }
    }
}

impl From<DayOfWeek> for chrono::Weekday {
    fn from(day: DayOfWeek) -> Self {
        match day {
            DayOfWeek::Monday => Self::Mon,
            DayOfWeek::Tuesday => Self::Tue,
            DayOfWeek::Wednesday => Self::Wed,
            DayOfWeek::Thursday => Self::Thu,
            DayOfWeek::Friday => Self::Fri,
            DayOfWeek::Saturday => Self::Sat,
            DayOfWeek::Sunday => Self::Sun,
        }
    }
}
