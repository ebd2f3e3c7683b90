//! Month of the year (ISO-8601: January = 1 through December = 12).

use std::fmt;

use serde::{Deserialize, Serialize};

use super::cyclic;
use crate::error::{TemporalError, TemporalResult};
use crate::temporal::{
    ChronoField, ChronoUnit, Chronology, Temporal, TemporalAccessor, TemporalAdjuster,
    TemporalField, TemporalQuery, ValueRange,
};

/// A month of the year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    /// All months in calendar order.
    pub const ALL: [Self; 12] = [
        Self::January,
        Self::February,
        Self::March,
        Self::April,
        Self::May,
        Self::June,
        Self::July,
        Self::August,
        Self::September,
        Self::October,
        Self::November,
        Self::December,
    ];

    const COUNT: usize = Self::ALL.len();

    const FIELD: ChronoField = ChronoField::MonthOfYear;

    /// Returns the month for an ISO value from 1 (January) to 12 (December).
    ///
    /// ## Errors
    /// Returns `InvalidRange` if `value` is outside `1..=12`.
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

    /// Obtains the month from any temporal that carries the month-of-year field.
    ///
    /// ## Errors
    /// Returns `Conversion`, naming the temporal's type and wrapping the cause,
    /// if the field cannot be read.
    pub fn from_temporal(temporal: &dyn TemporalAccessor) -> TemporalResult<Self> {
        temporal
            .get(&Self::FIELD)
            .and_then(Self::of)
            .map_err(|source| TemporalError::Conversion {
                target: "Month",
                type_name: temporal.type_name(),
                source: Box::new(source),
            })
    }

    /// ISO value, 1 (January) to 12 (December).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8 + 1
    }

    /// Zero-based position in [`Month::ALL`].
    #[must_use]
    pub const fn ordinal(self) -> usize {
        self as usize
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::January => "JANUARY",
            Self::February => "FEBRUARY",
            Self::March => "MARCH",
            Self::April => "APRIL",
            Self::May => "MAY",
            Self::June => "JUNE",
            Self::July => "JULY",
            Self::August => "AUGUST",
            Self::September => "SEPTEMBER",
            Self::October => "OCTOBER",
            Self::November => "NOVEMBER",
            Self::December => "DECEMBER",
        }
    }

    /// Parses a full English month name (case-insensitive).
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|month| month.as_str().eq_ignore_ascii_case(s))
    }

    /// Whether `field` can be read from this month.
    #[must_use]
    pub fn is_supported(self, field: &dyn TemporalField) -> bool {
        match field.as_chrono_field() {
            Some(chrono) => chrono == Self::FIELD,
            None => field.is_supported_by(&self),
        }
    }

    /// Range of `field` for a month: `1..=12` for the month-of-year field.
    ///
    /// ## Errors
    /// Returns `UnsupportedField` for any built-in field other than month-of-year.
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

    /// Returns the month `months` after this one, wrapping around the year.
    #[must_use]
    pub const fn plus(self, months: i64) -> Self {
        Self::ALL[cyclic::advance(self.ordinal(), months, Self::COUNT)]
    }

    /// Returns the month `months` before this one, wrapping around the year.
    #[must_use]
    pub const fn minus(self, months: i64) -> Self {
        Self::ALL[cyclic::retreat(self.ordinal(), months, Self::COUNT)]
    }

    /// Number of days in the month.
    #[must_use]
    pub const fn length(self, leap_year: bool) -> u8 {
        match self {
            Self::February => {
                if leap_year {
                    29
                } else {
                    28
                }
            }
            Self::April | Self::June | Self::September | Self::November => 30,
            _ => 31,
        }
    }

    /// Shortest length in days, 28 for February.
    #[must_use]
    pub const fn min_length(self) -> u8 {
        self.length(false)
    }

    /// Longest length in days, 29 for February.
    #[must_use]
    pub const fn max_length(self) -> u8 {
        self.length(true)
    }

    /// Day-of-year of the first day of this month.
    #[must_use]
    pub fn first_day_of_year(self, leap_year: bool) -> u16 {
        let leap = u16::from(leap_year);
        match self {
            Self::January => 1,
            Self::February => 32,
            Self::March => 60 + leap,
            Self::April => 91 + leap,
            Self::May => 121 + leap,
            Self::June => 152 + leap,
            Self::July => 182 + leap,
            Self::August => 213 + leap,
            Self::September => 244 + leap,
            Self::October => 274 + leap,
            Self::November => 305 + leap,
            Self::December => 335 + leap,
        }
    }

    /// Returns the month containing `day_of_year`, or `None` past the end of the year.
    #[must_use]
    pub fn from_day_of_year(day_of_year: u16, leap_year: bool) -> Option<Self> {
        let days_in_year = if leap_year { 366 } else { 365 };
        if day_of_year == 0 || day_of_year > days_in_year {
            return None;
        }
        Self::ALL
            .into_iter()
            .rev()
            .find(|month| month.first_day_of_year(leap_year) <= day_of_year)
    }

    /// First month of the quarter this month falls in.
    #[must_use]
    pub const fn first_month_of_quarter(self) -> Self {
        Self::ALL[(self.ordinal() / 3) * 3]
    }

    /// Quarter of the year, 1 to 4.
    #[must_use]
    pub const fn quarter(self) -> u8 {
        self as u8 / 3 + 1
    }

    /// Runs `query` against this month. The precision query answers `Months`
    /// and the chronology query answers ISO.
    pub fn query<Q: TemporalQuery>(self, query: &Q) -> Q::Output {
        query.query_from(&self)
    }

    /// Returns `temporal` with its month-of-year field set to this month.
    ///
    /// ## Errors
    /// Returns `ChronologyMismatch` if `temporal` is not an ISO value, otherwise
    /// whatever the temporal reports when the field cannot be set.
    pub fn adjust_into<T: Temporal>(self, temporal: &T) -> TemporalResult<T> {
        let chronology = Chronology::of_temporal(temporal);
        if !chronology.is_iso() {
            tracing::debug!(%chronology, month = %self, "Rejecting month adjustment");
            return Err(TemporalError::ChronologyMismatch(chronology));
        }
        temporal.with_field(&Self::FIELD, i64::from(self.value()))
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TemporalAccessor for Month {
    fn is_supported(&self, field: &dyn TemporalField) -> bool {
        Month::is_supported(*self, field)
    }

    fn get_long(&self, field: &dyn TemporalField) -> TemporalResult<i64> {
        Month::get_long(*self, field)
    }

    fn range(&self, field: &dyn TemporalField) -> TemporalResult<ValueRange> {
        Month::range(*self, field)
    }

    fn get(&self, field: &dyn TemporalField) -> TemporalResult<i32> {
        Month::get(*self, field)
    }

    fn precision(&self) -> Option<ChronoUnit> {
        Some(ChronoUnit::Months)
    }

    fn chronology(&self) -> Option<Chronology> {
        Some(Chronology::ISO)
    }
}

impl TemporalAdjuster for Month {
    fn adjust_into<T: Temporal>(&self, temporal: &T) -> TemporalResult<T> {
        Month::adjust_into(*self, temporal)
    }
}

impl From<chrono::Month> for Month {
    fn from(month: chrono::Month) -> Self {
        match month {
            chrono::Month::January => Self::January,
            chrono::Month::February => Self::February,
            chrono::Month::March => Self::March,
            chrono::Month::April => Self::April,
            chrono::Month::May => Self::May,
            chrono::Month::June => Self::June,
            chrono::Month::July => Self::July,
            chrono::Month::August => Self::August,
            chrono::Month::September => Self::September,
            chrono::Month::October => Self::October,
            chrono::Month::November => Self::November,
            chrono::Month::December => Self::December,
        }
    }
}

impl From<Month> for chrono::Month {
    fn from(month: Month) -> Self {
        match month {
            Month::January => Self::January,
            Month::February => Self::February,
            Month::March => Self::March,
            Month::April => Self::April,
            Month::May => Self::May,
            Month::June => Self::June,
            Month::July => Self::July,
            Month::August => Self::August,
            Month::September => Self::September,
            Month::October => Self::October,
            Month::November => Self::November,
            Month::December => Self::December,
        }
    }
}
