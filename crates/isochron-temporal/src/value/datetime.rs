//! Date-times: local, offset and zoned.
//!
//! Without a rules database a zoned date-time keeps whatever offset it was
//! built with; adjusting its fields never re-resolves the offset.

use std::fmt;

use super::date::{date_get, date_range, date_with};
use super::time::{time_get, time_range, time_with};
use super::{LocalDate, LocalTime, ZoneId, ZoneOffset};
use crate::error::{TemporalError, TemporalResult};
use crate::temporal::{
    ChronoField, ChronoUnit, Chronology, Temporal, TemporalAccessor, TemporalField, ValueRange,
};

const SECONDS_PER_DAY: i64 = 86_400;

/// A date and wall-clock time without zone, such as `2026-10-16T09:30`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LocalDateTime {
    date: LocalDate,
    time: LocalTime,
}

impl LocalDateTime {
    #[must_use]
    pub const fn of(date: LocalDate, time: LocalTime) -> Self {
        Self { date, time }
    }

    #[must_use]
    pub const fn date(self) -> LocalDate {
        self.date
    }

    #[must_use]
    pub const fn time(self) -> LocalTime {
        self.time
    }

    /// Epoch seconds of this date-time at `offset`.
    #[must_use]
    pub fn to_epoch_second(self, offset: ZoneOffset) -> i64 {
        self.date.to_epoch_day() * SECONDS_PER_DAY
            + self.time.to_nano_of_day() / super::NANOS_PER_SECOND
            - i64::from(offset.total_seconds())
    }

    fn supports(field: ChronoField) -> bool {
        field.is_date_based() || field.is_time_based()
    }

    fn chrono_range(self, field: ChronoField) -> TemporalResult<ValueRange> {
        if field.is_date_based() {
            date_range(self.date.as_naive(), field)
        } else {
            time_range(field)
        }
    }

    fn chrono_get(self, field: ChronoField) -> TemporalResult<i64> {
        if field.is_date_based() {
            date_get(self.date.as_naive(), field)
        } else {
            time_get(self.time.as_naive(), field)
        }
    }

    fn chrono_with(self, field: ChronoField, value: i64) -> TemporalResult<Self> {
        if field.is_date_based() {
            let date = date_with(self.date.as_naive(), field, value)?;
            Ok(Self::of(date.into(), self.time))
        } else {
            let time = time_with(self.time.as_naive(), field, value)?;
            Ok(Self::of(self.date, time.into()))
        }
    }
}

impl From<chrono::NaiveDateTime> for LocalDateTime {
    fn from(date_time: chrono::NaiveDateTime) -> Self {
        Self::of(date_time.date().into(), date_time.time().into())
    }
}

impl From<LocalDateTime> for chrono::NaiveDateTime {
    fn from(date_time: LocalDateTime) -> Self {
        date_time.date.as_naive().and_time(date_time.time.as_naive())
    }
}

impl fmt::Display for LocalDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}T{}", self.date, self.time)
    }
}

impl TemporalAccessor for LocalDateTime {
    fn is_supported(&self, field: &dyn TemporalField) -> bool {
        match field.as_chrono_field() {
            Some(chrono) => Self::supports(chrono),
            None => field.is_supported_by(self),
        }
    }

    fn range(&self, field: &dyn TemporalField) -> TemporalResult<ValueRange> {
        match field.as_chrono_field() {
            Some(chrono) => self.chrono_range(chrono),
            None => field.range_refined_by(self),
        }
    }

    fn get_long(&self, field: &dyn TemporalField) -> TemporalResult<i64> {
        match field.as_chrono_field() {
            Some(chrono) => self.chrono_get(chrono),
            None => field.get_from(self),
        }
    }

    fn precision(&self) -> Option<ChronoUnit> {
        Some(ChronoUnit::Nanos)
    }

    fn chronology(&self) -> Option<Chronology> {
        Some(Chronology::ISO)
    }
}

impl Temporal for LocalDateTime {
    fn with_field(&self, field: &dyn TemporalField, value: i64) -> TemporalResult<Self> {
        match field.as_chrono_field() {
            Some(chrono) => self.chrono_with(chrono, value),
            None => Err(TemporalError::unsupported(field.name())),
        }
    }
}

/// A wall-clock time with an offset from UTC, such as `09:30+01:00`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OffsetTime {
    time: LocalTime,
    offset: ZoneOffset,
}

impl OffsetTime {
    #[must_use]
    pub const fn of(time: LocalTime, offset: ZoneOffset) -> Self {
        Self { time, offset }
    }

    #[must_use]
    pub const fn time(self) -> LocalTime {
        self.time
    }

    #[must_use]
    pub const fn offset(self) -> ZoneOffset {
        self.offset
    }
}

impl fmt::Display for OffsetTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.time, self.offset)
    }
}

impl TemporalAccessor for OffsetTime {
    fn is_supported(&self, field: &dyn TemporalField) -> bool {
        match field.as_chrono_field() {
            Some(chrono) => chrono.is_time_based() || chrono == ChronoField::OffsetSeconds,
            None => field.is_supported_by(self),
        }
    }

    fn range(&self, field: &dyn TemporalField) -> TemporalResult<ValueRange> {
        match field.as_chrono_field() {
            Some(ChronoField::OffsetSeconds) => Ok(ChronoField::OffsetSeconds.range()),
            Some(chrono) => time_range(chrono),
            None => field.range_refined_by(self),
        }
    }

    fn get_long(&self, field: &dyn TemporalField) -> TemporalResult<i64> {
        match field.as_chrono_field() {
            Some(ChronoField::OffsetSeconds) => Ok(i64::from(self.offset.total_seconds())),
            Some(chrono) => time_get(self.time.as_naive(), chrono),
            None => field.get_from(self),
        }
    }

    fn precision(&self) -> Option<ChronoUnit> {
        Some(ChronoUnit::Nanos)
    }
}

impl Temporal for OffsetTime {
    fn with_field(&self, field: &dyn TemporalField, value: i64) -> TemporalResult<Self> {
        match field.as_chrono_field() {
            Some(ChronoField::OffsetSeconds) => {
                let offset = ZoneOffset::of_total_seconds(super::narrow(value, field)?)?;
                Ok(Self::of(self.time, offset))
            }
            Some(chrono) => {
                let time = time_with(self.time.as_naive(), chrono, value)?;
                Ok(Self::of(time.into(), self.offset))
            }
            None => Err(TemporalError::unsupported(field.name())),
        }
    }
}

fn offset_range(date_time: LocalDateTime, field: ChronoField) -> TemporalResult<ValueRange> {
    match field {
        ChronoField::OffsetSeconds | ChronoField::InstantSeconds => Ok(field.range()),
        other => date_time.chrono_range(other),
    }
}

fn offset_get(
    date_time: LocalDateTime,
    offset: ZoneOffset,
    field: ChronoField,
) -> TemporalResult<i64> {
    match field {
        ChronoField::OffsetSeconds => Ok(i64::from(offset.total_seconds())),
        ChronoField::InstantSeconds => Ok(date_time.to_epoch_second(offset)),
        other => date_time.chrono_get(other),
    }
}

/// A date-time with an offset from UTC, such as `2026-10-16T09:30+01:00`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OffsetDateTime {
    date_time: LocalDateTime,
    offset: ZoneOffset,
}

impl OffsetDateTime {
    #[must_use]
    pub const fn of(date_time: LocalDateTime, offset: ZoneOffset) -> Self {
        Self { date_time, offset }
    }

    #[must_use]
    pub const fn date_time(self) -> LocalDateTime {
        self.date_time
    }

    #[must_use]
    pub const fn offset(self) -> ZoneOffset {
        self.offset
    }

    #[must_use]
    pub fn to_epoch_second(self) -> i64 {
        self.date_time.to_epoch_second(self.offset)
    }
}

impl TryFrom<chrono::DateTime<chrono::FixedOffset>> for OffsetDateTime {
    type Error = TemporalError;

    fn try_from(date_time: chrono::DateTime<chrono::FixedOffset>) -> TemporalResult<Self> {
        let offset = ZoneOffset::try_from(*date_time.offset())?;
        Ok(Self::of(date_time.naive_local().into(), offset))
    }
}

impl fmt::Display for OffsetDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.date_time, self.offset)
    }
}

impl TemporalAccessor for OffsetDateTime {
    fn is_supported(&self, field: &dyn TemporalField) -> bool {
        match field.as_chrono_field() {
            Some(_) => true,
            None => field.is_supported_by(self),
        }
    }

    fn range(&self, field: &dyn TemporalField) -> TemporalResult<ValueRange> {
        match field.as_chrono_field() {
            Some(chrono) => offset_range(self.date_time, chrono),
            None => field.range_refined_by(self),
        }
    }

    fn get_long(&self, field: &dyn TemporalField) -> TemporalResult<i64> {
        match field.as_chrono_field() {
            Some(chrono) => offset_get(self.date_time, self.offset, chrono),
            None => field.get_from(self),
        }
    }

    fn precision(&self) -> Option<ChronoUnit> {
        Some(ChronoUnit::Nanos)
    }

    fn chronology(&self) -> Option<Chronology> {
        Some(Chronology::ISO)
    }
}

impl Temporal for OffsetDateTime {
    fn with_field(&self, field: &dyn TemporalField, value: i64) -> TemporalResult<Self> {
        match field.as_chrono_field() {
            Some(ChronoField::OffsetSeconds) => {
                let offset = ZoneOffset::of_total_seconds(super::narrow(value, field)?)?;
                Ok(Self::of(self.date_time, offset))
            }
            Some(ChronoField::InstantSeconds) | None => {
                Err(TemporalError::unsupported(field.name()))
            }
            Some(chrono) => Ok(Self::of(self.date_time.chrono_with(chrono, value)?, self.offset)),
        }
    }
}

/// A date-time with an offset and a zone, such as
/// `2026-10-16T09:30+02:00[Europe/Paris]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ZonedDateTime {
    date_time: LocalDateTime,
    offset: ZoneOffset,
    zone: ZoneId,
}

impl ZonedDateTime {
    /// Combines the parts without consulting zone rules.
    ///
    /// ## Errors
    /// Returns `InvalidZone` if `zone` is a fixed offset that differs from
    /// `offset`.
    pub fn of_lenient(
        date_time: LocalDateTime,
        offset: ZoneOffset,
        zone: ZoneId,
    ) -> TemporalResult<Self> {
        if let ZoneId::Offset(zone_offset) = &zone
            && *zone_offset != offset
        {
            return Err(TemporalError::InvalidZone(format!(
                "offset {offset} does not match fixed zone {zone_offset}"
            )));
        }
        Ok(Self {
            date_time,
            offset,
            zone,
        })
    }

    #[must_use]
    pub const fn date_time(&self) -> LocalDateTime {
        self.date_time
    }

    #[must_use]
    pub const fn offset(&self) -> ZoneOffset {
        self.offset
    }

    #[must_use]
    pub const fn zone(&self) -> &ZoneId {
        &self.zone
    }

    #[must_use]
    pub fn to_offset_date_time(&self) -> OffsetDateTime {
        OffsetDateTime::of(self.date_time, self.offset)
    }
}

impl fmt::Display for ZonedDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.date_time, self.offset)?;
        if let ZoneId::Region(region) = &self.zone {
            write!(f, "[{region}]")?;
        }
        Ok(())
    }
}

impl TemporalAccessor for ZonedDateTime {
    fn is_supported(&self, field: &dyn TemporalField) -> bool {
        match field.as_chrono_field() {
            Some(_) => true,
            None => field.is_supported_by(self),
        }
    }

    fn range(&self, field: &dyn TemporalField) -> TemporalResult<ValueRange> {
        match field.as_chrono_field() {
            Some(chrono) => offset_range(self.date_time, chrono),
            None => field.range_refined_by(self),
        }
    }

    fn get_long(&self, field: &dyn TemporalField) -> TemporalResult<i64> {
        match field.as_chrono_field() {
            Some(chrono) => offset_get(self.date_time, self.offset, chrono),
            None => field.get_from(self),
        }
    }

    fn precision(&self) -> Option<ChronoUnit> {
        Some(ChronoUnit::Nanos)
    }

    fn chronology(&self) -> Option<Chronology> {
        Some(Chronology::ISO)
    }
}

impl Temporal for ZonedDateTime {
    fn with_field(&self, field: &dyn TemporalField, value: i64) -> TemporalResult<Self> {
        match field.as_chrono_field() {
            Some(ChronoField::OffsetSeconds | ChronoField::InstantSeconds) | None => {
                Err(TemporalError::unsupported(field.name()))
            }
            Some(chrono) => Ok(Self {
                date_time: self.date_time.chrono_with(chrono, value)?,
                offset: self.offset,
                zone: self.zone.clone(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::{DayOfWeek, Month};
    use crate::value::ZoneRegion;

    fn date_time(year: i32, month: Month, day: u8, hour: u8, minute: u8) -> LocalDateTime {
        LocalDateTime::of(
            LocalDate::of(year, month, day).expect("valid date"),
            LocalTime::of(hour, minute, 0, 0).expect("valid time"),
        )
    }

    #[test]
    fn local_date_time_reads_both_halves() {
        let dt = date_time(2026, Month::October, 16, 9, 30);
        assert_eq!(dt.get(&ChronoField::HourOfDay).expect("supported"), 9);
        assert_eq!(dt.get(&ChronoField::MonthOfYear).expect("supported"), 10);
        assert_eq!(DayOfWeek::from_temporal(&dt).expect("has weekday"), DayOfWeek::Friday);
        assert!(!dt.is_supported(&ChronoField::OffsetSeconds));
        assert_eq!(dt.to_string(), "2026-10-16T09:30:00");
    }

    #[test]
    fn adjusting_date_keeps_time() {
        let dt = date_time(2026, Month::October, 16, 9, 30);
        let adjusted = DayOfWeek::Monday.adjust_into(&dt).expect("adjustable");
        assert_eq!(adjusted, date_time(2026, Month::October, 12, 9, 30));
        let adjusted = Month::February.adjust_into(&dt).expect("adjustable");
        assert_eq!(adjusted, date_time(2026, Month::February, 16, 9, 30));
    }

    #[test]
    fn chrono_naive_date_time_interop() {
        let dt = date_time(2024, Month::February, 29, 23, 59);
        let naive = chrono::NaiveDateTime::from(dt);
        assert_eq!(LocalDateTime::from(naive), dt);
    }

    #[test]
    fn offset_time_fields() {
        let offset = ZoneOffset::of_hours_minutes(2, 0).expect("valid");
        let time = OffsetTime::of(LocalTime::of(8, 15, 0, 0).expect("valid"), offset);
        assert_eq!(time.get(&ChronoField::OffsetSeconds).expect("supported"), 7200);
        assert!(DayOfWeek::from_temporal(&time).is_err());
        assert_eq!(time.to_string(), "08:15:00+02:00");
    }

    #[test]
    fn offset_date_time_instant_seconds() {
        let offset = ZoneOffset::of_hours_minutes(1, 0).expect("valid");
        let odt = OffsetDateTime::of(date_time(1970, Month::January, 1, 1, 0), offset);
        assert_eq!(odt.get_long(&ChronoField::InstantSeconds).expect("supported"), 0);
        assert!(matches!(
            odt.get(&ChronoField::InstantSeconds),
            Err(TemporalError::Overflow(_))
        ));
    }

    #[test]
    fn offset_date_time_with_field() {
        let odt = OffsetDateTime::of(date_time(2026, Month::October, 16, 9, 30), ZoneOffset::UTC);
        let shifted = odt.with_field(&ChronoField::OffsetSeconds, -3600).expect("valid offset");
        assert_eq!(shifted.offset().total_seconds(), -3600);
        assert_eq!(shifted.date_time(), odt.date_time());

        let adjusted = odt.with_field(&ChronoField::HourOfDay, 7).expect("valid hour");
        assert_eq!(adjusted.date_time(), date_time(2026, Month::October, 16, 7, 30));

        assert!(matches!(
            odt.with_field(&ChronoField::InstantSeconds, 0),
            Err(TemporalError::UnsupportedField(_))
        ));
    }

    #[test]
    fn offset_date_time_from_chrono() {
        let fixed = chrono::FixedOffset::east_opt(3600).expect("valid offset");
        let chrono_dt = chrono::DateTime::parse_from_rfc3339("2026-10-16T09:30:00+01:00")
            .expect("valid timestamp")
            .with_timezone(&fixed);
        let odt = OffsetDateTime::try_from(chrono_dt).expect("in range");
        assert_eq!(odt.to_epoch_second(), chrono_dt.timestamp());
    }

    #[test]
    fn zoned_date_time_lenient_rules() {
        let offset = ZoneOffset::of_hours_minutes(2, 0).expect("valid");
        let dt = date_time(2026, Month::July, 1, 12, 0);
        let paris = ZoneRegion::of("Europe/Paris").expect("valid").into();
        let zoned = ZonedDateTime::of_lenient(dt, offset, paris).expect("regions are lenient");
        assert_eq!(zoned.to_string(), "2026-07-01T12:00:00+02:00[Europe/Paris]");

        assert!(ZonedDateTime::of_lenient(dt, offset, offset.into()).is_ok());
        assert!(matches!(
            ZonedDateTime::of_lenient(dt, offset, ZoneOffset::UTC.into()),
            Err(TemporalError::InvalidZone(_))
        ));
    }

    #[test]
    fn zoned_adjustment_keeps_zone() {
        let offset = ZoneOffset::of_hours_minutes(9, 0).expect("valid");
        let tokyo: ZoneId = ZoneRegion::of("Asia/Tokyo").expect("valid").into();
        let dt = date_time(2026, Month::October, 16, 9, 0);
        let zoned = ZonedDateTime::of_lenient(dt, offset, tokyo.clone()).expect("valid");
        let adjusted = DayOfWeek::Sunday.adjust_into(&zoned).expect("adjustable");
        assert_eq!(adjusted.date_time(), date_time(2026, Month::October, 18, 9, 0));
        assert_eq!(adjusted.zone(), &tokyo);
    }
}
