//! Payload encoders and decoders for each serializable type.
//!
//! Payloads follow the tag byte and use big-endian primitives:
//!
//! ```text
//! Duration        i64 seconds | i32 nanos
//! Instant         i64 seconds | i32 nanos
//! LocalDate       i32 year | u8 month | u8 day
//! LocalTime       compact, see below
//! LocalDateTime   LocalDate | LocalTime
//! ZonedDateTime   LocalDateTime | ZoneOffset | tagged ZoneRegion or ZoneOffset
//! ZoneRegion      u16 length | UTF-8 id
//! ZoneOffset      i8 quarter hours, or 127 | i32 seconds
//! OffsetTime      LocalTime | ZoneOffset
//! OffsetDateTime  LocalDateTime | ZoneOffset
//! Year            i32
//! YearMonth       i32 year | u8 month
//! MonthDay        u8 month | u8 day
//! Period          i32 years | i32 months | i32 days
//! ```
//!
//! A `LocalTime` stops after its last non-zero component, which is written
//! bitwise complemented so the reader sees a negative byte and stops too.
//! Nanoseconds, when present, always follow a full hour, minute and second.

use std::fmt;
use std::io::{Read, Write};

use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};

use super::{SerError, SerResult, TypeTag};
use crate::calendar::Month;
use crate::temporal::ChronoField;
use crate::value::{
    Duration, Instant, LocalDate, LocalDateTime, LocalTime, MonthDay, OffsetDateTime, OffsetTime,
    Period, Year, YearMonth, ZoneId, ZoneOffset, ZoneRegion, ZonedDateTime, narrow,
};

/// Offset byte announcing a full `i32` seconds value.
const OFFSET_SECONDS_ESCAPE: i8 = 127;

const SECONDS_PER_QUARTER_HOUR: i32 = 900;

/// A value type with a registered wire tag.
pub trait WireCodec: Sized {
    const TAG: TypeTag;

    /// Writes the payload, without the tag byte.
    ///
    /// ## Errors
    /// Returns `Io` if the sink fails.
    fn write_payload<W: Write + ?Sized>(&self, w: &mut W) -> SerResult<()>;

    /// Reads a payload written by [`WireCodec::write_payload`].
    ///
    /// ## Errors
    /// Returns `Io` on a short or failing source and `InvalidValue` when the
    /// decoded fields do not form a valid value.
    fn read_payload<R: Read + ?Sized>(r: &mut R) -> SerResult<Self>;
}

/// Range-checks a decoded field and narrows it to its storage type.
fn field_value<T>(value: i64, field: ChronoField) -> SerResult<T>
where
    T: TryFrom<i64>,
    T::Error: fmt::Display,
{
    let value = field.range().check_valid_value(value, &field)?;
    Ok(narrow(value, &field)?)
}

#[expect(clippy::cast_possible_wrap, reason = "nanoseconds are below 10^9")]
const fn nanos_to_i32(nanos: u32) -> i32 {
    nanos as i32
}

fn read_month<R: Read + ?Sized>(r: &mut R) -> SerResult<Month> {
    Ok(Month::of(i32::from(r.read_u8()?))?)
}

impl WireCodec for Duration {
    const TAG: TypeTag = TypeTag::Duration;

    fn write_payload<W: Write + ?Sized>(&self, w: &mut W) -> SerResult<()> {
        w.write_i64::<BigEndian>(self.seconds())?;
        w.write_i32::<BigEndian>(nanos_to_i32(self.nanos()))?;
        Ok(())
    }

    fn read_payload<R: Read + ?Sized>(r: &mut R) -> SerResult<Self> {
        let seconds = r.read_i64::<BigEndian>()?;
        let nanos = r.read_i32::<BigEndian>()?;
        Ok(Self::of_seconds(seconds, i64::from(nanos))?)
    }
}

impl WireCodec for Instant {
    const TAG: TypeTag = TypeTag::Instant;

    fn write_payload<W: Write + ?Sized>(&self, w: &mut W) -> SerResult<()> {
        w.write_i64::<BigEndian>(self.epoch_second())?;
        w.write_i32::<BigEndian>(nanos_to_i32(self.nano()))?;
        Ok(())
    }

    fn read_payload<R: Read + ?Sized>(r: &mut R) -> SerResult<Self> {
        let seconds = r.read_i64::<BigEndian>()?;
        let nanos = r.read_i32::<BigEndian>()?;
        Ok(Self::of_epoch_second(seconds, i64::from(nanos))?)
    }
}

impl WireCodec for LocalDate {
    const TAG: TypeTag = TypeTag::LocalDate;

    fn write_payload<W: Write + ?Sized>(&self, w: &mut W) -> SerResult<()> {
        w.write_i32::<BigEndian>(self.year())?;
        w.write_u8(self.month().value())?;
        w.write_u8(self.day())?;
        Ok(())
    }

    fn read_payload<R: Read + ?Sized>(r: &mut R) -> SerResult<Self> {
        let year = r.read_i32::<BigEndian>()?;
        let month = read_month(r)?;
        let day = r.read_u8()?;
        Ok(Self::of(year, month, day)?)
    }
}

impl WireCodec for LocalTime {
    const TAG: TypeTag = TypeTag::LocalTime;

    fn write_payload<W: Write + ?Sized>(&self, w: &mut W) -> SerResult<()> {
        let (hour, minute, second, nano) = (self.hour(), self.minute(), self.second(), self.nano());
        if nano == 0 {
            if second == 0 {
                if minute == 0 {
                    w.write_u8(!hour)?;
                } else {
                    w.write_u8(hour)?;
                    w.write_u8(!minute)?;
                }
            } else {
                w.write_u8(hour)?;
                w.write_u8(minute)?;
                w.write_u8(!second)?;
            }
        } else {
            w.write_u8(hour)?;
            w.write_u8(minute)?;
            w.write_u8(second)?;
            w.write_i32::<BigEndian>(nanos_to_i32(nano))?;
        }
        Ok(())
    }

    fn read_payload<R: Read + ?Sized>(r: &mut R) -> SerResult<Self> {
        let (mut minute, mut second, mut nano) = (0_i8, 0_i8, 0_i32);
        let mut hour = r.read_i8()?;
        if hour < 0 {
            hour = !hour;
        } else {
            minute = r.read_i8()?;
            if minute < 0 {
                minute = !minute;
            } else {
                second = r.read_i8()?;
                if second < 0 {
                    second = !second;
                } else {
                    nano = r.read_i32::<BigEndian>()?;
                }
            }
        }
        Ok(Self::of(
            field_value(i64::from(hour), ChronoField::HourOfDay)?,
            field_value(i64::from(minute), ChronoField::MinuteOfHour)?,
            field_value(i64::from(second), ChronoField::SecondOfMinute)?,
            field_value(i64::from(nano), ChronoField::NanoOfSecond)?,
        )?)
    }
}

impl WireCodec for LocalDateTime {
    const TAG: TypeTag = TypeTag::LocalDateTime;

    fn write_payload<W: Write + ?Sized>(&self, w: &mut W) -> SerResult<()> {
        self.date().write_payload(w)?;
        self.time().write_payload(w)
    }

    fn read_payload<R: Read + ?Sized>(r: &mut R) -> SerResult<Self> {
        let date = LocalDate::read_payload(r)?;
        let time = LocalTime::read_payload(r)?;
        Ok(Self::of(date, time))
    }
}

impl WireCodec for ZonedDateTime {
    const TAG: TypeTag = TypeTag::ZonedDateTime;

    fn write_payload<W: Write + ?Sized>(&self, w: &mut W) -> SerResult<()> {
        self.date_time().write_payload(w)?;
        self.offset().write_payload(w)?;
        match self.zone() {
            ZoneId::Offset(offset) => {
                w.write_u8(ZoneOffset::TAG.as_u8())?;
                offset.write_payload(w)
            }
            ZoneId::Region(region) => {
                w.write_u8(ZoneRegion::TAG.as_u8())?;
                region.write_payload(w)
            }
        }
    }

    fn read_payload<R: Read + ?Sized>(r: &mut R) -> SerResult<Self> {
        let date_time = LocalDateTime::read_payload(r)?;
        let offset = ZoneOffset::read_payload(r)?;
        let zone = match TypeTag::try_from(r.read_u8()?)? {
            TypeTag::ZoneOffset => ZoneId::Offset(ZoneOffset::read_payload(r)?),
            TypeTag::ZoneRegion => ZoneId::Region(ZoneRegion::read_payload(r)?),
            found => {
                return Err(SerError::UnexpectedType {
                    expected: "ZoneRegion or ZoneOffset",
                    found,
                });
            }
        };
        Ok(Self::of_lenient(date_time, offset, zone)?)
    }
}

impl WireCodec for ZoneRegion {
    const TAG: TypeTag = TypeTag::ZoneRegion;

    fn write_payload<W: Write + ?Sized>(&self, w: &mut W) -> SerResult<()> {
        let bytes = self.id().as_bytes();
        let len = u16::try_from(bytes.len())
            .ok()
            .ok_or(SerError::StringTooLong(bytes.len()))?;
        w.write_u16::<BigEndian>(len)?;
        w.write_all(bytes)?;
        Ok(())
    }

    fn read_payload<R: Read + ?Sized>(r: &mut R) -> SerResult<Self> {
        let len = r.read_u16::<BigEndian>()?;
        let mut bytes = vec![0_u8; usize::from(len)];
        r.read_exact(&mut bytes)?;
        Ok(Self::of(String::from_utf8(bytes)?)?)
    }
}

impl WireCodec for ZoneOffset {
    const TAG: TypeTag = TypeTag::ZoneOffset;

    fn write_payload<W: Write + ?Sized>(&self, w: &mut W) -> SerResult<()> {
        let seconds = self.total_seconds();
        match i8::try_from(seconds / SECONDS_PER_QUARTER_HOUR) {
            Ok(quarters) if seconds % SECONDS_PER_QUARTER_HOUR == 0 => w.write_i8(quarters)?,
            _ => {
                w.write_i8(OFFSET_SECONDS_ESCAPE)?;
                w.write_i32::<BigEndian>(seconds)?;
            }
        }
        Ok(())
    }

    fn read_payload<R: Read + ?Sized>(r: &mut R) -> SerResult<Self> {
        let quarters = r.read_i8()?;
        let seconds = if quarters == OFFSET_SECONDS_ESCAPE {
            r.read_i32::<BigEndian>()?
        } else {
            i32::from(quarters) * SECONDS_PER_QUARTER_HOUR
        };
        Ok(Self::of_total_seconds(seconds)?)
    }
}

impl WireCodec for OffsetTime {
    const TAG: TypeTag = TypeTag::OffsetTime;

    fn write_payload<W: Write + ?Sized>(&self, w: &mut W) -> SerResult<()> {
        self.time().write_payload(w)?;
        self.offset().write_payload(w)
    }

    fn read_payload<R: Read + ?Sized>(r: &mut R) -> SerResult<Self> {
        let time = LocalTime::read_payload(r)?;
        let offset = ZoneOffset::read_payload(r)?;
        Ok(Self::of(time, offset))
    }
}

impl WireCodec for OffsetDateTime {
    const TAG: TypeTag = TypeTag::OffsetDateTime;

    fn write_payload<W: Write + ?Sized>(&self, w: &mut W) -> SerResult<()> {
        self.date_time().write_payload(w)?;
        self.offset().write_payload(w)
    }

    fn read_payload<R: Read + ?Sized>(r: &mut R) -> SerResult<Self> {
        let date_time = LocalDateTime::read_payload(r)?;
        let offset = ZoneOffset::read_payload(r)?;
        Ok(Self::of(date_time, offset))
    }
}

impl WireCodec for Year {
    const TAG: TypeTag = TypeTag::Year;

    fn write_payload<W: Write + ?Sized>(&self, w: &mut W) -> SerResult<()> {
        w.write_i32::<BigEndian>(self.value())?;
        Ok(())
    }

    fn read_payload<R: Read + ?Sized>(r: &mut R) -> SerResult<Self> {
        Ok(Self::of(r.read_i32::<BigEndian>()?)?)
    }
}

impl WireCodec for YearMonth {
    const TAG: TypeTag = TypeTag::YearMonth;

    fn write_payload<W: Write + ?Sized>(&self, w: &mut W) -> SerResult<()> {
        w.write_i32::<BigEndian>(self.year())?;
        w.write_u8(self.month().value())?;
        Ok(())
    }

    fn read_payload<R: Read + ?Sized>(r: &mut R) -> SerResult<Self> {
        let year = r.read_i32::<BigEndian>()?;
        let month = read_month(r)?;
        Ok(Self::of(year, month)?)
    }
}

impl WireCodec for MonthDay {
    const TAG: TypeTag = TypeTag::MonthDay;

    fn write_payload<W: Write + ?Sized>(&self, w: &mut W) -> SerResult<()> {
        w.write_u8(self.month().value())?;
        w.write_u8(self.day())?;
        Ok(())
    }

    fn read_payload<R: Read + ?Sized>(r: &mut R) -> SerResult<Self> {
        let month = read_month(r)?;
        let day = r.read_u8()?;
        Ok(Self::of(month, day)?)
    }
}

impl WireCodec for Period {
    const TAG: TypeTag = TypeTag::Period;

    fn write_payload<W: Write + ?Sized>(&self, w: &mut W) -> SerResult<()> {
        w.write_i32::<BigEndian>(self.years)?;
        w.write_i32::<BigEndian>(self.months)?;
        w.write_i32::<BigEndian>(self.days)?;
        Ok(())
    }

    fn read_payload<R: Read + ?Sized>(r: &mut R) -> SerResult<Self> {
        let years = r.read_i32::<BigEndian>()?;
        let months = r.read_i32::<BigEndian>()?;
        let days = r.read_i32::<BigEndian>()?;
        Ok(Self::of(years, months, days))
    }
}
