//! Tagged binary serialization of the date-time value family.
//!
//! Every record is one tag byte followed by the payload of the type that tag
//! names. [`Ser`] pairs a tag with its payload for the duration of a single
//! write or read; it carries no state between operations.

mod codec;
mod error;
mod tag;
#[cfg(test)]
mod tests;

use std::io::{Cursor, Read, Write};

use byteorder::{ReadBytesExt, WriteBytesExt};

pub use codec::WireCodec;
pub use error::{SerError, SerResult};
pub use tag::TypeTag;

use crate::value::{
    Duration, Instant, LocalDate, LocalDateTime, LocalTime, MonthDay, OffsetDateTime, OffsetTime,
    Period, Year, YearMonth, ZoneOffset, ZoneRegion, ZonedDateTime,
};

/// Any serializable value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Duration(Duration),
    Instant(Instant),
    LocalDate(LocalDate),
    LocalTime(LocalTime),
    LocalDateTime(LocalDateTime),
    ZonedDateTime(ZonedDateTime),
    ZoneRegion(ZoneRegion),
    ZoneOffset(ZoneOffset),
    OffsetTime(OffsetTime),
    OffsetDateTime(OffsetDateTime),
    Year(Year),
    YearMonth(YearMonth),
    MonthDay(MonthDay),
    Period(Period),
}

impl Value {
    /// The tag this value is written under.
    #[must_use]
    pub const fn tag(&self) -> TypeTag {
        match self {
            Self::Duration(_) => TypeTag::Duration,
            Self::Instant(_) => TypeTag::Instant,
            Self::LocalDate(_) => TypeTag::LocalDate,
            Self::LocalTime(_) => TypeTag::LocalTime,
            Self::LocalDateTime(_) => TypeTag::LocalDateTime,
            Self::ZonedDateTime(_) => TypeTag::ZonedDateTime,
            Self::ZoneRegion(_) => TypeTag::ZoneRegion,
            Self::ZoneOffset(_) => TypeTag::ZoneOffset,
            Self::OffsetTime(_) => TypeTag::OffsetTime,
            Self::OffsetDateTime(_) => TypeTag::OffsetDateTime,
            Self::Year(_) => TypeTag::Year,
            Self::YearMonth(_) => TypeTag::YearMonth,
            Self::MonthDay(_) => TypeTag::MonthDay,
            Self::Period(_) => TypeTag::Period,
        }
    }
}

macro_rules! value_conversions {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for Value {
                fn from(value: $variant) -> Self {
                    Self::$variant(value)
                }
            }

            impl TryFrom<Value> for $variant {
                type Error = SerError;

                fn try_from(value: Value) -> SerResult<Self> {
                    match value {
                        Value::$variant(inner) => Ok(inner),
                        other => Err(SerError::UnexpectedType {
                            expected: <$variant as WireCodec>::TAG.type_name(),
                            found: other.tag(),
                        }),
                    }
                }
            }
        )*
    };
}

value_conversions!(
    Duration,
    Instant,
    LocalDate,
    LocalTime,
    LocalDateTime,
    ZonedDateTime,
    ZoneRegion,
    ZoneOffset,
    OffsetTime,
    OffsetDateTime,
    Year,
    YearMonth,
    MonthDay,
    Period,
);

/// A tag and payload in transit through one write or read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ser {
    tag: TypeTag,
    payload: Value,
}

impl Ser {
    /// Pairs `payload` with its own tag.
    #[must_use]
    pub fn new(payload: impl Into<Value>) -> Self {
        let payload = payload.into();
        Self {
            tag: payload.tag(),
            payload,
        }
    }

    /// Pairs an explicit tag with a payload. A mismatched pair is only
    /// detected by [`Ser::write`].
    #[must_use]
    pub const fn from_parts(tag: TypeTag, payload: Value) -> Self {
        Self { tag, payload }
    }

    #[must_use]
    pub const fn tag(&self) -> TypeTag {
        self.tag
    }

    #[must_use]
    pub const fn payload(&self) -> &Value {
        &self.payload
    }

    #[must_use]
    pub fn into_payload(self) -> Value {
        self.payload
    }

    /// Writes the tag byte and then the payload.
    ///
    /// ## Errors
    /// Returns `Io` if the sink fails, or `StringTooLong` for a zone id that
    /// does not fit its length prefix.
    ///
    /// ## Panics
    /// Panics if the tag does not name the payload's type. Such a pair can only
    /// be built through [`Ser::from_parts`] and is a caller bug, not bad data.
    #[tracing::instrument(skip_all, fields(tag = %self.tag))]
    pub fn write<W: Write + ?Sized>(&self, sink: &mut W) -> SerResult<()> {
        let payload_tag = self.payload.tag();
        assert!(
            self.tag == payload_tag,
            "type tag {} does not match payload of type {payload_tag}",
            self.tag
        );
        sink.write_u8(self.tag.as_u8())?;
        match &self.payload {
            Value::Duration(v) => v.write_payload(sink),
            Value::Instant(v) => v.write_payload(sink),
            Value::LocalDate(v) => v.write_payload(sink),
            Value::LocalTime(v) => v.write_payload(sink),
            Value::LocalDateTime(v) => v.write_payload(sink),
            Value::ZonedDateTime(v) => v.write_payload(sink),
            Value::ZoneRegion(v) => v.write_payload(sink),
            Value::ZoneOffset(v) => v.write_payload(sink),
            Value::OffsetTime(v) => v.write_payload(sink),
            Value::OffsetDateTime(v) => v.write_payload(sink),
            Value::Year(v) => v.write_payload(sink),
            Value::YearMonth(v) => v.write_payload(sink),
            Value::MonthDay(v) => v.write_payload(sink),
            Value::Period(v) => v.write_payload(sink),
        }?;
        tracing::trace!("Value written");
        Ok(())
    }

    /// Reads one tag byte and the payload it announces.
    ///
    /// ## Errors
    /// Returns `CorruptStream` for an unregistered tag, having consumed only
    /// the tag byte. Returns `Io` or `InvalidValue` for a short or invalid
    /// payload.
    #[tracing::instrument(skip_all)]
    pub fn read<R: Read + ?Sized>(source: &mut R) -> SerResult<Self> {
        let byte = source.read_u8()?;
        let tag = TypeTag::try_from(byte).inspect_err(|_| {
            tracing::warn!(tag = byte, "Unknown type tag in serialized stream");
        })?;
        tracing::debug!(%tag, "Reading value");
        let payload = match tag {
            TypeTag::Duration => Value::Duration(Duration::read_payload(source)?),
            TypeTag::Instant => Value::Instant(Instant::read_payload(source)?),
            TypeTag::LocalDate => Value::LocalDate(LocalDate::read_payload(source)?),
            TypeTag::LocalTime => Value::LocalTime(LocalTime::read_payload(source)?),
            TypeTag::LocalDateTime => Value::LocalDateTime(LocalDateTime::read_payload(source)?),
            TypeTag::ZonedDateTime => Value::ZonedDateTime(ZonedDateTime::read_payload(source)?),
            TypeTag::ZoneRegion => Value::ZoneRegion(ZoneRegion::read_payload(source)?),
            TypeTag::ZoneOffset => Value::ZoneOffset(ZoneOffset::read_payload(source)?),
            TypeTag::OffsetTime => Value::OffsetTime(OffsetTime::read_payload(source)?),
            TypeTag::OffsetDateTime => {
                Value::OffsetDateTime(OffsetDateTime::read_payload(source)?)
            }
            TypeTag::Year => Value::Year(Year::read_payload(source)?),
            TypeTag::YearMonth => Value::YearMonth(YearMonth::read_payload(source)?),
            TypeTag::MonthDay => Value::MonthDay(MonthDay::read_payload(source)?),
            TypeTag::Period => Value::Period(Period::read_payload(source)?),
        };
        Ok(Self { tag, payload })
    }
}

/// Writes `value` as one tagged record.
///
/// ## Errors
/// See [`Ser::write`].
pub fn write_value<W: Write + ?Sized>(value: impl Into<Value>, sink: &mut W) -> SerResult<()> {
    Ser::new(value).write(sink)
}

/// Reads one tagged record.
///
/// ## Errors
/// See [`Ser::read`].
pub fn read_value<R: Read + ?Sized>(source: &mut R) -> SerResult<Value> {
    Ser::read(source).map(Ser::into_payload)
}

/// Encodes `value` into a new buffer.
///
/// ## Errors
/// See [`Ser::write`].
pub fn to_bytes(value: impl Into<Value>) -> SerResult<Vec<u8>> {
    let mut bytes = Vec::new();
    write_value(value, &mut bytes)?;
    Ok(bytes)
}

/// Decodes a buffer holding exactly one record.
///
/// ## Errors
/// Returns `TrailingBytes` if anything follows the record, plus any error from
/// [`Ser::read`].
pub fn from_bytes(bytes: &[u8]) -> SerResult<Value> {
    let mut cursor = Cursor::new(bytes);
    let value = read_value(&mut cursor)?;
    let consumed = usize::try_from(cursor.position()).unwrap_or(bytes.len());
    match bytes.len().saturating_sub(consumed) {
        0 => Ok(value),
        count => Err(SerError::TrailingBytes { count }),
    }
}
