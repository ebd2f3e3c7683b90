//! The date-time value family carried by the binary codec.
//!
//! These are plain validated records. Date and time types expose their
//! fields through the temporal protocol so the calendrical enumerations can
//! read and adjust them; calendar arithmetic is delegated to `chrono`.

mod amount;
mod date;
mod datetime;
mod instant;
mod time;
mod year;
mod zone;

use std::fmt;

pub use amount::{Duration, Period};
pub use date::LocalDate;
pub use datetime::{LocalDateTime, OffsetDateTime, OffsetTime, ZonedDateTime};
pub use instant::Instant;
pub use time::LocalTime;
pub use year::{MonthDay, Year, YearMonth};
pub use zone::{ZoneId, ZoneOffset, ZoneRegion};

use crate::error::{TemporalError, TemporalResult};
use crate::temporal::TemporalField;

pub(crate) const NANOS_PER_SECOND: i64 = 1_000_000_000;

/// Folds a signed nanosecond adjustment into whole seconds, leaving
/// `0..NANOS_PER_SECOND` nanoseconds.
pub(crate) fn normalize_seconds(seconds: i64, nano_adjustment: i64) -> TemporalResult<(i64, u32)> {
    let carry = nano_adjustment.div_euclid(NANOS_PER_SECOND);
    let seconds = seconds.checked_add(carry).ok_or_else(|| {
        TemporalError::Overflow(format!("{seconds} seconds plus {carry} carried seconds"))
    })?;
    let nanos = nano_adjustment.rem_euclid(NANOS_PER_SECOND);
    let nanos = u32::try_from(nanos)
        .map_err(|e| TemporalError::Overflow(format!("nanosecond remainder {nanos}: {e}")))?;
    Ok((seconds, nanos))
}

/// Converts a range-checked field value into the storage width of a value type.
pub(crate) fn narrow<T>(value: i64, field: &dyn TemporalField) -> TemporalResult<T>
where
    T: TryFrom<i64>,
    T::Error: fmt::Display,
{
    T::try_from(value)
        .map_err(|e| TemporalError::Overflow(format!("{} value {value}: {e}", field.name())))
}
