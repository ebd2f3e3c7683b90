use std::fmt;

use chrono::{DateTime, Utc};

use super::normalize_seconds;
use crate::error::{TemporalError, TemporalResult};
use crate::temporal::{ChronoField, ChronoUnit, TemporalAccessor, TemporalField, ValueRange};

/// An instantaneous point on the UTC time-line, as seconds and nanoseconds
/// from 1970-01-01T00:00:00Z.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Instant {
    seconds: i64,
    nanos: u32,
}

impl Instant {
    pub const EPOCH: Self = Self {
        seconds: 0,
        nanos: 0,
    };

    /// Epoch seconds of `-1000000000-01-01T00:00:00Z`.
    pub const MIN_SECOND: i64 = -31_557_014_167_219_200;

    /// Epoch seconds of `+1000000000-12-31T23:59:59Z`.
    pub const MAX_SECOND: i64 = 31_556_889_864_403_199;

    const SECONDS_RANGE: ValueRange = ValueRange::of(Self::MIN_SECOND, Self::MAX_SECOND);

    /// ## Errors
    /// Returns `Overflow` if the adjustment carries the seconds past `i64`, or
    /// `InvalidRange` if the result lies outside the supported instants.
    pub fn of_epoch_second(epoch_second: i64, nano_adjustment: i64) -> TemporalResult<Self> {
        let (seconds, nanos) = normalize_seconds(epoch_second, nano_adjustment)?;
        Self::SECONDS_RANGE.check_valid_value(seconds, &ChronoField::InstantSeconds)?;
        Ok(Self { seconds, nanos })
    }

    #[must_use]
    pub const fn epoch_second(self) -> i64 {
        self.seconds
    }

    #[must_use]
    pub const fn nano(self) -> u32 {
        self.nanos
    }

    /// Converts to a `chrono` timestamp, when it is within chrono's range.
    #[must_use]
    pub fn to_date_time(self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.seconds, self.nanos)
    }
}

impl From<DateTime<Utc>> for Instant {
    fn from(timestamp: DateTime<Utc>) -> Self {
        Self {
            seconds: timestamp.timestamp(),
            nanos: timestamp.timestamp_subsec_nanos() % 1_000_000_000,
        }
    }
}

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_date_time() {
            Some(timestamp) => write!(f, "{}", timestamp.format("%Y-%m-%dT%H:%M:%S%.fZ")),
            None => write!(f, "{}s+{}ns", self.seconds, self.nanos),
        }
    }
}

impl TemporalAccessor for Instant {
    fn is_supported(&self, field: &dyn TemporalField) -> bool {
        match field.as_chrono_field() {
            Some(chrono) => {
                matches!(chrono, ChronoField::InstantSeconds | ChronoField::NanoOfSecond)
            }
            None => field.is_supported_by(self),
        }
    }

    fn get_long(&self, field: &dyn TemporalField) -> TemporalResult<i64> {
        match field.as_chrono_field() {
            Some(ChronoField::InstantSeconds) => Ok(self.seconds),
            Some(ChronoField::NanoOfSecond) => Ok(i64::from(self.nanos)),
            Some(other) => Err(TemporalError::unsupported(other)),
            None => field.get_from(self),
        }
    }

    fn precision(&self) -> Option<ChronoUnit> {
        Some(ChronoUnit::Nanos)
    }
}
