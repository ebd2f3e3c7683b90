//! Amounts of time: exact (`Duration`) and calendar-based (`Period`).

use std::fmt;

use super::normalize_seconds;
use crate::error::TemporalResult;

/// Exact amount of time in seconds and nanoseconds.
///
/// `nanos` is always in `0..1_000_000_000`; negative durations carry the sign
/// in `seconds`, so minus half a second is `(-1, 500_000_000)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Duration {
    seconds: i64,
    nanos: u32,
}

impl Duration {
    pub const ZERO: Self = Self {
        seconds: 0,
        nanos: 0,
    };

    /// Creates a duration from seconds and a nanosecond adjustment of any sign.
    ///
    /// ## Errors
    /// Returns `Overflow` if the adjustment carries the seconds past `i64`.
    pub fn of_seconds(seconds: i64, nano_adjustment: i64) -> TemporalResult<Self> {
        let (seconds, nanos) = normalize_seconds(seconds, nano_adjustment)?;
        Ok(Self { seconds, nanos })
    }

    #[must_use]
    pub const fn seconds(self) -> i64 {
        self.seconds
    }

    #[must_use]
    pub const fn nanos(self) -> u32 {
        self.nanos
    }

    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.seconds == 0 && self.nanos == 0
    }

    #[must_use]
    pub const fn is_negative(self) -> bool {
        self.seconds < 0
    }
}

impl TryFrom<chrono::TimeDelta> for Duration {
    type Error = crate::error::TemporalError;

    fn try_from(delta: chrono::TimeDelta) -> TemporalResult<Self> {
        Self::of_seconds(delta.num_seconds(), i64::from(delta.subsec_nanos()))
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.nanos == 0 {
            write!(f, "{}s", self.seconds)
        } else {
            write!(f, "{}s+{}ns", self.seconds, self.nanos)
        }
    }
}

/// Calendar amount of years, months and days. The parts are independent and
/// are never normalised against each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Period {
    pub years: i32,
    pub months: i32,
    pub days: i32,
}

impl Period {
    pub const ZERO: Self = Self {
        years: 0,
        months: 0,
        days: 0,
    };

    #[must_use]
    pub const fn of(years: i32, months: i32, days: i32) -> Self {
        Self {
            years,
            months,
            days,
        }
    }

    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.years == 0 && self.months == 0 && self.days == 0
    }

    #[must_use]
    pub const fn is_negative(self) -> bool {
        self.years < 0 || self.months < 0 || self.days < 0
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return f.write_str("P0D");
        }
        f.write_str("P")?;
        if self.years != 0 {
            write!(f, "{}Y", self.years)?;
        }
        if self.months != 0 {
            write!(f, "{}M", self.months)?;
        }
        if self.days != 0 {
            write!(f, "{}D", self.days)?;
        }
        Ok(())
    }
}
