//! Zone identifiers: fixed offsets from UTC and named regions.

use std::fmt;

use chrono::Offset;

use crate::error::{TemporalError, TemporalResult};
use crate::temporal::{ChronoField, TemporalAccessor, TemporalField, ValueRange};

/// A fixed offset from UTC, within ±18 hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ZoneOffset {
    total_seconds: i32,
}

impl ZoneOffset {
    pub const UTC: Self = Self { total_seconds: 0 };

    /// ## Errors
    /// Returns `InvalidRange` if the offset exceeds ±18 hours.
    pub fn of_total_seconds(total_seconds: i32) -> TemporalResult<Self> {
        ChronoField::OffsetSeconds
            .range()
            .check_valid_value(i64::from(total_seconds), &ChronoField::OffsetSeconds)?;
        Ok(Self { total_seconds })
    }

    /// ## Errors
    /// Returns `InvalidRange` if the offset exceeds ±18 hours.
    pub fn of_hours_minutes(hours: i32, minutes: i32) -> TemporalResult<Self> {
        let total = i64::from(hours) * 3600 + i64::from(minutes) * 60;
        let total = ChronoField::OffsetSeconds
            .range()
            .check_valid_value(total, &ChronoField::OffsetSeconds)?;
        Self::of_total_seconds(super::narrow(total, &ChronoField::OffsetSeconds)?)
    }

    #[must_use]
    pub const fn total_seconds(self) -> i32 {
        self.total_seconds
    }

    /// Normalised identifier: `Z` for UTC, otherwise `+HH:MM` or `+HH:MM:SS`.
    #[must_use]
    pub fn id(self) -> String {
        if self.total_seconds == 0 {
            return "Z".to_string();
        }
        let sign = if self.total_seconds < 0 { '-' } else { '+' };
        let abs = self.total_seconds.unsigned_abs();
        let (hours, minutes, seconds) = (abs / 3600, abs / 60 % 60, abs % 60);
        if seconds == 0 {
            format!("{sign}{hours:02}:{minutes:02}")
        } else {
            format!("{sign}{hours:02}:{minutes:02}:{seconds:02}")
        }
    }
}

impl fmt::Display for ZoneOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id())
    }
}

impl TryFrom<chrono::FixedOffset> for ZoneOffset {
    type Error = TemporalError;

    fn try_from(offset: chrono::FixedOffset) -> TemporalResult<Self> {
        Self::of_total_seconds(offset.local_minus_utc())
    }
}

impl From<ZoneOffset> for chrono::FixedOffset {
    fn from(offset: ZoneOffset) -> Self {
        // ±18 hours is always within chrono's ±24 hour bound
        chrono::FixedOffset::east_opt(offset.total_seconds).unwrap_or_else(|| chrono::Utc.fix())
    }
}

impl TemporalAccessor for ZoneOffset {
    fn is_supported(&self, field: &dyn TemporalField) -> bool {
        match field.as_chrono_field() {
            Some(chrono) => chrono == ChronoField::OffsetSeconds,
            None => field.is_supported_by(self),
        }
    }

    fn range(&self, field: &dyn TemporalField) -> TemporalResult<ValueRange> {
        match field.as_chrono_field() {
            Some(ChronoField::OffsetSeconds) => Ok(ChronoField::OffsetSeconds.range()),
            Some(other) => Err(TemporalError::unsupported(other)),
            None => field.range_refined_by(self),
        }
    }

    fn get_long(&self, field: &dyn TemporalField) -> TemporalResult<i64> {
        match field.as_chrono_field() {
            Some(ChronoField::OffsetSeconds) => Ok(i64::from(self.total_seconds)),
            Some(other) => Err(TemporalError::unsupported(other)),
            None => field.get_from(self),
        }
    }
}

/// A named region such as `Europe/Paris`.
///
/// Only the identifier syntax is checked; no rules database is consulted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ZoneRegion {
    id: String,
}

impl ZoneRegion {
    /// ## Errors
    /// Returns `InvalidZone` unless `id` is a letter followed by one or more of
    /// letters, digits and `~/._+-`.
    pub fn of(id: impl Into<String>) -> TemporalResult<Self> {
        let id = id.into();
        let mut chars = id.chars();
        let first_ok = chars.next().is_some_and(|c| c.is_ascii_alphabetic());
        let rest_ok = !chars.as_str().is_empty()
            && chars.all(|c| c.is_ascii_alphanumeric() || "~/._+-".contains(c));
        if first_ok && rest_ok {
            Ok(Self { id })
        } else {
            Err(TemporalError::InvalidZone(id))
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }
}

impl fmt::Display for ZoneRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}

/// Either kind of zone identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ZoneId {
    Offset(ZoneOffset),
    Region(ZoneRegion),
}

impl ZoneId {
    #[must_use]
    pub fn id(&self) -> String {
        match self {
            Self::Offset(offset) => offset.id(),
            Self::Region(region) => region.id().to_string(),
        }
    }
}

impl fmt::Display for ZoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Offset(offset) => fmt::Display::fmt(offset, f),
            Self::Region(region) => fmt::Display::fmt(region, f),
        }
    }
}

impl From<ZoneOffset> for ZoneId {
    fn from(offset: ZoneOffset) -> Self {
        Self::Offset(offset)
    }
}

impl From<ZoneRegion> for ZoneId {
    fn from(region: ZoneRegion) -> Self {
        Self::Region(region)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_bounds() {
        assert!(ZoneOffset::of_total_seconds(18 * 3600).is_ok());
        assert!(ZoneOffset::of_total_seconds(-18 * 3600).is_ok());
        assert!(ZoneOffset::of_total_seconds(18 * 3600 + 1).is_err());
        assert!(ZoneOffset::of_hours_minutes(19, 0).is_err());
    }

    #[test]
    fn offset_ids() {
        assert_eq!(ZoneOffset::UTC.id(), "Z");
        assert_eq!(ZoneOffset::of_hours_minutes(5, 30).expect("valid").id(), "+05:30");
        assert_eq!(ZoneOffset::of_hours_minutes(-8, 0).expect("valid").id(), "-08:00");
        assert_eq!(ZoneOffset::of_total_seconds(3661).expect("valid").id(), "+01:01:01");
    }

    #[test]
    fn offset_field() {
        let offset = ZoneOffset::of_hours_minutes(1, 0).expect("valid");
        assert_eq!(offset.get(&ChronoField::OffsetSeconds).expect("supported"), 3600);
        assert!(!offset.is_supported(&ChronoField::DayOfWeek));
    }

    #[test]
    fn chrono_fixed_offset_interop() {
        let fixed = chrono::FixedOffset::west_opt(3600).expect("valid offset");
        let offset = ZoneOffset::try_from(fixed).expect("within 18 hours");
        assert_eq!(offset.total_seconds(), -3600);
        assert_eq!(chrono::FixedOffset::from(offset), fixed);
    }

    #[test]
    fn region_syntax() {
        assert!(ZoneRegion::of("Europe/Paris").is_ok());
        assert!(ZoneRegion::of("America/Argentina/Buenos_Aires").is_ok());
        assert!(ZoneRegion::of("Etc/GMT+5").is_ok());
        assert!(matches!(ZoneRegion::of(""), Err(TemporalError::InvalidZone(_))));
        assert!(ZoneRegion::of("E").is_err());
        assert!(ZoneRegion::of("1Europe").is_err());
        assert!(ZoneRegion::of("Europe Paris").is_err());
    }

    #[test]
    fn zone_id_display() {
        let region: ZoneId = ZoneRegion::of("Asia/Tokyo").expect("valid").into();
        assert_eq!(region.to_string(), "Asia/Tokyo");
        let offset: ZoneId = ZoneOffset::UTC.into();
        assert_eq!(offset.id(), "Z");
    }
}
