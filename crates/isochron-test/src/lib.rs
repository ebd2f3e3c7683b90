//! Isochron integration test support.
//!
//! Test doubles that exercise the temporal protocol from outside the crate:
//! caller-defined fields and a temporal from a foreign calendar system.

use isochron_temporal::error::{TemporalError, TemporalResult};
use isochron_temporal::temporal::{
    ChronoField, Chronology, Temporal, TemporalAccessor, TemporalField, ValueRange,
};

/// Quarter of the year, derived from the month-of-year field.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuarterOfYear;

impl TemporalField for QuarterOfYear {
    fn name(&self) -> &str {
        "QuarterOfYear"
    }

    fn range(&self) -> ValueRange {
        ValueRange::of(1, 4)
    }

    fn is_supported_by(&self, temporal: &dyn TemporalAccessor) -> bool {
        temporal.is_supported(&ChronoField::MonthOfYear)
    }

    fn range_refined_by(&self, temporal: &dyn TemporalAccessor) -> TemporalResult<ValueRange> {
        if self.is_supported_by(temporal) {
            Ok(self.range())
        } else {
            Err(TemporalError::unsupported(self.name()))
        }
    }

    fn get_from(&self, temporal: &dyn TemporalAccessor) -> TemporalResult<i64> {
        let month = temporal.get_long(&ChronoField::MonthOfYear)?;
        Ok((month - 1) / 3 + 1)
    }
}

/// A field whose values do not fit in 32 bits: the source value scaled by
/// `2^32`.
#[derive(Debug, Clone, Copy)]
pub struct ScaledField(pub ChronoField);

impl TemporalField for ScaledField {
    fn name(&self) -> &str {
        "Scaled"
    }

    fn range(&self) -> ValueRange {
        ValueRange::of(i64::MIN, i64::MAX)
    }

    fn is_supported_by(&self, temporal: &dyn TemporalAccessor) -> bool {
        temporal.is_supported(&self.0)
    }

    fn range_refined_by(&self, _temporal: &dyn TemporalAccessor) -> TemporalResult<ValueRange> {
        Ok(self.range())
    }

    fn get_from(&self, temporal: &dyn TemporalAccessor) -> TemporalResult<i64> {
        Ok(temporal.get_long(&self.0)? << 32)
    }
}

/// A field that claims the range `1..=4` but reports the underlying field's
/// value unchanged, so values above 4 fall outside its own range.
#[derive(Debug, Clone, Copy)]
pub struct BoundedField(pub ChronoField);

impl TemporalField for BoundedField {
    fn name(&self) -> &str {
        "Bounded"
    }

    fn range(&self) -> ValueRange {
        ValueRange::of(1, 4)
    }

    fn is_supported_by(&self, temporal: &dyn TemporalAccessor) -> bool {
        temporal.is_supported(&self.0)
    }

    fn range_refined_by(&self, temporal: &dyn TemporalAccessor) -> TemporalResult<ValueRange> {
        if self.is_supported_by(temporal) {
            Ok(self.range())
        } else {
            Err(TemporalError::unsupported(self.name()))
        }
    }

    fn get_from(&self, temporal: &dyn TemporalAccessor) -> TemporalResult<i64> {
        temporal.get_long(&self.0)
    }
}

/// A date in a calendar system other than ISO, with ISO-compatible months.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForeignDate {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

impl ForeignDate {
    pub const CHRONOLOGY: Chronology = Chronology::new("ThaiBuddhist");
}

impl TemporalAccessor for ForeignDate {
    fn is_supported(&self, field: &dyn TemporalField) -> bool {
        match field.as_chrono_field() {
            Some(chrono) => matches!(
                chrono,
                ChronoField::Year | ChronoField::MonthOfYear | ChronoField::DayOfMonth
            ),
            None => field.is_supported_by(self),
        }
    }

    fn get_long(&self, field: &dyn TemporalField) -> TemporalResult<i64> {
        match field.as_chrono_field() {
            Some(ChronoField::Year) => Ok(i64::from(self.year)),
            Some(ChronoField::MonthOfYear) => Ok(i64::from(self.month)),
            Some(ChronoField::DayOfMonth) => Ok(i64::from(self.day)),
            Some(other) => Err(TemporalError::unsupported(other)),
            None => field.get_from(self),
        }
    }

    fn chronology(&self) -> Option<Chronology> {
        Some(Self::CHRONOLOGY)
    }
}

impl Temporal for ForeignDate {
    fn with_field(&self, field: &dyn TemporalField, value: i64) -> TemporalResult<Self> {
        match field.as_chrono_field() {
            Some(ChronoField::MonthOfYear) => {
                let month = ChronoField::MonthOfYear.range().check_valid_value(value, field)?;
                let month = u8::try_from(month)
                    .map_err(|e| TemporalError::Overflow(format!("month {month}: {e}")))?;
                Ok(Self { month, ..*self })
            }
            _ => Err(TemporalError::unsupported(field.name())),
        }
    }
}
