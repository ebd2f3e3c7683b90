//! Week layouts: which day starts the week and how many days the first week needs.

use isochron_core::config::WeekConfig;
use isochron_core::error::CoreError;

use super::DayOfWeek;
use crate::error::{TemporalError, TemporalResult};
use crate::temporal::ValueRange;

/// Definition of a week: its first day and the minimal number of days of a
/// year that must fall in the first week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WeekDefinition {
    first_day_of_week: DayOfWeek,
    minimal_days: u8,
}

impl WeekDefinition {
    /// ISO-8601 weeks: Monday start, first week has at least four days.
    pub const ISO: Self = Self {
        first_day_of_week: DayOfWeek::Monday,
        minimal_days: 4,
    };

    /// Sunday start, first week is the one containing January 1st.
    pub const SUNDAY_START: Self = Self {
        first_day_of_week: DayOfWeek::Sunday,
        minimal_days: 1,
    };

    const MINIMAL_DAYS_RANGE: ValueRange = ValueRange::of(1, 7);

    /// ## Errors
    /// Returns `InvalidRange` if `minimal_days` is outside `1..=7`.
    pub fn new(first_day_of_week: DayOfWeek, minimal_days: u8) -> TemporalResult<Self> {
        if !Self::MINIMAL_DAYS_RANGE.is_valid_value(i64::from(minimal_days)) {
            return Err(TemporalError::InvalidRange {
                field: "MinimalDaysInFirstWeek".to_string(),
                range: Self::MINIMAL_DAYS_RANGE,
                value: i64::from(minimal_days),
            });
        }
        Ok(Self {
            first_day_of_week,
            minimal_days,
        })
    }

    /// Builds a definition from loaded configuration.
    ///
    /// ## Errors
    /// Returns `CoreError::InvalidConfiguration` for an unknown day name, or
    /// `InvalidRange` for an out-of-range minimal day count.
    pub fn from_config(config: &WeekConfig) -> TemporalResult<Self> {
        let first_day = DayOfWeek::parse(&config.first_day_of_week).ok_or_else(|| {
            CoreError::InvalidConfiguration(format!(
                "unknown first day of week '{}'",
                config.first_day_of_week
            ))
        })?;
        let definition = Self::new(first_day, config.minimal_days_in_first_week)?;
        tracing::debug!(
            first_day = %definition.first_day_of_week,
            minimal_days = definition.minimal_days,
            "Week definition configured"
        );
        Ok(definition)
    }

    #[must_use]
    pub const fn first_day_of_week(self) -> DayOfWeek {
        self.first_day_of_week
    }

    #[must_use]
    pub const fn minimal_days_in_first_week(self) -> u8 {
        self.minimal_days
    }

    #[must_use]
    pub const fn last_day_of_week(self) -> DayOfWeek {
        self.first_day_of_week.minus(1)
    }

    /// Position of `day` within this week, 1 for the first day through 7.
    #[must_use]
    #[expect(clippy::cast_possible_wrap, reason = "ordinal is below 7")]
    pub const fn day_of_week_value(self, day: DayOfWeek) -> u8 {
        day.minus(self.first_day_of_week.ordinal() as i64).value()
    }

    /// The seven days in this week's order.
    pub fn days(self) -> impl Iterator<Item = DayOfWeek> {
        (0..7).map(move |offset| self.first_day_of_week.plus(offset))
    }
}

impl Default for WeekDefinition {
    fn default() -> Self {
        Self::ISO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iso_week_numbers_match_iso_values() {
        for day in DayOfWeek::ALL {
            assert_eq!(WeekDefinition::ISO.day_of_week_value(day), day.value());
        }
        assert_eq!(WeekDefinition::ISO.last_day_of_week(), DayOfWeek::Sunday);
    }

    #[test]
    fn sunday_start_shifts_values() {
        let week = WeekDefinition::SUNDAY_START;
        assert_eq!(week.day_of_week_value(DayOfWeek::Sunday), 1);
        assert_eq!(week.day_of_week_value(DayOfWeek::Monday), 2);
        assert_eq!(week.day_of_week_value(DayOfWeek::Saturday), 7);
        assert_eq!(week.last_day_of_week(), DayOfWeek::Saturday);
    }

    #[test]
    fn days_iterates_in_week_order() {
        let days: Vec<_> = WeekDefinition::SUNDAY_START.days().collect();
        assert_eq!(days.len(), 7);
        assert_eq!(days.first(), Some(&DayOfWeek::Sunday));
        assert_eq!(days.last(), Some(&DayOfWeek::Saturday));
    }

    #[test]
    fn minimal_days_validated() {
        assert!(WeekDefinition::new(DayOfWeek::Monday, 0).is_err());
        assert!(WeekDefinition::new(DayOfWeek::Monday, 8).is_err());
        assert!(WeekDefinition::new(DayOfWeek::Monday, 7).is_ok());
    }

    #[test_log::test]
    fn from_config() {
        let config = WeekConfig {
            first_day_of_week: "saturday".to_string(),
            minimal_days_in_first_week: 1,
        };
        let week = WeekDefinition::from_config(&config).expect("valid config");
        assert_eq!(week.first_day_of_week(), DayOfWeek::Saturday);
        assert_eq!(week.minimal_days_in_first_week(), 1);

        let config = WeekConfig {
            first_day_of_week: "Caturday".to_string(),
            minimal_days_in_first_week: 1,
        };
        let err = WeekDefinition::from_config(&config).expect_err("unknown day");
        assert!(matches!(err, TemporalError::CoreError(_)));
        assert!(err.to_string().contains("Caturday"));
    }
}
