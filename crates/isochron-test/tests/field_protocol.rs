//! The temporal field protocol seen from outside the crate: caller-defined
//! fields, queries, conversions and adjustment of foreign values.

use chrono::NaiveDate;
use isochron_temporal::temporal::{
    ChronoField, ChronoUnit, Chronology, ChronologyQuery, Precision, TemporalAccessor,
    TemporalQuery, ValueRange,
};
use isochron_temporal::value::{LocalDate, LocalDateTime, LocalTime, YearMonth};
use isochron_temporal::{DayOfWeek, Month, TemporalError};
use isochron_test::{BoundedField, ForeignDate, QuarterOfYear, ScaledField};

#[test]
fn caller_defined_fields_are_delegated() {
    assert!(Month::May.is_supported(&QuarterOfYear));
    assert_eq!(Month::May.get(&QuarterOfYear).expect("derived from month"), 2);
    assert_eq!(
        Month::May.range(&QuarterOfYear).expect("derived from month"),
        ValueRange::of(1, 4)
    );

    assert!(!DayOfWeek::Friday.is_supported(&QuarterOfYear));
    assert!(matches!(
        DayOfWeek::Friday.get(&QuarterOfYear),
        Err(TemporalError::UnsupportedField(_))
    ));
}

#[test]
fn wide_delegated_values_overflow_get_but_not_get_long() {
    let field = ScaledField(ChronoField::DayOfWeek);
    assert_eq!(
        DayOfWeek::Friday.get_long(&field).expect("fits in 64 bits"),
        5_i64 << 32
    );
    assert!(matches!(
        DayOfWeek::Friday.get(&field),
        Err(TemporalError::Overflow(_))
    ));

    let field = ScaledField(ChronoField::MonthOfYear);
    assert!(matches!(Month::June.get(&field), Err(TemporalError::Overflow(_))));
}

#[test]
fn delegated_values_are_checked_against_the_field_range() {
    let field = BoundedField(ChronoField::MonthOfYear);
    assert_eq!(Month::March.get(&field).expect("within 1..=4"), 3);
    assert_eq!(Month::May.get_long(&field).expect("unchecked"), 5);
    assert!(matches!(
        Month::May.get(&field),
        Err(TemporalError::InvalidRange { value: 5, .. })
    ));

    let year_month = YearMonth::of(2024, Month::May).expect("valid");
    assert!(matches!(
        year_month.get(&field),
        Err(TemporalError::InvalidRange { value: 5, .. })
    ));

    let field = BoundedField(ChronoField::DayOfWeek);
    assert_eq!(DayOfWeek::Thursday.get(&field).expect("within 1..=4"), 4);
    assert!(matches!(
        DayOfWeek::Saturday.get(&field),
        Err(TemporalError::InvalidRange { value: 6, .. })
    ));
}

#[test]
fn other_built_in_fields_are_unsupported() {
    for field in [ChronoField::DayOfMonth, ChronoField::HourOfDay, ChronoField::MonthOfYear] {
        assert!(!DayOfWeek::Monday.is_supported(&field));
        assert!(matches!(
            DayOfWeek::Monday.range(&field),
            Err(TemporalError::UnsupportedField(_))
        ));
        assert!(matches!(
            DayOfWeek::Monday.get_long(&field),
            Err(TemporalError::UnsupportedField(_))
        ));
    }
    assert!(matches!(
        Month::March.get(&ChronoField::DayOfWeek),
        Err(TemporalError::UnsupportedField(_))
    ));
}

struct IsWeekend;

impl TemporalQuery for IsWeekend {
    type Output = Option<bool>;

    fn query_from(&self, temporal: &dyn TemporalAccessor) -> Self::Output {
        let day = temporal.get(&ChronoField::DayOfWeek).ok()?;
        Some(day >= 6)
    }
}

#[test]
fn queries() {
    assert_eq!(DayOfWeek::Monday.query(&Precision), Some(ChronoUnit::Days));
    assert_eq!(Month::March.query(&Precision), Some(ChronoUnit::Months));
    assert_eq!(DayOfWeek::Monday.query(&ChronologyQuery), None);
    assert_eq!(Month::July.query(&ChronologyQuery), Some(Chronology::ISO));

    assert_eq!(DayOfWeek::Sunday.query(&IsWeekend), Some(true));
    assert_eq!(DayOfWeek::Tuesday.query(&IsWeekend), Some(false));
    assert_eq!(Month::July.query(&IsWeekend), None);

    let date = LocalDate::of(2026, Month::October, 17).expect("valid");
    assert_eq!(date.query(&IsWeekend), Some(true));
    assert_eq!(date.query(&Precision), Some(ChronoUnit::Days));
}

#[test]
fn from_temporal_converts_or_names_the_type() {
    let date = NaiveDate::from_ymd_opt(2000, 1, 1).expect("valid date");
    assert_eq!(DayOfWeek::from_temporal(&date).expect("has weekday"), DayOfWeek::Saturday);
    assert_eq!(Month::from_temporal(&date).expect("has month"), Month::January);
    assert_eq!(DayOfWeek::from_temporal(&DayOfWeek::Friday).expect("identity"), DayOfWeek::Friday);
    assert_eq!(Month::from_temporal(&Month::June).expect("identity"), Month::June);

    let time = LocalTime::of(12, 0, 0, 0).expect("valid");
    let err = Month::from_temporal(&time).expect_err("times have no month");
    let TemporalError::Conversion {
        target, type_name, ..
    } = &err
    else {
        panic!("expected a conversion error, got {err:?}");
    };
    assert_eq!(*target, "Month");
    assert!(type_name.ends_with("LocalTime"));
    assert!(err.to_string().contains("LocalTime"));
}

#[test]
fn adjusting_chrono_and_crate_values() {
    let naive = NaiveDate::from_ymd_opt(2026, 1, 31).expect("valid date");
    assert_eq!(
        Month::April.adjust_into(&naive).expect("ISO date"),
        NaiveDate::from_ymd_opt(2026, 4, 30).expect("valid date")
    );
    assert_eq!(
        DayOfWeek::Wednesday.adjust_into(&naive).expect("has weekday"),
        NaiveDate::from_ymd_opt(2026, 1, 28).expect("valid date")
    );

    let date_time = LocalDateTime::from(
        NaiveDate::from_ymd_opt(2024, 12, 31)
            .and_then(|d| d.and_hms_opt(18, 0, 0))
            .expect("valid date-time"),
    );
    let adjusted = Month::February.adjust_into(&date_time).expect("ISO date-time");
    assert_eq!(adjusted.date(), LocalDate::of(2024, Month::February, 29).expect("valid"));
    assert_eq!(adjusted.time(), date_time.time());

    let year_month = YearMonth::of(2023, Month::May).expect("valid");
    assert_eq!(
        Month::November.adjust_into(&year_month).expect("ISO year-month").month(),
        Month::November
    );
}

#[test_log::test]
fn month_rejects_foreign_calendars() {
    let foreign = ForeignDate {
        year: 2569,
        month: 3,
        day: 10,
    };
    let err = Month::January.adjust_into(&foreign).expect_err("not ISO");
    assert!(matches!(err, TemporalError::ChronologyMismatch(c) if c == ForeignDate::CHRONOLOGY));
    assert_eq!(foreign.month, 3);

    assert!(matches!(
        DayOfWeek::Monday.adjust_into(&foreign),
        Err(TemporalError::UnsupportedField(_))
    ));
    assert_eq!(Month::from_temporal(&foreign).expect("has month"), Month::March);
    assert_eq!(Month::March.get(&QuarterOfYear).expect("derived"), 1);
    assert_eq!(foreign.get(&QuarterOfYear).expect("derived"), 1);
}
