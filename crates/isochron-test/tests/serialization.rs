//! Wire-level behaviour of the tagged codec across the value family.

use std::io::Cursor;

use chrono::{DateTime, FixedOffset, NaiveDate};
use isochron_temporal::Month;
use isochron_temporal::ser::{self, Ser, SerError, TypeTag, Value};
use isochron_temporal::value::{
    Duration, Instant, LocalDate, LocalDateTime, LocalTime, MonthDay, OffsetDateTime, OffsetTime,
    Period, Year, YearMonth, ZoneId, ZoneOffset, ZoneRegion, ZonedDateTime,
};

fn chrono_values() -> Vec<Value> {
    let timestamp = DateTime::parse_from_rfc3339("2026-03-29T01:59:59.123456789+05:30")
        .expect("valid timestamp");
    let offset_date_time = OffsetDateTime::try_from(timestamp).expect("offset in range");
    let offset = offset_date_time.offset();
    let date_time = offset_date_time.date_time();
    let kolkata = ZoneRegion::of("Asia/Kolkata").expect("valid region");

    vec![
        Value::Duration(Duration::try_from(chrono::TimeDelta::milliseconds(-1)).expect("fits")),
        Value::Instant(Instant::from(timestamp.to_utc())),
        Value::LocalDate(date_time.date()),
        Value::LocalTime(date_time.time()),
        Value::LocalDateTime(date_time),
        Value::ZonedDateTime(
            ZonedDateTime::of_lenient(date_time, offset, kolkata.clone().into()).expect("lenient"),
        ),
        Value::ZoneRegion(kolkata),
        Value::ZoneOffset(offset),
        Value::OffsetTime(OffsetTime::of(date_time.time(), offset)),
        Value::OffsetDateTime(offset_date_time),
        Value::Year(Year::of(date_time.date().year()).expect("valid")),
        Value::YearMonth(YearMonth::of(2026, date_time.date().month()).expect("valid")),
        Value::MonthDay(MonthDay::of(Month::December, 31).expect("valid")),
        Value::Period(Period::of(i32::MAX, i32::MIN, 0)),
    ]
}

#[test_log::test]
fn all_fourteen_types_round_trip() {
    let values = chrono_values();
    let mut seen: Vec<TypeTag> = values.iter().map(Value::tag).collect();
    seen.sort();
    seen.dedup();
    assert_eq!(seen, TypeTag::ALL);

    for value in values {
        let bytes = ser::to_bytes(value.clone()).expect("encodes");
        let decoded = ser::from_bytes(&bytes).expect("decodes");
        assert_eq!(decoded, value, "round trip of {}", value.tag());
    }
}

#[test]
fn ser_transactions_are_independent() {
    let mut sink = Vec::new();
    Ser::new(Year::of(1).expect("valid")).write(&mut sink).expect("encodes");
    Ser::new(ZoneOffset::UTC).write(&mut sink).expect("encodes");
    assert_eq!(sink, [11, 0, 0, 0, 1, 8, 0]);

    let mut source = Cursor::new(sink);
    let first = Ser::read(&mut source).expect("decodes");
    let second = Ser::read(&mut source).expect("decodes");
    assert_eq!(first.tag(), TypeTag::Year);
    assert_eq!(second.into_payload(), Value::ZoneOffset(ZoneOffset::UTC));
    assert!(matches!(Ser::read(&mut source), Err(SerError::Io(_))));
}

#[test]
fn extreme_values_round_trip() {
    let values: Vec<Value> = vec![
        Duration::of_seconds(i64::MIN, 0).expect("fits").into(),
        Duration::of_seconds(i64::MAX, 999_999_999).expect("fits").into(),
        Instant::of_epoch_second(Instant::MIN_SECOND, 0).expect("in range").into(),
        Instant::of_epoch_second(Instant::MAX_SECOND, 999_999_999).expect("in range").into(),
        LocalDate::from_naive(NaiveDate::MIN).into(),
        LocalDate::from_naive(NaiveDate::MAX).into(),
        Year::of(999_999_999).expect("valid").into(),
        ZoneOffset::of_total_seconds(-64_799).expect("valid").into(),
    ];
    for value in values {
        let bytes = ser::to_bytes(value.clone()).expect("encodes");
        assert_eq!(ser::from_bytes(&bytes).expect("decodes"), value);
    }
}

#[test]
fn fixed_zone_must_agree_with_offset() {
    let date_time = LocalDateTime::from(
        NaiveDate::from_ymd_opt(2026, 6, 1)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .expect("valid"),
    );
    let offset = ZoneOffset::of_hours_minutes(1, 0).expect("valid");
    let zoned =
        ZonedDateTime::of_lenient(date_time, offset, ZoneId::Offset(offset)).expect("valid");
    let mut bytes = ser::to_bytes(zoned).expect("encodes");

    // the trailing zone offset is a single quarter-hour byte
    let last = bytes.len() - 1;
    bytes[last] = 0;
    assert!(matches!(
        ser::from_bytes(&bytes),
        Err(SerError::InvalidValue(_))
    ));
}

#[test]
fn corrupt_stream_is_distinct_from_bad_payload() {
    let mut source = Cursor::new([0xEE_u8, 3, 0, 0, 0x07, 0xEA, 10, 16]);
    assert!(matches!(
        ser::read_value(&mut source),
        Err(SerError::CorruptStream { tag: 0xEE })
    ));
    assert_eq!(source.position(), 1);

    // the rest of the buffer is still a well-formed record
    let date = ser::read_value(&mut source).expect("decodes");
    assert_eq!(
        LocalDate::try_from(date).expect("a date"),
        LocalDate::of(2026, Month::October, 16).expect("valid")
    );
}

#[test]
fn offset_date_time_matches_chrono_instant() {
    let timestamp: DateTime<FixedOffset> =
        DateTime::parse_from_rfc3339("1999-12-31T23:00:00-01:00").expect("valid timestamp");
    let value = OffsetDateTime::try_from(timestamp).expect("offset in range");
    let bytes = ser::to_bytes(value).expect("encodes");
    let decoded =
        OffsetDateTime::try_from(ser::from_bytes(&bytes).expect("decodes")).expect("type");
    assert_eq!(decoded.to_epoch_second(), timestamp.timestamp());
    assert_eq!(decoded.date_time().time(), LocalTime::of(23, 0, 0, 0).expect("valid"));
}
