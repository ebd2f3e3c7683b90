use std::io::Cursor;

use super::*;
use crate::calendar::Month;
use crate::value::ZoneId;

fn date_time() -> LocalDateTime {
    LocalDateTime::of(
        LocalDate::of(2026, Month::October, 16).expect("valid date"),
        LocalTime::of(9, 30, 15, 250_000_000).expect("valid time"),
    )
}

fn samples() -> Vec<Value> {
    let offset = ZoneOffset::of_hours_minutes(2, 0).expect("valid offset");
    let paris = ZoneRegion::of("Europe/Paris").expect("valid region");
    vec![
        Duration::of_seconds(-5, 250).expect("valid").into(),
        Instant::of_epoch_second(1_700_000_000, 999_999_999).expect("valid").into(),
        LocalDate::of(-44, Month::March, 15).expect("valid").into(),
        LocalTime::of(23, 59, 59, 1).expect("valid").into(),
        date_time().into(),
        ZonedDateTime::of_lenient(date_time(), offset, paris.clone().into())
            .expect("valid")
            .into(),
        paris.into(),
        offset.into(),
        OffsetTime::of(LocalTime::MIDNIGHT, ZoneOffset::UTC).into(),
        OffsetDateTime::of(date_time(), offset).into(),
        Year::of(-999_999_999).expect("valid").into(),
        YearMonth::of(2024, Month::February).expect("valid").into(),
        MonthDay::of(Month::February, 29).expect("valid").into(),
        Period::of(1, -2, 3).into(),
    ]
}

#[test]
fn every_type_round_trips() {
    let samples = samples();
    let tags: Vec<_> = samples.iter().map(Value::tag).collect();
    assert_eq!(tags, TypeTag::ALL);

    for value in samples {
        let bytes = to_bytes(value.clone()).expect("writes");
        assert_eq!(bytes.first(), Some(&value.tag().as_u8()));
        assert_eq!(from_bytes(&bytes).expect("reads"), value);
    }
}

#[test_log::test]
fn records_stream_back_to_back() {
    let mut sink = Vec::new();
    for value in samples() {
        write_value(value, &mut sink).expect("writes");
    }
    let mut source = Cursor::new(sink);
    for expected in samples() {
        assert_eq!(read_value(&mut source).expect("reads"), expected);
    }
}

#[test]
fn local_date_layout() {
    let date = LocalDate::of(2026, Month::October, 16).expect("valid");
    assert_eq!(to_bytes(date).expect("writes"), [3, 0, 0, 0x07, 0xEA, 10, 16]);
}

#[test]
fn local_time_compact_forms() {
    let cases: [(LocalTime, &[u8]); 5] = [
        (LocalTime::MIDNIGHT, &[4, 0xFF]),
        (LocalTime::of(10, 0, 0, 0).expect("valid"), &[4, !10]),
        (LocalTime::of(10, 30, 0, 0).expect("valid"), &[4, 10, !30]),
        (LocalTime::of(10, 30, 15, 0).expect("valid"), &[4, 10, 30, !15]),
        (
            LocalTime::of(10, 30, 15, 5).expect("valid"),
            &[4, 10, 30, 15, 0, 0, 0, 5],
        ),
    ];
    for (time, expected) in cases {
        let bytes = to_bytes(time).expect("writes");
        assert_eq!(bytes, expected, "encoding of {time}");
        assert_eq!(from_bytes(&bytes).expect("reads"), Value::LocalTime(time));
    }
}

#[test]
fn zone_offset_uses_quarter_hours_when_possible() {
    let quarter = ZoneOffset::of_hours_minutes(5, 45).expect("valid");
    assert_eq!(to_bytes(quarter).expect("writes"), [8, 23]);
    let negative = ZoneOffset::of_hours_minutes(-18, 0).expect("valid");
    assert_eq!(to_bytes(negative).expect("writes"), [8, 0xB8]);
    let odd = ZoneOffset::of_total_seconds(3661).expect("valid");
    assert_eq!(to_bytes(odd).expect("writes"), [8, 127, 0, 0, 0x0E, 0x4D]);
    assert_eq!(
        from_bytes(&[8, 127, 0, 0, 0x0E, 0x4D]).expect("reads"),
        Value::ZoneOffset(odd)
    );
}

#[test_log::test]
fn unknown_tag_consumes_one_byte() {
    for tag in [0_u8, 15, 200] {
        let mut source = Cursor::new(vec![tag, 1, 2, 3]);
        let err = Ser::read(&mut source).expect_err("unregistered tag");
        assert!(matches!(err, SerError::CorruptStream { tag: t } if t == tag));
        assert_eq!(source.position(), 1);
    }
}

#[test]
fn zoned_date_time_requires_zone_tag() {
    let offset = ZoneOffset::UTC;
    let mut bytes = to_bytes(OffsetDateTime::of(date_time(), offset)).expect("writes");
    bytes[0] = TypeTag::ZonedDateTime.as_u8();
    bytes.push(TypeTag::Year.as_u8());
    bytes.extend_from_slice(&2026_i32.to_be_bytes());

    let err = from_bytes(&bytes).expect_err("zone must be tagged as a zone");
    assert!(matches!(
        err,
        SerError::UnexpectedType {
            found: TypeTag::Year,
            ..
        }
    ));
}

#[test]
fn zoned_date_time_with_fixed_zone() {
    let offset = ZoneOffset::of_hours_minutes(-3, -30).expect("valid");
    let zoned =
        ZonedDateTime::of_lenient(date_time(), offset, ZoneId::Offset(offset)).expect("valid");
    let bytes = to_bytes(zoned.clone()).expect("writes");
    assert_eq!(bytes.get(bytes.len() - 2), Some(&TypeTag::ZoneOffset.as_u8()));
    assert_eq!(from_bytes(&bytes).expect("reads"), Value::ZonedDateTime(zoned));
}

#[test]
fn invalid_payloads_are_rejected() {
    assert!(matches!(
        from_bytes(&[3, 0, 0, 0x07, 0xEA, 13, 1]),
        Err(SerError::InvalidValue(_))
    ));
    assert!(matches!(
        from_bytes(&[13, 2, 30]),
        Err(SerError::InvalidValue(_))
    ));
    assert!(matches!(
        from_bytes(&[7, 0, 2, 0xFF, 0xFE]),
        Err(SerError::InvalidUtf8(_))
    ));
    assert!(matches!(
        from_bytes(&[7, 0, 3, b'1', b'a', b'b']),
        Err(SerError::InvalidValue(_))
    ));
}

#[test]
fn short_and_long_input() {
    assert!(matches!(from_bytes(&[11, 0, 0]), Err(SerError::Io(_))));
    assert!(matches!(from_bytes(&[]), Err(SerError::Io(_))));

    let mut bytes = to_bytes(Period::ZERO).expect("writes");
    bytes.push(0);
    assert!(matches!(
        from_bytes(&bytes),
        Err(SerError::TrailingBytes { count: 1 })
    ));
}

#[test]
fn typed_extraction() {
    let bytes = to_bytes(Year::of(2024).expect("valid")).expect("writes");
    let value = from_bytes(&bytes).expect("reads");
    assert_eq!(Year::try_from(value.clone()).expect("a year").value(), 2024);
    assert!(matches!(
        Period::try_from(value),
        Err(SerError::UnexpectedType {
            expected: "Period",
            found: TypeTag::Year,
        })
    ));
}

#[test]
fn ser_exposes_tag_and_payload() {
    let ser = Ser::new(Period::of(0, 0, 7));
    assert_eq!(ser.tag(), TypeTag::Period);
    assert_eq!(ser.payload(), &Value::Period(Period::of(0, 0, 7)));
}

#[test]
#[should_panic(expected = "does not match payload")]
fn mismatched_tag_panics_on_write() {
    let ser = Ser::from_parts(TypeTag::Year, Value::Period(Period::ZERO));
    ser.write(&mut Vec::new()).ok();
}
