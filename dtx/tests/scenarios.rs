//! Writes the same values through different sinks and compares the results with well-known
//! RFC 3339 strings.

use dtx::{
  calendar::{
    CalendarDate, CalendarFields, EpochMillis, EpochSeconds, LocalDateTime, MonthDay,
    OffsetDateTime, OffsetTime, Temporal, UtcOffset, WallTime, YearMonth,
  },
  misc::drive_ready,
  sink::{ArraySink, IoSink},
};

fn assert_all_sinks(temporal: Temporal, expected: &str) {
  let mut string = String::new();
  drive_ready(temporal.write_to(&mut string)).unwrap();
  assert_eq!(string, expected);
  let mut array = ArraySink::<{ Temporal::MAX_LEN }>::new();
  drive_ready(temporal.write_to(&mut array)).unwrap();
  assert_eq!(array.as_str(), expected);
  let mut io = IoSink::new(Vec::new());
  drive_ready(temporal.write_to(&mut io)).unwrap();
  assert_eq!(io.into_inner(), expected.as_bytes());
  assert_eq!(temporal.to_string(), expected);
}

#[test]
fn epoch_millis_in_utc() {
  assert_all_sinks(EpochMillis(1_649_443_142_456).into(), "2022-04-08T18:39:02.456Z");
  assert_all_sinks(EpochMillis(-1).into(), "1969-12-31T23:59:59.999Z");
}

#[test]
fn epoch_seconds_in_utc() {
  let instant = EpochSeconds::new(1_649_320_367, 120_000_000);
  assert_all_sinks(instant.into(), "2022-04-07T08:32:47.120Z");
}

#[test]
fn offset_date_time_with_microseconds() {
  let date_time = OffsetDateTime::new(
    LocalDateTime::new(
      CalendarDate::from_ymd(2022, 4, 7).unwrap(),
      WallTime::from_hms_us(18, 32, 47, 544_600).unwrap(),
    ),
    UtcOffset::from_hm(10, 0).unwrap(),
  );
  assert_all_sinks(date_time.into(), "2022-04-07T18:32:47.544600+10:00");
}

#[test]
fn calendar_fields_in_utc() {
  let fields = CalendarFields::new(
    CalendarDate::from_ymd(1999, 6, 1).unwrap(),
    WallTime::from_hms_ms(9, 15, 10, 456).unwrap(),
    0,
  );
  assert_all_sinks(fields.into(), "1999-06-01T09:15:10.456Z");
}

#[test]
fn partial_dates() {
  assert_all_sinks(YearMonth::new(2022, 4).unwrap().into(), "2022-04");
  assert_all_sinks(MonthDay::new(4, 8).unwrap().into(), "--04-08");
}

#[test]
fn offset_time_with_nanoseconds() {
  let time = OffsetTime::new(
    WallTime::from_hms_ns(8, 27, 55, 544_233_100).unwrap(),
    UtcOffset::from_hm(-5, 0).unwrap(),
  );
  assert_all_sinks(time.into(), "08:27:55.544233100-05:00");
}
