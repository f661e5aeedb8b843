use crate::{
  Error, Sink,
  calendar::{
    CalendarDate, EpochMillis, LocalDateTime, OffsetDateTime, Temporal, UtcOffset, WallTime,
    write_epoch_millis,
  },
  sink::{ArraySink, FnSink},
};
use alloc::{string::String, vec::Vec};

struct YieldingSink(String);

impl Sink for YieldingSink {
  async fn push(&mut self, ch: char) -> crate::Result<()> {
    tokio::task::yield_now().await;
    self.0.push(ch);
    Ok(())
  }
}

fn longest() -> OffsetDateTime {
  OffsetDateTime::new(
    LocalDateTime::new(
      CalendarDate::from_ymd(2022, 4, 7).unwrap(),
      WallTime::from_hms_ns(18, 32, 47, 544_600_001).unwrap(),
    ),
    UtcOffset::from_hm(-10, 30).unwrap(),
  )
}

#[test]
fn array_sink_holds_the_longest_output() {
  let mut sink = ArraySink::<{ Temporal::MAX_LEN }>::new();
  crate::misc::drive_ready(longest().write_to(&mut sink)).unwrap();
  assert_eq!(sink.as_str(), "2022-04-07T18:32:47.544600001-10:30");
  assert_eq!(sink.len(), Temporal::MAX_LEN);
  sink.clear();
  assert!(sink.is_empty());
}

#[test]
fn array_sink_keeps_accepted_prefix() {
  let mut sink = ArraySink::<5>::new();
  let rslt = crate::misc::drive_ready(write_epoch_millis(&mut sink, 0));
  assert!(matches!(rslt, Err(Error::SinkCapacityExceeded { capacity: 5 })));
  assert_eq!(sink.as_str(), "1970-");
}

#[test]
fn fn_sink_errors_stop_the_output() {
  let mut received = String::new();
  let mut sink = FnSink(|ch: char| {
    if ch == 'T' {
      return Err(Error::Fmt(core::fmt::Error));
    }
    received.push(ch);
    Ok(())
  });
  let rslt = crate::misc::drive_ready(EpochMillis(0).write_to(&mut sink));
  assert!(matches!(rslt, Err(Error::Fmt(_))));
  drop(sink);
  assert_eq!(received, "1970-01-01");
}

#[test]
fn unit_discards_everything() {
  crate::misc::drive_ready(longest().write_to(&mut ())).unwrap();
}

#[test]
fn utf8_bytes() {
  let mut bytes = Vec::new();
  crate::misc::drive_ready(EpochMillis(-1).write_to(&mut bytes)).unwrap();
  assert_eq!(bytes, b"1969-12-31T23:59:59.999Z");
}

#[tokio::test]
async fn suspending_sinks_produce_the_same_output() {
  let mut direct = String::new();
  longest().write_to(&mut direct).await.unwrap();
  let mut yielding = YieldingSink(String::new());
  longest().write_to(&mut yielding).await.unwrap();
  assert_eq!(direct, yielding.0);
}

#[tokio::test]
async fn suspending_sinks_cannot_be_driven_synchronously() {
  let mut yielding = YieldingSink(String::new());
  let rslt = crate::misc::drive_ready(longest().write_to(&mut yielding));
  assert!(matches!(rslt, Err(Error::SinkSuspended)));
  assert_eq!(yielding.0, "");
}

#[cfg(feature = "std")]
#[test]
fn io_sink() {
  let mut sink = crate::sink::IoSink::new(Vec::new());
  crate::misc::drive_ready(EpochMillis(1_649_443_142_456).write_to(&mut sink)).unwrap();
  assert_eq!(sink.into_inner(), b"2022-04-08T18:39:02.456Z");
}

#[cfg(feature = "tokio")]
#[tokio::test]
async fn tokio_sink() {
  let mut sink = crate::sink::TokioSink::new(Vec::new());
  longest().write_to(&mut sink).await.unwrap();
  sink.flush().await.unwrap();
  assert_eq!(sink.into_inner(), b"2022-04-07T18:32:47.544600001-10:30");
}
