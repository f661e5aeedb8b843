use crate::calendar::{
  CalendarDate, EpochSeconds, LocalDateTime, NANOSECONDS_PER_SECOND, OffsetDateTime, UtcOffset,
  WallTime,
};
use ::chrono::{
  DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Utc,
};

impl From<NaiveDate> for CalendarDate {
  #[inline]
  fn from(from: NaiveDate) -> Self {
    Self::from_parts(from.year(), narrow(from.month()), narrow(from.day()))
  }
}

impl From<NaiveTime> for WallTime {
  /// Leap seconds are represented by `chrono` as nanoseconds greater than `999_999_999`,
  /// which are folded into the last nanosecond of the second.
  #[inline]
  fn from(from: NaiveTime) -> Self {
    Self::from_parts(
      narrow(from.hour()),
      narrow(from.minute()),
      narrow(from.second()),
      from.nanosecond().min(NANOSECONDS_PER_SECOND - 1),
    )
  }
}

impl From<NaiveDateTime> for LocalDateTime {
  #[inline]
  fn from(from: NaiveDateTime) -> Self {
    Self::new(from.date().into(), from.time().into())
  }
}

impl From<FixedOffset> for UtcOffset {
  #[inline]
  fn from(from: FixedOffset) -> Self {
    // Both types accept offsets of less than a day
    Self::from_parts(from.local_minus_utc())
  }
}

impl From<DateTime<FixedOffset>> for OffsetDateTime {
  #[inline]
  fn from(from: DateTime<FixedOffset>) -> Self {
    Self::new(from.naive_local().into(), (*from.offset()).into())
  }
}

impl From<DateTime<Utc>> for EpochSeconds {
  #[inline]
  fn from(from: DateTime<Utc>) -> Self {
    Self::new(from.timestamp(), from.timestamp_subsec_nanos())
  }
}

fn narrow(value: u32) -> u8 {
  value.try_into().unwrap_or(u8::MAX)
}
