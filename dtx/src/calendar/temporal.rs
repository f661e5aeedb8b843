use crate::{
  Sink,
  calendar::{
    CalendarDate, CalendarFields, EpochMillis, EpochSeconds, LocalDateTime, MonthDay,
    OffsetDateTime, OffsetTime, WallTime, Year, YearMonth, ZonedDateTime,
  },
};

/// All the shapes that can be written as RFC 3339 text.
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Temporal {
  /// Date and time with millisecond precision plus zone and daylight offsets.
  CalendarFields(CalendarFields),
  /// `YYYY-MM-DD`
  Date(CalendarDate),
  /// Milliseconds since the UNIX epoch, written in UTC.
  EpochMillis(EpochMillis),
  /// Seconds and nanoseconds since the UNIX epoch, written in UTC.
  EpochSeconds(EpochSeconds),
  /// `YYYY-MM-DDTHH:MM:SS[.fraction]`
  LocalDateTime(LocalDateTime),
  /// `--MM-DD`
  MonthDay(MonthDay),
  /// `YYYY-MM-DDTHH:MM:SS[.fraction](Z|±HH:MM)`
  OffsetDateTime(OffsetDateTime),
  /// `HH:MM:SS[.fraction](Z|±HH:MM)`
  OffsetTime(OffsetTime),
  /// `HH:MM:SS[.fraction]`
  Time(WallTime),
  /// `YYYY`
  Year(Year),
  /// `YYYY-MM`
  YearMonth(YearMonth),
  /// `YYYY-MM-DDTHH:MM:SS[.fraction](Z|±HH:MM)` with the resolved offset of a region.
  ZonedDateTime(ZonedDateTime),
}

impl Temporal {
  /// Maximum number of characters any variant can produce.
  ///
  /// `YYYY-MM-DDTHH:MM:SS.fffffffff±HH:MM`
  pub const MAX_LEN: usize = 35;

  /// Writes the RFC 3339 representation of the inner value.
  #[inline]
  pub async fn write_to<S>(self, sink: &mut S) -> crate::Result<()>
  where
    S: Sink,
  {
    match self {
      Self::CalendarFields(elem) => elem.write_to(sink).await,
      Self::Date(elem) => elem.write_to(sink).await,
      Self::EpochMillis(elem) => elem.write_to(sink).await,
      Self::EpochSeconds(elem) => elem.write_to(sink).await,
      Self::LocalDateTime(elem) => elem.write_to(sink).await,
      Self::MonthDay(elem) => elem.write_to(sink).await,
      Self::OffsetDateTime(elem) => elem.write_to(sink).await,
      Self::OffsetTime(elem) => elem.write_to(sink).await,
      Self::Time(elem) => elem.write_to(sink).await,
      Self::Year(elem) => elem.write_to(sink).await,
      Self::YearMonth(elem) => elem.write_to(sink).await,
      Self::ZonedDateTime(elem) => elem.write_to(sink).await,
    }
  }
}

_display_through_sink!(Temporal);

macro_rules! from_impls {
  ($($ty:ident),+ $(,)?) => {
    $(
      impl From<$ty> for Temporal {
        #[inline]
        fn from(from: $ty) -> Self {
          Self::$ty(from)
        }
      }
    )+
  };
}

from_impls!(
  CalendarFields,
  EpochMillis,
  EpochSeconds,
  LocalDateTime,
  MonthDay,
  OffsetDateTime,
  OffsetTime,
  Year,
  YearMonth,
  ZonedDateTime
);

impl From<CalendarDate> for Temporal {
  #[inline]
  fn from(from: CalendarDate) -> Self {
    Self::Date(from)
  }
}

impl From<WallTime> for Temporal {
  #[inline]
  fn from(from: WallTime) -> Self {
    Self::Time(from)
  }
}
