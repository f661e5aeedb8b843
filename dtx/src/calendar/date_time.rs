
use crate::{
  Sink,
  calendar::{CalendarDate, MILLISECONDS_PER_SECOND, UtcOffset, WallTime, write_offset},
};

/// Date and clock time without any relation to UTC.
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct LocalDateTime {
  date: CalendarDate,
  time: WallTime,
}

impl LocalDateTime {
  /// New instance from basic parameters
  #[inline]
  pub const fn new(date: CalendarDate, time: WallTime) -> Self {
    Self { date, time }
  }

  /// See [`CalendarDate`].
  #[inline]
  pub const fn date(self) -> CalendarDate {
    self.date
  }

  /// See [`WallTime`].
  #[inline]
  pub const fn time(self) -> WallTime {
    self.time
  }

  /// See [`write_local_date_time`].
  #[inline]
  pub async fn write_to<S>(self, sink: &mut S) -> crate::Result<()>
  where
    S: Sink,
  {
    write_local_date_time(sink, self.date, self.time).await
  }
}

_display_through_sink!(LocalDateTime);

/// Date and clock time at a fixed distance from UTC.
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct OffsetDateTime {
  date_time: LocalDateTime,
  offset: UtcOffset,
}

impl OffsetDateTime {
  /// New instance from basic parameters
  #[inline]
  pub const fn new(date_time: LocalDateTime, offset: UtcOffset) -> Self {
    Self { date_time, offset }
  }

  /// See [`LocalDateTime`].
  #[inline]
  pub const fn date_time(self) -> LocalDateTime {
    self.date_time
  }

  /// See [`UtcOffset`].
  #[inline]
  pub const fn offset(self) -> UtcOffset {
    self.offset
  }

  /// See [`write_offset_date_time`].
  #[inline]
  pub async fn write_to<S>(self, sink: &mut S) -> crate::Result<()>
  where
    S: Sink,
  {
    write_offset_date_time(sink, self.date_time, self.offset.seconds()).await
  }
}

_display_through_sink!(OffsetDateTime);

/// Clock time at a fixed distance from UTC.
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct OffsetTime {
  time: WallTime,
  offset: UtcOffset,
}

impl OffsetTime {
  /// New instance from basic parameters
  #[inline]
  pub const fn new(time: WallTime, offset: UtcOffset) -> Self {
    Self { time, offset }
  }

  /// See [`UtcOffset`].
  #[inline]
  pub const fn offset(self) -> UtcOffset {
    self.offset
  }

  /// See [`WallTime`].
  #[inline]
  pub const fn time(self) -> WallTime {
    self.time
  }

  /// See [`write_offset_time`].
  #[inline]
  pub async fn write_to<S>(self, sink: &mut S) -> crate::Result<()>
  where
    S: Sink,
  {
    write_offset_time(sink, self.time, self.offset.seconds()).await
  }
}

_display_through_sink!(OffsetTime);

/// Local date and clock time of a region whose offset was already resolved by the caller.
///
/// The written offset is the sum of the standard offset and the daylight saving adjustment
/// that was in effect at that moment. No time zone database is consulted.
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct ZonedDateTime {
  date_time: LocalDateTime,
  dst_seconds: i32,
  offset: UtcOffset,
}

impl ZonedDateTime {
  /// New instance with the standard offset of the region.
  #[inline]
  pub const fn new(date_time: LocalDateTime, offset: UtcOffset) -> Self {
    Self { date_time, dst_seconds: 0, offset }
  }

  /// See [`LocalDateTime`].
  #[inline]
  pub const fn date_time(self) -> LocalDateTime {
    self.date_time
  }

  /// Daylight saving adjustment, in seconds.
  #[inline]
  pub const fn dst_seconds(self) -> i32 {
    self.dst_seconds
  }

  /// Standard offset of the region.
  #[inline]
  pub const fn offset(self) -> UtcOffset {
    self.offset
  }

  /// Standard offset plus the daylight saving adjustment, in seconds.
  #[inline]
  pub const fn total_offset_seconds(self) -> i32 {
    self.offset.seconds().saturating_add(self.dst_seconds)
  }

  /// Returns a new instance with the daylight saving adjustment that was in effect.
  #[inline]
  #[must_use]
  pub const fn with_dst_seconds(self, dst_seconds: i32) -> Self {
    Self { dst_seconds, ..self }
  }

  /// Writes the local date and time followed by [`Self::total_offset_seconds`].
  #[inline]
  pub async fn write_to<S>(self, sink: &mut S) -> crate::Result<()>
  where
    S: Sink,
  {
    write_offset_date_time(sink, self.date_time, self.total_offset_seconds()).await
  }
}

_display_through_sink!(ZonedDateTime);

/// Calendar fields with millisecond precision along side a zone offset and an optional
/// daylight saving offset, both expressed in milliseconds.
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct CalendarFields {
  date_time: LocalDateTime,
  dst_offset_ms: i32,
  in_daylight_time: bool,
  zone_offset_ms: i32,
}

impl CalendarFields {
  /// New instance without daylight saving. Nanoseconds of `time` are truncated to
  /// milliseconds.
  #[inline]
  pub const fn new(date: CalendarDate, time: WallTime, zone_offset_ms: i32) -> Self {
    Self {
      date_time: LocalDateTime::new(date, time.trunc_to_ms()),
      dst_offset_ms: 0,
      in_daylight_time: false,
      zone_offset_ms,
    }
  }

  /// See [`LocalDateTime`].
  #[inline]
  pub const fn date_time(self) -> LocalDateTime {
    self.date_time
  }

  /// Zone offset plus, when in daylight time, the daylight saving offset. In seconds.
  #[inline]
  pub const fn offset_seconds(self) -> i32 {
    let dst = if self.in_daylight_time { self.dst_offset_ms } else { 0 };
    self.zone_offset_ms.saturating_add(dst) / MILLISECONDS_PER_SECOND.cast_signed()
  }

  /// Returns a new instance with the given daylight saving offset. `in_daylight_time` tells
  /// whether the offset applies to the stored date and time.
  #[inline]
  #[must_use]
  pub const fn with_daylight(self, dst_offset_ms: i32, in_daylight_time: bool) -> Self {
    Self { dst_offset_ms, in_daylight_time, ..self }
  }

  /// See [`write_calendar_fields`].
  #[inline]
  pub async fn write_to<S>(self, sink: &mut S) -> crate::Result<()>
  where
    S: Sink,
  {
    write_calendar_fields(sink, self).await
  }
}

_display_through_sink!(CalendarFields);

/// Writes `YYYY-MM-DDTHH:MM:SS[.fraction]±HH:MM` where the offset is computed through
/// [`CalendarFields::offset_seconds`].
#[inline]
pub async fn write_calendar_fields<S>(sink: &mut S, fields: CalendarFields) -> crate::Result<()>
where
  S: Sink,
{
  let date_time = fields.date_time;
  write_local_date_time(sink, date_time.date, date_time.time.trunc_to_ms()).await?;
  write_offset(sink, fields.offset_seconds()).await
}

/// Writes `YYYY-MM-DDTHH:MM:SS[.fraction]`.
#[inline]
pub async fn write_local_date_time<S>(
  sink: &mut S,
  date: CalendarDate,
  time: WallTime,
) -> crate::Result<()>
where
  S: Sink,
{
  date.write_to(sink).await?;
  sink.push('T').await?;
  time.write_to(sink).await
}

/// Writes `YYYY-MM-DDTHH:MM:SS[.fraction]` followed by `Z` or `±HH:MM`.
#[inline]
pub async fn write_offset_date_time<S>(
  sink: &mut S,
  date_time: LocalDateTime,
  offset_seconds: i32,
) -> crate::Result<()>
where
  S: Sink,
{
  write_local_date_time(sink, date_time.date, date_time.time).await?;
  write_offset(sink, offset_seconds).await
}

/// Writes `HH:MM:SS[.fraction]` followed by `Z` or `±HH:MM`.
#[inline]
pub async fn write_offset_time<S>(
  sink: &mut S,
  time: WallTime,
  offset_seconds: i32,
) -> crate::Result<()>
where
  S: Sink,
{
  time.write_to(sink).await?;
  write_offset(sink, offset_seconds).await
}
