
use crate::{
  Sink,
  calendar::{
    CalendarError, NANOSECONDS_PER_MICROSECOND, NANOSECONDS_PER_MILLISECOND,
    NANOSECONDS_PER_SECOND, write_2_digits, write_3_digits,
    misc::{u8u32, u16u32},
  },
};

/// Clock time with nanosecond precision.
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct WallTime {
  hour: u8,
  minute: u8,
  second: u8,
  nanosecond: u32,
}

impl WallTime {
  /// Instance with the maximum allowed value of `23:59:59.999_999_999`
  pub const MAX: Self = Self::from_parts(23, 59, 59, NANOSECONDS_PER_SECOND - 1);
  /// Instance with the minimum allowed value of `00:00:00`
  pub const ZERO: Self = Self::from_parts(0, 0, 0, 0);

  /// New instance without sub-second precision.
  #[inline]
  pub const fn from_hms(hour: u8, minute: u8, second: u8) -> Result<Self, CalendarError> {
    Self::from_hms_ns(hour, minute, second, 0)
  }

  /// New instance with milliseconds precision.
  #[inline]
  pub const fn from_hms_ms(
    hour: u8,
    minute: u8,
    second: u8,
    millisecond: u16,
  ) -> Result<Self, CalendarError> {
    if millisecond > 999 {
      return Err(CalendarError::InvalidMillisecond { received: millisecond });
    }
    Self::from_hms_ns(hour, minute, second, u16u32(millisecond) * NANOSECONDS_PER_MILLISECOND)
  }

  /// New instance with nanosecond precision.
  #[inline]
  pub const fn from_hms_ns(
    hour: u8,
    minute: u8,
    second: u8,
    nanosecond: u32,
  ) -> Result<Self, CalendarError> {
    if hour > 23 {
      return Err(CalendarError::InvalidHour { received: hour });
    }
    if minute > 59 {
      return Err(CalendarError::InvalidMinute { received: minute });
    }
    if second > 59 {
      return Err(CalendarError::InvalidSecond { received: second });
    }
    if nanosecond >= NANOSECONDS_PER_SECOND {
      return Err(CalendarError::InvalidNanosecond { received: nanosecond });
    }
    Ok(Self::from_parts(hour, minute, second, nanosecond))
  }

  /// New instance with microseconds precision.
  #[inline]
  pub const fn from_hms_us(
    hour: u8,
    minute: u8,
    second: u8,
    microsecond: u32,
  ) -> Result<Self, CalendarError> {
    if microsecond > 999_999 {
      return Err(CalendarError::InvalidMicrosecond { received: microsecond });
    }
    Self::from_hms_ns(hour, minute, second, microsecond * NANOSECONDS_PER_MICROSECOND)
  }

  /// Hours of a day
  #[inline]
  pub const fn hour(self) -> u8 {
    self.hour
  }

  /// Minutes of a hour.
  #[inline]
  pub const fn minute(self) -> u8 {
    self.minute
  }

  /// Nanosecond of a second
  #[inline]
  pub const fn nanosecond(self) -> u32 {
    self.nanosecond
  }

  /// Seconds of a minute
  #[inline]
  pub const fn second(self) -> u8 {
    self.second
  }

  /// Returns a new instance with the number of nanoseconds truncated to milliseconds.
  #[inline]
  #[must_use]
  pub const fn trunc_to_ms(self) -> Self {
    let nanosecond = self.nanosecond / NANOSECONDS_PER_MILLISECOND * NANOSECONDS_PER_MILLISECOND;
    Self::from_parts(self.hour, self.minute, self.second, nanosecond)
  }

  /// See [`write_time`].
  #[inline]
  pub async fn write_to<S>(self, sink: &mut S) -> crate::Result<()>
  where
    S: Sink,
  {
    write_time(sink, self.hour, self.minute, self.second, self.nanosecond).await
  }

  pub(crate) const fn from_parts(hour: u8, minute: u8, second: u8, nanosecond: u32) -> Self {
    Self { hour, minute, second, nanosecond }
  }
}

_display_through_sink!(WallTime);

/// Writes `HH:MM:SS` followed by an optional fraction.
///
/// The fraction is omitted when `nanosecond` is zero. Otherwise it contains 3, 6 or 9 digits,
/// the smallest amount that represents `nanosecond` without loss. For example, `230_000_000`
/// becomes `.230`, `234_500_000` becomes `.234500` and `234_567_890` becomes `.234567890`.
#[inline]
pub async fn write_time<S>(
  sink: &mut S,
  hour: u8,
  minute: u8,
  second: u8,
  nanosecond: u32,
) -> crate::Result<()>
where
  S: Sink,
{
  write_2_digits(sink, u8u32(hour)).await?;
  sink.push(':').await?;
  write_2_digits(sink, u8u32(minute)).await?;
  sink.push(':').await?;
  write_2_digits(sink, u8u32(second)).await?;
  if nanosecond == 0 {
    return Ok(());
  }
  sink.push('.').await?;
  let millis = nanosecond / NANOSECONDS_PER_MILLISECOND;
  write_3_digits(sink, millis).await?;
  let last_6 = nanosecond.wrapping_sub(millis.wrapping_mul(NANOSECONDS_PER_MILLISECOND));
  if last_6 == 0 {
    return Ok(());
  }
  let micros = last_6 / NANOSECONDS_PER_MICROSECOND;
  write_3_digits(sink, micros).await?;
  let last_3 = last_6.wrapping_sub(micros.wrapping_mul(NANOSECONDS_PER_MICROSECOND));
  if last_3 == 0 {
    return Ok(());
  }
  write_3_digits(sink, last_3).await
}
