use crate::{
  Sink,
  calendar::{
    CalendarError, MINUTES_PER_HOUR, SECONDS_PER_HOUR, SECONDS_PER_MINUTE, write_2_digits,
    misc::{u8u32, u16u32},
  },
};

const MAX_SECONDS: i32 = 86_399;

/// Difference between a local time and UTC, less than a day in both directions.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct UtcOffset(i32);

impl UtcOffset {
  /// Universal Time Coordinated (UTC)
  pub const UTC: Self = Self(0);

  /// Creates a new instance from a number of hours and minutes. The sign of `hours` is applied
  /// to `minutes`.
  ///
  /// Negative offsets without whole hours, like `-00:30`, must be created through
  /// [`Self::from_seconds`].
  #[inline]
  pub const fn from_hm(hours: i8, minutes: u8) -> Result<Self, CalendarError> {
    if minutes >= MINUTES_PER_HOUR {
      return Err(CalendarError::InvalidMinute { received: minutes });
    }
    let magnitude = (hours.unsigned_abs() as i32) * 3_600 + (minutes as i32) * 60;
    Self::from_seconds(if hours < 0 { -magnitude } else { magnitude })
  }

  /// Creates a new instance from the total number of seconds, which must be within
  /// `-86_399..=86_399`.
  #[inline]
  pub const fn from_seconds(seconds: i32) -> Result<Self, CalendarError> {
    if seconds < -MAX_SECONDS || seconds > MAX_SECONDS {
      return Err(CalendarError::InvalidOffsetSeconds { received: seconds });
    }
    Ok(Self(seconds))
  }

  /// If this instance refers UTC.
  #[inline]
  pub const fn is_utc(self) -> bool {
    self.0 == 0
  }

  /// Total number of seconds
  #[inline]
  pub const fn seconds(self) -> i32 {
    self.0
  }

  /// See [`write_offset`].
  #[inline]
  pub async fn write_to<S>(self, sink: &mut S) -> crate::Result<()>
  where
    S: Sink,
  {
    write_offset(sink, self.0).await
  }

  #[cfg(feature = "chrono")]
  pub(crate) const fn from_parts(seconds: i32) -> Self {
    Self(seconds)
  }
}

_display_through_sink!(UtcOffset);

#[cfg(feature = "arbitrary")]
impl<'any> arbitrary::Arbitrary<'any> for UtcOffset {
  #[inline]
  fn arbitrary(u: &mut arbitrary::Unstructured<'any>) -> arbitrary::Result<Self> {
    Ok(Self(u.int_in_range(-MAX_SECONDS..=MAX_SECONDS)?))
  }

  #[inline]
  fn size_hint(depth: usize) -> (usize, Option<usize>) {
    <i32 as arbitrary::Arbitrary<'any>>::size_hint(depth)
  }
}

/// Writes `Z` when `seconds` is zero, otherwise `+HH:MM` or `-HH:MM`.
///
/// Remaining seconds that don't form a whole minute are discarded.
#[inline]
pub async fn write_offset<S>(sink: &mut S, seconds: i32) -> crate::Result<()>
where
  S: Sink,
{
  if seconds == 0 {
    return sink.push('Z').await;
  }
  sink.push(if seconds < 0 { '-' } else { '+' }).await?;
  let magnitude = seconds.unsigned_abs();
  let hours = magnitude / u16u32(SECONDS_PER_HOUR);
  let minutes = magnitude.wrapping_sub(hours.wrapping_mul(u16u32(SECONDS_PER_HOUR)))
    / u8u32(SECONDS_PER_MINUTE);
  write_2_digits(sink, hours).await?;
  sink.push(':').await?;
  write_2_digits(sink, minutes).await
}

#[cfg(test)]
mod tests {
  use crate::{
    calendar::{CalendarError, UtcOffset, write_offset},
    misc::drive_ready,
  };
  use alloc::string::{String, ToString};

  fn offset(seconds: i32) -> String {
    let mut string = String::new();
    drive_ready(write_offset(&mut string, seconds)).unwrap();
    string
  }

  #[test]
  fn constructors() {
    assert_eq!(UtcOffset::from_hm(10, 0).unwrap().seconds(), 36_000);
    assert_eq!(UtcOffset::from_hm(-5, 30).unwrap().seconds(), -19_800);
    assert_eq!(UtcOffset::from_hm(1, 60), Err(CalendarError::InvalidMinute { received: 60 }));
    assert_eq!(
      UtcOffset::from_seconds(86_400),
      Err(CalendarError::InvalidOffsetSeconds { received: 86_400 })
    );
    assert_eq!(
      UtcOffset::from_hm(-24, 0),
      Err(CalendarError::InvalidOffsetSeconds { received: -86_400 })
    );
    assert!(UtcOffset::from_seconds(-86_399).is_ok());
    assert!(UtcOffset::from_hm(20, 0).is_ok());
  }

  #[test]
  fn seconds_are_discarded() {
    assert_eq!(offset(3_661), "+01:01");
    assert_eq!(offset(-59), "-00:00");
  }

  #[test]
  fn signs() {
    assert_eq!(offset(36_000), "+10:00");
    assert_eq!(offset(-18_000), "-05:00");
    assert_eq!(offset(19_800), "+05:30");
    assert_eq!(offset(-64_800), "-18:00");
  }

  #[test]
  fn negative_offsets_without_hours() {
    assert_eq!(UtcOffset::from_hm(0, 30).unwrap().to_string(), "+00:30");
    assert_eq!(UtcOffset::from_seconds(-1_800).unwrap().to_string(), "-00:30");
  }

  #[test]
  fn offsets_beyond_eighteen_hours() {
    assert_eq!(UtcOffset::from_hm(20, 0).unwrap().to_string(), "+20:00");
    assert_eq!(UtcOffset::from_seconds(-86_399).unwrap().to_string(), "-23:59");
  }

  #[cfg(feature = "arbitrary")]
  #[test]
  fn arbitrary_offsets_are_within_range() {
    use arbitrary::{Arbitrary, Unstructured};
    for byte in [0, 1, 127, 128, 254, 255] {
      let data = [byte; 8];
      let offset = UtcOffset::arbitrary(&mut Unstructured::new(&data)).unwrap();
      assert_eq!(UtcOffset::from_seconds(offset.seconds()), Ok(offset));
    }
  }

  #[test]
  fn zero_is_zulu() {
    assert_eq!(offset(0), "Z");
    assert_eq!(UtcOffset::UTC.to_string(), "Z");
    assert!(UtcOffset::UTC.is_utc());
  }

  #[test]
  fn extreme_values_do_not_overflow() {
    assert_eq!(offset(i32::MIN), "-23:14");
    assert_eq!(offset(i32::MAX).len(), 6);
  }
}
