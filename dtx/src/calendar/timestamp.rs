use crate::{
  Sink,
  calendar::{
    NANOSECONDS_PER_SECOND, date_from_epoch_days,
    epoch::{split_epoch_millis, split_epoch_seconds},
    time_from_millis_of_day, time_from_seconds_of_day, write_local_date_time,
  },
};

/// Number of milliseconds since the UNIX epoch (1970-01-01T00:00:00Z).
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct EpochMillis(
  /// Number
  pub i64,
);

impl EpochMillis {
  /// See [`write_epoch_millis`].
  #[inline]
  pub async fn write_to<S>(self, sink: &mut S) -> crate::Result<()>
  where
    S: Sink,
  {
    write_epoch_millis(sink, self.0).await
  }
}

_display_through_sink!(EpochMillis);

/// Instant expressed as the number of seconds since the UNIX epoch along side the number of
/// nanoseconds of the last second.
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct EpochSeconds {
  seconds: i64,
  nanosecond: u32,
}

impl EpochSeconds {
  /// Instance that refers the UNIX epoch.
  pub const EPOCH: Self = Self { seconds: 0, nanosecond: 0 };

  /// New instance. Nanoseconds greater than `999_999_999` are capped.
  #[inline]
  pub const fn new(seconds: i64, nanosecond: u32) -> Self {
    let nanosecond = if nanosecond < NANOSECONDS_PER_SECOND {
      nanosecond
    } else {
      NANOSECONDS_PER_SECOND - 1
    };
    Self { seconds, nanosecond }
  }

  /// The current system time.
  #[cfg(feature = "std")]
  #[inline]
  pub fn now() -> Self {
    Self::from_system_time(std::time::SystemTime::now())
  }

  /// Converts a [`std::time::SystemTime`], including instants located before the epoch.
  #[cfg(feature = "std")]
  #[inline]
  pub fn from_system_time(system_time: std::time::SystemTime) -> Self {
    match system_time.duration_since(std::time::UNIX_EPOCH) {
      Ok(elem) => Self::new(elem.as_secs().try_into().unwrap_or(i64::MAX), elem.subsec_nanos()),
      Err(err) => {
        let elem = err.duration();
        let seconds = i64::try_from(elem.as_secs()).map_or(i64::MIN, |el| el.wrapping_neg());
        match elem.subsec_nanos() {
          0 => Self::new(seconds, 0),
          nanos => Self::new(seconds.saturating_sub(1), NANOSECONDS_PER_SECOND - nanos),
        }
      }
    }
  }

  /// Nanoseconds of the last second.
  #[inline]
  pub const fn nanosecond(self) -> u32 {
    self.nanosecond
  }

  /// Whole seconds since the epoch.
  #[inline]
  pub const fn seconds(self) -> i64 {
    self.seconds
  }

  /// See [`write_epoch_seconds`].
  #[inline]
  pub async fn write_to<S>(self, sink: &mut S) -> crate::Result<()>
  where
    S: Sink,
  {
    write_epoch_seconds(sink, self.seconds, self.nanosecond).await
  }
}

_display_through_sink!(EpochSeconds);

/// Writes the UTC date and time of a number of milliseconds since the UNIX epoch, always
/// followed by `Z`.
///
/// Negative values are floor-divided, for example, `-1` becomes `1969-12-31T23:59:59.999Z`.
#[inline]
pub async fn write_epoch_millis<S>(sink: &mut S, millis: i64) -> crate::Result<()>
where
  S: Sink,
{
  let (days, millis_of_day) = split_epoch_millis(millis);
  let date = date_from_epoch_days(days);
  let time = time_from_millis_of_day(millis_of_day);
  write_local_date_time(sink, date, time).await?;
  sink.push('Z').await
}

/// Writes the UTC date and time of a number of seconds and nanoseconds since the UNIX epoch,
/// always followed by `Z`.
#[inline]
pub async fn write_epoch_seconds<S>(
  sink: &mut S,
  seconds: i64,
  nanosecond: u32,
) -> crate::Result<()>
where
  S: Sink,
{
  let (days, seconds_of_day) = split_epoch_seconds(seconds);
  let date = date_from_epoch_days(days);
  let time = time_from_seconds_of_day(seconds_of_day, nanosecond);
  write_local_date_time(sink, date, time).await?;
  sink.push('Z').await
}
