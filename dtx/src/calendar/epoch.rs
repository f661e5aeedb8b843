#![allow(
  clippy::cast_possible_truncation,
  reason = "remainders are always smaller than their divisors"
)]

//! Floor-division decomposition of epoch based values.
//!
//! Negative values are located before the UNIX epoch, as such, `-1` millisecond is the last
//! millisecond of `1969-12-31` and not a negative time of `1970-01-01`.

use crate::calendar::{
  CalendarDate, MILLISECONDS_PER_DAY, MILLISECONDS_PER_SECOND, NANOSECONDS_PER_MILLISECOND,
  NANOSECONDS_PER_SECOND, SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE, WallTime,
  misc::{i64i32_saturating, u8u32, u16u32, u32i64},
};

const DAYS_PER_ERA: i64 = 146_097;
/// Number of days between `0000-03-01` and the UNIX epoch.
const EPOCH_SHIFT: i64 = 719_468;

/// Converts the number of days since the UNIX epoch into a proleptic Gregorian date.
///
/// Years that don't fit in an `i32` are saturated.
//
// Credits to https://howardhinnant.github.io/date_algorithms.html#civil_from_days.
#[inline]
pub const fn date_from_epoch_days(days: i64) -> CalendarDate {
  let shifted = days.saturating_add(EPOCH_SHIFT);
  let era = shifted.div_euclid(DAYS_PER_ERA);
  let day_of_era = shifted.rem_euclid(DAYS_PER_ERA);
  let year_of_era =
    (day_of_era - day_of_era / 1_460 + day_of_era / 36_524 - day_of_era / 146_096) / 365;
  let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
  let month_from_march = (5 * day_of_year + 2) / 153;
  let day = (day_of_year - (153 * month_from_march + 2) / 5 + 1) as u8;
  let month = if month_from_march < 10 { month_from_march + 3 } else { month_from_march - 9 };
  let year =
    year_of_era.saturating_add(era.saturating_mul(400)).saturating_add((month <= 2) as i64);
  CalendarDate::from_parts(i64i32_saturating(year), month as u8, day)
}

/// Splits a number of milliseconds since the UNIX epoch into whole days and the
/// milliseconds of the last day.
#[inline]
pub(crate) const fn split_epoch_millis(millis: i64) -> (i64, u32) {
  let per_day = u32i64(MILLISECONDS_PER_DAY);
  (millis.div_euclid(per_day), millis.rem_euclid(per_day) as u32)
}

/// Splits a number of seconds since the UNIX epoch into whole days and the seconds of the
/// last day.
#[inline]
pub(crate) const fn split_epoch_seconds(seconds: i64) -> (i64, u32) {
  let per_day = u32i64(SECONDS_PER_DAY);
  (seconds.div_euclid(per_day), seconds.rem_euclid(per_day) as u32)
}

/// Clock time of the given number of milliseconds since midnight.
///
/// Values greater than a day wrap around.
#[inline]
pub const fn time_from_millis_of_day(millis: u32) -> WallTime {
  let millis = millis % MILLISECONDS_PER_DAY;
  let seconds = millis / MILLISECONDS_PER_SECOND;
  let millisecond = millis - seconds * MILLISECONDS_PER_SECOND;
  time_from_seconds_of_day(seconds, millisecond * NANOSECONDS_PER_MILLISECOND)
}

/// Clock time of the given number of seconds since midnight along side the number of
/// nanoseconds.
///
/// Seconds greater than a day wrap around and nanoseconds greater than a second are capped.
#[inline]
pub const fn time_from_seconds_of_day(seconds: u32, nanosecond: u32) -> WallTime {
  let seconds = seconds % SECONDS_PER_DAY;
  let hour = seconds / u16u32(SECONDS_PER_HOUR);
  let remainder = seconds - hour * u16u32(SECONDS_PER_HOUR);
  let minute = remainder / u8u32(SECONDS_PER_MINUTE);
  let second = remainder - minute * u8u32(SECONDS_PER_MINUTE);
  let nanosecond = if nanosecond < NANOSECONDS_PER_SECOND {
    nanosecond
  } else {
    NANOSECONDS_PER_SECOND - 1
  };
  WallTime::from_parts(hour as u8, minute as u8, second as u8, nanosecond)
}

#[cfg(test)]
mod tests {
  use crate::calendar::{
    date_from_epoch_days,
    epoch::{split_epoch_millis, split_epoch_seconds},
    time_from_millis_of_day, time_from_seconds_of_day,
  };

  fn ymd(days: i64) -> (i32, u8, u8) {
    let date = date_from_epoch_days(days);
    (date.year(), date.month(), date.day())
  }

  #[test]
  fn dates_around_the_epoch() {
    assert_eq!(ymd(0), (1970, 1, 1));
    assert_eq!(ymd(-1), (1969, 12, 31));
    assert_eq!(ymd(1), (1970, 1, 2));
    assert_eq!(ymd(59), (1970, 3, 1));
  }

  #[test]
  fn distant_dates() {
    assert_eq!(ymd(-719_162), (1, 1, 1));
    assert_eq!(ymd(-719_163), (0, 12, 31));
    assert_eq!(ymd(2_932_896), (9_999, 12, 31));
    assert_eq!(ymd(11_016), (2000, 2, 29));
    assert_eq!(ymd(19_089), (2022, 4, 7));
  }

  #[test]
  fn extreme_dates_do_not_overflow() {
    assert_eq!(date_from_epoch_days(i64::MAX).year(), i32::MAX);
    assert_eq!(date_from_epoch_days(i64::MIN).year(), i32::MIN);
  }

  #[test]
  fn floor_division() {
    assert_eq!(split_epoch_millis(-1), (-1, 86_399_999));
    assert_eq!(split_epoch_millis(86_400_000), (1, 0));
    assert_eq!(split_epoch_seconds(-1), (-1, 86_399));
    assert_eq!(split_epoch_seconds(-86_400), (-1, 0));
    assert_eq!(split_epoch_seconds(-86_401), (-2, 86_399));
  }

  #[test]
  fn times_of_day() {
    let time = time_from_millis_of_day(86_399_999);
    assert_eq!(
      (time.hour(), time.minute(), time.second(), time.nanosecond()),
      (23, 59, 59, 999_000_000)
    );
    let time = time_from_seconds_of_day(67_142, 456);
    assert_eq!((time.hour(), time.minute(), time.second(), time.nanosecond()), (18, 39, 2, 456));
    let time = time_from_seconds_of_day(86_400, 1_000_000_000);
    assert_eq!(
      (time.hour(), time.minute(), time.second(), time.nanosecond()),
      (0, 0, 0, 999_999_999)
    );
  }
}
