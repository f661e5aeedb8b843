#[cfg(test)]
mod tests;

use crate::{
  Sink,
  calendar::{
    CalendarError, DAYS_IN_MONTHS, date_from_epoch_days, write_2_digits, write_year,
    misc::{boolusize, is_leap_year, u8u32, u8usize},
  },
};

/// Proleptic Gregorian date.
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct CalendarDate {
  year: i32,
  month: u8,
  day: u8,
}

impl CalendarDate {
  /// Instance that refers the UNIX epoch (1970-01-01).
  pub const EPOCH: Self = Self::from_parts(1970, 1, 1);

  /// Converts the number of days since the UNIX epoch. See [`date_from_epoch_days`].
  #[inline]
  pub const fn from_epoch_days(days: i64) -> Self {
    date_from_epoch_days(days)
  }

  /// Constructs a new instance that automatically deals with leap years.
  #[inline]
  pub const fn from_ymd(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
    if let Err(err) = check_month(month) {
      return Err(err);
    }
    if day == 0 || day > days_in_month(year, month) {
      return Err(CalendarError::InvalidDay { received: day });
    }
    Ok(Self::from_parts(year, month, day))
  }

  /// Day of the month.
  #[inline]
  pub const fn day(self) -> u8 {
    self.day
  }

  /// Month of the year
  #[inline]
  pub const fn month(self) -> u8 {
    self.month
  }

  /// Year
  #[inline]
  pub const fn year(self) -> i32 {
    self.year
  }

  /// See [`write_date`].
  #[inline]
  pub async fn write_to<S>(self, sink: &mut S) -> crate::Result<()>
  where
    S: Sink,
  {
    write_date(sink, self.year, self.month, self.day).await
  }

  pub(crate) const fn from_parts(year: i32, month: u8, day: u8) -> Self {
    Self { year, month, day }
  }
}

impl Default for CalendarDate {
  #[inline]
  fn default() -> Self {
    Self::EPOCH
  }
}

_display_through_sink!(CalendarDate);

/// Month and day without a year, for example, a birthday.
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct MonthDay {
  month: u8,
  day: u8,
}

impl MonthDay {
  /// New instance. February accepts 29 days.
  #[inline]
  pub const fn new(month: u8, day: u8) -> Result<Self, CalendarError> {
    if let Err(err) = check_month(month) {
      return Err(err);
    }
    #[allow(clippy::indexing_slicing, reason = "month was checked above")]
    let max_day = DAYS_IN_MONTHS[1][u8usize(month).wrapping_sub(1)];
    if day == 0 || day > max_day {
      return Err(CalendarError::InvalidDay { received: day });
    }
    Ok(Self { month, day })
  }

  /// Day of the month.
  #[inline]
  pub const fn day(self) -> u8 {
    self.day
  }

  /// Month of the year
  #[inline]
  pub const fn month(self) -> u8 {
    self.month
  }

  /// See [`write_month_day`].
  #[inline]
  pub async fn write_to<S>(self, sink: &mut S) -> crate::Result<()>
  where
    S: Sink,
  {
    write_month_day(sink, self.month, self.day).await
  }
}

_display_through_sink!(MonthDay);

/// Year of the proleptic Gregorian calendar.
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Year(
  /// Number
  pub i32,
);

impl Year {
  /// If this year has 366 days.
  #[inline]
  pub const fn is_leap_year(self) -> bool {
    is_leap_year(self.0)
  }

  /// See [`write_year`].
  #[inline]
  pub async fn write_to<S>(self, sink: &mut S) -> crate::Result<()>
  where
    S: Sink,
  {
    write_year(sink, self.0).await
  }
}

_display_through_sink!(Year);

/// Year and month without a day, for example, a credit card expiration.
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct YearMonth {
  year: i32,
  month: u8,
}

impl YearMonth {
  /// New instance
  #[inline]
  pub const fn new(year: i32, month: u8) -> Result<Self, CalendarError> {
    if let Err(err) = check_month(month) {
      return Err(err);
    }
    Ok(Self { year, month })
  }

  /// Month of the year
  #[inline]
  pub const fn month(self) -> u8 {
    self.month
  }

  /// Year
  #[inline]
  pub const fn year(self) -> i32 {
    self.year
  }

  /// See [`write_year_month`].
  #[inline]
  pub async fn write_to<S>(self, sink: &mut S) -> crate::Result<()>
  where
    S: Sink,
  {
    write_year_month(sink, self.year, self.month).await
  }
}

_display_through_sink!(YearMonth);

/// Writes `YYYY-MM-DD`. See [`write_year`] for the treatment of years.
#[inline]
pub async fn write_date<S>(sink: &mut S, year: i32, month: u8, day: u8) -> crate::Result<()>
where
  S: Sink,
{
  write_year_month(sink, year, month).await?;
  sink.push('-').await?;
  write_2_digits(sink, u8u32(day)).await
}

/// Writes `--MM-DD`. The double dash marks the absence of a year.
#[inline]
pub async fn write_month_day<S>(sink: &mut S, month: u8, day: u8) -> crate::Result<()>
where
  S: Sink,
{
  sink.push('-').await?;
  sink.push('-').await?;
  write_2_digits(sink, u8u32(month)).await?;
  sink.push('-').await?;
  write_2_digits(sink, u8u32(day)).await
}

/// Writes `YYYY-MM`. See [`write_year`] for the treatment of years.
#[inline]
pub async fn write_year_month<S>(sink: &mut S, year: i32, month: u8) -> crate::Result<()>
where
  S: Sink,
{
  write_year(sink, year).await?;
  sink.push('-').await?;
  write_2_digits(sink, u8u32(month)).await
}

const fn check_month(month: u8) -> Result<(), CalendarError> {
  if month == 0 || month > 12 {
    return Err(CalendarError::InvalidMonth { received: month });
  }
  Ok(())
}

#[allow(clippy::indexing_slicing, reason = "callers only provide months within 1..=12")]
const fn days_in_month(year: i32, month: u8) -> u8 {
  DAYS_IN_MONTHS[boolusize(is_leap_year(year))][u8usize(month).wrapping_sub(1)]
}
