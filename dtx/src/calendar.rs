//! RFC 3339 output of calendar values.
//!
//! Every type of this module can be written into a [`Sink`](crate::Sink) through its `write_to`
//! method or through the free function that matches its shape. Free functions operate on plain
//! numbers, trust their input and never fail on their own.

mod calendar_error;
#[cfg(feature = "chrono")]
mod chrono;
mod date;
mod date_time;
mod digits;
mod epoch;
mod misc;
mod temporal;
mod time;
mod timestamp;
#[cfg(feature = "tracing-tree")]
mod tracing_tree_timer;
mod utc_offset;

pub use calendar_error::CalendarError;
pub use date::{
  CalendarDate, MonthDay, Year, YearMonth, write_date, write_month_day, write_year_month,
};
pub use date_time::{
  CalendarFields, LocalDateTime, OffsetDateTime, OffsetTime, ZonedDateTime, write_calendar_fields,
  write_local_date_time, write_offset_date_time, write_offset_time,
};
pub use digits::{write_2_digits, write_3_digits, write_year};
pub use epoch::{date_from_epoch_days, time_from_millis_of_day, time_from_seconds_of_day};
pub use temporal::Temporal;
pub use time::{WallTime, write_time};
pub use timestamp::{EpochMillis, EpochSeconds, write_epoch_millis, write_epoch_seconds};
#[cfg(feature = "tracing-tree")]
pub use tracing_tree_timer::TracingTreeTimer;
pub use utc_offset::{UtcOffset, write_offset};

pub(crate) const MAX_DISPLAY_YEAR: u32 = 9_999;
pub(crate) const MILLISECONDS_PER_DAY: u32 = SECONDS_PER_DAY * 1_000;
pub(crate) const MILLISECONDS_PER_SECOND: u32 = 1_000;
pub(crate) const MINUTES_PER_HOUR: u8 = 60;
pub(crate) const NANOSECONDS_PER_MICROSECOND: u32 = 1_000;
pub(crate) const NANOSECONDS_PER_MILLISECOND: u32 = 1_000_000;
pub(crate) const NANOSECONDS_PER_SECOND: u32 = 1_000_000_000;
pub(crate) const SECONDS_PER_DAY: u32 = misc::u16u32(SECONDS_PER_HOUR) * 24;
pub(crate) const SECONDS_PER_HOUR: u16 = misc::u8u16(SECONDS_PER_MINUTE) * 60;
pub(crate) const SECONDS_PER_MINUTE: u8 = 60;

/// Number of days of each month in non-leap and leap years.
pub(crate) static DAYS_IN_MONTHS: [[u8; 12]; 2] = [
  [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31],
  [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31],
];
