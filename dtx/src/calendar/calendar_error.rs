/// Calendar error
///
/// Returned by the constructors of the calendar types. Formatting functions that operate on
/// plain numbers never produce these.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CalendarError {
  /// A month can only have up to 31 days and the day must exist in the given month
  InvalidDay {
    /// Invalid received number
    received: u8,
  },
  /// A day can only have up to 24 hours
  InvalidHour {
    /// Invalid received number
    received: u8,
  },
  /// A second can only have up to `999_999` microseconds
  InvalidMicrosecond {
    /// Invalid received number
    received: u32,
  },
  /// A second can only have up to `999` milliseconds
  InvalidMillisecond {
    /// Invalid received number
    received: u16,
  },
  /// A hour can only have up to 60 minutes
  InvalidMinute {
    /// Invalid received number
    received: u8,
  },
  /// A year can only have up to 12 months
  InvalidMonth {
    /// Invalid received number
    received: u8,
  },
  /// A second can only have up to `999_999_999` nanoseconds
  InvalidNanosecond {
    /// Invalid received number
    received: u32,
  },
  /// Offsets must be less than a day in both directions
  InvalidOffsetSeconds {
    /// Invalid received number
    received: i32,
  },
  /// A minute can only have up to 60 seconds
  InvalidSecond {
    /// Invalid received number
    received: u8,
  },
}
