use crate::calendar::CalendarError;
use core::fmt::{Debug, Display, Formatter};

/// Grouped individual errors
#[derive(Debug)]
pub enum Error {
  // External
  //
  /// See [`core::fmt::Error`].
  Fmt(core::fmt::Error),
  /// See [`std::io::Error`].
  #[cfg(feature = "std")]
  IoError(std::io::Error),
  /// See [`tracing_subscriber::util::TryInitError`].
  #[cfg(feature = "tracing-subscriber")]
  TryInitError(tracing_subscriber::util::TryInitError),

  // Generic
  //
  /// A sink with a fixed number of slots couldn't receive another character.
  SinkCapacityExceeded {
    /// Number of characters the sink is able to hold
    capacity: usize,
  },
  /// A sink asked to suspend in a context that can only be driven synchronously.
  SinkSuspended,

  // Internal
  //
  /// See [`CalendarError`].
  CalendarError(CalendarError),
}

impl Display for Error {
  #[inline]
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    <Self as Debug>::fmt(self, f)
  }
}

impl core::error::Error for Error {}

impl From<core::fmt::Error> for Error {
  #[inline]
  #[track_caller]
  fn from(from: core::fmt::Error) -> Self {
    Self::Fmt(from)
  }
}

#[cfg(feature = "std")]
impl From<std::io::Error> for Error {
  #[inline]
  #[track_caller]
  fn from(from: std::io::Error) -> Self {
    Self::IoError(from)
  }
}

#[cfg(feature = "tracing-subscriber")]
impl From<tracing_subscriber::util::TryInitError> for Error {
  #[inline]
  #[track_caller]
  fn from(from: tracing_subscriber::util::TryInitError) -> Self {
    Self::TryInitError(from)
  }
}

impl From<CalendarError> for Error {
  #[inline]
  #[track_caller]
  fn from(from: CalendarError) -> Self {
    Self::CalendarError(from)
  }
}
