macro_rules! _debug {
  ($($tt:tt)+) => {
    #[cfg(feature = "tracing")]
    tracing::debug!($($tt)+);
  };
}

macro_rules! _trace {
  ($($tt:tt)+) => {
    #[cfg(feature = "tracing")]
    tracing::trace!($($tt)+);
  };
}

macro_rules! _display_through_sink {
  ($ty:ty) => {
    impl core::fmt::Display for $ty {
      #[inline]
      fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut sink = crate::sink::FmtSink::new(f);
        crate::misc::drive_ready(self.write_to(&mut sink)).map_err(|_err| core::fmt::Error)
      }
    }

    #[cfg(feature = "serde")]
    impl serde::Serialize for $ty {
      #[inline]
      fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
      where
        S: serde::Serializer,
      {
        serializer.collect_str(self)
      }
    }
  };
}
