use crate::{calendar::EpochSeconds, misc::drive_ready, sink::FmtSink};
use core::{fmt::Write, time::Duration};
use tracing_tree::time::FormatTime;

/// Prefixes every log line with the current UTC instant in RFC 3339.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingTreeTimer;

impl FormatTime for TracingTreeTimer {
  #[inline]
  fn format_time(&self, w: &mut impl Write) -> core::fmt::Result {
    let instant = EpochSeconds::now();
    drive_ready(instant.write_to(&mut FmtSink::new(w))).map_err(|_err| core::fmt::Error)
  }

  #[inline]
  fn style_timestamp(&self, _: bool, elapsed: Duration, w: &mut impl Write) -> core::fmt::Result {
    let millis = elapsed.as_millis();
    if millis < 1_000 {
      return w.write_fmt(format_args!("{millis:>3}ms"));
    }
    let secs = elapsed.as_secs();
    if secs < 60 {
      w.write_fmt(format_args!("{secs:>3}s "))
    } else {
      w.write_fmt(format_args!("{:>3}m ", secs / 60))
    }
  }
}
