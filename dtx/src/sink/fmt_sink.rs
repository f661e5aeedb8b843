use crate::Sink;
use core::fmt::Write;

/// Forwards characters to a [`core::fmt::Write`] implementation, for example a
/// [`core::fmt::Formatter`].
#[derive(Debug)]
pub struct FmtSink<W>(W);

impl<W> FmtSink<W> {
  /// Wraps `writer`.
  #[inline]
  pub const fn new(writer: W) -> Self {
    Self(writer)
  }

  /// Gives back the wrapped writer.
  #[inline]
  pub fn into_inner(self) -> W {
    self.0
  }
}

impl<W> Sink for FmtSink<W>
where
  W: Write,
{
  #[inline]
  async fn push(&mut self, ch: char) -> crate::Result<()> {
    self.0.write_char(ch)?;
    Ok(())
  }
}
