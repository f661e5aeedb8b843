use crate::Sink;
use std::io::Write;

/// Blocking sink that writes the UTF-8 bytes of every character into a
/// [`std::io::Write`] implementation.
///
/// Each character results in a `write_all` call, so a buffered writer is usually desirable.
#[derive(Debug)]
pub struct IoSink<W>(W);

impl<W> IoSink<W> {
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

impl<W> Sink for IoSink<W>
where
  W: Write,
{
  #[inline]
  async fn push(&mut self, ch: char) -> crate::Result<()> {
    let mut buffer = [0; 4];
    self.0.write_all(ch.encode_utf8(&mut buffer).as_bytes())?;
    Ok(())
  }
}
