use crate::Sink;
use tokio::io::{AsyncWrite, AsyncWriteExt};

/// Suspending sink that writes the UTF-8 bytes of every character into a tokio
/// [`AsyncWrite`] implementation.
///
/// The formatting future yields whenever the writer isn't ready and resumes with the next
/// character once it is.
#[derive(Debug)]
pub struct TokioSink<W>(W);

impl<W> TokioSink<W> {
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

impl<W> TokioSink<W>
where
  W: AsyncWrite + Unpin,
{
  /// Flushes the wrapped writer.
  #[inline]
  pub async fn flush(&mut self) -> crate::Result<()> {
    self.0.flush().await?;
    Ok(())
  }
}

impl<W> Sink for TokioSink<W>
where
  W: AsyncWrite + Unpin,
{
  #[inline]
  async fn push(&mut self, ch: char) -> crate::Result<()> {
    let mut buffer = [0; 4];
    self.0.write_all(ch.encode_utf8(&mut buffer).as_bytes()).await?;
    Ok(())
  }
}
