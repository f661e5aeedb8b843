//! Receivers of formatted characters.
//!
//! Formatting functions call [`Sink::push`] once per character, strictly from left to right,
//! and await every call before issuing the next one. A sink can therefore block, buffer or
//! suspend without affecting the produced sequence.

mod array_sink;
mod fmt_sink;
mod fn_sink;
#[cfg(feature = "std")]
mod io_sink;
#[cfg(test)]
mod tests;
#[cfg(feature = "tokio")]
mod tokio_sink;

use alloc::{string::String, vec::Vec};
pub use array_sink::ArraySink;
pub use fmt_sink::FmtSink;
pub use fn_sink::FnSink;
#[cfg(feature = "std")]
pub use io_sink::IoSink;
#[cfg(feature = "tokio")]
pub use tokio_sink::TokioSink;

/// Consumer of the characters produced by the formatting functions.
pub trait Sink {
  /// Receives the next character of the output.
  ///
  /// Errors are propagated as-is to the caller of the formatting function. Characters that
  /// were accepted before the error stay accepted.
  async fn push(&mut self, ch: char) -> crate::Result<()>;
}

impl<T> Sink for &mut T
where
  T: Sink,
{
  #[inline]
  async fn push(&mut self, ch: char) -> crate::Result<()> {
    (**self).push(ch).await
  }
}

impl Sink for String {
  #[inline]
  async fn push(&mut self, ch: char) -> crate::Result<()> {
    String::push(self, ch);
    Ok(())
  }
}

impl Sink for Vec<u8> {
  #[inline]
  async fn push(&mut self, ch: char) -> crate::Result<()> {
    let mut buffer = [0; 4];
    self.extend_from_slice(ch.encode_utf8(&mut buffer).as_bytes());
    Ok(())
  }
}

impl Sink for () {
  #[inline]
  async fn push(&mut self, _: char) -> crate::Result<()> {
    Ok(())
  }
}
