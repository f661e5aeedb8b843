use crate::Sink;
use core::fmt::{Debug, Formatter};

/// Stack-allocated sink that holds up to `N` ASCII characters.
///
/// Non-ASCII characters are replaced by `?`, which never happens with the output of this crate.
#[derive(Clone, Copy)]
pub struct ArraySink<const N: usize> {
  data: [u8; N],
  len: usize,
}

impl<const N: usize> ArraySink<N> {
  /// Empty instance
  #[inline]
  pub const fn new() -> Self {
    Self { data: [0; N], len: 0 }
  }

  /// Accepted characters
  #[inline]
  pub fn as_str(&self) -> &str {
    let bytes = self.data.get(..self.len).unwrap_or_default();
    // Only ASCII bytes are ever stored
    core::str::from_utf8(bytes).unwrap_or_default()
  }

  /// Forgets all accepted characters.
  #[inline]
  pub const fn clear(&mut self) {
    self.len = 0;
  }

  /// Number of accepted characters
  #[inline]
  pub const fn len(&self) -> usize {
    self.len
  }

  /// If nothing was accepted so far.
  #[inline]
  pub const fn is_empty(&self) -> bool {
    self.len == 0
  }
}

impl<const N: usize> Debug for ArraySink<N> {
  #[inline]
  fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
    f.debug_tuple("ArraySink").field(&self.as_str()).finish()
  }
}

impl<const N: usize> Default for ArraySink<N> {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

impl<const N: usize> Sink for ArraySink<N> {
  #[inline]
  async fn push(&mut self, ch: char) -> crate::Result<()> {
    let Some(slot) = self.data.get_mut(self.len) else {
      return Err(crate::Error::SinkCapacityExceeded { capacity: N });
    };
    *slot = if ch.is_ascii() { ch as u8 } else { b'?' };
    self.len = self.len.wrapping_add(1);
    Ok(())
  }
}
