use crate::Sink;

/// Sink backed by a closure that receives every character.
#[derive(Debug)]
pub struct FnSink<F>(
  /// Function
  pub F,
);

impl<F> Sink for FnSink<F>
where
  F: FnMut(char) -> crate::Result<()>,
{
  #[inline]
  async fn push(&mut self, ch: char) -> crate::Result<()> {
    (self.0)(ch)
  }
}
