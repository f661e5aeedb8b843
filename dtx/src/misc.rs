//! Miscellaneous

use core::{
  future::Future,
  pin::pin,
  task::{Context, Poll, Waker},
};

/// Polls `fut` a single time with a waker that does nothing.
///
/// Suitable for futures that never suspend, like the ones produced by formatting into
/// [`crate::sink::FmtSink`] or a `String`. A future that isn't ready after the first poll is
/// dropped and [`crate::Error::SinkSuspended`] is returned.
#[inline]
pub fn drive_ready<T>(fut: impl Future<Output = crate::Result<T>>) -> crate::Result<T> {
  let mut cx = Context::from_waker(Waker::noop());
  match pin!(fut).poll(&mut cx) {
    Poll::Ready(elem) => elem,
    Poll::Pending => {
      _debug!("a sink suspended while being driven synchronously");
      Err(crate::Error::SinkSuspended)
    }
  }
}

/// Registers a global hierarchical subscriber whose lines are prefixed by
/// [`crate::calendar::TracingTreeTimer`].
///
/// `RUST_LOG` takes precedence over `fallback_opt`.
#[cfg(feature = "_tracing-tree")]
#[inline]
pub fn tracing_tree_init(fallback_opt: Option<&str>) -> crate::Result<()> {
  use tracing_subscriber::{
    EnvFilter, prelude::__tracing_subscriber_SubscriberExt, util::SubscriberInitExt,
  };
  let fallback = fallback_opt.unwrap_or("");
  let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
  let tracing_tree = tracing_tree::HierarchicalLayer::default()
    .with_indent_amount(2)
    .with_indent_lines(true)
    .with_targets(true)
    .with_timer(crate::calendar::TracingTreeTimer)
    .with_writer(std::io::stderr);
  tracing_subscriber::Registry::default().with(env_filter).with(tracing_tree).try_init()?;
  Ok(())
}
