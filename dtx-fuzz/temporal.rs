//! Temporal

#![no_main]

use dtx::{calendar::Temporal, misc::drive_ready, sink::ArraySink};

libfuzzer_sys::fuzz_target!(|data: Temporal| {
  let mut sink = ArraySink::<{ Temporal::MAX_LEN }>::new();
  if let Err(err) = drive_ready(data.write_to(&mut sink)) {
    panic!("{data:?} couldn't be written: {err}");
  }
  assert!(sink.as_str().is_ascii());
});
