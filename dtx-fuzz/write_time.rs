//! Raw clock fields

#![no_main]

use dtx::{calendar::write_time, misc::drive_ready, sink::ArraySink};

libfuzzer_sys::fuzz_target!(|data: (u8, u8, u8, u32)| {
  let (hour, minute, second, nanosecond) = data;
  let mut sink = ArraySink::<18>::new();
  assert!(drive_ready(write_time(&mut sink, hour, minute, second, nanosecond)).is_ok());
  let len = sink.len();
  assert!(len == 8 || len == 12 || len == 15 || len == 18);
});
