#![allow(async_fn_in_trait, reason = "sinks are driven by the caller's executor")]
#![doc = include_str!("../README.md")]
#![no_std]

extern crate alloc;
#[cfg(any(feature = "std", test))]
extern crate std;

#[macro_use]
mod macros;

pub mod calendar;
mod error;
pub mod misc;
pub mod sink;

pub use error::Error;
pub use sink::Sink;

/// Shortcut of [`core::result::Result<T, Error>`].
pub type Result<T> = core::result::Result<T, Error>;
