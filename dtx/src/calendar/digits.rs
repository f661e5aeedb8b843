#![allow(
  clippy::cast_possible_truncation,
  reason = "digits are reduced to a single decimal unit before being casted"
)]

use crate::{Sink, calendar::MAX_DISPLAY_YEAR};

/// Writes exactly two zero-padded decimal digits.
///
/// `value` is expected to be within `0..=99`. Greater numbers only have their two least
/// significant digits written.
#[inline]
pub async fn write_2_digits<S>(sink: &mut S, value: u32) -> crate::Result<()>
where
  S: Sink,
{
  sink.push(digit(value / 10)).await?;
  sink.push(digit(value)).await
}

/// Writes exactly three zero-padded decimal digits.
///
/// `value` is expected to be within `0..=999`. Greater numbers only have their three least
/// significant digits written.
#[inline]
pub async fn write_3_digits<S>(sink: &mut S, value: u32) -> crate::Result<()>
where
  S: Sink,
{
  sink.push(digit(value / 100)).await?;
  sink.push(digit(value / 10)).await?;
  sink.push(digit(value)).await
}

/// Writes a year using exactly four digits.
///
/// Non-positive years are written as `1 - year`, which means that `0` becomes `0001` and `-1`
/// becomes `0002`. No sign is ever written and magnitudes greater than `9999` are clamped.
#[inline]
pub async fn write_year<S>(sink: &mut S, year: i32) -> crate::Result<()>
where
  S: Sink,
{
  let value = display_year(year);
  let century = value / 100;
  write_2_digits(sink, century).await?;
  write_2_digits(sink, value.wrapping_sub(century.wrapping_mul(100))).await
}

pub(crate) fn display_year(year: i32) -> u32 {
  let magnitude =
    if year > 0 { year.unsigned_abs() } else { year.unsigned_abs().saturating_add(1) };
  if magnitude > MAX_DISPLAY_YEAR {
    _trace!(year, "year doesn't fit in four digits and is going to be clamped");
    MAX_DISPLAY_YEAR
  } else {
    magnitude
  }
}

const fn digit(value: u32) -> char {
  (b'0' + (value % 10) as u8) as char
}

#[cfg(test)]
mod tests {
  use crate::{
    calendar::{write_2_digits, write_3_digits, write_year},
    misc::drive_ready,
  };
  use alloc::string::String;

  fn year(value: i32) -> String {
    let mut string = String::new();
    drive_ready(write_year(&mut string, value)).unwrap();
    string
  }

  #[test]
  fn three_digits() {
    for (value, expected) in [(0, "000"), (7, "007"), (45, "045"), (999, "999"), (1_234, "234")] {
      let mut string = String::new();
      drive_ready(write_3_digits(&mut string, value)).unwrap();
      assert_eq!(string, expected);
    }
  }

  #[test]
  fn two_digits() {
    for (value, expected) in [(0, "00"), (7, "07"), (10, "10"), (99, "99"), (123, "23")] {
      let mut string = String::new();
      drive_ready(write_2_digits(&mut string, value)).unwrap();
      assert_eq!(string, expected);
    }
  }

  #[test]
  fn years() {
    assert_eq!(year(2022), "2022");
    assert_eq!(year(1), "0001");
    assert_eq!(year(999), "0999");
    assert_eq!(year(9_999), "9999");
  }

  #[test]
  fn non_positive_years() {
    assert_eq!(year(0), "0001");
    assert_eq!(year(-1), "0002");
    assert_eq!(year(-43), "0044");
  }

  #[test]
  fn years_are_clamped() {
    assert_eq!(year(10_000), "9999");
    assert_eq!(year(-9_999), "9999");
    assert_eq!(year(i32::MAX), "9999");
    assert_eq!(year(i32::MIN), "9999");
  }
}
