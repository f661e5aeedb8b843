// FIXME(stable): Constant traits

pub(crate) const fn boolusize(val: bool) -> usize {
  val as usize
}

pub(crate) const fn i32i64(val: i32) -> i64 {
  val as i64
}

pub(crate) const fn u8u16(val: u8) -> u16 {
  val as u16
}

pub(crate) const fn u8u32(val: u8) -> u32 {
  val as u32
}

pub(crate) const fn u8usize(val: u8) -> usize {
  val as usize
}

pub(crate) const fn u16u32(val: u16) -> u32 {
  val as u32
}

pub(crate) const fn u32i64(val: u32) -> i64 {
  val as i64
}

/// Converts `val` into an `i32`, saturating at the boundaries.
pub(crate) const fn i64i32_saturating(val: i64) -> i32 {
  if val > i32i64(i32::MAX) {
    i32::MAX
  } else if val < i32i64(i32::MIN) {
    i32::MIN
  } else {
    val as i32
  }
}

pub(crate) const fn is_leap_year(year: i32) -> bool {
  year.rem_euclid(4) == 0 && (year.rem_euclid(100) != 0 || year.rem_euclid(400) == 0)
}
