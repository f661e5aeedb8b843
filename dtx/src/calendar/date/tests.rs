use crate::{
  calendar::{CalendarDate, CalendarError, MonthDay, Year, YearMonth, write_date},
  misc::drive_ready,
};
use alloc::string::{String, ToString};

#[test]
fn constructors() {
  assert!(CalendarDate::from_ymd(2024, 2, 29).is_ok());
  assert_eq!(CalendarDate::from_ymd(2023, 2, 29), Err(CalendarError::InvalidDay { received: 29 }));
  assert_eq!(CalendarDate::from_ymd(1900, 2, 29), Err(CalendarError::InvalidDay { received: 29 }));
  assert!(CalendarDate::from_ymd(2000, 2, 29).is_ok());
  assert_eq!(CalendarDate::from_ymd(2022, 4, 31), Err(CalendarError::InvalidDay { received: 31 }));
  let rslt = CalendarDate::from_ymd(2022, 13, 1);
  assert_eq!(rslt, Err(CalendarError::InvalidMonth { received: 13 }));
  assert_eq!(CalendarDate::from_ymd(2022, 1, 0), Err(CalendarError::InvalidDay { received: 0 }));
  assert_eq!(MonthDay::new(0, 1), Err(CalendarError::InvalidMonth { received: 0 }));
  assert!(MonthDay::new(2, 29).is_ok());
  assert_eq!(MonthDay::new(2, 30), Err(CalendarError::InvalidDay { received: 30 }));
  assert_eq!(YearMonth::new(2022, 13), Err(CalendarError::InvalidMonth { received: 13 }));
}

#[test]
fn dates() {
  assert_eq!(CalendarDate::from_ymd(2022, 4, 7).unwrap().to_string(), "2022-04-07");
  assert_eq!(CalendarDate::from_ymd(1999, 12, 31).unwrap().to_string(), "1999-12-31");
  assert_eq!(CalendarDate::from_epoch_days(10_957).to_string(), "2000-01-01");
  assert_eq!(CalendarDate::EPOCH.to_string(), "1970-01-01");
  assert_eq!(CalendarDate::from_ymd(-1, 3, 4).unwrap().to_string(), "0002-03-04");
}

#[test]
fn leap_years() {
  assert!(Year(2000).is_leap_year());
  assert!(Year(2024).is_leap_year());
  assert!(Year(0).is_leap_year());
  assert!(Year(-4).is_leap_year());
  assert!(!Year(1900).is_leap_year());
  assert!(!Year(2023).is_leap_year());
}

#[test]
fn month_days() {
  assert_eq!(MonthDay::new(4, 8).unwrap().to_string(), "--04-08");
  assert_eq!(MonthDay::new(12, 25).unwrap().to_string(), "--12-25");
}

#[test]
fn out_of_range_fields_are_not_rejected() {
  let mut string = String::new();
  drive_ready(write_date(&mut string, 12_345, 13, 32)).unwrap();
  assert_eq!(string, "9999-13-32");
}

#[test]
fn years() {
  assert_eq!(Year(2022).to_string(), "2022");
  assert_eq!(Year(0).to_string(), "0001");
  assert_eq!(Year(20_000).to_string(), "9999");
}

#[test]
fn year_months() {
  assert_eq!(YearMonth::new(2022, 4).unwrap().to_string(), "2022-04");
  assert_eq!(YearMonth::new(5, 11).unwrap().to_string(), "0005-11");
}
