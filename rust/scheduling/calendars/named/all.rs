//! Define a calendar which asserts every possible date as a business day.

pub const WEEKMASK: &[u8] = &[]; // all days are weekdays

pub const COVERAGE: Option<(i32, i32)> = None;

pub const HOLIDAYS: &[&str] = &[]; // no specific holidays
