//! Define a generic Western business weekday calendar without any specific holidays.

pub const WEEKMASK: &[u8] = &[5, 6]; // Saturday and Sunday weekend

pub const COVERAGE: Option<(i32, i32)> = None; // no holiday data to run out of

pub const HOLIDAYS: &[&str] = &[]; // no specific holidays
