mod adjuster;
mod cal;
mod calendar;
mod dateroll;
mod named;

pub use crate::scheduling::calendars::{
    adjuster::{Adjuster, Adjustment},
    cal::Cal,
    calendar::{first_of_next_month, ndt, next_weekday_on_or_after, try_ndt},
    dateroll::DateRoll,
    named::CALENDAR_NAMES,
};
