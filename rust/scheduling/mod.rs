//! Create a business day calendar and perform date manipulation.
//!
//! # Calendars and Date Rolling
//!
//! ## Calendars
//!
//! The [`Cal`] type is based on a simple holiday and weekend specification. A calendar may also
//! declare the range of years its holiday data describes, so that dates falling outside that
//! range can be detected rather than silently treated as ordinary business days. Some common
//! calendars are implemented directly by name, see [`Cal::try_from_name`].
//!
//! All calendars implement the [`DateRoll`] trait which provides simple date adjustment, which
//! is called **rolling**. This involves moving forward or backward from non-business days to
//! specific **business days**, or advancing a date by a number of business days.
//!
//! ### Example
//! This example creates a business day calendar defining Saturday and Sunday weekends and a
//! specific holiday (Good Friday 2024). It rolls the holiday forward to the next business day
//! and then counts business days from it.
//! ```rust
//! # use hiring_timeline::scheduling::{Cal, ndt, DateRoll};
//! let cal = Cal::new(vec![ndt(2024, 3, 29)], vec![5, 6]);
//! assert_eq!(ndt(2024, 4, 1), cal.roll_forward_bus_day(&ndt(2024, 3, 29)));
//! assert_eq!(ndt(2024, 4, 1), cal.add_bus_days(&ndt(2024, 3, 28), 1).unwrap());
//! ```
//!
//! ## Date Adjustment
//!
//! The [`Adjuster`] is an enum which defines a rule applied after a calendar day offset. It
//! implements the [`Adjustment`] trait requiring some object capable of performing [`DateRoll`].
//!
//! ### Example
//! This example moves a date forward by one calendar day and rolls the result to the next
//! business day, which is how consecutive hiring stages are chained.
//! ```rust
//! # use hiring_timeline::scheduling::{Cal, ndt, Adjuster, DateRoll};
//! # let cal = Cal::new(vec![ndt(2024, 3, 29)], vec![5, 6]);
//! assert_eq!(ndt(2024, 4, 1), cal.add_cal_days(&ndt(2024, 3, 28), 1, &Adjuster::Following{}));
//! ```

mod calendars;

mod serde;

pub use crate::scheduling::calendars::{
    first_of_next_month, ndt, next_weekday_on_or_after, try_ndt, Adjuster, Adjustment, Cal,
    DateRoll, CALENDAR_NAMES,
};
