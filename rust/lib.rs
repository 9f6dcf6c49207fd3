//! Project hiring pipeline timelines over business day calendars.
//!
//! The crate has two layers:
//!
//! - [`scheduling`] provides holiday calendars and the [`DateRoll`](scheduling::DateRoll)
//!   operations for testing, rolling and counting business days.
//! - [`pipeline`] chains the fixed catalog of hiring stages from a few anchor dates and selects
//!   candidate start-of-employment dates.
//!
//! Both layers are pure: calendars are immutable values passed by reference, so any number of
//! projections may share one calendar.


pub mod error;
pub use error::TimelineError;

pub mod json;

pub mod scheduling;

pub mod pipeline;
