use crate::scheduling::DateRoll;
use chrono::prelude::*;
use serde::{Deserialize, Serialize};

/// A list of rules for performing date adjustment.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Adjuster {
    /// Actual date without adjustment.
    Actual {},
    /// Following adjustment rule.
    Following {},
}

/// Perform date adjustment according to calendar definitions, i.e. a known [`DateRoll`].
pub trait Adjustment {
    /// Adjust a date under an adjustment rule.
    fn adjust<T: DateRoll>(&self, udate: &NaiveDate, calendar: &T) -> NaiveDate;
}

impl Adjustment for Adjuster {
    fn adjust<T: DateRoll>(&self, udate: &NaiveDate, calendar: &T) -> NaiveDate {
        match self {
            Adjuster::Actual {} => *udate,
            Adjuster::Following {} => calendar.roll_forward_bus_day(udate),
        }
    }
}
