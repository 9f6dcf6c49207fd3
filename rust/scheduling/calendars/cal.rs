use chrono::prelude::*;
use chrono::Weekday;
use indexmap::set::IndexSet;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::TimelineError;
use crate::scheduling::calendars::named::{
    get_coverage_by_name, get_holidays_by_name, get_weekmask_by_name,
};
use crate::scheduling::DateRoll;

/// A business day calendar with a singular list of holidays.
///
/// A business day calendar is formed of 3 components:
///
/// - `week_mask`: which defines the days of the week that are not general business days. In Western culture these
///   are typically `[5, 6]` for Saturday and Sunday.
/// - `holidays`: which defines specific dates that may be exceptions to the general working week, and cannot be
///   business days.
/// - `coverage`: the first and last year the `holidays` describe, if known. Dates outside this range are
///   never holidays, which [`DateRoll::check_coverage`] can detect.
///
/// The calendar is read-only once built and may be shared freely between threads.
#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
pub struct Cal {
    pub(crate) holidays: IndexSet<NaiveDate>,
    pub(crate) week_mask: HashSet<Weekday>,
    #[serde(default)]
    pub(crate) coverage: Option<(i32, i32)>,
}

impl Cal {
    /// Create a calendar.
    ///
    /// `holidays` provide a vector of dates that cannot be business days. `week_mask` is a vector of days
    /// (0=Mon,.., 6=Sun) that are excluded from the working week.
    ///
    /// Panics if `week_mask` contains a value greater than 6; see [`Cal::try_new`].
    pub fn new(holidays: Vec<NaiveDate>, week_mask: Vec<u8>) -> Self {
        Self::try_new(holidays, week_mask).expect("`week_mask` values must be in 0..=6.")
    }

    /// Create a calendar, returning an error if `week_mask` is invalid.
    pub fn try_new(holidays: Vec<NaiveDate>, week_mask: Vec<u8>) -> Result<Self, TimelineError> {
        let week_mask = week_mask
            .into_iter()
            .map(|v| {
                Weekday::try_from(v).map_err(|_| {
                    TimelineError::invalid_argument(format!(
                        "`week_mask` values must be in 0..=6, got {v}"
                    ))
                })
            })
            .collect::<Result<HashSet<Weekday>, TimelineError>>()?;
        Ok(Cal {
            holidays: IndexSet::from_iter(holidays),
            week_mask,
            coverage: None,
        })
    }

    /// Create a calendar from the static data of a pre-existing named calendar.
    ///
    /// # Examples
    /// ```rust
    /// # use hiring_timeline::scheduling::{Cal, ndt, DateRoll};
    /// let cal = Cal::try_from_name("br").unwrap();
    /// assert!(cal.is_holiday(&ndt(2024, 4, 21))); // Tiradentes
    /// assert_eq!(cal.coverage(), Some((2020, 2035)));
    /// ```
    pub fn try_from_name(name: &str) -> Result<Cal, TimelineError> {
        let name_ = name.trim().to_lowercase();
        let mut cal = Cal::try_new(
            get_holidays_by_name(&name_)?,
            get_weekmask_by_name(&name_)?,
        )?;
        cal.coverage = get_coverage_by_name(&name_)?;
        Ok(cal)
    }

    /// Return the calendar with its holiday data declared to describe the years
    /// `first_year..=last_year`.
    pub fn with_coverage(mut self, first_year: i32, last_year: i32) -> Self {
        self.coverage = Some((first_year.min(last_year), first_year.max(last_year)));
        self
    }

    /// Return the calendar extended with additional holidays.
    ///
    /// The coverage range is left unchanged.
    pub fn with_holidays<I>(mut self, holidays: I) -> Self
    where
        I: IntoIterator<Item = NaiveDate>,
    {
        self.holidays.extend(holidays);
        self
    }

    /// Returns the holidays of the calendar in insertion order.
    pub fn holidays(&self) -> impl Iterator<Item = &NaiveDate> {
        self.holidays.iter()
    }
}

impl DateRoll for Cal {
    fn is_weekday(&self, date: &NaiveDate) -> bool {
        !self.week_mask.contains(&date.weekday())
    }

    fn is_holiday(&self, date: &NaiveDate) -> bool {
        self.holidays.contains(date)
    }

    fn coverage(&self) -> Option<(i32, i32)> {
        self.coverage
    }
}

// UNIT TESTS
#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduling::ndt;

    fn fixture_hol_cal() -> Cal {
        let hols = vec![ndt(2015, 9, 5), ndt(2015, 9, 7)]; // Saturday and Monday
        Cal::new(hols, vec![5, 6])
    }

    #[test]
    fn test_is_holiday() {
        let cal = fixture_hol_cal();
        assert!(cal.is_holiday(&ndt(2015, 9, 7))); // In hol list
        assert!(!cal.is_holiday(&ndt(2015, 9, 10))); // Not in hol list
        assert!(!cal.is_holiday(&ndt(2024, 1, 6))); // Not in hol list
    }

    #[test]
    fn test_is_weekday() {
        let cal = fixture_hol_cal();
        assert!(cal.is_weekday(&ndt(2015, 9, 7))); // Monday
        assert!(cal.is_weekday(&ndt(2015, 9, 10))); //Thursday
        assert!(!cal.is_weekday(&ndt(2024, 1, 6))); // Saturday
        assert!(!cal.is_weekday(&ndt(2024, 1, 7))); // Sunday
    }

    #[test]
    fn test_try_new_bad_weekmask() {
        assert!(Cal::try_new(vec![], vec![5, 7]).is_err());
    }

    #[test]
    fn test_try_from_name() {
        let cal = Cal::try_from_name("BR").unwrap();
        assert!(!cal.is_bus_day(&ndt(2024, 11, 20))); // Black Consciousness Day
        assert!(cal.is_bus_day(&ndt(2023, 11, 20))); // not yet a national holiday
        assert_eq!(cal.coverage(), Some((2020, 2035)));

        let cal = Cal::try_from_name("bus").unwrap();
        assert!(cal.is_bus_day(&ndt(2024, 11, 20)));
        assert_eq!(cal.coverage(), None);

        assert_eq!(
            Cal::try_from_name("xyz").unwrap_err(),
            TimelineError::UnknownCalendar {
                name: "xyz".to_string()
            }
        );
    }

    #[test]
    fn test_with_holidays() {
        let cal = fixture_hol_cal().with_holidays(vec![ndt(2015, 9, 8)]);
        assert!(cal.is_holiday(&ndt(2015, 9, 8)));
        assert_eq!(cal.holidays().count(), 3);
    }

    #[test]
    fn test_with_coverage_orders_years() {
        let cal = fixture_hol_cal().with_coverage(2016, 2014);
        assert_eq!(cal.coverage(), Some((2014, 2016)));
    }

    #[test]
    fn test_cal_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<Cal>();
    }
}
