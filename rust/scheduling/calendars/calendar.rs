use chrono::prelude::*;
use chrono::{Days, Months};

use crate::error::TimelineError;

/// Create a `NaiveDate`.
///
/// Panics if date values are invalid. Use [`try_ndt`] for values that are not literals.
pub fn ndt(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("`year`, `month` `day` are invalid.")
}

/// Create a `NaiveDate`, returning an error if the date values are invalid.
pub fn try_ndt(year: i32, month: u32, day: u32) -> Result<NaiveDate, TimelineError> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or(TimelineError::InvalidDate { year, month, day })
}

/// Return the first date on or after `date` which falls on `weekday`.
///
/// This is a pure weekday scan; holidays and business days play no part.
pub fn next_weekday_on_or_after(date: &NaiveDate, weekday: Weekday) -> NaiveDate {
    let offset = (7 + weekday.num_days_from_monday() - date.weekday().num_days_from_monday()) % 7;
    *date + Days::new(u64::from(offset))
}

/// Return the first day of the calendar month following the month of `date`.
///
/// December rolls into January of the following year.
pub fn first_of_next_month(date: &NaiveDate) -> NaiveDate {
    let first = date.with_day(1).unwrap_or(*date);
    first + Months::new(1)
}

// UNIT TESTS
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_ndt() {
        assert_eq!(try_ndt(2024, 2, 29).unwrap(), ndt(2024, 2, 29));
        assert_eq!(
            try_ndt(2023, 2, 29).unwrap_err(),
            TimelineError::InvalidDate {
                year: 2023,
                month: 2,
                day: 29
            }
        );
    }

    #[test]
    fn test_next_weekday_on_or_after() {
        let options: Vec<(NaiveDate, Weekday, NaiveDate)> = vec![
            (ndt(2024, 5, 6), Weekday::Mon, ndt(2024, 5, 6)), // already Monday
            (ndt(2024, 5, 3), Weekday::Mon, ndt(2024, 5, 6)), // Friday
            (ndt(2024, 5, 7), Weekday::Mon, ndt(2024, 5, 13)), // Tuesday
            (ndt(2024, 12, 31), Weekday::Mon, ndt(2025, 1, 6)), // year crossing
            (ndt(2024, 5, 6), Weekday::Sun, ndt(2024, 5, 12)),
        ];
        for option in options {
            assert_eq!(option.2, next_weekday_on_or_after(&option.0, option.1));
        }
    }

    #[test]
    fn test_first_of_next_month() {
        assert_eq!(first_of_next_month(&ndt(2024, 1, 31)), ndt(2024, 2, 1));
        assert_eq!(first_of_next_month(&ndt(2024, 2, 1)), ndt(2024, 3, 1));
        assert_eq!(first_of_next_month(&ndt(2024, 12, 23)), ndt(2025, 1, 1));
    }
}
