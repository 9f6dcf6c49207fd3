use chrono::prelude::*;
use chrono::Days;
use itertools::Itertools;

use crate::error::TimelineError;
use crate::scheduling::{Adjuster, Adjustment};

/// Simple date adjustment defining business days, holidays and rolling.
pub trait DateRoll {
    /// Returns whether the date is part of the general working week.
    fn is_weekday(&self, date: &NaiveDate) -> bool;

    /// Returns whether the date is a specific holiday excluded from the regular working week.
    fn is_holiday(&self, date: &NaiveDate) -> bool;

    /// Returns the first and last year described by the holiday data, if known.
    ///
    /// Calendars which do not expose a coverage range return `None` and every date is
    /// considered covered.
    fn coverage(&self) -> Option<(i32, i32)> {
        None
    }

    /// Returns whether the holiday data describes the year of `date`.
    fn covers(&self, date: &NaiveDate) -> bool {
        match self.coverage() {
            None => true,
            Some((first, last)) => (first..=last).contains(&date.year()),
        }
    }

    /// Return an error if the holiday data does not describe the year of `date`.
    ///
    /// Outside the coverage range [`DateRoll::is_holiday`] returns `false`, so holidays there
    /// are silently treated as business days.
    fn check_coverage(&self, date: &NaiveDate) -> Result<(), TimelineError> {
        match self.coverage() {
            Some((first_year, last_year)) if !self.covers(date) => {
                Err(TimelineError::CalendarDataGap {
                    date: *date,
                    first_year,
                    last_year,
                })
            }
            _ => Ok(()),
        }
    }

    /// Returns whether the date is a business day, i.e. part of the working week and not a holiday.
    fn is_bus_day(&self, date: &NaiveDate) -> bool {
        self.is_weekday(date) && !self.is_holiday(date)
    }

    /// Return the `date`, if a business day, or get the next business date after `date`.
    fn roll_forward_bus_day(&self, date: &NaiveDate) -> NaiveDate {
        let mut new_date = *date;
        while !self.is_bus_day(&new_date) {
            new_date = new_date + Days::new(1);
        }
        new_date
    }

    /// Add a given number of calendar days to a `date` with the result adjusted under the
    /// given [`Adjuster`].
    fn add_cal_days(&self, date: &NaiveDate, days: i32, adjuster: &Adjuster) -> NaiveDate
    where
        Self: Sized,
    {
        let new_date = if days < 0 {
            *date - Days::new(u64::from(days.unsigned_abs()))
        } else {
            *date + Days::new(u64::from(days.unsigned_abs()))
        };
        adjuster.adjust(&new_date, self)
    }

    /// Add a given number of business days to a `date`.
    ///
    /// Calendar days are scanned forward from the day after `date`; every business day met
    /// counts towards `days` and the scan stops on the last one counted. The input `date` is
    /// never counted and need not be a business day. Zero `days` returns `date` unchanged.
    ///
    /// A negative number of `days` is an error.
    fn add_bus_days(&self, date: &NaiveDate, days: i32) -> Result<NaiveDate, TimelineError> {
        if days < 0 {
            return Err(TimelineError::invalid_argument(format!(
                "cannot add a negative number of business days, got {days}"
            )));
        }
        let mut new_date = *date;
        let mut counter: i32 = 0;
        while counter < days {
            new_date = new_date + Days::new(1);
            if self.is_bus_day(&new_date) {
                counter += 1;
            }
        }
        Ok(new_date)
    }

    /// Count the business days strictly after `start` up to and including `end`.
    ///
    /// This is the inverse of [`DateRoll::add_bus_days`] when `end` is a business day.
    fn bus_days_between(&self, start: &NaiveDate, end: &NaiveDate) -> Result<u32, TimelineError> {
        if end < start {
            return Err(TimelineError::invalid_argument(format!(
                "`end` ({end}) must not precede `start` ({start})"
            )));
        }
        Ok(start
            .iter_days()
            .skip(1)
            .take_while(|d| d <= end)
            .filter(|d| self.is_bus_day(d))
            .count() as u32)
    }

    /// Print a representation of the month of the object.
    ///
    /// # Panics
    /// If `month` is not in 1..=12 or the first of the month is not a representable date.
    fn print_month(&self, year: i32, month: u8) -> String {
        let month_obj = Month::try_from(month).expect("`month` must be in 1..=12.");
        let mut output = format!("{:>15} {}\n", month_obj.name(), year);
        output += "Su Mo Tu We Th Fr Sa\n";

        let days: u8 = month_obj.num_days(year).unwrap_or(0);
        let weekday = NaiveDate::from_ymd_opt(year, month.into(), 1)
            .expect("`year`, `month` are invalid.")
            .weekday()
            .num_days_from_monday();
        let idx_start: u32 = (weekday + 1) % 7;

        let mut arr: [String; 42] = std::array::from_fn(|_| String::from("  "));
        for i in 0..days {
            let date = NaiveDate::from_ymd_opt(year, month.into(), (i + 1).into())
                .expect("`year`, `month` `day` are invalid.");
            let s: String = {
                if self.is_bus_day(&date) {
                    format!("{:>2}", i + 1)
                } else if !self.is_weekday(&date) {
                    " .".to_string()
                } else {
                    " *".to_string()
                }
            };
            let index: u32 = i as u32 + idx_start;
            arr[index as usize] = s;
        }

        for row in arr.chunks(7) {
            output += &format!("{}\n", row.iter().join(" "));
        }
        output
    }

    /// Print a representation of a year of the object.
    fn print_year(&self, year: i32) -> String {
        let data: Vec<Vec<String>> = (1..13)
            .map(|i| {
                self.print_month(year, i)
                    .lines()
                    .map(|s| s.to_string())
                    .collect()
            })
            .collect();
        let mut output = "\n".to_string();
        for quarter in 0..3 {
            for i in 0..8 {
                output += &format!(
                    "{}   {}   {}   {}\n",
                    data[quarter][i],
                    data[quarter + 3][i],
                    data[quarter + 6][i],
                    data[quarter + 9][i]
                );
            }
        }
        output += "Legend:\n";
        output += "'1-31': Business day                    '.': Non-business weekend\n";
        output += "   '*': Holiday\n";
        output
    }
}
