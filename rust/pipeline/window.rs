use chrono::prelude::*;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::pipeline::{CandidateRule, PipelinePolicy, DATE_FORMAT};
use crate::scheduling::{first_of_next_month, next_weekday_on_or_after};

/// Weekday on which employment may start.
pub const START_WEEKDAY: Weekday = Weekday::Mon;

/// One or two candidate start-of-employment dates, earliest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartCandidates {
    first: NaiveDate,
    second: Option<NaiveDate>,
}

impl StartCandidates {
    pub fn one(date: NaiveDate) -> Self {
        StartCandidates {
            first: date,
            second: None,
        }
    }

    pub fn two(first: NaiveDate, second: NaiveDate) -> Self {
        StartCandidates {
            first: first.min(second),
            second: Some(first.max(second)),
        }
    }

    /// The earliest candidate.
    pub fn first(&self) -> NaiveDate {
        self.first
    }

    /// The alternative candidate, if any.
    pub fn second(&self) -> Option<NaiveDate> {
        self.second
    }

    /// Every candidate, earliest first.
    pub fn dates(&self) -> Vec<NaiveDate> {
        std::iter::once(self.first).chain(self.second).collect()
    }

    /// Whether an alternative candidate is offered alongside the earliest.
    pub fn is_pair(&self) -> bool {
        self.second.is_some()
    }
}

impl fmt::Display for StartCandidates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self
            .dates()
            .iter()
            .map(|d| d.format(DATE_FORMAT).to_string())
            .join(" or ");
        f.write_str(&s)
    }
}

/// Find the start-of-employment candidates for a `reference` date.
///
/// The first Monday on or after `reference` is a current-window candidate when its day of the
/// month is at most `policy.start_day_limit`. The first Monday of the following month is
/// always a valid candidate since it falls on day 7 at the latest.
pub fn start_candidates(reference: &NaiveDate, policy: &PipelinePolicy) -> StartCandidates {
    let monday = next_weekday_on_or_after(reference, START_WEEKDAY);
    let next_month = next_weekday_on_or_after(&first_of_next_month(&monday), START_WEEKDAY);
    let in_window = monday.day() <= policy.start_day_limit;
    match (policy.candidates, in_window) {
        (CandidateRule::CurrentAndNext, true) => StartCandidates::two(monday, next_month),
        (CandidateRule::EarliestOnly, true) => StartCandidates::one(monday),
        (_, false) => StartCandidates::one(next_month),
    }
}

// UNIT TESTS
#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduling::ndt;

    #[test]
    fn test_two_candidates_when_monday_in_window() {
        let p = PipelinePolicy::default();
        // Friday 3rd May 2024 -> Monday 6th, first Monday of June is the 3rd
        let c = start_candidates(&ndt(2024, 5, 3), &p);
        assert_eq!(c.dates(), vec![ndt(2024, 5, 6), ndt(2024, 6, 3)]);
        assert!(c.is_pair());
        assert_eq!(c.to_string(), "06/05 or 03/06");
    }

    #[test]
    fn test_one_candidate_when_monday_after_limit() {
        let p = PipelinePolicy::default();
        // Monday 23rd December 2024 is past the 20th, roll into January
        let c = start_candidates(&ndt(2024, 12, 23), &p);
        assert_eq!(c.dates(), vec![ndt(2025, 1, 6)]);
        assert!(!c.is_pair());
        assert_eq!(c.to_string(), "06/01");
    }

    #[test]
    fn test_limit_is_inclusive() {
        let p = PipelinePolicy::default();
        // Monday 20th May 2024 is exactly on the limit
        let c = start_candidates(&ndt(2024, 5, 20), &p);
        assert_eq!(c.dates(), vec![ndt(2024, 5, 20), ndt(2024, 6, 3)]);

        // Tuesday 21st May 2024 -> Monday 27th, past the limit
        let c = start_candidates(&ndt(2024, 5, 21), &p);
        assert_eq!(c.dates(), vec![ndt(2024, 6, 3)]);
    }

    #[test]
    fn test_monday_search_crosses_month() {
        let p = PipelinePolicy::default();
        // Thursday 29th Feb 2024 -> Monday 4th March, next month first Monday is 1st April
        let c = start_candidates(&ndt(2024, 2, 29), &p);
        assert_eq!(c.dates(), vec![ndt(2024, 3, 4), ndt(2024, 4, 1)]);
    }

    #[test]
    fn test_monday_is_not_filtered_by_holidays() {
        let p = PipelinePolicy::default();
        // Monday 2nd Nov 2026 is a Brazilian holiday, still a candidate
        let c = start_candidates(&ndt(2026, 10, 31), &p);
        assert_eq!(c.first(), ndt(2026, 11, 2));
    }

    #[test]
    fn test_earliest_only() {
        let p = PipelinePolicy::default().with_candidates(CandidateRule::EarliestOnly);
        let c = start_candidates(&ndt(2024, 5, 3), &p);
        assert_eq!(c.dates(), vec![ndt(2024, 5, 6)]);

        let c = start_candidates(&ndt(2024, 12, 23), &p);
        assert_eq!(c.dates(), vec![ndt(2025, 1, 6)]);
    }

    #[test]
    fn test_two_orders_dates() {
        let c = StartCandidates::two(ndt(2024, 6, 3), ndt(2024, 5, 6));
        assert_eq!(c.first(), ndt(2024, 5, 6));
        assert_eq!(c.second(), Some(ndt(2024, 6, 3)));
    }
}
