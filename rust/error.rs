//! Error types shared by the calendar and the pipeline projector.

use chrono::NaiveDate;

/// Error type for all fallible operations in the crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TimelineError {
    /// An argument violates the contract of the called operation, e.g. a negative number of
    /// business days.
    #[error("invalid argument: {reason}")]
    InvalidArgument {
        /// Human readable description of the violated contract.
        reason: String,
    },

    /// A date lies outside the years described by the holiday data of a calendar.
    #[error("no holiday data for {date}: calendar covers {first_year}..={last_year}")]
    CalendarDataGap {
        /// The date that could not be checked against holiday data.
        date: NaiveDate,
        /// First year covered by the calendar.
        first_year: i32,
        /// Last year covered by the calendar.
        last_year: i32,
    },

    /// A named calendar does not exist.
    #[error("'{name}' is not found in list of existing calendars")]
    UnknownCalendar {
        /// The requested name.
        name: String,
    },

    /// A year, month and day triple does not form a valid date.
    #[error("invalid date: {year}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },

    /// Anchor dates were supplied out of chronological order and the policy rejects this.
    #[error("anchor `{later}` ({later_date}) precedes anchor `{earlier}` ({earlier_date})")]
    UnorderedAnchors {
        earlier: &'static str,
        earlier_date: NaiveDate,
        later: &'static str,
        later_date: NaiveDate,
    },
}

impl TimelineError {
    pub(crate) fn invalid_argument(reason: impl Into<String>) -> Self {
        TimelineError::InvalidArgument {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_message() {
        let err = TimelineError::invalid_argument("`days` must be non-negative, got -1");
        assert_eq!(
            err.to_string(),
            "invalid argument: `days` must be non-negative, got -1"
        );
    }

    #[test]
    fn test_data_gap_message() {
        let err = TimelineError::CalendarDataGap {
            date: NaiveDate::from_ymd_opt(2040, 1, 2).unwrap(),
            first_year: 2020,
            last_year: 2035,
        };
        assert_eq!(
            err.to_string(),
            "no holiday data for 2040-01-02: calendar covers 2020..=2035"
        );
    }

    #[test]
    fn test_invalid_date_message() {
        let err = TimelineError::InvalidDate {
            year: 2023,
            month: 2,
            day: 29,
        };
        assert_eq!(err.to_string(), "invalid date: 2023-02-29");
    }

    #[test]
    fn test_error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync + std::error::Error>() {}
        assert_impl::<TimelineError>();
    }
}
