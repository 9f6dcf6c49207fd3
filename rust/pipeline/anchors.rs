use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::TimelineError;
use crate::pipeline::PipelinePolicy;
use crate::scheduling::DateRoll;

/// The externally supplied dates a timeline is projected from.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Anchors {
    /// RC (request) received date.
    pub rc: NaiveDate,
    /// Profile alignment date.
    pub alignment: NaiveDate,
    /// First day of the job posting window.
    pub posting_start: NaiveDate,
    /// Last day of the job posting window.
    pub posting_end: NaiveDate,
}

impl Anchors {
    pub fn new(
        rc: NaiveDate,
        alignment: NaiveDate,
        posting_start: NaiveDate,
        posting_end: NaiveDate,
    ) -> Self {
        Anchors {
            rc,
            alignment,
            posting_start,
            posting_end,
        }
    }

    /// Create anchors, deriving the posting end when it is not given.
    ///
    /// A derived posting end is `policy.posting_bus_days` business days after `posting_start`.
    pub fn resolve<T: DateRoll>(
        calendar: &T,
        policy: &PipelinePolicy,
        rc: NaiveDate,
        alignment: NaiveDate,
        posting_start: NaiveDate,
        posting_end: Option<NaiveDate>,
    ) -> Result<Self, TimelineError> {
        let posting_end = match posting_end {
            Some(date) => date,
            None => calendar.add_bus_days(&posting_start, policy.posting_bus_days)?,
        };
        Ok(Anchors::new(rc, alignment, posting_start, posting_end))
    }

    /// Return the first pair of consecutive anchors which are out of chronological order.
    pub(crate) fn first_unordered(&self) -> Option<TimelineError> {
        let sequence = [
            ("rc", self.rc),
            ("alignment", self.alignment),
            ("posting_start", self.posting_start),
            ("posting_end", self.posting_end),
        ];
        sequence
            .windows(2)
            .find(|w| w[1].1 < w[0].1)
            .map(|w| TimelineError::UnorderedAnchors {
                earlier: w[0].0,
                earlier_date: w[0].1,
                later: w[1].0,
                later_date: w[1].1,
            })
    }
}
