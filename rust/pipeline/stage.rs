use chrono::NaiveDate;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::pipeline::StartCandidates;

/// Date format used for period and candidate labels.
pub const DATE_FORMAT: &str = "%d/%m";

/// Placeholder printed where a count does not apply.
pub const NOT_APPLICABLE: &str = "—";

/// The fixed, ordered catalog of hiring stages.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StageName {
    RcReceived,
    ProfileAlignment,
    JobPosting,
    ApplicantScreening,
    CandidateMapping,
    HrInterviews,
    ManagerReportPresentation,
    ManagerHrInterview,
    OfferAdmission,
    ProjectedStart,
}

impl StageName {
    /// Every stage, in the order a timeline contains them.
    pub const ALL: [StageName; 10] = [
        StageName::RcReceived,
        StageName::ProfileAlignment,
        StageName::JobPosting,
        StageName::ApplicantScreening,
        StageName::CandidateMapping,
        StageName::HrInterviews,
        StageName::ManagerReportPresentation,
        StageName::ManagerHrInterview,
        StageName::OfferAdmission,
        StageName::ProjectedStart,
    ];

    /// Return the display label of the stage.
    pub fn label(&self) -> &'static str {
        match self {
            StageName::RcReceived => "RC Received",
            StageName::ProfileAlignment => "Profile Alignment",
            StageName::JobPosting => "Job Posting",
            StageName::ApplicantScreening => "Applicant Screening",
            StageName::CandidateMapping => "Candidate Mapping",
            StageName::HrInterviews => "HR Interviews",
            StageName::ManagerReportPresentation => "Manager Report Presentation",
            StageName::ManagerHrInterview => "Manager + HR Interview",
            StageName::OfferAdmission => "Offer + Admission Process",
            StageName::ProjectedStart => "Projected Start of Employment",
        }
    }

    /// Whether the stage dates are supplied by the caller rather than derived.
    pub fn is_anchor(&self) -> bool {
        matches!(
            self,
            StageName::RcReceived | StageName::ProfileAlignment | StageName::JobPosting
        )
    }
}

impl fmt::Display for StageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The duration column of a stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Duration {
    /// A number of business days.
    Count(u32),
    /// Alternative business day counts, informative only.
    Composite(Vec<u32>),
    /// No count applies.
    NotApplicable,
    /// Candidate start-of-employment dates.
    Candidates(StartCandidates),
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Duration::Count(n) => write!(f, "{n}"),
            Duration::Composite(counts) => write!(f, "{}", counts.iter().join(" / ")),
            Duration::NotApplicable => f.write_str(NOT_APPLICABLE),
            Duration::Candidates(c) => write!(f, "{c}"),
        }
    }
}

/// One row of a hiring timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stage {
    pub name: StageName,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub duration: Duration,
}

impl Stage {
    pub fn new(name: StageName, start: NaiveDate, end: NaiveDate, duration: Duration) -> Self {
        Stage {
            name,
            start,
            end,
            duration,
        }
    }

    /// Whether the stage starts and ends on the same day.
    pub fn is_single_day(&self) -> bool {
        self.start == self.end
    }

    /// Return the period column: a date, a date range, or the candidate dates.
    pub fn period_label(&self) -> String {
        match &self.duration {
            Duration::Candidates(c) => c.to_string(),
            _ if self.is_single_day() => self.start.format(DATE_FORMAT).to_string(),
            _ => format!(
                "{} to {}",
                self.start.format(DATE_FORMAT),
                self.end.format(DATE_FORMAT)
            ),
        }
    }

    /// Return the business days column, which is a placeholder for the candidate dates stage.
    pub fn bus_days_label(&self) -> String {
        match &self.duration {
            Duration::Candidates(_) => NOT_APPLICABLE.to_string(),
            d => d.to_string(),
        }
    }
}

// UNIT TESTS
#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduling::ndt;

    #[test]
    fn test_catalog_order() {
        let mut sorted = StageName::ALL;
        sorted.sort();
        assert_eq!(sorted, StageName::ALL);
        assert_eq!(StageName::ALL.iter().filter(|s| s.is_anchor()).count(), 3);
    }

    #[test]
    fn test_duration_display() {
        assert_eq!(Duration::Count(2).to_string(), "2");
        assert_eq!(Duration::Composite(vec![10, 15]).to_string(), "10 / 15");
        assert_eq!(Duration::NotApplicable.to_string(), "—");
        let c = StartCandidates::two(ndt(2024, 5, 6), ndt(2024, 6, 3));
        assert_eq!(Duration::Candidates(c).to_string(), "06/05 or 03/06");
    }

    #[test]
    fn test_period_label() {
        let single = Stage::new(
            StageName::RcReceived,
            ndt(2024, 3, 4),
            ndt(2024, 3, 4),
            Duration::NotApplicable,
        );
        assert_eq!(single.period_label(), "04/03");
        assert_eq!(single.bus_days_label(), "—");

        let range = Stage::new(
            StageName::HrInterviews,
            ndt(2024, 4, 3),
            ndt(2024, 4, 4),
            Duration::Count(2),
        );
        assert_eq!(range.period_label(), "03/04 to 04/04");
        assert_eq!(range.bus_days_label(), "2");

        let start = Stage::new(
            StageName::ProjectedStart,
            ndt(2025, 1, 6),
            ndt(2025, 1, 6),
            Duration::Candidates(StartCandidates::one(ndt(2025, 1, 6))),
        );
        assert_eq!(start.period_label(), "06/01");
        assert_eq!(start.bus_days_label(), "—");
    }
}
