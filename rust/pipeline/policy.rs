use serde::{Deserialize, Serialize};

use crate::error::TimelineError;

/// Length of the applicant screening and candidate mapping stages.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EarlyStageSpan {
    /// Start and end on the same business day.
    SingleDay,
    /// End one business day after the start.
    #[default]
    TwoDay,
}

impl EarlyStageSpan {
    /// Business days added to the stage start to reach its end.
    pub fn span(&self) -> i32 {
        match self {
            EarlyStageSpan::SingleDay => 0,
            EarlyStageSpan::TwoDay => 1,
        }
    }

    /// Business day count reported for the stage.
    pub fn count(&self) -> u32 {
        match self {
            EarlyStageSpan::SingleDay => 1,
            EarlyStageSpan::TwoDay => 2,
        }
    }
}

/// Which start-of-employment dates to offer.
///
/// Both rules first find the Monday on or after the reference date and test it against the
/// day-of-month limit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateRule {
    /// Offer that Monday together with the first Monday of the following month, or only the
    /// latter when the Monday falls after the limit.
    #[default]
    CurrentAndNext,
    /// Offer a single date: that Monday if within the limit, else the first Monday of the
    /// following month.
    EarliestOnly,
}

/// What to do when a projected date falls outside the calendar's holiday data.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoverageMode {
    /// Log a warning and treat dates outside the data as free of holidays.
    Lenient,
    /// Fail with [`TimelineError::CalendarDataGap`]. Calendars without a coverage range never
    /// fail.
    #[default]
    Strict,
}

/// The configurable rules of a projection.
///
/// The default reproduces the most recent behaviour: two-day screening and mapping stages, a
/// 15 business day posting window and two candidate start dates.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelinePolicy {
    pub early_stage_span: EarlyStageSpan,
    pub candidates: CandidateRule,
    /// Business days from posting start to a derived posting end.
    pub posting_bus_days: i32,
    /// Span of each interview and report stage.
    pub interview_bus_days: i32,
    /// Span of the offer and admission stage.
    pub admission_bus_days: i32,
    /// Latest day of the month a current-window start Monday may fall on.
    pub start_day_limit: u32,
    pub coverage: CoverageMode,
    pub reject_unordered_anchors: bool,
}

impl Default for PipelinePolicy {
    fn default() -> Self {
        Self {
            early_stage_span: EarlyStageSpan::default(),
            candidates: CandidateRule::default(),
            posting_bus_days: 15,
            interview_bus_days: 1,
            admission_bus_days: 14,
            start_day_limit: 20,
            coverage: CoverageMode::default(),
            reject_unordered_anchors: false,
        }
    }
}

impl PipelinePolicy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_early_stage_span(mut self, span: EarlyStageSpan) -> Self {
        self.early_stage_span = span;
        self
    }

    pub fn with_candidates(mut self, rule: CandidateRule) -> Self {
        self.candidates = rule;
        self
    }

    pub fn with_posting_bus_days(mut self, days: i32) -> Self {
        self.posting_bus_days = days;
        self
    }

    pub fn with_interview_bus_days(mut self, days: i32) -> Self {
        self.interview_bus_days = days;
        self
    }

    pub fn with_admission_bus_days(mut self, days: i32) -> Self {
        self.admission_bus_days = days;
        self
    }

    pub fn with_start_day_limit(mut self, day: u32) -> Self {
        self.start_day_limit = day;
        self
    }

    pub fn with_coverage(mut self, mode: CoverageMode) -> Self {
        self.coverage = mode;
        self
    }

    pub fn with_reject_unordered_anchors(mut self, reject: bool) -> Self {
        self.reject_unordered_anchors = reject;
        self
    }

    /// Check that every span is non-negative and the day limit is usable.
    ///
    /// The limit must be at least 7 so that the first Monday of a month always qualifies.
    pub fn validate(&self) -> Result<(), TimelineError> {
        for (field, value) in [
            ("posting_bus_days", self.posting_bus_days),
            ("interview_bus_days", self.interview_bus_days),
            ("admission_bus_days", self.admission_bus_days),
        ] {
            if value < 0 {
                return Err(TimelineError::invalid_argument(format!(
                    "`{field}` must be non-negative, got {value}"
                )));
            }
        }
        if !(7..=28).contains(&self.start_day_limit) {
            return Err(TimelineError::invalid_argument(format!(
                "`start_day_limit` must be in 7..=28, got {}",
                self.start_day_limit
            )));
        }
        Ok(())
    }
}

// UNIT TESTS
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy() {
        let p = PipelinePolicy::default();
        assert_eq!(p.early_stage_span, EarlyStageSpan::TwoDay);
        assert_eq!(p.candidates, CandidateRule::CurrentAndNext);
        assert_eq!(p.posting_bus_days, 15);
        assert_eq!(p.admission_bus_days, 14);
        assert_eq!(p.start_day_limit, 20);
        assert_eq!(p.coverage, CoverageMode::Strict);
        assert!(p.validate().is_ok());
    }

    #[test]
    fn test_early_stage_span() {
        assert_eq!(EarlyStageSpan::SingleDay.span(), 0);
        assert_eq!(EarlyStageSpan::SingleDay.count(), 1);
        assert_eq!(EarlyStageSpan::TwoDay.span(), 1);
        assert_eq!(EarlyStageSpan::TwoDay.count(), 2);
    }

    #[test]
    fn test_validate_rejects_negative_span() {
        let p = PipelinePolicy::new().with_admission_bus_days(-1);
        match p.validate() {
            Err(TimelineError::InvalidArgument { reason }) => {
                assert!(reason.contains("admission_bus_days"))
            }
            other => panic!("expected InvalidArgument, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_day_limit() {
        assert!(PipelinePolicy::new().with_start_day_limit(6).validate().is_err());
        assert!(PipelinePolicy::new().with_start_day_limit(7).validate().is_ok());
        assert!(PipelinePolicy::new().with_start_day_limit(29).validate().is_err());
    }
}
