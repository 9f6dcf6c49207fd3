use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::error::TimelineError;
use crate::pipeline::{
    start_candidates, Anchors, CoverageMode, Duration, PipelinePolicy, Stage, StageName,
    Timeline,
};
use crate::scheduling::{Adjuster, DateRoll};

/// Business day count reported for the job posting stage.
const POSTING_COUNT: u32 = 7;

/// Alternative business day counts reported for the offer and admission stage.
const ADMISSION_COUNTS: [u32; 2] = [10, 15];

/// Projects hiring timelines over a business day calendar.
///
/// The calendar is borrowed, so a single calendar loaded at start up may serve any number of
/// projectors, including from different threads.
#[derive(Debug, Clone)]
pub struct Projector<'a, T: DateRoll> {
    calendar: &'a T,
    policy: PipelinePolicy,
}

impl<'a, T: DateRoll> Projector<'a, T> {
    pub fn new(calendar: &'a T, policy: PipelinePolicy) -> Self {
        Projector { calendar, policy }
    }

    pub fn calendar(&self) -> &'a T {
        self.calendar
    }

    pub fn policy(&self) -> &PipelinePolicy {
        &self.policy
    }

    /// Build the ordered stages for a set of `anchors`.
    ///
    /// The first three stages take their dates from the anchors. Every later stage starts on
    /// the first business day after the previous stage ends and spans a fixed number of
    /// business days. The final stage holds the candidate start-of-employment dates.
    ///
    /// # Examples
    /// ```rust
    /// # use hiring_timeline::scheduling::{Cal, ndt};
    /// # use hiring_timeline::pipeline::{Anchors, PipelinePolicy, Projector, StageName};
    /// let cal = Cal::try_from_name("br").unwrap();
    /// let projector = Projector::new(&cal, PipelinePolicy::default());
    /// let anchors = Anchors::new(ndt(2024, 3, 4), ndt(2024, 3, 4), ndt(2024, 3, 5), ndt(2024, 3, 26));
    /// let timeline = projector.project(&anchors).unwrap();
    /// assert_eq!(timeline.get(StageName::ApplicantScreening).unwrap().start, ndt(2024, 3, 27));
    /// ```
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn project(&self, anchors: &Anchors) -> Result<Timeline, TimelineError> {
        self.policy.validate()?;
        if let Some(err) = anchors.first_unordered() {
            if self.policy.reject_unordered_anchors {
                return Err(err);
            }
            warn!(%err, "anchors are out of order, projecting forward regardless");
        }

        let mut stages = Vec::with_capacity(StageName::ALL.len());
        stages.push(Stage::new(
            StageName::RcReceived,
            anchors.rc,
            anchors.rc,
            Duration::NotApplicable,
        ));
        stages.push(Stage::new(
            StageName::ProfileAlignment,
            anchors.alignment,
            anchors.alignment,
            Duration::Count(1),
        ));
        stages.push(Stage::new(
            StageName::JobPosting,
            anchors.posting_start,
            anchors.posting_end,
            Duration::Count(POSTING_COUNT),
        ));

        let mut end = anchors.posting_end;
        for (name, span, duration) in self.span_stages() {
            let start = self.next_start(&end);
            end = self.calendar.add_bus_days(&start, span)?;
            debug!(stage = %name, %start, %end, "projected stage");
            stages.push(Stage::new(name, start, end, duration));
        }

        let reference = self.next_start(&end);
        let candidates = start_candidates(&reference, &self.policy);
        debug!(%reference, candidates = %candidates, "projected start of employment");
        let first = candidates.first();
        stages.push(Stage::new(
            StageName::ProjectedStart,
            first,
            first,
            Duration::Candidates(candidates),
        ));

        let timeline = Timeline::new(stages);
        self.check_coverage(&timeline)?;
        info!(
            n_stages = timeline.len(),
            start = %first,
            "timeline projected"
        );
        Ok(timeline)
    }

    /// The derived stages in catalog order, with their span and reported duration.
    fn span_stages(&self) -> [(StageName, i32, Duration); 6] {
        let early = self.policy.early_stage_span;
        let interview = self.policy.interview_bus_days;
        [
            (
                StageName::ApplicantScreening,
                early.span(),
                Duration::Count(early.count()),
            ),
            (
                StageName::CandidateMapping,
                early.span(),
                Duration::Count(early.count()),
            ),
            (StageName::HrInterviews, interview, span_count(interview)),
            (
                StageName::ManagerReportPresentation,
                interview,
                span_count(interview),
            ),
            (
                StageName::ManagerHrInterview,
                interview,
                span_count(interview),
            ),
            (
                StageName::OfferAdmission,
                self.policy.admission_bus_days,
                Duration::Composite(ADMISSION_COUNTS.to_vec()),
            ),
        ]
    }

    /// The first business day after `end`.
    fn next_start(&self, end: &NaiveDate) -> NaiveDate {
        self.calendar.add_cal_days(end, 1, &Adjuster::Following {})
    }

    fn check_coverage(&self, timeline: &Timeline) -> Result<(), TimelineError> {
        let Some((lo, hi)) = timeline.date_bounds() else {
            return Ok(());
        };
        for date in [lo, hi] {
            if let Err(err) = self.calendar.check_coverage(&date) {
                match self.policy.coverage {
                    CoverageMode::Strict => return Err(err),
                    CoverageMode::Lenient => {
                        warn!(%err, "holidays outside the calendar data are ignored")
                    }
                }
            }
        }
        Ok(())
    }
}

/// Reported duration of a stage spanning `span` business days after its start.
fn span_count(span: i32) -> Duration {
    Duration::Count(u32::try_from(span).map_or(0, |s| s + 1))
}

/// Project a timeline under the default [`PipelinePolicy`].
pub fn project<T: DateRoll>(
    calendar: &T,
    rc: NaiveDate,
    alignment: NaiveDate,
    posting_start: NaiveDate,
    posting_end: NaiveDate,
) -> Result<Timeline, TimelineError> {
    Projector::new(calendar, PipelinePolicy::default()).project(&Anchors::new(
        rc,
        alignment,
        posting_start,
        posting_end,
    ))
}
