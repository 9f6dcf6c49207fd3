use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::pipeline::{Duration, Stage, StageName, StartCandidates};

/// The ordered stages produced by one projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    stages: Vec<Stage>,
}

impl Timeline {
    pub(crate) fn new(stages: Vec<Stage>) -> Self {
        Timeline { stages }
    }

    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Stage> {
        self.stages.iter()
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Return the stage with the given name.
    pub fn get(&self, name: StageName) -> Option<&Stage> {
        self.stages.iter().find(|s| s.name == name)
    }

    /// Return the candidate start-of-employment dates.
    pub fn start_candidates(&self) -> Option<&StartCandidates> {
        self.stages.iter().find_map(|s| match &s.duration {
            Duration::Candidates(c) => Some(c),
            _ => None,
        })
    }

    /// Return the earliest and latest dates mentioned anywhere in the timeline.
    pub fn date_bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        let dates = self.stages.iter().flat_map(|s| {
            let mut v = vec![s.start, s.end];
            if let Duration::Candidates(c) = &s.duration {
                v.extend(c.dates());
            }
            v
        });
        dates.fold(None, |acc, d| match acc {
            None => Some((d, d)),
            Some((lo, hi)) => Some((lo.min(d), hi.max(d))),
        })
    }
}

impl<'a> IntoIterator for &'a Timeline {
    type Item = &'a Stage;
    type IntoIter = std::slice::Iter<'a, Stage>;

    fn into_iter(self) -> Self::IntoIter {
        self.stages.iter()
    }
}

// UNIT TESTS
#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduling::ndt;

    fn fixture_timeline() -> Timeline {
        Timeline::new(vec![
            Stage::new(
                StageName::RcReceived,
                ndt(2024, 3, 4),
                ndt(2024, 3, 4),
                Duration::NotApplicable,
            ),
            Stage::new(
                StageName::ProjectedStart,
                ndt(2024, 5, 6),
                ndt(2024, 5, 6),
                Duration::Candidates(StartCandidates::two(ndt(2024, 5, 6), ndt(2024, 6, 3))),
            ),
        ])
    }

    #[test]
    fn test_get() {
        let t = fixture_timeline();
        assert_eq!(t.get(StageName::RcReceived).unwrap().start, ndt(2024, 3, 4));
        assert!(t.get(StageName::JobPosting).is_none());
    }

    #[test]
    fn test_date_bounds_include_candidates() {
        let t = fixture_timeline();
        assert_eq!(t.date_bounds(), Some((ndt(2024, 3, 4), ndt(2024, 6, 3))));
        assert_eq!(Timeline::new(vec![]).date_bounds(), None);
    }

    #[test]
    fn test_start_candidates() {
        let t = fixture_timeline();
        assert!(t.start_candidates().unwrap().is_pair());
        assert_eq!((&t).into_iter().count(), 2);
    }
}
