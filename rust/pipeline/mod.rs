//! Project the stages of a hiring pipeline over a business day calendar.
//!
//! # Timelines
//!
//! A [`Timeline`] is the fixed, ordered catalog of [`StageName`] values, each paired with a
//! date or date range and a reported [`Duration`]. Three stages are **anchors** supplied by the
//! caller, see [`Anchors`]. Every later stage starts on the first business day after the
//! previous stage ends.
//!
//! The final stage carries the [`StartCandidates`]: Mondays on which employment may begin,
//! selected according to the [`PipelinePolicy`].
//!
//! ### Example
//! ```rust
//! # use hiring_timeline::scheduling::{Cal, ndt};
//! # use hiring_timeline::pipeline::{project, StageName};
//! let cal = Cal::try_from_name("br").unwrap();
//! let timeline = project(&cal, ndt(2024, 3, 4), ndt(2024, 3, 4), ndt(2024, 3, 5), ndt(2024, 3, 26)).unwrap();
//! let start = timeline.start_candidates().unwrap();
//! assert_eq!(start.dates(), vec![ndt(2024, 5, 6), ndt(2024, 6, 3)]);
//! assert_eq!(timeline.get(StageName::CandidateMapping).unwrap().period_label(), "01/04 to 02/04");
//! ```

mod anchors;
mod policy;
mod projector;
mod serde;
mod stage;
mod timeline;
mod window;

pub use crate::pipeline::anchors::Anchors;
pub use crate::pipeline::policy::{CandidateRule, CoverageMode, EarlyStageSpan, PipelinePolicy};
pub use crate::pipeline::projector::{project, Projector};
pub use crate::pipeline::stage::{Duration, Stage, StageName, DATE_FORMAT, NOT_APPLICABLE};
pub use crate::pipeline::timeline::Timeline;
pub use crate::pipeline::window::{start_candidates, StartCandidates, START_WEEKDAY};
